//! Command-line entry point: interactive chat, one-shot questions, and
//! profile validation.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use saba::assistant::Assistant;
use saba::config::SabaConfig;
use saba::corpus::Profile;
use saba::error::{Result, SabaError};
use saba::types::{Category, Reply};

#[derive(Parser)]
#[command(name = "saba")]
#[command(
    about = "Saba - Portfolio Knowledge Assistant\nFuzzy retrieval over projects, skills, experience, testimonials, and bio"
)]
#[command(version)]
struct Cli {
    /// Path to a profile JSON file (defaults to the embedded profile)
    #[arg(long, global = true, value_name = "FILE")]
    profile: Option<PathBuf>,

    /// Path to a config YAML file (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session (the default)
    Chat,
    /// Ask a single question and print the reply
    Ask {
        /// Question text (space-separated words)
        #[arg(required = true)]
        question: Vec<String>,
        /// Print the reply as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// Validate the profile and print corpus statistics
    Check,
}

fn main() {
    saba::observability::init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {}", style("error:").red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = SabaConfig::load_or_default(cli.config.as_deref())?;
    let profile = Profile::load_or_embedded(cli.profile.as_deref())?;

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => chat(profile, config),
        Commands::Ask { question, json } => ask(profile, config, &question.join(" "), json),
        Commands::Check => check(&profile),
    }
}

// ---------------------------------------------------------------------------
// Subcommands
// ---------------------------------------------------------------------------

fn chat(profile: Profile, config: SabaConfig) -> Result<()> {
    let mut assistant = Assistant::new(profile, config);
    let theme = ColorfulTheme::default();

    println!("{}", style("Saba - portfolio assistant").cyan().bold());
    println!("Ask about projects, skills, experience, testimonials, or the person behind them.");
    println!(
        "Type {} to clear the session, {} to leave.\n",
        style("/reset").yellow(),
        style("exit").yellow()
    );

    loop {
        let line: String = Input::with_theme(&theme)
            .with_prompt("you")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| SabaError::Other(e.to_string()))?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            println!("{}", style("Bye! 👋").cyan());
            return Ok(());
        }
        if trimmed == "/reset" {
            assistant.reset();
            println!("{}\n", style("Session cleared.").yellow());
            continue;
        }

        match assistant.respond(trimmed) {
            Ok(reply) => print_reply(&reply),
            Err(e) if e.is_recoverable() => {
                println!("{}\n", style("Say a little more and I can help.").yellow());
                tracing::debug!("turn skipped: {}", e);
            }
            Err(e) => return Err(e),
        }
    }
}

fn ask(profile: Profile, config: SabaConfig, question: &str, json: bool) -> Result<()> {
    let mut assistant = Assistant::new(profile, config);
    let reply = assistant.respond(question)?;

    if json {
        let rendered = serde_json::to_string_pretty(&reply)
            .map_err(|e| SabaError::Other(e.to_string()))?;
        println!("{rendered}");
    } else {
        print_reply(&reply);
    }
    Ok(())
}

fn check(profile: &Profile) -> Result<()> {
    println!("{}", style("Profile check").cyan().bold());
    for &category in Category::ALL.iter() {
        println!("  {:<12} {} records", category, profile.records(category).len());
    }

    let warnings = profile.validate();
    if warnings.is_empty() {
        println!("{}", style("No issues found.").green());
    } else {
        for warning in &warnings {
            println!("  {} {}", style("warning:").yellow(), warning);
        }
        println!("{} warning(s).", warnings.len());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn print_reply(reply: &Reply) {
    println!("\n{}\n", reply.text);

    for link in &reply.links {
        println!("  {} {}", style(&link.text).cyan(), style(&link.url).underlined());
    }
    if !reply.links.is_empty() {
        println!();
    }

    if !reply.follow_ups.is_empty() {
        println!("{}", style("You could ask:").dim());
        for follow_up in &reply.follow_ups {
            println!("  {} {}", style("•").dim(), style(follow_up).dim());
        }
        println!();
    }
}
