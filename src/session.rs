//! Session state: the message transcript and the single-slot topic context.
//!
//! A session belongs to exactly one conversation. Nothing here is shared;
//! concurrent sessions each own an independent copy.

use crate::types::{Message, Record, Reply};

/// The last winning record, kept so the next query can be biased toward the
/// ongoing topic. Replaced wholesale every turn; a turn without a winner
/// clears it rather than letting a stale topic drag future queries around.
#[derive(Debug, Clone, Default)]
pub struct ConversationContext {
    topic: Option<Record>,
}

impl ConversationContext {
    pub fn topic(&self) -> Option<&Record> {
        self.topic.as_ref()
    }

    /// Identifying text ("Shopden", "React", "Engineer at Nimbus Labs")
    /// appended to the next fused query.
    pub fn bias(&self) -> Option<String> {
        self.topic
            .as_ref()
            .map(|record| record.display_name())
            .filter(|name| !name.is_empty())
    }
}

/// One conversation: ordered transcript plus topic context.
#[derive(Debug, Default)]
pub struct Session {
    messages: Vec<Message>,
    context: ConversationContext,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full transcript, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    pub fn record_user(&mut self, text: &str) {
        self.messages.push(Message::user(text));
    }

    pub fn record_reply(&mut self, reply: &Reply) {
        self.messages.push(Message::assistant(reply));
    }

    /// Replace the topic slot wholesale. `None` on a miss.
    pub fn set_topic(&mut self, topic: Option<Record>) {
        self.context.topic = topic;
    }

    /// Clear the transcript and the topic.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.context = ConversationContext::default();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Bio, Experience, Project, Role, Skill};

    fn project(title: &str) -> Record {
        Record::Project(Project {
            title: title.into(),
            description: "d".into(),
            ..Default::default()
        })
    }

    #[test]
    fn new_session_is_blank() {
        let session = Session::new();
        assert!(session.messages().is_empty());
        assert!(session.context().topic().is_none());
        assert!(session.context().bias().is_none());
    }

    #[test]
    fn transcript_keeps_order_and_roles() {
        let mut session = Session::new();
        session.record_user("what have you built");
        session.record_reply(&Reply {
            text: "✨ Shopden".into(),
            ..Default::default()
        });

        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].text, "✨ Shopden");
    }

    #[test]
    fn bias_uses_identifying_fields() {
        let mut session = Session::new();

        session.set_topic(Some(project("Shopden")));
        assert_eq!(session.context().bias().as_deref(), Some("Shopden"));

        session.set_topic(Some(Record::Skill(Skill {
            name: "React".into(),
            ..Default::default()
        })));
        assert_eq!(session.context().bias().as_deref(), Some("React"));

        session.set_topic(Some(Record::Experience(Experience {
            role: "Engineer".into(),
            company: "Nimbus Labs".into(),
            ..Default::default()
        })));
        assert_eq!(
            session.context().bias().as_deref(),
            Some("Engineer at Nimbus Labs")
        );
    }

    #[test]
    fn topic_is_replaced_wholesale() {
        let mut session = Session::new();
        session.set_topic(Some(project("Shopden")));
        session.set_topic(Some(project("Lumo Health")));
        assert_eq!(session.context().bias().as_deref(), Some("Lumo Health"));

        session.set_topic(None);
        assert!(session.context().topic().is_none());
    }

    #[test]
    fn content_free_topic_gives_no_bias() {
        let mut session = Session::new();
        session.set_topic(Some(Record::Bio(Bio::default())));
        assert!(session.context().bias().is_none());
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = Session::new();
        session.record_user("hello");
        session.set_topic(Some(project("Shopden")));

        session.reset();
        assert!(session.messages().is_empty());
        assert!(session.context().topic().is_none());
    }
}
