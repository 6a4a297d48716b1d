use chrono::{DateTime, FixedOffset, Local};
use serde::Serialize;
use thiserror::Error;

use crate::message::{ChatMessage, MessageId, MessageKind};

/// Errors from seeding a log with an inconsistent transcript.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessageLogError {
    #[error("duplicate message id {0}")]
    DuplicateId(MessageId),
    #[error("message id {id} appears after {previous}")]
    OutOfOrder { id: MessageId, previous: MessageId },
}

/// Append-only transcript owned by a single session.
///
/// Insertion order is display order. Ids strictly increase along the log,
/// which makes them unique and non-decreasing with append order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MessageLog {
    messages: Vec<ChatMessage>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a log from an initial transcript. Prompt entries are allowed.
    pub fn seed(initial: Vec<ChatMessage>) -> Result<Self, MessageLogError> {
        let mut previous: Option<MessageId> = None;
        for msg in &initial {
            match previous {
                Some(prev) if msg.id == prev => return Err(MessageLogError::DuplicateId(msg.id)),
                Some(prev) if msg.id < prev => {
                    return Err(MessageLogError::OutOfOrder {
                        id: msg.id,
                        previous: prev,
                    })
                }
                _ => {}
            }
            previous = Some(msg.id);
        }
        Ok(Self { messages: initial })
    }

    /// Append a user message stamped with the local clock and its offset.
    ///
    /// A body that is empty after trimming is ignored and `None` is returned,
    /// as is any append once the id space is used up.
    pub fn append(&mut self, author: &str, body: &str, origin_label: &str) -> Option<&ChatMessage> {
        self.append_at(author, body, origin_label, Local::now().fixed_offset())
    }

    pub fn append_at(
        &mut self,
        author: &str,
        body: &str,
        origin_label: &str,
        sent_at: DateTime<FixedOffset>,
    ) -> Option<&ChatMessage> {
        if body.trim().is_empty() {
            tracing::debug!("Ignoring blank message from {author}");
            return None;
        }

        let Some(id) = self.next_id() else {
            tracing::warn!("Message ids exhausted, dropping message from {author}");
            return None;
        };
        self.messages.push(ChatMessage {
            id,
            author: author.to_string(),
            body: body.to_string(),
            sent_at,
            origin_label: origin_label.to_string(),
            kind: MessageKind::Normal,
        });
        tracing::debug!("Appended message {id} from {author}");
        self.messages.last()
    }

    fn next_id(&self) -> Option<MessageId> {
        match self.messages.last() {
            Some(last) => last.id.checked_add(1),
            None => Some(1),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn seeded(id: MessageId, kind: MessageKind) -> ChatMessage {
        ChatMessage {
            id,
            author: "System".into(),
            body: format!("entry {id}"),
            sent_at: Utc.with_ymd_and_hms(2025, 11, 3, 9, 0, 0).unwrap().fixed_offset(),
            origin_label: String::new(),
            kind,
        }
    }

    #[test]
    fn test_blank_append_is_noop() {
        let mut log = MessageLog::new();
        assert!(log.append("You", "", "Islamabad").is_none());
        assert!(log.append("You", "   \t\n", "Islamabad").is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn test_append_grows_by_one_with_fresh_id() {
        let mut log = MessageLog::seed(vec![
            seeded(1, MessageKind::Normal),
            seeded(2, MessageKind::Normal),
            seeded(3, MessageKind::Prompt),
        ])
        .unwrap();

        let before = log.len();
        let msg = log.append("You", "Hello from Islamabad", "Islamabad").cloned().unwrap();
        assert_eq!(log.len(), before + 1);
        assert_eq!(msg.kind, MessageKind::Normal);
        assert_eq!(msg.author, "You");
        assert_eq!(msg.origin_label, "Islamabad");
        assert!(log.messages()[..before].iter().all(|m| m.id != msg.id));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut log = MessageLog::new();
        let t = Utc.with_ymd_and_hms(2025, 11, 3, 12, 0, 0).unwrap().fixed_offset();
        log.append_at("You", "first", "Islamabad", t);
        log.append_at("You", "second", "Islamabad", t);
        log.append_at("You", "third", "Islamabad", t);

        let bodies: Vec<&str> = log.iter().map(|m| m.body.as_str()).collect();
        assert_eq!(bodies, vec!["first", "second", "third"]);
        let ids: Vec<MessageId> = log.iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_body_kept_as_typed() {
        let mut log = MessageLog::new();
        let msg = log.append("You", "  spaced out ", "Islamabad").unwrap();
        assert_eq!(msg.body, "  spaced out ");
    }

    #[test]
    fn test_ids_continue_after_seed() {
        let mut log = MessageLog::seed(vec![seeded(7, MessageKind::Prompt)]).unwrap();
        let msg = log.append("You", "hi", "Islamabad").unwrap();
        assert_eq!(msg.id, 8);
    }

    #[test]
    fn test_append_after_last_id_is_rejected() {
        let mut log = MessageLog::seed(vec![seeded(MessageId::MAX, MessageKind::Prompt)]).unwrap();
        assert!(log.append("You", "one too many", "Islamabad").is_none());
        assert_eq!(log.len(), 1);
        assert_eq!(log.messages()[0].id, MessageId::MAX);
    }

    #[test]
    fn test_append_keeps_sender_offset() {
        let mut log = MessageLog::new();
        let islamabad = FixedOffset::east_opt(5 * 3600).unwrap();
        let t = islamabad.with_ymd_and_hms(2025, 11, 3, 10, 0, 0).unwrap();
        let msg = log.append_at("You", "morning", "Islamabad", t).unwrap();
        assert_eq!(msg.time_label(), "10:00 AM");
        assert_eq!(msg.sent_at, Utc.with_ymd_and_hms(2025, 11, 3, 5, 0, 0).unwrap());
    }

    #[test]
    fn test_seed_rejects_duplicate_ids() {
        let result = MessageLog::seed(vec![seeded(1, MessageKind::Normal), seeded(1, MessageKind::Normal)]);
        assert_eq!(result, Err(MessageLogError::DuplicateId(1)));
    }

    #[test]
    fn test_seed_rejects_decreasing_ids() {
        let result = MessageLog::seed(vec![seeded(5, MessageKind::Normal), seeded(2, MessageKind::Normal)]);
        assert_eq!(result, Err(MessageLogError::OutOfOrder { id: 2, previous: 5 }));
    }
}
