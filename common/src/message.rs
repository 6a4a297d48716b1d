use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Unique identifier for a message within one log.
pub type MessageId = u64;

/// How a transcript entry is meant to be shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// A participant's chat bubble.
    #[default]
    Normal,
    /// A facilitation prompt shown as a centred card; carries no author interaction.
    Prompt,
}

/// A single entry in the team transcript.
///
/// Created by a send or seeded at startup; never edited or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub author: String,
    pub body: String,
    /// Instant of sending, carrying the sender's UTC offset.
    pub sent_at: DateTime<FixedOffset>,
    /// Where the sender was, e.g. "Cairo". Empty for prompts.
    pub origin_label: String,
    pub kind: MessageKind,
}

impl ChatMessage {
    pub fn is_prompt(&self) -> bool {
        self.kind == MessageKind::Prompt
    }

    /// Sender's wall-clock time, e.g. "04:00 PM".
    pub fn time_label(&self) -> String {
        self.sent_at.format("%I:%M %p").to_string()
    }

    /// "04:00 PM • Cairo"
    pub fn meta_label(&self) -> String {
        if self.origin_label.is_empty() {
            self.time_label()
        } else {
            format!("{} • {}", self.time_label(), self.origin_label)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike, Utc};

    fn message(origin: &str) -> ChatMessage {
        ChatMessage {
            id: 1,
            author: "Ahmed".into(),
            body: "Great!".into(),
            sent_at: FixedOffset::east_opt(2 * 3600)
                .unwrap()
                .with_ymd_and_hms(2025, 11, 3, 16, 0, 0)
                .unwrap(),
            origin_label: origin.into(),
            kind: MessageKind::Normal,
        }
    }

    #[test]
    fn test_time_label_is_twelve_hour() {
        assert_eq!(message("Cairo").time_label(), "04:00 PM");
    }

    #[test]
    fn test_time_label_uses_sender_clock() {
        let msg = message("Cairo");
        assert_eq!(msg.sent_at.with_timezone(&Utc).hour(), 14);
        assert_eq!(msg.time_label(), "04:00 PM");
    }

    #[test]
    fn test_meta_label() {
        assert_eq!(message("Cairo").meta_label(), "04:00 PM • Cairo");
        assert_eq!(message("").meta_label(), "04:00 PM");
    }
}
