use serde::{Deserialize, Serialize};

use crate::message::ChatMessage;
use crate::message_log::{MessageLog, MessageLogError};
use crate::mock;

/// Which top-level view the shell shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    #[default]
    Student,
    Faculty,
}

impl View {
    pub fn toggled(self) -> Self {
        match self {
            View::Student => View::Faculty,
            View::Faculty => View::Student,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Student => "Student",
            View::Faculty => "Faculty",
        }
    }
}

/// Connection indicator in the workspace header.
///
/// Purely cosmetic: low-bandwidth mode changes the badge and shows a notice,
/// but sends are appended immediately and nothing is queued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionMode {
    #[default]
    Online,
    LowBandwidth,
}

impl ConnectionMode {
    pub fn toggled(self) -> Self {
        match self {
            ConnectionMode::Online => ConnectionMode::LowBandwidth,
            ConnectionMode::LowBandwidth => ConnectionMode::Online,
        }
    }

    pub fn is_offline(&self) -> bool {
        *self == ConnectionMode::LowBandwidth
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConnectionMode::Online => "Online",
            ConnectionMode::LowBandwidth => "Low Bandwidth Mode",
        }
    }
}

/// Everything one interactive session owns. Discarded when the session ends.
///
/// `Default` is an empty transcript; [`Session::seeded`] loads the mock one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub view: View,
    pub connection: ConnectionMode,
    pub draft: String,
    log: MessageLog,
}

impl Session {
    /// A session over the given transcript.
    pub fn with_transcript(transcript: Vec<ChatMessage>) -> Result<Self, MessageLogError> {
        Ok(Self {
            view: View::default(),
            connection: ConnectionMode::default(),
            draft: String::new(),
            log: MessageLog::seed(transcript)?,
        })
    }

    /// A session over the built-in mock transcript.
    pub fn seeded() -> Result<Self, MessageLogError> {
        Self::with_transcript(mock::seed_messages())
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
        tracing::debug!("Switched to {} view", self.view.label());
    }

    pub fn toggle_connection(&mut self) {
        self.connection = self.connection.toggled();
        tracing::debug!("Connection indicator: {}", self.connection.label());
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Send the draft as the current user.
    ///
    /// On success the draft is cleared; a blank or rejected draft is left as it was.
    pub fn send_draft(&mut self) -> Option<&ChatMessage> {
        let body = std::mem::take(&mut self.draft);
        if self
            .log
            .append(mock::CURRENT_USER, &body, mock::CURRENT_LOCATION)
            .is_none()
        {
            self.draft = body;
            return None;
        }
        self.log.messages().last()
    }

    /// Whether a transcript entry should render as the viewer's own bubble.
    pub fn is_own(&self, message: &ChatMessage) -> bool {
        message.author == mock::CURRENT_USER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::seeded().expect("mock transcript seeds")
    }

    #[test]
    fn test_starts_in_student_view_online() {
        let s = session();
        assert_eq!(s.view, View::Student);
        assert_eq!(s.connection, ConnectionMode::Online);
        assert_eq!(s.log().len(), 3);
    }

    #[test]
    fn test_toggle_view_round_trips() {
        let mut s = session();
        s.toggle_view();
        assert_eq!(s.view, View::Faculty);
        s.toggle_view();
        assert_eq!(s.view, View::Student);
    }

    #[test]
    fn test_send_draft_appends_and_clears() {
        let mut s = session();
        s.set_draft("Water access is the big one here.");
        let sent = s.send_draft().cloned().expect("non-blank draft sends");
        assert_eq!(sent.author, "You");
        assert_eq!(sent.origin_label, "Islamabad");
        assert!(s.is_own(&sent));
        assert!(s.draft.is_empty());
        assert_eq!(s.log().len(), 4);
    }

    #[test]
    fn test_blank_draft_is_ignored_and_kept() {
        let mut s = session();
        s.set_draft("   ");
        assert!(s.send_draft().is_none());
        assert_eq!(s.draft, "   ");
        assert_eq!(s.log().len(), 3);
    }

    #[test]
    fn test_rejected_send_keeps_draft() {
        let mut last = mock::seed_messages().remove(2);
        last.id = crate::message::MessageId::MAX;
        let mut s = Session::with_transcript(vec![last]).unwrap();
        s.set_draft("still here");
        assert!(s.send_draft().is_none());
        assert_eq!(s.draft, "still here");
        assert_eq!(s.log().len(), 1);
    }

    #[test]
    fn test_offline_mode_does_not_queue() {
        let mut s = session();
        s.toggle_connection();
        assert!(s.connection.is_offline());
        assert_eq!(s.connection.label(), "Low Bandwidth Mode");
        s.set_draft("sent anyway");
        assert!(s.send_draft().is_some());
        assert_eq!(s.log().len(), 4);
    }

    #[test]
    fn test_seeded_peers_are_not_own() {
        let s = session();
        assert!(s.log().iter().all(|m| !s.is_own(m)));
    }
}
