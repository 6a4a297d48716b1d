//! Hardcoded roster, transcript and timezone table the workspace starts from.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};

use crate::message::{ChatMessage, MessageKind};
use crate::phase::ProjectPhase;
use crate::team::{Member, Team, TeamStatus};
use crate::timezone::{AwakeWindow, Timezone};

pub const APP_NAME: &str = "Scaffolding Global Minds";
pub const COURSE_LABEL: &str = "Global Health Project • Fall 2025";
pub const WORKSPACE_TEAM: &str = "Team Alpha";

/// Author and origin stamped on messages sent from this session.
pub const CURRENT_USER: &str = "You";
pub const CURRENT_LOCATION: &str = "Islamabad";

/// Signature under facilitation prompts.
pub const PROMPT_SIGNATURE: &str = "Pedagogical Bot";

pub const ACTIVE_PHASE: u8 = 2;

pub fn teams() -> Vec<Team> {
    vec![
        Team {
            id: 1,
            name: "Team Alpha".into(),
            members: vec![
                Member::new("Sarah", "NYC"),
                Member::new("Ahmed", "Cairo"),
                Member::new("Yuki", "Tokyo"),
            ],
            status: TeamStatus::Active,
            last_activity: "2h ago".into(),
            alert: None,
        },
        Team {
            id: 2,
            name: "Team Bravo".into(),
            members: vec![
                Member::new("Maria", "Berlin"),
                Member::new("John", "Austin"),
                Member::new("Wei", "Beijing"),
            ],
            status: TeamStatus::AtRisk,
            last_activity: "3d ago".into(),
            alert: Some("Low Participation".into()),
        },
    ]
}

pub fn timezones() -> Vec<Timezone> {
    vec![
        Timezone::new("New York", -5, AwakeWindow { start: 7, end: 23 }),
        Timezone::new("Cairo", 2, AwakeWindow { start: 6, end: 22 }),
        Timezone::new("Tokyo", 9, AwakeWindow { start: 7, end: 23 }),
    ]
}

pub fn phases() -> Vec<ProjectPhase> {
    let co_creation = ProjectPhase::new(3, "Co-Creation");
    let co_creation = match NaiveDate::from_ymd_opt(2025, 11, 28) {
        Some(date) => co_creation.unlocking_on(date),
        None => co_creation,
    };
    vec![
        ProjectPhase::new(1, "Icebreakers"),
        ProjectPhase::new(2, "Topic Exploration"),
        co_creation,
        ProjectPhase::new(4, "Reflection"),
    ]
}

/// 3 Nov 2025 at `hour` on the sender's own clock, `offset_hours` from UTC.
fn seed_time(offset_hours: i32, hour: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(offset_hours * 3600)
        .and_then(|tz| tz.with_ymd_and_hms(2025, 11, 3, hour, 0, 0).single())
        .unwrap_or_default()
}

pub fn seed_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            id: 1,
            author: "Sarah".into(),
            body: "Hi everyone! I've uploaded my intro video.".into(),
            sent_at: seed_time(-5, 9),
            origin_label: "New York".into(),
            kind: MessageKind::Normal,
        },
        ChatMessage {
            id: 2,
            author: "Ahmed".into(),
            body: "Great! I just watched it. Interesting point about SDG #4.".into(),
            sent_at: seed_time(2, 16),
            origin_label: "Cairo".into(),
            kind: MessageKind::Normal,
        },
        ChatMessage {
            id: 3,
            author: "System".into(),
            body: "PROMPT: How does this issue show up in your local community?".into(),
            sent_at: seed_time(2, 16),
            origin_label: String::new(),
            kind: MessageKind::Prompt,
        },
    ]
}
