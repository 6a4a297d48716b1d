use std::fmt;

use serde::{Deserialize, Serialize};

/// Weekly engagement sample shown on every team card, in percent of the chart height.
pub const ENGAGEMENT_SAMPLE: [u8; 7] = [40, 60, 30, 80, 20, 10, 50];

/// A student on a team roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    /// Short place label, e.g. "NYC".
    pub location: String,
}

impl Member {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.location)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamStatus {
    #[default]
    Active,
    AtRisk,
}

impl TeamStatus {
    /// Badge text on the faculty dashboard.
    pub fn badge(&self) -> &'static str {
        match self {
            TeamStatus::Active => "Active",
            TeamStatus::AtRisk => "Intervention Needed",
        }
    }
}

impl fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamStatus::Active => write!(f, "Active"),
            TeamStatus::AtRisk => write!(f, "At Risk"),
        }
    }
}

/// A project team as seen by faculty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub members: Vec<Member>,
    pub status: TeamStatus,
    /// Human-readable recency, e.g. "2h ago".
    pub last_activity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
}

impl Team {
    pub fn needs_intervention(&self) -> bool {
        self.status == TeamStatus::AtRisk
    }

    /// Bar heights for the engagement chart. At-risk teams render at half height.
    pub fn engagement_bars(&self) -> Vec<u8> {
        ENGAGEMENT_SAMPLE
            .iter()
            .map(|h| match self.status {
                TeamStatus::Active => *h,
                TeamStatus::AtRisk => h / 2,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(status: TeamStatus) -> Team {
        Team {
            id: 1,
            name: "Team Alpha".into(),
            members: vec![Member::new("Sarah", "NYC"), Member::new("Ahmed", "Cairo")],
            status,
            last_activity: "2h ago".into(),
            alert: None,
        }
    }

    #[test]
    fn test_member_chip() {
        assert_eq!(Member::new("Yuki", "Tokyo").to_string(), "Yuki (Tokyo)");
    }

    #[test]
    fn test_active_bars_match_sample() {
        assert_eq!(team(TeamStatus::Active).engagement_bars(), ENGAGEMENT_SAMPLE.to_vec());
    }

    #[test]
    fn test_at_risk_bars_are_halved() {
        let active = team(TeamStatus::Active).engagement_bars();
        let at_risk = team(TeamStatus::AtRisk).engagement_bars();
        assert_eq!(at_risk, vec![20, 30, 15, 40, 10, 5, 25]);
        assert!(active.iter().zip(&at_risk).all(|(a, r)| a / 2 == *r));
    }

    #[test]
    fn test_status_labels() {
        assert!(team(TeamStatus::AtRisk).needs_intervention());
        assert!(!team(TeamStatus::Active).needs_intervention());
        assert_eq!(TeamStatus::AtRisk.to_string(), "At Risk");
        assert_eq!(TeamStatus::AtRisk.badge(), "Intervention Needed");
    }
}
