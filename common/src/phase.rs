use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One step of the scaffolded project timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPhase {
    pub number: u8,
    pub title: String,
    /// Date the phase opens automatically, if scheduled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocks_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseState {
    Completed,
    Active,
    Locked,
}

impl ProjectPhase {
    pub fn new(number: u8, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            unlocks_on: None,
        }
    }

    pub fn unlocking_on(mut self, date: NaiveDate) -> Self {
        self.unlocks_on = Some(date);
        self
    }

    /// Earlier phases are done, later ones stay locked.
    pub fn state(&self, active_phase: u8) -> PhaseState {
        match self.number.cmp(&active_phase) {
            std::cmp::Ordering::Less => PhaseState::Completed,
            std::cmp::Ordering::Equal => PhaseState::Active,
            std::cmp::Ordering::Greater => PhaseState::Locked,
        }
    }

    /// Sidebar label, e.g. "2. Topic Exploration".
    pub fn label(&self) -> String {
        format!("{}. {}", self.number, self.title)
    }

    /// "Phase 3 unlocks automatically on Nov 28th."
    pub fn unlock_note(&self) -> Option<String> {
        self.unlocks_on.map(|date| {
            format!(
                "Phase {} unlocks automatically on {}.",
                self.number,
                format_day_month(date)
            )
        })
    }
}

/// "Nov 28th"
fn format_day_month(date: NaiveDate) -> String {
    use chrono::Datelike;

    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{} {}{}", date.format("%b"), day, suffix)
}

/// First phase still locked relative to `active_phase`, for the faculty note.
pub fn next_unlock(phases: &[ProjectPhase], active_phase: u8) -> Option<&ProjectPhase> {
    phases
        .iter()
        .find(|p| p.state(active_phase) == PhaseState::Locked && p.unlocks_on.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phases() -> Vec<ProjectPhase> {
        vec![
            ProjectPhase::new(1, "Icebreakers"),
            ProjectPhase::new(2, "Topic Exploration"),
            ProjectPhase::new(3, "Co-Creation")
                .unlocking_on(NaiveDate::from_ymd_opt(2025, 11, 28).unwrap()),
            ProjectPhase::new(4, "Reflection"),
        ]
    }

    #[test]
    fn test_phase_states_relative_to_active() {
        let states: Vec<PhaseState> = phases().iter().map(|p| p.state(2)).collect();
        assert_eq!(
            states,
            vec![
                PhaseState::Completed,
                PhaseState::Active,
                PhaseState::Locked,
                PhaseState::Locked
            ]
        );
    }

    #[test]
    fn test_label() {
        assert_eq!(phases()[1].label(), "2. Topic Exploration");
    }

    #[test]
    fn test_unlock_note() {
        let all = phases();
        let next = next_unlock(&all, 2).expect("phase 3 is scheduled");
        assert_eq!(next.number, 3);
        assert_eq!(
            next.unlock_note().as_deref(),
            Some("Phase 3 unlocks automatically on Nov 28th.")
        );
        assert!(next_unlock(&all, 3).is_none());
    }

    #[test]
    fn test_ordinal_suffixes() {
        let d = |day| format_day_month(NaiveDate::from_ymd_opt(2025, 11, day).unwrap());
        assert_eq!(d(1), "Nov 1st");
        assert_eq!(d(2), "Nov 2nd");
        assert_eq!(d(3), "Nov 3rd");
        assert_eq!(d(11), "Nov 11th");
        assert_eq!(d(22), "Nov 22nd");
    }
}
