use dioxus::prelude::*;

use minds_common::mock;
use minds_common::phase::{next_unlock, PhaseState};

/// Sidebar showing the scaffolded project timeline.
#[component]
pub fn ProjectPhases(active_phase: u8) -> Element {
    let phases = mock::phases();
    let note = next_unlock(&phases, active_phase).and_then(|p| p.unlock_note());

    rsx! {
        aside { class: "project-phases",
            h2 { "Project Timeline" }
            ul {
                for phase in phases.iter() {
                    {
                        let label = phase.label();
                        let (class, marker) = match phase.state(active_phase) {
                            PhaseState::Completed => ("phase completed", "✓".to_string()),
                            PhaseState::Active => ("phase active", phase.number.to_string()),
                            PhaseState::Locked => ("phase locked", "🔒".to_string()),
                        };
                        rsx! {
                            li { key: "{phase.number}", class: "{class}",
                                span { class: "phase-marker", "{marker}" }
                                span { class: "phase-label", "{label}" }
                            }
                        }
                    }
                }
            }
            if let Some(note) = note {
                div { class: "faculty-note",
                    strong { "Faculty Note: " }
                    "{note}"
                }
            }
        }
    }
}
