use dioxus::prelude::*;

use minds_common::mock::{self, COURSE_LABEL};
use minds_common::team::Team;

/// "Mission Control": every team's roster, status and recent engagement.
#[component]
pub fn FacultyDashboard() -> Element {
    let teams = mock::teams();

    rsx! {
        div { class: "faculty-dashboard",
            header { class: "dashboard-header",
                h1 { "Mission Control Dashboard" }
                p { "{COURSE_LABEL}" }
            }
            div { class: "team-grid",
                for team in teams.iter() {
                    TeamCard { key: "{team.id}", team: team.clone() }
                }
            }
        }
    }
}

#[component]
fn TeamCard(team: Team) -> Element {
    let at_risk = team.needs_intervention();
    let badge = team.status.badge();
    let bars = team.engagement_bars();
    let alert = team.alert.clone();

    rsx! {
        div { class: "team-card",
            div { class: "team-card-header",
                div {
                    h3 { "{team.name}" }
                    div { class: "member-chips",
                        for member in team.members.iter() {
                            span { key: "{member.name}", class: "member-chip", "{member}" }
                        }
                    }
                }
                span { class: if at_risk { "status-badge at-risk" } else { "status-badge active" },
                    "{badge}"
                }
            }
            if let Some(alert) = alert {
                p { class: "team-alert", "{alert}" }
            }
            div { class: "engagement-chart",
                for (i, h) in bars.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: if at_risk { "engagement-bar at-risk" } else { "engagement-bar" },
                        style: "height: {h}%",
                    }
                }
            }
            p { class: "last-activity", "Last activity: {team.last_activity}" }
        }
    }
}
