use dioxus::prelude::*;

use minds_common::mock::{ACTIVE_PHASE, WORKSPACE_TEAM};

use super::chat_view::ChatView;
use super::project_phases::ProjectPhases;
use super::session_state::use_session;
use super::timezone_visualizer::TimezoneVisualizer;

/// Team workspace: phase sidebar, header tools and the team chat.
#[component]
pub fn StudentWorkspace() -> Element {
    let mut session = use_session();

    let connection = session.read().connection;
    let offline = connection.is_offline();
    let connection_label = connection.label();

    rsx! {
        div { class: "student-workspace",
            ProjectPhases { active_phase: ACTIVE_PHASE }

            main { class: "workspace-main",
                div { class: "workspace-header",
                    div { class: "workspace-title-row",
                        h2 { "{WORKSPACE_TEAM} Workspace" }
                        button {
                            class: if offline { "connection-toggle offline" } else { "connection-toggle online" },
                            onclick: move |_| session.write().toggle_connection(),
                            "{connection_label}"
                        }
                    }
                    TimezoneVisualizer {}
                }
                ChatView {}
            }
        }
    }
}
