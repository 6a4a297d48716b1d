use dioxus::prelude::*;

use minds_common::mock::APP_NAME;
use minds_common::session::View;

use super::faculty_dashboard::FacultyDashboard;
use super::session_state::initial_session;
use super::student_workspace::StudentWorkspace;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let mut session = use_context_provider(|| Signal::new(initial_session()));

    let view = session.read().view;
    let other = view.toggled().label();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "minds-app",
            nav { class: "app-nav",
                div { class: "brand",
                    span { class: "brand-mark", "◍" }
                    span { class: "brand-name", "{APP_NAME}" }
                }
                button {
                    class: "view-switch",
                    onclick: move |_| session.write().toggle_view(),
                    "Switch to {other} View"
                }
            }
            if view == View::Faculty {
                FacultyDashboard {}
            } else {
                StudentWorkspace {}
            }
        }
    }
}
