use dioxus::prelude::*;

use minds_common::session::Session;

/// Session state for the whole page, seeded from the mock transcript.
///
/// Falls back to an empty transcript if the seed is rejected.
pub fn initial_session() -> Session {
    Session::seeded().unwrap_or_else(|err| {
        tracing::error!("Mock transcript rejected: {err}");
        Session::default()
    })
}

/// Provided as context by `App`; every view reads and writes through it.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}
