use dioxus::prelude::*;

use minds_common::message::ChatMessage;
use minds_common::mock::PROMPT_SIGNATURE;
use minds_common::session::Session;

use super::session_state::use_session;

fn send_draft(session: &mut Signal<Session>) {
    let sent = session.write().send_draft().map(|m| m.id);
    match sent {
        Some(id) => tracing::debug!("Sent message {id}"),
        None => tracing::debug!("Send ignored: empty draft"),
    }
}

/// Team transcript plus the message composer.
#[component]
pub fn ChatView() -> Element {
    let mut session = use_session();

    let state = session.read();
    // (message, is it ours?)
    let entries: Vec<(ChatMessage, bool)> = state
        .log()
        .iter()
        .map(|m| (m.clone(), state.is_own(m)))
        .collect();
    let draft = state.draft.clone();
    let offline = state.connection.is_offline();
    drop(state);

    rsx! {
        div { class: "chat-messages",
            for (msg, own) in entries.iter() {
                if msg.is_prompt() {
                    div { key: "{msg.id}", class: "prompt-card",
                        p { class: "prompt-text", "{msg.body}" }
                        p { class: "prompt-signature", "- {PROMPT_SIGNATURE}" }
                    }
                } else {
                    MessageBubble { key: "{msg.id}", message: msg.clone(), own: *own }
                }
            }
        }

        div { class: "chat-input-area",
            if offline {
                div { class: "offline-notice",
                    "You are offline. Messages will be saved and sent when connection returns."
                }
            }
            div { class: "chat-input",
                input {
                    r#type: "text",
                    placeholder: "Type a message...",
                    value: "{draft}",
                    oninput: move |evt| session.write().set_draft(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            send_draft(&mut session);
                        }
                    },
                }
                button {
                    class: "send-btn",
                    onclick: move |_| send_draft(&mut session),
                    "Send"
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage, own: bool) -> Element {
    let meta = message.meta_label();
    let id = message.id;

    rsx! {
        div { class: if own { "chat-entry own" } else { "chat-entry" },
            div { class: "chat-meta",
                span { class: "chat-author", "{message.author}" }
                span { class: "chat-time", "{meta}" }
            }
            div { class: if own { "chat-bubble chat-sent" } else { "chat-bubble chat-received" },
                "{message.body}"
                button {
                    class: "flag-btn",
                    title: "Flag for faculty review",
                    onclick: move |_| tracing::info!("Message {id} flagged for review"),
                    "⚑"
                }
            }
        }
    }
}
