use crate::state::AssistantState;
use crate::types::{CertificateDetail, ChatMessage, Role};
use crate::views::shared::{format_message_timestamp, markdown_to_html};
use dioxus::events::Key;
use dioxus::prelude::*;

const COMPOSER_PLACEHOLDER: &str = "Ask about a specific certificate or calibration data...";
const DISCLAIMER: &str = "AI-generated responses may require verification";
const CHAT_END_ID: &str = "chat-end";

/// Label/value pairs of the certificate block, in display order.
pub fn certificate_fields(cert: &CertificateDetail) -> [(&'static str, &str); 6] {
    [
        ("Certificate No", cert.cert_no.as_str()),
        ("Equipment Type", cert.equipment_type.as_str()),
        ("Manufacturer", cert.manufacturer.as_str()),
        ("Model", cert.model.as_str()),
        ("Calibration Date", cert.calibration_date.as_str()),
        ("Due Date", cert.due_date.as_str()),
    ]
}

fn row_alignment(role: Role) -> &'static str {
    match role {
        Role::Human => "align-end",
        Role::Assistant => "align-start",
    }
}

#[component]
pub fn ConversationLog(state: Signal<AssistantState>) -> Element {
    let messages = state.read().messages().to_vec();
    let typing = state.read().is_typing();

    use_effect(move || {
        // Subscribes the effect to conversation and typing changes.
        let _ = (state.read().messages().len(), state.read().is_typing());
        let _ = document::eval(&format!(
            "document.getElementById('{CHAT_END_ID}')?.scrollIntoView({{ behavior: 'smooth' }});"
        ));
    });

    rsx! {
        div { id: "chat-list", class: "chat-list",
            for (i, msg) in messages.into_iter().enumerate() {
                MessageRow { key: "{i}", message: msg }
            }
            if typing {
                div { class: "typing-indicator", aria_label: "Assistant is typing",
                    span { class: "dot" }
                    span { class: "dot" }
                    span { class: "dot" }
                }
            }
            div { id: CHAT_END_ID }
        }
    }
}

#[component]
fn MessageRow(message: ChatMessage) -> Element {
    let role = message.role;
    let timestamp = format_message_timestamp(message.created_at);
    rsx! {
        div { class: format_args!("message-row {}", role.css_class()),
            if matches!(role, Role::Assistant) {
                div { class: "avatar assistant", aria_hidden: "true", "CA" }
            }
            div { class: format_args!("bubble {}", role.css_class()),
                if matches!(role, Role::Assistant) {
                    AssistantBody { content: message.content.clone() }
                } else {
                    div { class: "md", dangerous_inner_html: "{markdown_to_html(&message.content)}" }
                }
                div { class: format_args!("message-meta {}", row_alignment(role)),
                    span { class: "message-timestamp", "{timestamp}" }
                }
                if let Some(cert) = message.certificate.as_ref() {
                    CertificateBlock { certificate: cert.clone() }
                }
            }
        }
    }
}

#[component]
fn AssistantBody(content: String) -> Element {
    let content_html = markdown_to_html(&content);
    let copy_payload = content.clone();
    let on_copy = move |_| {
        let raw = copy_payload.clone();
        spawn(async move {
            #[cfg(all(
                not(target_arch = "wasm32"),
                any(feature = "desktop", feature = "mobile")
            ))]
            {
                match arboard::Clipboard::new() {
                    Ok(mut cb) => {
                        if let Err(err) = cb.set_text(raw) {
                            tracing::warn!(error = %err, "clipboard write failed");
                        }
                    }
                    Err(err) => tracing::warn!(error = %err, "clipboard unavailable"),
                }
            }
            #[cfg(not(all(
                not(target_arch = "wasm32"),
                any(feature = "desktop", feature = "mobile")
            )))]
            {
                let _ = raw;
            }
        });
    };

    rsx! {
        div { class: "bubble-controls",
            button { class: "action-btn", r#type: "button", title: "Copy markdown", onclick: on_copy, "Copy" }
        }
        div { class: "md", dangerous_inner_html: "{content_html}" }
    }
}

#[component]
fn CertificateBlock(certificate: CertificateDetail) -> Element {
    rsx! {
        div { class: "certificate-block",
            h4 { class: "certificate-title", "Certificate Details" }
            div { class: "certificate-fields",
                for (label, value) in certificate_fields(&certificate) {
                    p { key: "{label}",
                        span { class: "certificate-label", "{label}:" }
                        " {value}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Composer(
    state: Signal<AssistantState>,
    on_send: EventHandler<()>,
    on_new_conversation: EventHandler<()>,
) -> Element {
    let mut state = state;
    let loading = state.read().is_loading();
    let can_send = state.read().can_send();
    let input = state.read().input().to_string();
    let error = state.read().chat_error();

    rsx! {
        form { class: "composer", onsubmit: move |ev| ev.prevent_default(),
            if let Some(message) = error {
                div { class: "composer-error", role: "alert", "{message}" }
            }
            div { class: "composer-inner",
                input {
                    r#type: "text",
                    placeholder: COMPOSER_PLACEHOLDER,
                    value: "{input}",
                    disabled: loading,
                    autofocus: true,
                    oninput: move |ev| state.with_mut(|s| s.set_input(ev.value())),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter && !ev.modifiers().shift() {
                            ev.prevent_default();
                            on_send.call(());
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !can_send,
                    onclick: move |_| on_send.call(()),
                    "Send"
                }
            }
            div { class: "composer-footer",
                button {
                    class: "btn-ghost",
                    r#type: "button",
                    onclick: move |_| on_new_conversation.call(()),
                    "↻ New conversation"
                }
                span { class: "disclaimer", "⚠ {DISCLAIMER}" }
            }
        }
    }
}
