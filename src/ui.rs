use crate::api::{CertificateApi, HttpCertificateApi};
use crate::config;
use crate::controller::{self, SendOutcome};
use crate::state::AssistantState;
use crate::theme::theme_definition;
use crate::types::{NotificationId, ThemeMode};
use crate::views::{Composer, ConversationLog, DashboardPanel};
use dioxus::prelude::*;
use std::sync::Arc;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FAULT_MESSAGE: &str = "Something went wrong. Please refresh the page or contact support.";

#[component]
pub fn App() -> Element {
    rsx! {
        FaultBarrier {
            Interface {}
        }
    }
}

/// Replaces the whole interface with a static apology when anything below it
/// fails to render. Network failures never reach this point.
#[component]
pub fn FaultBarrier(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |errors: ErrorContext| {
                tracing::error!(?errors, "interface render failed");
                rsx! {
                    div { class: "fault-fallback", role: "alert",
                        h1 { "{FAULT_MESSAGE}" }
                    }
                }
            },
            {children}
        }
    }
}

#[component]
fn Interface() -> Element {
    let state = use_signal(AssistantState::new);
    let api = use_hook(|| -> Arc<dyn CertificateApi> {
        let config = config::current();
        tracing::info!(url = %config.api_base_url, "using certificate backend");
        Arc::new(HttpCertificateApi::with_base_url(config.api_base_url))
    });

    use_hook({
        let api = api.clone();
        move || {
            spawn(async move {
                if let Some(id) = controller::load_dashboard(state, api.as_ref()).await {
                    schedule_expiry(state, id);
                }
            });
        }
    });

    let on_send = move |_: ()| {
        let text = state.read().input().to_string();
        let api = api.clone();
        spawn(async move {
            if let SendOutcome::Failed(id) =
                controller::send_message(state, api.as_ref(), &text).await
            {
                schedule_expiry(state, id);
            }
        });
    };

    let on_new_conversation = move |_: ()| {
        let mut state = state;
        let id = state.with_mut(AssistantState::start_new_conversation);
        schedule_expiry(state, id);
    };

    let theme = state.read().theme();
    let definition = theme_definition(theme);

    rsx! {
        ThemeStyles { theme }
        div { class: "{definition.root_class}",
            DashboardPanel { state }
            main { class: "chat-area",
                ChatHeader { state }
                ConversationLog { state }
                Composer { state, on_send, on_new_conversation }
            }
        }
        NotificationBanner { state }
    }
}

fn schedule_expiry(state: Signal<AssistantState>, id: NotificationId) {
    spawn(async move {
        controller::expire_notification(state, id).await;
    });
}

#[component]
fn ThemeStyles(theme: ThemeMode) -> Element {
    let definition = theme_definition(theme);
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn ChatHeader(state: Signal<AssistantState>) -> Element {
    let mut state = state;
    let open = state.read().sidebar_open();
    let theme = state.read().theme();
    let sidebar_label = if open { "Close sidebar" } else { "Open sidebar" };
    let sidebar_icon = if open { "‹" } else { "›" };
    let theme_label = if theme.is_dark() {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };
    let theme_icon = if theme.is_dark() { "☀" } else { "☾" };

    rsx! {
        header { class: "chat-header",
            button {
                class: "toggle-btn",
                r#type: "button",
                aria_label: sidebar_label,
                onclick: move |_| state.with_mut(AssistantState::toggle_sidebar),
                "{sidebar_icon}"
            }
            h1 { class: "chat-title", "Calibration Certificate Assistant" }
            button {
                class: "toggle-btn",
                r#type: "button",
                aria_label: theme_label,
                onclick: move |_| {
                    let id = state.with_mut(AssistantState::toggle_theme);
                    schedule_expiry(state, id);
                },
                "{theme_icon}"
            }
        }
    }
}

#[component]
fn NotificationBanner(state: Signal<AssistantState>) -> Element {
    let mut state = state;
    let Some(notification) = state.read().notification().cloned() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: format_args!("notification {}", notification.kind.css_class()),
            role: "status",
            p { "{notification.message}" }
            button {
                class: "notification-close",
                r#type: "button",
                aria_label: "Dismiss notification",
                onclick: move |_| state.with_mut(AssistantState::close_notification),
                "×"
            }
        }
    }
}
