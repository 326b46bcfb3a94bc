//! Interface state record and its transitions.
//!
//! Every view reads from one [`AssistantState`]; every change goes through one
//! of the methods below so a sequence of user actions and network completions
//! replays deterministically.

use crate::types::{
    ChatMessage, ChatReply, DashboardSummary, Notification, NotificationId, NotificationKind,
    ThemeMode,
};
use std::time::Duration;

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Calibration Certificate Assistant. How can I help you today?";
pub const APOLOGY_MESSAGE: &str = "Sorry, an error occurred while processing your request.";
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// The two failure kinds the interface distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Failure {
    DashboardLoad,
    ChatSend,
}

impl Failure {
    /// Text shown inline where the failure is relevant.
    pub fn inline_text(self) -> &'static str {
        match self {
            Failure::DashboardLoad => "Failed to load dashboard data. Please try again later.",
            Failure::ChatSend => "Failed to send message. Please try again.",
        }
    }

    pub fn notification_text(self) -> &'static str {
        match self {
            Failure::DashboardLoad => "Failed to load dashboard data",
            Failure::ChatSend => "Failed to send message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DashboardStatus {
    #[default]
    Idle,
    Loading,
    Ready(DashboardSummary),
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssistantState {
    messages: Vec<ChatMessage>,
    input: String,
    sidebar_open: bool,
    theme: ThemeMode,
    is_loading: bool,
    is_typing: bool,
    error: Option<Failure>,
    notification: Option<Notification>,
    dashboard: DashboardStatus,
    next_notification: u64,
}

impl Default for AssistantState {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistantState {
    pub fn new() -> Self {
        Self {
            messages: vec![welcome_message()],
            input: String::new(),
            sidebar_open: true,
            theme: ThemeMode::default(),
            is_loading: false,
            is_typing: false,
            error: None,
            notification: None,
            dashboard: DashboardStatus::Idle,
            next_notification: 1,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    /// Inline text of the latest failure from either path.
    pub fn error(&self) -> Option<&'static str> {
        self.error.map(Failure::inline_text)
    }

    pub fn failure(&self) -> Option<Failure> {
        self.error
    }

    /// The failure text that belongs next to the composer. Dashboard
    /// failures are already shown in the sidebar.
    pub fn chat_error(&self) -> Option<&'static str> {
        match self.error {
            Some(Failure::ChatSend) => Some(Failure::ChatSend.inline_text()),
            _ => None,
        }
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dashboard(&self) -> &DashboardStatus {
        &self.dashboard
    }

    /// Whether the composer accepts a send right now.
    pub fn can_send(&self) -> bool {
        !self.is_loading && !self.input.trim().is_empty()
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Moves the dashboard into `Loading`. Returns `false` if a load already
    /// started, so the fetch runs once per interface lifetime.
    pub fn begin_dashboard_load(&mut self) -> bool {
        if self.dashboard != DashboardStatus::Idle {
            return false;
        }
        self.dashboard = DashboardStatus::Loading;
        self.error = None;
        true
    }

    pub fn finish_dashboard_load<E>(
        &mut self,
        outcome: Result<DashboardSummary, E>,
    ) -> Option<NotificationId> {
        match outcome {
            Ok(summary) => {
                self.dashboard = DashboardStatus::Ready(summary);
                None
            }
            Err(_) => {
                let failure = Failure::DashboardLoad;
                self.dashboard = DashboardStatus::Failed(failure.inline_text().to_string());
                Some(self.record_failure(failure))
            }
        }
    }

    /// Starts a send. Returns the text to post, or `None` when the input is
    /// blank or a previous send has not settled yet.
    pub fn begin_send(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() || self.is_loading {
            return None;
        }
        self.messages.push(ChatMessage::human(text));
        self.input.clear();
        self.is_loading = true;
        self.is_typing = true;
        self.error = None;
        Some(text.to_string())
    }

    /// Settles the outstanding send. The reply lands at the end of whatever
    /// conversation exists now, even if it was reset while waiting.
    pub fn finish_send<E>(&mut self, outcome: Result<ChatReply, E>) -> Option<NotificationId> {
        self.is_loading = false;
        self.is_typing = false;
        match outcome {
            Ok(reply) => {
                self.messages
                    .push(ChatMessage::assistant(reply.response, reply.certificate));
                None
            }
            Err(_) => {
                self.messages.push(ChatMessage::assistant(APOLOGY_MESSAGE, None));
                Some(self.record_failure(Failure::ChatSend))
            }
        }
    }

    pub fn start_new_conversation(&mut self) -> NotificationId {
        self.messages = vec![welcome_message()];
        self.raise_notification("New conversation started", NotificationKind::Success)
    }

    pub fn toggle_theme(&mut self) -> NotificationId {
        self.theme = self.theme.toggled();
        let message = format!("{} mode activated", self.theme.label());
        self.raise_notification(message, NotificationKind::Success)
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Replaces the current notification. The returned id is what the expiry
    /// timer must hand back to [`AssistantState::expire_notification`].
    pub fn raise_notification(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> NotificationId {
        let id = NotificationId(self.next_notification);
        self.next_notification += 1;
        self.notification = Some(Notification {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Clears the notification only if it is still the one `id` refers to.
    pub fn expire_notification(&mut self, id: NotificationId) -> bool {
        match &self.notification {
            Some(current) if current.id == id => {
                self.notification = None;
                true
            }
            _ => false,
        }
    }

    pub fn close_notification(&mut self) {
        self.notification = None;
    }

    fn record_failure(&mut self, failure: Failure) -> NotificationId {
        self.error = Some(failure);
        self.raise_notification(failure.notification_text(), NotificationKind::Error)
    }
}

fn welcome_message() -> ChatMessage {
    ChatMessage::assistant(WELCOME_MESSAGE, None)
}
