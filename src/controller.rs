//! Async orchestration of the interface: each function awaits at most one
//! backend call and applies the outcome to the state record in a single
//! transition.

use crate::api::CertificateApi;
use crate::state::{AssistantState, NOTIFICATION_TTL};
use crate::types::NotificationId;
use dioxus::prelude::{Signal, Writable};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// A handle through which the controller mutates the shared state record.
///
/// The UI hands in its `Signal`; headless callers (tests, scripted sessions)
/// use [`LocalState`].
pub trait StateCell: Clone + 'static {
    fn update<R>(&mut self, apply: impl FnOnce(&mut AssistantState) -> R) -> R;
}

impl StateCell for Signal<AssistantState> {
    fn update<R>(&mut self, apply: impl FnOnce(&mut AssistantState) -> R) -> R {
        self.with_mut(apply)
    }
}

/// Single-threaded state cell for running the controller outside Dioxus.
#[derive(Clone, Default)]
pub struct LocalState(Rc<RefCell<AssistantState>>);

impl LocalState {
    pub fn new(state: AssistantState) -> Self {
        Self(Rc::new(RefCell::new(state)))
    }

    pub fn snapshot(&self) -> AssistantState {
        self.0.borrow().clone()
    }
}

impl StateCell for LocalState {
    fn update<R>(&mut self, apply: impl FnOnce(&mut AssistantState) -> R) -> R {
        apply(&mut self.0.borrow_mut())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input, or a previous send is still outstanding.
    Ignored,
    Delivered,
    Failed(NotificationId),
}

/// Fetches the dashboard summary once. Returns the id of the error
/// notification when the fetch fails.
pub async fn load_dashboard<S, A>(mut cell: S, api: &A) -> Option<NotificationId>
where
    S: StateCell,
    A: CertificateApi + ?Sized,
{
    if !cell.update(AssistantState::begin_dashboard_load) {
        return None;
    }
    let outcome = api.dashboard().await;
    match &outcome {
        Ok(summary) => tracing::info!(
            total = summary.total_certificates,
            equipment_types = summary.equipment_types.len(),
            "dashboard summary loaded"
        ),
        Err(err) => tracing::warn!(error = %err, "dashboard summary failed"),
    }
    cell.update(|state| state.finish_dashboard_load(outcome))
}

pub async fn send_message<S, A>(mut cell: S, api: &A, text: &str) -> SendOutcome
where
    S: StateCell,
    A: CertificateApi + ?Sized,
{
    let Some(message) = cell.update(|state| state.begin_send(text)) else {
        tracing::debug!("send ignored");
        return SendOutcome::Ignored;
    };
    let outcome = api.chat(&message).await;
    if let Err(err) = &outcome {
        tracing::warn!(error = %err, "chat request failed");
    }
    match cell.update(|state| state.finish_send(outcome)) {
        Some(id) => SendOutcome::Failed(id),
        None => SendOutcome::Delivered,
    }
}

/// Waits out the notification lifetime, then clears notification `id` if it
/// is still the one on screen.
pub async fn expire_notification<S: StateCell>(cell: S, id: NotificationId) -> bool {
    expire_notification_after(cell, id, NOTIFICATION_TTL).await
}

pub async fn expire_notification_after<S: StateCell>(
    mut cell: S,
    id: NotificationId,
    delay: Duration,
) -> bool {
    sleep(delay).await;
    cell.update(|state| state.expire_notification(id))
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

// No tokio timer driver under the browser executor.
#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}
