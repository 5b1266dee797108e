//! Toast Notifications
//!
//! Auto-expiring success/error messages. The queue is created once by the
//! root component and handed to everything that reports an outcome.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;

/// How long a toast stays up unless closed by hand
pub const TOAST_DURATION: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Runs a task once after a delay
pub trait Timer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// `setTimeout`-backed timer
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, task).forget();
    }
}

#[derive(Clone)]
pub struct ToastQueue {
    toasts: RwSignal<Vec<Toast>>,
    next_id: Rc<Cell<u64>>,
    timer: Rc<dyn Timer>,
}

impl ToastQueue {
    pub fn new(timer: Rc<dyn Timer>) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: Rc::new(Cell::new(0)),
            timer,
        }
    }

    /// Append a toast and schedule its removal. Returns the new id.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let message = message.into();
        log::debug!("[toast] #{} {:?}: {}", id, kind, message);
        self.toasts.update(|list| list.push(Toast { id, message, kind }));

        let toasts = self.toasts;
        self.timer.schedule(
            TOAST_DURATION,
            Box::new(move || {
                toasts.try_update(|list| list.retain(|t| t.id != id));
            }),
        );
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Error)
    }

    /// Remove a toast; unknown ids are ignored (timer and close button may both fire).
    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    /// Snapshot, oldest first
    pub fn current(&self) -> Vec<Toast> {
        self.toasts.get_untracked()
    }

    /// Reactive handle for views
    pub fn signal(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }
}
