//! Toast notifications.
//!
//! Only one toast is on screen at a time. Every toast carries an id so that
//! timers started for an old toast cannot dismiss its replacement.

/// Severity of a toast, selects its background colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#10b981",
            NotificationKind::Error => "#ef4444",
            NotificationKind::Info => "#3b82f6",
        }
    }
}

/// A message to show to the visitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }
}

pub type ToastId = u64;

/// The toast currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub notification: Notification,
    /// Playing its exit animation
    pub leaving: bool,
}

impl Toast {
    pub fn class(&self) -> String {
        format!("notification {}", self.notification.kind.class())
    }

    pub fn animation(&self) -> &'static str {
        if self.leaving {
            "slideOutRight 0.3s ease-in"
        } else {
            "slideInRight 0.3s ease-out"
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toaster {
    current: Option<Toast>,
    next_id: ToastId,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Replace whatever is showing with `notification`.
    pub fn show(&mut self, notification: Notification) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        tracing::debug!(id, kind = notification.kind.class(), "toast shown");
        self.current = Some(Toast {
            id,
            notification,
            leaving: false,
        });
        id
    }

    /// Start the exit animation of toast `id`. Returns false if it is gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        match self.current.as_mut() {
            Some(toast) if toast.id == id && !toast.leaving => {
                toast.leaving = true;
                true
            }
            _ => false,
        }
    }

    /// Remove toast `id` if it is still the one showing.
    pub fn remove(&mut self, id: ToastId) -> bool {
        if self.current.as_ref().is_some_and(|toast| toast.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
