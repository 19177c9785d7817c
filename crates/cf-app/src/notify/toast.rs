use serde::Serialize;

/// How long a toast stays visible unless configured otherwise.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 2000;

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: ToastKind,
    #[serde(skip)]
    created_at_ms: i64,
}

/// Transient user notifications with timed expiry.
///
/// Expiry is evaluated lazily against the timestamp passed to `active`, so
/// the store needs no timer of its own.
#[derive(Debug)]
pub struct ToastStore {
    toasts: Vec<Toast>,
    counter: ToastId,
    duration_ms: u64,
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION_MS)
    }
}

impl ToastStore {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            toasts: Vec::new(),
            counter: 0,
            duration_ms,
        }
    }

    /// Posts a toast. Ids increase monotonically from 1.
    pub fn add(&mut self, message: impl Into<String>, kind: ToastKind, now_ms: i64) -> ToastId {
        self.counter += 1;
        self.toasts.push(Toast {
            id: self.counter,
            message: message.into(),
            kind,
            created_at_ms: now_ms,
        });
        self.counter
    }

    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        before != self.toasts.len()
    }

    /// Drops expired toasts and returns the rest in posting order.
    pub fn active(&mut self, now_ms: i64) -> Vec<Toast> {
        let duration = i64::try_from(self.duration_ms).unwrap_or(i64::MAX);
        self.toasts
            .retain(|toast| toast.created_at_ms.saturating_add(duration) > now_ms);
        self.toasts.clone()
    }
}
