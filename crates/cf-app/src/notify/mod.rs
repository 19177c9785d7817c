mod toast;

pub use toast::{Toast, ToastId, ToastKind, ToastStore, DEFAULT_TOAST_DURATION_MS};
