/*
[INPUT]:  Adapter errors and flow outcomes
[OUTPUT]: Toast notifications presented to the operator
[POS]:    Presentation seam - user-facing failure reporting
[UPDATE]: When toast wording, colors or durations change
*/

use std::fmt;
use std::sync::Mutex;
use std::time::Duration;

use console::style;
use guildboard_adapter::GuildboardError;
use tracing::{info, warn};

/// Shown when the bot cannot see the server whose roles were requested
pub const ROLES_UNAVAILABLE_MESSAGE: &str =
    "Unable to get the roles from the new mint server. Please make sure the SOL Decoder bot is in that server!";

const ERROR_TOAST_DURATION: Duration = Duration::from_secs(5);
const ROLES_TOAST_DURATION: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastColor {
    Danger,
    Warning,
    Success,
}

impl fmt::Display for ToastColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToastColor::Danger => "danger",
            ToastColor::Warning => "warning",
            ToastColor::Success => "success",
        };
        f.write_str(name)
    }
}

/// Transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub color: ToastColor,
    pub duration: Duration,
    /// Whether the toast offers a close button
    pub dismissible: bool,
}

impl Toast {
    /// Danger toast for a failed backend call
    pub fn from_error(err: &GuildboardError) -> Self {
        Self {
            message: err.user_message(),
            color: ToastColor::Danger,
            duration: ERROR_TOAST_DURATION,
            dismissible: true,
        }
    }

    pub fn roles_unavailable() -> Self {
        Self {
            message: ROLES_UNAVAILABLE_MESSAGE.to_string(),
            color: ToastColor::Danger,
            duration: ROLES_TOAST_DURATION,
            dismissible: false,
        }
    }

    /// Warning toast for an action refused before reaching the backend
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            color: ToastColor::Warning,
            duration: ERROR_TOAST_DURATION,
            dismissible: true,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            color: ToastColor::Success,
            duration: ERROR_TOAST_DURATION,
            dismissible: true,
        }
    }
}

/// Sink for toasts
pub trait Notifier: Send + Sync {
    fn present(&self, toast: Toast);
}

/// Prints toasts to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn present(&self, toast: Toast) {
        match toast.color {
            ToastColor::Danger => {
                warn!(message = %toast.message, "toast");
                eprintln!("{} {}", style("✗").red().bold(), style(&toast.message).red());
            }
            ToastColor::Warning => {
                warn!(message = %toast.message, "toast");
                eprintln!("{} {}", style("!").yellow().bold(), style(&toast.message).yellow());
            }
            ToastColor::Success => {
                info!(message = %toast.message, "toast");
                eprintln!("{} {}", style("✓").green().bold(), toast.message);
            }
        }
    }
}

/// Keeps toasts in memory for later inspection
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().map(|toasts| toasts.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn present(&self, toast: Toast) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(toast);
        }
    }
}
