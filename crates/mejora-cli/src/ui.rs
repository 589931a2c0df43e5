use std::io::IsTerminal;
use std::sync::OnceLock;

use mejora_views::{Notification, NotificationLevel};

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
    pub quiet: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let table_color = std::io::stdout().is_terminal()
        && flags.format == OutputFormat::Table
        && !flags.quiet
        && std::env::var_os("NO_COLOR").is_none();

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs {
        table_color,
        term_width,
        quiet: flags.quiet,
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        term_width: None,
        quiet: false,
    })
}

/// Show a notification on stderr. Quiet mode keeps errors only.
pub fn notify(notification: &Notification) {
    if prefs().quiet && !notification.is_error() {
        return;
    }
    eprintln!("{}", styled(notification, std::io::stderr().is_terminal()));
}

fn styled(notification: &Notification, color: bool) -> String {
    if !color {
        return notification.to_string();
    }
    let code = match notification.level {
        NotificationLevel::Info => "36",
        NotificationLevel::Success => "32",
        NotificationLevel::Error => "31",
    };
    format!("\u{1b}[{code}m{notification}\u{1b}[0m")
}
