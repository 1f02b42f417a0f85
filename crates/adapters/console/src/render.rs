//! Plain-text rendering for the terminal.

use std::fmt::Write as _;

use easypanel_domain::binding::{Binding, BindingKind};
use easypanel_domain::notification::{Notification, Severity};

use crate::board::ElementState;

const BLANK: &str = "-";

/// Render the board as an aligned table, one element per line.
///
/// ```text
/// service  nginx      Running  [success]
/// stat     cpu_usage  45%
/// ```
#[must_use]
pub fn render_board(elements: &[(Binding, ElementState)]) -> String {
    let key_width = elements
        .iter()
        .map(|(binding, _)| binding.key.chars().count())
        .max()
        .unwrap_or(0);
    let text_width = elements
        .iter()
        .map(|(_, state)| display_text(state).chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (binding, state) in elements {
        let kind = match binding.kind {
            BindingKind::ServiceStatus => "service",
            BindingKind::Stat => "stat",
        };
        let text = display_text(state);
        let line = match state.category {
            Some(category) => format!(
                "{kind:<7}  {key:<key_width$}  {text:<text_width$}  [{category}]",
                key = binding.key,
            ),
            None => format!("{kind:<7}  {key:<key_width$}  {text}", key = binding.key),
        };
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

fn display_text(state: &ElementState) -> &str {
    if state.text.is_empty() {
        BLANK
    } else {
        &state.text
    }
}

/// Render one notification, e.g. `[14:02:11] ok    nginx started successfully`.
#[must_use]
pub fn render_notification(notification: &Notification) -> String {
    let tag = match notification.severity {
        Severity::Success => "ok",
        Severity::Danger => "error",
    };
    format!(
        "[{}] {tag:<5} {}",
        notification.created_at.format("%H:%M:%S"),
        notification.message
    )
}
