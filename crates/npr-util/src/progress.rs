//! Status lines on stderr, kept off stdout so the package manager's output
//! is the only thing a pipe sees.

use std::io::Write;

use console::Style;

fn emit(style: Style, label: &str, message: &str) {
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        style.bold().apply_to(label)
    );
}

/// Announce an action, e.g. `     Running npm run build -- --watch`.
pub fn status(label: &str, message: &str) {
    emit(Style::new().green(), label, message);
}

/// Report something found along the way, e.g. how many workspaces were loaded.
pub fn status_info(label: &str, message: &str) {
    emit(Style::new().cyan(), label, message);
}

/// Something looks off but the run continues.
pub fn status_warn(label: &str, message: &str) {
    emit(Style::new().yellow(), label, message);
}
