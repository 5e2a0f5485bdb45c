//! Binary entry point that glues the in-memory record store to the TUI.
//! The store is transient: it starts empty and everything entered during the
//! session is lost on exit.
use student_records_manager::{run_app, App, RecordStore};

/// Build the empty store, hand it to the application state, and drive the
/// Ratatui event loop until the user exits.
///
/// Returning a `Result` bubbles up fatal terminal-setup problems to the shell
/// instead of crashing silently.
fn main() -> anyhow::Result<()> {
    let store = RecordStore::new();

    let mut app = App::new(store);
    run_app(&mut app)
}
