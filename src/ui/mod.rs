//! Ratatui front-end split across logical submodules: central state and
//! drawing in `app`, text-entry state in `forms`, per-screen selection state
//! in `screens`, and the raw-mode event loop in `terminal`.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
