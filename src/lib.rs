//! Core library surface for the Student Records Manager TUI application.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as potential external tooling can reuse the same
//! pieces. Keeping the glue logic documented makes it easy to recall why each
//! re-export exists when revisiting the project.
pub mod models;
pub mod store;
pub mod ui;

/// The record store every layer reads and mutates, plus its error taxonomy.
pub use store::{RecordStore, StoreError};

/// The three domain types that other layers manipulate.
pub use models::{Course, Enrollment, Student};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
