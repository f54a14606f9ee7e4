//! NIROCHECK: terminal inventory check-in/check-out for route assistance,
//! synchronized with a spreadsheet web app.

pub mod args;
pub mod config;
pub mod domain;
pub mod logging;
pub mod shutdown;
pub mod store;
pub mod sync;
pub mod ui;
