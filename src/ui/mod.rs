//! Terminal front-end: controller, modals, input and drawing.

pub mod app;
pub mod dialog;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod status;
pub mod stock;
pub mod terminal_guard;
pub mod theme;

pub use app::App;
pub use runtime::run;
