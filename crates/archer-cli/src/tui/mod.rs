//! Terminal UI for the Archer panel

pub mod app;
pub mod components;
mod handlers;
pub mod terminal;
pub mod themes;
pub mod utils;

pub use app::App;
