//! App handlers
//!
//! Event loop and rendering, split out of app.rs.

mod event_loop;
mod rendering;
