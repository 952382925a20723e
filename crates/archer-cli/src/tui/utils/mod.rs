//! Small layout and text helpers shared by the panel components

pub mod layout;
pub mod text;

pub use layout::centered_rect;
pub use text::{clip_to_width, display_width, truncate_ellipsis};
