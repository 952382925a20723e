//! Panel components

pub mod animated_panel;
pub mod banner;

pub use animated_panel::AnimatedPanel;
