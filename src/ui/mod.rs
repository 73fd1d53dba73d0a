//! UI module - contains UI rendering components

pub mod toolbar;

pub use toolbar::Toolbar;
