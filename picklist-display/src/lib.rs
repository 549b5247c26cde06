//! Display abstraction and picklist rendering
//!
//! This crate provides:
//! - `Surface` trait for pixel-addressed text displays (clear, text, window)
//! - `Screen`, a character-grid surface for text-mode panels and host tests
//! - `render_picklist` to draw one navigator frame onto any surface
//!
//! # Architecture
//!
//! The navigation core decides what is visible; this crate decides where it
//! goes. Boards implement `Surface` over their video hardware and hand it to
//! the menu session.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod screen;
pub mod view;

// Re-export key types
pub use backend::{DisplayError, Surface};
pub use screen::Screen;
pub use view::{render_picklist, truncate, PicklistFrame};
