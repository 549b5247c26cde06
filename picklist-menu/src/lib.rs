//! Picklist menu sessions
//!
//! Ties the navigation core to a pad, a display surface and a frame clock:
//!
//! - [`Menu::picklist`] runs one list selection to completion
//! - [`Menu::error`] shows a modal message until any button is pressed
//!
//! Each session waits on the frame clock once per frame and processes that
//! frame synchronously; there is no other suspension point.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod dialog;
pub mod error;
pub mod session;

pub use error::SessionError;
pub use session::{Menu, MAX_FOOTER_LEN};

pub use picklist_core::nav::{Entry, Selection};
