//! Collaborator traits
//!
//! The picklist core never touches hardware directly. Pad polling and
//! frame timing are provided by the board through these traits.

pub mod clock;
pub mod pad;

pub use clock::FrameClock;
pub use pad::PadSource;
