//! List navigation
//!
//! The navigator owns the selection and scroll window over a fixed list.
//! Session state is explicit, finite and deterministic: browsing until the
//! first confirm or cancel, then terminal.

pub mod entry;
pub mod events;
pub mod machine;
pub mod navigator;
pub mod picklist;

pub use entry::Entry;
pub use events::Event;
pub use machine::{Selection, State};
pub use navigator::Navigator;
pub use picklist::{FrameOutcome, Picklist};
