//! Frame timing

/// Vertical sync source
///
/// The only suspension point of a session: it waits here once per frame,
/// and the frame count is its only notion of time.
#[allow(async_fn_in_trait)]
pub trait FrameClock {
    /// Wait for the next vertical blank
    async fn next_frame(&mut self);
}
