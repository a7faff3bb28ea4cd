//! Pipeline Latch Interface.
//!
//! Common operations on the inter-stage buffers, used by reset and by the
//! pipeline inspection tooling.

/// Represents a pipeline latch (inter-stage buffer).
///
/// Latches hold the state of instructions as they move between stages.
pub trait PipelineLatch {
    /// Clears the latch back to a bubble.
    fn flush(&mut self);

    /// Checks if the latch is empty.
    ///
    /// # Returns
    ///
    /// `true` if the latch holds a bubble, `false` if it carries an instruction.
    fn is_empty(&self) -> bool;
}
