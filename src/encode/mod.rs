//! Frame sinks.
//!
//! Sinks consume image batches in frame order and are driven by
//! [`LatentWalk::run`](crate::LatentWalk::run).

/// Image-batch grid composition.
pub mod grid;
/// Numbered PNG frame output.
pub mod png;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
