//! Frame generation.

/// One-call rendering from a [`RunConfig`](crate::RunConfig).
pub mod pipeline;
/// The latent walk loop.
pub mod walk;
