//! Latent vectors and the samplers that draw them.

/// Latent batch storage and walk arithmetic.
pub mod batch;
/// Latent point samplers.
pub mod sampler;
