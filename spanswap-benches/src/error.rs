//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use spanswap_core::SpanError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// Description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// The generated graph produced an MST without edges to remove.
    #[error("generated graph has an empty minimum spanning tree")]
    EmptyForest,
    /// A core operation failed.
    #[error("spanning tree operation failed: {0}")]
    Span(#[from] SpanError),
}
