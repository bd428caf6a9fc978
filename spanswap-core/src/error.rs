//! Error types for the spanswap core library.
//!
//! Defines the error enum exposed by the public API, its stable machine-readable
//! codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced by the spanning-tree operations.
///
/// Disconnected graphs, empty graphs and missing replacement edges are valid
/// outcomes and never surface here; only caller contract violations do.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SpanError {
    /// An edge referenced a vertex outside `0..vertex_count`.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices the operation was asked to cover.
        vertex_count: usize,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge ({u}, {v}) has non-finite weight")]
    NonFiniteWeight {
        /// First endpoint as stored on the edge.
        u: usize,
        /// Second endpoint as stored on the edge.
        v: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`SpanError`] variants.
    enum SpanErrorCode for SpanError {
        /// An edge referenced a vertex outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "SPAN_VERTEX_OUT_OF_RANGE",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "SPAN_NON_FINITE_WEIGHT",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SpanError>;

/// Fails with [`SpanError::VertexOutOfRange`] unless `vertex < vertex_count`.
pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> Result<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(SpanError::VertexOutOfRange {
            vertex,
            vertex_count,
        })
    }
}
