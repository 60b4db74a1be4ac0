//! Structured errors surfaced by the core.
//!
//! The core never logs (see the crate-level docs): every failure is
//! returned to the caller as a value of [`Error`], never printed or
//! swallowed. Reduction itself is total and never produces an error;
//! everything here originates in construction, closure, sorting, or
//! serialization.

use thiserror::Error;

/// Every failure mode the core can produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A simplex was constructed from a vertex list that is not
    /// strictly increasing.
    #[error("vertex list {0:?} is not strictly increasing")]
    InvalidVertexOrder(Vec<usize>),

    /// A vertex list contained the same vertex twice.
    #[error("vertex {0} appears more than once in the simplex")]
    DuplicateVertex(usize),

    /// A boundary-matrix conversion encountered a simplex whose
    /// codimension-1 face is not present in the complex.
    #[error("simplex at filtration index {child} is missing a face with vertices {face:?}; the complex is not closed")]
    NotClosed { child: usize, face: Vec<usize> },

    /// `close()`'s combiner declined to derive a weight for a missing
    /// face from the weights of its known cofaces (e.g. the cofaces
    /// disagreed and the combiner refuses to guess).
    #[error("combiner could not derive a weight for missing face {0:?} during close()")]
    UnknownFaceDuringClose(Vec<usize>),

    /// `sort()` could not establish a face-before-coface order even
    /// after the automatic dimension tie-breaker.
    #[error("filtration order is cyclic: no ordering places every face before its cofaces")]
    CyclicFiltrationOrder,

    /// A point-cloud collaborator passed vectors of mismatched length.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// `p_norm` was called with exponent zero.
    #[error("p_norm requires a non-zero exponent")]
    ZeroExponent,

    /// A perversity value fell outside the admissible range and was
    /// clamped back into range; this variant is informational, never
    /// propagated as a hard failure (§7 policy: clamp and continue).
    #[error("perversity value {value} at level {level} is out of range and was clamped to {clamped}")]
    OutOfRangePerversity { level: usize, value: i64, clamped: i64 },

    /// A weight used to build a diagram point was NaN, and the caller
    /// did not opt in to silently dropping such points.
    #[error("NaN weight encountered while building a diagram point")]
    NaNInWeights,

    /// A serialized diagram (plain text or JSON) could not be parsed.
    #[error("failed to parse diagram at line {line}: {message}")]
    ParseError { line: usize, message: String },
}

/// Convenience alias used throughout the core.
pub type Result<T> = std::result::Result<T, Error>;
