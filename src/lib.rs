//! SLOPE-FOS: Slope Stability Factor of Safety Estimation
//!
//! Evaluates a pretrained, fixed-weight neural surrogate of a Mount St.
//! Helens slope stability model. Four physical inputs — cohesion, angle of
//! internal friction, unit weight, seismic coefficient — map to one Factor
//! of Safety estimate.
//!
//! ## Architecture
//!
//! - **Surrogate model**: fixed weight/bias constants and the pure forward
//!   pass (normalize, two dense layers with tanh, denormalize)
//! - **Estimation pipeline**: parsing, range validation, batch iteration,
//!   result formatting
//!
//! The pipeline is the only caller of the surrogate and guarantees its
//! pre-validated-input invariant. Presentation (CLI, files) lives in the
//! binary; the library is pure compute with no I/O.

pub mod pipeline;
pub mod surrogate;
pub mod types;

// Re-export the pipeline surface
pub use pipeline::{
    estimate_batch, estimate_parameters, estimate_record, estimate_single, BatchLayout,
};

// Re-export commonly used types
pub use types::{EstimationResult, ParameterSet, RecordError, ValidRange};
