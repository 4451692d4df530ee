//! Neural surrogate model for slope stability FOS.
//!
//! Evaluates a pretrained, fixed-weight feed-forward network in place of a
//! full limit-equilibrium simulation:
//!
//! ```text
//! x      = normalize(inputs)              // per-parameter linear map to [-1, 1]
//! hidden = tanh(x · W1 + B1)              // 4 -> 8
//! raw    = hidden · W2 + B2               // 8 -> 1
//! FOS    = denormalize(raw)               // [-1, 1] -> [FOS_min, FOS_max]
//! ```
//!
//! All math is plain f64 loops so results are reproducible IEEE-754 doubles.
//! The model trusts its caller for range validity and performs no bounds
//! checking; out-of-range input produces a mathematically defined but
//! physically meaningless extrapolation, which is why the pipeline validates
//! first.

pub mod weights;

use crate::surrogate::weights::{B1, B2, FOS_RANGE, HIDDEN_SIZE, INPUT_RANGES, NUM_INPUTS, W1, W2};
use crate::types::{ParameterSet, ValidRange};

/// Linearly map `value` from `range` to [-1, 1].
///
/// Requires `range.min < range.max` and `value` within the range; both are
/// guaranteed by the pipeline's validation step.
pub fn normalize(value: f64, range: &ValidRange) -> f64 {
    2.0 * ((value - range.min) / range.span()) - 1.0
}

/// Rescale the network's raw [-1, 1] output to the physical FOS range.
pub fn denormalize_fos(raw: f64) -> f64 {
    ((raw + 1.0) / 2.0) * FOS_RANGE.span() + FOS_RANGE.min
}

/// Evaluate the surrogate for one pre-validated parameter set.
///
/// Pure function of the weight constants and the input: identical input
/// yields bit-identical output.
pub fn evaluate(params: &ParameterSet) -> f64 {
    let raw_inputs = params.as_array();

    let mut x = [0.0_f64; NUM_INPUTS];
    for (i, (value, range)) in raw_inputs.iter().zip(INPUT_RANGES.iter()).enumerate() {
        x[i] = normalize(*value, range);
    }

    // Hidden layer: tanh(x · W1 + B1)
    let mut hidden = [0.0_f64; HIDDEN_SIZE];
    for (j, h) in hidden.iter_mut().enumerate() {
        let mut sum = B1[j];
        for i in 0..NUM_INPUTS {
            sum += x[i] * W1[i][j];
        }
        *h = sum.tanh();
    }

    // Output layer: hidden · W2 + B2
    let mut raw = B2;
    for j in 0..HIDDEN_SIZE {
        raw += hidden[j] * W2[j];
    }

    denormalize_fos(raw)
}
