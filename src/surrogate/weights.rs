//! Pretrained network constants for the Mount St. Helens slope model.
//!
//! Weight and bias literals are reproduced exactly from the trained network;
//! they are never recomputed or mutated. The valid ranges describe the domain
//! the network was trained on — outside it the surrogate extrapolates, which
//! is why the pipeline rejects out-of-range input before evaluation.

use crate::types::ValidRange;

/// Input layer width (one neuron per physical parameter).
pub const NUM_INPUTS: usize = 4;

/// Hidden layer width.
pub const HIDDEN_SIZE: usize = 8;

// ============================================================================
// Valid Ranges
// ============================================================================

pub const COHESION_RANGE: ValidRange = ValidRange::new("cohesion", "kN/m²", 809.77, 1195.17);
pub const FRICTION_ANGLE_RANGE: ValidRange = ValidRange::new("friction angle", "°", 35.18, 49.40);
pub const UNIT_WEIGHT_RANGE: ValidRange = ValidRange::new("unit weight", "kN/m³", 22.02, 25.99);
pub const SEISMIC_COEFFICIENT_RANGE: ValidRange =
    ValidRange::new("seismic coefficient", "-", 0.0, 0.20);

/// Output range the network's [-1, 1] output is rescaled to.
pub const FOS_RANGE: ValidRange = ValidRange::new("FOS", "-", 1.311, 2.864);

/// Input ranges in canonical record order: [c, Ø, γ, ke].
pub const INPUT_RANGES: [ValidRange; NUM_INPUTS] = [
    COHESION_RANGE,
    FRICTION_ANGLE_RANGE,
    UNIT_WEIGHT_RANGE,
    SEISMIC_COEFFICIENT_RANGE,
];

// ============================================================================
// Network Weights
// ============================================================================

/// Input-to-hidden weights, row i = contributions of input i to each hidden
/// neuron.
pub const W1: [[f64; HIDDEN_SIZE]; NUM_INPUTS] = [
    [1.2128, 1.1998, -0.0983, 0.0943, 0.4363, -0.3550, -0.4031, -0.8791],
    [1.7655, 0.0843, -0.4341, 0.2536, 2.1245, -0.0737, 1.6471, -2.0288],
    [-0.3319, 1.1062, 0.0289, -0.0084, 0.4660, -0.6024, 1.3598, 0.4425],
    [0.9995, 0.7243, 0.4918, -0.2207, 0.1650, -0.9283, 0.2813, -1.2230],
];

/// Hidden layer biases.
pub const B1: [f64; HIDDEN_SIZE] = [
    -2.2941, -1.3986, 1.4235, 0.0455, 0.2659, -0.8758, -1.8870, 2.4074,
];

/// Hidden-to-output weights (8×1 matrix stored flat).
pub const W2: [f64; HIDDEN_SIZE] = [
    -0.0643, -0.0304, -1.1639, 1.3973, 0.0009, 0.0614, 0.0022, -0.0685,
];

/// Output bias.
pub const B2: f64 = 0.7887;
