//! Estimation pipeline: parse, validate, evaluate, format.
//!
//! Orchestrates one estimation per record, in two modes:
//!
//! ```text
//! single:  four text fields  -> parse -> validate -> surrogate -> result
//! batch:   text payload      -> records -> (same per-record path) -> results
//! ```
//!
//! Each record moves Validating -> Computed | Rejected, with no retries and
//! no suspended states. Record failures are data, not process failures: a
//! batch always yields one result per record, in input order, and continues
//! past failing records.

use crate::surrogate;
use crate::surrogate::weights::{INPUT_RANGES, NUM_INPUTS};
use crate::types::{EstimationResult, ParameterSet, RecordError};

/// Fields per record, in the fixed order [c, Ø, γ, ke].
pub const FIELDS_PER_RECORD: usize = NUM_INPUTS;

/// How a batch payload groups its four numeric fields into records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchLayout {
    /// Each non-empty line holds one record: four fields separated by
    /// whitespace and/or commas.
    #[default]
    OnePerLine,
    /// Legacy layout: each record spans four consecutive non-empty lines of
    /// one value each.
    FourLines,
}

// ============================================================================
// Single-Record Estimation
// ============================================================================

/// Estimate one record supplied as four raw text fields.
///
/// Parse failures and range violations are returned as diagnostics; the
/// surrogate is only invoked once all four values are parsed and in range.
pub fn estimate_single(fields: [&str; FIELDS_PER_RECORD]) -> EstimationResult {
    estimate_fields(&fields)
}

/// Estimate one already-parsed parameter set.
///
/// Range validation still applies: the surrogate never sees out-of-range
/// input through this path either.
pub fn estimate_parameters(params: &ParameterSet) -> EstimationResult {
    if let Err(error) = validate(params) {
        return EstimationResult::Failure { error };
    }

    let fos = surrogate::evaluate(params);
    tracing::debug!(fos, ?params, "record evaluated");
    EstimationResult::Success { fos }
}

/// Estimate one record supplied as a single text line.
pub fn estimate_record(line: &str) -> EstimationResult {
    estimate_fields(&split_fields(line))
}

fn estimate_fields(fields: &[&str]) -> EstimationResult {
    if fields.len() != FIELDS_PER_RECORD {
        return EstimationResult::Failure {
            error: RecordError::Malformed {
                expected: FIELDS_PER_RECORD,
                got: fields.len(),
            },
        };
    }

    match parse_fields(fields) {
        Ok(params) => estimate_parameters(&params),
        Err(error) => EstimationResult::Failure { error },
    }
}

/// Split one record line on whitespace and/or commas.
fn split_fields(line: &str) -> Vec<&str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .collect()
}

/// Parse exactly four text fields into a ParameterSet.
fn parse_fields(fields: &[&str]) -> Result<ParameterSet, RecordError> {
    let mut values = [0.0_f64; FIELDS_PER_RECORD];
    for (slot, (field, range)) in values
        .iter_mut()
        .zip(fields.iter().zip(INPUT_RANGES.iter()))
    {
        *slot = field.parse().map_err(|_| RecordError::Parse {
            field: range.label,
            value: (*field).to_string(),
        })?;
    }
    Ok(ParameterSet::new(values[0], values[1], values[2], values[3]))
}

/// Check every field against its fixed range (inclusive bounds).
///
/// Reports the first violation; the record is rejected without partial
/// computation.
fn validate(params: &ParameterSet) -> Result<(), RecordError> {
    for (value, range) in params.as_array().into_iter().zip(INPUT_RANGES.iter()) {
        if !range.contains(value) {
            return Err(RecordError::OutOfRange {
                field: range.label,
                value,
                min: range.min,
                max: range.max,
            });
        }
    }
    Ok(())
}

// ============================================================================
// Batch Estimation
// ============================================================================

/// Estimate every record of a batch payload.
///
/// Returns a lazy iterator yielding one result per record, in input order.
/// The payload is borrowed, so calling this again on the same text restarts
/// the sequence from the beginning. Empty and whitespace-only lines are not
/// records. A trailing short group under [`BatchLayout::FourLines`] is a
/// malformed record, never a silent drop.
pub fn estimate_batch(
    text: &str,
    layout: BatchLayout,
) -> impl Iterator<Item = EstimationResult> + '_ {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    std::iter::from_fn(move || match layout {
        BatchLayout::OnePerLine => lines.next().map(estimate_record),
        BatchLayout::FourLines => {
            let mut fields: Vec<&str> = Vec::with_capacity(FIELDS_PER_RECORD);
            while fields.len() < FIELDS_PER_RECORD {
                match lines.next() {
                    Some(line) => fields.push(line),
                    None => break,
                }
            }
            if fields.is_empty() {
                None
            } else {
                Some(estimate_fields(&fields))
            }
        }
    })
}
