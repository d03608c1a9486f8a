use crate::numeric::error::NumericError;
use serde::{Deserialize, Serialize};

/// A range argument; integers stay integers unless mixed with floats
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    pub fn as_f64(self) -> f64 {
        match self {
            Scalar::Int(i) => i as f64,
            Scalar::Float(f) => f,
        }
    }

    /// Parse "3" as an integer and "3.0" or "1e3" as a float
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<i64>()
            .map(Scalar::Int)
            .ok()
            .or_else(|| s.parse::<f64>().ok().map(Scalar::Float))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RangeValues {
    Int(Vec<i64>),
    Float(Vec<f64>),
}

impl RangeValues {
    pub fn len(&self) -> usize {
        match self {
            RangeValues::Int(v) => v.len(),
            RangeValues::Float(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Longest range `arange` will build
pub const MAX_RANGE_LEN: usize = 100_000_000;

/// Inclusive range from one to three arguments:
/// `[stop]` counts from zero, `[start, stop]` steps by one,
/// `[start, stop, step]` is fully explicit.
pub fn arange(args: &[Scalar]) -> Result<RangeValues, NumericError> {
    let (start, stop, step) = match *args {
        [stop] => (Scalar::Int(0), stop, Scalar::Int(1)),
        [start, stop] => (start, stop, Scalar::Int(1)),
        [start, stop, step] => (start, stop, step),
        _ => return Err(NumericError::ArgumentCount(args.len())),
    };

    match (start, stop, step) {
        (Scalar::Int(start), Scalar::Int(stop), Scalar::Int(step)) => {
            arange_int(start, stop, step).map(RangeValues::Int)
        }
        _ => arange_float(start.as_f64(), stop.as_f64(), step.as_f64()).map(RangeValues::Float),
    }
}

/// Integers from `start` to `stop` inclusive, `stop` included only when it
/// lies on the step grid
pub fn arange_int(start: i64, stop: i64, step: i64) -> Result<Vec<i64>, NumericError> {
    if step == 0 {
        return Err(NumericError::ZeroStep);
    }

    let span = i128::from(stop) - i128::from(start);
    let step_wide = i128::from(step);
    if span != 0 && (span > 0) != (step_wide > 0) {
        return Ok(Vec::new());
    }
    let count = span / step_wide + 1;
    if count > MAX_RANGE_LEN as i128 {
        return Err(NumericError::TooLarge(count as f64));
    }

    let mut values = Vec::with_capacity(count as usize);
    let mut current = start;
    while (step > 0 && current <= stop) || (step < 0 && current >= stop) {
        values.push(current);
        current = match current.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(values)
}

/// Floats from `start` to `stop` inclusive.
///
/// The end is pushed out by half a step rather than to the next float, so
/// accumulated round-off can't drop `stop`.
pub fn arange_float(start: f64, stop: f64, step: f64) -> Result<Vec<f64>, NumericError> {
    for value in [start, stop, step] {
        if !value.is_finite() {
            return Err(NumericError::NonFinite(value));
        }
    }
    if step == 0.0 {
        return Err(NumericError::ZeroStep);
    }

    let end = stop + step / 2.0;
    let count = ((end - start) / step).ceil();
    if count <= 0.0 {
        return Ok(Vec::new());
    }
    if !count.is_finite() || count > MAX_RANGE_LEN as f64 {
        return Err(NumericError::TooLarge(count));
    }

    Ok((0..count as usize)
        .map(|i| start + i as f64 * step)
        .collect())
}
