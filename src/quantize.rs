use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShapeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// What to do with a rounded coordinate that does not fit in a `u8`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    #[default]
    Reject,
    Clamp,
    /// Modulo 256, the same bits an `uint8_t` store would keep.
    Wrap,
}

impl FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(OverflowPolicy::Reject),
            "clamp" => Ok(OverflowPolicy::Clamp),
            "wrap" => Ok(OverflowPolicy::Wrap),
            other => Err(format!("unknown overflow policy: {} (expected reject, clamp or wrap)", other)),
        }
    }
}

/// Rounds half up by adding 0.5 and truncating toward zero.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).trunc()
}

/// Returns `None` when `policy` is `Reject` and the rounded value is outside
/// `0..=255` (or not a number).
pub fn quantize(value: f64, policy: OverflowPolicy) -> Option<u8> {
    let rounded = round_half_up(value);
    if (0.0..=255.0).contains(&rounded) {
        return Some(rounded as u8);
    }

    match policy {
        OverflowPolicy::Reject => None,
        OverflowPolicy::Clamp => Some(if rounded.is_nan() || rounded < 0.0 { 0 } else { 255 }),
        OverflowPolicy::Wrap => {
            if rounded.is_finite() {
                Some((rounded as i64).rem_euclid(256) as u8)
            } else {
                Some(0)
            }
        }
    }
}

pub fn quantize_axis(values: &[f64], axis: Axis, policy: OverflowPolicy) -> Result<Vec<u8>, ShapeError> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            quantize(value, policy).ok_or(ShapeError::OutOfRange { axis, index, value })
        })
        .collect()
}
