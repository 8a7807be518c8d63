// Copyright 2026 the Laminate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for layer stack operations.

use core::fmt;

/// A layout axis, used to name the offending dimension in errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis (width).
    Horizontal,
    /// The y axis (height).
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Horizontal => "width",
            Self::Vertical => "height",
        })
    }
}

/// A rejected layer configuration value.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// An explicit layer size was negative.
    #[error("explicit {axis} must not be negative (got {value})")]
    NegativeSize {
        /// The dimension that was rejected.
        axis: Axis,
        /// The rejected value.
        value: f64,
    },
    /// An explicit layer size was NaN or infinite.
    #[error("explicit {axis} must be finite")]
    NonFiniteSize {
        /// The dimension that was rejected.
        axis: Axis,
    },
    /// A layer inset was NaN or infinite.
    #[error("layer insets must be finite")]
    NonFiniteInset,
}

/// Errors returned by [`LayerStack`](crate::layer::LayerStack) operations.
///
/// Failed operations leave the stack unmodified.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// A layer index was not below the number of layers.
    #[error("layer index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of layers at the time of the call.
        len: usize,
    },
    /// A layer attribute value was rejected.
    #[error("invalid layer configuration: {0}")]
    Configuration(#[from] ConfigurationError),
}

/// Rejects NaN and infinite inset values.
pub(crate) fn check_inset(value: f64) -> Result<f64, ConfigurationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigurationError::NonFiniteInset)
    }
}

/// Rejects negative, NaN and infinite explicit sizes. `None` (use the
/// intrinsic size) is always accepted.
pub(crate) fn check_size(axis: Axis, value: Option<f64>) -> Result<Option<f64>, ConfigurationError> {
    match value {
        Some(v) if !v.is_finite() => Err(ConfigurationError::NonFiniteSize { axis }),
        Some(v) if v < 0.0 => Err(ConfigurationError::NegativeSize { axis, value: v }),
        _ => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn size_checks() {
        assert_eq!(check_size(Axis::Horizontal, None), Ok(None));
        assert_eq!(check_size(Axis::Horizontal, Some(0.0)), Ok(Some(0.0)));
        assert_eq!(
            check_size(Axis::Vertical, Some(-1.0)),
            Err(ConfigurationError::NegativeSize {
                axis: Axis::Vertical,
                value: -1.0
            })
        );
        assert_eq!(
            check_size(Axis::Horizontal, Some(f64::NAN)),
            Err(ConfigurationError::NonFiniteSize {
                axis: Axis::Horizontal
            })
        );
    }

    #[test]
    fn inset_checks() {
        assert_eq!(check_inset(-3.0), Ok(-3.0));
        assert_eq!(
            check_inset(f64::INFINITY),
            Err(ConfigurationError::NonFiniteInset)
        );
    }

    #[test]
    fn messages_name_the_problem() {
        let e = Error::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(e.to_string(), "layer index 5 out of range (len 2)");
        let e = Error::from(ConfigurationError::NegativeSize {
            axis: Axis::Horizontal,
            value: -2.0,
        });
        assert_eq!(
            e.to_string(),
            "invalid layer configuration: explicit width must not be negative (got -2)"
        );
    }
}
