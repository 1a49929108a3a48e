// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation errors.

use kurbo::Rect;

/// Reasons a [`WidgetState`](crate::WidgetState) cannot be built or reconfigured.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The frame has a non-finite coordinate or a negative extent.
    #[error("invalid frame {0:?}: coordinates must be finite and extents non-negative")]
    InvalidFrame(Rect),

    /// A theme metric is out of range.
    #[error("invalid theme metric `{name}`: {value}")]
    InvalidMetric {
        /// Field name on [`Theme`](crate::Theme).
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
}

impl Error {
    pub(crate) fn invalid_metric(name: &'static str, value: f64) -> Self {
        Self::InvalidMetric { name, value }
    }
}

/// Checks that `frame` is usable as a widget frame.
pub(crate) fn validate_frame(frame: Rect) -> Result<(), Error> {
    if frame.is_finite() && frame.width() >= 0.0 && frame.height() >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidFrame(frame))
    }
}
