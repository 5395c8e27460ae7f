// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported when building a drawer configuration.

use thiserror::Error;

use crate::types::OpenState;

/// A value rejected by [`crate::DrawerUiBuilder::build`].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A per-state length is negative or not finite.
    #[error("length for {state:?} must be finite and non-negative, got {value}")]
    InvalidLength {
        /// State the length was declared for.
        state: OpenState,
        /// Rejected value.
        value: f64,
    },

    /// The fixed cross-axis width is not positive or not finite.
    #[error("drawer width must be finite and positive, got {0}")]
    InvalidWidth(f64),

    /// An inset is not finite.
    #[error("insets must be finite")]
    InvalidInsets,

    /// The corner radius is negative or not finite.
    #[error("corner radius must be finite and non-negative, got {0}")]
    InvalidCornerRadius(f64),

    /// The shadow radius is negative, or the radius or offset is not finite.
    #[error("shadow radius must be finite and non-negative and its offset finite")]
    InvalidShadow,

    /// Snap thresholds are not finite or not ordered.
    #[error("snap thresholds must be finite with {closed_below} <= {open_at}")]
    InvalidSnapThresholds {
        /// Lengths below this snap closed.
        closed_below: f64,
        /// Lengths at or above this snap open.
        open_at: f64,
    },
}
