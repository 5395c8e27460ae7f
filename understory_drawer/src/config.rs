// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-size-class drawer configuration.
//!
//! A [`DrawerUi`] bundles everything that changes when the container swaps between its compact
//! and regular presentations: direction, initial state, geometry, chrome, and the snap policy
//! applied when a drag is released.
//!
//! ```
//! use understory_drawer::{Direction, DrawerUi, Length, OpenState, SnapPolicy};
//!
//! let ui = DrawerUi::builder(Direction::BottomUp)
//!     .length(OpenState::Partial, Length::Fixed(320.0))
//!     .snap(SnapPolicy::NearestDeclared)
//!     .build()
//!     .unwrap();
//! assert_eq!(ui.length_for(OpenState::Partial), Length::Fixed(320.0));
//!
//! let err = DrawerUi::builder(Direction::TopDown).corner_radius(-1.0).build();
//! assert!(err.is_err());
//! ```

use alloc::rc::Rc;

use kurbo::{Insets, Vec2};
use peniko::Color;

use crate::constraints::{ConstraintProvider, DrawerMetrics};
use crate::error::ConfigError;
use crate::types::{Background, BarStyle, BlurStyle, Corners, Direction, Length, OpenState};

/// Where the drawer's constraints come from.
#[derive(Clone, Debug)]
pub enum Provider {
    /// Built-in geometry.
    Metrics(DrawerMetrics),
    /// Host-supplied geometry. Two custom providers are equal only if they share the allocation.
    Custom(Rc<dyn ConstraintProvider>),
}

impl Provider {
    /// The provider as a trait object.
    pub fn as_dyn(&self) -> &dyn ConstraintProvider {
        match self {
            Self::Metrics(metrics) => metrics,
            Self::Custom(provider) => &**provider,
        }
    }
}

impl PartialEq for Provider {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Metrics(a), Self::Metrics(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Maps the extent a drag was released at to an open state.
///
/// Neither policy ever lands on [`OpenState::Peek`]; peek is reached by swiping or by API.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SnapPolicy {
    /// Fixed cut-offs: below `closed_below` closes, at or above `open_at` opens, anything in
    /// between is partial.
    Thresholds {
        /// Lengths strictly below this snap closed.
        closed_below: f64,
        /// Lengths at or above this snap open.
        open_at: f64,
    },
    /// Snap to whichever of the closed, partial, and open lengths declared by the configuration
    /// is nearest. Ties go to the less open state.
    NearestDeclared,
}

impl SnapPolicy {
    /// The default cut-offs.
    pub const DEFAULT_THRESHOLDS: Self = Self::Thresholds {
        closed_below: 150.0,
        open_at: 500.0,
    };

    /// Pick an open state for a released drag.
    ///
    /// `available` is the extent a [`Length::Maximum`] would resolve to, used by
    /// [`SnapPolicy::NearestDeclared`].
    pub fn snap(
        &self,
        extent: f64,
        provider: &dyn ConstraintProvider,
        available: f64,
    ) -> OpenState {
        match *self {
            Self::Thresholds {
                closed_below,
                open_at,
            } => {
                if extent < closed_below {
                    OpenState::Closed
                } else if extent < open_at {
                    OpenState::Partial
                } else {
                    OpenState::Open
                }
            }
            Self::NearestDeclared => {
                let mut best = OpenState::Closed;
                let mut best_distance = f64::INFINITY;
                for state in [OpenState::Closed, OpenState::Partial, OpenState::Open] {
                    let target = provider.length_for(state).resolve(available);
                    let distance = (extent - target).max(target - extent);
                    if distance < best_distance {
                        best = state;
                        best_distance = distance;
                    }
                }
                best
            }
        }
    }
}

impl Default for SnapPolicy {
    fn default() -> Self {
        Self::DEFAULT_THRESHOLDS
    }
}

/// Drawer configuration for one size class.
///
/// `direction` drives gestures and chrome; `provider` drives geometry. The presets and the
/// builder keep the two consistent.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawerUi {
    /// Edge the drawer extends from.
    pub direction: Direction,
    /// State applied when the view is first realized, unless one was set explicitly.
    pub initial_open_state: OpenState,
    /// Navigation bar style while this configuration is active.
    pub bar_style: BarStyle,
    /// Tint for the drawer and the navigation bar.
    pub tint: Color,
    /// Drawer background.
    pub background: Background,
    /// Radius of the rounded corners.
    pub corner_radius: f64,
    /// Which corners are rounded.
    pub corners: Corners,
    /// Shadow color.
    pub shadow_color: Color,
    /// Shadow blur radius.
    pub shadow_radius: f64,
    /// Shadow offset.
    pub shadow_offset: Vec2,
    /// Geometry.
    pub provider: Provider,
    /// Drag release policy.
    pub snap: SnapPolicy,
}

/// The platform's default blue tint.
fn system_blue() -> Color {
    Color::from_rgba8(0, 122, 255, 255)
}

/// Black at 10% opacity.
fn soft_shadow() -> Color {
    Color::from_rgba8(0, 0, 0, 26)
}

impl DrawerUi {
    fn preset(metrics: DrawerMetrics, corners: Corners) -> Self {
        Self {
            direction: metrics.direction,
            initial_open_state: OpenState::Peek,
            bar_style: BarStyle::Default,
            tint: system_blue(),
            background: Background::Blur(BlurStyle::ExtraLight),
            corner_radius: 13.0,
            corners,
            shadow_color: soft_shadow(),
            shadow_radius: 3.0,
            shadow_offset: Vec2::ZERO,
            provider: Provider::Metrics(metrics),
            snap: SnapPolicy::DEFAULT_THRESHOLDS,
        }
    }

    /// Bottom-up, full-width drawer with rounded top corners.
    pub fn compact() -> Self {
        Self::preset(DrawerMetrics::compact(), Corners::TOP)
    }

    /// Top-down, fixed-width drawer with all corners rounded.
    pub fn regular() -> Self {
        Self::preset(DrawerMetrics::regular(), Corners::all())
    }

    /// Start from the preset for `direction`.
    pub fn builder(direction: Direction) -> DrawerUiBuilder {
        DrawerUiBuilder::new(direction)
    }

    /// The blur style, if the background is a blur.
    pub fn blur_style(&self) -> Option<BlurStyle> {
        match self.background {
            Background::Blur(style) => Some(style),
            Background::Solid(_) => None,
        }
    }

    /// The geometry provider.
    pub fn provider(&self) -> &dyn ConstraintProvider {
        self.provider.as_dyn()
    }

    /// Drawer length for `state` under this configuration.
    pub fn length_for(&self, state: OpenState) -> Length {
        self.provider().length_for(state)
    }
}

impl Default for DrawerUi {
    fn default() -> Self {
        Self::compact()
    }
}

/// Validating builder for [`DrawerUi`].
#[derive(Clone, Debug)]
pub struct DrawerUiBuilder {
    ui: DrawerUi,
    metrics: DrawerMetrics,
    custom: Option<Rc<dyn ConstraintProvider>>,
}

impl DrawerUiBuilder {
    /// Start from the compact preset for bottom-up drawers and the regular preset for top-down.
    pub fn new(direction: Direction) -> Self {
        let ui = match direction {
            Direction::BottomUp => DrawerUi::compact(),
            Direction::TopDown => DrawerUi::regular(),
        };
        let metrics = match direction {
            Direction::BottomUp => DrawerMetrics::compact(),
            Direction::TopDown => DrawerMetrics::regular(),
        };
        Self {
            ui,
            metrics,
            custom: None,
        }
    }

    /// State applied on first realization.
    pub fn initial_open_state(mut self, state: OpenState) -> Self {
        self.ui.initial_open_state = state;
        self
    }

    /// Navigation bar style.
    pub fn bar_style(mut self, style: BarStyle) -> Self {
        self.ui.bar_style = style;
        self
    }

    /// Tint color.
    pub fn tint(mut self, tint: Color) -> Self {
        self.ui.tint = tint;
        self
    }

    /// Background.
    pub fn background(mut self, background: Background) -> Self {
        self.ui.background = background;
        self
    }

    /// Corner radius.
    pub fn corner_radius(mut self, radius: f64) -> Self {
        self.ui.corner_radius = radius;
        self
    }

    /// Rounded corners.
    pub fn corners(mut self, corners: Corners) -> Self {
        self.ui.corners = corners;
        self
    }

    /// Shadow color, blur radius, and offset.
    pub fn shadow(mut self, color: Color, radius: f64, offset: Vec2) -> Self {
        self.ui.shadow_color = color;
        self.ui.shadow_radius = radius;
        self.ui.shadow_offset = offset;
        self
    }

    /// Cross-axis width.
    pub fn width(mut self, width: Length) -> Self {
        self.metrics.width = width;
        self
    }

    /// Drawer insets from the container.
    pub fn insets(mut self, insets: Insets) -> Self {
        self.metrics.insets = insets;
        self
    }

    /// Content guide insets from the drawer.
    pub fn content_insets(mut self, insets: Insets) -> Self {
        self.metrics.content_insets = insets;
        self
    }

    /// Length for one open state.
    pub fn length(mut self, state: OpenState, length: Length) -> Self {
        let lengths = &mut self.metrics.lengths;
        match state {
            OpenState::Closed => lengths.closed = length,
            OpenState::Peek => lengths.peek = length,
            OpenState::Partial => lengths.partial = length,
            OpenState::Open => lengths.open = length,
        }
        self
    }

    /// Drag release policy.
    pub fn snap(mut self, snap: SnapPolicy) -> Self {
        self.ui.snap = snap;
        self
    }

    /// Replace the built-in geometry with a host-supplied provider.
    ///
    /// Width, insets, and lengths set on this builder are then ignored.
    pub fn provider(mut self, provider: Rc<dyn ConstraintProvider>) -> Self {
        self.custom = Some(provider);
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<DrawerUi, ConfigError> {
        let Self {
            mut ui,
            metrics,
            custom,
        } = self;
        if !(ui.corner_radius.is_finite() && ui.corner_radius >= 0.0) {
            return Err(ConfigError::InvalidCornerRadius(ui.corner_radius));
        }
        let shadow_ok =
            ui.shadow_radius.is_finite() && ui.shadow_radius >= 0.0 && ui.shadow_offset.is_finite();
        if !shadow_ok {
            return Err(ConfigError::InvalidShadow);
        }
        if let SnapPolicy::Thresholds {
            closed_below,
            open_at,
        } = ui.snap
        {
            if !(closed_below.is_finite() && open_at.is_finite() && closed_below <= open_at) {
                return Err(ConfigError::InvalidSnapThresholds {
                    closed_below,
                    open_at,
                });
            }
        }
        ui.provider = match custom {
            Some(provider) => Provider::Custom(provider),
            None => {
                validate_metrics(&metrics)?;
                Provider::Metrics(metrics)
            }
        };
        Ok(ui)
    }
}

fn validate_metrics(metrics: &DrawerMetrics) -> Result<(), ConfigError> {
    for state in OpenState::ALL {
        if let Length::Fixed(value) = metrics.lengths.get(state) {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidLength { state, value });
            }
        }
    }
    if let Length::Fixed(width) = metrics.width {
        if !(width.is_finite() && width > 0.0) {
            return Err(ConfigError::InvalidWidth(width));
        }
    }
    let finite =
        |i: Insets| i.x0.is_finite() && i.y0.is_finite() && i.x1.is_finite() && i.y1.is_finite();
    if !(finite(metrics.insets) && finite(metrics.content_insets)) {
        return Err(ConfigError::InvalidInsets);
    }
    Ok(())
}
