// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core value types: open states, directions, lengths, size classes, and chrome enums.

use peniko::Color;

/// How far the drawer is extended.
///
/// Variants are declared from least to most open, so the derived ordering follows openness.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OpenState {
    /// Drawer is hidden.
    Closed,
    /// Drawer is slightly open.
    Peek,
    /// Drawer is about half open.
    Partial,
    /// Drawer is fully open.
    Open,
}

impl OpenState {
    /// Every state, from least to most open.
    pub const ALL: [Self; 4] = [Self::Closed, Self::Peek, Self::Partial, Self::Open];
}

/// The screen edge the drawer extends from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Drawer hangs from the top edge and opens downwards.
    TopDown,
    /// Drawer rises from the bottom edge and opens upwards.
    BottomUp,
}

impl Direction {
    /// The swipe that extends the drawer.
    pub const fn opening_swipe(self) -> SwipeDirection {
        match self {
            Self::TopDown => SwipeDirection::Down,
            Self::BottomUp => SwipeDirection::Up,
        }
    }

    /// The drawer grabber sits on the edge facing the opening direction.
    pub const fn grabber_style(self) -> GrabberStyle {
        match self {
            Self::TopDown => GrabberStyle::Bottom,
            Self::BottomUp => GrabberStyle::Top,
        }
    }

    /// Drawer extent after a vertical drag of `dy` starting from `extent`.
    ///
    /// Top-down drawers grow as the pointer moves down; bottom-up drawers grow as it moves up.
    pub fn dragged_extent(self, extent: f64, dy: f64) -> f64 {
        match self {
            Self::TopDown => extent + dy,
            Self::BottomUp => extent - dy,
        }
    }
}

/// Vertical swipe directions recognized by the swipe resizer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Toward the top of the screen.
    Up,
    /// Toward the bottom of the screen.
    Down,
}

/// Drawer extent along its opening axis.
///
/// `Maximum` ranks above every `Fixed` value; `Fixed` values compare by magnitude.
///
/// Precondition: `Fixed` values should be finite (no NaN) for meaningful ordering.
/// If NaN is encountered, it compares equal to the other operand.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Length {
    /// Fill the available space.
    Maximum,
    /// A fixed extent in layout units.
    Fixed(f64),
}

impl Length {
    /// The numeric extent of a `Fixed` length.
    pub const fn fixed(self) -> Option<f64> {
        match self {
            Self::Maximum => None,
            Self::Fixed(v) => Some(v),
        }
    }

    /// The numeric extent, using `available` for `Maximum`.
    pub const fn resolve(self, available: f64) -> f64 {
        match self {
            Self::Maximum => available,
            Self::Fixed(v) => v,
        }
    }
}

impl Eq for Length {}

impl Ord for Length {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        use core::cmp::Ordering::*;
        match (*self, *other) {
            (Self::Maximum, Self::Maximum) => Equal,
            (Self::Maximum, Self::Fixed(_)) => Greater,
            (Self::Fixed(_), Self::Maximum) => Less,
            (Self::Fixed(a), Self::Fixed(b)) => a.partial_cmp(&b).unwrap_or(Equal),
        }
    }
}

impl PartialOrd for Length {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(Ord::cmp(self, other))
    }
}

/// Coarse horizontal size classification reported by the host.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SizeClass {
    /// Narrow layouts (phones in portrait, split views).
    #[default]
    Compact,
    /// Wide layouts.
    Regular,
}

impl SizeClass {
    /// Widths strictly above this are regular.
    pub const REGULAR_WIDTH_THRESHOLD: f64 = 650.0;

    /// Classify a width: anything wider than [`SizeClass::REGULAR_WIDTH_THRESHOLD`] is regular.
    pub fn for_width(width: f64) -> Self {
        if width > Self::REGULAR_WIDTH_THRESHOLD {
            Self::Regular
        } else {
            Self::Compact
        }
    }
}

bitflags::bitflags! {
    /// Corners of the drawer that are rounded.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Corners: u8 {
        /// Top-left corner.
        const TOP_LEFT     = 0b0000_0001;
        /// Top-right corner.
        const TOP_RIGHT    = 0b0000_0010;
        /// Bottom-left corner.
        const BOTTOM_LEFT  = 0b0000_0100;
        /// Bottom-right corner.
        const BOTTOM_RIGHT = 0b0000_1000;
        /// Both top corners.
        const TOP = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits();
        /// Both bottom corners.
        const BOTTOM = Self::BOTTOM_LEFT.bits() | Self::BOTTOM_RIGHT.bits();
    }
}

impl Default for Corners {
    fn default() -> Self {
        Self::all()
    }
}

/// Style of the navigation bar that follows the drawer configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BarStyle {
    /// Light bar with dark content.
    #[default]
    Default,
    /// Dark bar with light content.
    Black,
}

/// Blur materials a host can render behind the drawer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlurStyle {
    /// Very light material.
    #[default]
    ExtraLight,
    /// Light material.
    Light,
    /// Dark material.
    Dark,
}

/// Drawer background.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Background {
    /// A blurred material rendered by the host.
    Blur(BlurStyle),
    /// A solid fill.
    Solid(Color),
}

impl Default for Background {
    fn default() -> Self {
        Self::Blur(BlurStyle::default())
    }
}

/// Where the drawer's grabber handle is drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GrabberStyle {
    /// No grabber.
    #[default]
    None,
    /// Along the top edge.
    Top,
    /// Along the bottom edge.
    Bottom,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_ordering() {
        assert!(Length::Fixed(1.0) < Length::Fixed(2.0));
        assert!(Length::Fixed(2.0) > Length::Fixed(1.0));
        assert!(Length::Fixed(1.0e9) < Length::Maximum);
        assert!(Length::Fixed(-5.0) < Length::Maximum);
        assert!(!(Length::Maximum < Length::Fixed(f64::MAX)));
        assert!(!(Length::Maximum < Length::Maximum));
        assert_eq!(Length::Maximum, Length::Maximum);
        assert_eq!(Length::Fixed(86.0), Length::Fixed(86.0));
        assert_ne!(Length::Fixed(86.0), Length::Maximum);
        assert_eq!(
            [Length::Maximum, Length::Fixed(250.0), Length::Fixed(86.0)]
                .iter()
                .max(),
            Some(&Length::Maximum)
        );
    }

    #[test]
    fn length_resolution() {
        assert_eq!(Length::Fixed(86.0).fixed(), Some(86.0));
        assert_eq!(Length::Maximum.fixed(), None);
        assert_eq!(Length::Maximum.resolve(700.0), 700.0);
        assert_eq!(Length::Fixed(250.0).resolve(700.0), 250.0);
    }

    #[test]
    fn size_class_threshold_is_strict() {
        assert_eq!(SizeClass::for_width(650.0), SizeClass::Compact);
        assert_eq!(SizeClass::for_width(651.0), SizeClass::Regular);
        assert_eq!(SizeClass::for_width(0.0), SizeClass::Compact);
    }

    #[test]
    fn open_states_are_ordered_by_openness() {
        assert!(OpenState::Closed < OpenState::Peek);
        assert!(OpenState::Peek < OpenState::Partial);
        assert!(OpenState::Partial < OpenState::Open);
    }

    #[test]
    fn direction_conventions() {
        assert_eq!(Direction::BottomUp.opening_swipe(), SwipeDirection::Up);
        assert_eq!(Direction::TopDown.opening_swipe(), SwipeDirection::Down);
        assert_eq!(Direction::BottomUp.grabber_style(), GrabberStyle::Top);
        assert_eq!(Direction::TopDown.grabber_style(), GrabberStyle::Bottom);
        assert_eq!(Direction::TopDown.dragged_extent(200.0, 30.0), 230.0);
        assert_eq!(Direction::BottomUp.dragged_extent(200.0, 30.0), 170.0);
    }
}
