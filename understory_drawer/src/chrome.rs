// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer chrome: background, corners, shadow, and grabber.
//!
//! Nothing here draws. These values tell a host surface what to render and where; the shadow is
//! described as a nine-slice image so it can be rendered once and stretched with the drawer.

use kurbo::{Insets, Point, Rect, RoundedRectRadii, Size, Vec2};
use peniko::Color;

use crate::config::DrawerUi;
use crate::types::{Background, Corners, GrabberStyle};

/// Nine-slice drop shadow behind the drawer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shadow {
    /// Shadow color.
    pub color: Color,
    /// Blur radius.
    pub radius: f64,
    /// Offset of the shadow from the drawer.
    pub offset: Vec2,
    /// Corner radius of the drawer.
    pub corner_radius: f64,
    /// Rounded corners of the drawer.
    pub corners: Corners,
}

impl Shadow {
    /// How far the shadow surface extends past each drawer edge, as `Rect + Insets` outsets.
    pub fn outsets(&self) -> Insets {
        let r = self.radius;
        Insets::new(
            r - self.offset.x,
            r - self.offset.y,
            r + self.offset.x,
            r + self.offset.y,
        )
    }

    /// Side of the rounded shape blurred into the image, per axis.
    fn body_extent(&self) -> f64 {
        self.corner_radius * 2.0 + 2.0
    }

    /// Size of the unstretched shadow image.
    pub fn image_size(&self) -> Size {
        let side = self.body_extent() + self.radius * 2.0 + 1.0;
        Size::new(side, side)
    }

    /// The rounded rect that casts the shadow, in image coordinates.
    pub fn body(&self) -> Rect {
        let side = self.body_extent();
        Rect::from_origin_size(Point::new(self.radius, self.radius), Size::new(side, side))
    }

    /// Corner radii of [`Shadow::body`]; only the drawer's rounded corners are rounded.
    pub fn body_radii(&self) -> RoundedRectRadii {
        let radius = |corner| {
            if self.corners.contains(corner) {
                self.corner_radius
            } else {
                0.0
            }
        };
        RoundedRectRadii::new(
            radius(Corners::TOP_LEFT),
            radius(Corners::TOP_RIGHT),
            radius(Corners::BOTTOM_RIGHT),
            radius(Corners::BOTTOM_LEFT),
        )
    }

    /// Stretchable-region cap insets of the image (left, top, right, bottom).
    ///
    /// Edges touched by a rounded corner keep the corner radius; every edge also keeps the blur.
    pub fn cap_insets(&self) -> Insets {
        let cr = self.corner_radius;
        let corner = |mask: Corners| {
            if self.corners.intersects(mask) {
                cr
            } else {
                0.0
            }
        };
        let blur = self.radius + 1.0;
        Insets::new(
            corner(Corners::TOP_LEFT | Corners::BOTTOM_LEFT) + blur,
            corner(Corners::TOP) + blur,
            corner(Corners::TOP_RIGHT | Corners::BOTTOM_RIGHT) + blur,
            corner(Corners::BOTTOM) + blur,
        )
    }

    /// Frame of the shadow surface for a drawer frame.
    pub fn frame_for(&self, drawer: Rect) -> Rect {
        drawer + self.outsets()
    }
}

/// The drawer's grab handle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Grabber {
    /// Which edge, if any, shows the handle.
    pub style: GrabberStyle,
}

impl Grabber {
    /// Handle size.
    pub const SIZE: Size = Size::new(35.0, 5.0);
    /// Handle corner radius.
    pub const CORNER_RADIUS: f64 = 2.5;
    /// Distance from the drawer edge to the handle's top.
    pub const MARGIN: f64 = 7.0;

    /// Frame of the handle within a drawer frame, horizontally centered.
    ///
    /// A top handle starts [`Grabber::MARGIN`] below the drawer's top edge; a bottom handle
    /// starts [`Grabber::MARGIN`] above the drawer's bottom edge.
    pub fn frame_in(&self, drawer: Rect) -> Option<Rect> {
        let top = match self.style {
            GrabberStyle::None => return None,
            GrabberStyle::Top => drawer.y0 + Self::MARGIN,
            GrabberStyle::Bottom => drawer.y1 - Self::MARGIN,
        };
        let x = drawer.center().x - Self::SIZE.width / 2.0;
        Some(Rect::from_origin_size(Point::new(x, top), Self::SIZE))
    }
}

/// Everything a host surface needs to render the drawer's chrome.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawerChrome {
    /// Corner radius.
    pub corner_radius: f64,
    /// Rounded corners.
    pub corners: Corners,
    /// Background.
    pub background: Background,
    /// Tint.
    pub tint: Color,
    /// Drop shadow.
    pub shadow: Shadow,
    /// Grab handle.
    pub grabber: Grabber,
}

impl DrawerChrome {
    /// Chrome for a configuration. The grabber sits on the edge the drawer opens towards.
    pub fn from_ui(ui: &DrawerUi) -> Self {
        Self {
            corner_radius: ui.corner_radius,
            corners: ui.corners,
            background: ui.background,
            tint: ui.tint,
            shadow: Shadow {
                color: ui.shadow_color,
                radius: ui.shadow_radius,
                offset: ui.shadow_offset,
                corner_radius: ui.corner_radius,
                corners: ui.corners,
            },
            grabber: Grabber {
                style: ui.direction.grabber_style(),
            },
        }
    }
}

impl From<&DrawerUi> for DrawerChrome {
    fn from(ui: &DrawerUi) -> Self {
        Self::from_ui(ui)
    }
}
