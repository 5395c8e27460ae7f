// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference frame resolution for drawer constraints.
//!
//! This is not a general constraint solver. It resolves one item at a time, per axis, from the
//! edges and sizes that constrain it, which covers everything [`crate::constraints`] produces:
//!
//! - two required edges;
//! - one required edge and a required size;
//! - one required edge and a soft size, capped by `<=`/`>=` edges.
//!
//! Referenced items must be resolved first; constraints against unresolved items are ignored.
//! Hosts with their own solver can skip this module and report the frames they compute.

use kurbo::{Insets, Rect};

use crate::constraints::{Attribute, Constraint, Item, Relation};

#[derive(Copy, Clone, Debug, Default)]
struct Span {
    start: Option<f64>,
    end: Option<f64>,
    size: Option<f64>,
    soft_size: Option<f64>,
    floor: Option<f64>,
    cap: Option<f64>,
}

impl Span {
    fn resolve(self) -> (f64, f64) {
        let size = self.size.or(self.soft_size);
        let (start, end) = match (self.start, self.end, size) {
            (Some(start), Some(end), _) => (start, end),
            (Some(start), None, Some(size)) => (start, start + size),
            (None, Some(end), Some(size)) => (end - size, end),
            (Some(start), None, None) => (start, start),
            (None, Some(end), None) => (end, end),
            (None, None, size) => (0.0, size.unwrap_or(0.0)),
        };
        if self.size.is_some() {
            return (start, end);
        }
        // Soft sizes give way to inequality caps.
        let end = self.cap.map_or(end, |cap| end.min(cap));
        let start = self.floor.map_or(start, |floor| start.max(floor));
        (start, end)
    }
}

/// Frames resolved so far, indexed by [`Item`].
#[derive(Clone, Debug)]
pub struct Frames {
    rects: [Option<Rect>; Item::COUNT],
}

impl Frames {
    /// Start from the container bounds and its safe-area insets (inward).
    pub fn new(bounds: Rect, safe_area: Insets) -> Self {
        let mut rects = [None; Item::COUNT];
        rects[Item::Root.index()] = Some(bounds);
        rects[Item::RootSafeArea.index()] = Some(bounds - safe_area);
        Self { rects }
    }

    /// The resolved frame of `item`.
    pub fn get(&self, item: Item) -> Option<Rect> {
        self.rects[item.index()]
    }

    /// Record a frame for `item`, replacing any previous value.
    pub fn set(&mut self, item: Item, rect: Rect) {
        self.rects[item.index()] = Some(rect);
    }

    fn value(&self, item: Item, attribute: Attribute) -> Option<f64> {
        let rect = self.get(item)?;
        Some(match attribute {
            Attribute::Left => rect.x0,
            Attribute::Right => rect.x1,
            Attribute::Top => rect.y0,
            Attribute::Bottom => rect.y1,
            Attribute::Width => rect.width(),
            Attribute::Height => rect.height(),
        })
    }

    /// Resolve `item` from the constraints whose first anchor is `item`, record it and return it.
    ///
    /// Constraints on other items, and constraints referencing unresolved items, are ignored.
    pub fn resolve(&mut self, item: Item, constraints: &[Constraint]) -> Rect {
        let mut x = Span::default();
        let mut y = Span::default();
        for c in constraints.iter().filter(|c| c.first.item == item) {
            let value = match c.second {
                Some(anchor) => match self.value(anchor.item, anchor.attribute) {
                    Some(v) => v + c.constant,
                    None => continue,
                },
                None => c.constant,
            };
            let span = match c.first.attribute {
                Attribute::Left | Attribute::Right | Attribute::Width => &mut x,
                Attribute::Top | Attribute::Bottom | Attribute::Height => &mut y,
            };
            let required = c.priority.is_required();
            match (c.first.attribute, c.relation) {
                (Attribute::Width | Attribute::Height, Relation::Equal) => {
                    if required {
                        span.size = Some(value);
                    } else {
                        span.soft_size = Some(value);
                    }
                }
                (Attribute::Left | Attribute::Top, Relation::Equal) => span.start = Some(value),
                (Attribute::Right | Attribute::Bottom, Relation::Equal) => span.end = Some(value),
                (_, Relation::LessThanOrEqual) => span.cap = Some(value),
                (_, Relation::GreaterThanOrEqual) => span.floor = Some(value),
            }
        }
        let (x0, x1) = x.resolve();
        let (y0, y1) = y.resolve();
        let rect = Rect::new(x0, y0, x1, y1);
        self.set(item, rect);
        rect
    }

    /// Record the part of the drawer inside the container's safe area.
    pub fn resolve_drawer_safe_area(&mut self) -> Option<Rect> {
        let drawer = self.get(Item::Drawer)?;
        let safe = self.get(Item::RootSafeArea)?;
        let clipped = Rect::new(
            drawer.x0.max(safe.x0),
            drawer.y0.max(safe.y0),
            drawer.x1.min(safe.x1),
            drawer.y1.min(safe.y1),
        );
        // Keep a well-formed rect when the drawer lies outside the safe area.
        let clipped = Rect::new(
            clipped.x0,
            clipped.y0,
            clipped.x1.max(clipped.x0),
            clipped.y1.max(clipped.y0),
        );
        self.set(Item::DrawerSafeArea, clipped);
        Some(clipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{ConstraintProvider, DrawerMetrics, slot_constraints};
    use crate::types::Length;

    const PHONE: Rect = Rect::new(0.0, 0.0, 375.0, 812.0);
    const NOTCH: Insets = Insets::new(0.0, 44.0, 0.0, 34.0);

    fn drawer(metrics: &DrawerMetrics, length: Length) -> Rect {
        let mut frames = Frames::new(PHONE, NOTCH);
        frames.resolve(Item::Drawer, &metrics.make_drawer_constraints(length))
    }

    #[test]
    fn compact_fixed_drawer_hangs_below_bottom_edge() {
        let rect = drawer(&DrawerMetrics::compact(), Length::Fixed(250.0));
        assert_eq!(rect, Rect::new(0.0, 575.0, 375.0, 825.0));
    }

    #[test]
    fn compact_open_drawer_reaches_safe_area() {
        let rect = drawer(&DrawerMetrics::compact(), Length::Maximum);
        assert_eq!(rect, Rect::new(0.0, 64.0, 375.0, 825.0));
    }

    #[test]
    fn regular_drawer_keeps_preferred_width_when_room() {
        let ipad = Rect::new(0.0, 0.0, 1024.0, 768.0);
        let mut frames = Frames::new(ipad, Insets::new(0.0, 20.0, 0.0, 0.0));
        let metrics = DrawerMetrics::regular();
        let peek = metrics.make_drawer_constraints(Length::Fixed(197.0));
        let rect = frames.resolve(Item::Drawer, &peek);
        assert_eq!(rect, Rect::new(20.0, 40.0, 340.0, 237.0));

        let open = metrics.make_drawer_constraints(Length::Maximum);
        let open = frames.resolve(Item::Drawer, &open);
        assert_eq!(open, Rect::new(20.0, 40.0, 340.0, 748.0));
    }

    // The soft width gives way to the container edge.
    #[test]
    fn regular_drawer_shrinks_in_narrow_container() {
        let mut frames = Frames::new(Rect::new(0.0, 0.0, 300.0, 600.0), Insets::ZERO);
        let metrics = DrawerMetrics::regular();
        let peek = metrics.make_drawer_constraints(Length::Fixed(197.0));
        let rect = frames.resolve(Item::Drawer, &peek);
        assert_eq!(rect.x0, 20.0);
        assert_eq!(rect.x1, 280.0);
    }

    #[test]
    fn content_guide_of_short_drawer_stops_at_safe_area() {
        let metrics = DrawerMetrics::compact();
        let length = Length::Fixed(86.0);
        let mut frames = Frames::new(PHONE, NOTCH);
        let drawer = frames.resolve(Item::Drawer, &metrics.make_drawer_constraints(length));
        assert_eq!(drawer, Rect::new(0.0, 739.0, 375.0, 825.0));
        let safe = frames.resolve_drawer_safe_area().unwrap();
        assert_eq!(safe.y1, 778.0);
        let content = metrics.make_content_constraints(length);
        let guide = frames.resolve(Item::ContentGuide, &content);
        assert_eq!(guide, Rect::new(0.0, 752.0, 375.0, 778.0));
    }

    #[test]
    fn slots_resolve_against_their_parents() {
        let mut frames = Frames::new(PHONE, NOTCH);
        let slots = slot_constraints(Insets::uniform(3.0));
        assert_eq!(frames.resolve(Item::ContentContainer, &slots), PHONE);
        assert_eq!(frames.resolve(Item::ContentChild, &slots), PHONE);

        frames.set(Item::Drawer, Rect::new(0.0, 500.0, 375.0, 800.0));
        let shadow = frames.resolve(Item::Shadow, &slots);
        assert_eq!(shadow, Rect::new(-3.0, 497.0, 378.0, 803.0));
    }

    #[test]
    fn unresolved_references_are_ignored() {
        let mut frames = Frames::new(PHONE, NOTCH);
        let metrics = DrawerMetrics::compact();
        let guide = frames.resolve(
            Item::ContentGuide,
            &metrics.make_content_constraints(Length::Maximum),
        );
        assert_eq!(guide, Rect::ZERO);
        assert!(frames.resolve_drawer_safe_area().is_none());
    }
}
