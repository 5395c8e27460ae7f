// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box-model constraints and the geometry provider that generates them.
//!
//! Constraints are plain values: an edge or size of one [`Item`] related to an edge of another
//! item (or to a constant), with a [`Priority`]. Hosts with a constraint solver translate them
//! one-to-one; [`crate::frame`] resolves them directly for the subset the drawer uses.
//!
//! ```
//! use understory_drawer::constraints::{ConstraintProvider, DrawerMetrics, Item};
//! use understory_drawer::{Direction, Length, OpenState};
//!
//! let metrics = DrawerMetrics::compact();
//! assert_eq!(metrics.length_for(OpenState::Partial), Length::Fixed(250.0));
//!
//! let constraints = metrics.make_drawer_constraints(Length::Fixed(250.0));
//! assert!(constraints.iter().all(|c| c.first.item == Item::Drawer));
//! assert_eq!(constraints, metrics.make_drawer_constraints(Length::Fixed(250.0)));
//! ```

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Insets;

use crate::types::{Direction, Length, OpenState};

/// Surfaces and guides that take part in the drawer layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Item {
    /// The container's own bounds.
    Root,
    /// The container's safe area.
    RootSafeArea,
    /// Surface hosting the content child.
    ContentContainer,
    /// The host's content child.
    ContentChild,
    /// The drawer surface.
    Drawer,
    /// The part of the drawer inside the container's safe area.
    DrawerSafeArea,
    /// Guide the drawer child is laid out against.
    ContentGuide,
    /// The host's drawer child.
    DrawerChild,
    /// The drawer's nine-slice shadow image.
    Shadow,
}

impl Item {
    /// Number of items.
    pub const COUNT: usize = 9;

    /// The item this one is placed in; `None` for the root.
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Root => None,
            Self::RootSafeArea | Self::ContentContainer | Self::Drawer => Some(Self::Root),
            Self::ContentChild => Some(Self::ContentContainer),
            Self::DrawerSafeArea | Self::ContentGuide | Self::DrawerChild | Self::Shadow => {
                Some(Self::Drawer)
            }
        }
    }

    /// Dense index in `0..Item::COUNT`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Left edge anchor.
    pub const fn left(self) -> Anchor {
        Anchor::new(self, Attribute::Left)
    }

    /// Right edge anchor.
    pub const fn right(self) -> Anchor {
        Anchor::new(self, Attribute::Right)
    }

    /// Top edge anchor.
    pub const fn top(self) -> Anchor {
        Anchor::new(self, Attribute::Top)
    }

    /// Bottom edge anchor.
    pub const fn bottom(self) -> Anchor {
        Anchor::new(self, Attribute::Bottom)
    }

    /// Width anchor.
    pub const fn width(self) -> Anchor {
        Anchor::new(self, Attribute::Width)
    }

    /// Height anchor.
    pub const fn height(self) -> Anchor {
        Anchor::new(self, Attribute::Height)
    }
}

/// Edges and sizes of an item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Minimum x.
    Left,
    /// Maximum x.
    Right,
    /// Minimum y.
    Top,
    /// Maximum y.
    Bottom,
    /// Horizontal extent.
    Width,
    /// Vertical extent.
    Height,
}

impl Attribute {
    /// Returns `true` for `Width` and `Height`.
    pub const fn is_size(self) -> bool {
        matches!(self, Self::Width | Self::Height)
    }
}

/// How the two sides of a constraint relate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `first == second + constant`.
    Equal,
    /// `first <= second + constant`.
    LessThanOrEqual,
    /// `first >= second + constant`.
    GreaterThanOrEqual,
}

/// Constraint priority; [`Priority::REQUIRED`] constraints must hold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Priority(pub u16);

impl Priority {
    /// Must hold.
    pub const REQUIRED: Self = Self(1000);
    /// Holds unless a required constraint conflicts.
    pub const HIGH: Self = Self(750);
    /// Weak preference.
    pub const LOW: Self = Self(250);

    /// Returns `true` for [`Priority::REQUIRED`] and above.
    pub const fn is_required(self) -> bool {
        self.0 >= Self::REQUIRED.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::REQUIRED
    }
}

/// One attribute of one item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Anchor {
    /// The item.
    pub item: Item,
    /// The attribute.
    pub attribute: Attribute,
}

impl Anchor {
    /// Create an anchor.
    pub const fn new(item: Item, attribute: Attribute) -> Self {
        Self { item, attribute }
    }

    /// `self == other`.
    pub const fn equal_to(self, other: Self) -> Constraint {
        Constraint::new(self, Relation::Equal, Some(other))
    }

    /// `self <= other`.
    pub const fn less_than_or_equal_to(self, other: Self) -> Constraint {
        Constraint::new(self, Relation::LessThanOrEqual, Some(other))
    }

    /// `self >= other`.
    pub const fn greater_than_or_equal_to(self, other: Self) -> Constraint {
        Constraint::new(self, Relation::GreaterThanOrEqual, Some(other))
    }

    /// `self == value`; meant for size anchors.
    pub const fn equal_to_constant(self, value: f64) -> Constraint {
        Constraint::new(self, Relation::Equal, None).offset(value)
    }
}

/// A linear relation `first <relation> second + constant`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Constraint {
    /// Constrained anchor.
    pub first: Anchor,
    /// Relation between the two sides.
    pub relation: Relation,
    /// Reference anchor; `None` relates `first` to `constant` alone.
    pub second: Option<Anchor>,
    /// Added to the reference side.
    pub constant: f64,
    /// How strongly the relation should hold.
    pub priority: Priority,
}

impl Constraint {
    /// Create a required constraint with a zero constant.
    pub const fn new(first: Anchor, relation: Relation, second: Option<Anchor>) -> Self {
        Self {
            first,
            relation,
            second,
            constant: 0.0,
            priority: Priority::REQUIRED,
        }
    }

    /// Set the constant.
    pub const fn offset(mut self, constant: f64) -> Self {
        self.constant = constant;
        self
    }

    /// Set the priority.
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Pin the four edges of `item` to the edges of `target`, pushed outwards by `outsets`.
///
/// Follows the [`Insets`] convention of `Rect + Insets`: positive values grow the item beyond
/// `target`, negative values shrink it.
pub fn pin_edges(item: Item, target: Item, outsets: Insets) -> [Constraint; 4] {
    [
        item.top().equal_to(target.top()).offset(-outsets.y0),
        item.left().equal_to(target.left()).offset(-outsets.x0),
        item.bottom().equal_to(target.bottom()).offset(outsets.y1),
        item.right().equal_to(target.right()).offset(outsets.x1),
    ]
}

/// Pin the four edges of `item` to its parent, pushed outwards by `outsets`.
///
/// # Panics
///
/// Panics if `item` has no parent ([`Item::Root`]).
pub fn fill(item: Item, outsets: Insets) -> [Constraint; 4] {
    let Some(parent) = item.parent() else {
        panic!("{item:?} has no parent to fill: a parent is required");
    };
    pin_edges(item, parent, outsets)
}

/// Constraints for the fixed parts of the hierarchy.
///
/// The content container fills the root and the content child fills the content container;
/// the drawer child is pinned to the content guide; the shadow fills the drawer, grown by
/// `shadow_outsets`.
pub fn slot_constraints(shadow_outsets: Insets) -> Vec<Constraint> {
    let mut constraints = Vec::with_capacity(16);
    constraints.extend(fill(Item::ContentContainer, Insets::ZERO));
    constraints.extend(fill(Item::ContentChild, Insets::ZERO));
    constraints.extend(pin_edges(Item::DrawerChild, Item::ContentGuide, Insets::ZERO));
    constraints.extend(fill(Item::Shadow, shadow_outsets));
    constraints
}

/// Lengths declared for each open state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StateLengths {
    /// Length when closed.
    pub closed: Length,
    /// Length when peeking.
    pub peek: Length,
    /// Length when partially open.
    pub partial: Length,
    /// Length when open.
    pub open: Length,
}

impl StateLengths {
    /// The length declared for `state`.
    pub const fn get(&self, state: OpenState) -> Length {
        match state {
            OpenState::Closed => self.closed,
            OpenState::Peek => self.peek,
            OpenState::Partial => self.partial,
            OpenState::Open => self.open,
        }
    }
}

/// Maps open states to lengths and lengths to layout constraints.
///
/// Implementations must be deterministic and free of side effects: the same inputs always
/// produce the same constraints.
pub trait ConstraintProvider: core::fmt::Debug {
    /// Drawer length for an open state.
    fn length_for(&self, state: OpenState) -> Length;

    /// Constraints placing [`Item::Drawer`] within [`Item::Root`] at `length`.
    fn make_drawer_constraints(&self, length: Length) -> Vec<Constraint>;

    /// Constraints placing [`Item::ContentGuide`] within [`Item::Drawer`] at `length`.
    fn make_content_constraints(&self, length: Length) -> Vec<Constraint>;
}

/// Built-in geometry: a per-state length table plus edge insets.
///
/// `insets` and `content_insets` are inward: positive values move an edge towards the middle.
/// A negative bottom inset lets the drawer extend past the container, hiding its bottom corners.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawerMetrics {
    /// Edge the drawer extends from.
    pub direction: Direction,
    /// Cross-axis extent of the drawer.
    pub width: Length,
    /// Drawer insets from the container (top and bottom are taken from the safe area where
    /// the drawer is anchored to it).
    pub insets: Insets,
    /// Content guide insets from the drawer.
    pub content_insets: Insets,
    /// Per-state lengths.
    pub lengths: StateLengths,
}

impl DrawerMetrics {
    /// Fixed lengths below this anchor the content guide to the drawer's safe area.
    pub const SAFE_AREA_THRESHOLD: f64 = 100.0;

    /// Geometry of the compact preset: bottom-up, full width.
    pub const fn compact() -> Self {
        Self {
            direction: Direction::BottomUp,
            width: Length::Maximum,
            insets: Insets::new(0.0, 20.0, 0.0, -13.0),
            content_insets: Insets::new(0.0, 13.0, 0.0, 13.0),
            lengths: StateLengths {
                closed: Length::Fixed(86.0),
                peek: Length::Fixed(86.0),
                partial: Length::Fixed(250.0),
                open: Length::Maximum,
            },
        }
    }

    /// Geometry of the regular preset: top-down, 320 wide.
    pub const fn regular() -> Self {
        Self {
            direction: Direction::TopDown,
            width: Length::Fixed(320.0),
            insets: Insets::new(20.0, 20.0, 20.0, 20.0),
            content_insets: Insets::new(0.0, 10.0, 0.0, 10.0),
            lengths: StateLengths {
                closed: Length::Fixed(197.0),
                peek: Length::Fixed(197.0),
                partial: Length::Fixed(250.0),
                open: Length::Maximum,
            },
        }
    }

    fn horizontal(&self) -> Vec<Constraint> {
        let insets = self.insets;
        let left = Item::Drawer
            .left()
            .equal_to(Item::Root.left())
            .offset(insets.x0);
        match self.width {
            Length::Maximum => vec![
                left,
                Item::Drawer
                    .right()
                    .equal_to(Item::Root.right())
                    .offset(-insets.x1),
            ],
            Length::Fixed(width) => vec![
                left,
                Item::Drawer
                    .right()
                    .less_than_or_equal_to(Item::Root.right())
                    .offset(-insets.x1),
                Item::Drawer
                    .width()
                    .equal_to_constant(width)
                    .with_priority(Priority::HIGH),
            ],
        }
    }

    fn vertical(&self, length: Length) -> [Constraint; 2] {
        let insets = self.insets;
        let safe_top = Item::Drawer
            .top()
            .equal_to(Item::RootSafeArea.top())
            .offset(insets.y0);
        match (self.direction, length) {
            (Direction::BottomUp, Length::Maximum) => [
                Item::Drawer
                    .bottom()
                    .equal_to(Item::Root.bottom())
                    .offset(-insets.y1),
                safe_top,
            ],
            (Direction::BottomUp, Length::Fixed(height)) => [
                Item::Drawer
                    .bottom()
                    .equal_to(Item::Root.bottom())
                    .offset(-insets.y1),
                Item::Drawer.height().equal_to_constant(height),
            ],
            (Direction::TopDown, Length::Maximum) => [
                Item::Drawer
                    .bottom()
                    .equal_to(Item::RootSafeArea.bottom())
                    .offset(-insets.y1),
                safe_top,
            ],
            (Direction::TopDown, Length::Fixed(height)) => {
                [safe_top, Item::Drawer.height().equal_to_constant(height)]
            }
        }
    }
}

impl Default for DrawerMetrics {
    fn default() -> Self {
        Self::compact()
    }
}

impl ConstraintProvider for DrawerMetrics {
    fn length_for(&self, state: OpenState) -> Length {
        self.lengths.get(state)
    }

    fn make_drawer_constraints(&self, length: Length) -> Vec<Constraint> {
        let mut constraints = self.horizontal();
        constraints.extend(self.vertical(length));
        constraints
    }

    fn make_content_constraints(&self, length: Length) -> Vec<Constraint> {
        let insets = self.content_insets;
        let bottom = match length {
            Length::Fixed(v) if v < Self::SAFE_AREA_THRESHOLD => Item::ContentGuide
                .bottom()
                .equal_to(Item::DrawerSafeArea.bottom()),
            _ => Item::ContentGuide
                .bottom()
                .equal_to(Item::Drawer.bottom())
                .offset(-insets.y1),
        };
        vec![
            Item::ContentGuide
                .left()
                .equal_to(Item::Drawer.left())
                .offset(insets.x0),
            Item::ContentGuide
                .right()
                .equal_to(Item::Drawer.right())
                .offset(-insets.x1),
            Item::ContentGuide
                .top()
                .equal_to(Item::Drawer.top())
                .offset(insets.y0),
            bottom,
        ]
    }
}
