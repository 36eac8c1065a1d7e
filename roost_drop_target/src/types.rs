// Copyright 2026 the Roost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for drop-target resolution: orientations, operations, block
//! geometry, and decisions.

use kurbo::Rect;
use roost_geometry::Edge;

/// Axis along which a block list is laid out.
///
/// The orientation decides which edge pair of each block participates in
/// nearest-edge resolution: vertical lists use top/bottom, horizontal lists
/// use left/right.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Blocks flow along the x axis.
    Horizontal,
    /// Blocks flow along the y axis.
    #[default]
    Vertical,
}

impl Orientation {
    /// The edge pair eligible for nearest-edge resolution under this
    /// orientation, in tie-break order.
    pub const fn allowed_edges(self) -> &'static [Edge] {
        match self {
            Self::Horizontal => &[Edge::Left, Edge::Right],
            Self::Vertical => &[Edge::Top, Edge::Bottom],
        }
    }
}

/// Text direction of the surrounding context.
///
/// In right-to-left contexts the meaning of the horizontal edges flips:
/// the *right* edge of a block is "before" it and the *left* edge "after".
/// Vertical resolution is unaffected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum TextDirection {
    /// Left-to-right flow (the default).
    #[default]
    LeftToRight,
    /// Right-to-left flow; horizontal edge meanings are mirrored.
    RightToLeft,
}

/// What a drop at the decided index means.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Operation {
    /// Insert a new block among siblings at the index; nothing is replaced.
    #[default]
    Insert,
    /// Replace the placeholder block at the index with the dragged content.
    Replace,
    /// Place the dragged content before the container itself, at the index
    /// among the *parent's* children.
    Before,
    /// Place the dragged content after the container itself, at the index
    /// among the *parent's* children.
    After,
}

/// Geometry snapshot for one visible block in the target list.
///
/// Entries may arrive in display order; [`Self::block_index`] carries the
/// block's logical position in the list. The rectangle is plain data: callers
/// batch-fetch geometry once per resolution pass, so a block whose geometry
/// cannot be resolved is simply absent from the slice.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlockGeometry {
    /// The block's index in the list (0-based).
    pub block_index: usize,
    /// Whether the block is an unmodified default block. Placeholders attract
    /// the pointer across their whole area and are replaced rather than
    /// inserted beside.
    pub is_placeholder: bool,
    /// The block's bounding rectangle, in the same coordinate space as the
    /// pointer position.
    pub rect: Rect,
}

/// The outcome of one resolution: where the drop lands and what it does.
///
/// For [`Operation::Insert`], [`Operation::Before`], and [`Operation::After`]
/// the index is an insertion point in `0..=N`; for [`Operation::Replace`] it
/// names an existing placeholder block in `0..N`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DropDecision {
    /// The insertion index (or, for replace, the placeholder's index).
    pub index: usize,
    /// What a drop at that index means.
    pub operation: Operation,
}

/// Geometry of a nested container whose outer edges act as escape zones.
///
/// When the pointer comes close to the container's outer edge (and the
/// container is large enough for the gesture to be unambiguous), the drop
/// targets the *parent* level instead of the container's children.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContainerEscape {
    /// The container's own bounding rectangle.
    pub rect: Rect,
    /// Orientation of the *parent* list the container sits in.
    pub parent_orientation: Orientation,
    /// The container's index among its own siblings.
    pub container_index: usize,
}

/// Per-call options for [`resolve`](crate::resolve).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct ResolveOptions {
    /// Container escape-zone geometry, when the list being resolved is
    /// nested and escaping to the parent level is possible.
    pub escape: Option<ContainerEscape>,
    /// Text direction governing horizontal edge meanings.
    pub direction: TextDirection,
}

/// Minimum extent (height for vertical parents, width for horizontal ones) a
/// container must exceed before its edges act as escape zones.
pub const CONTAINER_ESCAPE_MIN_EXTENT: f64 = 120.0;

/// How close the pointer must be to a qualifying container's edge for the
/// escape zone to fire.
pub const CONTAINER_ESCAPE_PROXIMITY: f64 = 30.0;
