// Copyright 2026 the Roost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator seams: the block store, the layout system, and the
//! side-effecting sinks a drag session drives.
//!
//! The session never owns block data, rendered geometry, or visuals. It
//! queries the first two through [`BlockSource`] and [`LayoutSource`] once
//! per resolution cycle and pushes its decisions into [`InsertionIndicator`]
//! and [`DropHandler`]. Hosts implement these traits over whatever store and
//! rendering surface they have.

use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;
use roost_drop_target::{Operation, Orientation};

/// Layout settings for one container's block list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct ListSettings {
    /// Axis along which the container lays out its children.
    pub orientation: Orientation,
}

/// A block's visual element is not currently rendered, so it has no
/// geometry.
///
/// The session treats this as local to the affected block: the block is
/// excluded from the current resolution pass and the pass continues. One
/// stale block must not block dropping elsewhere.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LookupError;

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block has no rendered geometry")
    }
}

impl core::error::Error for LookupError {}

/// Read access to the block tree.
///
/// Implementations decide what a block reference is; the session only moves
/// references between this trait and [`LayoutSource`].
pub trait BlockSource {
    /// Handle for one block in the store.
    type BlockRef;

    /// The blocks of `container_id`, in display order.
    fn list_blocks(&self, container_id: &str) -> Vec<Self::BlockRef>;

    /// The block's index among its siblings, if it is still in the tree.
    fn index_of(&self, block: &Self::BlockRef) -> Option<usize>;

    /// The index of the container block itself among *its* siblings.
    fn container_index(&self, container_id: &str) -> Option<usize>;

    /// Layout settings of `container_id`. `None` falls back to defaults
    /// (vertical orientation); never fatal.
    fn list_settings(&self, container_id: &str) -> Option<ListSettings>;

    /// Whether the block is an unmodified default block, i.e. a placeholder
    /// a drop should replace rather than insert beside.
    fn is_unmodified_default_block(&self, block: &Self::BlockRef) -> bool;
}

/// Geometry queries against the live rendering surface.
pub trait LayoutSource {
    /// Handle for one block, matching the paired [`BlockSource`].
    type BlockRef;

    /// Bounding rectangle of the block's rendered element, in the same
    /// coordinate space as pointer positions.
    fn bounding_rect(&self, block: &Self::BlockRef) -> Result<Rect, LookupError>;

    /// Bounding rectangle of the container's own drop-zone element, when one
    /// exists. Required for container escape zones.
    fn drop_zone_rect(&self, container_id: &str) -> Option<Rect>;

    /// Whether the surrounding context is right-to-left. Read once per
    /// resolution cycle; defaults to left-to-right.
    fn is_rtl(&self) -> bool {
        false
    }
}

/// The visual insertion-point indicator. Both calls must be idempotent.
pub trait InsertionIndicator {
    /// Show (or move) the insertion point for `container_id` at `index`.
    fn show_insertion_point(&mut self, container_id: &str, index: usize, operation: Operation);

    /// Hide the insertion point.
    fn hide_insertion_point(&mut self);
}

/// The commit step that actually mutates the block tree on drop.
pub trait DropHandler {
    /// Perform the drop decided by the session. Called exactly once per
    /// successful drop.
    fn perform_drop(&mut self, container_id: &str, index: usize, operation: Operation);
}
