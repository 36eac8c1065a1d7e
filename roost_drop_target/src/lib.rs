// Copyright 2026 the Roost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roost Drop Target: pure drop-target resolution for ordered block lists.
//!
//! Given the geometry of every visible block in a list, a pointer position,
//! and the list's orientation, [`resolve`] computes a single
//! [`DropDecision`]: the insertion index and the [`Operation`] a drop at that
//! position means. It is the decision core behind drag-and-drop reordering
//! and insertion in block-based editors; everything stateful (event
//! throttling, geometry snapshots, indicator updates) lives in
//! `roost_drag_session`.
//!
//! Resolution applies three rules in order; the first match wins:
//!
//! 1. **Container escape**: near the outer edge of a sufficiently large
//!    nested container, the drop escapes to the parent level
//!    ([`Operation::Before`] / [`Operation::After`] the container itself).
//! 2. **Nearest edge**: otherwise the block whose allowed edge is nearest to
//!    the pointer anchors the decision. Placeholder blocks attract across
//!    their whole area, not just their edges.
//! 3. **Placeholder collapse**: a decision adjacent to a placeholder becomes
//!    [`Operation::Replace`] of that placeholder, so empty default blocks
//!    are replaced rather than accumulated alongside real content.
//!
//! [`resolve`] is a pure function: identical inputs produce identical
//! decisions, and no ambient state (text direction, layout) is consulted —
//! the caller passes everything in via [`ResolveOptions`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use roost_drop_target::{
//!     resolve, BlockGeometry, DropDecision, Operation, Orientation, ResolveOptions,
//! };
//!
//! // Three stacked blocks, none of them placeholders.
//! let blocks = [
//!     BlockGeometry { block_index: 0, is_placeholder: false, rect: Rect::new(0.0, 0.0, 200.0, 100.0) },
//!     BlockGeometry { block_index: 1, is_placeholder: false, rect: Rect::new(0.0, 110.0, 200.0, 210.0) },
//!     BlockGeometry { block_index: 2, is_placeholder: false, rect: Rect::new(0.0, 220.0, 200.0, 320.0) },
//! ];
//!
//! // Pointer in the gap between block 0 and block 1: insert at index 1.
//! let decision = resolve(
//!     &blocks,
//!     Point::new(100.0, 105.0),
//!     Orientation::Vertical,
//!     &ResolveOptions::default(),
//! );
//! assert_eq!(decision, DropDecision { index: 1, operation: Operation::Insert });
//! ```
//!
//! ## Coordinate conventions
//!
//! All rectangles and the pointer position live in one caller-chosen
//! coordinate space for the duration of a call (typically viewport
//! coordinates). Blocks may be supplied in display order; their logical
//! position in the list is read from [`BlockGeometry::block_index`], never
//! from their position in the slice.
//!
//! This crate is `no_std`; enable the `libm` feature for `no_std` float math.

#![no_std]

mod resolve;
mod types;

pub use resolve::resolve;
pub use types::{
    BlockGeometry, ContainerEscape, DropDecision, Operation, Orientation, ResolveOptions,
    TextDirection, CONTAINER_ESCAPE_MIN_EXTENT, CONTAINER_ESCAPE_PROXIMITY,
};
