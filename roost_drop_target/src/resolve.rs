// Copyright 2026 the Roost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drop-target resolution algorithm.

use kurbo::Point;
use roost_geometry::{contains, nearest_edge, Edge};

use crate::types::{
    BlockGeometry, ContainerEscape, DropDecision, Operation, Orientation, ResolveOptions,
    TextDirection, CONTAINER_ESCAPE_MIN_EXTENT, CONTAINER_ESCAPE_PROXIMITY,
};

/// Where a drop lands relative to the block anchoring the decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum InsertPosition {
    Before,
    After,
}

/// Map a winning edge to an insert position, mirroring the horizontal axis
/// under right-to-left text direction.
fn insert_position_for_edge(edge: Edge, direction: TextDirection) -> InsertPosition {
    match (edge, direction) {
        (Edge::Top, _) => InsertPosition::Before,
        (Edge::Bottom, _) => InsertPosition::After,
        (Edge::Left, TextDirection::LeftToRight) | (Edge::Right, TextDirection::RightToLeft) => {
            InsertPosition::Before
        }
        (Edge::Right, TextDirection::LeftToRight) | (Edge::Left, TextDirection::RightToLeft) => {
            InsertPosition::After
        }
    }
}

/// Escape-zone check: a pointer near the outer edge of a sufficiently large
/// container targets the parent level instead of the container's children.
fn container_escape_decision(
    position: Point,
    escape: &ContainerEscape,
    direction: TextDirection,
) -> Option<DropDecision> {
    let (edges, extent): (&[Edge], f64) = match escape.parent_orientation {
        Orientation::Horizontal => (&[Edge::Left, Edge::Right], escape.rect.width()),
        Orientation::Vertical => (&[Edge::Top, Edge::Bottom], escape.rect.height()),
    };
    // Small containers keep their edges: an edge-proximity gesture is only
    // unambiguous when the container clearly exceeds the proximity band.
    if extent <= CONTAINER_ESCAPE_MIN_EXTENT {
        return None;
    }
    let (distance, edge) = nearest_edge(position, escape.rect, edges)?;
    if distance >= CONTAINER_ESCAPE_PROXIMITY {
        return None;
    }
    Some(match insert_position_for_edge(edge, direction) {
        InsertPosition::Before => DropDecision {
            index: escape.container_index,
            operation: Operation::Before,
        },
        InsertPosition::After => DropDecision {
            index: escape.container_index + 1,
            operation: Operation::After,
        },
    })
}

/// Scan every block for the nearest allowed edge, treating placeholders that
/// contain the pointer as distance zero. First seen wins exact ties.
fn nearest_block<'b>(
    blocks: &'b [BlockGeometry],
    position: Point,
    orientation: Orientation,
    direction: TextDirection,
) -> Option<(&'b BlockGeometry, InsertPosition)> {
    let allowed = orientation.allowed_edges();
    let mut nearest: Option<(f64, &BlockGeometry, InsertPosition)> = None;
    for block in blocks {
        let Some((mut distance, edge)) = nearest_edge(position, block.rect, allowed) else {
            continue;
        };
        if block.is_placeholder && contains(position, block.rect) {
            // Placeholders are a full-area magnet, not just an edge magnet.
            distance = 0.0;
        }
        if nearest.as_ref().is_none_or(|&(best, _, _)| distance < best) {
            nearest = Some((distance, block, insert_position_for_edge(edge, direction)));
        }
    }
    nearest.map(|(_, block, insert_position)| (block, insert_position))
}

/// Resolve where a drop at `position` lands in the list described by
/// `blocks`.
///
/// Rules, in order (first match wins):
///
/// 1. Container escape zones, when [`ResolveOptions::escape`] is supplied.
/// 2. An empty list resolves to `(0, Insert)`.
/// 3. Nearest-edge scan over all blocks, followed by placeholder collapse:
///    a decision whose anchoring gap touches a placeholder replaces that
///    placeholder instead of inserting beside it.
///
/// The function is pure. Determinism on exact distance ties follows the
/// order of `blocks` (first seen wins); callers should supply a stable
/// order.
pub fn resolve(
    blocks: &[BlockGeometry],
    position: Point,
    orientation: Orientation,
    options: &ResolveOptions,
) -> DropDecision {
    if let Some(escape) = &options.escape
        && let Some(decision) = container_escape_decision(position, escape, options.direction)
    {
        return decision;
    }

    // Empty list (or no resolvable candidate): drop at the start.
    let Some((nearest, insert_position)) = nearest_block(blocks, position, orientation, options.direction)
    else {
        return DropDecision {
            index: 0,
            operation: Operation::Insert,
        };
    };

    // Placeholder collapse. The gap between the nearest block and its
    // neighbor on the deciding side is only a genuine insertion point when
    // neither side is a placeholder.
    let nearest_index = nearest.block_index;
    let adjacent_index = match insert_position {
        InsertPosition::After => Some(nearest_index + 1),
        InsertPosition::Before => nearest_index.checked_sub(1),
    };
    let adjacent_is_placeholder = adjacent_index
        .and_then(|index| blocks.iter().find(|block| block.block_index == index))
        .is_some_and(|block| block.is_placeholder);

    if !nearest.is_placeholder && !adjacent_is_placeholder {
        let index = match insert_position {
            InsertPosition::After => nearest_index + 1,
            InsertPosition::Before => nearest_index,
        };
        DropDecision {
            index,
            operation: Operation::Insert,
        }
    } else if nearest.is_placeholder {
        DropDecision {
            index: nearest_index,
            operation: Operation::Replace,
        }
    } else {
        DropDecision {
            // `adjacent_is_placeholder` implies the index exists.
            index: adjacent_index.unwrap_or(nearest_index),
            operation: Operation::Replace,
        }
    }
}
