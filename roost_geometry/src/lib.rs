// Copyright 2026 the Roost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roost Geometry: edge-distance and containment helpers for drop-target
//! resolution.
//!
//! This crate provides the small geometric vocabulary used when deciding
//! where a dragged item should land relative to a set of axis-aligned
//! rectangles:
//!
//! - [`Edge`]: one of the four sides of a rectangle.
//! - [`nearest_edge`]: the nearest edge of a rectangle to a point, restricted
//!   to an allowed edge set, together with its Euclidean distance.
//! - [`contains`]: inclusive point-in-rectangle containment.
//!
//! Points and rectangles are [`kurbo`] types in a single caller-chosen
//! coordinate space (typically logical pixels). The crate has no opinion on
//! what the rectangles represent; higher layers feed it block geometry.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use roost_geometry::{nearest_edge, Edge};
//!
//! let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
//!
//! // A point just above the rectangle is nearest its top edge.
//! let (distance, edge) = nearest_edge(Point::new(50.0, -5.0), rect, &[Edge::Top, Edge::Bottom]).unwrap();
//! assert_eq!(edge, Edge::Top);
//! assert_eq!(distance, 5.0);
//! ```
//!
//! ## Distance semantics
//!
//! [`nearest_edge`] measures the straight-line distance from the point to the
//! edge *segment*: the point's coordinate on the edge's own axis is clamped to
//! the rectangle's span, so a point diagonally off a corner is measured to
//! that corner rather than to the edge's infinite line. This keeps candidates
//! comparable even when the point is far outside the rectangle on the
//! orthogonal axis.
//!
//! Exact distance ties are broken by declaration order in the allowed edge
//! slice: the first edge listed wins. Callers that care about tie-break
//! behavior should pass edges in a stable order.
//!
//! This crate is `no_std`; enable the `libm` feature for `no_std` float math.

#![no_std]

use kurbo::{Point, Rect};

/// One side of an axis-aligned rectangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The top side (`y = rect.y0`).
    Top,
    /// The bottom side (`y = rect.y1`).
    Bottom,
    /// The left side (`x = rect.x0`).
    Left,
    /// The right side (`x = rect.x1`).
    Right,
}

/// Euclidean distance from `point` to the given edge segment of `rect`.
///
/// The coordinate along the edge is clamped to the rectangle's span, so
/// points beyond a corner measure to that corner.
fn edge_distance(point: Point, rect: Rect, edge: Edge) -> f64 {
    let closest = match edge {
        Edge::Top => Point::new(point.x.clamp(rect.x0, rect.x1), rect.y0),
        Edge::Bottom => Point::new(point.x.clamp(rect.x0, rect.x1), rect.y1),
        Edge::Left => Point::new(rect.x0, point.y.clamp(rect.y0, rect.y1)),
        Edge::Right => Point::new(rect.x1, point.y.clamp(rect.y0, rect.y1)),
    };
    point.distance(closest)
}

/// Returns the nearest edge of `rect` to `point` among `allowed`, with its
/// distance.
///
/// Exact ties keep the earliest edge in `allowed` (comparison is strict
/// `<`). Returns `None` only when `allowed` is empty.
///
/// ```rust
/// use kurbo::{Point, Rect};
/// use roost_geometry::{nearest_edge, Edge};
///
/// let rect = Rect::new(0.0, 100.0, 200.0, 160.0);
///
/// // Dead center between top and bottom: the first allowed edge wins.
/// let (_, edge) = nearest_edge(Point::new(100.0, 130.0), rect, &[Edge::Top, Edge::Bottom]).unwrap();
/// assert_eq!(edge, Edge::Top);
/// ```
pub fn nearest_edge(point: Point, rect: Rect, allowed: &[Edge]) -> Option<(f64, Edge)> {
    let mut nearest: Option<(f64, Edge)> = None;
    for &edge in allowed {
        let distance = edge_distance(point, rect, edge);
        if nearest.is_none_or(|(best, _)| distance < best) {
            nearest = Some((distance, edge));
        }
    }
    nearest
}

/// Inclusive point-in-rectangle test: `point` lies within
/// `[x0, x1] × [y0, y1]`.
///
/// Unlike [`Rect::contains`], which is half-open, all four edges count as
/// inside. A point exactly on a rectangle's boundary is contained.
pub fn contains(point: Point, rect: Rect) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}
