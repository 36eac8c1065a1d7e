// Copyright 2026 the Roost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roost Drag Session: throttled, cancelable drag-session coordination.
//!
//! This crate owns the stateful half of drop-target resolution. The pure
//! decision algorithm lives in [`roost_drop_target`]; here sits everything
//! around it:
//!
//! - [`DragSession`]: the per-drop-zone state machine (idle ⇄ tracking) that
//!   owns the current [`DragState`] and drives the collaborators.
//! - [`Throttle`]: trailing-edge coalescing of raw drag-over events, so the
//!   expensive resolution (which queries live layout for every visible
//!   block) runs at most once per interval, always with the latest pointer
//!   position.
//! - The collaborator seams ([`BlockSource`], [`LayoutSource`],
//!   [`InsertionIndicator`], [`DropHandler`]): narrow traits over the block
//!   store, the rendering surface, the insertion-point visual, and the
//!   final commit.
//!
//! Everything is single-threaded and host-driven. Time is an explicit `u64`
//! in caller-chosen units; the session never sleeps, spawns, or reads
//! clocks. The host forwards drag events with timestamps, asks
//! [`DragSession::next_deadline`] when to come back, and calls
//! [`DragSession::on_tick`] at that moment. Cancellation (drag leave/end)
//! drops the pending work, so no stale resolution can fire afterwards.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use roost_drag_session::{
//!     BlockSource, DragSession, DragSessionConfig, InsertionIndicator, LayoutSource,
//!     ListSettings, LookupError, Operation,
//! };
//!
//! // Two stacked 100-tall blocks, indexed by position.
//! struct Store;
//! impl BlockSource for Store {
//!     type BlockRef = usize;
//!     fn list_blocks(&self, _container_id: &str) -> Vec<usize> {
//!         vec![0, 1]
//!     }
//!     fn index_of(&self, block: &usize) -> Option<usize> {
//!         Some(*block)
//!     }
//!     fn container_index(&self, _container_id: &str) -> Option<usize> {
//!         None
//!     }
//!     fn list_settings(&self, _container_id: &str) -> Option<ListSettings> {
//!         None // defaults to vertical
//!     }
//!     fn is_unmodified_default_block(&self, _block: &usize) -> bool {
//!         false
//!     }
//! }
//!
//! struct Layout;
//! impl LayoutSource for Layout {
//!     type BlockRef = usize;
//!     fn bounding_rect(&self, block: &usize) -> Result<Rect, LookupError> {
//!         let top = *block as f64 * 110.0;
//!         Ok(Rect::new(0.0, top, 200.0, top + 100.0))
//!     }
//!     fn drop_zone_rect(&self, _container_id: &str) -> Option<Rect> {
//!         None
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Indicator {
//!     visible: Option<(usize, Operation)>,
//! }
//! impl InsertionIndicator for Indicator {
//!     fn show_insertion_point(&mut self, _container_id: &str, index: usize, operation: Operation) {
//!         self.visible = Some((index, operation));
//!     }
//!     fn hide_insertion_point(&mut self) {
//!         self.visible = None;
//!     }
//! }
//!
//! let mut session = DragSession::new(DragSessionConfig::new("root"));
//! let mut indicator = Indicator::default();
//!
//! // Pointer hovers the gap between the two blocks; resolution is deferred.
//! session.on_drag_over(1000, Point::new(100.0, 105.0));
//! assert_eq!(session.next_deadline(), Some(1200));
//! assert_eq!(indicator.visible, None);
//!
//! // The host ticks once the deadline arrives.
//! session.on_tick(1200, &Store, &Layout, &mut indicator);
//! assert_eq!(indicator.visible, Some((1, Operation::Insert)));
//! assert_eq!(session.state().index, Some(1));
//!
//! // Leaving the zone clears the decision and the visual.
//! session.on_drag_leave(&mut indicator);
//! assert_eq!(indicator.visible, None);
//! assert_eq!(session.state().index, None);
//! ```
//!
//! This crate is `no_std` + `alloc`; enable the `libm` feature for `no_std`
//! float math.

#![no_std]

extern crate alloc;

mod session;
mod source;
mod throttle;

pub use session::{DragSession, DragSessionConfig, DragState, DEFAULT_THROTTLE_INTERVAL};
pub use source::{BlockSource, DropHandler, InsertionIndicator, LayoutSource, ListSettings, LookupError};
pub use throttle::Throttle;

// Vocabulary types that appear in this crate's public signatures.
pub use roost_drop_target::{DropDecision, Operation, Orientation};
