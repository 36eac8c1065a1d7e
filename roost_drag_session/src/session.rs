// Copyright 2026 the Roost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag-session state machine.

use alloc::string::String;

use kurbo::Point;
use smallvec::SmallVec;

use roost_drop_target::{
    resolve, BlockGeometry, ContainerEscape, DropDecision, Operation, ResolveOptions,
    TextDirection,
};

use crate::source::{BlockSource, DropHandler, InsertionIndicator, LayoutSource};
use crate::throttle::Throttle;

/// Default minimum spacing between resolution cycles, in the host's time
/// units.
pub const DEFAULT_THROTTLE_INTERVAL: u64 = 200;

/// Configuration for one drop zone's drag session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSessionConfig {
    /// The container whose children are the drop targets.
    pub root_container_id: String,
    /// The container's parent, when the zone is nested. Required for
    /// container escape zones; `None` disables them.
    pub parent_container_id: Option<String>,
    /// Minimum spacing between resolution cycles.
    pub throttle_interval: u64,
    /// A disabled session ignores all drag events.
    pub disabled: bool,
}

impl DragSessionConfig {
    /// Configuration for a top-level drop zone with default throttling.
    pub fn new(root_container_id: impl Into<String>) -> Self {
        Self {
            root_container_id: root_container_id.into(),
            parent_container_id: None,
            throttle_interval: DEFAULT_THROTTLE_INTERVAL,
            disabled: false,
        }
    }

    /// Enable container escape zones by naming the parent container.
    pub fn with_parent(mut self, parent_container_id: impl Into<String>) -> Self {
        self.parent_container_id = Some(parent_container_id.into());
        self
    }
}

/// The session's current decision, read by the indicator and the drop
/// commit.
///
/// `index` is `None` until the first resolution cycle of a drag completes,
/// and again after the drag ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct DragState {
    /// The decided insertion (or replacement) index, if any.
    pub index: Option<usize>,
    /// The decided operation; [`Operation::Insert`] when idle.
    pub operation: Operation,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Tracking,
}

/// Coordinates one drop zone's drag interaction.
///
/// The session owns the current [`DragState`], throttles raw drag-over
/// events into resolution cycles, and drives the indicator and commit
/// collaborators. It is single-threaded and host-driven: the host forwards
/// drag events with timestamps and calls [`Self::on_tick`] when
/// [`Self::next_deadline`] arrives.
#[derive(Debug)]
pub struct DragSession {
    config: DragSessionConfig,
    throttle: Throttle,
    phase: Phase,
    state: DragState,
}

impl DragSession {
    /// A new, idle session for the configured drop zone.
    pub fn new(config: DragSessionConfig) -> Self {
        let throttle = Throttle::new(config.throttle_interval);
        Self {
            config,
            throttle,
            phase: Phase::Idle,
            state: DragState::default(),
        }
    }

    /// The session's configuration.
    pub fn config(&self) -> &DragSessionConfig {
        &self.config
    }

    /// Whether an active drag is currently hovering the zone.
    pub fn is_tracking(&self) -> bool {
        self.phase == Phase::Tracking
    }

    /// The current decision state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// When the host should next call [`Self::on_tick`], if work is pending.
    pub fn next_deadline(&self) -> Option<u64> {
        self.throttle.deadline()
    }

    /// A drag-over event at `position`, timestamped `now`.
    ///
    /// Enters tracking and feeds the throttle; the actual resolution runs in
    /// [`Self::on_tick`] once the throttle deadline passes. Disabled
    /// sessions ignore the event.
    pub fn on_drag_over(&mut self, now: u64, position: Point) {
        if self.config.disabled {
            return;
        }
        self.phase = Phase::Tracking;
        self.throttle.submit(now, position);
    }

    /// Run one resolution cycle if the throttle is due.
    ///
    /// Snapshots block geometry from the collaborators, resolves the drop
    /// target for the coalesced pointer position, then updates the stored
    /// [`DragState`] and the indicator as one step: the indicator never
    /// reflects a decision other than the stored one.
    pub fn on_tick<S, L, I>(&mut self, now: u64, source: &S, layout: &L, indicator: &mut I)
    where
        S: BlockSource,
        L: LayoutSource<BlockRef = S::BlockRef>,
        I: InsertionIndicator,
    {
        if self.phase != Phase::Tracking {
            return;
        }
        let Some(position) = self.throttle.fire(now) else {
            return;
        };
        let decision = self.resolve_at(position, source, layout);
        self.state = DragState {
            index: Some(decision.index),
            operation: decision.operation,
        };
        indicator.show_insertion_point(
            &self.config.root_container_id,
            decision.index,
            decision.operation,
        );
    }

    /// The drag left the zone: cancel pending work, clear the decision, hide
    /// the indicator.
    pub fn on_drag_leave<I: InsertionIndicator>(&mut self, indicator: &mut I) {
        self.reset(indicator);
    }

    /// The drag ended without dropping here. Same cleanup as a leave.
    pub fn on_drag_end<I: InsertionIndicator>(&mut self, indicator: &mut I) {
        self.reset(indicator);
    }

    /// The item was dropped on the zone.
    ///
    /// While tracking, commits the current [`DragState`] through `handler`
    /// (index 0 when no resolution cycle completed during the drag), then
    /// resets. Outside tracking, a stray drop event is ignored.
    pub fn on_drop<H, I>(&mut self, handler: &mut H, indicator: &mut I)
    where
        H: DropHandler,
        I: InsertionIndicator,
    {
        if self.phase != Phase::Tracking {
            return;
        }
        let index = self.state.index.unwrap_or(0);
        handler.perform_drop(&self.config.root_container_id, index, self.state.operation);
        self.reset(indicator);
    }

    fn reset<I: InsertionIndicator>(&mut self, indicator: &mut I) {
        self.throttle.cancel();
        self.phase = Phase::Idle;
        self.state = DragState::default();
        indicator.hide_insertion_point();
    }

    fn resolve_at<S, L>(&self, position: Point, source: &S, layout: &L) -> DropDecision
    where
        S: BlockSource,
        L: LayoutSource<BlockRef = S::BlockRef>,
    {
        let orientation = source
            .list_settings(&self.config.root_container_id)
            .map(|settings| settings.orientation)
            .unwrap_or_default();
        let direction = if layout.is_rtl() {
            TextDirection::RightToLeft
        } else {
            TextDirection::LeftToRight
        };
        let options = ResolveOptions {
            escape: self.container_escape(source, layout),
            direction,
        };
        let blocks = snapshot_blocks(source, layout, &self.config.root_container_id);
        resolve(&blocks, position, orientation, &options)
    }

    /// Escape-zone geometry, when the zone is nested and both the drop-zone
    /// rectangle and the container's own index resolve.
    fn container_escape<S, L>(&self, source: &S, layout: &L) -> Option<ContainerEscape>
    where
        S: BlockSource,
        L: LayoutSource<BlockRef = S::BlockRef>,
    {
        let parent_id = self.config.parent_container_id.as_deref()?;
        let rect = layout.drop_zone_rect(&self.config.root_container_id)?;
        let container_index = source.container_index(&self.config.root_container_id)?;
        let parent_orientation = source
            .list_settings(parent_id)
            .map(|settings| settings.orientation)
            .unwrap_or_default();
        Some(ContainerEscape {
            rect,
            parent_orientation,
            container_index,
        })
    }
}

/// Batched geometry fetch: collect the container's blocks, then resolve each
/// one's rectangle and placeholder flag into plain data.
///
/// A block whose geometry lookup fails, or which is no longer in the tree,
/// is skipped; the rest of the pass proceeds.
fn snapshot_blocks<S, L>(
    source: &S,
    layout: &L,
    container_id: &str,
) -> SmallVec<[BlockGeometry; 8]>
where
    S: BlockSource,
    L: LayoutSource<BlockRef = S::BlockRef>,
{
    let refs = source.list_blocks(container_id);
    let mut blocks = SmallVec::new();
    for block in &refs {
        let Ok(rect) = layout.bounding_rect(block) else {
            continue;
        };
        let Some(block_index) = source.index_of(block) else {
            continue;
        };
        blocks.push(BlockGeometry {
            block_index,
            is_placeholder: source.is_unmodified_default_block(block),
            rect,
        });
    }
    blocks
}
