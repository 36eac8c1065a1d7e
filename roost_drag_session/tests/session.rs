// Copyright 2026 the Roost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `roost_drag_session` crate.
//!
//! These drive a `DragSession` against in-memory collaborators: a `Stage`
//! playing both the block store and the layout surface, a recording
//! indicator, and a recording drop handler.

use kurbo::{Point, Rect};
use roost_drag_session::{
    BlockSource, DragSession, DragSessionConfig, DropHandler, InsertionIndicator, LayoutSource,
    ListSettings, LookupError, Operation, Orientation,
};

/// One block on the stage. `rect: None` simulates a block whose element is
/// not currently rendered.
struct StageBlock {
    index: usize,
    placeholder: bool,
    rect: Option<Rect>,
}

/// In-memory block store and layout surface.
struct Stage {
    blocks: Vec<StageBlock>,
    orientation: Orientation,
    parent_orientation: Orientation,
    container_index: Option<usize>,
    drop_zone: Option<Rect>,
    rtl: bool,
}

impl Stage {
    /// Three stacked 100-tall blocks with 10-unit gaps, no placeholders.
    fn vertical_stack() -> Self {
        let rect = |top: f64| Some(Rect::new(0.0, top, 200.0, top + 100.0));
        Self {
            blocks: vec![
                StageBlock { index: 0, placeholder: false, rect: rect(0.0) },
                StageBlock { index: 1, placeholder: false, rect: rect(110.0) },
                StageBlock { index: 2, placeholder: false, rect: rect(220.0) },
            ],
            orientation: Orientation::Vertical,
            parent_orientation: Orientation::Vertical,
            container_index: None,
            drop_zone: None,
            rtl: false,
        }
    }

    /// Three 100-wide blocks in a row with 10-unit gaps.
    fn horizontal_row() -> Self {
        let rect = |left: f64| Some(Rect::new(left, 0.0, left + 100.0, 200.0));
        Self {
            blocks: vec![
                StageBlock { index: 0, placeholder: false, rect: rect(0.0) },
                StageBlock { index: 1, placeholder: false, rect: rect(110.0) },
                StageBlock { index: 2, placeholder: false, rect: rect(220.0) },
            ],
            orientation: Orientation::Horizontal,
            parent_orientation: Orientation::Vertical,
            container_index: None,
            drop_zone: None,
            rtl: false,
        }
    }
}

impl BlockSource for Stage {
    type BlockRef = usize;

    fn list_blocks(&self, _container_id: &str) -> Vec<usize> {
        (0..self.blocks.len()).collect()
    }

    fn index_of(&self, block: &usize) -> Option<usize> {
        self.blocks.get(*block).map(|b| b.index)
    }

    fn container_index(&self, _container_id: &str) -> Option<usize> {
        self.container_index
    }

    fn list_settings(&self, container_id: &str) -> Option<ListSettings> {
        let orientation = if container_id == "parent" {
            self.parent_orientation
        } else {
            self.orientation
        };
        Some(ListSettings { orientation })
    }

    fn is_unmodified_default_block(&self, block: &usize) -> bool {
        self.blocks[*block].placeholder
    }
}

impl LayoutSource for Stage {
    type BlockRef = usize;

    fn bounding_rect(&self, block: &usize) -> Result<Rect, LookupError> {
        self.blocks[*block].rect.ok_or(LookupError)
    }

    fn drop_zone_rect(&self, _container_id: &str) -> Option<Rect> {
        self.drop_zone
    }

    fn is_rtl(&self) -> bool {
        self.rtl
    }
}

/// Records every indicator call and mirrors the currently visible state.
#[derive(Default)]
struct Indicator {
    visible: Option<(String, usize, Operation)>,
    shows: usize,
    hides: usize,
}

impl InsertionIndicator for Indicator {
    fn show_insertion_point(&mut self, container_id: &str, index: usize, operation: Operation) {
        self.visible = Some((container_id.to_owned(), index, operation));
        self.shows += 1;
    }

    fn hide_insertion_point(&mut self) {
        self.visible = None;
        self.hides += 1;
    }
}

/// Records every commit.
#[derive(Default)]
struct Drops {
    committed: Vec<(String, usize, Operation)>,
}

impl DropHandler for Drops {
    fn perform_drop(&mut self, container_id: &str, index: usize, operation: Operation) {
        self.committed.push((container_id.to_owned(), index, operation));
    }
}

#[test]
fn resolution_waits_for_the_throttle_deadline() {
    let stage = Stage::vertical_stack();
    let mut session = DragSession::new(DragSessionConfig::new("root"));
    let mut indicator = Indicator::default();

    session.on_drag_over(1000, Point::new(100.0, 105.0));
    assert!(session.is_tracking());
    assert_eq!(session.next_deadline(), Some(1200));

    // Too early: no resolution, no indicator.
    session.on_tick(1100, &stage, &stage, &mut indicator);
    assert_eq!(indicator.shows, 0);
    assert_eq!(session.state().index, None);

    session.on_tick(1200, &stage, &stage, &mut indicator);
    assert_eq!(
        indicator.visible,
        Some(("root".to_owned(), 1, Operation::Insert))
    );
    assert_eq!(session.state().index, Some(1));
    assert_eq!(session.next_deadline(), None);
}

#[test]
fn coalesced_moves_resolve_with_the_latest_position() {
    let stage = Stage::vertical_stack();
    let mut session = DragSession::new(DragSessionConfig::new("root"));
    let mut indicator = Indicator::default();

    // A burst of moves within one interval: first near the top of the list,
    // last in the gap between blocks 1 and 2.
    session.on_drag_over(1000, Point::new(100.0, 4.0));
    session.on_drag_over(1080, Point::new(100.0, 105.0));
    session.on_drag_over(1150, Point::new(100.0, 215.0));

    session.on_tick(1200, &stage, &stage, &mut indicator);

    // Exactly one resolution, for the superseding position.
    assert_eq!(indicator.shows, 1);
    assert_eq!(
        indicator.visible,
        Some(("root".to_owned(), 2, Operation::Insert))
    );
}

#[test]
fn leave_cancels_pending_resolution() {
    let stage = Stage::vertical_stack();
    let mut session = DragSession::new(DragSessionConfig::new("root"));
    let mut indicator = Indicator::default();

    session.on_drag_over(1000, Point::new(100.0, 105.0));
    session.on_drag_leave(&mut indicator);

    assert!(!session.is_tracking());
    assert_eq!(session.next_deadline(), None);
    assert_eq!(indicator.hides, 1);

    // A tick after the would-be deadline must not produce a stale decision.
    session.on_tick(1500, &stage, &stage, &mut indicator);
    assert_eq!(indicator.shows, 0);
    assert_eq!(session.state().index, None);
}

#[test]
fn drag_end_clears_visible_state() {
    let stage = Stage::vertical_stack();
    let mut session = DragSession::new(DragSessionConfig::new("root"));
    let mut indicator = Indicator::default();

    session.on_drag_over(0, Point::new(100.0, 105.0));
    session.on_tick(200, &stage, &stage, &mut indicator);
    assert!(indicator.visible.is_some());

    session.on_drag_end(&mut indicator);
    assert_eq!(indicator.visible, None);
    assert_eq!(session.state().index, None);
    assert!(!session.is_tracking());
}

#[test]
fn drop_commits_the_current_state_exactly_once() {
    let stage = Stage::vertical_stack();
    let mut session = DragSession::new(DragSessionConfig::new("root"));
    let mut indicator = Indicator::default();
    let mut drops = Drops::default();

    session.on_drag_over(0, Point::new(100.0, 105.0));
    session.on_tick(200, &stage, &stage, &mut indicator);
    session.on_drop(&mut drops, &mut indicator);

    assert_eq!(drops.committed, vec![("root".to_owned(), 1, Operation::Insert)]);
    assert_eq!(indicator.visible, None);
    assert_eq!(session.state().index, None);
    assert!(!session.is_tracking());

    // A stray second drop is ignored.
    session.on_drop(&mut drops, &mut indicator);
    assert_eq!(drops.committed.len(), 1);
}

#[test]
fn drop_before_any_resolution_falls_back_to_the_start() {
    let mut session = DragSession::new(DragSessionConfig::new("root"));
    let mut indicator = Indicator::default();
    let mut drops = Drops::default();

    session.on_drag_over(0, Point::new(100.0, 105.0));
    // Dropped before the throttle deadline ever fired.
    session.on_drop(&mut drops, &mut indicator);

    assert_eq!(drops.committed, vec![("root".to_owned(), 0, Operation::Insert)]);
}

#[test]
fn disabled_sessions_ignore_drag_events() {
    let stage = Stage::vertical_stack();
    let mut config = DragSessionConfig::new("root");
    config.disabled = true;
    let mut session = DragSession::new(config);
    let mut indicator = Indicator::default();

    session.on_drag_over(0, Point::new(100.0, 105.0));
    assert!(!session.is_tracking());
    assert_eq!(session.next_deadline(), None);

    session.on_tick(500, &stage, &stage, &mut indicator);
    assert_eq!(indicator.shows, 0);
}

#[test]
fn unrendered_blocks_are_skipped_not_fatal() {
    let mut stage = Stage::vertical_stack();
    stage.blocks[1].rect = None;
    let mut session = DragSession::new(DragSessionConfig::new("root"));
    let mut indicator = Indicator::default();

    // Pointer just above block 2; block 1 has no geometry and is excluded,
    // the rest of the pass still resolves.
    session.on_drag_over(0, Point::new(100.0, 215.0));
    session.on_tick(200, &stage, &stage, &mut indicator);

    assert_eq!(
        indicator.visible,
        Some(("root".to_owned(), 2, Operation::Insert))
    );
}

#[test]
fn placeholder_decision_reaches_the_indicator_as_replace() {
    let mut stage = Stage::vertical_stack();
    stage.blocks[1].placeholder = true;
    let mut session = DragSession::new(DragSessionConfig::new("root"));
    let mut indicator = Indicator::default();

    session.on_drag_over(0, Point::new(100.0, 160.0));
    session.on_tick(200, &stage, &stage, &mut indicator);

    assert_eq!(
        indicator.visible,
        Some(("root".to_owned(), 1, Operation::Replace))
    );
}

#[test]
fn orientation_comes_from_list_settings() {
    let stage = Stage::horizontal_row();
    let mut session = DragSession::new(DragSessionConfig::new("root"));
    let mut indicator = Indicator::default();

    session.on_drag_over(0, Point::new(105.0, 100.0));
    session.on_tick(200, &stage, &stage, &mut indicator);

    assert_eq!(
        indicator.visible,
        Some(("root".to_owned(), 1, Operation::Insert))
    );
}

#[test]
fn rtl_direction_mirrors_horizontal_resolution() {
    let mut stage = Stage::horizontal_row();
    stage.rtl = true;
    let mut session = DragSession::new(DragSessionConfig::new("root"));
    let mut indicator = Indicator::default();

    // Near the right edge of block 1: "after" in LTR, "before" in RTL.
    session.on_drag_over(0, Point::new(208.0, 100.0));
    session.on_tick(200, &stage, &stage, &mut indicator);

    assert_eq!(
        indicator.visible,
        Some(("root".to_owned(), 1, Operation::Insert))
    );
}

#[test]
fn nested_zones_escape_to_the_parent_level() {
    let mut stage = Stage::vertical_stack();
    stage.drop_zone = Some(Rect::new(0.0, 0.0, 200.0, 330.0));
    stage.container_index = Some(5);
    let mut session = DragSession::new(DragSessionConfig::new("root").with_parent("parent"));
    let mut indicator = Indicator::default();
    let mut drops = Drops::default();

    // 10 units from the zone's top edge: escape beats the children.
    session.on_drag_over(0, Point::new(100.0, 10.0));
    session.on_tick(200, &stage, &stage, &mut indicator);
    assert_eq!(
        indicator.visible,
        Some(("root".to_owned(), 5, Operation::Before))
    );

    session.on_drop(&mut drops, &mut indicator);
    assert_eq!(drops.committed, vec![("root".to_owned(), 5, Operation::Before)]);
}

#[test]
fn indicator_always_matches_stored_state() {
    let stage = Stage::vertical_stack();
    let mut session = DragSession::new(DragSessionConfig::new("root"));
    let mut indicator = Indicator::default();

    let mut now = 0;
    for y in [4.0, 105.0, 160.0, 215.0, 330.0] {
        session.on_drag_over(now, Point::new(100.0, y));
        now += 200;
        session.on_tick(now, &stage, &stage, &mut indicator);

        let (_, index, operation) = indicator.visible.clone().expect("indicator visible");
        assert_eq!(session.state().index, Some(index));
        assert_eq!(session.state().operation, operation);
        now += 1;
    }
}
