// Copyright 2026 the Roost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge event coalescing with explicit, host-driven time.
//!
//! Raw drag-over events arrive at native pointer-move frequency; resolution
//! queries live layout for every visible block and must not run that often.
//! [`Throttle`] coalesces submissions so that at most one fires per interval,
//! always carrying the most recent position.
//!
//! Time is a caller-supplied monotonic `u64` in caller-chosen units. The
//! throttle never sleeps or spawns anything: [`Throttle::submit`] opens a
//! deadline, [`Throttle::deadline`] tells the host when to call back, and
//! [`Throttle::fire`] delivers once that moment has passed. Dropping the
//! pending work is just [`Throttle::cancel`]; after it, no stale delivery
//! can happen.

use kurbo::Point;

/// Coalesces high-frequency position submissions into deadline-gated fires.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Throttle {
    interval: u64,
    deadline: Option<u64>,
    pending: Option<Point>,
}

impl Throttle {
    /// A throttle firing at most once per `interval` time units.
    pub const fn new(interval: u64) -> Self {
        Self {
            interval,
            deadline: None,
            pending: None,
        }
    }

    /// The configured minimum spacing between fires.
    pub const fn interval(&self) -> u64 {
        self.interval
    }

    /// Record a position, superseding any earlier pending one.
    ///
    /// If no deadline is open, one opens at `now + interval`. Subsequent
    /// submissions before the deadline only refresh the position, so a burst
    /// of events produces a single fire with the latest coordinates.
    pub fn submit(&mut self, now: u64, position: Point) {
        self.pending = Some(position);
        if self.deadline.is_none() {
            self.deadline = Some(now + self.interval);
        }
    }

    /// When the pending work becomes due, if any is pending.
    pub const fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Whether a submission is waiting to fire.
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Deliver the coalesced position once `now` has reached the deadline.
    ///
    /// Returns `None` while the deadline lies in the future or nothing is
    /// pending. Firing closes the deadline; the next [`Self::submit`] opens
    /// a fresh one, keeping fires at least one interval apart.
    pub fn fire(&mut self, now: u64) -> Option<Point> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// Drop the deadline and the pending position. A fire that was due can
    /// no longer happen.
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.pending = None;
    }
}
