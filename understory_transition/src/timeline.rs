// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A frame-driven animator for hosts without an animation system of their own.
//!
//! ## Usage
//!
//! 1) Pass the [`Timeline`] wherever an [`Animator`] is expected.
//! 2) Each frame, call [`Timeline::advance`] with the elapsed time.
//! 3) Sample [`Timeline::progress`] for in-flight transactions to interpolate presented values.
//!
//! ```
//! use understory_transition::{Animation, Animator, Timeline};
//!
//! let mut timeline = Timeline::new();
//! timeline.animate(&Animation::new(0.5), Box::new(|| {}), Box::new(|finished| assert!(finished)));
//! let id = timeline.last_transaction().unwrap();
//!
//! timeline.advance(0.25);
//! assert_eq!(timeline.progress(id), Some(0.5));
//!
//! assert_eq!(timeline.advance(0.25), 1);
//! assert!(timeline.is_idle());
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::animation::Animation;
use crate::animator::{Animator, Completion};

/// Identifier of a transaction submitted to a [`Timeline`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId(u64);

struct Transaction {
    id: TransactionId,
    animation: Animation,
    started_at: f64,
    completion: Completion,
}

impl Transaction {
    fn ends_at(&self) -> f64 {
        self.started_at + self.animation.total_time()
    }
}

/// Tracks in-flight transactions against a manually advanced clock.
///
/// Changes are applied as soon as they are submitted. Completions fire from
/// [`Timeline::advance`] in the order the transactions end; transactions ending at the same
/// time complete in submission order. Zero-duration transactions complete synchronously.
#[derive(Default)]
pub struct Timeline {
    now: f64,
    next_id: u64,
    in_flight: Vec<Transaction>,
    last: Option<TransactionId>,
}

impl core::fmt::Debug for Timeline {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Timeline")
            .field("now", &self.now)
            .field("in_flight", &self.in_flight.len())
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

impl Timeline {
    /// Create a timeline at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time in seconds.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Number of transactions that have not settled yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Returns `true` when no transaction is in flight.
    pub fn is_idle(&self) -> bool {
        self.in_flight.is_empty()
    }

    /// The most recently submitted animated transaction, if any.
    pub fn last_transaction(&self) -> Option<TransactionId> {
        self.last
    }

    /// Timing of an in-flight transaction.
    pub fn animation(&self, id: TransactionId) -> Option<&Animation> {
        self.find(id).map(|t| &t.animation)
    }

    /// Eased progress of an in-flight transaction, or `None` once it has settled.
    pub fn progress(&self, id: TransactionId) -> Option<f64> {
        self.find(id)
            .map(|t| t.animation.progress_at(self.now - t.started_at))
    }

    /// Move the clock forward by `dt` seconds and complete every transaction that ended.
    ///
    /// Negative steps are ignored. Returns the number of completions fired.
    pub fn advance(&mut self, dt: f64) -> usize {
        self.now += dt.max(0.0);
        let now = self.now;
        self.complete_while(|t| t.ends_at() <= now)
    }

    /// Complete every in-flight transaction without moving the clock.
    pub fn settle_all(&mut self) -> usize {
        self.complete_while(|_| true)
    }

    fn find(&self, id: TransactionId) -> Option<&Transaction> {
        self.in_flight.iter().find(|t| t.id == id)
    }

    fn complete_while(&mut self, done: impl Fn(&Transaction) -> bool) -> usize {
        let mut fired = 0;
        loop {
            let next = self
                .in_flight
                .iter()
                .enumerate()
                .filter(|(_, t)| done(*t))
                .min_by(|(_, a), (_, b)| {
                    a.ends_at()
                        .partial_cmp(&b.ends_at())
                        .unwrap_or(core::cmp::Ordering::Equal)
                        .then(a.id.cmp(&b.id))
                })
                .map(|(i, _)| i);
            let Some(i) = next else {
                return fired;
            };
            let transaction = self.in_flight.remove(i);
            tracing::trace!(id = transaction.id.0, now = self.now, "transaction settled");
            (transaction.completion)(true);
            fired += 1;
        }
    }
}

impl Animator for Timeline {
    fn animate(
        &mut self,
        animation: &Animation,
        changes: Box<dyn FnOnce() + '_>,
        completion: Completion,
    ) {
        changes();
        if animation.is_immediate() {
            completion(true);
            return;
        }
        let id = TransactionId(self.next_id);
        self.next_id += 1;
        self.last = Some(id);
        self.in_flight.push(Transaction {
            id,
            animation: *animation,
            started_at: self.now,
            completion,
        });
    }
}
