// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_transition --heading-base-level=0

//! Understory Transition: animation descriptions and batched transitions for UI containers.
//!
//! ## Overview
//!
//! This crate does not draw or interpolate anything on its own.
//! It describes *how* a change should animate ([`Animation`]: duration, delay, easing or spring response, options),
//! and hands the change to an [`Animator`] supplied by the host toolkit.
//! The host applies the change, animates it however it renders, and calls the completion once it settles.
//!
//! ## Batching
//!
//! [`TransitionCoordinator`] collects independent `(animation, completion)` pairs contributed by several
//! parties during one logical transition, and performs them as one transaction:
//!
//! - Zero duration: every animation runs synchronously in submission order, then every completion
//!   runs in reverse submission order.
//! - Non-zero duration: all animations run inside a single [`Animator::animate`] call, and the
//!   completions run in reverse submission order once that transaction settles.
//!
//! Reverse-order completion lets the party that registered first (usually the outermost container)
//! finalize only after the parties it notified have finished reacting.
//!
//! ```
//! use core::cell::RefCell;
//! use std::rc::Rc;
//! use understory_transition::{Animation, Immediate, TransitionCoordinator};
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let mut coordinator = TransitionCoordinator::new(Animation::IMMEDIATE);
//! for i in 1..=3 {
//!     let (a, c) = (log.clone(), log.clone());
//!     coordinator.animate_alongside_with_completion(
//!         move || a.borrow_mut().push(("animate", i)),
//!         move || c.borrow_mut().push(("complete", i)),
//!     );
//! }
//! coordinator.perform(&mut Immediate);
//! assert_eq!(
//!     *log.borrow(),
//!     [("animate", 1), ("animate", 2), ("animate", 3), ("complete", 3), ("complete", 2), ("complete", 1)]
//! );
//! ```
//!
//! ## Hosts without an animation system
//!
//! [`Timeline`] is a frame-driven [`Animator`]: it applies changes immediately, keeps the
//! in-flight transactions, samples their eased progress, and fires each completion exactly once
//! when [`Timeline::advance`] moves past its end time.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod animation;
pub mod animator;
pub mod coordinator;
pub mod timeline;

pub use animation::{Animation, AnimationOptions, Easing, Spring};
pub use animator::{Animator, Completion, Immediate};
pub use coordinator::TransitionCoordinator;
pub use timeline::{Timeline, TransactionId};
