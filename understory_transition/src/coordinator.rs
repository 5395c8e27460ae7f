// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Batches independent animation callbacks into one transaction.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::animation::Animation;
use crate::animator::Animator;

/// Collects `(animation, completion)` pairs for one logical transition.
///
/// Animations may borrow state for `'a`; they all run before [`TransitionCoordinator::perform`]
/// returns. Completions may run later, so they must own what they capture.
///
/// Ordering:
/// - Animations run in submission order.
/// - Completions run in reverse submission order.
pub struct TransitionCoordinator<'a> {
    animation: Animation,
    animations: Vec<Box<dyn FnOnce() + 'a>>,
    completions: Vec<Box<dyn FnOnce()>>,
}

impl core::fmt::Debug for TransitionCoordinator<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TransitionCoordinator")
            .field("animation", &self.animation)
            .field("animations", &self.animations.len())
            .field("completions", &self.completions.len())
            .finish()
    }
}

impl<'a> TransitionCoordinator<'a> {
    /// Create an empty coordinator for a transaction described by `animation`.
    pub fn new(animation: Animation) -> Self {
        Self {
            animation,
            animations: Vec::new(),
            completions: Vec::new(),
        }
    }

    /// The transaction's timing.
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    /// Number of submitted pairs.
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    /// Returns `true` if nothing has been submitted.
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Submit an animation with no completion.
    pub fn animate_alongside(&mut self, animation: impl FnOnce() + 'a) {
        self.animate_alongside_with_completion(animation, || {});
    }

    /// Submit an animation and the completion to run once the transaction settles.
    pub fn animate_alongside_with_completion(
        &mut self,
        animation: impl FnOnce() + 'a,
        completion: impl FnOnce() + 'static,
    ) {
        self.animations.push(Box::new(animation));
        self.completions.push(Box::new(completion));
    }

    /// Run every submitted animation as one transaction.
    ///
    /// A zero-duration transaction runs synchronously and never reaches `animator`.
    pub fn perform(self, animator: &mut dyn Animator) {
        let Self {
            animation,
            animations,
            completions,
        } = self;
        tracing::trace!(
            duration = animation.duration,
            parties = animations.len(),
            "performing transition"
        );
        if animation.is_immediate() {
            for animate in animations {
                animate();
            }
            for complete in completions.into_iter().rev() {
                complete();
            }
            return;
        }
        animator.animate(
            &animation,
            Box::new(move || {
                for animate in animations {
                    animate();
                }
            }),
            Box::new(move |_finished| {
                for complete in completions.into_iter().rev() {
                    complete();
                }
            }),
        );
    }
}
