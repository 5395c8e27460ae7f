// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host capability that runs animated transactions.

use alloc::boxed::Box;

use crate::animation::Animation;

/// Called exactly once when a transaction settles.
///
/// The flag is `true` when the transaction ran to completion.
pub type Completion = Box<dyn FnOnce(bool)>;

/// Runs animated transactions on behalf of a container.
///
/// An implementation must call `changes` synchronously, before returning, so the model values it
/// writes are in place when `animate` returns. How those values are presented over time is up to
/// the host. `completion` must be invoked exactly once, after the transaction settles.
pub trait Animator {
    /// Apply `changes` inside a transaction described by `animation`.
    fn animate(
        &mut self,
        animation: &Animation,
        changes: Box<dyn FnOnce() + '_>,
        completion: Completion,
    );
}

impl<T: Animator + ?Sized> Animator for &mut T {
    fn animate(
        &mut self,
        animation: &Animation,
        changes: Box<dyn FnOnce() + '_>,
        completion: Completion,
    ) {
        (**self).animate(animation, changes, completion);
    }
}

/// An animator that applies every change at once and completes synchronously.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Immediate;

impl Animator for Immediate {
    fn animate(
        &mut self,
        _animation: &Animation,
        changes: Box<dyn FnOnce() + '_>,
        completion: Completion,
    ) {
        changes();
        completion(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn immediate_runs_changes_then_completion() {
        let order = Rc::new(Cell::new(0_u8));
        let (a, b) = (order.clone(), order.clone());
        Immediate.animate(
            &Animation::new(0.3),
            Box::new(move || {
                assert_eq!(a.get(), 0);
                a.set(1);
            }),
            Box::new(move |finished| {
                assert!(finished);
                assert_eq!(b.get(), 1);
                b.set(2);
            }),
        );
        assert_eq!(order.get(), 2);
    }
}
