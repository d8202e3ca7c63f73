// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scheduling capability used by the plugin.
//!
//! ## Two primitives
//!
//! - [`Scheduler::run_now`]: run before returning to the caller. Creation pipelines use this
//!   so a mirror is fully normalized and placed before any move can observe it.
//! - [`Scheduler::next_frame`]: run on the next display refresh. Move updates use this so
//!   style writes happen at refresh time.
//!
//! Frame tasks are never cancelled or coalesced. When several moves land in the same
//! frame, every task runs in the order it was queued and the last write wins.
//!
//! ## Implementations
//!
//! - [`Immediate`] runs both primitives inline. Useful as a deterministic stand-in in tests.
//! - [`FrameQueue`] holds frame tasks until the host calls [`FrameQueue::flush`] from its
//!   refresh callback.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_mirror::schedule::{FrameQueue, Scheduler};
//!
//! let queue = FrameQueue::new();
//! let hits = Rc::new(Cell::new(0));
//! let h = hits.clone();
//! queue.next_frame(Box::new(move || h.set(h.get() + 1)));
//! assert_eq!(hits.get(), 0);
//! assert_eq!(queue.flush(), 1);
//! assert_eq!(hits.get(), 1);
//! ```

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::rc::Rc;
use core::cell::RefCell;

/// Deferred unit of work.
pub type Task = Box<dyn FnOnce() + 'static>;

/// Scheduling capability the plugin depends on.
pub trait Scheduler {
    /// Run `task` without waiting for a display refresh.
    fn run_now(&self, task: Task);

    /// Run `task` on the next display refresh.
    fn next_frame(&self, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn run_now(&self, task: Task) {
        (**self).run_now(task);
    }

    fn next_frame(&self, task: Task) {
        (**self).next_frame(task);
    }
}

/// Runs every task inline, including frame tasks.
#[derive(Copy, Clone, Debug, Default)]
pub struct Immediate;

impl Scheduler for Immediate {
    fn run_now(&self, task: Task) {
        task();
    }

    fn next_frame(&self, task: Task) {
        task();
    }
}

/// Queues frame tasks until the host's refresh callback flushes them.
#[derive(Default)]
pub struct FrameQueue {
    pending: RefCell<VecDeque<Task>>,
}

impl core::fmt::Debug for FrameQueue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameQueue")
            .field("pending", &self.pending())
            .finish()
    }
}

impl FrameQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frame tasks waiting for the next flush.
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Run the frame tasks queued so far, in order, and return how many ran.
    ///
    /// Tasks queued while flushing wait for the following flush.
    pub fn flush(&self) -> usize {
        let batch = core::mem::take(&mut *self.pending.borrow_mut());
        let ran = batch.len();
        for task in batch {
            task();
        }
        ran
    }
}

impl Scheduler for FrameQueue {
    fn run_now(&self, task: Task) {
        task();
    }

    fn next_frame(&self, task: Task) {
        self.pending.borrow_mut().push_back(task);
    }
}
