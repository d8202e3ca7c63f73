// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mirror plugin: ties a drag session's signals to the mirror pipelines.
//!
//! ## Lifecycle
//!
//! ```text
//! Detached --attach--> Uninitialized --created ok--> Tracking
//!                          ^                            |
//!                          +-------- created (new) -----+
//! any --detach--> Detached
//! ```
//!
//! - On [`MirrorSignal::Created`] the tracking state is reset, then the mirror is
//!   normalized ([`normalize`](crate::normalize)) and placed
//!   ([`geometry`](crate::geometry)) through [`Scheduler::run_now`]. The resulting offset
//!   and position are committed together. A failed pipeline commits nothing, so the
//!   session stays uninitialized and the previous mirror's offset is not reused.
//! - On [`MirrorSignal::Moved`] the committed state is snapshotted and the
//!   [`tracker`](crate::tracker) runs through [`Scheduler::next_frame`]. Moves that
//!   arrive before any creation completed are dropped.
//!
//! Errors never reach the emitter. They are logged and swallowed.
//!
//! Detaching removes both subscriptions but does not cancel frame work that is already
//! queued; such a write may still land after detach.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Rect, Vec2};
//! use understory_mirror::emitter::MirrorEvent;
//! use understory_mirror::headless::{HeadlessElement, HeadlessEmitter};
//! use understory_mirror::plugin::MirrorPlugin;
//! use understory_mirror::schedule::Immediate;
//! use understory_mirror::types::{SensorEvent, SessionPhase};
//!
//! let mut session: HeadlessEmitter<HeadlessElement> = HeadlessEmitter::new();
//! let mut plugin = MirrorPlugin::new(&session, Immediate);
//! plugin.attach(&mut session);
//!
//! let source = HeadlessElement::new();
//! source.set_bounds(Some(Rect::new(10.0, 20.0, 110.0, 60.0)));
//! let mirror = HeadlessElement::new();
//!
//! session.emit(&MirrorEvent::Created {
//!     mirror: mirror.clone(),
//!     source,
//!     sensor: SensorEvent::new(15.0, 30.0),
//! });
//! assert_eq!(plugin.phase(), SessionPhase::Tracking);
//! assert_eq!(mirror.transform(), Some(Vec2::new(10.0, 20.0)));
//!
//! session.emit(&MirrorEvent::Moved {
//!     mirror: mirror.clone(),
//!     sensor: SensorEvent::new(25.0, 35.0),
//! });
//! assert_eq!(mirror.transform(), Some(Vec2::new(20.0, 25.0)));
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;
use core::marker::PhantomData;

use tracing::{debug, trace, warn};

use crate::element::{MirrorElement, SourceElement};
use crate::emitter::{ClassRole, DragEmitter, Listener, ListenerId, MirrorEvent, MirrorSignal};
use crate::error::Result;
use crate::geometry::{self, Placement};
use crate::normalize::normalize_mirror;
use crate::options::MirrorOptions;
use crate::schedule::Scheduler;
use crate::tracker::track;
use crate::types::{Axes, SensorEvent, SessionPhase, TrackingState};

#[derive(Copy, Clone, Debug)]
struct Subscriptions {
    created: ListenerId,
    moved: ListenerId,
}

/// Session controller for one drag mirror.
///
/// Options and the mirror class are resolved from the session when the plugin is
/// constructed and do not change afterwards.
pub struct MirrorPlugin<E, S> {
    options: MirrorOptions,
    mirror_class: Rc<str>,
    scheduler: Rc<S>,
    state: Rc<RefCell<TrackingState>>,
    subscriptions: Option<Subscriptions>,
    _phantom: PhantomData<fn(E)>,
}

impl<E, S> core::fmt::Debug for MirrorPlugin<E, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MirrorPlugin")
            .field("options", &self.options)
            .field("mirror_class", &self.mirror_class)
            .field("state", &*self.state.borrow())
            .field("attached", &self.subscriptions.is_some())
            .finish_non_exhaustive()
    }
}

impl<E, S> MirrorPlugin<E, S>
where
    E: MirrorElement + SourceElement + Clone + 'static,
    S: Scheduler + 'static,
{
    /// Create a detached plugin, resolving options and the mirror class from `session`.
    pub fn new<D: DragEmitter<E> + ?Sized>(session: &D, scheduler: S) -> Self {
        Self {
            options: MirrorOptions::merged(session.mirror_overrides()),
            mirror_class: session.class_name_for(ClassRole::Mirror).into(),
            scheduler: Rc::new(scheduler),
            state: Rc::new(RefCell::new(TrackingState::Uninitialized)),
            subscriptions: None,
            _phantom: PhantomData,
        }
    }

    /// Resolved options.
    pub fn options(&self) -> MirrorOptions {
        self.options
    }

    /// Class added to every mirror.
    pub fn mirror_class(&self) -> &str {
        &self.mirror_class
    }

    /// Scheduler the pipelines run on.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        if self.subscriptions.is_none() {
            SessionPhase::Detached
        } else if self.state.borrow().is_tracking() {
            SessionPhase::Tracking
        } else {
            SessionPhase::Uninitialized
        }
    }

    /// Snapshot of the committed tracking state.
    pub fn tracking_state(&self) -> TrackingState {
        *self.state.borrow()
    }

    /// Subscribe to the session's created and moved signals.
    ///
    /// Attaching an attached plugin does nothing. Emitters are not required to reject
    /// duplicate handlers, so the plugin tracks its own subscriptions and never
    /// registers a second pair.
    pub fn attach<D: DragEmitter<E> + ?Sized>(&mut self, session: &mut D) {
        if self.subscriptions.is_some() {
            return;
        }
        *self.state.borrow_mut() = TrackingState::Uninitialized;
        let created = session.on(MirrorSignal::Created, self.created_listener());
        let moved = session.on(MirrorSignal::Moved, self.moved_listener());
        self.subscriptions = Some(Subscriptions { created, moved });
        debug!(
            x_axis = self.options.x_axis,
            y_axis = self.options.y_axis,
            "mirror plugin attached"
        );
    }

    /// Unsubscribe from the session.
    ///
    /// Detaching a detached plugin does nothing. Frame work already queued is not cancelled.
    pub fn detach<D: DragEmitter<E> + ?Sized>(&mut self, session: &mut D) {
        let Some(subs) = self.subscriptions.take() else {
            return;
        };
        session.off(subs.created);
        session.off(subs.moved);
        *self.state.borrow_mut() = TrackingState::Uninitialized;
        debug!("mirror plugin detached");
    }

    fn created_listener(&self) -> Listener<E> {
        let state = self.state.clone();
        let scheduler = self.scheduler.clone();
        let class = self.mirror_class.clone();
        Rc::new(move |event: &MirrorEvent<E>| {
            let MirrorEvent::Created {
                mirror,
                source,
                sensor,
            } = event
            else {
                return;
            };
            *state.borrow_mut() = TrackingState::Uninitialized;
            let (state, class) = (state.clone(), class.clone());
            let (mirror, source, sensor) = (mirror.clone(), source.clone(), *sensor);
            scheduler.run_now(Box::new(move || {
                match create(&mirror, &source, &sensor, &class) {
                    Ok(placement) => {
                        debug!(
                            offset_left = placement.offset.left,
                            offset_top = placement.offset.top,
                            x = placement.last.last_x,
                            y = placement.last.last_y,
                            "mirror placed"
                        );
                        *state.borrow_mut() = placement.into();
                    }
                    Err(err) => warn!(error = %err, "mirror creation aborted"),
                }
            }));
        })
    }

    fn moved_listener(&self) -> Listener<E> {
        let state = self.state.clone();
        let scheduler = self.scheduler.clone();
        let axes = self.options.axes();
        Rc::new(move |event: &MirrorEvent<E>| {
            let MirrorEvent::Moved { mirror, sensor } = event else {
                return;
            };
            let snapshot = *state.borrow();
            if !snapshot.is_tracking() {
                trace!("mirror move dropped: no mirror placed yet");
                return;
            }
            let (mirror, sensor) = (mirror.clone(), *sensor);
            scheduler.next_frame(Box::new(move || {
                apply_move(&mirror, &sensor, &snapshot, axes);
            }));
        })
    }
}

/// Normalize then place a freshly created mirror.
fn create<E>(mirror: &E, source: &E, sensor: &SensorEvent, class: &str) -> Result<Placement>
where
    E: MirrorElement + SourceElement,
{
    normalize_mirror(mirror, source, class);
    geometry::place(mirror, source, sensor)
}

fn apply_move<E: MirrorElement>(
    mirror: &E,
    sensor: &SensorEvent,
    state: &TrackingState,
    axes: Axes,
) {
    if let Some(t) = track(mirror, sensor, state, axes) {
        trace!(x = t.x, y = t.y, "mirror moved");
    }
}
