// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag session surface the mirror plugin consumes.
//!
//! ## Overview
//!
//! A drag session raises two mirror signals:
//!
//! - [`MirrorSignal::Created`]: a mirror element exists for a source and a pointer.
//! - [`MirrorSignal::Moved`]: the pointer moved while the mirror is shown.
//!
//! The session also answers two read-only lookups: the host's mirror overrides and
//! the class name configured for a [`ClassRole`].
//!
//! Deciding when a drag starts or stops, creating the mirror node, and sensing the
//! pointer all happen upstream of this trait.

use alloc::rc::Rc;
use alloc::string::String;

use crate::options::MirrorOverrides;
use crate::types::SensorEvent;

/// Names of the lifecycle signals the plugin listens to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MirrorSignal {
    /// `mirror:created`.
    Created,
    /// `mirror:move`.
    Moved,
}

impl MirrorSignal {
    /// Event name used by web hosts.
    pub fn name(self) -> &'static str {
        match self {
            Self::Created => "mirror:created",
            Self::Moved => "mirror:move",
        }
    }
}

/// Payload of a mirror signal.
#[derive(Clone, Debug, PartialEq)]
pub enum MirrorEvent<E> {
    /// A mirror was created for `source`.
    Created {
        /// The proxy element.
        mirror: E,
        /// The element being dragged.
        source: E,
        /// Pointer input that triggered the drag.
        sensor: SensorEvent,
    },
    /// The pointer moved.
    Moved {
        /// The proxy element.
        mirror: E,
        /// Current pointer input.
        sensor: SensorEvent,
    },
}

impl<E> MirrorEvent<E> {
    /// The signal this payload belongs to.
    pub fn signal(&self) -> MirrorSignal {
        match self {
            Self::Created { .. } => MirrorSignal::Created,
            Self::Moved { .. } => MirrorSignal::Moved,
        }
    }

    /// The mirror element carried by either variant.
    pub fn mirror(&self) -> &E {
        match self {
            Self::Created { mirror, .. } | Self::Moved { mirror, .. } => mirror,
        }
    }

    /// The pointer input carried by either variant.
    pub fn sensor(&self) -> SensorEvent {
        match self {
            Self::Created { sensor, .. } | Self::Moved { sensor, .. } => *sensor,
        }
    }
}

/// Callback registered for a signal.
pub type Listener<E> = Rc<dyn Fn(&MirrorEvent<E>)>;

/// Handle returned by [`DragEmitter::on`], used to unsubscribe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Wrap a host-assigned identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The host-assigned identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Logical roles the host maps to CSS class names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClassRole {
    /// The drag mirror.
    Mirror,
}

impl ClassRole {
    /// Role key as understood by web hosts.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mirror => "mirror",
        }
    }
}

/// A drag session that the mirror plugin attaches to.
pub trait DragEmitter<E> {
    /// Subscribe `listener` to `signal`.
    fn on(&mut self, signal: MirrorSignal, listener: Listener<E>) -> ListenerId;

    /// Remove a subscription. Unknown or already removed ids are ignored.
    fn off(&mut self, id: ListenerId);

    /// The host's `options.mirror` overrides.
    fn mirror_overrides(&self) -> MirrorOverrides;

    /// Class name configured for `role`.
    fn class_name_for(&self, role: ClassRole) -> String;
}
