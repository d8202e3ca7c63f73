// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the mirror: pointer input, offsets, tracked positions, and session phases.
//!
//! ## Overview
//!
//! These types carry state between the [`geometry`](crate::geometry) pipeline, the
//! [`tracker`](crate::tracker), and the [`plugin`](crate::plugin) that owns a session.
//! All coordinates are client-viewport coordinates in CSS pixels.

use kurbo::{Point, Vec2};

/// Pointer input delivered with a drag signal.
///
/// This is the part of a sensor event the mirror reads: the pointer position in
/// client-viewport coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SensorEvent {
    /// Pointer position relative to the viewport.
    pub client: Point,
}

impl SensorEvent {
    /// Create a sensor event from client coordinates.
    pub const fn new(client_x: f64, client_y: f64) -> Self {
        Self {
            client: Point::new(client_x, client_y),
        }
    }

    /// Horizontal pointer position.
    #[inline]
    pub const fn client_x(&self) -> f64 {
        self.client.x
    }

    /// Vertical pointer position.
    #[inline]
    pub const fn client_y(&self) -> f64 {
        self.client.y
    }
}

/// Displacement from the mirror's top-left corner to the pointer.
///
/// Fixed when the mirror is created and reused for every later move of that mirror.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MirrorOffset {
    /// Distance from the mirror's top edge to the pointer.
    pub top: f64,
    /// Distance from the mirror's left edge to the pointer.
    pub left: f64,
}

impl MirrorOffset {
    /// The offset as a vector (`left` on x, `top` on y).
    #[inline]
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// Where the mirror's corner lands for a pointer at `client`.
    #[inline]
    pub fn anchor_for(self, client: Point) -> Point {
        client - self.to_vec2()
    }
}

/// Last position written by the initial placement.
///
/// Axis-locked moves read the frozen coordinate from here.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TrackedPosition {
    /// Last applied horizontal translation.
    pub last_x: f64,
    /// Last applied vertical translation.
    pub last_y: f64,
}

impl TrackedPosition {
    /// The tracked position as a point.
    #[inline]
    pub const fn to_point(self) -> Point {
        Point::new(self.last_x, self.last_y)
    }
}

impl From<Point> for TrackedPosition {
    fn from(p: Point) -> Self {
        Self {
            last_x: p.x,
            last_y: p.y,
        }
    }
}

/// Per-session tracking state.
///
/// The offset and the tracked position only exist together, so a session can never
/// observe one without the other.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum TrackingState {
    /// No creation pipeline has completed for the current mirror.
    #[default]
    Uninitialized,
    /// The mirror has been normalized and placed.
    Tracking {
        /// Pointer-to-corner offset captured at creation.
        offset: MirrorOffset,
        /// Position written by the initial placement.
        last: TrackedPosition,
    },
}

impl TrackingState {
    /// Returns the mirror offset, if initialized.
    pub fn offset(&self) -> Option<MirrorOffset> {
        match self {
            Self::Uninitialized => None,
            Self::Tracking { offset, .. } => Some(*offset),
        }
    }

    /// Returns the last tracked position, if initialized.
    pub fn last(&self) -> Option<TrackedPosition> {
        match self {
            Self::Uninitialized => None,
            Self::Tracking { last, .. } => Some(*last),
        }
    }

    /// Whether a creation pipeline has completed.
    pub fn is_tracking(&self) -> bool {
        matches!(self, Self::Tracking { .. })
    }
}

bitflags::bitflags! {
    /// Axes along which the mirror follows the pointer after its initial placement.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Axes: u8 {
        /// Horizontal movement.
        const X = 0b0000_0001;
        /// Vertical movement.
        const Y = 0b0000_0010;
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::X | Self::Y
    }
}

/// Observable lifecycle of a [`MirrorPlugin`](crate::plugin::MirrorPlugin).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Not subscribed to the drag emitter.
    Detached,
    /// Subscribed, but no mirror has completed creation.
    Uninitialized,
    /// Subscribed and tracking a placed mirror.
    Tracking,
}
