// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-move positioning with axis locks.
//!
//! ## Axis policy
//!
//! The raw target is the pointer minus the mirror offset. Depending on [`Axes`]:
//!
//! - `X | Y`: move to the target.
//! - `X` only: take the target's x, keep the tracked `last_y`.
//! - `Y` only: keep the tracked `last_x`, take the target's y.
//! - empty: write nothing.
//!
//! ## Tracked position
//!
//! Tracking never writes back to [`TrackingState`]. The frozen coordinate of an
//! axis-locked move is always the one captured by the initial placement, not the
//! coordinate of the previous move.
//!
//! No geometry is read here; each move costs one style write at most.

use kurbo::Vec2;

use crate::element::{MirrorElement, StyleDecl};
use crate::types::{Axes, MirrorOffset, SensorEvent, TrackedPosition, TrackingState};

/// Translation for a move event, or `None` when no axis is enabled.
pub fn tracked_translation(
    sensor: &SensorEvent,
    offset: MirrorOffset,
    last: TrackedPosition,
    axes: Axes,
) -> Option<Vec2> {
    let target = offset.anchor_for(sensor.client);
    match (axes.contains(Axes::X), axes.contains(Axes::Y)) {
        (true, true) => Some(target.to_vec2()),
        (true, false) => Some(Vec2::new(target.x, last.last_y)),
        (false, true) => Some(Vec2::new(last.last_x, target.y)),
        (false, false) => None,
    }
}

/// Reposition the mirror for a move event.
///
/// Returns the translation that was written. Nothing is written when `state` is
/// [`TrackingState::Uninitialized`] or when `axes` is empty.
pub fn track<M: MirrorElement + ?Sized>(
    mirror: &M,
    sensor: &SensorEvent,
    state: &TrackingState,
    axes: Axes,
) -> Option<Vec2> {
    let TrackingState::Tracking { offset, last } = *state else {
        return None;
    };
    let translation = tracked_translation(sensor, offset, last, axes)?;
    mirror.set_style(StyleDecl::Transform(translation));
    Some(translation)
}
