// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Creation-time geometry: measure the source, derive the pointer offset, place the mirror.
//!
//! ## Stages
//!
//! The stages run in a fixed order and each consumes the previous stage's output:
//!
//! 1) [`measure_source`]: bounding box of the source in viewport coordinates.
//! 2) [`mirror_offset`]: pointer position relative to that box's top-left corner.
//! 3) [`initial_position`]: pointer position minus the offset.
//! 4) [`place_initial`]: write the translation and report the tracked position.
//!
//! [`place`] runs all four. The initial placement always moves both axes; axis locks
//! only apply to later moves (see [`tracker`](crate::tracker)).
//!
//! Since the offset is measured from the same pointer that is then used to place the
//! mirror, the initial position is the source rect's top-left corner.
//!
//! ```
//! use understory_mirror::geometry::{initial_position, mirror_offset};
//! use understory_mirror::types::SensorEvent;
//! use kurbo::{Point, Rect};
//!
//! let rect = Rect::new(40.0, 25.0, 140.0, 75.0);
//! let sensor = SensorEvent::new(70.0, 30.0);
//! let offset = mirror_offset(&sensor, rect).unwrap();
//! assert_eq!(initial_position(&sensor, offset), Point::new(40.0, 25.0));
//! ```

use kurbo::{Point, Rect};

use crate::element::{MirrorElement, SourceElement, StyleDecl};
use crate::error::{MirrorError, Result};
use crate::types::{MirrorOffset, SensorEvent, TrackedPosition, TrackingState};

/// Output of a completed creation pipeline.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Pointer-to-corner offset for the rest of the session.
    pub offset: MirrorOffset,
    /// Position written by the initial placement.
    pub last: TrackedPosition,
}

impl From<Placement> for TrackingState {
    fn from(p: Placement) -> Self {
        Self::Tracking {
            offset: p.offset,
            last: p.last,
        }
    }
}

/// Measure the source element's bounding box.
///
/// Fails with [`MirrorError::SourceDetached`] when the source cannot be measured and with
/// [`MirrorError::NonFiniteGeometry`] when the box is not finite. A zero offset is never
/// substituted.
pub fn measure_source<S: SourceElement + ?Sized>(source: &S) -> Result<Rect> {
    let rect = source
        .bounding_client_rect()
        .ok_or(MirrorError::SourceDetached)?;
    if !rect.is_finite() {
        return Err(MirrorError::NonFiniteGeometry);
    }
    Ok(rect)
}

/// Offset of the pointer from the top-left corner of `rect`.
pub fn mirror_offset(sensor: &SensorEvent, rect: Rect) -> Result<MirrorOffset> {
    if !sensor.client.is_finite() {
        return Err(MirrorError::NonFiniteGeometry);
    }
    Ok(MirrorOffset {
        top: sensor.client_y() - rect.y0,
        left: sensor.client_x() - rect.x0,
    })
}

/// Initial mirror position for `sensor`, on both axes.
#[inline]
pub fn initial_position(sensor: &SensorEvent, offset: MirrorOffset) -> Point {
    offset.anchor_for(sensor.client)
}

/// Translate the mirror to its initial position and return it as the tracked position.
pub fn place_initial<M: MirrorElement + ?Sized>(
    mirror: &M,
    sensor: &SensorEvent,
    offset: MirrorOffset,
) -> TrackedPosition {
    let pos = initial_position(sensor, offset);
    mirror.set_style(StyleDecl::Transform(pos.to_vec2()));
    pos.into()
}

/// Run the full creation geometry for one mirror.
///
/// Nothing is written to the mirror unless measurement and offset calculation succeed.
pub fn place<M, S>(mirror: &M, source: &S, sensor: &SensorEvent) -> Result<Placement>
where
    M: MirrorElement + ?Sized,
    S: SourceElement + ?Sized,
{
    let rect = measure_source(source)?;
    let offset = mirror_offset(sensor, rect)?;
    let last = place_initial(mirror, sensor, offset);
    Ok(Placement { offset, last })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessElement;
    use kurbo::{Size, Vec2};

    fn source_at(rect: Rect) -> HeadlessElement {
        let el = HeadlessElement::new();
        el.set_bounds(Some(rect));
        el.set_offset_size(rect.size());
        el
    }

    #[test]
    fn offset_is_pointer_minus_corner() {
        let offset = mirror_offset(
            &SensorEvent::new(110.0, 205.0),
            Rect::from_origin_size((100.0, 200.0), Size::new(50.0, 20.0)),
        )
        .unwrap();
        assert_eq!(
            offset,
            MirrorOffset {
                top: 5.0,
                left: 10.0
            }
        );
    }

    // The initial position does not depend on where the pointer grabbed the source.
    #[test]
    fn initial_position_is_source_corner() {
        let rect = Rect::new(12.0, 34.0, 112.0, 84.0);
        for (px, py) in [(12.0, 34.0), (50.0, 60.0), (111.5, 83.25), (-4.0, 900.0)] {
            let sensor = SensorEvent::new(px, py);
            let offset = mirror_offset(&sensor, rect).unwrap();
            assert_eq!(initial_position(&sensor, offset), Point::new(12.0, 34.0));
        }
    }

    #[test]
    fn place_writes_transform_and_reports_position() {
        let mirror = HeadlessElement::new();
        let source = source_at(Rect::new(20.0, 30.0, 70.0, 60.0));
        let placement = place(&mirror, &source, &SensorEvent::new(25.0, 40.0)).unwrap();
        assert_eq!(
            placement.offset,
            MirrorOffset {
                top: 10.0,
                left: 5.0
            }
        );
        assert_eq!(placement.last.to_point(), Point::new(20.0, 30.0));
        assert_eq!(mirror.transform(), Some(Vec2::new(20.0, 30.0)));
    }

    #[test]
    fn detached_source_fails_without_writing() {
        let mirror = HeadlessElement::new();
        let source = HeadlessElement::new();
        source.set_bounds(None);
        assert_eq!(
            place(&mirror, &source, &SensorEvent::new(1.0, 1.0)),
            Err(MirrorError::SourceDetached)
        );
        assert_eq!(mirror.transform(), None);
        assert_eq!(mirror.style_writes(), 0);
    }

    #[test]
    fn non_finite_geometry_is_rejected() {
        let mirror = HeadlessElement::new();
        let source = source_at(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(
            place(&mirror, &source, &SensorEvent::new(f64::NAN, 1.0)),
            Err(MirrorError::NonFiniteGeometry)
        );

        let bad = source_at(Rect::new(0.0, 0.0, 10.0, 10.0));
        bad.set_bounds(Some(Rect::new(0.0, f64::INFINITY, 10.0, 10.0)));
        assert_eq!(measure_source(&bad), Err(MirrorError::NonFiniteGeometry));
        assert_eq!(mirror.transform(), None);
    }
}
