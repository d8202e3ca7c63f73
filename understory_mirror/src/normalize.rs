// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turn a freshly created mirror into an independent, non-interactive proxy.
//!
//! [`normalize_mirror`] runs the steps in order: [`reset_mirror`] (fixed at the viewport
//! origin, no pointer input, source size), then [`add_mirror_class`], then
//! [`remove_mirror_id`]. Base styles come first so rules attached to the mirror class can
//! override them. Placement is left to the transform; `top`/`left` stay at zero.

use crate::element::{MirrorElement, PointerEvents, Positioning, SourceElement, StyleDecl};

/// Reset positioning, disable pointer input, and copy the source's layout size.
pub fn reset_mirror<M, S>(mirror: &M, source: &S)
where
    M: MirrorElement + ?Sized,
    S: SourceElement + ?Sized,
{
    let size = source.offset_size();
    mirror.set_style(StyleDecl::Position(Positioning::Fixed));
    mirror.set_style(StyleDecl::PointerEvents(PointerEvents::None));
    mirror.set_style(StyleDecl::Top(0.0));
    mirror.set_style(StyleDecl::Left(0.0));
    mirror.set_style(StyleDecl::Width(size.width));
    mirror.set_style(StyleDecl::Height(size.height));
}

/// Tag the mirror with the configured class.
pub fn add_mirror_class<M: MirrorElement + ?Sized>(mirror: &M, class: &str) {
    mirror.add_class(class);
}

/// Drop any identifier the mirror inherited from its source.
pub fn remove_mirror_id<M: MirrorElement + ?Sized>(mirror: &M) {
    mirror.remove_id();
}

/// Run every normalization step.
pub fn normalize_mirror<M, S>(mirror: &M, source: &S, class: &str)
where
    M: MirrorElement + ?Sized,
    S: SourceElement + ?Sized,
{
    reset_mirror(mirror, source);
    add_mirror_class(mirror, class);
    remove_mirror_id(mirror);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessElement;
    use kurbo::{Rect, Size};

    #[test]
    fn mirror_becomes_fixed_inert_and_sized() {
        let source = HeadlessElement::new();
        source.set_offset_size(Size::new(80.0, 24.0));
        // A transformed source: the bounding box differs from the layout size.
        source.set_bounds(Some(Rect::new(0.0, 0.0, 160.0, 48.0)));
        let mirror = HeadlessElement::with_id("card-1");

        normalize_mirror(&mirror, &source, "draggable-mirror");

        let style = mirror.style();
        assert_eq!(style.position, Some(Positioning::Fixed));
        assert_eq!(style.pointer_events, Some(PointerEvents::None));
        assert_eq!(style.top, Some(0.0));
        assert_eq!(style.left, Some(0.0));
        assert_eq!(style.width, Some(80.0));
        assert_eq!(style.height, Some(24.0));
        assert_eq!(style.transform, None);
        assert!(mirror.has_class("draggable-mirror"));
        assert_eq!(mirror.id(), None);
    }

    #[test]
    fn base_styles_precede_class() {
        let source = HeadlessElement::new();
        let mirror = HeadlessElement::new();
        normalize_mirror(&mirror, &source, "m");
        let log = mirror.log();
        let class_at = log
            .iter()
            .position(|entry| entry == "class m")
            .unwrap();
        let last_style = log
            .iter()
            .rposition(|entry| entry.starts_with("style "))
            .unwrap();
        assert!(last_style < class_at);
        assert_eq!(log.last().map(|s| s.as_str()), Some("remove id"));
    }

    #[test]
    fn class_is_not_duplicated() {
        let mirror = HeadlessElement::new();
        add_mirror_class(&mirror, "m");
        add_mirror_class(&mirror, "m");
        assert_eq!(mirror.classes().len(), 1);
    }
}
