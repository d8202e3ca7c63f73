// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element collaborators and the style writes the mirror performs.
//!
//! ## Handles
//!
//! Elements are handles owned by the host (a DOM node, a retained widget, a test double).
//! Methods take `&self`: the host decides how a write reaches the underlying node, the
//! same way a DOM reference can be mutated through any clone of it.
//!
//! ## Style vocabulary
//!
//! The mirror only writes the properties in [`StyleDecl`]. Each declaration knows its CSS
//! property name and renders its value through [`Display`](core::fmt::Display), so a web
//! host can forward it verbatim:
//!
//! ```
//! use understory_mirror::element::StyleDecl;
//! use kurbo::Vec2;
//!
//! let decl = StyleDecl::Transform(Vec2::new(90.0, 40.5));
//! assert_eq!(decl.property(), "transform");
//! assert_eq!(format!("{decl}"), "translate3d(90px, 40.5px, 0)");
//! ```

use core::fmt;

use kurbo::{Affine, Rect, Size, Vec2};

/// Layout positioning scheme.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Positioning {
    /// Positioned relative to the viewport.
    Fixed,
}

/// Whether an element receives pointer input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerEvents {
    /// The element never intercepts pointer input.
    None,
}

/// A single style write applied to the mirror.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StyleDecl {
    /// `position`.
    Position(Positioning),
    /// `pointer-events`.
    PointerEvents(PointerEvents),
    /// `top`, in pixels.
    Top(f64),
    /// `left`, in pixels.
    Left(f64),
    /// `width`, in pixels.
    Width(f64),
    /// `height`, in pixels.
    Height(f64),
    /// `transform`: a 2D translation with zero depth.
    Transform(Vec2),
}

impl StyleDecl {
    /// CSS property name of this declaration.
    pub fn property(&self) -> &'static str {
        match self {
            Self::Position(_) => "position",
            Self::PointerEvents(_) => "pointer-events",
            Self::Top(_) => "top",
            Self::Left(_) => "left",
            Self::Width(_) => "width",
            Self::Height(_) => "height",
            Self::Transform(_) => "transform",
        }
    }

    /// The translation as an affine transform, for retained-mode hosts.
    ///
    /// Returns `None` for declarations other than [`StyleDecl::Transform`].
    pub fn affine(&self) -> Option<Affine> {
        match self {
            Self::Transform(v) => Some(Affine::translate(*v)),
            _ => None,
        }
    }
}

impl fmt::Display for StyleDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(Positioning::Fixed) => f.write_str("fixed"),
            Self::PointerEvents(PointerEvents::None) => f.write_str("none"),
            Self::Top(px) | Self::Left(px) | Self::Width(px) | Self::Height(px) => {
                write!(f, "{px}px")
            }
            Self::Transform(v) => write!(f, "translate3d({}px, {}px, 0)", v.x, v.y),
        }
    }
}

/// The element being dragged.
pub trait SourceElement {
    /// Bounding box in client-viewport coordinates.
    ///
    /// Returns `None` when the element cannot be measured, for example because it has
    /// been removed from the document.
    fn bounding_client_rect(&self) -> Option<Rect>;

    /// Rendered layout size, ignoring transforms.
    fn offset_size(&self) -> Size;
}

/// The visual proxy that follows the pointer.
pub trait MirrorElement {
    /// Apply a single style declaration.
    fn set_style(&self, decl: StyleDecl);

    /// Add a CSS class.
    fn add_class(&self, class: &str);

    /// Remove the identifier attribute and any cached identifier.
    fn remove_id(&self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn lengths_render_as_pixels() {
        assert_eq!(format!("{}", StyleDecl::Top(0.0)), "0px");
        assert_eq!(format!("{}", StyleDecl::Width(120.5)), "120.5px");
        assert_eq!(StyleDecl::Height(1.0).property(), "height");
    }

    #[test]
    fn keywords_render_as_css() {
        assert_eq!(format!("{}", StyleDecl::Position(Positioning::Fixed)), "fixed");
        assert_eq!(
            format!("{}", StyleDecl::PointerEvents(PointerEvents::None)),
            "none"
        );
        assert_eq!(
            StyleDecl::PointerEvents(PointerEvents::None).property(),
            "pointer-events"
        );
    }

    #[test]
    fn transform_has_zero_depth() {
        let decl = StyleDecl::Transform(Vec2::new(-3.0, 7.0));
        assert_eq!(format!("{decl}"), "translate3d(-3px, 7px, 0)");
        assert_eq!(
            decl.affine(),
            Some(Affine::translate(Vec2::new(-3.0, 7.0)))
        );
        assert_eq!(StyleDecl::Left(0.0).affine(), None);
    }
}
