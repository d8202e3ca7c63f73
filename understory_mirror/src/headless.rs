// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory host: elements and a drag emitter without a browser.
//!
//! [`HeadlessElement`] records every write the mirror makes so tests, demos, and
//! headless hosts can inspect the result. [`HeadlessEmitter`] keeps subscriptions in
//! registration order and delivers events synchronously through [`HeadlessEmitter::emit`].

use alloc::format;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::{Rect, Size, Vec2};

use crate::element::{MirrorElement, PointerEvents, Positioning, SourceElement, StyleDecl};
use crate::emitter::{ClassRole, DragEmitter, Listener, ListenerId, MirrorEvent, MirrorSignal};
use crate::options::MirrorOverrides;

/// Current value of each style property the mirror writes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct HeadlessStyle {
    /// `position`.
    pub position: Option<Positioning>,
    /// `pointer-events`.
    pub pointer_events: Option<PointerEvents>,
    /// `top`.
    pub top: Option<f64>,
    /// `left`.
    pub left: Option<f64>,
    /// `width`.
    pub width: Option<f64>,
    /// `height`.
    pub height: Option<f64>,
    /// `transform` translation.
    pub transform: Option<Vec2>,
}

impl HeadlessStyle {
    fn apply(&mut self, decl: StyleDecl) {
        match decl {
            StyleDecl::Position(p) => self.position = Some(p),
            StyleDecl::PointerEvents(p) => self.pointer_events = Some(p),
            StyleDecl::Top(v) => self.top = Some(v),
            StyleDecl::Left(v) => self.left = Some(v),
            StyleDecl::Width(v) => self.width = Some(v),
            StyleDecl::Height(v) => self.height = Some(v),
            StyleDecl::Transform(v) => self.transform = Some(v),
        }
    }
}

#[derive(Debug)]
struct ElementData {
    id: Option<String>,
    classes: Vec<String>,
    style: HeadlessStyle,
    bounds: Option<Rect>,
    offset_size: Size,
    style_writes: usize,
    log: Vec<String>,
}

impl Default for ElementData {
    fn default() -> Self {
        Self {
            id: None,
            classes: Vec::new(),
            style: HeadlessStyle::default(),
            bounds: Some(Rect::ZERO),
            offset_size: Size::ZERO,
            style_writes: 0,
            log: Vec::new(),
        }
    }
}

/// A shared handle to an in-memory element.
///
/// Clones refer to the same element; equality is identity.
#[derive(Clone, Debug, Default)]
pub struct HeadlessElement(Rc<RefCell<ElementData>>);

impl PartialEq for HeadlessElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl HeadlessElement {
    /// Create an element attached to the document at [`Rect::ZERO`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element carrying an identifier, as a clone of a source would.
    pub fn with_id(id: &str) -> Self {
        let el = Self::new();
        el.0.borrow_mut().id = Some(id.to_string());
        el
    }

    /// Current identifier.
    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    /// Set the bounding box reported to the mirror; `None` means unmeasurable.
    pub fn set_bounds(&self, bounds: Option<Rect>) {
        self.0.borrow_mut().bounds = bounds;
    }

    /// Remove the element from the document so it can no longer be measured.
    pub fn detach_from_document(&self) {
        self.set_bounds(None);
    }

    /// Set the layout size reported to the mirror.
    pub fn set_offset_size(&self, size: Size) {
        self.0.borrow_mut().offset_size = size;
    }

    /// Snapshot of the current style.
    pub fn style(&self) -> HeadlessStyle {
        self.0.borrow().style
    }

    /// Current transform translation, if any was written.
    pub fn transform(&self) -> Option<Vec2> {
        self.0.borrow().style.transform
    }

    /// Number of style declarations written so far.
    pub fn style_writes(&self) -> usize {
        self.0.borrow().style_writes
    }

    /// Classes in insertion order.
    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    /// Whether `class` is present.
    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    /// Every mutation in order, as readable lines (`style transform: ...`, `class ...`, `remove id`).
    pub fn log(&self) -> Vec<String> {
        self.0.borrow().log.clone()
    }
}

impl SourceElement for HeadlessElement {
    fn bounding_client_rect(&self) -> Option<Rect> {
        self.0.borrow().bounds
    }

    fn offset_size(&self) -> Size {
        self.0.borrow().offset_size
    }
}

impl MirrorElement for HeadlessElement {
    fn set_style(&self, decl: StyleDecl) {
        let mut data = self.0.borrow_mut();
        data.style.apply(decl);
        data.style_writes += 1;
        data.log.push(format!("style {}: {decl}", decl.property()));
    }

    fn add_class(&self, class: &str) {
        let mut data = self.0.borrow_mut();
        if !data.classes.iter().any(|c| c == class) {
            data.classes.push(class.to_string());
        }
        data.log.push(format!("class {class}"));
    }

    fn remove_id(&self) {
        let mut data = self.0.borrow_mut();
        data.id = None;
        data.log.push("remove id".to_string());
    }
}

/// Default mirror class, matching common drag libraries.
pub const DEFAULT_MIRROR_CLASS: &str = "draggable-mirror";

/// A synchronous in-memory drag emitter.
pub struct HeadlessEmitter<E> {
    listeners: Vec<(ListenerId, MirrorSignal, Listener<E>)>,
    next_id: u64,
    overrides: MirrorOverrides,
    mirror_class: String,
}

impl<E> core::fmt::Debug for HeadlessEmitter<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HeadlessEmitter")
            .field("listeners", &self.listeners.len())
            .field("overrides", &self.overrides)
            .field("mirror_class", &self.mirror_class)
            .finish_non_exhaustive()
    }
}

impl<E> Default for HeadlessEmitter<E> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 1,
            overrides: MirrorOverrides::default(),
            mirror_class: DEFAULT_MIRROR_CLASS.to_string(),
        }
    }
}

impl<E> HeadlessEmitter<E> {
    /// Create an emitter with no overrides and [`DEFAULT_MIRROR_CLASS`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overrides reported by [`DragEmitter::mirror_overrides`].
    pub fn with_overrides(mut self, overrides: MirrorOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Set the class reported for [`ClassRole::Mirror`].
    pub fn with_mirror_class(mut self, class: &str) -> Self {
        self.mirror_class = class.to_string();
        self
    }

    /// Number of live subscriptions for `signal`.
    pub fn listener_count(&self, signal: MirrorSignal) -> usize {
        self.listeners.iter().filter(|(_, s, _)| *s == signal).count()
    }

    /// Deliver `event` to the listeners of its signal, in registration order.
    ///
    /// Returns the number of listeners invoked.
    pub fn emit(&self, event: &MirrorEvent<E>) -> usize {
        let signal = event.signal();
        let targets: Vec<Listener<E>> = self
            .listeners
            .iter()
            .filter(|(_, s, _)| *s == signal)
            .map(|(_, _, l)| l.clone())
            .collect();
        for listener in &targets {
            listener(event);
        }
        targets.len()
    }
}

impl<E> DragEmitter<E> for HeadlessEmitter<E> {
    fn on(&mut self, signal: MirrorSignal, listener: Listener<E>) -> ListenerId {
        let id = ListenerId::new(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, signal, listener));
        id
    }

    fn off(&mut self, id: ListenerId) {
        self.listeners.retain(|(l, _, _)| *l != id);
    }

    fn mirror_overrides(&self) -> MirrorOverrides {
        self.overrides
    }

    fn class_name_for(&self, role: ClassRole) -> String {
        match role {
            ClassRole::Mirror => self.mirror_class.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SensorEvent;
    use core::cell::Cell;

    #[test]
    fn clones_share_state() {
        let a = HeadlessElement::new();
        let b = a.clone();
        b.set_style(StyleDecl::Top(3.0));
        assert_eq!(a.style().top, Some(3.0));
        assert_eq!(a, b);
        assert_ne!(a, HeadlessElement::new());
    }

    #[test]
    fn detached_element_is_unmeasurable() {
        let el = HeadlessElement::new();
        assert_eq!(el.bounding_client_rect(), Some(Rect::ZERO));
        el.detach_from_document();
        assert_eq!(el.bounding_client_rect(), None);
    }

    #[test]
    fn emitter_routes_by_signal_and_unsubscribes() {
        let mut emitter: HeadlessEmitter<u32> = HeadlessEmitter::new();
        let created = Rc::new(Cell::new(0));
        let c = created.clone();
        let id = emitter.on(
            MirrorSignal::Created,
            Rc::new(move |_: &MirrorEvent<u32>| c.set(c.get() + 1)),
        );
        assert_eq!(emitter.listener_count(MirrorSignal::Created), 1);
        assert_eq!(emitter.listener_count(MirrorSignal::Moved), 0);
        let other = emitter.on(
            MirrorSignal::Moved,
            Rc::new(|_: &MirrorEvent<u32>| {}),
        );
        assert_eq!(other.get(), id.get() + 1);
        emitter.off(other);

        let moved = MirrorEvent::Moved {
            mirror: 1,
            sensor: SensorEvent::new(0.0, 0.0),
        };
        assert_eq!(emitter.emit(&moved), 0);
        let event = MirrorEvent::Created {
            mirror: 1,
            source: 2,
            sensor: SensorEvent::new(0.0, 0.0),
        };
        assert_eq!(emitter.emit(&event), 1);
        assert_eq!(created.get(), 1);

        emitter.off(id);
        emitter.off(id);
        assert_eq!(emitter.emit(&event), 0);
        assert_eq!(created.get(), 1);
    }

    #[test]
    fn emitter_lookups() {
        let emitter: HeadlessEmitter<u32> = HeadlessEmitter::new()
            .with_overrides(MirrorOverrides {
                x_axis: Some(false),
                y_axis: None,
            })
            .with_mirror_class("ghost");
        assert_eq!(emitter.mirror_overrides().x_axis, Some(false));
        assert_eq!(emitter.class_name_for(ClassRole::Mirror), "ghost");
    }
}
