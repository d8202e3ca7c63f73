// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_mirror --heading-base-level=0

//! Understory Mirror: the drag mirror behavior of a drag-and-drop toolkit.
//!
//! ## Overview
//!
//! When a drag starts, the toolkit creates a mirror (a visual proxy of the dragged source).
//! This crate turns that mirror into an inert, fixed-position element sized like the source,
//! places it exactly over the source, and then keeps it under the pointer as the drag moves,
//! optionally locked to one axis.
//!
//! It does not create the mirror node, sense pointers, or decide when drags start and stop.
//! Those are the job of the host's drag session, reached through
//! [`DragEmitter`](crate::emitter::DragEmitter).
//!
//! ## Pieces
//!
//! - [`geometry`]: measure the source, compute the pointer offset, place the mirror.
//! - [`normalize`]: fixed positioning, no pointer input, source size, mirror class, no id.
//! - [`tracker`]: per-move translation with [`Axes`](crate::types::Axes) locks.
//! - [`plugin`]: [`MirrorPlugin`](crate::plugin::MirrorPlugin) subscribes to the session,
//!   owns the [`TrackingState`](crate::types::TrackingState), and drives the pipelines.
//! - [`schedule`]: "run now" and "run on the next frame" primitives the plugin depends on.
//! - [`headless`]: in-memory elements and emitter for tests and headless hosts.
//!
//! ## Workflow
//!
//! 1) Implement [`SourceElement`](crate::element::SourceElement) and
//!    [`MirrorElement`](crate::element::MirrorElement) for your element handle, and
//!    [`DragEmitter`](crate::emitter::DragEmitter) for your drag session.
//! 2) Build a [`MirrorPlugin`](crate::plugin::MirrorPlugin) with a
//!    [`Scheduler`](crate::schedule::Scheduler) and call `attach`.
//! 3) Raise [`MirrorEvent`](crate::emitter::MirrorEvent)s from the session. If you use
//!    [`FrameQueue`](crate::schedule::FrameQueue), flush it from your refresh callback.
//! 4) Call `detach` when the plugin should stop reacting.
//!
//! ```
//! use kurbo::{Rect, Size, Vec2};
//! use understory_mirror::emitter::MirrorEvent;
//! use understory_mirror::headless::{HeadlessElement, HeadlessEmitter};
//! use understory_mirror::options::MirrorOverrides;
//! use understory_mirror::plugin::MirrorPlugin;
//! use understory_mirror::schedule::FrameQueue;
//! use understory_mirror::types::SensorEvent;
//!
//! // Lock the mirror to horizontal movement.
//! let mut session: HeadlessEmitter<HeadlessElement> = HeadlessEmitter::new()
//!     .with_overrides(MirrorOverrides { y_axis: Some(false), ..Default::default() });
//! let mut plugin = MirrorPlugin::new(&session, FrameQueue::new());
//! plugin.attach(&mut session);
//!
//! let source = HeadlessElement::with_id("card");
//! source.set_bounds(Some(Rect::from_origin_size((40.0, 80.0), Size::new(120.0, 30.0))));
//! source.set_offset_size(Size::new(120.0, 30.0));
//! let mirror = HeadlessElement::with_id("card");
//!
//! session.emit(&MirrorEvent::Created {
//!     mirror: mirror.clone(),
//!     source: source.clone(),
//!     sensor: SensorEvent::new(50.0, 90.0),
//! });
//! assert_eq!(mirror.transform(), Some(Vec2::new(40.0, 80.0)));
//! assert_eq!(mirror.id(), None);
//!
//! session.emit(&MirrorEvent::Moved {
//!     mirror: mirror.clone(),
//!     sensor: SensorEvent::new(150.0, 400.0),
//! });
//! // Moves wait for the next frame.
//! assert_eq!(mirror.transform(), Some(Vec2::new(40.0, 80.0)));
//! plugin.scheduler().flush();
//! assert_eq!(mirror.transform(), Some(Vec2::new(140.0, 80.0)));
//!
//! plugin.detach(&mut session);
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`debug` for lifecycle, `warn` for aborted creations,
//! `trace` per move) and never installs a subscriber.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod element;
pub mod emitter;
pub mod error;
pub mod geometry;
pub mod headless;
pub mod normalize;
pub mod options;
pub mod plugin;
pub mod schedule;
pub mod tracker;
pub mod types;

pub use error::{MirrorError, Result};
