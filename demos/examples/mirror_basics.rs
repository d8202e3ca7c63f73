// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mirror basics.
//!
//! Creates a mirror for a card, drags it around with an immediate scheduler, and
//! prints the style writes the plugin performed.
//!
//! Run:
//! - `RUST_LOG=understory_mirror=trace cargo run -p understory_demos --example mirror_basics`

use kurbo::{Rect, Size};
use tracing_subscriber::EnvFilter;
use understory_mirror::emitter::MirrorEvent;
use understory_mirror::headless::{HeadlessElement, HeadlessEmitter};
use understory_mirror::plugin::MirrorPlugin;
use understory_mirror::schedule::Immediate;
use understory_mirror::types::SensorEvent;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut session: HeadlessEmitter<HeadlessElement> = HeadlessEmitter::new();
    let mut plugin = MirrorPlugin::new(&session, Immediate);
    plugin.attach(&mut session);

    let source = HeadlessElement::with_id("card-7");
    source.set_bounds(Some(Rect::from_origin_size(
        (120.0, 64.0),
        Size::new(240.0, 48.0),
    )));
    source.set_offset_size(Size::new(240.0, 48.0));
    let mirror = HeadlessElement::with_id("card-7");

    // Grab the card 30px in and 12px down.
    session.emit(&MirrorEvent::Created {
        mirror: mirror.clone(),
        source,
        sensor: SensorEvent::new(150.0, 76.0),
    });
    println!("phase after create: {:?}", plugin.phase());
    println!("tracking state: {:?}", plugin.tracking_state());

    for (x, y) in [(160.0, 80.0), (200.0, 120.0), (320.0, 260.0)] {
        session.emit(&MirrorEvent::Moved {
            mirror: mirror.clone(),
            sensor: SensorEvent::new(x, y),
        });
        println!("pointer ({x}, {y}) -> mirror {:?}", mirror.transform());
    }

    plugin.detach(&mut session);

    println!("\nstyle writes:");
    for line in mirror.log() {
        println!("  {line}");
    }
}
