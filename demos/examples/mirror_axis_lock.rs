// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-locked mirror driven by a frame queue.
//!
//! Reads mirror options from JSON the way a host would, locks movement to the x axis,
//! and flushes the frame queue once per simulated refresh. Several moves in one frame
//! all run; the last one is what stays visible.
//!
//! Run:
//! - `cargo run -p understory_demos --example mirror_axis_lock`

use kurbo::{Rect, Size};
use tracing_subscriber::EnvFilter;
use understory_mirror::emitter::MirrorEvent;
use understory_mirror::headless::{HeadlessElement, HeadlessEmitter};
use understory_mirror::options::MirrorOverrides;
use understory_mirror::plugin::MirrorPlugin;
use understory_mirror::schedule::FrameQueue;
use understory_mirror::types::SensorEvent;

fn main() -> Result<(), serde_json::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let overrides: MirrorOverrides = serde_json::from_str(r#"{ "yAxis": false }"#)?;
    let mut session: HeadlessEmitter<HeadlessElement> = HeadlessEmitter::new()
        .with_overrides(overrides)
        .with_mirror_class("slider-thumb--mirror");
    let mut plugin = MirrorPlugin::new(&session, FrameQueue::new());
    plugin.attach(&mut session);
    tracing::info!(options = ?plugin.options(), "plugin ready");

    let thumb = HeadlessElement::new();
    thumb.set_bounds(Some(Rect::from_origin_size((10.0, 300.0), Size::new(20.0, 20.0))));
    thumb.set_offset_size(Size::new(20.0, 20.0));
    let mirror = HeadlessElement::new();

    session.emit(&MirrorEvent::Created {
        mirror: mirror.clone(),
        source: thumb,
        sensor: SensorEvent::new(20.0, 310.0),
    });
    println!("placed at {:?}", mirror.transform());

    let frames = [
        vec![(40.0, 312.0), (55.0, 330.0)],
        vec![(90.0, 290.0)],
        vec![],
        vec![(140.0, 500.0), (150.0, 510.0), (160.0, 505.0)],
    ];
    for (frame, moves) in frames.iter().enumerate() {
        for &(x, y) in moves {
            session.emit(&MirrorEvent::Moved {
                mirror: mirror.clone(),
                sensor: SensorEvent::new(x, y),
            });
        }
        let ran = plugin.scheduler().flush();
        println!("frame {frame}: {ran} update(s), mirror at {:?}", mirror.transform());
    }

    plugin.detach(&mut session);
    Ok(())
}
