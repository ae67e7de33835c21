//! Headless demo driving the reveal switch through a few toggles.
//!
//! There is no window here; the demo stands in for a host that owns a frame
//! clock, ticking the layer tree at ~60 fps and logging what the control
//! does. Run with `RUST_LOG=debug` to see the library's tracing output.

use std::thread;
use std::time::{Duration, Instant};

use paper_switch::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

fn main() {
    tracing_subscriber::fmt::init();
    init_global_registry();

    let mut tree = LayerTree::new();
    let container = tree.create_layer();
    tree.set_frame(container, Rect::new(0.0, 0.0, 200.0, 100.0))
        .expect("container layer just created");

    let mut switch = PaperSwitch::new().with_tint_color(Color::from_rgb8(52, 199, 89));
    switch.set_geometry(Rect::new(10.0, 35.0, 51.0, 31.0));

    {
        let mut ctx = SceneContext::new(&mut tree);
        switch
            .attach(&mut ctx, container)
            .expect("attach to the container layer");
    }

    switch.animation_started().connect(|&on| {
        println!("reveal started, switch is {}", if on { "on" } else { "off" });
    });
    switch.animation_stopped().connect(|&(on, finished)| {
        println!(
            "reveal stopped, switch is {}, {}",
            if on { "on" } else { "off" },
            if finished { "completed" } else { "interrupted" }
        );
    });

    println!(
        "disc radius {:.1} covers the 200x100 container",
        switch.reveal_radius()
    );

    // Flip on, let the reveal finish.
    {
        let mut ctx = SceneContext::new(&mut tree);
        switch.set_on(&mut ctx, true, true);
    }
    run_frames(&mut tree, 25);

    // Flip off, but reverse again mid-flight: the collapse is interrupted
    // and the disc grows right back.
    {
        let mut ctx = SceneContext::new(&mut tree);
        switch.set_on(&mut ctx, false, true);
    }
    run_frames(&mut tree, 6);
    {
        let mut ctx = SceneContext::new(&mut tree);
        switch.set_on(&mut ctx, true, true);
    }
    run_frames(&mut tree, 25);

    // Non-animated set: the disc snaps, no callbacks fire.
    {
        let mut ctx = SceneContext::new(&mut tree);
        switch.set_on(&mut ctx, false, false);
    }
    println!("snapped off, switch is {}", if switch.is_on() { "on" } else { "off" });
}

/// Tick the tree for a number of ~16 ms frames.
fn run_frames(tree: &mut LayerTree, frames: u32) {
    for _ in 0..frames {
        tree.tick(Instant::now());
        thread::sleep(FRAME);
    }
}
