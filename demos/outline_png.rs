//! Render an animated outline over a PNG and write the frames back out.
//!
//! Usage: `cargo run --example outline_png -- input.png out_dir [frames]`

use anyhow::Context;

use keyline::{
    ApplyThreading, Curve, Fps, Frame, FrameIndex, InterpMode, Outline, apply_effect_frames,
    decode_image, save_png,
};

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let usage = "usage: outline_png <input.png> <out_dir> [frames]";
    let mut args = std::env::args().skip(1);
    let input = args.next().context(usage)?;
    let out_dir = args.next().context(usage)?;
    let frames: u64 = match args.next() {
        Some(raw) => raw.parse().context("frames must be an integer")?,
        None => 24,
    };

    let bytes = std::fs::read(&input).with_context(|| format!("read {input}"))?;
    let image = decode_image(&bytes)?;
    let fps = Fps::new(24, 1)?;

    let last_key = frames.saturating_sub(1).max(1);
    let fx = Outline::new(
        Curve::from_pairs(&[(0, 0.0), (last_key, 18.0)], InterpMode::Bezier),
        Curve::constant(255.0),
        Curve::constant(64.0),
        Curve::constant(0.0),
        Curve::constant(255.0),
    );

    let mut batch: Vec<Frame> = (0..frames)
        .map(|f| Frame::new(FrameIndex(f), fps, image.clone()))
        .collect();
    apply_effect_frames(
        &fx,
        &mut batch,
        &ApplyThreading {
            parallel: true,
            threads: None,
        },
    )?;

    std::fs::create_dir_all(&out_dir).with_context(|| format!("create {out_dir}"))?;
    for frame in &batch {
        let path =
            std::path::Path::new(&out_dir).join(format!("outline_{:04}.png", frame.number.0));
        save_png(&frame.image, &path)?;
    }
    eprintln!(
        "wrote {} frames ({:.2}s at {} fps) to {out_dir}",
        batch.len(),
        fps.frames_to_secs(batch.len() as u64),
        fps.as_f64()
    );
    Ok(())
}
