use rayon::prelude::*;

use crate::{
    effects::base::Effect,
    foundation::error::{KeylineError, KeylineResult},
    frame::image::Frame,
};

/// Threading configuration for [`apply_effect_frames`].
///
/// `threads` pins the rayon pool size; `None` lets rayon pick.
#[derive(Clone, Debug, Default)]
pub struct ApplyThreading {
    pub parallel: bool,
    pub threads: Option<usize>,
}

/// Apply one effect to every frame of a batch, in place.
///
/// Each frame is evaluated at its own stored [`Frame::number`], so the batch
/// produces exactly what one [`Effect::get_frame`] call per frame would.
/// The parallel path distributes frames over a rayon pool and is
/// byte-identical to the sequential path; an empty batch is a no-op.
#[tracing::instrument(skip(effect, frames), fields(frames = frames.len()))]
pub fn apply_effect_frames(
    effect: &dyn Effect,
    frames: &mut [Frame],
    threading: &ApplyThreading,
) -> KeylineResult<()> {
    if !threading.parallel {
        for frame in frames.iter_mut() {
            let number = frame.number;
            effect.get_frame(frame, number)?;
        }
        return Ok(());
    }

    let pool = build_thread_pool(threading.threads)?;
    pool.install(|| {
        frames.par_iter_mut().try_for_each(|frame| {
            let number = frame.number;
            effect.get_frame(frame, number)
        })
    })
}

fn build_thread_pool(threads: Option<usize>) -> KeylineResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(KeylineError::validation(
            "apply threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| KeylineError::evaluation(format!("failed to build rayon thread pool: {e}")))
}
