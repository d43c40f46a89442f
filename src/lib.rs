//! Keyline draws keyframe-animated, colored outlines around the opaque
//! silhouette of RGBA video frames.
//!
//! The per-frame pipeline:
//!
//! 1. **Evaluate**: sample the five parameter curves (width, red, green, blue,
//!    alpha) at the frame index
//! 2. **Mask**: grow the frame's alpha silhouette with a Gaussian blur,
//!    binarize it, and trace its contour into an anti-aliased edge map
//! 3. **Composite**: paint the outline color through the combined mask, then
//!    restore the original pixels on top wherever they had any opacity
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: per-frame evaluation is a pure function of
//!   the stored curves, the frame index, and the input frame, so distinct
//!   frames can be processed concurrently.
//! - **Straight (non-premultiplied) RGBA8** end-to-end: masks modulate alpha
//!   explicitly instead of relying on premultiplied compositing.
//!
//! Effects serialize their animated parameters to JSON and restore them
//! losslessly; see [`Effect::to_tree`] and [`Effect::from_tree`].
#![forbid(unsafe_code)]

mod animation;
mod effects;
mod foundation;
mod frame;
mod pipeline;
mod raster;

pub use animation::curve::{ControlPoint, Curve, InterpMode};
pub use effects::base::{
    Effect, EffectBase, EffectInfo, PropertyDescriptor, effect_from_text, effect_from_tree,
};
pub use effects::negate::Negate;
pub use effects::outline::Outline;
pub use foundation::core::{Fps, FrameIndex, Rgba8};
pub use foundation::error::{KeylineError, KeylineResult};
pub use frame::decode::{decode_image, encode_png, save_png};
pub use frame::image::{Frame, FrameImage};
pub use pipeline::{ApplyThreading, apply_effect_frames};
pub use raster::blur::gaussian_blur_plane;
pub use raster::edge::detect_edges;
pub use raster::mask::{binarize_in_place, copy_masked, fill_masked, max_in_place};
