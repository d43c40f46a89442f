use crate::animation::curve::Curve;
use crate::effects::base::{
    Effect, EffectBase, EffectInfo, PropertyDescriptor, parse_curve_field,
};
use crate::foundation::core::{FrameIndex, Rgba8};
use crate::foundation::error::{KeylineError, KeylineResult};
use crate::frame::image::Frame;
use crate::raster::blur::gaussian_blur_plane;
use crate::raster::edge::detect_edges;
use crate::raster::mask::{binarize_in_place, copy_masked, fill_masked, max_in_place};

// Hysteresis thresholds for tracing the boundary of the binarized mask.
const EDGE_LOW: i32 = 250;
const EDGE_HIGH: i32 = 255;

// Fixed blur that softens the traced contour before it rejoins the mask.
const CONTOUR_SOFTEN_SIGMA: f32 = 0.8;

/// Draws a colored halo around the opaque content of a frame.
///
/// The silhouette comes from the alpha channel alone. It is grown outward by
/// a blur whose radius follows the animated `width`, re-hardened to a binary
/// mask, and merged with a softened trace of its own boundary. Masked pixels
/// are painted with the outline color (alpha scaled by mask coverage), then
/// every pixel that was visible in the input is copied back on top, so the
/// original content always wins over the halo.
#[derive(Clone, Debug)]
pub struct Outline {
    pub base: EffectBase,
    /// Halo width in pixels, evaluated per frame and clamped to [0, 1000].
    pub width: Curve,
    pub red: Curve,
    pub green: Curve,
    pub blue: Curve,
    pub alpha: Curve,
}

impl Outline {
    pub fn new(width: Curve, red: Curve, green: Curve, blue: Curve, alpha: Curve) -> Self {
        Self {
            base: EffectBase::default(),
            width,
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl Default for Outline {
    fn default() -> Self {
        Self::new(
            Curve::constant(3.0),
            Curve::constant(0.0),
            Curve::constant(0.0),
            Curve::constant(0.0),
            Curve::constant(255.0),
        )
    }
}

fn channel_u8(curve: &Curve, frame_index: FrameIndex) -> u8 {
    curve.value(frame_index).clamp(0.0, 255.0).round() as u8
}

fn curve_tree(curve: &Curve) -> serde_json::Value {
    serde_json::to_value(curve).unwrap_or(serde_json::Value::Null)
}

impl Effect for Outline {
    fn info(&self) -> EffectInfo {
        EffectInfo {
            class_name: "Outline",
            name: "Outline",
            description: "Grow a colored silhouette outline around visible pixels",
            has_video: true,
            has_audio: false,
        }
    }

    fn base(&self) -> &EffectBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut EffectBase {
        &mut self.base
    }

    #[tracing::instrument(skip(self, frame), fields(frame = frame_index.0))]
    fn get_frame(&self, frame: &mut Frame, frame_index: FrameIndex) -> KeylineResult<()> {
        frame.image.validate()?;

        // The grow radius derives from width the same way at every frame:
        // one sigma per three pixels of width, truncated.
        let width = self.width.value(frame_index).clamp(0.0, 1000.0);
        let sigma = (width / 3.0).floor() as f32;
        let color = Rgba8::new(
            channel_u8(&self.red, frame_index),
            channel_u8(&self.green, frame_index),
            channel_u8(&self.blue, frame_index),
            channel_u8(&self.alpha, frame_index),
        );

        let w = frame.image.width;
        let h = frame.image.height;
        let silhouette = frame.image.alpha_plane();

        let mut mask = gaussian_blur_plane(&silhouette, w, h, sigma)?;
        binarize_in_place(&mut mask);
        let contour = detect_edges(&mask, w, h, EDGE_LOW, EDGE_HIGH)?;
        let soft = gaussian_blur_plane(&contour, w, h, CONTOUR_SOFTEN_SIGMA)?;
        max_in_place(&mut mask, &soft)?;

        let mut painted = vec![0u8; frame.image.data.len()];
        fill_masked(&mut painted, &mask, color)?;
        copy_masked(&mut painted, &frame.image.data, &silhouette)?;
        frame.image.data.copy_from_slice(&painted);
        Ok(())
    }

    fn to_tree(&self) -> serde_json::Value {
        let mut map = self.base.to_tree(self.info().class_name);
        map.insert("width".to_string(), curve_tree(&self.width));
        map.insert("red".to_string(), curve_tree(&self.red));
        map.insert("green".to_string(), curve_tree(&self.green));
        map.insert("blue".to_string(), curve_tree(&self.blue));
        map.insert("alpha".to_string(), curve_tree(&self.alpha));
        serde_json::Value::Object(map)
    }

    fn from_tree(&mut self, tree: &serde_json::Value) -> KeylineResult<()> {
        if !tree.is_object() {
            return Err(KeylineError::invalid_format(
                "effect json root must be an object",
            ));
        }

        // Stage every present field before touching `self` so a malformed
        // key leaves the effect exactly as it was.
        let base = self.base.apply_tree(tree)?;
        let width = parse_curve_field(tree, "width")?;
        let red = parse_curve_field(tree, "red")?;
        let green = parse_curve_field(tree, "green")?;
        let blue = parse_curve_field(tree, "blue")?;
        let alpha = parse_curve_field(tree, "alpha")?;

        self.base = base;
        if let Some(curve) = width {
            self.width = curve;
        }
        if let Some(curve) = red {
            self.red = curve;
        }
        if let Some(curve) = green {
            self.green = curve;
        }
        if let Some(curve) = blue {
            self.blue = curve;
        }
        if let Some(curve) = alpha {
            self.alpha = curve;
        }
        Ok(())
    }

    fn properties(&self, frame_index: FrameIndex) -> Vec<PropertyDescriptor> {
        let width = self.width.value(frame_index).clamp(0.0, 1000.0).round();
        vec![
            PropertyDescriptor::float("width", width, 0.0, 1000.0, self.width.is_animated()),
            PropertyDescriptor::float(
                "red",
                f64::from(channel_u8(&self.red, frame_index)),
                0.0,
                255.0,
                self.red.is_animated(),
            ),
            PropertyDescriptor::float(
                "green",
                f64::from(channel_u8(&self.green, frame_index)),
                0.0,
                255.0,
                self.green.is_animated(),
            ),
            PropertyDescriptor::float(
                "blue",
                f64::from(channel_u8(&self.blue, frame_index)),
                0.0,
                255.0,
                self.blue.is_animated(),
            ),
            PropertyDescriptor::float(
                "alpha",
                f64::from(channel_u8(&self.alpha, frame_index)),
                0.0,
                255.0,
                self.alpha.is_animated(),
            ),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/outline.rs"]
mod tests;
