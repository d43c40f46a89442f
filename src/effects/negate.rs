use crate::effects::base::{Effect, EffectBase, EffectInfo, PropertyDescriptor};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{KeylineError, KeylineResult};
use crate::frame::image::Frame;

/// Inverts the color channels of every pixel, leaving alpha untouched.
#[derive(Clone, Debug, Default)]
pub struct Negate {
    pub base: EffectBase,
}

impl Effect for Negate {
    fn info(&self) -> EffectInfo {
        EffectInfo {
            class_name: "Negate",
            name: "Negate",
            description: "Invert red, green and blue, keeping alpha",
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

    fn get_frame(&self, frame: &mut Frame, _frame_index: FrameIndex) -> KeylineResult<()> {
        frame.image.validate()?;
        for px in frame.image.data.chunks_exact_mut(4) {
            px[0] = 255 - px[0];
            px[1] = 255 - px[1];
            px[2] = 255 - px[2];
        }
        Ok(())
    }

    fn to_tree(&self) -> serde_json::Value {
        serde_json::Value::Object(self.base.to_tree(self.info().class_name))
    }

    fn from_tree(&mut self, tree: &serde_json::Value) -> KeylineResult<()> {
        if !tree.is_object() {
            return Err(KeylineError::invalid_format(
                "effect json root must be an object",
            ));
        }
        self.base = self.base.apply_tree(tree)?;
        Ok(())
    }

    fn properties(&self, _frame_index: FrameIndex) -> Vec<PropertyDescriptor> {
        Vec::new()
    }
}
