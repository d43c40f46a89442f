use crate::animation::curve::Curve;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{KeylineError, KeylineResult};
use crate::frame::image::Frame;

/// Static metadata describing a concrete effect.
#[derive(Clone, Copy, Debug)]
pub struct EffectInfo {
    pub class_name: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub has_video: bool,
    pub has_audio: bool,
}

/// Placement fields shared by every effect on a timeline.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EffectBase {
    pub id: String,
    pub position: f64,
    pub layer: i32,
    pub start: f64,
    pub end: f64,
}

impl EffectBase {
    /// Seed a serialization tree with the type discriminator and the base
    /// fields. Effects insert their own parameters on top.
    pub fn to_tree(&self, class_name: &str) -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::new();
        map.insert("type".to_string(), class_name.into());
        map.insert("id".to_string(), self.id.clone().into());
        map.insert("position".to_string(), self.position.into());
        map.insert("layer".to_string(), self.layer.into());
        map.insert("start".to_string(), self.start.into());
        map.insert("end".to_string(), self.end.into());
        map
    }

    /// Apply any base fields present in `tree` to a copy of `self`, leaving
    /// `self` untouched. A wrong-typed field fails with `InvalidFormat`.
    pub fn apply_tree(&self, tree: &serde_json::Value) -> KeylineResult<Self> {
        let mut staged = self.clone();
        if let Some(v) = tree.get("id") {
            staged.id = v
                .as_str()
                .ok_or_else(|| KeylineError::invalid_format("effect field 'id' must be a string"))?
                .to_string();
        }
        if let Some(v) = tree.get("position") {
            staged.position = number_field(v, "position")?;
        }
        if let Some(v) = tree.get("layer") {
            let n = v.as_i64().ok_or_else(|| {
                KeylineError::invalid_format("effect field 'layer' must be an integer")
            })?;
            staged.layer = i32::try_from(n)
                .map_err(|_| KeylineError::invalid_format("effect field 'layer' is out of range"))?;
        }
        if let Some(v) = tree.get("start") {
            staged.start = number_field(v, "start")?;
        }
        if let Some(v) = tree.get("end") {
            staged.end = number_field(v, "end")?;
        }
        Ok(staged)
    }
}

fn number_field(v: &serde_json::Value, key: &str) -> KeylineResult<f64> {
    v.as_f64()
        .ok_or_else(|| KeylineError::invalid_format(format!("effect field '{key}' must be a number")))
}

/// One row of the per-frame introspection dump: the evaluated value of a
/// parameter plus its display metadata. `readonly` is carried through for
/// hosts; nothing in this crate assigns it a meaning.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PropertyDescriptor {
    pub name: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub min: f64,
    pub max: f64,
    pub animated: bool,
    pub readonly: bool,
}

impl PropertyDescriptor {
    pub(crate) fn float(name: &str, value: f64, min: f64, max: f64, animated: bool) -> Self {
        Self {
            name: name.to_string(),
            value,
            type_tag: "float".to_string(),
            min,
            max,
            animated,
            readonly: false,
        }
    }
}

/// A video effect: evaluates its animated parameters at a frame index and
/// rewrites a frame's pixel content in place.
///
/// [`Effect::get_frame`] must be a pure function of the stored parameters,
/// the frame index, and the input pixels, so distinct frames can be processed
/// concurrently. Parameter mutation ([`Effect::from_tree`]) needs external
/// synchronization against concurrent evaluation; the trait takes no locks.
pub trait Effect: Send + Sync {
    /// Static metadata (type name, description, media kinds touched).
    fn info(&self) -> EffectInfo;

    /// Shared placement fields.
    fn base(&self) -> &EffectBase;

    /// Mutable access to the shared placement fields.
    fn base_mut(&mut self) -> &mut EffectBase;

    /// Rewrite `frame`'s pixel content for `frame_index`. Dimensions and
    /// non-pixel attributes are left untouched; a frame whose buffer does not
    /// match its dimensions is rejected before any mutation.
    fn get_frame(&self, frame: &mut Frame, frame_index: FrameIndex) -> KeylineResult<()>;

    /// Serialize the effect: type discriminator, base fields, parameters.
    fn to_tree(&self) -> serde_json::Value;

    /// Apply the fields present in `tree`; absent fields keep their current
    /// value. A malformed present field fails with `InvalidFormat` and
    /// leaves the whole effect unchanged.
    fn from_tree(&mut self, tree: &serde_json::Value) -> KeylineResult<()>;

    /// Parse `text` as JSON and apply it via [`Effect::from_tree`].
    fn from_text(&mut self, text: &str) -> KeylineResult<()> {
        self.from_tree(&parse_tree(text)?)
    }

    /// Serialize to a JSON string.
    fn to_text(&self) -> String {
        self.to_tree().to_string()
    }

    /// Per-parameter descriptors evaluated at `frame_index`. A pure read with
    /// no side effects on the stored parameters.
    fn properties(&self, frame_index: FrameIndex) -> Vec<PropertyDescriptor>;
}

/// Construct an effect from a serialized tree, dispatching on its `type`
/// field.
pub fn effect_from_tree(tree: &serde_json::Value) -> KeylineResult<Box<dyn Effect>> {
    let kind = tree
        .get("type")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| KeylineError::invalid_format("effect json requires a string 'type' field"))?;
    let mut effect: Box<dyn Effect> = match kind {
        "Outline" => Box::new(crate::effects::outline::Outline::default()),
        "Negate" => Box::new(crate::effects::negate::Negate::default()),
        other => {
            return Err(KeylineError::invalid_format(format!(
                "unknown effect type '{other}'"
            )));
        }
    };
    effect.from_tree(tree)?;
    Ok(effect)
}

/// Construct an effect from serialized JSON text.
pub fn effect_from_text(text: &str) -> KeylineResult<Box<dyn Effect>> {
    effect_from_tree(&parse_tree(text)?)
}

fn parse_tree(text: &str) -> KeylineResult<serde_json::Value> {
    let tree: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| KeylineError::invalid_format(format!("parse effect json: {e}")))?;
    if !tree.is_object() {
        return Err(KeylineError::invalid_format(
            "effect json root must be an object",
        ));
    }
    Ok(tree)
}

/// Parse an optional curve field out of an effect tree. Absent keys are
/// `None`; present keys must deserialize and validate.
pub(crate) fn parse_curve_field(
    tree: &serde_json::Value,
    key: &str,
) -> KeylineResult<Option<Curve>> {
    let Some(node) = tree.get(key) else {
        return Ok(None);
    };
    let curve: Curve = serde_json::from_value(node.clone())
        .map_err(|e| KeylineError::invalid_format(format!("effect field '{key}': {e}")))?;
    curve
        .validate()
        .map_err(|e| KeylineError::invalid_format(format!("effect field '{key}': {e}")))?;
    Ok(Some(curve))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/base.rs"]
mod tests;
