use super::*;
use crate::animation::curve::InterpMode;
use serde_json::json;

fn sample_base() -> EffectBase {
    EffectBase {
        id: "FX42".to_string(),
        position: 1.5,
        layer: 3,
        start: 0.25,
        end: 9.75,
    }
}

#[test]
fn base_to_tree_includes_type_and_fields() {
    let tree = serde_json::Value::Object(sample_base().to_tree("Outline"));
    assert_eq!(tree["type"], "Outline");
    assert_eq!(tree["id"], "FX42");
    assert_eq!(tree["position"], 1.5);
    assert_eq!(tree["layer"], 3);
    assert_eq!(tree["start"], 0.25);
    assert_eq!(tree["end"], 9.75);
}

#[test]
fn base_apply_tree_overrides_only_present_fields() {
    let base = sample_base();
    let staged = base
        .apply_tree(&json!({ "position": 4.0, "layer": 7 }))
        .unwrap();
    assert_eq!(staged.position, 4.0);
    assert_eq!(staged.layer, 7);
    assert_eq!(staged.id, base.id);
    assert_eq!(staged.start, base.start);
    assert_eq!(staged.end, base.end);
}

#[test]
fn base_apply_tree_rejects_wrong_types() {
    let base = sample_base();
    assert!(matches!(
        base.apply_tree(&json!({ "id": 12 })),
        Err(KeylineError::InvalidFormat(_))
    ));
    assert!(matches!(
        base.apply_tree(&json!({ "position": "zero" })),
        Err(KeylineError::InvalidFormat(_))
    ));
    assert!(matches!(
        base.apply_tree(&json!({ "layer": 1.5 })),
        Err(KeylineError::InvalidFormat(_))
    ));
    assert!(matches!(
        base.apply_tree(&json!({ "layer": i64::from(i32::MAX) + 1 })),
        Err(KeylineError::InvalidFormat(_))
    ));
}

#[test]
fn factory_dispatches_on_type_field() {
    let outline = effect_from_tree(&json!({ "type": "Outline" })).unwrap();
    assert_eq!(outline.info().class_name, "Outline");
    let negate = effect_from_text(r#"{ "type": "Negate", "layer": 2 }"#).unwrap();
    assert_eq!(negate.info().class_name, "Negate");
    assert_eq!(negate.base().layer, 2);
}

#[test]
fn factory_rejects_unknown_and_missing_types() {
    assert!(matches!(
        effect_from_tree(&json!({ "type": "Sharpen" })),
        Err(KeylineError::InvalidFormat(_))
    ));
    assert!(matches!(
        effect_from_tree(&json!({ "layer": 1 })),
        Err(KeylineError::InvalidFormat(_))
    ));
}

#[test]
fn factory_rejects_non_object_roots() {
    assert!(matches!(
        effect_from_text("[1, 2, 3]"),
        Err(KeylineError::InvalidFormat(_))
    ));
    assert!(matches!(
        effect_from_text("not json at all"),
        Err(KeylineError::InvalidFormat(_))
    ));
}

#[test]
fn parse_curve_field_handles_absent_and_malformed_keys() {
    let tree = json!({
        "width": { "points": [{ "frame": 0, "value": 3.0 }], "mode": "Linear" },
    });
    let parsed = parse_curve_field(&tree, "width").unwrap().unwrap();
    assert_eq!(parsed.value(FrameIndex(10)), 3.0);
    assert_eq!(parsed.mode, InterpMode::Linear);

    assert!(parse_curve_field(&tree, "red").unwrap().is_none());

    let scalar = json!({ "width": 5.0 });
    assert!(matches!(
        parse_curve_field(&scalar, "width"),
        Err(KeylineError::InvalidFormat(_))
    ));

    let unsorted = json!({
        "width": {
            "points": [
                { "frame": 9, "value": 1.0 },
                { "frame": 2, "value": 4.0 },
            ],
            "mode": "Linear",
        },
    });
    assert!(matches!(
        parse_curve_field(&unsorted, "width"),
        Err(KeylineError::InvalidFormat(_))
    ));
}
