use detset::{DetectedObject, DetectedObjectRef, DetectedObjectSet, DetectedObjectType, Selection};
use std::sync::Arc;

fn untyped(confidence: f64) -> DetectedObjectRef {
    DetectedObject::new(confidence).into_ref()
}

fn typed(confidence: f64, pairs: &[(&str, f64)]) -> DetectedObjectRef {
    let ty: DetectedObjectType = pairs.iter().copied().collect();
    DetectedObject::with_type(confidence, ty).into_ref()
}

fn confidences(objs: &[DetectedObjectRef]) -> Vec<f64> {
    objs.iter().map(|o| o.confidence()).collect()
}

#[test]
fn threshold_select_on_unsorted_input() {
    let set = DetectedObjectSet::new(vec![untyped(0.9), untyped(0.2), untyped(0.5)]);
    assert_eq!(confidences(set.as_slice()), vec![0.2, 0.5, 0.9]);

    let out = set.select(0.5);
    assert_eq!(confidences(&out), vec![0.5, 0.9]);
}

#[test]
fn empty_set_selects_nothing() {
    let set = DetectedObjectSet::new(Vec::new());
    assert_eq!(set.size(), 0);
    assert!(set.is_empty());
    assert!(set.select(0.0).is_empty());
    assert!(set.select_class("x", 0.0).is_empty());
}

#[test]
fn class_select_skips_untyped_and_low_scores() {
    let low = typed(0.7, &[("car", 0.3)]);
    let high = typed(0.4, &[("car", 0.8)]);
    let bare = untyped(0.99);
    let set = DetectedObjectSet::new(vec![low, high.clone(), bare]);

    let out = set.select_class("car", 0.5);
    assert_eq!(out.len(), 1);
    assert!(Arc::ptr_eq(&out[0], &high));
}

#[test]
fn unknown_category_yields_empty_result() {
    let set = DetectedObjectSet::new(vec![
        typed(0.1, &[("car", 0.9)]),
        typed(0.6, &[("person", 0.4), ("bike", 0.2)]),
    ]);
    assert!(set.select_class("nonexistent_category", 0.0).is_empty());
}

#[test]
fn class_select_keeps_confidence_order_on_equal_scores() {
    let a = typed(0.8, &[("car", 0.5)]);
    let b = typed(0.2, &[("car", 0.5)]);
    let c = typed(0.5, &[("car", 0.4)]);
    let set = DetectedObjectSet::new(vec![a.clone(), b.clone(), c.clone()]);

    let out = set.select_class("car", 0.0);
    assert_eq!(out.len(), 3);
    assert!(Arc::ptr_eq(&out[0], &c));
    assert!(Arc::ptr_eq(&out[1], &b));
    assert!(Arc::ptr_eq(&out[2], &a));
}

#[test]
fn construction_is_stable_for_equal_confidence() {
    let first = untyped(0.5);
    let second = untyped(0.5);
    let third = untyped(0.1);
    let set = DetectedObjectSet::new(vec![first.clone(), second.clone(), third.clone()]);

    let objs = set.as_slice();
    assert!(Arc::ptr_eq(&objs[0], &third));
    assert!(Arc::ptr_eq(&objs[1], &first));
    assert!(Arc::ptr_eq(&objs[2], &second));
}

#[test]
fn sets_share_detections_without_copying() {
    let shared = typed(0.6, &[("car", 0.7)]);
    let set_a = DetectedObjectSet::new(vec![shared.clone(), shared.clone()]);
    assert_eq!(set_a.size(), 2);

    let filtered = DetectedObjectSet::new(set_a.select(0.5));
    assert_eq!(filtered.size(), 2);
    for obj in &filtered {
        assert!(Arc::ptr_eq(obj, &shared));
    }
    // shared + two in set_a + two in filtered
    assert_eq!(Arc::strong_count(&shared), 5);
}

#[test]
fn nan_confidence_sorts_last_and_is_never_selected() {
    let set = DetectedObjectSet::new(vec![untyped(f64::NAN), untyped(0.3)]);
    assert_eq!(set.as_slice()[0].confidence(), 0.3);
    assert!(set.as_slice()[1].confidence().is_nan());
    assert_eq!(set.select(f64::NEG_INFINITY).len(), 1);
}

#[test]
fn selection_accessors() {
    let query = Selection::class("car", 0.25);
    assert_eq!(query.threshold(), 0.25);
    assert_eq!(query.class_name(), Some("car"));
    assert_eq!(Selection::confidence(0.1).class_name(), None);
}

#[test]
fn signed_zero_confidences_keep_input_order() {
    let pos = untyped(0.0);
    let neg = untyped(-0.0);
    let set = DetectedObjectSet::new(vec![pos.clone(), neg.clone()]);
    assert!(Arc::ptr_eq(&set.as_slice()[0], &pos));
    assert!(Arc::ptr_eq(&set.as_slice()[1], &neg));
}

#[test]
fn signed_zero_class_scores_keep_confidence_order() {
    let pos = typed(0.1, &[("car", 0.0)]);
    let neg = typed(0.2, &[("car", -0.0)]);
    let set = DetectedObjectSet::new(vec![pos.clone(), neg.clone()]);

    let out = set.select_class("car", -1.0);
    assert_eq!(out.len(), 2);
    assert!(Arc::ptr_eq(&out[0], &pos));
    assert!(Arc::ptr_eq(&out[1], &neg));
}

#[test]
fn repeated_selects_are_idempotent_and_read_only() {
    let set = DetectedObjectSet::new(vec![
        typed(0.9, &[("car", 0.2)]),
        untyped(0.4),
        typed(0.6, &[("car", 0.7)]),
    ]);
    let before: Vec<DetectedObjectRef> = set.as_slice().to_vec();

    let first = set.select(0.5);
    let second = set.select(0.5);
    assert_eq!(first.len(), second.len());
    assert!(first.iter().zip(&second).all(|(a, b)| Arc::ptr_eq(a, b)));

    let first = set.select_class("car", 0.1);
    let second = set.select_class("car", 0.1);
    assert_eq!(first.len(), 2);
    assert!(first.iter().zip(&second).all(|(a, b)| Arc::ptr_eq(a, b)));

    assert_eq!(before.len(), set.size());
    assert!(before
        .iter()
        .zip(set.as_slice())
        .all(|(a, b)| Arc::ptr_eq(a, b)));
}
