//! Integration tests for adding, editing and deleting points

mod common;

use common::builders::PointBuilder;
use proptest::prelude::*;
use scatter_editor::{Point, PointFormData, PointId, PointSet};
use std::collections::HashSet;

fn single_a() -> PointSet {
    PointSet::from_points([PointBuilder::new("a").at(10.0, 20.0).label("A").build()])
}

#[test]
fn test_add_appends_with_fresh_id() {
    let mut points = single_a();
    let id = points.add(PointFormData::new(30.0, 40.0, "B"));

    assert_eq!(points.len(), 2);
    assert_ne!(id, PointId::from("a"));

    let added = &points.as_slice()[1];
    assert_eq!(added.id, id);
    assert_eq!((added.x, added.y, added.label.as_str()), (30.0, 40.0, "B"));
}

#[test]
fn test_edit_keeps_id() {
    let mut points = single_a();
    assert!(points.edit(&PointId::from("a"), PointFormData::new(99.0, 1.0, "Z")));

    assert_eq!(points.as_slice(), &[Point::new("a", 99.0, 1.0, "Z")]);
}

#[test]
fn test_delete_last_point_empties_collection() {
    let mut points = single_a();
    assert!(points.delete(&PointId::from("a")));
    assert!(points.is_empty());
}

#[test]
fn test_unknown_id_is_noop() {
    let mut points = common::sample_points();
    let before = points.as_slice().to_vec();

    assert!(!points.edit(&PointId::from("missing"), PointFormData::new(1.0, 1.0, "X")));
    assert!(!points.delete(&PointId::from("missing")));

    assert_eq!(points.as_slice(), before.as_slice());
}

#[test]
fn test_generated_ids_skip_existing() {
    let mut points = PointSet::from_points([
        PointBuilder::new("point-0").build(),
        PointBuilder::new("point-1").build(),
    ]);

    let id = points.add(PointBuilder::new("unused").form_data());
    assert_eq!(id.as_str(), "point-2");
}

#[test]
fn test_ids_not_reused_after_delete() {
    let mut points = PointSet::new();
    let first = points.add(PointFormData::new(1.0, 1.0, "one"));
    points.delete(&first);
    let second = points.add(PointFormData::new(2.0, 2.0, "two"));

    assert_ne!(first, second);
}

#[derive(Debug, Clone)]
enum Op {
    Add(f64, f64),
    Edit(usize, f64),
    Delete(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-1000.0..1000.0f64, -1000.0..1000.0f64).prop_map(|(x, y)| Op::Add(x, y)),
        (0usize..32, -1000.0..1000.0f64).prop_map(|(i, x)| Op::Edit(i, x)),
        (0usize..32).prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn prop_ids_stay_unique(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut points = PointSet::new();
        let mut expected_len = 0usize;

        for op in ops {
            match op {
                Op::Add(x, y) => {
                    points.add(PointFormData::new(x, y, "p"));
                    expected_len += 1;
                }
                Op::Edit(i, x) => {
                    if let Some(id) = points.as_slice().get(i).map(|p| p.id.clone()) {
                        prop_assert!(points.edit(&id, PointFormData::new(x, x, "e")));
                        prop_assert_eq!(points.get(&id).map(|p| p.x), Some(x));
                    }
                }
                Op::Delete(i) => {
                    if let Some(id) = points.as_slice().get(i).map(|p| p.id.clone()) {
                        prop_assert!(points.delete(&id));
                        prop_assert!(!points.contains(&id));
                        expected_len -= 1;
                    }
                }
            }

            let ids: HashSet<_> = points.iter().map(|p| p.id.clone()).collect();
            prop_assert_eq!(ids.len(), points.len());
        }

        prop_assert_eq!(points.len(), expected_len);
    }

    #[test]
    fn prop_edit_leaves_others_untouched(idx in 0usize..3, x in -50.0..50.0f64) {
        let mut points = common::sample_points();
        let before = points.as_slice().to_vec();
        let id = before[idx].id.clone();

        points.edit(&id, PointFormData::new(x, x, "edited"));

        for (old, new) in before.iter().zip(points.iter()) {
            prop_assert_eq!(&old.id, &new.id);
            if old.id != id {
                prop_assert_eq!(old, new);
            }
        }
    }
}
