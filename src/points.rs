//! In-memory point collection
//!
//! [`PointSet`] is the single authoritative container for the session's
//! points. It keeps insertion order, so new points are appended and the list
//! panel and chart draw in a stable order.

use crate::types::{Point, PointFormData, PointId};
use rand::Rng;

/// Prefix used for generated identifiers
const ID_PREFIX: &str = "point-";

/// Owned collection of points with unique identifiers
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: Vec<Point>,
    /// Next counter value tried by [`PointSet::allocate_id`]
    next_seq: u64,
}

impl PointSet {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection from existing points
    ///
    /// Later points with an identifier already present are dropped, so the
    /// uniqueness invariant holds from the start.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut set = Self::new();
        for point in points {
            if set.contains(&point.id) {
                tracing::warn!("Dropping point with duplicate id {}", point.id);
                continue;
            }
            set.points.push(point);
        }
        set.sync_next_seq();
        set
    }

    /// Generate `count` points uniformly sampled over `[0, max)`
    ///
    /// Identifiers are `point-0..point-{count-1}`, labels `Point 1..Point {count}`.
    /// A `max` that is not a positive finite number places every point at the
    /// origin.
    pub fn synthetic<R: Rng>(count: usize, max: f64, rng: &mut R) -> Self {
        let sample = max > 0.0 && max.is_finite();
        if !sample {
            tracing::warn!("Coordinate max {} is not usable, points start at the origin", max);
        }

        let points = (0..count).map(|i| {
            let (x, y) = if sample {
                (rng.random_range(0.0..max), rng.random_range(0.0..max))
            } else {
                (0.0, 0.0)
            };
            Point::new(format!("{ID_PREFIX}{i}"), x, y, format!("Point {}", i + 1))
        });
        Self::from_points(points)
    }

    /// Move the id counter past every generated-style identifier in use
    fn sync_next_seq(&mut self) {
        let max_seq = self
            .points
            .iter()
            .filter_map(|p| p.id.as_str().strip_prefix(ID_PREFIX))
            .filter_map(|seq| seq.parse::<u64>().ok())
            .max();
        if let Some(max_seq) = max_seq {
            self.next_seq = self.next_seq.max(max_seq.saturating_add(1));
        }
    }

    /// Allocate an identifier not used by any point in the collection
    pub fn allocate_id(&mut self) -> PointId {
        loop {
            let id = PointId::new(format!("{ID_PREFIX}{}", self.next_seq));
            self.next_seq += 1;
            if !self.contains(&id) {
                return id;
            }
        }
    }

    /// Append a new point built from form data, returning its identifier
    pub fn add(&mut self, data: PointFormData) -> PointId {
        let id = self.allocate_id();
        tracing::debug!("Adding point {} at ({}, {})", id, data.x, data.y);
        self.points.push(Point::from_form(id.clone(), data));
        id
    }

    /// Replace the coordinates and label of the point with `id`
    ///
    /// Returns `false` and leaves the collection untouched when no point has
    /// that identifier.
    pub fn edit(&mut self, id: &PointId, data: PointFormData) -> bool {
        match self.get_mut(id) {
            Some(point) => {
                tracing::debug!("Editing point {}", id);
                point.apply(data);
                true
            }
            None => {
                tracing::debug!("Edit ignored, no point with id {}", id);
                false
            }
        }
    }

    /// Remove the point with `id`
    ///
    /// Returns `false` when no point has that identifier.
    pub fn delete(&mut self, id: &PointId) -> bool {
        let len_before = self.points.len();
        self.points.retain(|p| &p.id != id);
        let removed = self.points.len() < len_before;
        if removed {
            tracing::debug!("Deleted point {}", id);
        } else {
            tracing::debug!("Delete ignored, no point with id {}", id);
        }
        removed
    }

    /// Find a point by identifier
    pub fn get(&self, id: &PointId) -> Option<&Point> {
        self.points.iter().find(|p| &p.id == id)
    }

    fn get_mut(&mut self, id: &PointId) -> Option<&mut Point> {
        self.points.iter_mut().find(|p| &p.id == id)
    }

    /// Check whether a point with `id` exists
    pub fn contains(&self, id: &PointId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn single() -> PointSet {
        PointSet::from_points([Point::new("a", 10.0, 20.0, "A")])
    }

    #[test]
    fn test_add_appends_with_fresh_id() {
        let mut set = single();
        let id = set.add(PointFormData::new(30.0, 40.0, "B"));

        assert_eq!(set.len(), 2);
        let added = &set.as_slice()[1];
        assert_eq!(added.id, id);
        assert_ne!(added.id, PointId::from("a"));
        assert_eq!((added.x, added.y, added.label.as_str()), (30.0, 40.0, "B"));
    }

    #[test]
    fn test_edit_existing() {
        let mut set = single();
        assert!(set.edit(&PointId::from("a"), PointFormData::new(99.0, 1.0, "Z")));

        assert_eq!(set.len(), 1);
        assert_eq!(set.as_slice()[0], Point::new("a", 99.0, 1.0, "Z"));
    }

    #[test]
    fn test_edit_missing_is_noop() {
        let mut set = single();
        assert!(!set.edit(&PointId::from("zzz"), PointFormData::new(1.0, 1.0, "Q")));
        assert_eq!(set.as_slice()[0], Point::new("a", 10.0, 20.0, "A"));
    }

    #[test]
    fn test_delete() {
        let mut set = single();
        assert!(set.delete(&PointId::from("a")));
        assert!(set.is_empty());
        assert!(!set.delete(&PointId::from("a")));
    }

    #[test]
    fn test_allocate_skips_existing_ids() {
        let mut set = PointSet::from_points([
            Point::new("point-0", 0.0, 0.0, ""),
            Point::new("point-4", 0.0, 0.0, ""),
        ]);
        assert_eq!(set.allocate_id(), PointId::from("point-5"));
        assert_eq!(set.allocate_id(), PointId::from("point-6"));
    }

    #[test]
    fn test_from_points_drops_duplicates() {
        let set = PointSet::from_points([
            Point::new("a", 1.0, 1.0, "first"),
            Point::new("a", 2.0, 2.0, "second"),
        ]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.as_slice()[0].label, "first");
    }

    #[test]
    fn test_synthetic_dataset() {
        let mut rng = StdRng::seed_from_u64(7);
        let set = PointSet::synthetic(20, 100.0, &mut rng);

        assert_eq!(set.len(), 20);
        assert_eq!(set.as_slice()[0].id, PointId::from("point-0"));
        assert_eq!(set.as_slice()[0].label, "Point 1");
        assert_eq!(set.as_slice()[19].label, "Point 20");
        for p in set.iter() {
            assert!((0.0..100.0).contains(&p.x));
            assert!((0.0..100.0).contains(&p.y));
        }
    }

    #[test]
    fn test_synthetic_then_add_continues_sequence() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut set = PointSet::synthetic(3, 10.0, &mut rng);
        assert_eq!(set.add(PointFormData::default()), PointId::from("point-3"));
    }

    #[test]
    fn test_synthetic_unusable_max_stays_at_origin() {
        let mut rng = StdRng::seed_from_u64(1);
        for max in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN, 0.0, -5.0] {
            let set = PointSet::synthetic(3, max, &mut rng);
            assert_eq!(set.len(), 3);
            assert!(set.iter().all(|p| p.x == 0.0 && p.y == 0.0), "max {}", max);
        }
    }
}
