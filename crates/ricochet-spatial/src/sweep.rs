use crate::Aabb;
use std::cmp::Ordering;

/// Sort-and-sweep broad phase along a single axis (0 = x, 1 = y).
///
/// Sorts box indices by minimum extent along the axis (stable, so ties keep
/// the original order), then sweeps in sorted order: each box scans forward
/// until the first box whose lower extent lies beyond its own upper extent,
/// at which point no later box can overlap it either.
///
/// The returned index pairs overlap on the swept axis only. That is a
/// necessary, not sufficient, condition for intersection; confirm each pair
/// with [`Aabb::intersects`] before treating it as a real candidate.
pub fn sweep_axis(boxes: &[Aabb], axis: usize) -> Vec<(usize, usize)> {
    let mut order: Vec<usize> = (0..boxes.len()).collect();
    order.sort_by(|&a, &b| {
        boxes[a]
            .min_along(axis)
            .partial_cmp(&boxes[b].min_along(axis))
            .unwrap_or(Ordering::Equal)
    });

    let mut pairs = Vec::new();
    for (i, &current) in order.iter().enumerate() {
        let current_max = boxes[current].max_along(axis);
        for &forward in &order[i + 1..] {
            if boxes[forward].min_along(axis) > current_max {
                break;
            }
            pairs.push((current, forward));
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn aabb(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Aabb {
        Aabb::new(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
    }

    #[test]
    fn test_disjoint_boxes_yield_no_pairs() {
        let boxes = [
            aabb(0.0, 1.0, 0.0, 1.0),
            aabb(5.0, 6.0, 0.0, 1.0),
            aabb(10.0, 11.0, 0.0, 1.0),
        ];
        assert!(sweep_axis(&boxes, 0).is_empty());
    }

    #[test]
    fn test_overlapping_intervals_are_reported() {
        let boxes = [
            aabb(0.0, 4.0, 0.0, 1.0),
            aabb(3.0, 7.0, 0.0, 1.0),
            aabb(6.0, 9.0, 0.0, 1.0),
        ];
        let pairs = sweep_axis(&boxes, 0);
        assert_eq!(pairs, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_axis_overlap_is_necessary_not_sufficient() {
        // Overlapping x intervals, far apart in y: still reported by the
        // sweep, rejected by the exact test.
        let boxes = [aabb(0.0, 4.0, 0.0, 1.0), aabb(2.0, 6.0, 50.0, 51.0)];
        let pairs = sweep_axis(&boxes, 0);
        assert_eq!(pairs, vec![(0, 1)]);
        assert!(!boxes[0].intersects(&boxes[1]));
    }

    #[test]
    fn test_candidates_are_a_superset_of_exact_overlaps() {
        let boxes = [
            aabb(0.0, 3.0, 0.0, 3.0),
            aabb(2.0, 5.0, 2.0, 5.0),
            aabb(2.5, 8.0, 10.0, 12.0),
            aabb(7.0, 9.0, 0.0, 4.0),
            aabb(20.0, 22.0, 0.0, 4.0),
        ];
        let candidates = sweep_axis(&boxes, 0);

        for i in 0..boxes.len() {
            for j in (i + 1)..boxes.len() {
                if boxes[i].intersects(&boxes[j]) {
                    let found = candidates
                        .iter()
                        .any(|&(a, b)| (a, b) == (i, j) || (a, b) == (j, i));
                    assert!(found, "missing true overlap ({i}, {j})");
                }
            }
        }
    }

    #[test]
    fn test_equal_extents_tie_break_by_original_order() {
        let boxes = [
            aabb(0.0, 2.0, 0.0, 1.0),
            aabb(0.0, 2.0, 0.0, 1.0),
            aabb(0.0, 2.0, 0.0, 1.0),
        ];
        let pairs = sweep_axis(&boxes, 0);
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_sweep_along_y_axis() {
        let boxes = [
            aabb(0.0, 1.0, 0.0, 4.0),
            aabb(100.0, 101.0, 3.0, 7.0),
            aabb(200.0, 201.0, 20.0, 21.0),
        ];
        let pairs = sweep_axis(&boxes, 1);
        assert_eq!(pairs, vec![(0, 1)]);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(sweep_axis(&[], 0).is_empty());
        assert!(sweep_axis(&[aabb(0.0, 1.0, 0.0, 1.0)], 0).is_empty());
    }
}
