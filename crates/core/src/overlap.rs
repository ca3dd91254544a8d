//! Overlap engine - pure span-intersection functions
//!
//! Overlap is evaluated on the real-valued positions at the instant of the
//! lock command, not on grid-snapped values; fairness at the column
//! boundary depends on that precision. The result is truncated to whole
//! columns, and anything not strictly positive is a missed lock.

use crate::row::Row;

/// Number of whole columns shared by two rows' spans.
///
/// May be zero or negative when the spans do not intersect; both count as
/// a missed lock. Symmetric in its arguments.
pub fn compute_overlap(below: &Row, current: &Row) -> i32 {
    let left = below.position().max(current.position());
    let right = below.right().min(current.right());
    (right - left).floor() as i32
}

/// Narrow `current` to the overlapping columns against `below`.
///
/// Sets `current`'s position to the overlap's left edge and its width to
/// `overlap`. Callers must have verified the overlap is strictly positive;
/// the session intercepts a missed lock before ever narrowing a row.
pub fn apply_overlap(current: &mut Row, below: &Row, overlap: u8) {
    let left = below.position().max(current.position());
    current.set_span(left, overlap);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(width: u8, position: f32) -> Row {
        Row::new(width, position, 1, 1, 0.3).unwrap()
    }

    #[test]
    fn full_containment() {
        let below = row(7, 0.0);
        let current = row(3, 2.0);
        assert_eq!(compute_overlap(&below, &current), 3);
    }

    #[test]
    fn partial_overlap() {
        let below = row(3, 0.0);
        let current = row(3, 2.0);
        assert_eq!(compute_overlap(&below, &current), 1);
    }

    #[test]
    fn disjoint_spans_are_negative() {
        // Moving row fully past the right edge of a [0, 3) stack.
        let below = row(3, 0.0);
        let current = row(3, 7.0);
        assert_eq!(compute_overlap(&below, &current), -4);
    }

    #[test]
    fn touching_edges_is_zero() {
        let below = row(3, 0.0);
        let current = row(3, 3.0);
        assert_eq!(compute_overlap(&below, &current), 0);
    }

    #[test]
    fn fractional_sliver_truncates_to_zero() {
        let below = row(3, 0.0);
        let current = row(3, 2.5);
        assert_eq!(compute_overlap(&below, &current), 0);
    }

    #[test]
    fn fractional_positions_keep_whole_columns() {
        let below = row(5, 1.0);
        let current = row(4, 2.75);
        // Intersection [2.75, 6.0) = 3.25 columns -> 3 whole ones.
        assert_eq!(compute_overlap(&below, &current), 3);
    }

    #[test]
    fn symmetric_in_its_arguments() {
        let a = row(5, 1.25);
        let b = row(4, 3.5);
        assert_eq!(compute_overlap(&a, &b), compute_overlap(&b, &a));

        let c = row(2, 6.0);
        assert_eq!(compute_overlap(&a, &c), compute_overlap(&c, &a));
    }

    #[test]
    fn apply_narrows_to_the_left_edge() {
        let below = row(7, 0.0);
        let mut current = row(3, 2.0);
        let overlap = compute_overlap(&below, &current);
        apply_overlap(&mut current, &below, overlap as u8);
        assert_eq!(current.position(), 2.0);
        assert_eq!(current.width(), 3);
    }

    #[test]
    fn applied_span_is_contained_in_both_inputs() {
        let below = row(5, 1.0);
        let mut current = row(4, 2.75);
        let overlap = compute_overlap(&below, &current);
        assert!(overlap > 0);

        let (old_left, old_right) = (current.position(), current.right());
        apply_overlap(&mut current, &below, overlap as u8);

        assert_eq!(current.width() as i32, overlap);
        assert!(current.position() >= below.position());
        assert!(current.right() <= below.right() + 1e-6);
        assert!(current.position() >= old_left);
        assert!(current.right() <= old_right + 1e-6);
    }
}
