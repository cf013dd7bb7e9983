//! Clamped occupancy arithmetic.
//!
//! The count is a saturating counter: after every applied event it is clamped
//! to `[0, capacity]` (or `[0, +inf)` when the lot has no configured
//! capacity). Entries at a full lot and exits at an empty lot are still
//! recorded in the event log but do not move the count — downstream consumers
//! rely on the clamped value, so this must never be replaced with an
//! unclamped running sum.

/// Compute the next occupancy count from the current one and an event delta.
pub fn clamped_next(current: i64, delta: i64, capacity: Option<i64>) -> i64 {
    let next = current.saturating_add(delta).max(0);
    match capacity {
        Some(cap) => next.min(cap.max(0)),
        None => next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_increments() {
        assert_eq!(clamped_next(0, 1, Some(10)), 1);
    }

    #[test]
    fn exit_decrements() {
        assert_eq!(clamped_next(5, -1, Some(10)), 4);
    }

    #[test]
    fn entry_at_capacity_is_clamped() {
        assert_eq!(clamped_next(10, 1, Some(10)), 10);
    }

    #[test]
    fn exit_at_zero_is_clamped() {
        assert_eq!(clamped_next(0, -1, Some(10)), 0);
        assert_eq!(clamped_next(0, -1, None), 0);
    }

    #[test]
    fn unbounded_lot_keeps_counting() {
        assert_eq!(clamped_next(1_000_000, 1, None), 1_000_001);
    }

    #[test]
    fn entry_then_exit_round_trips() {
        let after_entry = clamped_next(3, 1, Some(10));
        assert_eq!(clamped_next(after_entry, -1, Some(10)), 3);
    }

    #[test]
    fn sequence_never_leaves_bounds() {
        let cap = 2;
        let deltas = [1, 1, 1, 1, -1, -1, -1, -1, 1, -1, 1, 1, 1];
        let mut count = 0;
        for d in deltas {
            count = clamped_next(count, d, Some(cap));
            assert!((0..=cap).contains(&count), "count {count} out of bounds");
        }
    }

    #[test]
    fn negative_capacity_is_treated_as_zero() {
        assert_eq!(clamped_next(0, 1, Some(-3)), 0);
    }

    #[test]
    fn overflow_saturates() {
        assert_eq!(clamped_next(i64::MAX, 1, None), i64::MAX);
    }
}
