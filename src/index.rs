/// Maps any integer onto `[0, count)`, wrapping in both directions.
///
/// `count` must be non-zero.
pub fn wrap_index(index: i64, count: usize) -> usize {
    debug_assert!(count > 0, "wrap_index called with an empty sequence");
    index.rem_euclid(count as i64) as usize
}

/// Cursor position after moving `delta` steps from `current` in a ring of `count` slides.
pub fn resolve_index(current: usize, delta: i64, count: usize) -> usize {
    wrap_index((current as i64).saturating_add(delta), count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn in_range_index_is_unchanged() {
        assert_eq!(wrap_index(0, 3), 0);
        assert_eq!(wrap_index(2, 3), 2);
    }

    #[test]
    fn wraps_forward_and_backward() {
        assert_eq!(wrap_index(3, 3), 0);
        assert_eq!(wrap_index(-1, 3), 2);
        assert_eq!(wrap_index(7, 3), 1);
        assert_eq!(wrap_index(-7, 3), 2);
    }

    #[test]
    fn resolve_steps_around_the_ring() {
        assert_eq!(resolve_index(2, 1, 3), 0);
        assert_eq!(resolve_index(0, -1, 3), 2);
        assert_eq!(resolve_index(1, 0, 3), 1);
    }

    #[test]
    fn single_slide_always_resolves_to_zero() {
        assert_eq!(resolve_index(0, 1, 1), 0);
        assert_eq!(resolve_index(0, -1, 1), 0);
        assert_eq!(wrap_index(i64::MIN, 1), 0);
    }

    proptest! {
        #[test]
        fn wrap_matches_modular_formula(index in any::<i64>(), count in 1usize..64) {
            let n = count as i128;
            let expected = (((index as i128 % n) + n) % n) as usize;
            prop_assert_eq!(wrap_index(index, count), expected);
        }

        #[test]
        fn resolve_stays_in_range(current in 0usize..64, delta in -1000i64..1000, count in 1usize..64) {
            let current = current % count;
            prop_assert!(resolve_index(current, delta, count) < count);
        }
    }
}
