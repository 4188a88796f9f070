//! Integer arithmetic behind the Python entry points.
//!
//! Both operations wrap on overflow, in debug and release builds alike.

/// Returns `i + j`, wrapping around at the bounds of `i32`.
#[inline]
pub fn add(i: i32, j: i32) -> i32 {
    i.wrapping_add(j)
}

/// Returns `i - j`, wrapping around at the bounds of `i32`.
#[inline]
pub fn subtract(i: i32, j: i32) -> i32 {
    i.wrapping_sub(j)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [i32; 9] = [i32::MIN, -65_536, -5, -1, 0, 1, 3, 1_000_000, i32::MAX];

    #[test]
    fn test_scenarios() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(subtract(5, 3), 2);
        assert_eq!(add(-1, 1), 0);
        assert_eq!(subtract(0, 5), -5);
    }

    #[test]
    fn test_matches_native_arithmetic_in_range() {
        for &i in &[-1_000, -7, 0, 12, 40_000] {
            for &j in &[-300, -1, 0, 9, 123_456] {
                assert_eq!(add(i, j), i + j);
                assert_eq!(subtract(i, j), i - j);
            }
        }
    }

    #[test]
    fn test_add_commutes() {
        for &i in &SAMPLES {
            for &j in &SAMPLES {
                assert_eq!(add(i, j), add(j, i), "add({i}, {j})");
            }
        }
    }

    #[test]
    fn test_zero_is_identity() {
        for &i in &SAMPLES {
            assert_eq!(add(i, 0), i);
            assert_eq!(subtract(i, 0), i);
        }
    }

    #[test]
    fn test_subtract_undoes_add() {
        for &i in &SAMPLES {
            for &j in &SAMPLES {
                assert_eq!(subtract(add(i, j), j), i, "i = {i}, j = {j}");
            }
        }
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(add(2_147_483_647, 1), -2_147_483_648);
        assert_eq!(add(i32::MIN, -1), i32::MAX);
        assert_eq!(subtract(i32::MIN, 1), i32::MAX);
        assert_eq!(subtract(i32::MAX, -1), i32::MIN);
    }
}
