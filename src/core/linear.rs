//! Linear indices of composite collections.
//!
//! Every composite index has a linear index in `0..=count`, where `count` is the
//! linear index of end. Navigation converts to linear index, does integer arithmetic,
//! and converts back.

/// Linear index `distance` away from `linear`.
///
/// Panics if result is outside of `0..=count`.
#[track_caller]
pub fn offset(linear: usize, distance: isize, count: usize) -> usize {
    linear
        .checked_add_signed(distance)
        .filter(|&target| target <= count)
        .unwrap_or_else(|| {
            fail!(
                "Offset {} from {} is out of bounds 0..={}",
                distance,
                linear,
                count
            )
        })
}

/// Signed distance between linear indices.
pub fn distance(from: usize, to: usize) -> isize {
    super::precondition::signed(to) - super::precondition::signed(from)
}

/// Product of counts, zero if any is zero.
///
/// Panics on overflow.
#[track_caller]
pub fn product_count(counts: &[usize]) -> usize {
    if counts.contains(&0) {
        return 0;
    }
    counts.iter().try_fold(1usize, |acc, &count| acc.checked_mul(count)).unwrap_or_else(|| {
        fail!("Count of product of {:?} overflows usize", counts)
    })
}

/// Weights of mixed radix digits, last digit is the least significant.
///
/// Only meaningful if no count is zero.
pub fn strides<const N: usize>(counts: &[usize; N]) -> [usize; N] {
    let mut strides = [1usize; N];
    for k in (0..N.saturating_sub(1)).rev() {
        strides[k] = strides[k + 1].saturating_mul(counts[k + 1]);
    }
    strides
}

/// Mixed radix number of `digits`.
pub fn linearize<const N: usize>(digits: &[usize; N], strides: &[usize; N]) -> usize {
    digits
        .iter()
        .zip(strides)
        .map(|(digit, stride)| digit * stride)
        .sum()
}

/// Digits of mixed radix number `linear`.
///
/// Strides must be non zero.
pub fn delinearize<const N: usize>(mut linear: usize, strides: &[usize; N]) -> [usize; N] {
    let mut digits = [0; N];
    for (digit, &stride) in digits.iter_mut().zip(strides) {
        *digit = linear / stride;
        linear %= stride;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_in_bounds() {
        assert_eq!(offset(2, 3, 5), 5);
        assert_eq!(offset(2, -2, 5), 0);
        assert_eq!(offset(5, -5, 5), 0);
    }

    #[test]
    #[should_panic(expected = "Offset 4 from 2 is out of bounds 0..=5")]
    fn offset_past_end() {
        offset(2, 4, 5);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn offset_before_start() {
        offset(2, -3, 5);
    }

    #[test]
    fn counts() {
        assert_eq!(product_count(&[2, 3, 4]), 24);
        assert_eq!(product_count(&[2, 0, usize::MAX]), 0);
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn count_overflow() {
        product_count(&[usize::MAX, 2]);
    }

    #[test]
    fn stride_weights() {
        assert_eq!(strides(&[2, 3, 4]), [12, 4, 1]);
        assert_eq!(strides(&[7, 1]), [1, 1]);
    }

    #[test]
    fn mixed_radix_round_trip() {
        let counts = [3, 1, 4, 2];
        let strides = strides(&counts);
        for linear in 0..product_count(&counts) {
            let digits = delinearize(linear, &strides);
            for (digit, count) in digits.iter().zip(&counts) {
                assert!(digit < count);
            }
            assert_eq!(linearize(&digits, &strides), linear);
        }
    }

    #[test]
    fn last_digit_fastest() {
        let strides = strides(&[2, 3]);
        assert_eq!(delinearize(0, &strides), [0, 0]);
        assert_eq!(delinearize(1, &strides), [0, 1]);
        assert_eq!(delinearize(3, &strides), [1, 0]);
        assert_eq!(delinearize(5, &strides), [1, 2]);
    }
}
