use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::Rng;

use super::partition::partition;

/// Sorts `arr` in non-descending order with a randomized quicksort.
///
/// The slice is shuffled once up front, so no fixed input order (sorted, reversed, organ-pipe) can
/// force the quadratic case. The sort is not stable.
pub fn randomized_quicksort<T: Ord>(arr: &mut [T]) {
    randomized_quicksort_by(arr, T::cmp);
}

/// Sorts `arr` with the comparison rule `compare`, shuffling with the thread-local RNG.
pub fn randomized_quicksort_by<T, F>(arr: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    randomized_quicksort_with_rng(arr, &mut rand::thread_rng(), compare);
}

/// Sorts `arr` with the comparison rule `compare`, drawing the initial shuffle from `rng`.
///
/// With a seeded `rng` the resulting arrangement of equal elements is reproducible.
pub fn randomized_quicksort_with_rng<T, F, R>(arr: &mut [T], rng: &mut R, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    log::debug!("randomized quicksort over {} elements", arr.len());
    if arr.len() <= 1 {
        return;
    }
    arr.shuffle(rng);
    quicksort(arr, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
    debug_assert!(is_sorted_by(arr, |a, b| compare(a, b)));
}

/// Recurses into the smaller side of each partition and loops on the larger one,
/// which keeps the stack depth logarithmic.
fn quicksort<T, F>(mut arr: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while arr.len() > 1 {
        let hi = arr.len() - 1;
        let p = partition(arr, 0, hi, is_less);
        let (left, rest) = arr.split_at_mut(p);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            quicksort(left, is_less);
            arr = right;
        } else {
            quicksort(right, is_less);
            arr = left;
        }
    }
}

/// Returns `true` when every adjacent pair of `arr` is in non-descending order under `compare`.
pub fn is_sorted_by<T, F>(arr: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    arr.windows(2)
        .all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}
