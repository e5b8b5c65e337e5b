use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::Rng;

use super::partition::partition;
use crate::error::{Error, Result};

/// Returns the `k`-th smallest element of `arr` (0-indexed).
///
/// The slice is left in an unspecified, partially partitioned order. The result borrows from `arr`,
/// so the slice cannot be mutated again while the returned reference is alive.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if `k >= arr.len()`; `arr` is untouched in that case.
pub fn randomized_quickselect<T: Ord>(arr: &mut [T], k: usize) -> Result<&T> {
    randomized_quickselect_by(arr, k, T::cmp)
}

/// Like [`randomized_quickselect`], ranking elements by `compare`.
pub fn randomized_quickselect_by<T, F>(arr: &mut [T], k: usize, compare: F) -> Result<&T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    randomized_quickselect_with_rng(arr, k, &mut rand::thread_rng(), compare)
}

/// Like [`randomized_quickselect_by`], drawing the initial shuffle from `rng`.
///
/// Every call reshuffles, so two selections on the same slice need not leave it in the same order;
/// only the returned element is determined by `k`.
pub fn randomized_quickselect_with_rng<'a, T, F, R>(
    arr: &'a mut [T],
    k: usize,
    rng: &mut R,
    mut compare: F,
) -> Result<&'a T>
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    if k >= arr.len() {
        return Err(Error::OutOfRange { k, len: arr.len() });
    }
    log::debug!("randomized quickselect of rank {} over {} elements", k, arr.len());
    arr.shuffle(rng);

    let is_less = &mut |a: &T, b: &T| compare(a, b) == Ordering::Less;
    let mut lo = 0;
    let mut hi = arr.len() - 1;
    while hi > lo {
        let p = partition(arr, lo, hi, is_less);
        match p.cmp(&k) {
            Ordering::Greater => hi = p - 1,
            Ordering::Less => lo = p + 1,
            Ordering::Equal => return Ok(&arr[p]),
        }
        log::trace!("rank {} narrowed to [{}, {}]", k, lo, hi);
    }
    // The range has collapsed onto `k`.
    Ok(&arr[lo])
}
