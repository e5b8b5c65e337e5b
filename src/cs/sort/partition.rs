use std::cmp::Ordering;

use crate::error::{Error, Result};

/// Partitions `arr[lo..=hi]` around the pivot value `arr[lo]` and returns the pivot's final index `p`.
///
/// Afterwards every element in `arr[lo..p]` compares less than or equal to `arr[p]` and every element
/// in `arr[p + 1..=hi]` compares greater than or equal to it. Elements outside `[lo, hi]` are not touched.
///
/// Both scans stop on elements equal to the pivot, so a range full of duplicate keys is split near its
/// middle instead of degenerating into a one-sided partition.
///
/// Returns [`Error::InvalidRange`] unless `lo <= hi < arr.len()`.
pub fn partition_by<T, F>(arr: &mut [T], lo: usize, hi: usize, mut compare: F) -> Result<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if lo > hi || hi >= arr.len() {
        return Err(Error::InvalidRange {
            lo,
            hi,
            len: arr.len(),
        });
    }
    Ok(partition(arr, lo, hi, &mut |a: &T, b: &T| {
        compare(a, b) == Ordering::Less
    }))
}

/// Unchecked core of [`partition_by`]; callers guarantee `lo <= hi < arr.len()`.
pub(crate) fn partition<T, F>(arr: &mut [T], lo: usize, hi: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if lo == hi {
        return lo;
    }
    // The pivot stays at `lo` until the final swap: every swap below has `lo < i < j`.
    let mut i = lo;
    let mut j = hi + 1;
    loop {
        i += 1;
        while is_less(&arr[i], &arr[lo]) {
            if i == hi {
                break;
            }
            i += 1;
        }
        j -= 1;
        while is_less(&arr[lo], &arr[j]) {
            if j == lo {
                break;
            }
            j -= 1;
        }
        if i >= j {
            break;
        }
        arr.swap(i, j);
    }
    arr.swap(lo, j);
    j
}
