use crate::Sorter;

/// Subranges at or below this length are finished with insertion sort.
const INSERTION_THRESHOLD: usize = 16;

/// Quicksort with median-of-three pivot, in place
pub struct QuickSort;

impl Sorter for QuickSort {
    fn sort(&self, data: &mut [i32]) {
        if data.len() <= 1 {
            return;
        }
        quicksort(data, 0, data.len() - 1);
    }
}

/// Sort the inclusive range `[low, high]` of `data` in ascending order.
///
/// A range with `low >= high` holds at most one element and is left alone.
/// Recursion only descends into the smaller partition; the larger one is
/// handled by the loop, so stack depth stays logarithmic.
pub fn quicksort(data: &mut [i32], mut low: usize, mut high: usize) {
    while low < high {
        if high - low < INSERTION_THRESHOLD {
            insertion_sort(&mut data[low..=high]);
            return;
        }

        let p = partition(data, low, high);
        if p - low < high - p {
            if p > low {
                quicksort(data, low, p - 1);
            }
            low = p + 1;
        } else {
            quicksort(data, p + 1, high);
            if p == low {
                return;
            }
            high = p - 1;
        }
    }
}

/// Lomuto partition of `[low, high]`; returns the pivot's final index.
#[inline]
fn partition(data: &mut [i32], low: usize, high: usize) -> usize {
    let mid = low + (high - low) / 2;

    // Median of three
    if data[low] > data[mid] {
        data.swap(low, mid);
    }
    if data[mid] > data[high] {
        data.swap(mid, high);
    }
    if data[low] > data[mid] {
        data.swap(low, mid);
    }

    data.swap(mid, high);
    let pivot = data[high];

    let mut i = low;
    for j in low..high {
        if data[j] <= pivot {
            data.swap(i, j);
            i += 1;
        }
    }
    data.swap(i, high);
    i
}

#[inline]
fn insertion_sort(data: &mut [i32]) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
    }
}
