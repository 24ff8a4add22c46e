use crate::Sorter;

const BITS: u32 = 8;
const RADIX: usize = 1 << BITS;
const MASK: u32 = (RADIX - 1) as u32;
const SIGN_BIT: u32 = 0x8000_0000;

/// LSD radix sort with 8-bit digits
/// O(n * k) for k significant bytes, uses O(n) extra space
pub struct RadixSort;

impl Sorter for RadixSort {
    fn sort(&self, data: &mut [i32]) {
        radix_sort(data);
    }
}

/// Unsigned key with the same ordering as the signed value.
#[inline]
fn key(value: i32) -> u32 {
    (value as u32) ^ SIGN_BIT
}

/// Number of byte passes needed to order every key in `data`.
///
/// Every key lies between the smallest and largest key, so all bytes above
/// the highest bit where those two differ are shared and need no pass.
fn passes_needed(data: &[i32]) -> u32 {
    let (min, max) = data.iter().fold((u32::MAX, u32::MIN), |(lo, hi), &v| {
        let k = key(v);
        (lo.min(k), hi.max(k))
    });
    let diff = min ^ max;
    if diff == 0 {
        return 0;
    }
    (u32::BITS - diff.leading_zeros()).div_ceil(BITS)
}

/// Sort `data` ascending using stable counting passes, one byte at a time.
pub fn radix_sort(data: &mut [i32]) {
    let len = data.len();
    if len <= 1 {
        return;
    }

    let passes = passes_needed(data);
    if passes == 0 {
        return;
    }

    let mut buffer = vec![0i32; len];
    let mut src: &mut [i32] = data;
    let mut dst: &mut [i32] = &mut buffer;
    let mut swapped = false;

    for pass in 0..passes {
        let shift = pass * BITS;
        let mut counts = [0usize; RADIX];

        for &value in src.iter() {
            counts[((key(value) >> shift) & MASK) as usize] += 1;
        }

        // One bucket holds everything: this byte is already in order
        if counts.contains(&len) {
            continue;
        }

        // Exclusive prefix sum
        let mut sum = 0;
        for count in counts.iter_mut() {
            let temp = *count;
            *count = sum;
            sum += temp;
        }

        // Forward scatter keeps equal digits in their current order
        for &value in src.iter() {
            let digit = ((key(value) >> shift) & MASK) as usize;
            dst[counts[digit]] = value;
            counts[digit] += 1;
        }

        std::mem::swap(&mut src, &mut dst);
        swapped = !swapped;
    }

    // Result sits in the scratch buffer; dst is the caller's slice again
    if swapped {
        dst.copy_from_slice(src);
    }
}
