//! Single-Word Bit Operations
//!
//! The algorithms follow the classic branch-cheap forms from Hacker's
//! Delight (figures 3-1, 5-6, 5-14, 7-1 and section 2-7): OR-flooding,
//! width-halving binary search, parallel pairwise population count, and
//! swap-adjacent-groups reversal. Each is written once over
//! [`MachineWord`]; the per-width magic constants come from the trait
//! impls as data.

use crate::word::MachineWord;

/// Bit utilities over 32- and 64-bit machine words.
pub struct BitUtils;

impl BitUtils {
    /// Returns a word with only the most-significant set bit of `v`
    /// retained, or 0 if `v == 0`.
    ///
    /// Floods every position below the highest set bit by OR-shifting at
    /// doubling distances, then subtracts the flood shifted right by one
    /// to isolate the top bit.
    ///
    /// # Examples
    /// ```
    /// use infrastructure_bit_primitives::BitUtils;
    ///
    /// assert_eq!(BitUtils::highest_one_bit(0x0000_5000_i32), 0x0000_4000);
    /// assert_eq!(BitUtils::highest_one_bit(0_i64), 0);
    /// assert_eq!(BitUtils::highest_one_bit(-1_i32), i32::MIN);
    /// ```
    #[inline]
    pub fn highest_one_bit<W: MachineWord>(v: W) -> W {
        let mut flooded = v;
        let mut shift = 1;
        while shift < W::WIDTH {
            flooded = flooded | flooded.unsigned_shr(shift);
            shift <<= 1;
        }
        flooded.wrapping_sub(&flooded.unsigned_shr(1))
    }

    /// Returns a word with only the least-significant set bit of `v`
    /// retained, or 0 if `v == 0`.
    ///
    /// Two's-complement identity: the lowest set bit is the only bit `v`
    /// shares with its own negation.
    #[inline]
    pub fn lowest_one_bit<W: MachineWord>(v: W) -> W {
        v & v.wrapping_neg()
    }

    /// Counts the zero bits above the highest set bit of `v`; the full
    /// width if `v == 0`.
    ///
    /// Binary search by width-halving logical right shifts, so the loop
    /// runs log2(width) - 1 times regardless of value.
    ///
    /// # Examples
    /// ```
    /// use infrastructure_bit_primitives::BitUtils;
    ///
    /// assert_eq!(BitUtils::number_of_leading_zeros(1_i32), 31);
    /// assert_eq!(BitUtils::number_of_leading_zeros(0_i64), 64);
    /// assert_eq!(BitUtils::number_of_leading_zeros(-1_i64), 0);
    /// ```
    #[inline]
    pub fn number_of_leading_zeros<W: MachineWord>(v: W) -> u32 {
        if v == W::zero() {
            return W::WIDTH;
        }
        let mut n = 1;
        let mut i = v;
        let mut half = W::WIDTH / 2;
        while half >= 2 {
            if i.unsigned_shr(W::WIDTH - half) == W::zero() {
                n += half;
                i = i.unsigned_shl(half);
            }
            half /= 2;
        }
        n - i.unsigned_shr(W::WIDTH - 1).to_u32().unwrap_or(0)
    }

    /// Counts the zero bits below the lowest set bit of `v`; the full
    /// width if `v == 0`.
    ///
    /// The mirror of [`number_of_leading_zeros`](Self::number_of_leading_zeros):
    /// left shifts and zero tests at halving distances.
    #[inline]
    pub fn number_of_trailing_zeros<W: MachineWord>(v: W) -> u32 {
        if v == W::zero() {
            return W::WIDTH;
        }
        let mut n = W::WIDTH - 1;
        let mut i = v;
        let mut half = W::WIDTH / 2;
        while half >= 2 {
            let shifted = i.unsigned_shl(half);
            if shifted != W::zero() {
                n -= half;
                i = shifted;
            }
            half /= 2;
        }
        n - i
            .unsigned_shl(1)
            .unsigned_shr(W::WIDTH - 1)
            .to_u32()
            .unwrap_or(0)
    }

    /// Population count: the number of set bits in `v`.
    ///
    /// Parallel pairwise reduction: subtract the odd bits, sum two-bit
    /// groups, fold nibbles, then fold bytes upward. Constant operation
    /// count, no branches on the value.
    ///
    /// # Examples
    /// ```
    /// use infrastructure_bit_primitives::BitUtils;
    ///
    /// assert_eq!(BitUtils::bit_count(7_i32), 3);
    /// assert_eq!(BitUtils::bit_count(-1_i64), 64);
    /// ```
    #[inline]
    pub fn bit_count<W: MachineWord>(v: W) -> u32 {
        let mut c = v.wrapping_sub(&(v.unsigned_shr(1) & W::ODD_BITS));
        c = (c & W::ODD_PAIRS) + (c.unsigned_shr(2) & W::ODD_PAIRS);
        c = (c + c.unsigned_shr(4)) & W::ODD_NIBBLES;
        let mut shift = 8;
        while shift < W::WIDTH {
            c = c.wrapping_add(&c.unsigned_shr(shift));
            shift <<= 1;
        }
        (c & W::COUNT_MASK).to_u32().unwrap_or(0)
    }

    /// Rotates `v` left by `distance` bits.
    ///
    /// The distance is taken modulo the width through two's-complement
    /// masking, so `rotate_left(v, n) == rotate_left(v, n mod WIDTH)` and
    /// a negative distance rotates right by its magnitude.
    ///
    /// # Examples
    /// ```
    /// use infrastructure_bit_primitives::BitUtils;
    ///
    /// assert_eq!(BitUtils::rotate_left(1_i32, 1), 2);
    /// assert_eq!(BitUtils::rotate_left(1_i32, 33), 2);
    /// assert_eq!(BitUtils::rotate_left(2_i64, -1), 1);
    /// ```
    #[inline]
    pub fn rotate_left<W: MachineWord>(v: W, distance: i32) -> W {
        let n = (distance & (W::WIDTH as i32 - 1)) as u32;
        v.unsigned_shl(n) | v.unsigned_shr((W::WIDTH - n) & (W::WIDTH - 1))
    }

    /// Rotates `v` right by `distance` bits; the mirror of
    /// [`rotate_left`](Self::rotate_left).
    #[inline]
    pub fn rotate_right<W: MachineWord>(v: W, distance: i32) -> W {
        let n = (distance & (W::WIDTH as i32 - 1)) as u32;
        v.unsigned_shr(n) | v.unsigned_shl((W::WIDTH - n) & (W::WIDTH - 1))
    }

    /// Reverses the bit order of `v`.
    ///
    /// Swap-adjacent-groups passes at 1-, 2- and 4-bit granularity, then a
    /// byte-order reversal composed on top.
    #[inline]
    pub fn reverse<W: MachineWord>(v: W) -> W {
        let mut r = v;
        r = (r.unsigned_shr(1) & W::ODD_BITS) | (r & W::ODD_BITS).unsigned_shl(1);
        r = (r.unsigned_shr(2) & W::ODD_PAIRS) | (r & W::ODD_PAIRS).unsigned_shl(2);
        r = (r.unsigned_shr(4) & W::ODD_NIBBLES) | (r & W::ODD_NIBBLES).unsigned_shl(4);
        Self::reverse_bytes(r)
    }

    /// Reverses the byte order of `v`.
    ///
    /// The same group-swap technique stopped at byte granularity, driven
    /// by the per-width `(shift, mask)` stage table.
    #[inline]
    pub fn reverse_bytes<W: MachineWord>(v: W) -> W {
        let mut r = v;
        for &(shift, mask) in W::BYTE_SWAP_STAGES {
            r = (r.unsigned_shr(shift) & mask) | (r & mask).unsigned_shl(shift);
        }
        r
    }

    /// Sign function: −1, 0 or 1 for negative, zero or positive `v`.
    ///
    /// Branch-free: the arithmetic shift smears a negative sign across the
    /// word, the logical shift of the negation contributes the positive
    /// case, and zero survives both as zero.
    #[inline]
    pub fn signum<W: MachineWord>(v: W) -> i32 {
        (v.signed_shr(W::WIDTH - 1) | v.wrapping_neg().unsigned_shr(W::WIDTH - 1))
            .to_i32()
            .unwrap_or(0)
    }
}
