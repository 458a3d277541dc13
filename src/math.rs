//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms assume little-endian order for the large integer
//! buffers, so for a `vec![0, 1, 2, 3]`, `3` is the most significant limb,
//! and `0` is the least significant limb.
//!
//! Unlike a normalized representation, the buffers here keep trailing zero
//! limbs: the buffer length is the integer's capacity. Every routine treats
//! a shorter buffer as if it were padded with zero limbs up to the length of
//! the longer one.

use crate::lib::{cmp, Vec};
use crate::limb::{Limb, LIMB_BITS};

// ALIASES
// -------

/// Storage for the limbs of a big integer.
pub(crate) type LimbVecType = Vec<Limb>;

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

pub(crate) mod scalar {
    use super::*;

    // ADDITION

    /// Add two limbs and an incoming carry, returning the wrapped sum and
    /// the outgoing carry.
    ///
    /// Overflow is decided before the addition, by comparing `x` against
    /// the headroom left above `y` (and the carry), never by inspecting a
    /// wrapped result.
    #[inline]
    pub fn add(x: Limb, y: Limb, carry: bool) -> (Limb, bool) {
        let headroom = Limb::MAX - y;
        let overflow = if carry { x >= headroom } else { x > headroom };
        let sum = x.wrapping_add(y).wrapping_add(Limb::from(carry));
        (sum, overflow)
    }

    /// AddAssign two limbs and an incoming carry, returning the outgoing carry.
    #[inline]
    pub fn iadd(x: &mut Limb, y: Limb, carry: bool) -> bool {
        let t = add(*x, y, carry);
        *x = t.0;
        t.1
    }
}

// SMALL
// -----

// Operations on a single big integer buffer.

pub(crate) mod small {
    use super::*;

    // PROPERTIES

    /// Check if every stored limb is zero.
    #[inline]
    pub fn is_zero(x: &[Limb]) -> bool {
        x.iter().all(|&xi| xi == 0)
    }

    /// Number of limbs up to and including the most significant non-zero limb.
    #[inline]
    pub fn significant_len(x: &[Limb]) -> usize {
        x.iter().rposition(|&xi| xi != 0).map_or(0, |i| i + 1)
    }

    /// Get number of leading zero bits in the storage.
    #[inline]
    pub fn leading_zeros(x: &[Limb]) -> usize {
        let len = significant_len(x);
        let unused = (x.len() - len) * LIMB_BITS;
        if len == 0 {
            unused
        } else {
            unused + x[len - 1].leading_zeros() as usize
        }
    }

    /// Calculate the bit-length of the big-integer.
    #[inline]
    pub fn bit_length(x: &[Limb]) -> usize {
        let len = significant_len(x);
        if len == 0 {
            0
        } else {
            len * LIMB_BITS - x[len - 1].leading_zeros() as usize
        }
    }

    // GROWTH

    /// Double the number of stored limbs, keeping the value.
    ///
    /// The existing limbs stay in the low half and the new high half is
    /// zero-filled. The buffer is replaced in place, so every handle to the
    /// integer observes the new storage.
    pub fn grow(x: &mut LimbVecType) {
        debug_assert!(!x.is_empty());
        let old_len = x.len();
        let new_len = match old_len.checked_mul(2) {
            Some(new_len) => new_len,
            None => panic!("capacity overflow"),
        };
        x.resize(new_len, 0);
        tracing::trace!(old_capacity = old_len, new_capacity = new_len, "grew big integer");
    }

    /// Double the number of stored limbs until at least `len` are stored.
    pub fn grow_to(x: &mut LimbVecType, len: usize) {
        while x.len() < len {
            grow(x);
        }
    }

    // SHL

    /// Shift-left bits inside a buffer.
    ///
    /// Assumes `n < LIMB_BITS` and that the most significant `n` bits of the
    /// buffer are zero, so nothing carries out of the top limb.
    #[inline]
    pub fn ishl_bits(x: &mut [Limb], n: usize) {
        debug_assert!(n < LIMB_BITS);
        if n == 0 {
            return;
        }

        // Internally, for each item, we shift left by n, and add the previous
        // right shifted limb-bits.
        // For example, we transform (for u8) shifted left 2, to:
        //      b10100100 b01000010
        //      b10 b10010001 b00001000
        let rshift = LIMB_BITS - n;
        let mut prev: Limb = 0;
        for xi in x.iter_mut() {
            let tmp = *xi;
            *xi = (tmp << n) | (prev >> rshift);
            prev = tmp;
        }
        debug_assert!(prev >> rshift == 0);
    }

    /// Shift-left `n` limbs inside a buffer.
    ///
    /// Assumes the buffer already has room for the shifted limbs.
    #[inline]
    pub fn ishl_limbs(x: &mut [Limb], n: usize) {
        let len = significant_len(x);
        if n == 0 || len == 0 {
            return;
        }
        debug_assert!(len + n <= x.len());
        x.copy_within(..len, n);
        x[..n].fill(0);
    }

    /// Shift-left buffer by n bits, growing it until the result fits.
    ///
    /// The result is the same value and capacity as shifting one bit at a
    /// time and doubling the buffer on every carry out of the top limb.
    pub fn ishl(x: &mut LimbVecType, n: usize) {
        let bit_length = bit_length(x);
        if n == 0 || bit_length == 0 {
            return;
        }

        let bits = match bit_length.checked_add(n) {
            Some(bits) => bits,
            None => panic!("capacity overflow"),
        };
        let limbs = match bits.checked_add(LIMB_BITS - 1) {
            Some(rounded) => rounded / LIMB_BITS,
            None => panic!("capacity overflow"),
        };
        grow_to(x, limbs);

        // Need to pad with zeros for the number of `bits / LIMB_BITS`,
        // and shift-left with carry for `bits % LIMB_BITS`.
        ishl_bits(x, n % LIMB_BITS);
        ishl_limbs(x, n / LIMB_BITS);
    }

    // SHR

    /// Shift-right bits inside a buffer, discarding bits shifted out of
    /// the least significant limb.
    ///
    /// Assumes `n < LIMB_BITS`.
    #[inline]
    pub fn ishr_bits(x: &mut [Limb], n: usize) {
        debug_assert!(n < LIMB_BITS);
        if n == 0 {
            return;
        }

        let lshift = LIMB_BITS - n;
        let mut prev: Limb = 0;
        for xi in x.iter_mut().rev() {
            let tmp = *xi;
            *xi = (tmp >> n) | (prev << lshift);
            prev = tmp;
        }
    }

    /// Shift-right `n` limbs inside a buffer, zero-filling the top.
    #[inline]
    pub fn ishr_limbs(x: &mut [Limb], n: usize) {
        let len = x.len();
        if n >= len {
            x.fill(0);
        } else if n != 0 {
            x.copy_within(n.., 0);
            x[len - n..].fill(0);
        }
    }

    /// Shift-right buffer by n bits. The buffer length never changes.
    pub fn ishr(x: &mut [Limb], n: usize) {
        ishr_limbs(x, n / LIMB_BITS);
        ishr_bits(x, n % LIMB_BITS);
    }
}

// LARGE
// -----

// Large-to-large operations, to modify a big integer from another.

pub(crate) mod large {
    use super::*;

    // RELATIVE OPERATORS

    /// Check if `x` and `y` hold the same value, in little-endian order.
    pub fn equal(x: &[Limb], y: &[Limb]) -> bool {
        let (short, long) = if x.len() <= y.len() { (x, y) } else { (y, x) };
        short.iter().zip(long.iter()).all(|(si, li)| si == li)
            && small::is_zero(&long[short.len()..])
    }

    /// Compare `x` to `y`, in little-endian order.
    ///
    /// The shorter buffer is treated as zero-extended, and the limbs are
    /// compared from the most significant down.
    pub fn compare(x: &[Limb], y: &[Limb]) -> cmp::Ordering {
        let overlap = x.len().min(y.len());
        if !small::is_zero(&x[overlap..]) {
            return cmp::Ordering::Greater;
        } else if !small::is_zero(&y[overlap..]) {
            return cmp::Ordering::Less;
        }

        let iter = x[..overlap].iter().rev().zip(y[..overlap].iter().rev());
        for (&xi, &yi) in iter {
            if xi > yi {
                return cmp::Ordering::Greater;
            } else if xi < yi {
                return cmp::Ordering::Less;
            }
        }
        cmp::Ordering::Equal
    }

    /// Check if x is less than y.
    #[inline]
    pub fn less(x: &[Limb], y: &[Limb]) -> bool {
        compare(x, y) == cmp::Ordering::Less
    }

    /// Check if x is greater than y.
    #[inline]
    pub fn greater(x: &[Limb], y: &[Limb]) -> bool {
        compare(x, y) == cmp::Ordering::Greater
    }

    // ADDITION

    /// AddAssign bigint to bigint.
    ///
    /// `x` grows when `y` holds significant limbs beyond `x`'s length, and
    /// when the final carry has no limb left to go into.
    pub fn iadd(x: &mut LimbVecType, y: &[Limb]) {
        let ylen = small::significant_len(y);
        small::grow_to(x, ylen);

        // Iteratively add elements from y to x.
        let mut carry = false;
        for (xi, &yi) in x.iter_mut().zip(y[..ylen].iter()) {
            carry = scalar::iadd(xi, yi, carry);
        }

        // Propagate the remaining carry through x's own limbs.
        let mut index = ylen;
        while carry && index < x.len() {
            carry = scalar::iadd(&mut x[index], 0, carry);
            index += 1;
        }

        // Overflowed the buffer entirely, store the carry in a fresh limb.
        if carry {
            let old_len = x.len();
            small::grow(x);
            x[old_len] = 1;
        }
    }
}

// TRAITS
// ------

/// Traits for shared operations for big integers.
///
/// None of these are implemented using normal traits, since these
/// are very expensive operations, and we want to deliberately
/// and explicitly use these functions.
pub(crate) trait Math {
    // DATA

    /// Get access to the underlying data
    fn data(&self) -> &LimbVecType;

    /// Get access to the underlying data
    fn data_mut(&mut self) -> &mut LimbVecType;

    // RELATIVE OPERATIONS

    /// Compare self to y.
    #[inline]
    fn compare(&self, y: &Self) -> cmp::Ordering {
        large::compare(self.data(), y.data())
    }

    /// Check if self and y hold the same value.
    #[inline]
    fn equal(&self, y: &Self) -> bool {
        large::equal(self.data(), y.data())
    }

    // PROPERTIES

    /// Check if the value is zero.
    #[inline]
    fn is_zero(&self) -> bool {
        small::is_zero(self.data())
    }

    /// Calculate the bit-length of the big-integer.
    #[inline]
    fn bit_length(&self) -> usize {
        small::bit_length(self.data())
    }

    // ADDITION

    /// AddAssign big integer.
    #[inline]
    fn iadd(&mut self, y: &Self) {
        large::iadd(self.data_mut(), y.data());
    }

    // SHIFTS

    /// Shift-left the entire buffer n bits.
    #[inline]
    fn ishl(&mut self, n: usize) {
        small::ishl(self.data_mut(), n);
    }

    /// Shift-right the entire buffer n bits.
    #[inline]
    fn ishr(&mut self, n: usize) {
        small::ishr(self.data_mut(), n);
    }
}

// TESTS
// -----
