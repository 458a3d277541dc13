//! Operator and comparison trait impls for `BigUint`.
//!
//! Every impl forwards to the named operation on [`BigUint`], so `a == b`,
//! `a < b`, `a += &b` and `a <<= n` carry exactly the same semantics as
//! `a.eq(&b)`, `a.lt(&b)`, `a.add(&b)` and `a.shl(n)`.

use crate::biguint::BigUint;
use crate::lib::cmp::Ordering;
use crate::lib::hash::{Hash, Hasher};
use crate::lib::ops::{Add, AddAssign, Shl, ShlAssign, Shr, ShrAssign};
use crate::math::Math;

// RELATIVE OPERATORS

impl PartialEq for BigUint {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Math::equal(self, other)
    }
}

impl Eq for BigUint {}

impl PartialOrd for BigUint {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Ord::cmp(self, other))
    }
}

impl Ord for BigUint {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        Math::compare(self, other)
    }
}

// Equal values of different capacity must hash the same, so only the
// significant limbs take part.
impl Hash for BigUint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.limbs()[..self.significant_len()].hash(state);
    }
}

// SHIFTS

impl ShlAssign<usize> for BigUint {
    #[inline]
    fn shl_assign(&mut self, n: usize) {
        Math::ishl(self, n);
    }
}

impl Shl<usize> for BigUint {
    type Output = BigUint;

    #[inline]
    fn shl(mut self, n: usize) -> BigUint {
        self <<= n;
        self
    }
}

impl ShrAssign<usize> for BigUint {
    #[inline]
    fn shr_assign(&mut self, n: usize) {
        Math::ishr(self, n);
    }
}

impl Shr<usize> for BigUint {
    type Output = BigUint;

    #[inline]
    fn shr(mut self, n: usize) -> BigUint {
        self >>= n;
        self
    }
}

// ADDITION

impl AddAssign<&BigUint> for BigUint {
    #[inline]
    fn add_assign(&mut self, other: &BigUint) {
        Math::iadd(self, other);
    }
}

impl AddAssign<BigUint> for BigUint {
    #[inline]
    fn add_assign(&mut self, other: BigUint) {
        *self += &other;
    }
}

impl Add<&BigUint> for BigUint {
    type Output = BigUint;

    #[inline]
    fn add(mut self, other: &BigUint) -> BigUint {
        self += other;
        self
    }
}

impl Add<BigUint> for BigUint {
    type Output = BigUint;

    #[inline]
    fn add(mut self, other: BigUint) -> BigUint {
        self += &other;
        self
    }
}

impl Add<&BigUint> for &BigUint {
    type Output = BigUint;

    /// Adds into a copy of `self`, keeping the capacity of `self`.
    #[inline]
    fn add(self, other: &BigUint) -> BigUint {
        let mut sum = self.clone();
        sum += other;
        sum
    }
}
