//! The growable big integer type.

use alloc::vec;

use crate::error::{Error, Result};
use crate::lib::{mem, Vec};
use crate::limb::{Limb, DEFAULT_CAPACITY, LIMB_BITS};
use crate::math::{large, small, LimbVecType, Math};

/// An arbitrary-precision unsigned integer.
///
/// The value is stored as a sequence of [`Limb`]s in little-endian order:
/// limb 0 is the least significant. The number of stored limbs is the
/// integer's [capacity](BigUint::capacity). Every limb above the most
/// significant non-zero one is zero, so integers of different capacity
/// compare by value alone.
///
/// Shifts and additions mutate the integer in place and double its capacity
/// whenever the result needs more limbs than are stored. The capacity never
/// shrinks.
///
/// A `BigUint` has exactly one owner. [`Clone`] produces an independent deep
/// copy.
#[derive(Clone)]
pub struct BigUint {
    /// Internal storage for the integer, in little-endian order. The length
    /// of the vector is the capacity.
    limbs: LimbVecType,
}

impl BigUint {
    // CONSTRUCTORS

    /// Creates a zero-valued integer with [`DEFAULT_CAPACITY`] limbs.
    ///
    /// ```
    /// # use biguint::BigUint;
    /// let x = BigUint::new();
    /// assert!(x.is_zero());
    /// assert_eq!(x.capacity(), biguint::DEFAULT_CAPACITY);
    /// ```
    pub fn new() -> Self {
        BigUint {
            limbs: vec![0; DEFAULT_CAPACITY],
        }
    }

    /// Creates a zero-valued integer storing `capacity` limbs.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(x) => x,
            Err(err) => panic!("{}", err),
        }
    }

    /// Creates a zero-valued integer storing `capacity` limbs, or an error if
    /// `capacity` is zero.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::zero_capacity());
        }
        Ok(BigUint {
            limbs: vec![0; capacity],
        })
    }

    /// Creates an integer with [`DEFAULT_CAPACITY`] limbs holding a single
    /// native value in limb 0.
    pub fn from_native(value: Limb) -> Self {
        let mut x = Self::new();
        x.limbs[0] = value;
        x
    }

    /// Creates the integer 1 with [`DEFAULT_CAPACITY`] limbs.
    pub fn one() -> Self {
        Self::from_native(1)
    }

    /// Creates an integer from limbs in little-endian order. The capacity is
    /// the number of limbs given.
    ///
    /// ```
    /// # use biguint::BigUint;
    /// let x = BigUint::from_limbs(vec![0, 1]).unwrap();
    /// assert_eq!(x.capacity(), 2);
    /// assert_eq!(x.bit_length(), biguint::LIMB_BITS + 1);
    ///
    /// assert!(BigUint::from_limbs(Vec::new()).is_err());
    /// ```
    pub fn from_limbs(limbs: Vec<Limb>) -> Result<Self> {
        if limbs.is_empty() {
            return Err(Error::zero_capacity());
        }
        Ok(BigUint { limbs })
    }

    /// Creates an integer with [`DEFAULT_CAPACITY`] limbs holding a `u64`.
    pub fn from_u64(value: u64) -> Self {
        Self::from_u128(value as u128)
    }

    /// Creates an integer with [`DEFAULT_CAPACITY`] limbs holding a `u128`.
    pub fn from_u128(value: u128) -> Self {
        let mut x = Self::new();
        let mut rest = value;
        for xi in x.limbs.iter_mut() {
            if rest == 0 {
                break;
            }
            *xi = rest as Limb;
            rest >>= LIMB_BITS;
        }
        x
    }

    /// Releases the integer and all of its limb storage.
    ///
    /// Dropping the integer has the same effect; this method makes the
    /// release explicit at the call site. The integer is moved in, so it
    /// cannot be used afterward:
    ///
    /// ```compile_fail
    /// # use biguint::BigUint;
    /// let x = BigUint::one();
    /// x.destroy();
    /// assert!(!x.is_zero());
    /// ```
    pub fn destroy(self) {
        tracing::trace!(capacity = self.capacity(), "released big integer");
        mem::drop(self);
    }

    // PROPERTIES

    /// Number of stored limbs.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.limbs.len()
    }

    /// All stored limbs in little-endian order, including the zero limbs
    /// above the most significant one.
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Number of limbs up to and including the most significant non-zero
    /// limb. Zero for the value zero.
    pub fn significant_len(&self) -> usize {
        small::significant_len(&self.limbs)
    }

    /// Number of bits needed to represent the value. Zero for the value zero.
    pub fn bit_length(&self) -> usize {
        Math::bit_length(self)
    }

    /// Number of zero bits above the most significant one bit, counted over
    /// the full stored width (`capacity() * LIMB_BITS`).
    pub fn leading_zeros(&self) -> usize {
        small::leading_zeros(&self.limbs)
    }

    /// Returns true if every stored limb is zero.
    pub fn is_zero(&self) -> bool {
        Math::is_zero(self)
    }

    // COMPARISONS

    /// Returns true if both integers hold the same value, regardless of
    /// capacity.
    pub fn eq(&self, other: &BigUint) -> bool {
        Math::equal(self, other)
    }

    /// Returns true if the integers hold different values.
    pub fn neq(&self, other: &BigUint) -> bool {
        !self.eq(other)
    }

    /// Returns true if `self` holds a larger value than `other`.
    pub fn gt(&self, other: &BigUint) -> bool {
        large::greater(&self.limbs, &other.limbs)
    }

    /// Returns true if `self` holds a smaller value than `other`.
    pub fn lt(&self, other: &BigUint) -> bool {
        large::less(&self.limbs, &other.limbs)
    }

    /// Returns true if `self` holds a value larger than or equal to `other`.
    pub fn gt_eq(&self, other: &BigUint) -> bool {
        self.gt(other) || self.eq(other)
    }

    /// Returns true if `self` holds a value smaller than or equal to `other`.
    pub fn lt_eq(&self, other: &BigUint) -> bool {
        self.lt(other) || self.eq(other)
    }

    // ARITHMETIC

    /// Shifts the value left by `n` bits, multiplying it by `2^n`.
    ///
    /// No bits are lost: the capacity doubles as many times as needed to
    /// hold the result.
    pub fn shl(&mut self, n: usize) {
        self.ishl(n);
    }

    /// Shifts the value right by `n` bits, dividing it by `2^n` and
    /// discarding the remainder. The capacity is unchanged.
    pub fn shr(&mut self, n: usize) {
        self.ishr(n);
    }

    /// Adds `other` into `self`.
    ///
    /// The capacity of `self` doubles when the final carry has no limb to go
    /// into, or when `other` holds significant limbs beyond the capacity of
    /// `self`.
    pub fn add(&mut self, other: &BigUint) {
        self.iadd(other);
    }
}

impl Math for BigUint {
    #[inline]
    fn data(&self) -> &LimbVecType {
        &self.limbs
    }

    #[inline]
    fn data_mut(&mut self) -> &mut LimbVecType {
        &mut self.limbs
    }
}

impl Default for BigUint {
    fn default() -> Self {
        BigUint::new()
    }
}

impl From<Limb> for BigUint {
    fn from(value: Limb) -> Self {
        BigUint::from_native(value)
    }
}

macro_rules! try_from_biguint {
    ($($t:ty)*) => ($(
        impl TryFrom<&BigUint> for $t {
            type Error = Error;

            /// Converts the value into a native integer, failing when it needs
            /// more bits than the native type has.
            fn try_from(value: &BigUint) -> Result<Self> {
                let bits = value.bit_length();
                let target_bits = mem::size_of::<$t>() * 8;
                if bits > target_bits {
                    return Err(Error::out_of_range(bits, target_bits));
                }

                let mut out: $t = 0;
                for (i, &limb) in value.limbs[..value.significant_len()].iter().enumerate() {
                    out |= (limb as $t) << (i * LIMB_BITS);
                }
                Ok(out)
            }
        }
    )*)
}

try_from_biguint!(u64 u128);
