//! Limb type definition.
//
//  A limb is analogous to a digit in base10, except, it stores 32-bit
//  or 64-bit numbers instead. build.rs selects the width: 64-bit limbs on
//  targets with native 64-bit arithmetic, 32-bit limbs everywhere else or
//  when the `limb32` feature is enabled.

use crate::lib::mem;

// 32-BIT LIMB
/// A single digit of a [`BigUint`](crate::BigUint).
#[cfg(limb_width_32)]
pub type Limb = u32;

// 64-BIT LIMB
/// A single digit of a [`BigUint`](crate::BigUint).
#[cfg(limb_width_64)]
pub type Limb = u64;

/// Number of bits in a [`Limb`].
pub const LIMB_BITS: usize = mem::size_of::<Limb>() * 8;

/// Number of limbs allocated when no explicit capacity is requested.
pub const DEFAULT_CAPACITY: usize = 32;

// The carry and shift code assumes the limb has exactly LIMB_BITS value bits.
const _: () = assert!(Limb::BITS as usize == LIMB_BITS);
const _: () = assert!(LIMB_BITS == 32 || LIMB_BITS == 64);
