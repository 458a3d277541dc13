//! # biguint
//!
//! A minimal arbitrary-precision unsigned integer.
//!
//! [`BigUint`] stores its value as a growable sequence of fixed-width
//! digits ("limbs"), least significant limb first. The number of stored
//! limbs is the value's *capacity*; limbs above the highest significant one
//! are always zero, so two integers of different capacity may still hold the
//! same value and compare equal.
//!
//! The supported operations are construction, comparison, left and right
//! shifts, and addition. Operations that would carry out of the most
//! significant stored limb double the capacity in place rather than drop the
//! carry.
//!
//! ```
//! use biguint::{BigUint, Limb, LIMB_BITS};
//!
//! let mut x = BigUint::from_native(Limb::MAX);
//! x.add(&BigUint::one());
//! assert_eq!(x.limbs()[0], 0);
//! assert_eq!(x.limbs()[1], 1);
//!
//! let mut y = BigUint::one();
//! y.shl(LIMB_BITS + 1);
//! assert_eq!(&y.limbs()[..2], &[0, 2]);
//!
//! assert!(y > x);
//! ```
//!
//! # Limb width
//!
//! The limb is 64 bits wide on targets with native 64-bit arithmetic and 32
//! bits wide elsewhere. Enabling the `limb32` feature forces 32-bit limbs on
//! every target.
//!
//! # No-std support
//!
//! As long as there is a memory allocator, it is possible to use this crate
//! without the rest of the Rust standard library. Disable the default "std"
//! feature and enable the "alloc" feature:
//!
//! ```toml
//! [dependencies]
//! biguint = { version = "0.1", default-features = false, features = ["alloc"] }
//! ```

#![doc(html_root_url = "https://docs.rs/biguint/0.1.0")]
// Ignored clippy lints
#![allow(clippy::len_without_is_empty, clippy::should_implement_trait)]
// Ignored clippy_pedantic lints
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]
#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error! {
    "biguint requires that either `std` (default) or `alloc` feature is enabled"
}

extern crate alloc;

/// Facade around the core features for name mangling.
pub(crate) mod lib {
    #[cfg(feature = "std")]
    pub(crate) use std::*;

    #[cfg(not(feature = "std"))]
    pub(crate) use core::*;

    pub(crate) use ::alloc::boxed::Box;
    pub(crate) use ::alloc::string::{String, ToString};
    pub(crate) use ::alloc::vec::Vec;
}

mod biguint;
pub mod error;
mod fmt;
mod limb;
mod math;
mod ops;

#[doc(inline)]
pub use crate::biguint::BigUint;
#[doc(inline)]
pub use crate::error::{Error, Result};
pub use crate::limb::{Limb, DEFAULT_CAPACITY, LIMB_BITS};
