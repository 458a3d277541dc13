//! Formatting for `BigUint`.
//!
//! Only power-of-two radixes are supported; each limb maps onto a fixed
//! number of digits so no arithmetic is needed.

use crate::biguint::BigUint;
use crate::lib::fmt::{self, Binary, Debug, LowerHex, UpperHex, Write};
use crate::lib::String;
use crate::limb::LIMB_BITS;

impl Debug for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BigUint")
            .field("capacity", &self.capacity())
            .field("limbs", &&self.limbs()[..self.significant_len()])
            .finish()
    }
}

/// Write the limbs most significant first: the top limb unpadded, every
/// lower limb padded to its full width in digits.
fn write_radix<F>(x: &BigUint, digits_per_limb: usize, mut write_limb: F) -> String
where
    F: FnMut(&mut String, crate::Limb, usize) -> fmt::Result,
{
    let limbs = &x.limbs()[..x.significant_len()];
    let mut buf = String::with_capacity(limbs.len().max(1) * digits_per_limb);
    match limbs.split_last() {
        None => buf.push('0'),
        Some((&top, rest)) => {
            // Writing into a String cannot fail.
            let _ = write_limb(&mut buf, top, 0);
            for &limb in rest.iter().rev() {
                let _ = write_limb(&mut buf, limb, digits_per_limb);
            }
        }
    }
    buf
}

impl LowerHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let buf = write_radix(self, LIMB_BITS / 4, |buf, limb, width| {
            write!(buf, "{:01$x}", limb, width)
        });
        f.pad_integral(true, "0x", &buf)
    }
}

impl UpperHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let buf = write_radix(self, LIMB_BITS / 4, |buf, limb, width| {
            write!(buf, "{:01$X}", limb, width)
        });
        f.pad_integral(true, "0x", &buf)
    }
}

impl Binary for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let buf = write_radix(self, LIMB_BITS, |buf, limb, width| {
            write!(buf, "{:01$b}", limb, width)
        });
        f.pad_integral(true, "0b", &buf)
    }
}
