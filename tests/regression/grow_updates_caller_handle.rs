// Growing during a shift must replace the storage seen through the caller's
// handle, so later operations on the same value see the larger capacity.

use biguint::{BigUint, LIMB_BITS};

fn shift_through(x: &mut BigUint, n: usize) {
    x.shl(n);
}

#[test]
fn test() {
    let mut x = BigUint::with_capacity(1);
    x.add(&BigUint::one());

    shift_through(&mut x, LIMB_BITS);
    assert_eq!(x.capacity(), 2);
    assert_eq!(x.limbs(), [0, 1]);

    // The grown storage is usable by the next operation.
    shift_through(&mut x, 2 * LIMB_BITS);
    assert_eq!(x.capacity(), 4);
    assert_eq!(x.limbs(), [0, 0, 0, 1]);

    x.shr(3 * LIMB_BITS);
    assert_eq!(x.limbs(), [1, 0, 0, 0]);
}
