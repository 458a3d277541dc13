// Growth must copy whole limbs, not a byte count equal to the number of limbs,
// so every previously significant limb survives the doubling.

use biguint::{BigUint, Limb};

#[test]
fn test() {
    // The top limb has its high bit set, so shifting left by one must grow.
    let limbs: Vec<Limb> = (0..8).map(|i| Limb::MAX - i).collect();
    let mut x = BigUint::from_limbs(limbs.clone()).unwrap();
    x.shl(1);
    x.shr(1);

    assert_eq!(x.capacity(), 16);
    assert_eq!(&x.limbs()[..8], &limbs[..]);
    assert!(x.limbs()[8..].iter().all(|&limb| limb == 0));
}
