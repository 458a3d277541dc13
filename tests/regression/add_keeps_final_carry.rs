// A carry out of the most significant limb must grow the receiver instead of
// being dropped, even when the carry chain crosses several limb boundaries.

use biguint::{BigUint, Limb};

#[test]
fn test() {
    let mut a = BigUint::from_limbs(vec![Limb::MAX; 4]).unwrap();
    let b = BigUint::from_limbs(vec![1]).unwrap();
    a.add(&b);

    assert_eq!(a.capacity(), 8);
    assert_eq!(a.limbs(), [0, 0, 0, 0, 1, 0, 0, 0]);
    assert!(!a.is_zero());
}

#[test]
fn test_two_maximal_values() {
    let mut a = BigUint::from_limbs(vec![Limb::MAX, Limb::MAX]).unwrap();
    let b = a.clone();
    a.add(&b);

    assert_eq!(a.capacity(), 4);
    assert_eq!(a.limbs(), [Limb::MAX - 1, Limb::MAX, 1, 0]);
    assert!(a.gt(&b));
}
