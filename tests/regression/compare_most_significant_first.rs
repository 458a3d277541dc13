// Ordering must be decided by the most significant differing limb. Scanning
// from limb 0 upward reports the wrong answer whenever the low limbs disagree
// with the high ones.

use biguint::BigUint;

#[test]
fn test() {
    let small = BigUint::from_limbs(vec![100, 1]).unwrap();
    let large = BigUint::from_limbs(vec![1, 2]).unwrap();

    assert!(small.lt(&large));
    assert!(large.gt(&small));
    assert!(!small.gt(&large));
    assert!(!large.lt(&small));
    assert!(small.lt_eq(&large));
    assert!(large.gt_eq(&small));
    assert!(small < large);
}
