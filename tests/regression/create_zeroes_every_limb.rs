// A freshly created integer must have every limb zeroed, including limbs past
// the first `capacity` bytes.

use biguint::{BigUint, DEFAULT_CAPACITY};

#[test]
fn test() {
    for x in [
        BigUint::new(),
        BigUint::one(),
        BigUint::from_native(7),
        BigUint::with_capacity(3 * DEFAULT_CAPACITY),
    ] {
        assert!(x.limbs()[1..].iter().all(|&limb| limb == 0));
        assert!(x.significant_len() <= 1);
    }
}
