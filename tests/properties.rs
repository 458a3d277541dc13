use biguint::{BigUint, Limb, LIMB_BITS};
use num_bigint::BigUint as Reference;
use proptest::prelude::*;

fn to_reference(x: &BigUint) -> Reference {
    let mut out = Reference::default();
    for &limb in x.limbs().iter().rev() {
        out <<= LIMB_BITS;
        out += limb as u64;
    }
    out
}

fn arb_biguint() -> impl Strategy<Value = BigUint> {
    (prop::collection::vec(any::<Limb>(), 0..6), 0usize..6).prop_map(|(mut limbs, padding)| {
        limbs.extend(std::iter::repeat(0).take(padding));
        if limbs.is_empty() {
            limbs.push(0);
        }
        BigUint::from_limbs(limbs).unwrap()
    })
}

proptest! {
    #[test]
    fn test_eq_reflexive(x in arb_biguint()) {
        prop_assert!(x.eq(&x));
        prop_assert!(!x.neq(&x));
    }

    #[test]
    fn test_compare_matches_reference(a in arb_biguint(), b in arb_biguint()) {
        let (ra, rb) = (to_reference(&a), to_reference(&b));
        prop_assert_eq!(a.eq(&b), ra == rb);
        prop_assert_eq!(a.neq(&b), ra != rb);
        prop_assert_eq!(a.gt(&b), ra > rb);
        prop_assert_eq!(a.lt(&b), ra < rb);
        prop_assert_eq!(a.gt_eq(&b), ra >= rb);
        prop_assert_eq!(a.lt_eq(&b), ra <= rb);
        prop_assert_eq!(a.cmp(&b), ra.cmp(&rb));
    }

    #[test]
    fn test_add_matches_reference(a in arb_biguint(), b in arb_biguint()) {
        let expected = to_reference(&a) + to_reference(&b);
        let capacity = a.capacity();
        let mut sum = a;
        sum.add(&b);
        prop_assert_eq!(to_reference(&sum), expected);
        prop_assert!(sum.capacity() >= capacity);
    }

    #[test]
    fn test_add_commutative(a in arb_biguint(), b in arb_biguint()) {
        let mut ab = a.clone();
        ab.add(&b);
        let mut ba = b.clone();
        ba.add(&a);
        prop_assert!(ab.eq(&ba));
    }

    #[test]
    fn test_shl_matches_reference(x in arb_biguint(), n in 0usize..400) {
        let expected = to_reference(&x) << n;
        let mut shifted = x;
        shifted.shl(n);
        prop_assert_eq!(to_reference(&shifted), expected);
    }

    #[test]
    fn test_shr_matches_reference(x in arb_biguint(), n in 0usize..400) {
        let expected = to_reference(&x) >> n;
        let capacity = x.capacity();
        let mut shifted = x;
        shifted.shr(n);
        prop_assert_eq!(to_reference(&shifted), expected);
        prop_assert_eq!(shifted.capacity(), capacity);
    }

    #[test]
    fn test_shift_round_trip(x in arb_biguint(), n in 0usize..400) {
        let mut y = x.clone();
        y.shl(n);
        y.shr(n);
        prop_assert!(y.eq(&x));

        let mut z = x.clone();
        z.shr(n);
        z.shl(n);
        prop_assert!(z.lt_eq(&x));
    }

    #[test]
    fn test_single_bit_shifts_match_bulk(x in arb_biguint(), n in 0usize..200) {
        let mut bulk = x.clone();
        bulk.shl(n);
        let mut single = x;
        for _ in 0..n {
            single.shl(1);
        }
        prop_assert_eq!(bulk.limbs(), single.limbs());
    }
}
