#![no_main]

use biguint::{BigUint, Limb};
use libfuzzer_sys::fuzz_target;

fn from_bytes(bytes: &[u8]) -> BigUint {
    let width = Limb::BITS as usize / 8;
    let mut limbs: Vec<Limb> = bytes
        .chunks(width)
        .map(|chunk| {
            chunk
                .iter()
                .rev()
                .fold(0, |acc, &byte| (acc << 8) | byte as Limb)
        })
        .collect();
    if limbs.is_empty() {
        limbs.push(0);
    }
    BigUint::from_limbs(limbs).unwrap()
}

fuzz_target!(|data: &[u8]| {
    let Some((&shift, rest)) = data.split_first() else {
        return;
    };
    let (left, right) = rest.split_at(rest.len() / 2);
    let a = from_bytes(left);
    let b = from_bytes(right);

    let mut ab = a.clone();
    ab.add(&b);
    let mut ba = b.clone();
    ba.add(&a);
    assert!(ab.eq(&ba));
    assert!(ab.gt_eq(&a) && ab.gt_eq(&b));

    let mut x = a.clone();
    x.shl(shift as usize);
    x.shr(shift as usize);
    assert!(x.eq(&a));
});
