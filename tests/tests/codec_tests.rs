//! Byte codec and hashing checks across crate boundaries

use proptest::prelude::*;
use saber_algorithms::hash::{HashFunction, Sha3_256, Sha3_512};
use saber_algorithms::poly::serialize::{bs2pol, pol2bs};
use saber_algorithms::{ExtendableOutputFunction, ShakeXof128};
use saber_kem::saber::polyvec::{bs2polvec, polvec2bs};

#[test]
fn test_sha3_known_answers() {
    let h256 = Sha3_256::digest(b"").unwrap();
    assert_eq!(
        hex::encode(h256.as_ref()),
        "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
    );

    let h512 = Sha3_512::digest(b"abc").unwrap();
    assert_eq!(
        hex::encode(&h512.as_ref()[..16]),
        "b751850b1a57168a5693cd924b6b096e"
    );
}

#[test]
fn test_shake128_known_answer() {
    let out = ShakeXof128::generate(b"", 8).unwrap();
    assert_eq!(hex::encode(out), "7f9c2ba4e88f827d");
}

#[test]
fn test_public_key_layout_decodes() {
    use rand::SeedableRng;
    use saber_api::Kem;

    let mut rng = rand_chacha::ChaChaRng::seed_from_u64(42);
    let (pk, _) = saber_kem::Saber::keypair(&mut rng).unwrap();

    // seed_A followed by three 10-bit ring elements
    let b = bs2polvec(&pk.as_bytes()[32..], 3).unwrap();
    assert_eq!(b.len(), 3);
    assert!(b.polys().iter().all(|p| p.modulus() == 1024));
    assert_eq!(polvec2bs(&b, 1024).unwrap(), pk.as_bytes()[32..].to_vec());
}

proptest! {
    #[test]
    fn pol2bs_inverts_bs2pol(k in 1usize..=13, bytes in proptest::collection::vec(any::<u8>(), 32 * 13)) {
        let input = &bytes[..32 * k];
        let poly = bs2pol(input).unwrap();
        prop_assert_eq!(pol2bs(&poly, 1 << k).unwrap(), input.to_vec());
    }

    #[test]
    fn polvec2bs_inverts_bs2polvec(l in 2usize..=4, k in 1usize..=13, fill in any::<u8>()) {
        let input: Vec<u8> = (0..32 * k * l).map(|i| fill.wrapping_add(i as u8)).collect();
        let v = bs2polvec(&input, l).unwrap();
        prop_assert_eq!(polvec2bs(&v, 1 << k).unwrap(), input);
    }

    #[test]
    fn misaligned_lengths_rejected(extra in 1usize..32) {
        prop_assert!(bs2pol(&vec![0u8; 64 + extra]).is_err());
    }
}
