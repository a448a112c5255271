use super::*;
use gf2ecdh_api::Error as ApiError;
use gf2ecdh_params::traditional::ecdh::{
    point_compressed_size, point_uncompressed_size, SECT163_FIELD_ELEMENT_SIZE,
    SECT163_SCALAR_SIZE, SECT283_FIELD_ELEMENT_SIZE, SECT283_SCALAR_SIZE,
};
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const KA: &str = "0123456789abcdef0123456789abcdef0123456789";
const KB: &str = "00f00dfeedfacecafebabedeadbeef0102030405aa";
const SHARED_X: &str = "07cbf2e07e824d595d1b84d06cfc5b266bad032ed5";

#[test]
fn test_sect163r2_basic_flow() {
    let ecdh = Ecdh::sect163r2().unwrap();
    let mut rng = OsRng;

    let (alice_pk, alice_sk) = ecdh.keypair(&mut rng).unwrap();
    let (bob_pk, bob_sk) = ecdh.keypair(&mut rng).unwrap();

    let ss_alice = ecdh.shared_secret(&alice_sk, &bob_pk).unwrap();
    let ss_bob = ecdh.shared_secret(&bob_sk, &alice_pk).unwrap();
    assert_eq!(ss_alice, ss_bob, "Shared secrets should match");
    assert!(bool::from(ss_alice.ct_eq(&ss_bob)));

    // Verify key and secret sizes
    assert_eq!(
        alice_pk.as_ref().len(),
        point_compressed_size(SECT163_FIELD_ELEMENT_SIZE)
    );
    assert_eq!(alice_sk.as_ref().len(), SECT163_SCALAR_SIZE);
    assert_eq!(ss_alice.len(), SECT163_FIELD_ELEMENT_SIZE);
}

#[test]
fn test_known_answer_exchange() {
    let ecdh = Ecdh::sect163r2().unwrap();
    let (alice_pk, alice_sk) = ecdh.keypair_from_bytes(&hex::decode(KA).unwrap()).unwrap();
    let (bob_pk, bob_sk) = ecdh.keypair_from_bytes(&hex::decode(KB).unwrap()).unwrap();

    // ỹ(A) = 0
    assert_eq!(
        alice_pk.as_ref(),
        &hex::decode("020206ce62e510339d57525e08e7f81a571759522435").unwrap()[..]
    );
    assert_eq!(alice_sk.as_ref(), &hex::decode(KA).unwrap()[..]);

    let ss1 = ecdh.shared_secret(&alice_sk, &bob_pk).unwrap();
    let ss2 = ecdh.shared_secret(&bob_sk, &alice_pk).unwrap();
    assert_eq!(ss1.as_ref(), &hex::decode(SHARED_X).unwrap()[..]);
    assert_eq!(ss1, ss2);
}

#[test]
fn test_uncompressed_and_mixed_formats() {
    let compressed = Ecdh::sect163r2().unwrap();
    let uncompressed = compressed
        .clone()
        .with_point_format(PointFormat::Uncompressed);
    assert_eq!(compressed.point_format(), PointFormat::Compressed);
    assert_eq!(uncompressed.point_format(), PointFormat::Uncompressed);

    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let (alice_pk, alice_sk) = uncompressed.keypair(&mut rng).unwrap();
    let (bob_pk, bob_sk) = compressed.keypair(&mut rng).unwrap();
    assert_eq!(
        alice_pk.as_ref().len(),
        point_uncompressed_size(SECT163_FIELD_ELEMENT_SIZE)
    );
    assert_eq!(alice_pk.as_ref()[0], 0x04);

    // decoding accepts either encoding
    let ss1 = compressed.shared_secret(&alice_sk, &bob_pk).unwrap();
    let ss2 = uncompressed.shared_secret(&bob_sk, &alice_pk).unwrap();
    assert_eq!(ss1, ss2);
}

#[test]
fn test_all_curves_agree() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    for ecdh in [
        Ecdh::sect163k1().unwrap(),
        Ecdh::sect163r2().unwrap(),
        Ecdh::sect283k1().unwrap(),
    ] {
        let (alice_pk, alice_sk) = ecdh.keypair(&mut rng).unwrap();
        let (bob_pk, bob_sk) = ecdh.keypair(&mut rng).unwrap();
        let ss1 = ecdh.shared_secret(&alice_sk, &bob_pk).unwrap();
        let ss2 = ecdh.shared_secret(&bob_sk, &alice_pk).unwrap();
        assert_eq!(ss1, ss2, "{}", ecdh.name());
        assert_eq!(ss1.len(), ecdh.curve().field_bytes());
    }
}

#[test]
fn test_sect283k1_sizes() {
    let ecdh = Ecdh::sect283k1().unwrap();
    assert_eq!(ecdh.name(), "sect283k1");
    let (pk, sk) = ecdh.keypair(&mut OsRng).unwrap();
    assert_eq!(pk.as_ref().len(), point_compressed_size(SECT283_FIELD_ELEMENT_SIZE));
    assert_eq!(sk.as_ref().len(), SECT283_SCALAR_SIZE);
}

#[test]
fn test_public_key_recomputed_from_secret() {
    let ecdh = Ecdh::sect163k1().unwrap();
    let (pk, sk) = ecdh.keypair(&mut OsRng).unwrap();
    assert_eq!(ecdh.public_key(&sk).unwrap(), pk);
}

#[test]
fn test_deterministic_keypair_with_seeded_rng() {
    let ecdh = Ecdh::sect163r2().unwrap();
    let (pk1, sk1) = ecdh.keypair(&mut ChaCha20Rng::seed_from_u64(99)).unwrap();
    let (pk2, sk2) = ecdh.keypair(&mut ChaCha20Rng::seed_from_u64(99)).unwrap();
    assert_eq!(pk1, pk2);
    assert_eq!(sk1, sk2);
}

#[test]
fn test_different_peers_give_different_secrets() {
    let ecdh = Ecdh::sect163r2().unwrap();
    let mut rng = OsRng;
    let (_, alice_sk) = ecdh.keypair(&mut rng).unwrap();
    let (bob_pk, _) = ecdh.keypair(&mut rng).unwrap();
    let (carol_pk, _) = ecdh.keypair(&mut rng).unwrap();

    let ss_bob = ecdh.shared_secret(&alice_sk, &bob_pk).unwrap();
    let ss_carol = ecdh.shared_secret(&alice_sk, &carol_pk).unwrap();
    assert_ne!(ss_bob, ss_carol);
}

#[test]
fn test_keypair_from_invalid_bytes() {
    let ecdh = Ecdh::sect163r2().unwrap();
    let err = ecdh.keypair_from_bytes(&[0u8; 21]).unwrap_err();
    assert!(matches!(err, ApiError::InvalidPrivateKey { .. }));
    assert_eq!(err.context(), "ECDH keypair");

    assert!(matches!(
        ecdh.keypair_from_bytes(&[0xFF; 21]),
        Err(ApiError::InvalidPrivateKey { .. })
    ));
    assert!(matches!(
        ecdh.keypair_from_bytes(&[0x01; 5]),
        Err(ApiError::InvalidLength { .. })
    ));
}

#[test]
fn test_invalid_peer_public_keys() {
    let ecdh = Ecdh::sect163r2().unwrap();
    let (pk, sk) = ecdh.keypair(&mut OsRng).unwrap();

    // point at infinity
    let identity = EcdhPublicKey::from_bytes(&[0x00]);
    let err = ecdh.shared_secret(&sk, &identity).unwrap_err();
    assert!(matches!(err, ApiError::InvalidPublicKey { .. }));
    assert_eq!(err.context(), "ECDH shared secret");

    // empty encoding
    assert!(matches!(
        ecdh.shared_secret(&sk, &EcdhPublicKey::from_bytes(&[])),
        Err(ApiError::InvalidPublicKey { .. })
    ));

    // truncated
    assert!(matches!(
        ecdh.shared_secret(&sk, &EcdhPublicKey::from_bytes(&pk.as_ref()[..10])),
        Err(ApiError::InvalidLength { .. })
    ));

    // off-curve uncompressed point
    let uncompressed = ecdh.clone().with_point_format(PointFormat::Uncompressed);
    let mut bytes = uncompressed.public_key(&sk).unwrap().to_bytes();
    bytes[21] ^= 0x01;
    assert!(matches!(
        ecdh.shared_secret(&sk, &EcdhPublicKey::from_bytes(&bytes)),
        Err(ApiError::InvalidPublicKey { .. })
    ));

    // order-2 point (0, sqrt(b))
    let mut t = vec![0x02];
    t.extend_from_slice(&[0u8; 21]);
    assert!(matches!(
        ecdh.shared_secret(&sk, &EcdhPublicKey::from_bytes(&t)),
        Err(ApiError::InvalidPublicKey { .. })
    ));
}

#[test]
fn test_invalid_secret_keys() {
    let ecdh = Ecdh::sect163r2().unwrap();
    let (pk, _) = ecdh.keypair(&mut OsRng).unwrap();

    assert!(matches!(
        ecdh.shared_secret(&EcdhSecretKey::from_bytes(&[0u8; 21]), &pk),
        Err(ApiError::InvalidPrivateKey { .. })
    ));
    let err = ecdh
        .shared_secret(&EcdhSecretKey::from_bytes(&[1u8; 20]), &pk)
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::InvalidLength {
            context: "ECDH secret key",
            expected: SECT163_SCALAR_SIZE,
            actual: 20,
        }
    );
    assert!(matches!(
        ecdh.public_key(&EcdhSecretKey::from_bytes(&[0xFF; 21])),
        Err(ApiError::InvalidPrivateKey { .. })
    ));
}

#[test]
fn test_full_validation_accepts_honest_keys() {
    let ecdh = Ecdh::sect163k1().unwrap().with_full_validation(true);
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let (alice_pk, alice_sk) = ecdh.keypair(&mut rng).unwrap();
    let (bob_pk, bob_sk) = ecdh.keypair(&mut rng).unwrap();
    assert_eq!(
        ecdh.shared_secret(&alice_sk, &bob_pk).unwrap(),
        ecdh.shared_secret(&bob_sk, &alice_pk).unwrap()
    );
}

#[test]
fn test_secret_types_redact_debug() {
    let ecdh = Ecdh::sect163r2().unwrap();
    let (pk, sk) = ecdh.keypair_from_bytes(&hex::decode(KA).unwrap()).unwrap();
    let (_, bob_sk) = ecdh.keypair_from_bytes(&hex::decode(KB).unwrap()).unwrap();
    let ss = ecdh.shared_secret(&bob_sk, &pk).unwrap();

    assert!(format!("{:?}", sk).contains("REDACTED"));
    assert!(format!("{:?}", ss).contains("REDACTED"));
    assert!(!format!("{:?}", ss).contains("07cbf2"));
}

#[cfg(feature = "serde")]
#[test]
fn test_public_key_serde() {
    let ecdh = Ecdh::sect163r2().unwrap();
    let (pk, _) = ecdh.keypair(&mut OsRng).unwrap();
    fn assert_serde<T: serde::Serialize + for<'de> serde::Deserialize<'de>>(_: &T) {}
    assert_serde(&pk);
}
