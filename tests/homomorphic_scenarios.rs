// Scénarios de bout en bout sur l'API publique de la crate

use std::sync::Arc;
use std::thread;

use num_bigint::BigUint;
use num_traits::One;
use paillier_homomorphic::{
    add_encrypted, add_plain_to_encrypted, decrypt, encrypt, encrypt_with_randomizer,
    generate, generate_with_config, scalar_multiply, Ciphertext, CryptoError, KeyPair,
    LambdaForm, PaillierConfig,
};

fn big(v: u64) -> BigUint {
    BigUint::from(v)
}

fn mersenne_keypair() -> KeyPair {
    let p = (BigUint::one() << 89u32) - BigUint::one();
    let q = (BigUint::one() << 127u32) - BigUint::one();
    generate(&p, &q).unwrap()
}

#[test_log::test]
fn demo_scenario_17_19() {
    let kp = generate(&big(17), &big(19)).unwrap();
    let pk = kp.public_key();
    let sk = kp.private_key();

    assert_eq!(pk.n(), &big(323));
    assert_eq!(pk.g(), &big(324));
    assert_eq!(sk.lambda(), &big(144));

    let (c14, r14) = encrypt(&big(14), pk).unwrap();
    let (c44, _) = encrypt(&big(44), pk).unwrap();
    assert_eq!(decrypt(&c14, sk).unwrap(), big(14));
    assert_eq!(decrypt(&c44, sk).unwrap(), big(44));

    // le randomiseur rendu n'est pas requis pour déchiffrer, mais reproduit le chiffré
    assert_eq!(encrypt_with_randomizer(&big(14), r14.as_biguint(), pk).unwrap(), c14);

    assert_eq!(decrypt(&add_encrypted(&c14, &c44, pk), sk).unwrap(), big(58));
    assert_eq!(decrypt(&add_plain_to_encrypted(&c14, &big(44), pk), sk).unwrap(), big(58));
    assert_eq!(decrypt(&scalar_multiply(&c14, &big(10), pk), sk).unwrap(), big(140));
}

#[test]
fn encryption_is_probabilistic() {
    let kp = mersenne_keypair();
    let m = big(123_456_789);

    let (c1, r1) = encrypt(&m, kp.public_key()).unwrap();
    let (c2, r2) = encrypt(&m, kp.public_key()).unwrap();

    assert_ne!(c1, c2);
    assert_ne!(r1, r2);
    assert_eq!(decrypt(&c1, kp.private_key()).unwrap(), m);
    assert_eq!(decrypt(&c2, kp.private_key()).unwrap(), m);
}

#[test]
fn plaintext_boundaries_round_trip() {
    let kp = mersenne_keypair();
    let n_minus_1 = kp.public_key().n() - BigUint::one();

    for m in [big(0), n_minus_1] {
        let (c, _) = encrypt(&m, kp.public_key()).unwrap();
        assert_eq!(decrypt(&c, kp.private_key()).unwrap(), m);
    }

    let zero = Ciphertext::from_biguint(big(0), kp.public_key()).unwrap();
    assert_eq!(decrypt(&zero, kp.private_key()).unwrap(), big(0));

    let n = kp.public_key().n().clone();
    assert!(matches!(encrypt(&n, kp.public_key()), Err(CryptoError::InvalidInput(_))));
}

#[test]
fn equal_primes_fail() {
    let p = big(1_000_000_007);
    let err = generate(&p, &p).unwrap_err();
    assert!(matches!(err, CryptoError::InvalidInput(_) | CryptoError::NoInverseExists));
}

#[test]
fn lambda_forms_from_json_config_both_decrypt() {
    let (p, q) = (big(1_000_000_007), big(998_244_353));

    let totient = PaillierConfig::from_json_str(r#"{ "lambda_form": "totient" }"#).unwrap();
    let kp_totient = generate_with_config(&p, &q, &totient).unwrap();
    let kp_carmichael = generate(&p, &q).unwrap();

    // lcm(p-1, q-1) divise strictement (p-1)(q-1) car p-1 et q-1 sont pairs
    assert_eq!(totient.lambda_form, LambdaForm::Totient);
    assert!(kp_carmichael.private_key().lambda() < kp_totient.private_key().lambda());
    assert_eq!(kp_carmichael.public_key(), kp_totient.public_key());

    let m = big(987_654_321);
    let (c, _) = encrypt(&m, kp_carmichael.public_key()).unwrap();
    assert_eq!(decrypt(&c, kp_carmichael.private_key()).unwrap(), m);
    assert_eq!(decrypt(&c, kp_totient.private_key()).unwrap(), m);
}

#[test]
fn concurrent_encrypt_and_decrypt() {
    let kp = Arc::new(mersenne_keypair());

    let handles: Vec<_> = (0..8u64).map(|i| {
        let kp = Arc::clone(&kp);
        thread::spawn(move || {
            for j in 0..10u64 {
                let m = big(i * 1_000 + j);
                let (c, _) = encrypt(&m, kp.public_key()).unwrap();
                let doubled = add_encrypted(&c, &c, kp.public_key());
                assert_eq!(decrypt(&doubled, kp.private_key()).unwrap(), &m * 2u32);
            }
        })
    }).collect();

    for h in handles { h.join().unwrap(); }
}
