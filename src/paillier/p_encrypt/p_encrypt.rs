use std::fmt;
use log::{trace, warn};
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand_core::{CryptoRng, OsRng, RngCore};
use zeroize::Zeroize;
use crate::config::PaillierConfig;
use crate::crypto_error::{CryptoError, Result};
use crate::paillier::ciphertext::Ciphertext;
use crate::paillier::math::gcd;
use crate::paillier::p_keygen::{zeroize_biguint, PublicKey};

// ============================================================================
// Randomiseur r ∈ Z*_n — tiré à neuf pour chaque chiffrement, jamais réutilisé
//
// Inutile au déchiffrement. Rendu à l'appelant pour audit uniquement
// (voir encrypt_with_randomizer), effacé à la destruction.
// ============================================================================
#[derive(Clone, PartialEq, Eq)]
pub struct Randomizer(BigUint);

impl Randomizer {
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

impl fmt::Debug for Randomizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Randomizer(..)")
    }
}

impl Zeroize for Randomizer {
    fn zeroize(&mut self) {
        zeroize_biguint(&mut self.0);
    }
}

impl Drop for Randomizer {
    fn drop(&mut self) {
        self.zeroize();
    }
}

// ---------------------------------------------------------------------------
// Chiffrement Paillier : c = g^m * r^n  mod n²
//
// r provient d'OsRng (entropie système). Retourne Err(InvalidInput) si
// m >= n, au lieu de crasher avec assert!.
// ---------------------------------------------------------------------------
pub fn encrypt(m: &BigUint, pk: &PublicKey) -> Result<(Ciphertext, Randomizer)> {
    encrypt_with_rng(m, pk, &PaillierConfig::default(), &mut OsRng)
}

/// Chiffrement avec une source d'aléa fournie par l'appelant.
///
/// La borne `CryptoRng` fait partie du contrat : un générateur non
/// cryptographique rendrait r prévisible et casserait la sécurité sémantique.
pub fn encrypt_with_rng<R>(
    m: &BigUint,
    pk: &PublicKey,
    config: &PaillierConfig,
    rng: &mut R,
) -> Result<(Ciphertext, Randomizer)>
where
    R: RngCore + CryptoRng,
{
    check_plaintext(m, pk)?;
    config.validate()?;

    let r = Randomizer(draw_randomizer(pk, config.max_randomizer_attempts, rng)?);
    let c = raw_encrypt(m, r.as_biguint(), pk);

    Ok((Ciphertext::new_unchecked(c), r))
}

/// Chiffrement déterministe avec un r imposé (audit d'un randomiseur rendu
/// par `encrypt`). r doit être dans [1, n) et premier avec n.
pub fn encrypt_with_randomizer(m: &BigUint, r: &BigUint, pk: &PublicKey) -> Result<Ciphertext> {
    check_plaintext(m, pk)?;

    if r >= pk.n() || !gcd(r, pk.n()).is_one() {
        return Err(CryptoError::InvalidInput(
            "le randomiseur doit être dans [1, n) et premier avec n".into(),
        ));
    }

    Ok(Ciphertext::new_unchecked(raw_encrypt(m, r, pk)))
}

fn check_plaintext(m: &BigUint, pk: &PublicKey) -> Result<()> {
    if m >= pk.n() {
        return Err(CryptoError::InvalidInput("le message doit être dans [0, n)".into()));
    }
    Ok(())
}

// Choisit r dans Z*_n : gcd(r, n) = 1, au plus `max_attempts` tirages.
// Pour n = p·q, un tirage échoue avec probabilité ~1/p + 1/q.
fn draw_randomizer<R>(pk: &PublicKey, max_attempts: u32, rng: &mut R) -> Result<BigUint>
where
    R: RngCore + CryptoRng,
{
    let one = BigUint::one();

    for attempt in 1..=max_attempts {
        let candidate = rng.gen_biguint_range(&one, pk.n());
        if gcd(&candidate, pk.n()).is_one() {
            return Ok(candidate);
        }
        trace!("randomiseur rejeté au tirage {attempt} : gcd(r, n) != 1");
    }

    warn!(
        "aucun randomiseur inversible après {max_attempts} tirages (|n| = {} bits), module suspect",
        pk.n().bits()
    );
    Err(CryptoError::ResourceExhausted { attempts: max_attempts })
}

// g^m et r^n réduits mod n² à chaque étape par modpow
fn raw_encrypt(m: &BigUint, r: &BigUint, pk: &PublicKey) -> BigUint {
    let g_m = pk.g().modpow(m, pk.n_squared());
    let r_n = r.modpow(pk.n(), pk.n_squared());
    (&g_m * &r_n) % pk.n_squared()
}
