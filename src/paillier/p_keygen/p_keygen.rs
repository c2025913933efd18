use std::fmt;
use log::debug;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use zeroize::Zeroize;
use crate::config::{LambdaForm, PaillierConfig};
use crate::crypto_error::{CryptoError, Result};
use crate::paillier::math::{lcm, mod_inverse};

// ============================================================================
// Clé publique Paillier — pas de données secrètes, pas de zeroize nécessaire
// ============================================================================
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    n:         BigUint,
    g:         BigUint,
    n_squared: BigUint,
}

impl PublicKey {
    /// Reconstruit une clé publique (n, g = n+1) à partir du module seul,
    /// par exemple pour chiffrer au profit d'un tiers.
    pub fn from_modulus(n: BigUint) -> Result<Self> {
        if n <= BigUint::one() {
            return Err(CryptoError::InvalidInput("le module n doit être > 1".into()));
        }
        let g         = &n + BigUint::one();
        let n_squared = &n * &n;
        Ok(PublicKey { n, g, n_squared })
    }

    pub fn n(&self) -> &BigUint {
        &self.n
    }

    pub fn g(&self) -> &BigUint {
        &self.g
    }

    pub fn n_squared(&self) -> &BigUint {
        &self.n_squared
    }
}

// ============================================================================
// Helper : écrase les chiffres internes d'un BigUint avant de le remettre à 0
//
// assign_from_slice réécrit le même tampon (même nombre de chiffres), la
// normalisation tronque ensuite la longueur sans réallouer.
// ============================================================================
pub(crate) fn zeroize_biguint(value: &mut BigUint) {
    let digits = value.to_u32_digits().len();
    if digits > 0 {
        value.assign_from_slice(&vec![0u32; digits]);
    }
    value.set_zero();
}

// ============================================================================
// Clé privée Paillier — ZEROISÉE À LA DESTRUCTION
//
// Quiconque la détient peut déchiffrer : elle n'est jamais journalisée et
// son Debug n'affiche que la taille du module.
// ============================================================================
#[derive(Clone)]
pub struct PrivateKey {
    lambda:    BigUint,
    mu:        BigUint,
    n:         BigUint,
    n_squared: BigUint,
}

impl PrivateKey {
    pub fn lambda(&self) -> &BigUint {
        &self.lambda
    }

    pub fn mu(&self) -> &BigUint {
        &self.mu
    }

    pub fn n(&self) -> &BigUint {
        &self.n
    }

    pub fn n_squared(&self) -> &BigUint {
        &self.n_squared
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("n_bits", &self.n.bits())
            .finish_non_exhaustive()
    }
}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        zeroize_biguint(&mut self.lambda);
        zeroize_biguint(&mut self.mu);
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

// ============================================================================
// Paire de clés — construite d'un bloc par generate(), immuable ensuite
// ============================================================================
#[derive(Clone, Debug)]
pub struct KeyPair {
    public_key:  PublicKey,
    private_key: PrivateKey,
}

impl KeyPair {
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn into_parts(self) -> (PublicKey, PrivateKey) {
        (self.public_key, self.private_key)
    }
}

// ============================================================================
// Génération de clés Paillier à partir de deux premiers fournis par l'appelant
//
// La primalité de p et q n'est PAS vérifiée ici.
//
//   n      = p·q
//   lambda = lcm(p-1, q-1)          (LambdaForm::Carmichael, défaut)
//          | (p-1)(q-1)             (LambdaForm::Totient)
//   g      = n + 1
//   mu     = lambda^-1 mod n
//
// Avec g = n+1 : (n+1)^lambda mod n² = 1 + lambda·n, donc
// L(g^lambda mod n²) = lambda mod n et mu se réduit à l'inverse de lambda.
// ============================================================================
pub fn generate(p: &BigUint, q: &BigUint) -> Result<KeyPair> {
    generate_with_config(p, q, &PaillierConfig::default())
}

pub fn generate_with_config(p: &BigUint, q: &BigUint, config: &PaillierConfig) -> Result<KeyPair> {
    config.validate()?;

    let two = BigUint::from(2u32);
    if p < &two || q < &two {
        return Err(CryptoError::InvalidInput("p et q doivent être des premiers >= 2".into()));
    }
    // p == q : n = p², lambda partage le facteur p avec n, le schéma dégénère
    if p == q {
        return Err(CryptoError::InvalidInput("p et q doivent être distincts".into()));
    }

    let n         = p * q;
    let n_squared = &n * &n;

    let p_minus_1 = p - BigUint::one();
    let q_minus_1 = q - BigUint::one();

    let lambda = match config.lambda_form {
        LambdaForm::Carmichael => lcm(&p_minus_1, &q_minus_1)?,
        LambdaForm::Totient    => &p_minus_1 * &q_minus_1,
    };

    let g = &n + BigUint::one();

    // Err(NoInverseExists) si gcd(lambda, n) != 1 : choix de premiers dégénéré
    let mu = mod_inverse(&lambda, &n)?;

    debug!(
        "paire de clés Paillier générée : |n| = {} bits, lambda {:?}",
        n.bits(),
        config.lambda_form
    );

    Ok(KeyPair {
        public_key:  PublicKey { n: n.clone(), g, n_squared: n_squared.clone() },
        private_key: PrivateKey { lambda, mu, n, n_squared },
    })
}
