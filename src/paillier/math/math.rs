use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{CheckedSub, One, Zero};
use crate::crypto_error::{CryptoError, Result};

// Fonction L(x) = (x-1)/n, division entière.
// Exacte quand x ≡ 1 (mod n). x = 0 (chiffré mal formé) donne 0 au lieu
// d'un dépassement négatif.
pub fn l_function(x: &BigUint, n: &BigUint) -> Result<BigUint> {
    if n.is_zero() {
        return Err(CryptoError::DivisionByZero);
    }
    Ok(x.checked_sub(&BigUint::one())
        .map(|x_minus_1| x_minus_1 / n)
        .unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Pgcd par l'algorithme d'Euclide, en boucle : la profondeur de pile ne
// dépend pas de la taille des opérandes. gcd(0, 0) = 0.
// ---------------------------------------------------------------------------
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let (mut x, mut y) = (a.clone(), b.clone());
    while !y.is_zero() {
        let rem = &x % &y;
        x = std::mem::replace(&mut y, rem);
    }
    x
}

// ---------------------------------------------------------------------------
// Ppcm : a*b / gcd(a,b). Err(DivisionByZero) uniquement pour a = b = 0.
// ---------------------------------------------------------------------------
pub fn lcm(a: &BigUint, b: &BigUint) -> Result<BigUint> {
    let g = gcd(a, b);
    if g.is_zero() {
        return Err(CryptoError::DivisionByZero);
    }
    Ok((a / &g) * b)
}

// ---------------------------------------------------------------------------
// Calcule l'inverse modulaire de a mod n, dans [0, n).
// Retourne Err(CryptoError::NoInverseExists) si gcd(a,n) != 1,
// Err(CryptoError::DivisionByZero) si n = 0.
// ---------------------------------------------------------------------------
pub fn mod_inverse(a: &BigUint, n: &BigUint) -> Result<BigUint> {
    if n.is_zero() {
        return Err(CryptoError::DivisionByZero);
    }

    let (g, x) = extended_gcd(a, n);
    if !g.is_one() {
        return Err(CryptoError::NoInverseExists);
    }

    let n_big = BigInt::from(n.clone());
    x.mod_floor(&n_big)
        .to_biguint()
        .ok_or(CryptoError::NoInverseExists)
}

// Euclide étendu itératif : retourne (gcd(a,b), s) avec a·s ≡ gcd (mod b).
// Le coefficient de b n'est pas nécessaire pour l'inverse.
fn extended_gcd(a: &BigUint, b: &BigUint) -> (BigInt, BigInt) {
    let (mut old_r, mut r) = (BigInt::from(a.clone()), BigInt::from(b.clone()));
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);

        let next_s = &old_s - &quotient * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    (old_r, old_s)
}
