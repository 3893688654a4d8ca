//! Modular arithmetic over the alphabet power
//!
//! Every reduction inside the cipher engine goes through [`true_mod`], so
//! intermediate values may be negative but results always land in `[0, m)`.

use num::Integer;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("no modular inverse exists")]
    NoInverse,
    #[error("matrix is singular modulo the alphabet power")]
    Singular,
}

/// Reduce `x` to the unique representative of its class in `[0, m)`
///
/// Unlike `%`, negative inputs never produce negative results.
///
/// `m` must be positive
pub fn true_mod(x: i64, m: i64) -> i64 {
    x.mod_floor(&m)
}

/// Greatest common divisor, always non-negative
pub fn gcd(a: i64, b: i64) -> i64 {
    a.gcd(&b)
}

pub fn are_coprime(a: i64, b: i64) -> bool {
    gcd(a, b) == 1
}

/// Find `x` in `[1, m)` with `a * x = 1 (mod m)`
///
/// Uses the extended Euclidean algorithm, so the cost is logarithmic in `m`.
///
/// errors: returns Error::NoInverse when `a` and `m` are not coprime, and for `m == 1`
pub fn mod_inverse(a: i64, m: i64) -> Result<i64, Error> {
    let a = true_mod(a, m);
    let egcd = a.extended_gcd(&m);
    if egcd.gcd != 1 {
        return Err(Error::NoInverse);
    }

    let x = true_mod(egcd.x, m);
    // [1, 1) is empty, the only way to land on zero here
    if x == 0 {
        return Err(Error::NoInverse);
    }

    Ok(x)
}

/// 2x2 integer matrix, row-major
///
/// ```text
/// | k11 k12 |
/// | k21 k22 |
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Matrix2(pub [[i64; 2]; 2]);

impl Matrix2 {
    /// Build a matrix from four entries in row-major order
    pub fn from_row_major(entries: [i64; 4]) -> Self {
        Self([[entries[0], entries[1]], [entries[2], entries[3]]])
    }

    /// Unreduced determinant `k11*k22 - k12*k21`
    pub fn det(&self) -> i64 {
        let [[k11, k12], [k21, k22]] = self.0;
        k11 * k22 - k12 * k21
    }

    /// Determinant reduced into `[0, m)`
    pub fn det_mod(&self, m: i64) -> i64 {
        true_mod(self.det(), m)
    }

    /// Invert the matrix modulo `m`
    ///
    /// errors: returns Error::Singular for a zero determinant (mod m),
    /// Error::NoInverse when the determinant shares a factor with `m`
    pub fn invert_mod(&self, m: i64) -> Result<Self, Error> {
        let d = self.det_mod(m);
        if d == 0 {
            return Err(Error::Singular);
        }

        let d_inv = mod_inverse(d, m)?;
        let [[k11, k12], [k21, k22]] = self.0;

        Ok(Self([
            [true_mod(k22 * d_inv, m), true_mod(-k12 * d_inv, m)],
            [true_mod(-k21 * d_inv, m), true_mod(k11 * d_inv, m)],
        ]))
    }

    /// Multiply the row vector `[p1 p2]` by the matrix, reducing mod `m`
    ///
    /// c1 = k11*p1 + k21*p2, c2 = k12*p1 + k22*p2
    pub fn apply(&self, p1: i64, p2: i64, m: i64) -> (i64, i64) {
        let [[k11, k12], [k21, k22]] = self.0;
        (
            true_mod(k11 * p1 + k21 * p2, m),
            true_mod(k12 * p1 + k22 * p2, m),
        )
    }
}
