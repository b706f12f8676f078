//! GF(2^n) arithmetic for `n` in `1..=8`.

use tracing::trace;

use crate::algebra::ByteAlgebra;
use crate::error::MathError;

/// Primitive polynomials indexed by degree, with the `x^n` term included.
const PRIMITIVE_POLYS: [u16; 9] = [
    0,     // unused
    0x3,   // x + 1
    0x7,   // x^2 + x + 1
    0xB,   // x^3 + x + 1
    0x13,  // x^4 + x + 1
    0x25,  // x^5 + x^2 + 1
    0x43,  // x^6 + x + 1
    0x89,  // x^7 + x^3 + 1
    0x11D, // x^8 + x^4 + x^3 + x^2 + 1
];

/// The Galois field GF(2^degree).
///
/// Addition is XOR. Multiplication and inversion go through log/exp tables
/// built from the generator `x` (2) at construction, so every operation is a
/// couple of lookups. Operands must be field elements, i.e. `< order()`.
#[derive(Clone)]
pub struct GaloisField {
    degree: u8,
    /// `exp[i] = 2^i`, doubled so `log a + log b` never needs a modulo.
    exp: [u8; 512],
    log: [u8; 256],
}

impl GaloisField {
    /// Build the field of size `2^degree`.
    pub fn new(degree: u8) -> Result<Self, MathError> {
        if degree == 0 || degree as usize >= PRIMITIVE_POLYS.len() {
            return Err(MathError::UnsupportedDegree(degree));
        }

        let poly = PRIMITIVE_POLYS[degree as usize];
        let high_bit = 1u16 << degree;
        let group_order = (1usize << degree) - 1;

        let mut exp = [0u8; 512];
        let mut log = [0u8; 256];
        let mut x = 1u16;
        for i in 0..group_order {
            exp[i] = x as u8;
            exp[i + group_order] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & high_bit != 0 {
                x ^= poly;
            }
        }

        trace!(degree, poly, "built galois field tables");
        Ok(Self { degree, exp, log })
    }

    /// Field exponent `n` of GF(2^n).
    pub fn degree(&self) -> u8 {
        self.degree
    }

    /// Number of field elements, `2^degree`.
    pub fn order(&self) -> usize {
        1usize << self.degree
    }

    /// Whether `a` is an element of this field.
    pub fn contains(&self, a: u8) -> bool {
        (a as usize) < self.order()
    }

    fn group_order(&self) -> usize {
        self.order() - 1
    }
}

impl ByteAlgebra for GaloisField {
    #[inline]
    fn add(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    #[inline]
    fn mul(&self, a: u8, b: u8) -> u8 {
        debug_assert!(self.contains(a) && self.contains(b));
        if a == 0 || b == 0 {
            return 0;
        }
        self.exp[self.log[a as usize] as usize + self.log[b as usize] as usize]
    }

    fn inverse(&self, a: u8) -> Option<u8> {
        if a == 0 || !self.contains(a) {
            return None;
        }
        let n = self.group_order();
        Some(self.exp[(n - self.log[a as usize] as usize) % n])
    }
}

impl std::fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GaloisField(2^{})", self.degree)
    }
}
