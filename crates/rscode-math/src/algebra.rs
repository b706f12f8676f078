//! The byte arithmetic capability shared by matrices and coders.

/// Arithmetic over single-byte symbols.
///
/// For a real erasure code the implementation must be a field: `add` is its
/// own inverse, `mul` is associative and commutative with identity 1 and
/// absorbing 0, and every nonzero element has an inverse.
pub trait ByteAlgebra {
    /// Sum of two symbols.
    fn add(&self, a: u8, b: u8) -> u8;

    /// Product of two symbols.
    fn mul(&self, a: u8, b: u8) -> u8;

    /// Multiplicative inverse of `a`, or `None` if it has none.
    fn inverse(&self, a: u8) -> Option<u8>;
}

impl<A: ByteAlgebra + ?Sized> ByteAlgebra for &A {
    #[inline]
    fn add(&self, a: u8, b: u8) -> u8 {
        (**self).add(a, b)
    }

    #[inline]
    fn mul(&self, a: u8, b: u8) -> u8 {
        (**self).mul(a, b)
    }

    #[inline]
    fn inverse(&self, a: u8) -> Option<u8> {
        (**self).inverse(a)
    }
}

/// Plain unsigned byte arithmetic modulo 256.
///
/// Not a field (even numbers have no inverse), so it cannot drive an erasure
/// code. It exists to check the generic exponentiation and matrix code
/// against results that are easy to compute by hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WrappingAlgebra;

impl ByteAlgebra for WrappingAlgebra {
    #[inline]
    fn add(&self, a: u8, b: u8) -> u8 {
        a.wrapping_add(b)
    }

    #[inline]
    fn mul(&self, a: u8, b: u8) -> u8 {
        a.wrapping_mul(b)
    }

    fn inverse(&self, a: u8) -> Option<u8> {
        if a % 2 == 0 {
            return None;
        }
        // Newton iteration: each step doubles the number of correct low bits,
        // and `a` is already its own inverse modulo 8.
        let mut x = a;
        for _ in 0..3 {
            x = x.wrapping_mul(2u8.wrapping_sub(a.wrapping_mul(x)));
        }
        Some(x)
    }
}

/// Raise `base` to `exponent` using the algebra's multiplication.
///
/// `pow(a, 0) == 1` for every `a` (including 0) and `pow(a, 1) == a`.
/// Square-and-multiply, so at most `2 * log2(exponent)` multiplications.
pub fn pow<A: ByteAlgebra + ?Sized>(base: u8, exponent: usize, algebra: &A) -> u8 {
    let mut result = 1u8;
    let mut square = base;
    let mut e = exponent;
    while e > 0 {
        if e & 1 == 1 {
            result = algebra.mul(result, square);
        }
        e >>= 1;
        if e > 0 {
            square = algebra.mul(square, square);
        }
    }
    result
}
