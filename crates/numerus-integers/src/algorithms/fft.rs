//! FFT-based limb convolution for integer multiplication.
//!
//! Two limb sequences are treated as polynomial coefficients, transformed
//! with an iterative radix-2 Cooley-Tukey FFT over `Complex64`, multiplied
//! pointwise, inverse-transformed, rounded back to integers, and
//! carry-propagated in the limb radix.
//!
//! ## Accuracy
//!
//! This is a floating-point route to an exact integer result: it is correct
//! only while every convolution coefficient, `min(la, lb) · (RADIX − 1)²` at
//! worst, stays far enough below f64's 2⁵³ exact-integer range that rounding
//! error cannot reach 0.5. With `RADIX` = 10⁴ that holds comfortably for a
//! combined operand length of up to 2¹⁶ limbs (≈ 260 000 decimal digits of
//! product). Beyond that bound results degrade silently; callers needing
//! larger products need a wider-limbed or exact (NTT) transform.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::integer::{Limbs, RADIX};

/// Convolves two limb magnitudes and carry-propagates the result.
///
/// The returned sequence is trimmed canonical limbs; the caller owns sign
/// handling.
pub(crate) fn convolve(a: &[u32], b: &[u32]) -> Limbs {
    let mut n = 1;
    while n < a.len().max(b.len()) {
        n <<= 1;
    }
    n <<= 1;

    let mut fa: Vec<Complex64> = a
        .iter()
        .map(|&limb| Complex64::new(f64::from(limb), 0.0))
        .collect();
    let mut fb: Vec<Complex64> = b
        .iter()
        .map(|&limb| Complex64::new(f64::from(limb), 0.0))
        .collect();
    fa.resize(n, Complex64::new(0.0, 0.0));
    fb.resize(n, Complex64::new(0.0, 0.0));

    fft(&mut fa, false);
    fft(&mut fb, false);
    for (lhs, rhs) in fa.iter_mut().zip(&fb) {
        *lhs *= *rhs;
    }
    fft(&mut fa, true);

    let mut limbs = Limbs::with_capacity(n);
    let mut carry = 0u64;
    for value in &fa {
        let coefficient = (value.re + 0.5).floor() as u64 + carry;
        carry = coefficient / u64::from(RADIX);
        limbs.push((coefficient % u64::from(RADIX)) as u32);
    }
    while carry > 0 {
        limbs.push((carry % u64::from(RADIX)) as u32);
        carry /= u64::from(RADIX);
    }
    while limbs.len() > 1 && limbs.last() == Some(&0) {
        limbs.pop();
    }
    limbs
}

/// Iterative radix-2 FFT. `invert` flips the rotation angle and divides
/// every coefficient by the length.
fn fft(a: &mut [Complex64], invert: bool) {
    let n = a.len();
    if n == 1 {
        return;
    }

    // Bit-reversal permutation
    let log_n = n.trailing_zeros();
    for i in 0..n {
        let j = ((i as u32).reverse_bits() >> (32 - log_n)) as usize;
        if i < j {
            a.swap(i, j);
        }
    }

    // Cooley-Tukey butterfly passes
    let mut len = 2;
    while len <= n {
        let angle = 2.0 * PI / len as f64 * if invert { -1.0 } else { 1.0 };
        let w_len = Complex64::from_polar(1.0, angle);
        for i in (0..n).step_by(len) {
            let mut w = Complex64::new(1.0, 0.0);
            for j in 0..len / 2 {
                let u = a[i + j];
                let v = a[i + j + len / 2] * w;
                a[i + j] = u + v;
                a[i + j + len / 2] = u - v;
                w *= w_len;
            }
        }
        len <<= 1;
    }

    if invert {
        let scale = 1.0 / n as f64;
        for value in a.iter_mut() {
            *value *= scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference convolution, quadratic and exact.
    fn schoolbook(a: &[u32], b: &[u32]) -> Vec<u32> {
        let mut acc = vec![0u64; a.len() + b.len()];
        for (i, &x) in a.iter().enumerate() {
            for (j, &y) in b.iter().enumerate() {
                acc[i + j] += u64::from(x) * u64::from(y);
            }
        }
        let mut carry = 0u64;
        let mut out = Vec::with_capacity(acc.len());
        for coefficient in acc {
            let total = coefficient + carry;
            carry = total / u64::from(RADIX);
            out.push((total % u64::from(RADIX)) as u32);
        }
        while carry > 0 {
            out.push((carry % u64::from(RADIX)) as u32);
            carry /= u64::from(RADIX);
        }
        while out.len() > 1 && out.last() == Some(&0) {
            out.pop();
        }
        out
    }

    #[test]
    fn test_single_limb() {
        assert_eq!(convolve(&[2], &[3]).as_slice(), &[6]);
        assert_eq!(convolve(&[0], &[7]).as_slice(), &[0]);
    }

    #[test]
    fn test_carry_propagation() {
        // 9999 * 9999 = 99980001 = [1, 9998]
        assert_eq!(convolve(&[9999], &[9999]).as_slice(), &[1, 9998]);
    }

    #[test]
    fn test_unequal_lengths() {
        // 12340000 * 56 = 691040000 = [0, 9104, 6]
        assert_eq!(convolve(&[0, 1234], &[56]).as_slice(), &[0, 9104, 6]);
    }

    #[test]
    fn test_matches_schoolbook() {
        let mut state = 0x243f_6a88_85a3_08d3u64;
        let mut next = || {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (state >> 33) as u32 % RADIX
        };
        for (la, lb) in [(1, 9), (17, 17), (40, 3), (64, 64)] {
            let a: Vec<u32> = (0..la).map(|_| next()).collect();
            let b: Vec<u32> = (0..lb).map(|_| next()).collect();
            assert_eq!(convolve(&a, &b).as_slice(), schoolbook(&a, &b).as_slice());
        }
    }

    #[test]
    fn test_round_trip_transform() {
        let mut data: Vec<Complex64> = (0..8).map(|i| Complex64::new(f64::from(i), 0.0)).collect();
        let original = data.clone();
        fft(&mut data, false);
        fft(&mut data, true);
        for (got, expected) in data.iter().zip(&original) {
            assert!((got.re - expected.re).abs() < 1e-9);
            assert!(got.im.abs() < 1e-9);
        }
    }
}
