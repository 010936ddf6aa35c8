//! Schoolbook long division over limb magnitudes.
//!
//! The divisor is rendered as a decimal string, left-aligned with the
//! dividend by right-padding zeros, and walked down one decimal position at
//! a time. Each position trial-subtracts the shifted divisor at most nine
//! times, which makes the whole loop O(limbs² · 10) but keeps it purely in
//! comparison and subtraction — multiplication is never consulted.

use std::cmp::Ordering;

use num_traits::Zero;

use crate::integer::{Integer, RADIX, RADIX_WIDTH};
use crate::sign::Sign;

/// Computes `|dividend| / |divisor|`, ignoring signs. The caller must have
/// rejected a zero divisor already.
pub(crate) fn quotient_magnitude(dividend: &Integer, divisor: &Integer) -> Integer {
    debug_assert!(!divisor.is_zero());
    if divisor.limbs.len() > dividend.limbs.len() {
        return Integer::zero();
    }

    let shift = (dividend.limbs.len() - divisor.limbs.len() + 1) * RADIX_WIDTH;
    let mut aligned = String::with_capacity(divisor.limbs.len() * RADIX_WIDTH + shift);
    aligned.push_str(&divisor.magnitude_to_string());
    for _ in 0..shift {
        aligned.push('0');
    }
    let mut shifted = Integer::from_decimal_digits(Sign::Positive, aligned.as_bytes());

    let mut remainder = dividend.abs();
    let mut quotient = String::with_capacity(shift + 1);
    for _ in 0..=shift {
        let mut digit = b'0';
        while digit < b'9' && remainder.cmp_magnitude(&shifted) != Ordering::Less {
            remainder -= &shifted;
            digit += 1;
        }
        quotient.push(char::from(digit));
        shift_right_decimal(&mut shifted);
    }

    Integer::from_decimal_digits(Sign::Positive, quotient.as_bytes())
}

/// Divides a magnitude by ten in place, one decimal digit shift.
fn shift_right_decimal(value: &mut Integer) {
    let mut carry = 0;
    for limb in value.limbs.iter_mut().rev() {
        let current = carry * RADIX + *limb;
        *limb = current / 10;
        carry = current % 10;
    }
    value.trim();
}
