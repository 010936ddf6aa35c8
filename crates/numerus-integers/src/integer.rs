//! Arbitrary precision signed integers.
//!
//! An [`Integer`] stores its magnitude as a little-endian sequence of
//! base-10⁴ limbs next to an explicit [`Sign`]. All arithmetic is exact;
//! multiplication runs through the convolution engine in
//! [`crate::algorithms`] and division through the long-division engine.

use std::cmp::Ordering;
use std::fmt;
use std::io::{self, BufRead};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{One, Zero};
use smallvec::SmallVec;

use crate::algorithms::{division, fft};
use crate::error::{ArithmeticError, ParseError, ReadError};
use crate::sign::Sign;

/// The limb radix. Each limb holds `RADIX_WIDTH` decimal digits.
///
/// A pure tuning knob: any power of ten whose squared limbs stay well under
/// the f64 exact-integer range works. See `algorithms::fft` for the bound.
pub(crate) const RADIX: u32 = 10_000;

/// Decimal digits per limb.
pub(crate) const RADIX_WIDTH: usize = 4;

/// Limb storage. Values up to 10¹⁶ − 1 stay on the stack.
pub(crate) type Limbs = SmallVec<[u32; 4]>;

/// An arbitrary precision signed integer.
///
/// Canonical form: no most-significant zero limbs except for the value
/// zero, which is the single limb `[0]` and always `Sign::Positive`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Integer {
    pub(crate) sign: Sign,
    pub(crate) limbs: Limbs,
}

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self::from(value)
    }

    /// Returns the sign. Zero reports `Sign::Positive`.
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            sign: Sign::Positive,
            limbs: self.limbs.clone(),
        }
    }

    /// Returns the sign as an integer: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.sign == Sign::Positive {
            1
        } else {
            -1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Adds one in place.
    pub fn increment(&mut self) {
        self.add_assign_ref(&Self::one());
    }

    /// Subtracts one in place.
    pub fn decrement(&mut self) {
        self.sub_assign_ref(&Self::one());
    }

    /// Computes the quotient and remainder of truncating division.
    ///
    /// The quotient rounds toward zero and the remainder takes the
    /// dividend's sign, so `(a / b) * b + a % b == a` holds for every
    /// non-zero divisor.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let mut quotient = division::quotient_magnitude(self, divisor);
        if !quotient.is_zero() {
            quotient.sign = self.sign.combine(divisor.sign);
        }
        let remainder = self - &(&quotient * divisor);
        Ok((quotient, remainder))
    }

    /// Computes the greatest common divisor. The result is non-negative.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.abs();
        let mut b = other.abs();
        while !b.is_zero() {
            let r = &a % &b;
            a = b;
            b = r;
        }
        a
    }

    /// Computes the least common multiple. The result is non-negative.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        (&(self / &g) * other).abs()
    }

    /// Computes self^exp by binary exponentiation.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = exp;
        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            exp >>= 1;
        }
        result
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        let mut value = 0i64;
        for &limb in self.limbs.iter().rev() {
            value = value.checked_mul(i64::from(RADIX))?;
            value = if self.sign == Sign::Negative {
                value.checked_sub(i64::from(limb))?
            } else {
                value.checked_add(i64::from(limb))?
            };
        }
        Some(value)
    }

    /// Reads one whitespace-delimited token from `reader` and parses it.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::UnexpectedEof`] if the stream ends before any
    /// token, [`ReadError::Parse`] if the token is not a decimal integer,
    /// or [`ReadError::Io`] if the reader fails.
    pub fn read_from<R: BufRead>(reader: &mut R) -> Result<Self, ReadError> {
        Ok(read_token(reader)?.parse()?)
    }

    /// Writes the canonical decimal form to `writer`.
    ///
    /// # Errors
    ///
    /// Propagates any error from the writer.
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{self}")
    }

    /// Builds an integer from validated ASCII digits, least significant
    /// chunk first. Leading zeros are stripped; "-0" collapses to zero.
    pub(crate) fn from_decimal_digits(sign: Sign, digits: &[u8]) -> Self {
        let mut limbs = Limbs::with_capacity(digits.len() / RADIX_WIDTH + 1);
        for chunk in digits.rchunks(RADIX_WIDTH) {
            let mut limb = 0u32;
            for &byte in chunk {
                limb = limb * 10 + u32::from(byte - b'0');
            }
            limbs.push(limb);
        }
        let mut value = Self { sign, limbs };
        value.trim();
        if value.is_zero() {
            value.sign = Sign::Positive;
        }
        value
    }

    /// Renders the magnitude as decimal digits, most significant first.
    pub(crate) fn magnitude_to_string(&self) -> String {
        let mut out = String::with_capacity(self.limbs.len() * RADIX_WIDTH);
        let mut limbs = self.limbs.iter().rev();
        if let Some(first) = limbs.next() {
            out.push_str(&first.to_string());
        }
        for limb in limbs {
            let digits = limb.to_string();
            for _ in digits.len()..RADIX_WIDTH {
                out.push('0');
            }
            out.push_str(&digits);
        }
        out
    }

    /// Strips most-significant zero limbs down to a single zero limb.
    pub(crate) fn trim(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last().map_or(false, |&limb| limb == 0) {
            self.limbs.pop();
        }
    }

    /// Compares magnitudes only: fewer limbs is smaller, equal lengths
    /// compare from the most significant limb down.
    pub(crate) fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match self.limbs.len().cmp(&other.limbs.len()) {
            Ordering::Equal => {
                for (lhs, rhs) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
                    match lhs.cmp(rhs) {
                        Ordering::Equal => {}
                        ordering => return ordering,
                    }
                }
                Ordering::Equal
            }
            ordering => ordering,
        }
    }

    fn add_assign_ref(&mut self, rhs: &Self) {
        if self.sign == rhs.sign {
            let len = self.limbs.len().max(rhs.limbs.len());
            self.limbs.resize(len, 0);
            let mut carry = 0;
            for i in 0..len {
                let mut limb = self.limbs[i] + carry;
                if let Some(&r) = rhs.limbs.get(i) {
                    limb += r;
                }
                carry = limb / RADIX;
                self.limbs[i] = limb % RADIX;
            }
            self.limbs.push(carry);
            self.trim();
        } else {
            match self.cmp_magnitude(rhs) {
                Ordering::Less => {
                    self.limbs = magnitude_difference(&rhs.limbs, &self.limbs);
                    self.sign = rhs.sign;
                }
                Ordering::Equal | Ordering::Greater => {
                    self.limbs = magnitude_difference(&self.limbs, &rhs.limbs);
                }
            }
            self.trim();
            if self.is_zero() {
                self.sign = Sign::Positive;
            }
        }
    }

    fn sub_assign_ref(&mut self, rhs: &Self) {
        let negated = -rhs.clone();
        self.add_assign_ref(&negated);
    }

    fn mul_assign_ref(&mut self, rhs: &Self) {
        self.limbs = fft::convolve(&self.limbs, &rhs.limbs);
        self.sign = self.sign.combine(rhs.sign);
        if self.is_zero() {
            self.sign = Sign::Positive;
        }
    }
}

/// Limbwise `larger - smaller` with borrow. `larger` must have the larger
/// or equal magnitude.
fn magnitude_difference(larger: &[u32], smaller: &[u32]) -> Limbs {
    let mut limbs = Limbs::from_slice(larger);
    let mut borrow = 0u32;
    for (i, limb) in limbs.iter_mut().enumerate() {
        let subtrahend = smaller.get(i).copied().unwrap_or(0) + borrow;
        if *limb < subtrahend {
            *limb += RADIX - subtrahend;
            borrow = 1;
        } else {
            *limb -= subtrahend;
            borrow = 0;
        }
    }
    limbs
}

/// Skips leading whitespace, then collects bytes until whitespace or EOF.
pub(crate) fn read_token<R: BufRead>(reader: &mut R) -> Result<String, ReadError> {
    let mut token = String::new();
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte)? {
            0 => break,
            _ => {
                let c = char::from(byte[0]);
                if c.is_ascii_whitespace() {
                    if token.is_empty() {
                        continue;
                    }
                    break;
                }
                token.push(c);
            }
        }
    }
    if token.is_empty() {
        Err(ReadError::UnexpectedEof)
    } else {
        Ok(token)
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self {
            sign: Sign::Positive,
            limbs: SmallVec::from_slice(&[0]),
        }
    }

    fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }
}

impl One for Integer {
    fn one() -> Self {
        Self {
            sign: Sign::Positive,
            limbs: SmallVec::from_slice(&[1]),
        }
    }

    fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.limbs.len() == 1 && self.limbs[0] == 1
    }
}

impl Default for Integer {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for Integer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, s),
        };
        if digits.is_empty() {
            return Err(ParseError::Empty);
        }
        if let Some(c) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ParseError::InvalidDigit(c));
        }
        Ok(Self::from_decimal_digits(sign, digits.as_bytes()))
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            f.write_str("-")?;
        }
        f.write_str(&self.magnitude_to_string())
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({self})")
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.cmp_magnitude(other),
            (Sign::Negative, Sign::Negative) => other.cmp_magnitude(self),
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Arithmetic operations

impl AddAssign<&Integer> for Integer {
    fn add_assign(&mut self, rhs: &Integer) {
        self.add_assign_ref(rhs);
    }
}

impl AddAssign for Integer {
    fn add_assign(&mut self, rhs: Integer) {
        self.add_assign_ref(&rhs);
    }
}

impl Add for Integer {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.add_assign_ref(&rhs);
        self
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(mut self, rhs: &Integer) -> Self::Output {
        self.add_assign_ref(rhs);
        self
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out.add_assign_ref(rhs);
        out
    }
}

impl SubAssign<&Integer> for Integer {
    fn sub_assign(&mut self, rhs: &Integer) {
        self.sub_assign_ref(rhs);
    }
}

impl SubAssign for Integer {
    fn sub_assign(&mut self, rhs: Integer) {
        self.sub_assign_ref(&rhs);
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self.sub_assign_ref(&rhs);
        self
    }
}

impl Sub<&Integer> for Integer {
    type Output = Self;

    fn sub(mut self, rhs: &Integer) -> Self::Output {
        self.sub_assign_ref(rhs);
        self
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out.sub_assign_ref(rhs);
        out
    }
}

impl MulAssign<&Integer> for Integer {
    fn mul_assign(&mut self, rhs: &Integer) {
        self.mul_assign_ref(rhs);
    }
}

impl MulAssign for Integer {
    fn mul_assign(&mut self, rhs: Integer) {
        self.mul_assign_ref(&rhs);
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self.mul_assign_ref(&rhs);
        self
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(mut self, rhs: &Integer) -> Self::Output {
        self.mul_assign_ref(rhs);
        self
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out.mul_assign_ref(rhs);
        out
    }
}

impl Div for &Integer {
    type Output = Integer;

    /// # Panics
    ///
    /// Panics if `rhs` is zero. Use [`Integer::div_rem`] for the checked form.
    fn div(self, rhs: Self) -> Self::Output {
        let (quotient, _) = self.div_rem(rhs).expect("division by zero");
        quotient
    }
}

impl Div for Integer {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div<&Integer> for Integer {
    type Output = Self;

    fn div(self, rhs: &Integer) -> Self::Output {
        &self / rhs
    }
}

impl DivAssign<&Integer> for Integer {
    fn div_assign(&mut self, rhs: &Integer) {
        *self = &*self / rhs;
    }
}

impl DivAssign for Integer {
    fn div_assign(&mut self, rhs: Integer) {
        *self = &*self / &rhs;
    }
}

impl Rem for &Integer {
    type Output = Integer;

    /// # Panics
    ///
    /// Panics if `rhs` is zero. Use [`Integer::div_rem`] for the checked form.
    fn rem(self, rhs: Self) -> Self::Output {
        let (_, remainder) = self.div_rem(rhs).expect("division by zero");
        remainder
    }
}

impl Rem for Integer {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        &self % &rhs
    }
}

impl Rem<&Integer> for Integer {
    type Output = Self;

    fn rem(self, rhs: &Integer) -> Self::Output {
        &self % rhs
    }
}

impl RemAssign<&Integer> for Integer {
    fn rem_assign(&mut self, rhs: &Integer) {
        *self = &*self % rhs;
    }
}

impl RemAssign for Integer {
    fn rem_assign(&mut self, rhs: Integer) {
        *self = &*self % &rhs;
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.sign = self.sign.flip();
        }
        self
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
        let mut magnitude = value.unsigned_abs();
        let mut limbs = Limbs::new();
        loop {
            limbs.push((magnitude % u64::from(RADIX)) as u32);
            magnitude /= u64::from(RADIX);
            if magnitude == 0 {
                break;
            }
        }
        Self { sign, limbs }
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        let mut magnitude = value;
        let mut limbs = Limbs::new();
        loop {
            limbs.push((magnitude % u64::from(RADIX)) as u32);
            magnitude /= u64::from(RADIX);
            if magnitude == 0 {
                break;
            }
        }
        Self {
            sign: Sign::Positive,
            limbs,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn int(s: &str) -> Integer {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(int("0").to_string(), "0");
        assert_eq!(int("-0").to_string(), "0");
        assert_eq!(int("007").to_string(), "7");
        assert_eq!(int("123456789").to_string(), "123456789");
        assert_eq!(int("-120034").to_string(), "-120034");
        assert_eq!(int("10000").to_string(), "10000");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Integer>(), Err(ParseError::Empty));
        assert_eq!("-".parse::<Integer>(), Err(ParseError::Empty));
        assert_eq!("12a3".parse::<Integer>(), Err(ParseError::InvalidDigit('a')));
        assert_eq!("+5".parse::<Integer>(), Err(ParseError::InvalidDigit('+')));
        assert_eq!("--5".parse::<Integer>(), Err(ParseError::InvalidDigit('-')));
    }

    #[test]
    fn test_basic_ops() {
        let a = Integer::new(10);
        let b = Integer::new(3);

        assert_eq!((a.clone() + b.clone()).to_i64(), Some(13));
        assert_eq!((a.clone() - b.clone()).to_i64(), Some(7));
        assert_eq!((a.clone() * b.clone()).to_i64(), Some(30));
        assert_eq!((a.clone() / b.clone()).to_i64(), Some(3));
        assert_eq!((a % b).to_i64(), Some(1));
    }

    #[test]
    fn test_addition_carries_across_limbs() {
        assert_eq!((int("9999") + int("1")).to_string(), "10000");
        assert_eq!((int("99999999") + int("1")).to_string(), "100000000");
        assert_eq!((int("10000") - int("1")).to_string(), "9999");
    }

    #[test]
    fn test_additive_inverse_is_positive_zero() {
        let sum = int("-5") + int("5");
        assert_eq!(sum.to_string(), "0");
        assert_eq!(sum.sign(), Sign::Positive);
        assert_eq!(sum, int("0"));
    }

    #[test]
    fn test_mixed_sign_addition() {
        assert_eq!((int("-7") + int("3")).to_string(), "-4");
        assert_eq!((int("7") + int("-3")).to_string(), "4");
        assert_eq!((int("3") + int("-7")).to_string(), "-4");
        assert_eq!((int("-10000") + int("1")).to_string(), "-9999");
    }

    #[test]
    fn test_multiplication() {
        let product = int("123456789") * int("987654321");
        assert_eq!(product.to_string(), "121932631112635269");

        assert_eq!((int("-4") * int("25")).to_string(), "-100");
        assert_eq!((int("-4") * int("-25")).to_string(), "100");
        let zero = int("-4") * int("0");
        assert_eq!(zero.sign(), Sign::Positive);
    }

    #[test]
    fn test_multiplication_large_operands_stay_exact() {
        // (10^k - 1)(10^k + 1) = 10^2k - 1, all nines.
        let k = 40_000;
        let nines: String = "9".repeat(k);
        let mut one_zero_one = String::with_capacity(k + 1);
        one_zero_one.push('1');
        for _ in 0..k - 1 {
            one_zero_one.push('0');
        }
        one_zero_one.push('1');

        let product = int(&nines) * int(&one_zero_one);
        assert_eq!(product.to_string(), "9".repeat(2 * k));
    }

    #[test]
    fn test_division() {
        assert_eq!((int("100") / int("7")).to_string(), "14");
        assert_eq!((int("100") % int("7")).to_string(), "2");

        let a = int("121932631112635269");
        assert_eq!((&a / &int("987654321")).to_string(), "123456789");
        assert_eq!((&a % &int("987654321")).to_string(), "0");
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        for (a, b, q, r) in [
            ("7", "2", "3", "1"),
            ("-7", "2", "-3", "-1"),
            ("7", "-2", "-3", "1"),
            ("-7", "-2", "3", "-1"),
        ] {
            let (quotient, remainder) = int(a).div_rem(&int(b)).unwrap();
            assert_eq!(quotient.to_string(), q, "{a} / {b}");
            assert_eq!(remainder.to_string(), r, "{a} % {b}");
        }
    }

    #[test]
    fn test_division_small_by_large() {
        assert_eq!((int("7") / int("100")).to_string(), "0");
        assert_eq!((int("7") % int("100")).to_string(), "7");
        let quotient = int("-7") / int("100");
        assert_eq!(quotient.sign(), Sign::Positive);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            int("42").div_rem(&int("0")),
            Err(ArithmeticError::DivisionByZero)
        );
        assert_eq!(
            int("0").div_rem(&int("0")),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn test_comparisons() {
        assert!(int("-5") < int("3"));
        assert!(int("3") < int("20"));
        assert!(int("-20") < int("-3"));
        assert!(int("123") < int("1000"));
        assert!(int("-1000") < int("-123"));
        assert!(int("10001") > int("10000"));
        assert_eq!(int("42"), int("42"));
        assert!(int("42") <= int("42"));
    }

    #[test]
    fn test_increment_decrement() {
        let mut n = int("-1");
        n.increment();
        assert_eq!(n.to_string(), "0");
        assert_eq!(n.sign(), Sign::Positive);
        n.increment();
        assert_eq!(n.to_string(), "1");
        n.decrement();
        n.decrement();
        assert_eq!(n.to_string(), "-1");
    }

    #[test]
    fn test_negate() {
        assert_eq!((-int("5")).to_string(), "-5");
        assert_eq!((-int("-5")).to_string(), "5");
        let zero = -int("0");
        assert_eq!(zero.sign(), Sign::Positive);
    }

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(int("48").gcd(&int("18")).to_string(), "6");
        assert_eq!(int("-48").gcd(&int("18")).to_string(), "6");
        assert_eq!(int("0").gcd(&int("5")).to_string(), "5");
        assert_eq!(int("4").lcm(&int("6")).to_string(), "12");
        assert_eq!(int("0").lcm(&int("6")).to_string(), "0");
    }

    #[test]
    fn test_pow() {
        assert_eq!(int("2").pow(10).to_string(), "1024");
        assert_eq!(int("-3").pow(3).to_string(), "-27");
        assert_eq!(int("7").pow(0).to_string(), "1");
        assert_eq!(int("10").pow(20).to_string(), format!("1{}", "0".repeat(20)));
    }

    #[test]
    fn test_to_i64_bounds() {
        let max = Integer::new(i64::MAX);
        assert_eq!(max.to_i64(), Some(i64::MAX));
        let min = Integer::new(i64::MIN);
        assert_eq!(min.to_i64(), Some(i64::MIN));
        assert_eq!((max + Integer::new(1)).to_i64(), None);
    }

    #[test]
    fn test_compound_assignment() {
        let mut n = int("10");
        n += int("5");
        n -= int("3");
        n *= int("4");
        n /= int("6");
        n %= int("5");
        assert_eq!(n.to_string(), "3");
    }

    #[test]
    fn test_read_from() {
        let mut input = Cursor::new("  123  -45\nnope");
        assert_eq!(Integer::read_from(&mut input).unwrap().to_string(), "123");
        assert_eq!(Integer::read_from(&mut input).unwrap().to_string(), "-45");
        assert!(matches!(
            Integer::read_from(&mut input),
            Err(ReadError::Parse(ParseError::InvalidDigit('n')))
        ));
        assert!(matches!(
            Integer::read_from(&mut input),
            Err(ReadError::UnexpectedEof)
        ));
    }

    #[test]
    fn test_write_to() {
        let mut out = Vec::new();
        int("-120034").write_to(&mut out).unwrap();
        assert_eq!(out, b"-120034");
    }

    #[test]
    fn test_large_numbers() {
        let a = int("123456789012345678901234567890");
        let b = int("987654321098765432109876543210");
        assert_eq!((a + b).to_string(), "1111111110111111111011111111100");
    }
}
