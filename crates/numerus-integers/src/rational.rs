//! Arbitrary precision rational numbers.
//!
//! A [`Rational`] keeps its sign apart from a non-negative numerator and a
//! strictly positive denominator, and re-normalizes after every operation:
//! the numerator's own sign is folded into the rational's sign and both
//! parts are reduced by their greatest common divisor. Zero is always
//! `0/1` with a positive sign.

use std::cmp::Ordering;
use std::fmt;
use std::io::{self, BufRead};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::error::{ParseError, ReadError};
use crate::integer::{read_token, Integer};
use crate::sign::Sign;

/// An arbitrary precision rational number in canonical reduced form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    sign: Sign,
    numerator: Integer,
    denominator: Integer,
}

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        let sign = numerator.sign().combine(denominator.sign());
        let mut value = Self {
            sign,
            numerator: numerator.abs(),
            denominator: denominator.abs(),
        };
        value.normalize();
        value
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(value: Integer) -> Self {
        Self::from(value)
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Returns the sign. Zero reports `Sign::Positive`.
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the numerator magnitude. Always non-negative.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// Returns the denominator. Always strictly positive.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Converts to a signed integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        if self.is_integer() {
            Some(self.signed_numerator())
        } else {
            None
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            sign: Sign::Positive,
            numerator: self.numerator.clone(),
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "cannot take reciprocal of zero");
        Self {
            sign: self.sign,
            numerator: self.denominator.clone(),
            denominator: self.numerator.clone(),
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

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self {
            sign: if exp % 2 == 0 { Sign::Positive } else { self.sign },
            numerator: self.numerator.pow(exp),
            denominator: self.denominator.pow(exp),
        }
    }

    /// Formats the value with exactly `precision` digits after the decimal
    /// point, truncating toward zero. `precision` 0 yields the integer part
    /// with no decimal point.
    ///
    /// The numerator is scaled by 10^precision, integer-divided by the
    /// denominator, and the decimal point spliced into the digit string.
    #[must_use]
    pub fn as_decimal(&self, precision: usize) -> String {
        let mut scale = String::with_capacity(precision + 1);
        scale.push('1');
        for _ in 0..precision {
            scale.push('0');
        }
        let scaled =
            &self.numerator * &Integer::from_decimal_digits(Sign::Positive, scale.as_bytes());
        let quotient = &scaled / &self.denominator;
        let digits = quotient.magnitude_to_string();
        let split = digits.len().saturating_sub(precision);

        let mut out = String::with_capacity(digits.len() + precision + 2);
        if self.sign == Sign::Negative {
            out.push('-');
        }
        if split == 0 {
            out.push('0');
        } else {
            out.push_str(&digits[..split]);
        }
        if precision > 0 {
            out.push('.');
            for _ in 0..precision - (digits.len() - split) {
                out.push('0');
            }
            out.push_str(&digits[split..]);
        }
        out
    }

    /// Converts to the nearest f64 by formatting 30 decimal digits and
    /// parsing the result.
    ///
    /// Approximate by contract: callers needing precision beyond the double
    /// mantissa must not rely on this.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.as_decimal(30).parse().unwrap_or(f64::NAN)
    }

    /// Reads one whitespace-delimited token from `reader` and parses it.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::UnexpectedEof`] if the stream ends before any
    /// token, [`ReadError::Parse`] if the token is not a rational literal,
    /// or [`ReadError::Io`] if the reader fails.
    pub fn read_from<R: BufRead>(reader: &mut R) -> Result<Self, ReadError> {
        Ok(read_token(reader)?.parse()?)
    }

    /// Writes the canonical form to `writer`.
    ///
    /// # Errors
    ///
    /// Propagates any error from the writer.
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{self}")
    }

    /// The numerator with this rational's sign applied.
    fn signed_numerator(&self) -> Integer {
        let numerator = self.numerator.clone();
        if self.sign == Sign::Negative {
            -numerator
        } else {
            numerator
        }
    }

    /// Restores canonical form: fold the numerator's sign into the
    /// rational's sign, pin zero to positive, and reduce by the GCD.
    fn normalize(&mut self) {
        self.sign = self.sign.combine(self.numerator.sign());
        self.numerator = self.numerator.abs();
        if self.numerator.is_zero() {
            self.sign = Sign::Positive;
        }
        let g = self.numerator.gcd(&self.denominator);
        if !g.is_one() {
            self.numerator = &self.numerator / &g;
            self.denominator = &self.denominator / &g;
        }
    }

    fn add_assign_ref(&mut self, rhs: &Self) {
        let lhs_scaled = self.signed_numerator() * &rhs.denominator;
        let rhs_scaled = rhs.signed_numerator() * &self.denominator;
        self.numerator = lhs_scaled + rhs_scaled;
        self.denominator = &self.denominator * &rhs.denominator;
        self.sign = Sign::Positive;
        self.normalize();
    }

    fn sub_assign_ref(&mut self, rhs: &Self) {
        let lhs_scaled = self.signed_numerator() * &rhs.denominator;
        let rhs_scaled = rhs.signed_numerator() * &self.denominator;
        self.numerator = lhs_scaled - rhs_scaled;
        self.denominator = &self.denominator * &rhs.denominator;
        self.sign = Sign::Positive;
        self.normalize();
    }

    fn mul_assign_ref(&mut self, rhs: &Self) {
        self.numerator = &self.numerator * &rhs.numerator;
        self.denominator = &self.denominator * &rhs.denominator;
        self.sign = self.sign.combine(rhs.sign);
        self.normalize();
    }

    /// Multiplies by the reciprocal of `rhs`.
    fn div_assign_ref(&mut self, rhs: &Self) {
        assert!(!rhs.is_zero(), "division by zero");
        self.numerator = &self.numerator * &rhs.denominator;
        self.denominator = &self.denominator * &rhs.numerator;
        self.sign = self.sign.combine(rhs.sign);
        self.normalize();
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self {
            sign: Sign::Positive,
            numerator: Integer::zero(),
            denominator: Integer::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self {
            sign: Sign::Positive,
            numerator: Integer::one(),
            denominator: Integer::one(),
        }
    }

    fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.numerator.is_one() && self.denominator.is_one()
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            f.write_str("-")?;
        }
        write!(f, "{}", self.numerator)?;
        if !self.denominator.is_one() {
            write!(f, "/{}", self.denominator)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl FromStr for Rational {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s.split_once('/') {
            None => Ok(Self::from(s.parse::<Integer>()?)),
            Some((numerator, denominator)) => {
                let numerator: Integer = numerator.parse()?;
                let denominator: Integer = denominator.parse()?;
                if denominator.is_zero() {
                    return Err(ParseError::ZeroDenominator);
                }
                Ok(Self::new(numerator, denominator))
            }
        }
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (sign, _) => {
                let lhs = &self.numerator * &other.denominator;
                let rhs = &other.numerator * &self.denominator;
                let ordering = lhs.cmp(&rhs);
                if sign == Sign::Negative {
                    ordering.reverse()
                } else {
                    ordering
                }
            }
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Arithmetic operations

impl AddAssign<&Rational> for Rational {
    fn add_assign(&mut self, rhs: &Rational) {
        self.add_assign_ref(rhs);
    }
}

impl AddAssign for Rational {
    fn add_assign(&mut self, rhs: Rational) {
        self.add_assign_ref(&rhs);
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.add_assign_ref(&rhs);
        self
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(mut self, rhs: &Rational) -> Self::Output {
        self.add_assign_ref(rhs);
        self
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out.add_assign_ref(rhs);
        out
    }
}

impl SubAssign<&Rational> for Rational {
    fn sub_assign(&mut self, rhs: &Rational) {
        self.sub_assign_ref(rhs);
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Rational) {
        self.sub_assign_ref(&rhs);
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self.sub_assign_ref(&rhs);
        self
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(mut self, rhs: &Rational) -> Self::Output {
        self.sub_assign_ref(rhs);
        self
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out.sub_assign_ref(rhs);
        out
    }
}

impl MulAssign<&Rational> for Rational {
    fn mul_assign(&mut self, rhs: &Rational) {
        self.mul_assign_ref(rhs);
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Rational) {
        self.mul_assign_ref(&rhs);
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self.mul_assign_ref(&rhs);
        self
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(mut self, rhs: &Rational) -> Self::Output {
        self.mul_assign_ref(rhs);
        self
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out.mul_assign_ref(rhs);
        out
    }
}

impl DivAssign<&Rational> for Rational {
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div_assign(&mut self, rhs: &Rational) {
        self.div_assign_ref(rhs);
    }
}

impl DivAssign for Rational {
    fn div_assign(&mut self, rhs: Rational) {
        self.div_assign_ref(&rhs);
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(mut self, rhs: Self) -> Self::Output {
        self.div_assign_ref(&rhs);
        self
    }
}

impl Div<&Rational> for Rational {
    type Output = Self;

    fn div(mut self, rhs: &Rational) -> Self::Output {
        self.div_assign_ref(rhs);
        self
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out.div_assign_ref(rhs);
        out
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.sign = self.sign.flip();
        }
        self
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl From<Integer> for Rational {
    fn from(value: Integer) -> Self {
        let sign = value.sign();
        Self {
            sign,
            numerator: value.abs(),
            denominator: Integer::one(),
        }
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from(Integer::new(value))
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Self::from(Integer::from(value))
    }
}
