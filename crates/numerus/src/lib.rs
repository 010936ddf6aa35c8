//! # Numerus
//!
//! Exact arbitrary precision arithmetic in Rust.
//!
//! Numerus provides signed big integers with FFT-convolution multiplication
//! and exact rationals kept in canonical reduced form.
//!
//! ## Quick Start
//!
//! ```rust
//! use numerus::prelude::*;
//!
//! let a: Integer = "123456789".parse().unwrap();
//! let b: Integer = "987654321".parse().unwrap();
//! assert_eq!((a * b).to_string(), "121932631112635269");
//!
//! let third = Rational::from_i64(1, 3);
//! let sixth = Rational::from_i64(1, 6);
//! assert_eq!(third + sixth, Rational::from_i64(1, 2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use numerus_integers as integers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use numerus_integers::{ArithmeticError, Integer, ParseError, Rational, ReadError, Sign};
}
