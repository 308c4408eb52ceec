// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Exact arithmetic on polynomials and truncated power series with rational
//! coefficients.
//!
//! A [`RationalPolynomial`](polynomial::RationalPolynomial) stores its
//! coefficients as a vector of integer numerators sharing one positive
//! denominator, always reduced so that the numerators and the denominator are
//! coprime.

pub mod config;
pub mod error;
pub(crate) mod mod_int;
pub mod polynomial;
pub mod prelude;
pub mod traits;
pub mod util;

pub use crate::{
    config::Tuning,
    error::{DomainError, ParsePolynomialError},
    polynomial::{CoefficientVector, PowersPrecomputation, Pretty, RationalPolynomial},
};
