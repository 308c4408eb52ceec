// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use thiserror::Error;

/// A violated precondition of a polynomial or power series operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum DomainError {
    #[error("polynomial division by zero")]
    DivisionByZero,
    #[error("scalar division by zero")]
    ScalarDivisionByZero,
    #[error("zero denominator")]
    ZeroDenominator,
    #[error("polynomial is not a nonzero constant")]
    NotUnit,
    #[error("power series has a zero constant term")]
    ConstantTermZero,
    #[error("power series constant term must be zero")]
    ConstantTermNotZero,
    #[error("power series constant term must be one")]
    ConstantTermNotOne,
    #[error("power series constant term is not the square of a nonzero rational")]
    ConstantTermNotSquare,
    #[error("power series constant term is outside the domain of the function")]
    ConstantTermOutOfDomain,
    #[error("power series linear term must be nonzero")]
    LinearTermZero,
    #[error("resultant quotient does not fit in {nbits} bits")]
    ResultantBoundExceeded { nbits: u64 },
}

impl From<DomainError> for std::io::Error {
    fn from(err: DomainError) -> Self {
        Self::new(std::io::ErrorKind::InvalidInput, err)
    }
}

/// Failure to parse the `LEN  c0 c1 ...` text form of a polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum ParsePolynomialError {
    #[error("empty input")]
    Empty,
    #[error("invalid length field {0:?}")]
    InvalidLength(String),
    #[error("invalid coefficient {0:?}")]
    InvalidCoefficient(String),
    #[error("expected {expected} coefficients, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

impl From<ParsePolynomialError> for std::io::Error {
    fn from(err: ParsePolynomialError) -> Self {
        Self::new(std::io::ErrorKind::InvalidData, err)
    }
}
