// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! The `LEN  c0 c1 ...` serialization and the algebraic pretty printer.

use crate::{error::ParsePolynomialError, polynomial::RationalPolynomial};
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::{fmt, str::FromStr};

/// Writes `len`, two spaces, then the coefficients from the constant term up,
/// each as `n` or `n/d` in lowest terms. The zero polynomial is `0`.
impl fmt::Display for RationalPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.len())?;
        for (index, coefficient) in self.coefficients().iter().enumerate() {
            let separator = if index == 0 { "  " } else { " " };
            write!(f, "{}{}", separator, coefficient)?;
        }
        Ok(())
    }
}

/// Parses the [`Display`](fmt::Display) form. Tokens may be separated by any
/// whitespace; trailing zero coefficients are dropped.
impl FromStr for RationalPolynomial {
    type Err = ParsePolynomialError;
    fn from_str(text: &str) -> Result<Self, ParsePolynomialError> {
        let mut tokens = text.split_whitespace();
        let len_token = tokens.next().ok_or(ParsePolynomialError::Empty)?;
        let expected: usize = len_token
            .parse()
            .map_err(|_| ParsePolynomialError::InvalidLength(len_token.into()))?;
        let coefficients = tokens
            .map(|token| {
                token
                    .parse::<BigRational>()
                    .map_err(|_| ParsePolynomialError::InvalidCoefficient(token.into()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if coefficients.len() != expected {
            return Err(ParsePolynomialError::LengthMismatch {
                expected,
                found: coefficients.len(),
            });
        }
        Ok(Self::from(coefficients))
    }
}

/// Algebraic rendering of a polynomial in a named variable, highest degree
/// first, such as `-3/10*t^4+13/20*t^3+6/5*t+1/6`.
#[derive(Copy, Clone, Debug)]
pub struct Pretty<'a> {
    polynomial: &'a RationalPolynomial,
    variable: &'a str,
}

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.polynomial.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (power, coefficient) in self.polynomial.coefficients().iter().enumerate().rev() {
            if coefficient.is_zero() {
                continue;
            }
            if coefficient.is_positive() && !first {
                write!(f, "+")?;
            }
            first = false;
            if power == 0 {
                write!(f, "{}", coefficient)?;
                continue;
            }
            if (-coefficient).is_one() {
                write!(f, "-")?;
            } else if !coefficient.is_one() {
                write!(f, "{}*", coefficient)?;
            }
            match power {
                1 => write!(f, "{}", self.variable)?,
                _ => write!(f, "{}^{}", self.variable, power)?,
            }
        }
        Ok(())
    }
}

impl RationalPolynomial {
    /// see [`Pretty`]
    pub fn pretty<'a>(&'a self, variable: &'a str) -> Pretty<'a> {
        Pretty {
            polynomial: self,
            variable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        polynomial::tests::{int_poly, poly},
        util::tests::test_rng,
    };

    #[test]
    fn test_display() {
        assert_eq!(int_poly(&[]).to_string(), "0");
        assert_eq!(int_poly(&[1, 1]).to_string(), "2  1 1");
        assert_eq!(
            poly(&[(1, 2), (0, 1), (-3, 5)]).to_string(),
            "3  1/2 0 -3/5"
        );
    }

    #[test]
    fn test_parse() {
        let parse = |text: &str| text.parse::<RationalPolynomial>();
        assert_eq!(parse("2  1 1"), Ok(int_poly(&[1, 1])));
        assert_eq!(
            parse("4  1/3 2 3/2 -1/2"),
            Ok(poly(&[(1, 3), (2, 1), (3, 2), (-1, 2)]))
        );
        assert_eq!(parse("0"), Ok(int_poly(&[])));
        assert_eq!(parse(" 3\t2/4\n0  0 "), Ok(poly(&[(1, 2)])));
        assert_eq!(parse("2  6/4 -0"), Ok(poly(&[(3, 2)])));
    }

    #[test]
    fn test_parse_errors() {
        let parse = |text: &str| text.parse::<RationalPolynomial>();
        assert_eq!(
            parse("0  0"),
            Err(ParsePolynomialError::LengthMismatch {
                expected: 0,
                found: 1
            })
        );
        assert_eq!(
            parse("2 X1 0"),
            Err(ParsePolynomialError::InvalidCoefficient("X1".into()))
        );
        assert_eq!(parse(""), Err(ParsePolynomialError::Empty));
        assert_eq!(parse("  \n"), Err(ParsePolynomialError::Empty));
        assert_eq!(
            parse("-1  3"),
            Err(ParsePolynomialError::InvalidLength("-1".into()))
        );
        assert_eq!(
            parse("2  1/0 3"),
            Err(ParsePolynomialError::InvalidCoefficient("1/0".into()))
        );
        assert_eq!(
            parse("3  1 2"),
            Err(ParsePolynomialError::LengthMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_round_trip() {
        let mut rng = test_rng();
        for len in 0..12 {
            let p = RationalPolynomial::random(&mut rng, len, 40);
            assert_eq!(p.to_string().parse::<RationalPolynomial>(), Ok(p));
        }
    }

    #[test]
    fn test_pretty() {
        let a: RationalPolynomial = "2  1/2 3/5".parse().unwrap();
        let b: RationalPolynomial = "4  1/3 2 3/2 -1/2".parse().unwrap();
        assert_eq!(
            (a * b).pretty("t").to_string(),
            "-3/10*t^4+13/20*t^3+39/20*t^2+6/5*t+1/6"
        );
        assert_eq!(int_poly(&[]).pretty("x").to_string(), "0");
        assert_eq!(int_poly(&[-1, 0, 1]).pretty("x").to_string(), "x^2-1");
        assert_eq!(int_poly(&[1, -1]).pretty("y").to_string(), "-y+1");
        assert_eq!(int_poly(&[0, 2, 0, -1]).pretty("x").to_string(), "-x^3+2*x");
        assert_eq!(poly(&[(-5, 3)]).pretty("x").to_string(), "-5/3");
    }
}
