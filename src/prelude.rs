// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
pub use crate::{
    polynomial::RationalPolynomial,
    traits::{Derivative as _, ExtendedGCD as _, PolynomialEval as _, GCD as _},
};
pub use num_traits::{One as _, Pow as _, Signed as _, Zero as _};
