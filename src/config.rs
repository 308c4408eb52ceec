// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Algorithm crossover points.
//!
//! Tuning only ever selects between algorithms that compute identical
//! results, so changing any of these values never changes an answer.

use lazy_static::lazy_static;
use log::warn;
use std::env;

/// Lengths at which the dispatching operations switch algorithms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tuning {
    /// shortest operand length for which integer multiplication uses Karatsuba
    pub karatsuba_cutoff: usize,
    /// precision at or below which `inv_series` uses the basecase recurrence
    pub inv_series_newton_cutoff: usize,
    /// precision at or below which `exp_series` uses the basecase recurrence
    pub exp_series_newton_cutoff: usize,
    /// divisor length at or above which division uses Newton inversion
    pub divrem_newton_cutoff: usize,
    /// outer polynomial length at or below which composition uses Horner's rule
    pub compose_horner_cutoff: usize,
    /// precision at or below which reversion uses plain Lagrange inversion
    pub revert_lagrange_cutoff: usize,
    /// precision at or below which Newton reversion stops halving and seeds
    /// from Lagrange inversion
    pub revert_newton_cutoff: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            karatsuba_cutoff: 16,
            inv_series_newton_cutoff: 8,
            exp_series_newton_cutoff: 24,
            divrem_newton_cutoff: 32,
            compose_horner_cutoff: 8,
            revert_lagrange_cutoff: 12,
            revert_newton_cutoff: 8,
        }
    }
}

fn read_env_override(name: &str, value: &mut usize) {
    let text = match env::var(name) {
        Ok(text) => text,
        Err(env::VarError::NotPresent) => return,
        Err(err) => {
            warn!("ignoring {}: {}", name, err);
            return;
        }
    };
    match text.trim().parse::<usize>() {
        Ok(parsed) if parsed > 0 => *value = parsed,
        _ => warn!(
            "ignoring {}={:?}: expected a positive integer, keeping {}",
            name, text, value
        ),
    }
}

lazy_static! {
    static ref GLOBAL_TUNING: Tuning = Tuning::from_env();
}

impl Tuning {
    /// the built-in values overridden by any `RATPOLY_*` environment variables
    pub fn from_env() -> Self {
        let mut retval = Self::default();
        read_env_override("RATPOLY_KARATSUBA_CUTOFF", &mut retval.karatsuba_cutoff);
        read_env_override(
            "RATPOLY_INV_SERIES_NEWTON_CUTOFF",
            &mut retval.inv_series_newton_cutoff,
        );
        read_env_override(
            "RATPOLY_EXP_SERIES_NEWTON_CUTOFF",
            &mut retval.exp_series_newton_cutoff,
        );
        read_env_override(
            "RATPOLY_DIVREM_NEWTON_CUTOFF",
            &mut retval.divrem_newton_cutoff,
        );
        read_env_override(
            "RATPOLY_COMPOSE_HORNER_CUTOFF",
            &mut retval.compose_horner_cutoff,
        );
        read_env_override(
            "RATPOLY_REVERT_LAGRANGE_CUTOFF",
            &mut retval.revert_lagrange_cutoff,
        );
        read_env_override(
            "RATPOLY_REVERT_NEWTON_CUTOFF",
            &mut retval.revert_newton_cutoff,
        );
        retval
    }
    /// process-wide tuning, read from the environment on first use
    pub fn global() -> &'static Tuning {
        &GLOBAL_TUNING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_env_override() {
        let mut value = 5;
        env::set_var("RATPOLY_TEST_OVERRIDE_VALID", " 42 ");
        read_env_override("RATPOLY_TEST_OVERRIDE_VALID", &mut value);
        assert_eq!(value, 42);
        env::set_var("RATPOLY_TEST_OVERRIDE_ZERO", "0");
        read_env_override("RATPOLY_TEST_OVERRIDE_ZERO", &mut value);
        assert_eq!(value, 42);
        env::set_var("RATPOLY_TEST_OVERRIDE_GARBAGE", "lots");
        read_env_override("RATPOLY_TEST_OVERRIDE_GARBAGE", &mut value);
        assert_eq!(value, 42);
        read_env_override("RATPOLY_TEST_OVERRIDE_MISSING", &mut value);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_default_cutoffs_positive() {
        let tuning = Tuning::default();
        assert!(tuning.karatsuba_cutoff > 1);
        assert!(tuning.inv_series_newton_cutoff > 0);
        assert!(tuning.exp_series_newton_cutoff > 0);
        assert!(tuning.revert_newton_cutoff > 1);
    }
}
