/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The `Math` functional surface: pure numeric functions with no hidden
//! state, following ECMA-262's tie-break rules rather than Rust's own
//! `f64` method defaults (which disagree on zero-argument `min`/`max` and
//! on half-way rounding direction).

use rand::Rng;

pub const E: f64 = std::f64::consts::E;
pub const LN10: f64 = std::f64::consts::LN_10;
pub const LN2: f64 = std::f64::consts::LN_2;
pub const LOG10E: f64 = std::f64::consts::LOG10_E;
pub const LOG2E: f64 = std::f64::consts::LOG2_E;
pub const PI: f64 = std::f64::consts::PI;
pub const SQRT1_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
pub const SQRT2: f64 = std::f64::consts::SQRT_2;

pub fn abs(x: f64) -> f64 {
	x.abs()
}

pub fn acos(x: f64) -> f64 {
	x.acos()
}

pub fn asin(x: f64) -> f64 {
	x.asin()
}

pub fn atan(x: f64) -> f64 {
	x.atan()
}

pub fn atan2(y: f64, x: f64) -> f64 {
	y.atan2(x)
}

pub fn ceil(x: f64) -> f64 {
	x.ceil()
}

pub fn cos(x: f64) -> f64 {
	x.cos()
}

pub fn exp(x: f64) -> f64 {
	x.exp()
}

pub fn floor(x: f64) -> f64 {
	x.floor()
}

pub fn log(x: f64) -> f64 {
	x.ln()
}

pub fn pow(x: f64, y: f64) -> f64 {
	x.powf(y)
}

/// Half-toward-positive-infinity, not Rust's round-half-away-from-zero:
/// `round(-0.5) == -0.0`, `round(0.5) == 1.0`.
pub fn round(x: f64) -> f64 {
	if x.is_nan() || x.is_infinite() {
		return x;
	}
	(x + 0.5).floor()
}

pub fn sin(x: f64) -> f64 {
	x.sin()
}

pub fn sqrt(x: f64) -> f64 {
	x.sqrt()
}

pub fn tan(x: f64) -> f64 {
	x.tan()
}

/// Zero-argument convention: no finite lower bound, so `+∞`. `NaN`
/// poisons the whole reduction. `min(+0, -0)` resolves to `-0`.
pub fn min(values: &[f64]) -> f64 {
	let mut acc = f64::INFINITY;
	for &v in values {
		if v.is_nan() {
			return f64::NAN;
		}
		if v < acc || (v == 0.0 && acc == 0.0 && v.is_sign_negative()) {
			acc = v;
		}
	}
	acc
}

/// Mirror of [`min`]: zero-argument identity is `-∞`, and `max(+0, -0)`
/// resolves to `+0`.
pub fn max(values: &[f64]) -> f64 {
	let mut acc = f64::NEG_INFINITY;
	for &v in values {
		if v.is_nan() {
			return f64::NAN;
		}
		if v > acc || (v == 0.0 && acc == 0.0 && v.is_sign_positive()) {
			acc = v;
		}
	}
	acc
}

pub fn random() -> f64 {
	rand::thread_rng().gen_range(0.0..1.0)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_breaks_ties_toward_positive_infinity() {
		assert_eq!(round(0.5), 1.0);
		assert!(round(-0.5).is_sign_negative());
		assert_eq!(round(-0.5), -0.0);
	}

	#[test]
	fn min_max_zero_argument_identities() {
		assert_eq!(min(&[]), f64::INFINITY);
		assert_eq!(max(&[]), f64::NEG_INFINITY);
	}

	#[test]
	fn min_max_signed_zero_tiebreak() {
		assert!(min(&[0.0, -0.0]).is_sign_negative());
		assert!(max(&[0.0, -0.0]).is_sign_positive());
	}

	#[test]
	fn nan_argument_poisons_min_max() {
		assert!(min(&[1.0, f64::NAN, 2.0]).is_nan());
		assert!(max(&[1.0, f64::NAN, 2.0]).is_nan());
	}

	#[test]
	fn random_is_in_unit_range() {
		let r = random();
		assert!((0.0..1.0).contains(&r));
	}
}
