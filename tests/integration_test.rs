/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use ratl::{gcd, Fraction};

/// Walks the canonical usage scenarios end to end through the public API.
#[test]
fn test_canonical_scenarios() {
	assert_eq!(Fraction::new(4i64, 8).to_string(), "(1/2)");
	assert_eq!(Fraction::new(3i64, -6).to_string(), "(-1/2)");

	assert_eq!(
		Fraction::new(1i64, 2) * Fraction::new(2, 3),
		Fraction::new(1, 3)
	);
	assert_eq!(
		Fraction::new(1i64, 2) / Fraction::new(1, 4),
		Fraction::new(2, 1)
	);
	assert_eq!(
		Fraction::new(1i64, 3) + Fraction::new(1, 6),
		Fraction::new(1, 2)
	);

	assert!(Fraction::new(1i64, 2) < Fraction::new(2, 3));
	assert!(!(Fraction::new(2i64, 3) < Fraction::new(1, 2)));
}

#[test]
fn test_integer_interop() {
	assert!(Fraction::new(6i64, 3) == 2);
	assert!(2 == Fraction::new(6i64, 3));
	assert_eq!(Fraction::new(1i64, 2) + 1, Fraction::new(3, 2));
	assert_eq!(1 + Fraction::new(1i64, 2), Fraction::new(3, 2));
	assert_eq!(2 - Fraction::new(1i64, 2), Fraction::new(3, 2));
	assert_eq!(3 * Fraction::new(1i64, 3), Fraction::new(1, 1));
}

#[test]
fn test_every_operation_stays_canonical() {
	let a = Fraction::new(6i64, 4);
	let b = Fraction::new(-10i64, 15);

	for frac in [a + b, a - b, a * b, a / b, -a, a.recip(), a.abs()] {
		assert!(frac.den() > 0);
		assert_eq!(gcd(frac.num(), frac.den()), 1);
	}
}

#[test]
fn test_division_by_zero_is_total() {
	let infinity = Fraction::new(1i64, 1) / Fraction::zero();
	assert_eq!(infinity.den(), 0);
	assert_eq!(infinity.num(), 1);

	// The degenerate values participate in ordering like any other.
	assert!(Fraction::new(-1i64, 0) < Fraction::new(i64::MIN + 1, 1));
	assert!(Fraction::new(i64::MAX, 1) < Fraction::new(1, 0));
}

#[test]
fn test_mixed_width_comparison() {
	let coarse = Fraction::new(1i32, 3);
	let fine = Fraction::new(1i64, 3);
	assert!(fine == coarse);
	assert!(Fraction::new(1i64, 2) > coarse);
}

#[test]
fn test_accumulation() {
	// Harmonic-style sums are the classic precision trap for floats;
	// the exact type must land on the closed form.
	let total: Fraction<i64> =
		(1..=6).map(|d| Fraction::new(1, d)).sum();
	assert_eq!(total, Fraction::new(49, 20));
}

#[test]
fn test_parse_and_render() {
	let parsed = Fraction::<i64>::from_str("21/-35").unwrap();
	assert_eq!(parsed.to_string(), "(-3/5)");

	let round_tripped =
		Fraction::<i64>::from_str(&parsed.to_string()).unwrap();
	assert_eq!(round_tripped, parsed);

	assert!(Fraction::<i64>::from_str("not a fraction").is_err());
}

#[test]
fn test_serde_round_trip() {
	let frac = Fraction::new(22i64, 7);
	let json = serde_json::to_string(&frac).unwrap();
	let back: Fraction<i64> = serde_json::from_str(&json).unwrap();
	assert_eq!(back, frac);

	let normalized: Fraction<i64> =
		serde_json::from_str(r#"{"num":-4,"den":-6}"#).unwrap();
	assert_eq!(normalized, Fraction::new(2, 3));
}
