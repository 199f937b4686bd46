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
use crate::integer::{gcd, Integer};
use anyhow::{bail, Error};
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::mem;
use std::ops::{
	Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};
use std::str::FromStr;

/// An exact rational number over a generic integer representation. Every
/// operation leaves the value in canonical form: the denominator is
/// non-negative, the sign lives in the numerator, and the two share no
/// common factor greater than one.
///
/// A zero denominator is a legal, defined state representing signed
/// infinity (e.g. the result of dividing by zero, or the slope of a
/// vertical line). In that state the numerator holds only its sign, one of
/// -1, 0 or 1. The `0/0` value behaves like an "undefined" marker: under
/// the comparison algorithm it compares equal to everything, so callers
/// that need a lawful total order should avoid producing it.
///
/// Arithmetic factors shared divisors out through the gcd before
/// multiplying or scaling, which keeps intermediate magnitudes bounded by
/// the reduced operands rather than their raw products. Overflow of the
/// underlying type is still possible and is not detected.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Fraction<Z> {
	num: Z,
	den: Z,
}

impl<Z: Integer> Fraction<Z> {
	/// Builds a fraction from a numerator and denominator, in any sign
	/// combination, and reduces it to canonical form.
	pub fn new(num: Z, den: Z) -> Self {
		let mut out = Self { num, den };
		out.normalize();
		out
	}

	/// Wraps an integer as a fraction over one. Already canonical, so
	/// no reduction pass runs.
	pub fn from_int(num: Z) -> Self {
		Self {
			num,
			den: Z::ONE,
		}
	}

	/// The additive identity, `0/1`.
	pub fn zero() -> Self {
		Self {
			num: Z::ZERO,
			den: Z::ONE,
		}
	}

	/// The multiplicative identity, `1/1`.
	pub fn one() -> Self {
		Self {
			num: Z::ONE,
			den: Z::ONE,
		}
	}

	pub fn num(&self) -> Z {
		self.num
	}

	pub fn den(&self) -> Z {
		self.den
	}

	/// Re-establishes canonical form: moves the sign to the numerator,
	/// then divides out the greatest common divisor. With a zero
	/// denominator the gcd is the numerator's own magnitude, so the
	/// numerator collapses to its sign, which is how the signed-infinity
	/// encoding is maintained. Operands that are already coprime (always
	/// the case right after gcd-factored arithmetic) fall through on the
	/// cheap path.
	fn normalize(&mut self) {
		if self.den < Z::ZERO {
			self.num = Z::ZERO - self.num;
			self.den = Z::ZERO - self.den;
		}

		let common = gcd(self.num, self.den);
		if common == Z::ZERO || common == Z::ONE {
			return;
		}

		self.num = self.num / common;
		self.den = self.den / common;
	}

	/// Inverts the value in place. Numerator and denominator stay
	/// coprime under the swap, so only the sign needs repair. The
	/// reciprocal of zero is positive infinity and vice versa; both are
	/// defined results, not errors.
	pub fn reciprocal(&mut self) {
		mem::swap(&mut self.num, &mut self.den);
		if self.den < Z::ZERO {
			self.num = Z::ZERO - self.num;
			self.den = Z::ZERO - self.den;
		}
	}

	/// By-value form of [`reciprocal`](Self::reciprocal).
	pub fn recip(self) -> Self {
		let mut out = self;
		out.reciprocal();
		out
	}

	/// The absolute value. The denominator is never negative, so only
	/// the numerator changes.
	pub fn abs(self) -> Self {
		Self {
			num: self.num.abs(),
			den: self.den,
		}
	}

	fn widen<W>(self) -> Fraction<W>
	where
		W: Integer,
		Z: Into<W>,
	{
		Fraction {
			num: self.num.into(),
			den: self.den.into(),
		}
	}

	fn scalar_eq(&self, rhs: Z) -> bool {
		if self.den == Z::ONE || rhs == Z::ZERO {
			self.num == rhs
		} else {
			self.num == self.den * rhs
		}
	}

	fn scalar_cmp(&self, rhs: Z) -> Ordering {
		if self.den == Z::ONE || rhs == Z::ZERO {
			self.num.cmp(&rhs)
		} else {
			self.num.cmp(&(self.den * rhs))
		}
	}
}

impl<Z> Fraction<Z>
where
	Z: Integer + FromStr,
	<Z as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
	/// Parses `"n"`, `"n/d"` or the `"(n/d)"` rendering produced by
	/// [`Display`](fmt::Display). The result is normalized like any
	/// other constructed value.
	pub fn from_str(input: &str) -> Result<Self, Error> {
		let mut sanitized = input.trim();
		if let Some(inner) = sanitized.strip_prefix('(') {
			match inner.strip_suffix(')') {
				Some(inner) => sanitized = inner,
				None => bail!("Unbalanced parentheses in fraction"),
			}
		}

		let parts: Vec<&str> = sanitized.split('/').collect();
		match parts.len() {
			1 => Ok(Self::from_int(parts[0].trim().parse::<Z>()?)),
			2 => Ok(Self::new(
				parts[0].trim().parse::<Z>()?,
				parts[1].trim().parse::<Z>()?,
			)),
			_ => bail!("Invalid fraction format"),
		}
	}
}

/// Divides out a shared factor unless there is none to divide by. A zero
/// gcd only arises when a zero numerator meets a zero denominator, in
/// which case the operands pass through untouched.
fn reduced<Z: Integer>(value: Z, common: Z) -> Z {
	if common == Z::ZERO || common == Z::ONE {
		value
	} else {
		value / common
	}
}

impl<Z: Integer> From<Z> for Fraction<Z> {
	fn from(num: Z) -> Self {
		Self::from_int(num)
	}
}

impl<Z: Integer> Default for Fraction<Z> {
	fn default() -> Self {
		Self::zero()
	}
}

impl<Z: Integer + fmt::Display> fmt::Display for Fraction<Z> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}/{})", self.num, self.den)
	}
}

impl<'de, Z> Deserialize<'de> for Fraction<Z>
where
	Z: Integer + Deserialize<'de>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		// External input may carry an unreduced pair; routing it through
		// the normalizing constructor keeps the invariant unforgeable.
		#[derive(Deserialize)]
		struct RawFraction<Z> {
			num: Z,
			den: Z,
		}

		let raw = RawFraction::deserialize(deserializer)?;
		Ok(Fraction::new(raw.num, raw.den))
	}
}

impl<Z: Integer + Hash> Hash for Fraction<Z> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		// Canonical form makes the field pair unique per value.
		self.num.hash(state);
		self.den.hash(state);
	}
}

// -----------------
// -- COMPARISONS --
// -----------------

impl<Z, U> PartialEq<Fraction<U>> for Fraction<Z>
where
	Z: Integer,
	U: Integer + Into<Z>,
{
	fn eq(&self, other: &Fraction<U>) -> bool {
		self.cmp(&other.widen()) == Ordering::Equal
	}
}

impl<Z: Integer> Eq for Fraction<Z> {}

impl<Z, U> PartialOrd<Fraction<U>> for Fraction<Z>
where
	Z: Integer,
	U: Integer + Into<Z>,
{
	fn partial_cmp(&self, other: &Fraction<U>) -> Option<Ordering> {
		Some(self.cmp(&other.widen()))
	}
}

impl<Z: Integer> Ord for Fraction<Z> {
	fn cmp(&self, other: &Self) -> Ordering {
		if self.den == other.den {
			return self.num.cmp(&other.num);
		}

		// Differing denominators cannot both be zero, so the shared
		// factor is nonzero. Scaling by the reduced denominators keeps
		// the products bounded well below the raw cross-multiplication.
		let common = gcd(self.den, other.den);
		((other.den / common) * self.num)
			.cmp(&((self.den / common) * other.num))
	}
}

// ----------------
// -- ARITHMETIC --
// ----------------

impl<Z> Neg for Fraction<Z>
where
	Z: Integer + Neg<Output = Z>,
{
	type Output = Self;

	fn neg(self) -> Self::Output {
		Self {
			num: -self.num,
			den: self.den,
		}
	}
}

impl<Z: Integer> Add for Fraction<Z> {
	type Output = Self;

	fn add(self, rhs: Self) -> Self::Output {
		if self.den == rhs.den {
			return Self::new(self.num + rhs.num, self.den);
		}

		// Scale each numerator by the other side's reduced denominator;
		// the resulting denominator divides the raw product by the
		// shared factor, which bounds growth.
		let common = gcd(self.den, rhs.den);
		let lhs_scale = rhs.den / common;
		let rhs_scale = self.den / common;

		Self::new(
			self.num * lhs_scale + rhs.num * rhs_scale,
			self.den * lhs_scale,
		)
	}
}

impl<Z> Sub for Fraction<Z>
where
	Z: Integer + Neg<Output = Z>,
{
	type Output = Self;

	fn sub(self, rhs: Self) -> Self::Output {
		self + (-rhs)
	}
}

impl<Z: Integer> Mul for Fraction<Z> {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self::Output {
		// Cross-reduce each numerator against the opposite denominator
		// before multiplying, left operand first, so intermediates stay
		// near the magnitude of the reduced result.
		let common_a = gcd(self.num, rhs.den);
		let common_b = gcd(rhs.num, self.den);

		Self::new(
			reduced(self.num, common_a) * reduced(rhs.num, common_b),
			reduced(self.den, common_b) * reduced(rhs.den, common_a),
		)
	}
}

impl<Z: Integer> Div for Fraction<Z> {
	type Output = Self;

	fn div(self, rhs: Self) -> Self::Output {
		self * rhs.recip()
	}
}

impl<Z: Integer> Add<Z> for Fraction<Z> {
	type Output = Self;

	fn add(self, rhs: Z) -> Self::Output {
		if rhs == Z::ZERO {
			return self;
		}
		if self.den == Z::ONE {
			return Self {
				num: self.num + rhs,
				den: self.den,
			};
		}
		Self::new(self.num + self.den * rhs, self.den)
	}
}

impl<Z> Sub<Z> for Fraction<Z>
where
	Z: Integer + Neg<Output = Z>,
{
	type Output = Self;

	fn sub(self, rhs: Z) -> Self::Output {
		self + (-rhs)
	}
}

impl<Z: Integer> Mul<Z> for Fraction<Z> {
	type Output = Self;

	fn mul(self, rhs: Z) -> Self::Output {
		// Reduce the scalar against the denominator first, shrinking the
		// denominator instead of growing the numerator by the full
		// scalar.
		let common = gcd(rhs, self.den);
		Self::new(
			self.num * reduced(rhs, common),
			reduced(self.den, common),
		)
	}
}

impl<Z: Integer> Div<Z> for Fraction<Z> {
	type Output = Self;

	fn div(self, rhs: Z) -> Self::Output {
		// Symmetric to scalar multiplication: reduce against the
		// numerator first. A zero scalar lands on the signed-infinity
		// encoding rather than trapping.
		let common = gcd(self.num, rhs);
		Self::new(
			reduced(self.num, common),
			self.den * reduced(rhs, common),
		)
	}
}

impl<Z: Integer> AddAssign for Fraction<Z> {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl<Z> SubAssign for Fraction<Z>
where
	Z: Integer + Neg<Output = Z>,
{
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

impl<Z: Integer> MulAssign for Fraction<Z> {
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

impl<Z: Integer> DivAssign for Fraction<Z> {
	fn div_assign(&mut self, rhs: Self) {
		*self = *self / rhs;
	}
}

impl<Z: Integer> AddAssign<Z> for Fraction<Z> {
	fn add_assign(&mut self, rhs: Z) {
		*self = *self + rhs;
	}
}

impl<Z> SubAssign<Z> for Fraction<Z>
where
	Z: Integer + Neg<Output = Z>,
{
	fn sub_assign(&mut self, rhs: Z) {
		*self = *self - rhs;
	}
}

impl<Z: Integer> MulAssign<Z> for Fraction<Z> {
	fn mul_assign(&mut self, rhs: Z) {
		*self = *self * rhs;
	}
}

impl<Z: Integer> DivAssign<Z> for Fraction<Z> {
	fn div_assign(&mut self, rhs: Z) {
		*self = *self / rhs;
	}
}

impl<Z: Integer> Sum for Fraction<Z> {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::zero(), |acc, frac| acc + frac)
	}
}

// Scalar-on-the-left forms and scalar comparisons. Coherence rules rule
// out a single generic impl here, so these are stamped out per primitive
// type.
macro_rules! impl_scalar_interop {
	($($t:ty),+ $(,)?) => {
		$(
			impl Add<Fraction<$t>> for $t {
				type Output = Fraction<$t>;

				fn add(self, rhs: Fraction<$t>) -> Fraction<$t> {
					rhs + self
				}
			}

			impl Mul<Fraction<$t>> for $t {
				type Output = Fraction<$t>;

				fn mul(self, rhs: Fraction<$t>) -> Fraction<$t> {
					rhs * self
				}
			}

			impl PartialEq<$t> for Fraction<$t> {
				fn eq(&self, other: &$t) -> bool {
					self.scalar_eq(*other)
				}
			}

			impl PartialEq<Fraction<$t>> for $t {
				fn eq(&self, other: &Fraction<$t>) -> bool {
					other.scalar_eq(*self)
				}
			}

			impl PartialOrd<$t> for Fraction<$t> {
				fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
					Some(self.scalar_cmp(*other))
				}
			}

			impl PartialOrd<Fraction<$t>> for $t {
				fn partial_cmp(
					&self,
					other: &Fraction<$t>,
				) -> Option<Ordering> {
					Some(other.scalar_cmp(*self).reverse())
				}
			}
		)+
	};
}

macro_rules! impl_scalar_interop_signed {
	($($t:ty),+ $(,)?) => {
		$(
			impl Sub<Fraction<$t>> for $t {
				type Output = Fraction<$t>;

				fn sub(self, rhs: Fraction<$t>) -> Fraction<$t> {
					-rhs + self
				}
			}
		)+
	};
}

impl_scalar_interop!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);
impl_scalar_interop_signed!(i8, i16, i32, i64, i128, isize);
