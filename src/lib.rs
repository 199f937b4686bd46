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

//! Exact rational arithmetic over generic integer representations.
//!
//! The [`Fraction`] type keeps every value in canonical form (reduced,
//! with a non-negative denominator) after each operation, and factors
//! shared divisors out through the gcd instead of cross-multiplying
//! naively, so intermediate values stay as small as the math allows.
//! Useful wherever floating-point rounding is unacceptable, such as
//! computational geometry or combinatorics.

pub mod fraction;
pub mod integer;

pub use fraction::Fraction;
pub use integer::{abs, gcd, lcm, Integer};
