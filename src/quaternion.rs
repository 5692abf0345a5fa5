//! Quaternions.

use crate::error::{QuaternionError, Result};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{fmt, iter};

/// A quaternion `r + i𝐢 + j𝐣 + k𝐤` with double-precision components.
///
/// Any four reals form a valid quaternion, including all zeros. Quaternions
/// are plain values: every operation returns a new quaternion and leaves its
/// operands untouched.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Quaternion {
    /// Real (scalar) component.
    pub r: f64,
    /// Coefficient of 𝐢.
    pub i: f64,
    /// Coefficient of 𝐣.
    pub j: f64,
    /// Coefficient of 𝐤.
    pub k: f64,
}

impl Quaternion {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const I: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const J: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const K: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(r: f64, i: f64, j: f64, k: f64) -> Self {
        Self { r, i, j, k }
    }

    /// Creates a quaternion with the given real part and no imaginary part.
    #[inline]
    pub const fn from_real(r: f64) -> Self {
        Self::new(r, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn one() -> Self {
        Self::ONE
    }

    #[inline]
    pub const fn unit_i() -> Self {
        Self::I
    }

    #[inline]
    pub const fn unit_j() -> Self {
        Self::J
    }

    #[inline]
    pub const fn unit_k() -> Self {
        Self::K
    }

    #[inline]
    pub fn real(&self) -> f64 {
        self.r
    }

    /// Returns the imaginary (vector) part as a quaternion with zero real
    /// part.
    #[inline]
    pub fn imag(&self) -> Self {
        Self::new(0.0, self.i, self.j, self.k)
    }

    #[inline]
    pub fn conj(&self) -> Self {
        Self::new(self.r, -self.i, -self.j, -self.k)
    }

    /// Computes the quadratic norm, i.e. the sum of the squared components.
    /// This is the square of [`Self::abs`].
    #[inline]
    pub fn norm(&self) -> f64 {
        self.r * self.r + self.imag_norm()
    }

    /// Computes the Euclidean magnitude (length, modulus) of the quaternion.
    /// Unlike `self.norm().sqrt()`, this does not overflow or underflow for
    /// components whose squares are out of range.
    #[inline]
    pub fn abs(&self) -> f64 {
        magnitude(self.r, self.i, self.j, self.k)
    }

    /// Computes the magnitude of the imaginary part.
    #[inline]
    pub fn imag_abs(&self) -> f64 {
        magnitude(0.0, self.i, self.j, self.k)
    }

    /// Whether all four components are zero (of either sign).
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.i.is_finite() && self.j.is_finite() && self.k.is_finite()
    }

    /// Returns the quaternion scaled to unit magnitude. The zero quaternion
    /// has no direction, so it is returned unchanged.
    pub fn signum(&self) -> Self {
        if self.is_zero() {
            log::trace!("Took signum of zero quaternion, returning zero");
            return Self::ZERO;
        }
        let scaled = self / self.max_abs_component();
        scaled / scaled.abs()
    }

    /// Like [`Self::signum`], but fails for the zero quaternion instead of
    /// returning zero.
    ///
    /// # Errors
    /// Returns [`QuaternionError::NoDirection`] for the zero quaternion and
    /// [`QuaternionError::NonFinite`] if any component is infinite or NaN.
    pub fn try_signum(&self) -> Result<Self> {
        self.require_nonzero(QuaternionError::NoDirection)?;
        Ok(self.signum())
    }

    /// Computes the multiplicative inverse `q⁻¹ = q* / |q|²`, for which
    /// `q * q⁻¹ = q⁻¹ * q = 1`. The zero quaternion has no inverse, so zero is
    /// returned for it.
    pub fn inv(&self) -> Self {
        if self.is_zero() {
            log::trace!("Took inverse of zero quaternion, returning zero");
            return Self::ZERO;
        }
        // q* / |q|² = (q* / m) / (|q / m|² m) for the largest component m,
        // which keeps the squared norm in range
        let scale = self.max_abs_component();
        let scaled = self / scale;
        scaled.conj() / (scaled.norm() * scale)
    }

    /// Like [`Self::inv`], but fails for the zero quaternion instead of
    /// returning zero.
    ///
    /// # Errors
    /// Returns [`QuaternionError::NotInvertible`] for the zero quaternion and
    /// [`QuaternionError::NonFinite`] if any component is infinite or NaN.
    pub fn try_inv(&self) -> Result<Self> {
        self.require_nonzero(QuaternionError::NotInvertible)?;
        Ok(self.inv())
    }

    /// Computes the exponential `e^q`.
    ///
    /// With `u` the magnitude of the imaginary part `v`, the result is
    /// `eʳ (cos u + v sin(u) / u)`. A purely real quaternion gives the real
    /// exponential.
    pub fn exp(&self) -> Self {
        let exp_real = self.r.exp();
        let imag_abs = self.imag_abs();

        if imag_abs == 0.0 {
            return Self::from_real(exp_real);
        }

        let imag_factor = exp_real * imag_abs.sin() / imag_abs;

        Self::new(
            exp_real * imag_abs.cos(),
            imag_factor * self.i,
            imag_factor * self.j,
            imag_factor * self.k,
        )
    }

    /// Computes the principal natural logarithm.
    ///
    /// With `u` the magnitude of the imaginary part `v`, the result is
    /// `ln|q| + v acos(r / |q|) / u`. The imaginary part of the result thus
    /// always has magnitude in `[0, π]`, so `q.exp().ln()` only recovers `q`
    /// when the imaginary magnitude of `q` is below π.
    ///
    /// A purely real quaternion gives `ln|r|` with no imaginary part, also
    /// for negative `r`. The zero quaternion gives a real part of negative
    /// infinity; use [`Self::try_ln`] to reject it instead.
    pub fn ln(&self) -> Self {
        let abs = self.abs();
        let imag_abs = self.imag_abs();
        let ln_abs = abs.ln();

        if imag_abs == 0.0 {
            if abs == 0.0 {
                log::trace!("Took logarithm of zero quaternion, returning negative infinity");
            }
            return Self::from_real(ln_abs);
        }

        // Rounding must not push the cosine outside the domain of `acos`
        let cos_angle = (self.r / abs).clamp(-1.0, 1.0);
        let imag_factor = cos_angle.acos() / imag_abs;

        Self::new(
            ln_abs,
            imag_factor * self.i,
            imag_factor * self.j,
            imag_factor * self.k,
        )
    }

    /// Like [`Self::ln`], but fails for the zero quaternion instead of
    /// returning an infinite real part.
    ///
    /// # Errors
    /// Returns [`QuaternionError::LogarithmOfZero`] for the zero quaternion and
    /// [`QuaternionError::NonFinite`] if any component is infinite or NaN.
    pub fn try_ln(&self) -> Result<Self> {
        self.require_nonzero(QuaternionError::LogarithmOfZero)?;
        Ok(self.ln())
    }

    /// Computes the scalar (dot) product of the two quaternions viewed as
    /// 4-vectors.
    #[inline]
    pub fn scalar_product(&self, other: &Self) -> f64 {
        self.r * other.r + self.i * other.i + self.j * other.j + self.k * other.k
    }

    /// Computes the cross product of the imaginary parts. The real part of
    /// the result is always zero.
    #[inline]
    pub fn cross_product(&self, other: &Self) -> Self {
        Self::new(
            0.0,
            self.j * other.k - self.k * other.j,
            -self.i * other.k + self.k * other.i,
            self.i * other.j - self.j * other.i,
        )
    }

    fn imag_norm(&self) -> f64 {
        self.i * self.i + self.j * self.j + self.k * self.k
    }

    fn max_abs_component(&self) -> f64 {
        max_abs(self.r, self.i, self.j, self.k)
    }

    fn require_nonzero(&self, error: QuaternionError) -> Result<()> {
        if !self.is_finite() {
            return Err(QuaternionError::NonFinite);
        }
        if self.is_zero() {
            return Err(error);
        }
        Ok(())
    }
}

/// Euclidean length of the four components, scaled by the largest one so the
/// squares stay in range.
fn magnitude(r: f64, i: f64, j: f64, k: f64) -> f64 {
    let scale = max_abs(r, i, j, k);
    if scale == 0.0 || scale.is_infinite() {
        return scale;
    }
    let (r, i, j, k) = (r / scale, i / scale, j / scale, k / scale);
    scale * (r * r + i * i + j * j + k * k).sqrt()
}

fn max_abs(r: f64, i: f64, j: f64, k: f64) -> f64 {
    r.abs().max(i.abs()).max(j.abs()).max(k.abs())
}

impl_binop!(Add, add, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(a.r + b.r, a.i + b.i, a.j + b.j, a.k + b.k)
});

impl_binop!(Sub, sub, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(a.r - b.r, a.i - b.i, a.j - b.j, a.k - b.k)
});

// Hamilton product
impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(
        a.r * b.r - a.i * b.i - a.j * b.j - a.k * b.k,
        a.r * b.i + a.i * b.r + a.j * b.k - a.k * b.j,
        a.r * b.j - a.i * b.k + a.j * b.r + a.k * b.i,
        a.r * b.k + a.i * b.j - a.j * b.i + a.k * b.r,
    )
});

// Right division, `a * b⁻¹`
impl_binop!(Div, div, Quaternion, Quaternion, Quaternion, |a, b| {
    a * b.inv()
});

impl_binop!(Mul, mul, Quaternion, f64, Quaternion, |a, s| {
    Quaternion::new(a.r * s, a.i * s, a.j * s, a.k * s)
});

impl_binop!(Div, div, Quaternion, f64, Quaternion, |a, s| {
    Quaternion::new(a.r / s, a.i / s, a.j / s, a.k / s)
});

impl_unary_op!(Neg, neg, Quaternion, Quaternion, |a| {
    Quaternion::new(-a.r, -a.i, -a.j, -a.k)
});

impl_binop_assign!(AddAssign, add_assign, Add, add, Quaternion, Quaternion);
impl_binop_assign!(SubAssign, sub_assign, Sub, sub, Quaternion, Quaternion);
impl_binop_assign!(MulAssign, mul_assign, Mul, mul, Quaternion, Quaternion);

impl_abs_diff_eq!(Quaternion, |a, b, epsilon| {
    a.r.abs_diff_eq(&b.r, epsilon)
        && a.i.abs_diff_eq(&b.i, epsilon)
        && a.j.abs_diff_eq(&b.j, epsilon)
        && a.k.abs_diff_eq(&b.k, epsilon)
});

impl_relative_eq!(Quaternion, |a, b, epsilon, max_relative| {
    a.r.relative_eq(&b.r, epsilon, max_relative)
        && a.i.relative_eq(&b.i, epsilon, max_relative)
        && a.j.relative_eq(&b.j, epsilon, max_relative)
        && a.k.relative_eq(&b.k, epsilon, max_relative)
});

impl num_traits::Zero for Quaternion {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Quaternion::is_zero(self)
    }
}

impl num_traits::One for Quaternion {
    fn one() -> Self {
        Self::ONE
    }
}

impl num_traits::Inv for Quaternion {
    type Output = Self;

    fn inv(self) -> Self {
        Quaternion::inv(&self)
    }
}

impl iter::Sum for Quaternion {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, q| acc + q)
    }
}

impl<'a> iter::Sum<&'a Quaternion> for Quaternion {
    fn sum<I: Iterator<Item = &'a Quaternion>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, q| acc + q)
    }
}

/// Multiplies the quaternions left to right.
impl iter::Product for Quaternion {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, q| acc * q)
    }
}

impl From<f64> for Quaternion {
    fn from(r: f64) -> Self {
        Self::from_real(r)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from([r, i, j, k]: [f64; 4]) -> Self {
        Self::new(r, i, j, k)
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(q: Quaternion) -> Self {
        [q.r, q.i, q.j, q.k]
    }
}

impl From<nalgebra::Quaternion<f64>> for Quaternion {
    fn from(q: nalgebra::Quaternion<f64>) -> Self {
        Self::new(q.w, q.i, q.j, q.k)
    }
}

impl From<Quaternion> for nalgebra::Quaternion<f64> {
    fn from(q: Quaternion) -> Self {
        nalgebra::Quaternion::new(q.r, q.i, q.j, q.k)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_component(f, self.r)?;
        for (value, unit) in [(self.i, 'i'), (self.j, 'j'), (self.k, 'k')] {
            if value.is_sign_negative() {
                f.write_str(" - ")?;
                write_component(f, -value)?;
            } else {
                f.write_str(" + ")?;
                write_component(f, value)?;
            }
            write!(f, "{unit}")?;
        }
        Ok(())
    }
}

fn write_component(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    match f.precision() {
        Some(precision) => write!(f, "{value:.precision$}"),
        None => write!(f, "{value}"),
    }
}
