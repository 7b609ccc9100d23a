//! Scalar and complex number types used by the transforms.
//!
//! [`Float`] is a minimal abstraction over `f32` and `f64` so every transform
//! can run at either precision. [`Complex`] is a plain two-field value type
//! with the arithmetic the FFT needs.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// Minimal float trait for generic FFT (no_std, libm fallback)
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_f64(x: f64) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn sqrt(self) -> Self;
}

// `f32::sqrt(self)` and `f32::sin_cos(self)` resolve to the inherent methods,
// not back into the trait, but the recursion lint still fires on them.
#[allow(unconditional_recursion)]
impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    fn sin_cos(self) -> (Self, Self) {
        #[cfg(feature = "std")]
        {
            f32::sin_cos(self)
        }
        #[cfg(not(feature = "std"))]
        {
            (libm::sinf(self), libm::cosf(self))
        }
    }
    fn sqrt(self) -> Self {
        #[cfg(feature = "std")]
        {
            f32::sqrt(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sqrtf(self)
        }
    }
}

#[allow(unconditional_recursion)]
impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x
    }
    fn sin_cos(self) -> (Self, Self) {
        #[cfg(feature = "std")]
        {
            f64::sin_cos(self)
        }
        #[cfg(not(feature = "std"))]
        {
            (libm::sin(self), libm::cos(self))
        }
    }
    fn sqrt(self) -> Self {
        #[cfg(feature = "std")]
        {
            f64::sqrt(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sqrt(self)
        }
    }
}

/// A complex number with real part `re` and imaginary part `im`.
///
/// Arithmetic never checks its operands: dividing by a zero scalar or a zero
/// complex value yields infinities or NaN as IEEE-754 dictates.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
    pub fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }
    /// Complex value with imaginary part zero.
    pub fn from_real(re: T) -> Self {
        Self { re, im: T::zero() }
    }
    /// `(cos theta, sin theta)`
    #[inline(always)]
    pub fn expi(theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { re: cos, im: sin }
    }

    #[inline(always)]
    pub fn real(&self) -> T {
        self.re
    }
    #[inline(always)]
    pub fn imag(&self) -> T {
        self.im
    }
    #[inline(always)]
    pub fn real_mut(&mut self) -> &mut T {
        &mut self.re
    }
    #[inline(always)]
    pub fn imag_mut(&mut self) -> &mut T {
        &mut self.im
    }

    /// Overwrite with a real scalar, clearing the imaginary part.
    #[inline(always)]
    pub fn set_real(&mut self, re: T) {
        self.re = re;
        self.im = T::zero();
    }

    #[inline(always)]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Squared magnitude, `re² + im²`.
    #[inline(always)]
    pub fn norm2(self) -> T {
        self.re * self.re + self.im * self.im
    }

    #[inline(always)]
    pub fn norm(self) -> T {
        self.norm2().sqrt()
    }

    /// Scale both components by `s`.
    #[inline(always)]
    pub fn scale(self, s: T) -> Self {
        Self {
            re: self.re * s,
            im: self.im * s,
        }
    }
}

impl<T: Float> Default for Complex<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Float> From<T> for Complex<T> {
    fn from(re: T) -> Self {
        Self::from_real(re)
    }
}

impl<T: Float> Neg for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: Float> Add for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl<T: Float> Sub for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
}

impl<T: Float> Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

impl<T: Float> Div for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn div(self, other: Self) -> Self {
        let inv = T::one() / other.norm2();
        Self {
            re: inv * (self.re * other.re + self.im * other.im),
            im: inv * (self.im * other.re - self.re * other.im),
        }
    }
}

// Scalar on the right: `+`/`-` touch the real part only, `*`/`/` scale both.
impl<T: Float> Add<T> for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, s: T) -> Self {
        Self {
            re: self.re + s,
            im: self.im,
        }
    }
}

impl<T: Float> Sub<T> for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, s: T) -> Self {
        Self {
            re: self.re - s,
            im: self.im,
        }
    }
}

impl<T: Float> Mul<T> for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, s: T) -> Self {
        self.scale(s)
    }
}

impl<T: Float> Div<T> for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn div(self, s: T) -> Self {
        Self {
            re: self.re / s,
            im: self.im / s,
        }
    }
}

impl<T: Float> AddAssign for Complex<T> {
    #[inline(always)]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: Float> SubAssign for Complex<T> {
    #[inline(always)]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T: Float> MulAssign for Complex<T> {
    #[inline(always)]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl<T: Float> DivAssign for Complex<T> {
    #[inline(always)]
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}

impl<T: Float> AddAssign<T> for Complex<T> {
    #[inline(always)]
    fn add_assign(&mut self, s: T) {
        self.re = self.re + s;
    }
}

impl<T: Float> SubAssign<T> for Complex<T> {
    #[inline(always)]
    fn sub_assign(&mut self, s: T) {
        self.re = self.re - s;
    }
}

impl<T: Float> MulAssign<T> for Complex<T> {
    #[inline(always)]
    fn mul_assign(&mut self, s: T) {
        self.re = self.re * s;
        self.im = self.im * s;
    }
}

impl<T: Float> DivAssign<T> for Complex<T> {
    #[inline(always)]
    fn div_assign(&mut self, s: T) {
        self.re = self.re / s;
        self.im = self.im / s;
    }
}

// Scalar on the left. Coherence rules force one impl per concrete float.
// All three mirror the right-hand forms, so `s - c == c - s`.
// No `scalar / Complex`: convert with `Complex::from` first.
macro_rules! scalar_lhs_ops {
    ($($t:ty),*) => {$(
        impl Add<Complex<$t>> for $t {
            type Output = Complex<$t>;
            #[inline(always)]
            fn add(self, c: Complex<$t>) -> Complex<$t> {
                c + self
            }
        }

        impl Sub<Complex<$t>> for $t {
            type Output = Complex<$t>;
            #[inline(always)]
            fn sub(self, c: Complex<$t>) -> Complex<$t> {
                c - self
            }
        }

        impl Mul<Complex<$t>> for $t {
            type Output = Complex<$t>;
            #[inline(always)]
            fn mul(self, c: Complex<$t>) -> Complex<$t> {
                c.scale(self)
            }
        }
    )*};
}

scalar_lhs_ops!(f32, f64);

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_complex_operations() {
        let a = Complex64::new(1.0, -2.0);
        let b = Complex64::new(3.0, 4.0);
        let c = a * b;
        assert!((c.re - (1.0 * 3.0 - (-2.0) * 4.0)).abs() < 1e-12);
        assert!((c.im - (1.0 * 4.0 + (-2.0) * 3.0)).abs() < 1e-12);
        let n = -a;
        assert_eq!(n.re, -1.0);
        assert_eq!(n.im, 2.0);
        let e = Complex64::expi(core::f64::consts::PI);
        assert!((e.re + 1.0).abs() < 1e-12);
        assert!(e.im.abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_div_inverts_mul(
            ar in -100.0f64..100.0, ai in -100.0f64..100.0,
            br in 0.5f64..100.0, bi in -100.0f64..100.0,
        ) {
            let a = Complex64::new(ar, ai);
            let b = Complex64::new(br, bi);
            let back = (a * b) / b;
            prop_assert!((back.re - a.re).abs() < 1e-9);
            prop_assert!((back.im - a.im).abs() < 1e-9);
        }

        #[test]
        fn prop_conj_product_is_norm2(re in -1e3f64..1e3, im in -1e3f64..1e3) {
            let a = Complex64::new(re, im);
            let p = a * a.conj();
            prop_assert!((p.re - a.norm2()).abs() <= 1e-9 * a.norm2().max(1.0));
            prop_assert!(p.im.abs() <= 1e-9 * a.norm2().max(1.0));
        }
    }
}
