//! Complex-plane geometry
//!
//! Provides scaled complex division and the Möbius transforms between
//! normalized load impedance and reflection coefficient.

use num_complex::Complex64;

use crate::error::{PlotError, Result};

const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Divide `num` by `den`, returning `None` when `den` is zero.
///
/// Uses Smith's scaled algorithm so operands near `f64::MAX` do not overflow
/// the intermediate `|den|²` (the naive `Div` impl returns NaN there).
pub fn checked_div(num: Complex64, den: Complex64) -> Option<Complex64> {
    let (a, b, c, d) = (num.re, num.im, den.re, den.im);
    if c == 0.0 && d == 0.0 {
        return None;
    }
    if c.abs() >= d.abs() {
        let r = d / c;
        let t = c + d * r;
        Some(Complex64::new((a + b * r) / t, (b - a * r) / t))
    } else {
        let r = c / d;
        let t = c * r + d;
        Some(Complex64::new((a * r + b) / t, (b * r - a) / t))
    }
}

/// Polar form `(|z|, arg z)`, with the phase from `atan2(im, re)`
#[inline]
pub fn polar(z: Complex64) -> (f64, f64) {
    z.to_polar()
}

/// Reflection coefficient of a normalized load: `Γ = (z − 1) / (z + 1)`
///
/// Fails with [`PlotError::SingularTransform`] at `z = −1`.
pub fn load_to_gamma(z_normalized: Complex64) -> Result<Complex64> {
    checked_div(z_normalized - ONE, z_normalized + ONE).ok_or(PlotError::SingularTransform {
        transform: "load_to_gamma",
        re: z_normalized.re,
        im: z_normalized.im,
    })
}

/// Normalized load impedance of a reflection coefficient: `z = (1 + Γ) / (1 − Γ)`
///
/// Fails with [`PlotError::SingularTransform`] at `Γ = 1` (open circuit).
pub fn gamma_to_load_normalized(gamma: Complex64) -> Result<Complex64> {
    checked_div(ONE + gamma, ONE - gamma).ok_or(PlotError::SingularTransform {
        transform: "gamma_to_load_normalized",
        re: gamma.re,
        im: gamma.im,
    })
}

/// Load impedance in ohms for reference impedance `z0`
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use rfplot_core::math::gamma_to_load;
/// let z = gamma_to_load(Complex64::new(0.0, 0.0), Complex64::new(50.0, 0.0)).unwrap();
/// assert_eq!(z, Complex64::new(50.0, 0.0));
/// ```
pub fn gamma_to_load(gamma: Complex64, z0: Complex64) -> Result<Complex64> {
    Ok(z0 * gamma_to_load_normalized(gamma)?)
}
