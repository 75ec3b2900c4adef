//! Generic VSOP87 periodic-series evaluation.
//!
//! A coordinate is a polynomial in T (Julian millennia from J2000.0) whose
//! coefficients are themselves sums of cosine terms:
//!
//! ```text
//! X(T) = Σₙ Tⁿ · Σᵢ Aᵢ cos(Bᵢ + Cᵢ·T)
//! ```
//!
//! Source: Bretagnon & Francou (1988), A&A 202, 309; Meeus, "Astronomical
//! Algorithms" (2nd ed), Chapter 32.

use crate::error::EphemerisError;

/// One periodic term `A·cos(B + C·T)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VsopTerm {
    /// Amplitude, in the table's unit.
    pub amplitude: f64,
    /// Phase (radians).
    pub phase: f64,
    /// Frequency (radians per Julian millennium).
    pub frequency: f64,
}

impl VsopTerm {
    pub const fn new(amplitude: f64, phase: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            phase,
            frequency,
        }
    }
}

/// A coordinate's series: level `n` multiplies Tⁿ.
///
/// `scale` converts the tabulated amplitudes into radians or AU.
#[derive(Debug, Clone, Copy)]
pub struct VsopSeries {
    pub levels: &'static [&'static [VsopTerm]],
    pub scale: f64,
}

impl VsopSeries {
    pub const fn new(levels: &'static [&'static [VsopTerm]], scale: f64) -> Self {
        Self { levels, scale }
    }

    /// Evaluate at `t` Julian millennia and apply the amplitude scale.
    pub fn evaluate(&self, t: f64) -> Result<f64, EphemerisError> {
        Ok(evaluate_leveled_series(self.levels, t)? * self.scale)
    }

    /// Total number of periodic terms across all levels.
    pub fn term_count(&self) -> usize {
        self.levels.iter().map(|l| l.len()).sum()
    }
}

/// Σ A·cos(B + C·t) over one level.
pub fn evaluate_series(terms: &[VsopTerm], t: f64) -> Result<f64, EphemerisError> {
    if !t.is_finite() {
        return Err(EphemerisError::NonFinite("series time argument"));
    }
    Ok(terms
        .iter()
        .map(|term| term.amplitude * (term.phase + term.frequency * t).cos())
        .sum())
}

/// Σₙ evaluate_series(levels[n], t)·tⁿ, accumulated Horner-style from the
/// highest level down.
pub fn evaluate_leveled_series(levels: &[&[VsopTerm]], t: f64) -> Result<f64, EphemerisError> {
    let mut acc = 0.0;
    for level in levels.iter().rev() {
        acc = acc * t + evaluate_series(level, t)?;
    }
    Ok(acc)
}
