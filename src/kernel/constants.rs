//! Arctangent coefficients, reduction thresholds and logarithm scales.

#![allow(clippy::excessive_precision)]
#![allow(clippy::approx_constant)]

/// √2 + 1, upper edge of the middle reduction band.
pub(super) const SQ2P1: f64 = 2.414213562373095048802e0;
/// √2 − 1, upper edge of the band where the rational fit is accurate.
pub(super) const SQ2M1: f64 = 0.414213562373095048802e0;

pub(super) const P4: f64 = 0.161536412982230228262e2;
pub(super) const P3: f64 = 0.26842548195503973794141e3;
pub(super) const P2: f64 = 0.11530293515404850115428136e4;
pub(super) const P1: f64 = 0.178040631643319697105464587e4;
pub(super) const P0: f64 = 0.89678597403663861959987488e3;

pub(super) const Q4: f64 = 0.5895697050844462222791e2;
pub(super) const Q3: f64 = 0.536265374031215315104235e3;
pub(super) const Q2: f64 = 0.16667838148816337184521798e4;
pub(super) const Q1: f64 = 0.207933497444540981287275926e4;
pub(super) const Q0: f64 = 0.89678597403663861962481162e3;

/// π/2
pub(super) const PIO2: f64 = 1.5707963267948966135e0;

/// π
pub(super) const PI: f64 = core::f64::consts::PI;

/// 1 / ln 2
pub(super) const LN2_INV: f64 = core::f64::consts::LOG2_E;
/// 1 / ln 10
pub(super) const LN10_INV: f64 = core::f64::consts::LOG10_E;
