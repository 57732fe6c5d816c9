//! line_search — one-dimensional minimization along a search direction.
//!
//! Purpose
//! -------
//! Provide the exact line search used by the BFGS iterator: given the
//! restriction `t ↦ f(x + t·p)` of an objective to a ray, pick the step
//! length that minimizes it on a bounded interval.
//!
//! Key behaviors
//! -------------
//! - [`golden_section`] narrows a unimodal bracket with golden-ratio probes
//!   until its width is at most the requested precision.
//! - [`golden_section_counted`] additionally reports evaluations.
//!
//! Invariants & assumptions
//! ------------------------
//! - Unimodality on the bracket is assumed, not checked. On multimodal
//!   restrictions the result is some local minimizer inside the bracket.
//! - Precision and bounds are validated up front, so every call terminates.

pub mod golden_section;

pub use self::golden_section::{GOLDEN_FRACTION, golden_section, golden_section_counted};
