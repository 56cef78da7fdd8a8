//! # Classifier Module
//!
//! This module provides the pretrained probabilistic classifier used to score
//! substitutions, together with its artifact format, labelling thresholds, and
//! the attribution scheme that explains each prediction.
//!
//! ## Key Components
//!
//! - [`artifact`] - The versioned classifier artifact (model parameters plus a
//!   background reference sample) and its validating loader
//! - [`model`] - Evaluation of the standardized logistic-regression model
//! - [`labels`] - The categorical label and its fixed probability thresholds
//! - [`explain`] - The additive per-feature attribution against the background

pub mod artifact;
pub mod explain;
pub mod labels;
pub mod model;
