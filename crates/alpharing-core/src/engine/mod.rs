//! # Engine Module
//!
//! This module implements the scoring passes that turn an unweighted
//! interaction network and a batch of substitution requests into classified,
//! explained predictions.
//!
//! ## Architecture
//!
//! - **Network Weighting** ([`weighting`]) - Populates edge weights from the
//!   interaction-kind formulas and aggregates them into per-residue weights
//! - **Feature Extraction** ([`features`]) - Builds the fixed-order feature
//!   vector for each requested substitution
//! - **Classification** ([`classify`]) - Evaluates the pretrained classifier
//!   and computes per-feature attributions against the background sample
//! - **Result Assembly** ([`results`]) - Zips substitutions, features, and
//!   predictions into the final result rows
//! - **Error Handling** ([`error`]) - The error taxonomy shared by the passes
//!
//! All passes are pure transformations over immutable inputs (the two
//! weighting passes mutate their network exactly once each); any failure is
//! fatal to the whole batch, because feature rows are positionally coupled
//! across the input sources and cannot be safely patched or reordered.

pub mod classify;
pub mod error;
pub mod features;
pub mod results;
pub mod weighting;
