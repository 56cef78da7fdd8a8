//! # AlphaRING Core Library
//!
//! A library for estimating the pathogenicity of single-residue protein substitutions.
//! Each substitution is scored by combining a structural-contact-network model of the
//! folded protein with a biophysical stability estimate and a pretrained probabilistic
//! classifier, and every prediction is explained feature by feature against a
//! background reference sample.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`ResidueNetwork`,
//!   `Substitution`, `FeatureVector`), the pure closed-form interaction-weight
//!   formulas, the classifier artifact and its evaluation, and I/O for the
//!   collaborator file formats (RING tables, structure models, stability scans).
//!
//! - **[`engine`]: The Logic Core.** This layer implements the scoring passes:
//!   edge weighting, node-weight aggregation, feature extraction, classification
//!   with per-feature attribution, and result assembly, together with the error
//!   taxonomy shared by all of them.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties the `engine` and `core` together to execute the complete scoring
//!   procedure for a batch of substitutions against one structure.

pub mod core;
pub mod engine;
pub mod workflows;
