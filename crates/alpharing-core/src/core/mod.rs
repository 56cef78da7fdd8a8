//! # Core Module
//!
//! This module provides the fundamental building blocks for variant-effect scoring,
//! serving as the computational foundation of the library.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different aspects
//! of the scoring problem:
//!
//! - **Molecular Representation** ([`models`]) - Data structures for residue nodes,
//!   interaction edges, networks, substitutions, and feature vectors
//! - **Interaction Weighting** ([`weighting`]) - Closed-form weight formulas for each
//!   physicochemical interaction kind
//! - **Classification** ([`classifier`]) - The pretrained classifier artifact, its
//!   evaluation, labelling thresholds, and the attribution scheme
//! - **File I/O** ([`io`]) - Readers and writers for the collaborator file formats

pub mod classifier;
pub mod io;
pub mod models;
pub mod weighting;
