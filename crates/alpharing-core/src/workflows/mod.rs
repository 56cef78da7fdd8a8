//! # Workflows Module
//!
//! This module provides the high-level entry points that orchestrate a
//! complete scoring run.
//!
//! ## Architecture
//!
//! - **Scoring Workflow** ([`score`]) - Weights the interaction network,
//!   extracts per-substitution features, classifies and explains them, and
//!   assembles the final result rows.
//!
//! A workflow operates on one structure and one batch of substitutions.
//! Batches are independent of each other: callers may score multiple
//! structures in parallel with no shared mutable state, but within a batch
//! the substitution order is preserved end to end because the feature rows
//! are positionally coupled to the stability-scan output.

pub mod score;
