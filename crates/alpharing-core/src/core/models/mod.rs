//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent a
//! residue-interaction network and the substitutions scored against it.
//!
//! ## Key Components
//!
//! - [`residue`] - Amino-acid classification and per-residue network nodes
//! - [`interaction`] - Interaction kinds and residue-residue contact edges
//! - [`network`] - The complete weighted residue-interaction network
//! - [`substitution`] - Single-residue substitution requests and their textual form
//! - [`features`] - The fixed-order feature vector extracted per substitution
//! - [`score`] - The assembled per-substitution scoring result
//! - [`ids`] - Unique identifier types for network nodes

pub mod features;
pub mod ids;
pub mod interaction;
pub mod network;
pub mod residue;
pub mod score;
pub mod substitution;
