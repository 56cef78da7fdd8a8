//! Provides input/output functionality for the collaborator file formats.
//!
//! This module contains readers for the tab-separated interaction-network
//! tables, the structure model carrying per-residue confidence, and the
//! stability-scan output, together with writers for the weighted network
//! tables and the final results table.

pub mod pdb;
pub mod results;
pub mod ring;
pub mod scan;
