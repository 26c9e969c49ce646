//! Regkit - component registry builder
//!
//! Regkit is a CLI tool and library that catalogs a project's UI component sources
//! (`src/components/ui`, `src/components/custom`) into a registry: one JSON unit per
//! component with its metadata, dependencies and embedded source, plus an
//! `index.json` summarizing the whole set. An installer fetches the units by name
//! and writes them into consumer projects.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Registry build pipeline (discovery, extraction, synthesis, reconciliation, index)
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
