//! wilayah-cli
//! ===========
//!
//! Command-line interface for the `wilayah-core` region hierarchy.
//!
//! This crate primarily provides a binary (`wilayah`). The library target
//! exists so that docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! wilayah stats
//! wilayah children 36.71
//! wilayah describe 36.71.01.1003
//! wilayah search demangan
//! wilayah forecast 36.71.01.1003 --alerts --csv prakiraan.csv
//! ```
//!
//! For programmatic access, use the [`wilayah-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
