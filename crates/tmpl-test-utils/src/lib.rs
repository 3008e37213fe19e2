//! Shared test utilities for the tmpl workspace.
//!
//! This crate provides on-disk fixtures for template and source files so the
//! core and CLI test suites set them up the same way. It is a dev-dependency
//! only and never published.
//!
//! # Modules
//!
//! - [`files`]: [`TestFiles`](files::TestFiles), a temporary directory holding
//!   a template and a source

pub mod files;

pub use files::TestFiles;
