//! scaffolder turns declarative project descriptions into populated directory
//! trees: README, license, authors, build scripts, CI files, command entry
//! points, packages, types, config files and arbitrary catalog units.

/// Per-project generation engine
pub mod builder;

/// Command-line interface module for the scaffolder application
pub mod cli;

/// Common constants: recognized document patterns, file and directory names
pub mod constants;

/// Error types and handling for the scaffolder application
pub mod error;

/// Path layout rules for generated files
pub mod layout;

/// Configuration document discovery and decoding
/// Supports TOML, JSON and YAML documents
pub mod loader;

/// Logger initialization
pub mod logger;

/// In-memory project model
pub mod model;

/// Template rendering of the built-in defaults
pub mod renderer;

/// Interrupt and termination signal handling
pub mod shutdown;

/// Concurrent generation of every discovered project
pub mod resolver;

/// Provenance header and built-in default templates
pub mod templates;

/// Filesystem primitives
pub mod writer;
