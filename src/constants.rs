//! Common constants used throughout the scaffolder application.

/// Glob patterns of configuration documents picked up from a directory.
pub const CONFIG_PATTERNS: [&str; 4] = ["*.toml", "*.json", "*.yaml", "*.yml"];

/// Extension of generated source files.
pub const SOURCE_EXTENSION: &str = "go";

/// Timestamp format of the provenance header.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const README_FILE: &str = "README.md";
pub const LICENSE_FILE: &str = "LICENSE";
pub const AUTHORS_FILE: &str = "AUTHORS";
pub const MAKEFILE_FILE: &str = "Makefile";
pub const DOCKERFILE_FILE: &str = "Dockerfile";
pub const JENKINSFILE_FILE: &str = "Jenkinsfile";

pub const CMD_DIR: &str = "cmd";
pub const DOC_DIR: &str = "doc";
pub const PKG_DIR: &str = "pkg";
pub const TYPES_DIR: &str = "types";
pub const CONFIG_DIR: &str = "config";
pub const VERSION_DIR: &str = "version";
pub const EXAMPLE_DIR: &str = "example";

/// Placeholder subsections of a README without custom content.
pub const README_SECTIONS: [&str; 8] = [
    "Installation",
    "Prerequisites",
    "Constraints",
    "Documentation",
    "Performance",
    "Status",
    "Example",
    "FAQ",
];
