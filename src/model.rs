//! In-memory project model decoded from one configuration document.
//!
//! Field names follow snake_case, with aliases for the capitalized keys used by
//! older documents (`Title`, `DestPath`, `ReadMe`, `Cmds`, `Pkgs`, ...).

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::PathBuf;

/// A named map section (commands, docs, packages, ...).
pub type Section = IndexMap<String, ContentBlock>;

/// One generatable artifact: optional custom payload plus descriptive text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContentBlock {
    #[serde(alias = "Content")]
    pub content: String,
    #[serde(alias = "Description")]
    pub description: String,
}

impl ContentBlock {
    pub fn new<C: Into<String>, D: Into<String>>(content: C, description: D) -> Self {
        Self { content: content.into(), description: description.into() }
    }

    /// A block without content and description produces nothing on disk.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.description.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthorBlock {
    #[serde(alias = "Authors")]
    pub authors: Vec<String>,
    #[serde(alias = "BuildTime")]
    pub build_time: String,
    #[serde(alias = "Description")]
    pub description: String,
}

impl AuthorBlock {
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty() && self.build_time.is_empty() && self.description.is_empty()
    }
}

/// Root entity of one configuration document.
///
/// Owned by exactly one [`Builder`](crate::builder::Builder) run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectModel {
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(rename = "dest_path", alias = "destination_path", alias = "DestPath")]
    pub destination_path: String,

    #[serde(alias = "ReadMe", alias = "Readme")]
    pub readme: ContentBlock,
    #[serde(alias = "License")]
    pub license: ContentBlock,
    #[serde(alias = "Version")]
    pub version: ContentBlock,
    #[serde(alias = "Example")]
    pub example: ContentBlock,
    #[serde(alias = "MakeFile", alias = "Makefile")]
    pub makefile: ContentBlock,
    #[serde(alias = "DockerFile", alias = "Dockerfile")]
    pub dockerfile: ContentBlock,
    #[serde(alias = "JenkinsFile", alias = "Jenkinsfile")]
    pub jenkinsfile: ContentBlock,
    #[serde(alias = "Author")]
    pub author: AuthorBlock,

    #[serde(alias = "cmds", alias = "Cmds")]
    pub commands: Section,
    #[serde(alias = "Docs")]
    pub docs: Section,
    #[serde(alias = "pkgs", alias = "Pkgs")]
    pub packages: Section,
    #[serde(alias = "Types")]
    pub types: Section,
    #[serde(alias = "Configs")]
    pub configs: Section,
    #[serde(alias = "Catalogs")]
    pub catalogs: Section,
}

impl ProjectModel {
    /// Directory the project is generated into: `<destination_path>/<title>`.
    pub fn root(&self) -> PathBuf {
        PathBuf::from(&self.destination_path).join(&self.title)
    }
}

/// Returns the entries of a map section with non-empty keys, sorted by key.
pub fn sorted_entries(section: &Section) -> Vec<(&str, &ContentBlock)> {
    let mut entries: Vec<(&str, &ContentBlock)> = section
        .iter()
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, block)| (key.as_str(), block))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}
