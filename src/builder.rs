//! Per-project generation engine.
//!
//! A [`Builder`] owns one [`ProjectModel`] and realizes it as a directory tree
//! rooted at `<destination_path>/<title>`. Sections run in a fixed order and the
//! first failure aborts the run; files already written stay on disk.

use chrono::Local;
use log::{debug, info};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;

use crate::constants::{
    AUTHORS_FILE, DOCKERFILE_FILE, EXAMPLE_DIR, JENKINSFILE_FILE, LICENSE_FILE, MAKEFILE_FILE,
    README_FILE, README_SECTIONS, TIMESTAMP_FORMAT, VERSION_DIR,
};
use crate::error::{Error, Result};
use crate::layout;
use crate::model::{sorted_entries, ContentBlock, ProjectModel, Section};
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};
use crate::templates::{
    description_line, header, HeaderKind, MAIN_STUB, MAKEFILE_TEMPLATE, README_TEMPLATE,
};
use crate::writer::{create_file, ensure_directory};

type SectionFn = fn(&Builder, &Target) -> Result<()>;

/// Sections executed after the project root exists, in order.
const SECTIONS: [(&str, SectionFn); 14] = [
    ("readme", Builder::readme),
    ("license", Builder::license),
    ("authors", Builder::authors),
    ("version", Builder::version),
    ("example", Builder::example),
    ("makefile", Builder::makefile),
    ("dockerfile", Builder::dockerfile),
    ("jenkinsfile", Builder::jenkinsfile),
    ("commands", Builder::commands),
    ("docs", Builder::docs),
    ("packages", Builder::packages),
    ("types", Builder::types),
    ("configs", Builder::configs),
    ("catalogs", Builder::catalogs),
];

/// Where and when a run writes: the project root and the header timestamp.
struct Target {
    root: PathBuf,
    timestamp: String,
}

pub struct Builder {
    model: ProjectModel,
    renderer: Box<dyn TemplateRenderer>,
}

impl Builder {
    pub fn new(model: ProjectModel) -> Self {
        Self::with_renderer(model, Box::new(MiniJinjaRenderer::new()))
    }

    pub fn with_renderer(model: ProjectModel, renderer: Box<dyn TemplateRenderer>) -> Self {
        Self { model, renderer }
    }

    /// Generates the project and returns its root directory.
    ///
    /// # Errors
    /// * `Error::ValidationError` if the title or destination path is empty, or
    ///   if the title or a section key is not a plain relative path
    /// * `Error::DestinationNotEmpty` if the project root already holds files
    /// * `Error::IoError` if a directory or file cannot be created
    /// * `Error::Cancelled` if `cancel` fires before a section starts
    pub fn run(&self, cancel: &CancellationToken) -> Result<PathBuf> {
        let target = Target {
            root: self.model.root(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        };

        check_cancelled(cancel)?;
        self.title(&target)?;

        for (name, section) in SECTIONS {
            check_cancelled(cancel)?;
            debug!("Running section '{}' for '{}'", name, self.model.title);
            section(self, &target)?;
        }

        info!("Project '{}' generated in {}", self.model.title, target.root.display());
        Ok(target.root)
    }

    fn title(&self, target: &Target) -> Result<()> {
        if self.model.title.is_empty() {
            return Err(Error::ValidationError("project title is empty".to_string()));
        }
        if self.model.destination_path.is_empty() {
            return Err(Error::ValidationError(
                "project destination path is empty".to_string(),
            ));
        }
        layout::validate_relative("project title", &self.model.title)?;
        self.validate_keys()?;

        if target.root.is_dir() {
            let mut entries =
                fs::read_dir(&target.root).map_err(|e| Error::io(&target.root, e))?;
            if entries.next().is_some() {
                return Err(Error::DestinationNotEmpty(target.root.clone()));
            }
        }
        ensure_directory(&target.root)
    }

    /// Rejects map keys that would place files outside the project root.
    fn validate_keys(&self) -> Result<()> {
        let sections = [
            ("commands", &self.model.commands),
            ("docs", &self.model.docs),
            ("packages", &self.model.packages),
            ("types", &self.model.types),
            ("configs", &self.model.configs),
            ("catalogs", &self.model.catalogs),
        ];
        for (name, section) in sections {
            for (key, _) in sorted_entries(section) {
                layout::validate_relative(&format!("{name} key"), key)?;
            }
        }
        Ok(())
    }

    fn readme(&self, target: &Target) -> Result<()> {
        let block = &self.model.readme;
        if skip("readme", block) {
            return Ok(());
        }

        let preamble = format!("\n{}\n\n\n", self.model.title);
        let fallback = if block.content.is_empty() {
            self.renderer.render(README_TEMPLATE, &json!({ "sections": README_SECTIONS }))?
        } else {
            String::new()
        };
        let content = self.compose(HeaderKind::Hash, block, target, &preamble, &fallback);
        create_file(&target.root.join(README_FILE), &content)
    }

    fn license(&self, target: &Target) -> Result<()> {
        let block = &self.model.license;
        if skip("license", block) {
            return Ok(());
        }

        let preamble = format!("\nproject: {}\n", self.model.title);
        let content = self.compose(HeaderKind::Hash, block, target, &preamble, "");
        create_file(&target.root.join(LICENSE_FILE), &content)
    }

    fn authors(&self, target: &Target) -> Result<()> {
        let author = &self.model.author;
        if author.is_empty() {
            debug!("Skipping section 'authors': nothing to generate");
            return Ok(());
        }

        let mut content = String::new();
        if !author.build_time.is_empty() {
            content.push_str(&format!("# BuildTime: {}\n", author.build_time));
        }
        content.push_str(&description_line(HeaderKind::Hash, &author.description));
        if !author.authors.is_empty() {
            content.push_str(&format!("# Authors:\n{}\n", author.authors.join("\n")));
        }
        create_file(&target.root.join(AUTHORS_FILE), &content)
    }

    fn version(&self, target: &Target) -> Result<()> {
        let block = &self.model.version;
        self.package_file("version", block, target, VERSION_DIR, layout::version_path)
    }

    fn example(&self, target: &Target) -> Result<()> {
        let block = &self.model.example;
        self.package_file("example", block, target, EXAMPLE_DIR, layout::example_path)
    }

    fn package_file(
        &self,
        section: &str,
        block: &ContentBlock,
        target: &Target,
        package: &str,
        path: fn(&Path) -> PathBuf,
    ) -> Result<()> {
        if skip(section, block) {
            return Ok(());
        }

        let preamble = format!("\npackage {package}\n");
        let content = self.compose(HeaderKind::Slash, block, target, &preamble, "");
        create_file(&path(&target.root), &content)
    }

    fn makefile(&self, target: &Target) -> Result<()> {
        let block = &self.model.makefile;
        if skip("makefile", block) {
            return Ok(());
        }

        let fallback = if block.content.is_empty() {
            self.synthesize_makefile()?
        } else {
            String::new()
        };
        let content = self.compose(HeaderKind::Hash, block, target, "", &fallback);
        create_file(&target.root.join(MAKEFILE_FILE), &content)
    }

    /// One build target per command name, sorted, plus the fixed targets.
    fn synthesize_makefile(&self) -> Result<String> {
        let names = command_names(&self.model.commands);
        let commands: Vec<serde_json::Value> = names
            .iter()
            .map(|name| {
                json!({
                    "name": name,
                    "install_path": layout::command_install_path(name, names.len()),
                })
            })
            .collect();

        self.renderer.render(
            MAKEFILE_TEMPLATE,
            &json!({ "title": self.model.title, "commands": commands }),
        )
    }

    fn dockerfile(&self, target: &Target) -> Result<()> {
        let path = target.root.join(DOCKERFILE_FILE);
        self.plain_file("dockerfile", &self.model.dockerfile, &path, target)
    }

    fn jenkinsfile(&self, target: &Target) -> Result<()> {
        let path = target.root.join(JENKINSFILE_FILE);
        self.plain_file("jenkinsfile", &self.model.jenkinsfile, &path, target)
    }

    fn plain_file(
        &self,
        section: &str,
        block: &ContentBlock,
        path: &Path,
        target: &Target,
    ) -> Result<()> {
        if skip(section, block) {
            return Ok(());
        }

        let content = self.compose(HeaderKind::Hash, block, target, "", "");
        create_file(path, &content)
    }

    fn commands(&self, target: &Target) -> Result<()> {
        let entries = sorted_entries(&self.model.commands);
        let total = entries.len();
        for (key, block) in entries {
            let name = layout::strip_source_suffix(key);
            let path = layout::command_path(&target.root, name, total);
            let content =
                self.compose(HeaderKind::Slash, block, target, "\npackage main\n", MAIN_STUB);
            create_file(&path, &content)?;
        }
        Ok(())
    }

    fn docs(&self, target: &Target) -> Result<()> {
        for (key, block) in sorted_entries(&self.model.docs) {
            let content = self.compose(HeaderKind::Hash, block, target, "", "");
            create_file(&layout::doc_path(&target.root, key), &content)?;
        }
        Ok(())
    }

    fn packages(&self, target: &Target) -> Result<()> {
        let entries = sorted_entries(&self.model.packages);
        let total = entries.len();
        for (key, block) in entries {
            let name = layout::strip_source_suffix(key);
            let path = layout::package_path(&target.root, name, total);
            self.source_file(block, target, name, &path)?;
        }
        Ok(())
    }

    fn types(&self, target: &Target) -> Result<()> {
        for (key, block) in sorted_entries(&self.model.types) {
            let name = layout::strip_source_suffix(key);
            self.source_file(block, target, name, &layout::type_path(&target.root, name))?;
        }
        Ok(())
    }

    fn configs(&self, target: &Target) -> Result<()> {
        for (key, block) in sorted_entries(&self.model.configs) {
            let content = self.compose(HeaderKind::Hash, block, target, "", "");
            create_file(&layout::config_path(&target.root, key), &content)?;
        }
        Ok(())
    }

    fn catalogs(&self, target: &Target) -> Result<()> {
        for (key, block) in sorted_entries(&self.model.catalogs) {
            let name = layout::strip_source_suffix(key);
            self.source_file(block, target, name, &layout::catalog_path(&target.root, name))?;
        }
        Ok(())
    }

    /// Source file declaring `package <name>` followed by the block's content.
    fn source_file(
        &self,
        block: &ContentBlock,
        target: &Target,
        name: &str,
        path: &Path,
    ) -> Result<()> {
        let preamble = format!("\npackage {name}\n");
        let content = self.compose(HeaderKind::Slash, block, target, &preamble, "");
        create_file(path, &content)
    }

    /// Header, description, preamble, then the block's content or `fallback`.
    fn compose(
        &self,
        kind: HeaderKind,
        block: &ContentBlock,
        target: &Target,
        preamble: &str,
        fallback: &str,
    ) -> String {
        let mut out = header(kind, &self.model.author.authors, &target.timestamp);
        out.push_str(&description_line(kind, &block.description));
        out.push_str(preamble);
        if block.content.is_empty() {
            out.push_str(fallback);
        } else {
            out.push_str(&format!("\n{}\n", block.content));
        }
        out
    }
}

/// Command names with the source suffix stripped, in sorted key order.
pub fn command_names(commands: &Section) -> Vec<String> {
    sorted_entries(commands)
        .into_iter()
        .map(|(key, _)| layout::strip_source_suffix(key).to_string())
        .collect()
}

fn skip(section: &str, block: &ContentBlock) -> bool {
    if block.is_empty() {
        debug!("Skipping section '{}': nothing to generate", section);
        return true;
    }
    false
}

fn check_cancelled(cancel: &CancellationToken) -> Result<()> {
    if cancel.is_cancelled() {
        return Err(Error::Cancelled);
    }
    Ok(())
}
