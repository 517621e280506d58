//! Built-in default content and the provenance header written at the top of
//! every generated file.

/// Comment syntax of the file a header is written into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// `#` comments: markdown, make, docker, plain text and config files.
    Hash,
    /// `//` comments: source files.
    Slash,
}

impl HeaderKind {
    pub fn marker(self) -> &'static str {
        match self {
            HeaderKind::Hash => "#",
            HeaderKind::Slash => "//",
        }
    }
}

/// Two-line provenance header: generation time and space-joined authors.
pub fn header(kind: HeaderKind, authors: &[String], timestamp: &str) -> String {
    let marker = kind.marker();
    format!("{marker} Time: {timestamp}\n{marker} Authors: {}\n", authors.join(" "))
}

/// `Description:` comment line, empty when there is no description.
pub fn description_line(kind: HeaderKind, description: &str) -> String {
    if description.is_empty() {
        String::new()
    } else {
        format!("{} Description: {description}\n", kind.marker())
    }
}

/// Placeholder subsections of a README without custom content.
pub const README_TEMPLATE: &str =
    "{% for section in sections %}## {{ section }}\n------------\n\n\n{% endfor %}";

/// Makefile synthesized from the command names when no custom content is given.
pub const MAKEFILE_TEMPLATE: &str = concat!(
    "\nIMPORT_PATH := {{ title }}\n",
    "\nexport GOPATH := $(CURDIR)/.GOPATH\n",
    "\nunexport GOBIN\n",
    "\n.PHONY: all{% for command in commands %} {{ command.name }}{% endfor %} init clean update\n",
    "\nall:{% for command in commands %} {{ command.name }}{% endfor %}\n",
    "{% for command in commands %}",
    "\n{{ command.name }}: .GOPATH\n",
    "\tgo install -tags netgo $(IMPORT_PATH)/{{ command.install_path }}\n",
    "{% endfor %}",
    "\n.GOPATH:\n",
    "\trm -rf $(CURDIR)/.GOPATH\n",
    "\tmkdir -p $(CURDIR)/.GOPATH/src\n",
    "\tln -sf $(CURDIR) $(CURDIR)/.GOPATH/src/$(IMPORT_PATH)\n",
    "\tmkdir -p $(CURDIR)/bin\n",
    "\tln -sf $(CURDIR)/bin $(CURDIR)/.GOPATH/bin\n",
    "\ttouch $@\n",
    "\ninit:\n\tglide init\n",
    "\nclean:\n\trm -rf bin .GOPATH\n",
    "\nupdate:\n\tglide up -v\n",
);

/// No-op entry point for commands without custom content.
pub const MAIN_STUB: &str = "\nfunc main() {\n\treturn\n}\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_hash() {
        let authors = vec!["alice".to_string(), "bob".to_string()];
        assert_eq!(
            header(HeaderKind::Hash, &authors, "2024-01-02 03:04:05"),
            "# Time: 2024-01-02 03:04:05\n# Authors: alice bob\n"
        );
    }

    #[test]
    fn test_header_slash_without_authors() {
        assert_eq!(
            header(HeaderKind::Slash, &[], "2024-01-02 03:04:05"),
            "// Time: 2024-01-02 03:04:05\n// Authors: \n"
        );
    }

    #[test]
    fn test_description_line() {
        assert_eq!(description_line(HeaderKind::Slash, ""), "");
        assert_eq!(description_line(HeaderKind::Hash, "docs"), "# Description: docs\n");
    }
}
