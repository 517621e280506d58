use scaffolder::error::Error;
use scaffolder::loader::{decode_document, discover_documents, load_config_documents};
use std::fs;
use tempfile::TempDir;

const DEMO_TOML: &str = r#"
title = "demo"
dest_path = "/tmp/out"

[author]
authors = ["alice", "bob"]
build_time = "2024-01-01"

[readme]
description = "demo project"

[commands.server]
content = "func main() {}"

[commands.worker]
"#;

#[test]
fn test_decode_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("demo.toml");
    fs::write(&path, DEMO_TOML).unwrap();

    let model = decode_document(&path).unwrap();
    assert_eq!(model.title, "demo");
    assert_eq!(model.destination_path, "/tmp/out");
    assert_eq!(model.author.authors, vec!["alice", "bob"]);
    assert_eq!(model.author.build_time, "2024-01-01");
    assert_eq!(model.readme.description, "demo project");
    assert_eq!(model.commands.len(), 2);
    assert_eq!(model.commands["server"].content, "func main() {}");
    assert!(model.commands["worker"].is_empty());
    assert!(model.license.is_empty());
}

#[test]
fn test_decode_capitalized_keys() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("legacy.toml");
    fs::write(
        &path,
        r#"
Title = "legacy"
DestPath = "/tmp/out"

[ReadMe]
Content = "hello"

[Cmds.server]
Description = "entry point"

[Pkgs.util]
"#,
    )
    .unwrap();

    let model = decode_document(&path).unwrap();
    assert_eq!(model.title, "legacy");
    assert_eq!(model.destination_path, "/tmp/out");
    assert_eq!(model.readme.content, "hello");
    assert_eq!(model.commands["server"].description, "entry point");
    assert!(model.packages.contains_key("util"));
}

#[test]
fn test_decode_json_and_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let json_path = temp_dir.path().join("a.json");
    fs::write(&json_path, r#"{"title": "a", "dest_path": "/tmp", "docs": {"guide.md": {}}}"#)
        .unwrap();
    let yaml_path = temp_dir.path().join("b.yaml");
    fs::write(&yaml_path, "title: b\ndest_path: /tmp\ntypes:\n  user:\n    content: x\n").unwrap();

    let json_model = decode_document(&json_path).unwrap();
    assert_eq!(json_model.title, "a");
    assert!(json_model.docs.contains_key("guide.md"));

    let yaml_model = decode_document(&yaml_path).unwrap();
    assert_eq!(yaml_model.title, "b");
    assert_eq!(yaml_model.types["user"].content, "x");
}

#[test]
fn test_decode_malformed_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "title = \"unterminated").unwrap();

    match decode_document(&path) {
        Err(Error::DecodeError { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("Expected DecodeError, got {other:?}"),
    }
}

#[test]
fn test_decode_invalid_utf8_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("latin1.toml");
    fs::write(&path, b"title = \"\xff\xfe\"\n").unwrap();

    match decode_document(&path) {
        Err(Error::DecodeError { path: failed, message }) => {
            assert_eq!(failed, path);
            assert!(message.contains("UTF-8"));
        }
        other => panic!("Expected DecodeError, got {other:?}"),
    }
}

#[test]
fn test_discover_empty_path() {
    assert!(matches!(discover_documents(""), Err(Error::ValidationError(_))));
    assert!(matches!(discover_documents("   "), Err(Error::ValidationError(_))));
}

#[test]
fn test_discover_single_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("demo.toml");
    fs::write(&path, DEMO_TOML).unwrap();

    let documents = discover_documents(path.to_str().unwrap()).unwrap();
    assert_eq!(documents, vec![path]);
}

#[test]
fn test_discover_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");

    assert!(matches!(
        discover_documents(path.to_str().unwrap()),
        Err(Error::ConfigError(_))
    ));
}

#[test]
fn test_discover_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("b.toml"), DEMO_TOML).unwrap();
    fs::write(temp_dir.path().join("a.yml"), "title: a\n").unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();
    fs::create_dir(temp_dir.path().join("nested")).unwrap();
    fs::write(temp_dir.path().join("nested").join("c.toml"), DEMO_TOML).unwrap();

    let documents = discover_documents(temp_dir.path().to_str().unwrap()).unwrap();
    assert_eq!(
        documents,
        vec![temp_dir.path().join("a.yml"), temp_dir.path().join("b.toml")]
    );
}

#[test]
fn test_discover_directory_without_documents() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

    assert!(matches!(
        discover_documents(temp_dir.path().to_str().unwrap()),
        Err(Error::ConfigError(_))
    ));
}

#[test]
fn test_discover_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    assert!(matches!(
        discover_documents(missing.to_str().unwrap()),
        Err(Error::ConfigError(_))
    ));
}

#[test]
fn test_load_skips_empty_documents() {
    let temp_dir = TempDir::new().unwrap();
    let empty = temp_dir.path().join("empty.toml");
    fs::write(&empty, "").unwrap();
    let demo = temp_dir.path().join("demo.toml");
    fs::write(&demo, DEMO_TOML).unwrap();

    let models = load_config_documents(&[empty.clone(), demo.clone()]).unwrap();
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].0, demo);

    assert!(matches!(load_config_documents(&[empty]), Err(Error::ConfigError(_))));
}
