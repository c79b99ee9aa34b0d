use fmfix_core::discover::discover_files;
use fmfix_core::FixerConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn config_for(root: &std::path::Path) -> FixerConfig {
    FixerConfig {
        root: root.to_path_buf(),
        ..Default::default()
    }
}

fn relative(root: &std::path::Path, files: Vec<PathBuf>) -> Vec<String> {
    files
        .into_iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn test_finds_nested_files_and_skips_index() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::create_dir_all(root.join("python/basics")).unwrap();
    fs::create_dir_all(root.join("rust")).unwrap();
    fs::write(root.join("_index.mdx"), "index").unwrap();
    fs::write(root.join("intro.mdx"), "intro").unwrap();
    fs::write(root.join("python/_index.mdx"), "index").unwrap();
    fs::write(root.join("python/basics/loops.mdx"), "loops").unwrap();
    fs::write(root.join("rust/ownership.mdx"), "own").unwrap();
    fs::write(root.join("rust/notes.md"), "not mdx").unwrap();
    fs::write(root.join("rust/lesson_index.mdx"), "kept").unwrap();

    let files = discover_files(&config_for(root)).unwrap();

    assert_eq!(
        relative(root, files),
        vec![
            "intro.mdx",
            "python/basics/loops.mdx",
            "rust/lesson_index.mdx",
            "rust/ownership.mdx",
        ]
    );
}

#[test]
fn test_skips_hidden_unless_enabled() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::create_dir_all(root.join(".drafts")).unwrap();
    fs::write(root.join(".drafts/wip.mdx"), "wip").unwrap();
    fs::write(root.join(".hidden.mdx"), "hidden").unwrap();
    fs::write(root.join("visible.mdx"), "visible").unwrap();

    let files = discover_files(&config_for(root)).unwrap();
    assert_eq!(relative(root, files), vec!["visible.mdx"]);

    let config = FixerConfig {
        include_hidden: true,
        ..config_for(root)
    };
    let files = discover_files(&config).unwrap();
    assert_eq!(
        relative(root, files),
        vec![".drafts/wip.mdx", ".hidden.mdx", "visible.mdx"]
    );
}

#[test]
fn test_hidden_root_is_still_scanned() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join(".content");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("a.mdx"), "a").unwrap();

    let files = discover_files(&config_for(&root)).unwrap();
    assert_eq!(files.len(), 1);
}

#[test]
fn test_custom_extension_and_excludes() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(root.join("README.md"), "readme").unwrap();
    fs::write(root.join("post.md"), "post").unwrap();
    fs::write(root.join("draft-post.md"), "draft").unwrap();
    fs::write(root.join("page.mdx"), "page").unwrap();

    let config = FixerConfig {
        extension: "md".to_string(),
        exclude: vec!["README.md".to_string(), "draft-*".to_string()],
        ..config_for(root)
    };
    let files = discover_files(&config).unwrap();
    assert_eq!(relative(root, files), vec!["post.md"]);
}

#[test]
fn test_extra_excludes_keep_reserved_index_excluded() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::create_dir_all(root.join("python")).unwrap();
    fs::write(root.join("_index.mdx"), "index").unwrap();
    fs::write(root.join("python/_index.mdx"), "index").unwrap();
    fs::write(root.join("python/draft-loops.mdx"), "draft").unwrap();
    fs::write(root.join("python/loops.mdx"), "loops").unwrap();

    let config = FixerConfig {
        exclude: vec!["draft-*.mdx".to_string()],
        ..config_for(root)
    };
    let files = discover_files(&config).unwrap();
    assert_eq!(relative(root, files), vec!["python/loops.mdx"]);
}

#[test]
fn test_missing_root_is_error() {
    let tmp = TempDir::new().unwrap();
    let err = discover_files(&config_for(&tmp.path().join("nope"))).unwrap_err();
    assert!(err.to_string().contains("Root directory does not exist"));
}
