//! Render target and batch output tests
//!
//! Exercises the file-backed target and the batch workflow end to end
//! (hash list → render → save → read back) inside a TempDir.

use std::fs;

use glyphprint::app::batch::render_batch;
use glyphprint::infra::render_target::{FileTarget, StringTarget};
use glyphprint::infra::svg_io::{get_output_path, load_hash_list, save_svg};
use glyphprint::{GenerateError, Options, RenderError, generate, render_to_string, update_target};
use tempfile::TempDir;

const ZERO_HASH: &str = "0000000000000000000000000000000000000000000000000000000000000000";

#[test]
fn test_file_target_writes_document() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut target = FileTarget::new(temp_dir.path().join("out").join("zero.svg"));
    target.hash = Some(ZERO_HASH.to_string());

    assert!(update_target(Some(&mut target), None, None, false).unwrap());

    let written = fs::read_to_string(target.path()).unwrap();
    assert_eq!(written, generate(ZERO_HASH, &Options::default()).unwrap());
    assert!(!temp_dir.path().join("out").join("zero.svg.tmp").exists());
}

#[test]
fn test_file_target_validation_error_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut target = FileTarget::new(temp_dir.path().join("bad.svg"));

    let result = update_target(Some(&mut target), Some("zz"), Some(120.0), false);
    assert!(matches!(result, Err(RenderError::Generate(GenerateError::Validation(_)))));
    assert!(!target.path().exists());
}

#[test]
fn test_string_facade_matches_target() {
    let mut target = StringTarget::new();
    update_target(Some(&mut target), Some(ZERO_HASH), Some(90.0), true).unwrap();
    assert_eq!(target.content, render_to_string(ZERO_HASH, 90.0, true).unwrap());
}

#[test]
fn test_batch_pipeline_through_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let list_path = temp_dir.path().join("hashes.txt");
    let upper = "AB".repeat(32);
    fs::write(
        &list_path,
        format!("# sample list\n{}\n\nnot-a-hash\n{}\n", ZERO_HASH, upper),
    )
    .unwrap();

    let hashes = load_hash_list(&list_path).unwrap();
    assert_eq!(hashes.len(), 3);

    let options = Options::default().with_size(64.0);
    let results = render_batch(&hashes, &options);

    let out_dir = temp_dir.path().join("svg");
    let mut written = 0;
    for (hash, result) in hashes.iter().zip(&results) {
        if let Ok(svg) = result {
            save_svg(get_output_path(&out_dir, hash), svg).unwrap();
            written += 1;
        }
    }
    assert_eq!(written, 2);

    let upper_path = out_dir.join(format!("{}.svg", "ab".repeat(32)));
    assert_eq!(
        fs::read_to_string(upper_path).unwrap(),
        generate(&upper, &options).unwrap()
    );
    assert!(matches!(results[1], Err(GenerateError::Validation(_))));
}
