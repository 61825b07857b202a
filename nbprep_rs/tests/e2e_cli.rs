//! End-to-End CLI Tests for nbprep

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get path to test fixtures
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn notebook_fixture(name: &str) -> PathBuf {
    fixtures_path().join("notebooks").join(name)
}

/// Get a command pointing to the nbprep binary, colors off
fn nbprep() -> Command {
    let mut cmd = cargo_bin_cmd!("nbprep");
    cmd.args(["--color", "never"]);
    cmd
}

fn write(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, bytes).unwrap();
}

fn make_dataset(root: &Path) -> PathBuf {
    let src = root.join("shared/data");
    write(&src.join("images/train/0001.png"), &[1u8; 64]);
    write(&src.join("images/val/0002.png"), &[2u8; 32]);
    write(&src.join("masks/0001.png"), &[3u8; 16]);
    write(&src.join("labels.csv"), b"id,label\n0001,1\n");
    src
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        nbprep()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("nbprep"))
            .stdout(predicate::str::contains("check"))
            .stdout(predicate::str::contains("copy"));
    }

    #[test]
    fn shows_version() {
        nbprep()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        nbprep().arg("frobnicate").assert().failure();
    }
}

// ============================================
// Notebook Check Tests
// ============================================

mod check_mode {
    use super::*;

    #[test]
    fn clean_notebook_passes() {
        nbprep()
            .arg("check")
            .arg("--notebook")
            .arg(notebook_fixture("clean.ipynb"))
            .assert()
            .success()
            .stdout(predicate::str::contains("[OK] No duplicates found!"))
            .stdout(predicate::str::contains("[OK] No empty cells found!"))
            .stdout(predicate::str::contains("Total cells: 4"))
            .stdout(predicate::str::contains("Code cells: 3"))
            .stdout(predicate::str::contains("Markdown cells: 1"))
            .stdout(predicate::str::contains("Notebook check: [OK] Passed"))
            .stdout(predicate::str::contains("Data copy").not());
    }

    #[test]
    fn duplicates_and_empty_cells_are_reported() {
        nbprep()
            .arg("check")
            .arg("--notebook")
            .arg(notebook_fixture("duplicates.ipynb"))
            .assert()
            .failure()
            .stdout(predicate::str::contains("Found 2 potential duplicates:"))
            .stdout(predicate::str::contains("preprocess appears in cells 0 and 3"))
            .stdout(predicate::str::contains("CONFIG appears in cells 2 and 4"))
            .stdout(predicate::str::contains("Found 1 empty markdown cells: [1]"))
            .stdout(predicate::str::contains("Notebook check: [WARNING] Issues found"));
    }

    #[test]
    fn missing_notebook_is_reported_not_fatal() {
        let temp = TempDir::new().unwrap();
        nbprep()
            .arg("check")
            .arg("--root")
            .arg(temp.path())
            .assert()
            .code(1)
            .stdout(predicate::str::contains("[ERROR] Notebook not found"))
            .stdout(predicate::str::contains("train_notebook.ipynb"))
            .stdout(predicate::str::contains("Summary"));
    }

    #[test]
    fn malformed_notebook_is_a_parse_error() {
        nbprep()
            .arg("check")
            .arg("--notebook")
            .arg(notebook_fixture("truncated.ipynb"))
            .assert()
            .failure()
            .stdout(predicate::str::contains("ParseError"))
            .stdout(predicate::str::contains("Caused by"));
    }

    #[test]
    fn notebook_path_that_is_a_directory_is_not_found() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("train_notebook.ipynb")).unwrap();

        nbprep()
            .arg("check")
            .arg("--root")
            .arg(temp.path())
            .assert()
            .code(1)
            .stdout(predicate::str::contains("[ERROR] Notebook not found"));
    }

    #[test]
    fn json_report_lists_duplicates() {
        let output = nbprep()
            .args(["check", "--json", "--notebook"])
            .arg(notebook_fixture("duplicates.ipynb"))
            .output()
            .unwrap();
        assert!(!output.status.success());

        let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(doc["ok"], false);
        assert!(doc.get("copy").is_none());
        let dups = doc["notebook"]["duplicates"].as_array().unwrap();
        assert_eq!(dups.len(), 2);
        assert_eq!(dups[0]["name"], "preprocess");
        assert_eq!(dups[0]["cell"], 3);
        assert_eq!(dups[0]["first_seen"], 0);
        assert_eq!(doc["notebook"]["empty_markdown_cells"][0], 1);
    }
}

// ============================================
// Dataset Copy Tests
// ============================================

mod copy_mode {
    use super::*;

    #[test]
    fn copies_first_existing_candidate() {
        let temp = TempDir::new().unwrap();
        let src = make_dataset(temp.path());
        let dest = temp.path().join("notebook_version/data");

        nbprep()
            .arg("copy")
            .arg("--source")
            .arg(temp.path().join("not-here"))
            .arg("--source")
            .arg(&src)
            .arg("--dest")
            .arg(&dest)
            .assert()
            .success()
            .stdout(predicate::str::contains("Source contains:"))
            .stdout(predicate::str::contains("Directories: images, masks"))
            .stdout(predicate::str::contains("Files: labels.csv"))
            .stdout(predicate::str::contains("[SUCCESS] Data folder copied successfully!"))
            .stdout(predicate::str::contains("Total size: 0.00 GB"))
            .stdout(predicate::str::contains("Copied directories: images, masks"))
            .stdout(predicate::str::contains("Data copy: [OK] Success"));

        assert_eq!(
            fs::read(dest.join("images/train/0001.png")).unwrap(),
            vec![1u8; 64]
        );
        assert_eq!(
            fs::read(dest.join("labels.csv")).unwrap(),
            b"id,label\n0001,1\n"
        );
    }

    #[test]
    fn existing_destination_is_preserved() {
        let temp = TempDir::new().unwrap();
        let src = make_dataset(temp.path());
        let dest = temp.path().join("data");
        write(&dest.join("images/cached.bin"), b"do not touch");

        nbprep()
            .arg("copy")
            .arg("--root")
            .arg(temp.path())
            .arg("--source")
            .arg(&src)
            .assert()
            .success()
            .stdout(predicate::str::contains("already exists"))
            .stdout(predicate::str::contains("Skipping copy (data already present)."));

        assert_eq!(
            fs::read(dest.join("images/cached.bin")).unwrap(),
            b"do not touch"
        );
        assert!(!dest.join("labels.csv").exists());
        assert!(!dest.join("masks").exists());
    }

    #[test]
    fn missing_sources_are_all_listed() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("first/data");
        let second = temp.path().join("second/data");

        nbprep()
            .arg("copy")
            .arg("--root")
            .arg(temp.path())
            .arg("--source")
            .arg(&first)
            .arg("--source")
            .arg(&second)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Source data directory not found"))
            .stdout(predicate::str::contains("Checked locations:"))
            .stdout(predicate::str::contains(first.display().to_string()))
            .stdout(predicate::str::contains(second.display().to_string()))
            .stdout(predicate::str::contains("Data copy: [ERROR] Failed"));

        assert!(!temp.path().join("data").exists());
    }

    #[test]
    fn default_candidates_are_listed_when_none_exist() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("notebook_version");
        fs::create_dir_all(&root).unwrap();

        nbprep()
            .arg("copy")
            .arg("--root")
            .arg(&root)
            .assert()
            .failure()
            .stdout(predicate::str::contains("main_project"))
            .stdout(predicate::str::contains("e:/medical imaging/data"))
            .stdout(predicate::str::contains("e:/data"));
    }

    #[test]
    fn sibling_data_folder_is_the_default_source() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("notebook_version");
        fs::create_dir_all(&root).unwrap();
        write(&temp.path().join("data/train/a.npy"), b"npy");

        nbprep().arg("copy").arg("--root").arg(&root).assert().success();

        assert_eq!(fs::read(root.join("data/train/a.npy")).unwrap(), b"npy");
    }

    #[test]
    fn config_file_supplies_candidates() {
        let temp = TempDir::new().unwrap();
        make_dataset(temp.path());
        write(
            &temp.path().join(".nbprep/config.toml"),
            b"destination = \"staged\"\ncandidates = [\"nowhere\", \"shared/data\"]\n",
        );

        nbprep()
            .arg("copy")
            .arg("--root")
            .arg(temp.path())
            .assert()
            .success();

        assert!(temp.path().join("staged/masks/0001.png").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn broken_symlink_in_source_reports_copy_error() {
        let temp = TempDir::new().unwrap();
        let src = make_dataset(temp.path());
        std::os::unix::fs::symlink(temp.path().join("vanished"), src.join("zz_link")).unwrap();
        let dest = temp.path().join("staged");

        nbprep()
            .arg("copy")
            .arg("--source")
            .arg(&src)
            .arg("--dest")
            .arg(&dest)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Error copying data folder (CopyError):"))
            .stdout(predicate::str::contains("Caused by"))
            .stdout(predicate::str::contains("Data copy: [ERROR] Failed"))
            .stderr(predicate::str::contains("✗").not());

        assert!(dest.join("labels.csv").is_file());
    }

    #[test]
    fn destination_nested_in_source_is_skipped() {
        let temp = TempDir::new().unwrap();
        let src = make_dataset(temp.path());

        nbprep()
            .arg("copy")
            .arg("--source")
            .arg(&src)
            .arg("--dest")
            .arg(src.join("staged"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Copied directories: images, masks"));

        assert!(src.join("staged/masks/0001.png").is_file());
        assert!(!src.join("staged/staged").exists());
    }

    #[test]
    fn json_outcome_reports_total_bytes() {
        let temp = TempDir::new().unwrap();
        let src = make_dataset(temp.path());

        let output = nbprep()
            .args(["copy", "--json", "--root"])
            .arg(temp.path())
            .arg("--source")
            .arg(&src)
            .output()
            .unwrap();
        assert!(output.status.success());

        let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(doc["ok"], true);
        assert_eq!(doc["copy"]["status"], "copied");
        assert_eq!(doc["copy"]["files"], 4);
        assert_eq!(doc["copy"]["total_bytes"], 64 + 32 + 16 + 16);
    }
}

// ============================================
// Full Run Tests
// ============================================

mod full_run {
    use super::*;

    #[test]
    fn copy_runs_even_when_notebook_check_fails() {
        let temp = TempDir::new().unwrap();
        let src = make_dataset(temp.path());

        nbprep()
            .arg("--root")
            .arg(temp.path())
            .arg("--source")
            .arg(&src)
            .assert()
            .failure()
            .stdout(predicate::str::contains("Notebook not found"))
            .stdout(predicate::str::contains("Copying Training Data"))
            .stdout(predicate::str::contains("Notebook check: [WARNING] Issues found"))
            .stdout(predicate::str::contains("Data copy: [OK] Success"));

        assert!(temp.path().join("data/labels.csv").is_file());
    }

    #[test]
    fn clean_notebook_and_copy_succeed() {
        let temp = TempDir::new().unwrap();
        let src = make_dataset(temp.path());
        fs::copy(
            notebook_fixture("clean.ipynb"),
            temp.path().join("train_notebook.ipynb"),
        )
        .unwrap();

        nbprep()
            .arg("all")
            .arg("--root")
            .arg(temp.path())
            .arg("--source")
            .arg(&src)
            .assert()
            .success()
            .stdout(predicate::str::contains("Notebook check: [OK] Passed"))
            .stdout(predicate::str::contains("Data copy: [OK] Success"));
    }
}
