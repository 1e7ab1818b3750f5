use crate::cli;
use color_eyre::eyre::{eyre, Result};
use folio_core::credential::obfuscate_literal;
use std::fs;
use std::path::{Path, PathBuf};

pub fn obfuscate_token(args: &cli::ObfuscateTokenArgs) -> Result<Vec<PathBuf>> {
    if args.head.is_empty() || args.tail.is_empty() {
        return Err(eyre!("Both token halves must be non-empty"));
    }

    let dir = Path::new(&args.dir);
    println!("Scanning {} for the access token...", dir.display());

    let rewritten = rewrite_dir(dir, &args.head, &args.tail)?;

    if rewritten.is_empty() {
        println!("Token not found, nothing to rewrite");
    }
    for path in &rewritten {
        println!("✓ Obfuscated token in {}", path.display());
    }

    Ok(rewritten)
}

/// Rewrite every file directly under `dir` that contains the joined token.
/// Returns the rewritten paths, sorted.
fn rewrite_dir(dir: &Path, head: &str, tail: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .map_err(|e| eyre!("Failed to read directory {}: {}", dir.display(), e))?;

    let mut rewritten = Vec::new();

    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        // Binary assets (images, fonts) never hold the token
        let Ok(source) = fs::read_to_string(&path) else {
            continue;
        };

        if let Some(updated) = obfuscate_literal(&source, head, tail) {
            fs::write(&path, updated)?;
            rewritten.push(path);
        }
    }

    rewritten.sort();
    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_args(dir: &Path) -> cli::ObfuscateTokenArgs {
        cli::ObfuscateTokenArgs {
            dir: dir.to_string_lossy().to_string(),
            head: "090bbff2".to_string(),
            tail: "d475ecec".to_string(),
        }
    }

    #[test]
    fn test_rewrites_only_files_with_token() {
        let dir = tempfile::tempdir().unwrap();
        let app = dir.path().join("app.js");
        let vendor = dir.path().join("vendor.js");
        fs::write(&app, r#"var t="090bbff2d475ecec";"#).unwrap();
        fs::write(&vendor, "var x=1;").unwrap();

        let rewritten = obfuscate_token(&create_test_args(dir.path())).unwrap();

        assert_eq!(rewritten, vec![app.clone()]);
        assert_eq!(
            fs::read_to_string(&app).unwrap(),
            r#"var t="090bbff2"+"d475ecec";"#
        );
        assert_eq!(fs::read_to_string(&vendor).unwrap(), "var x=1;");
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let app = dir.path().join("app.js");
        fs::write(&app, r#"a("090bbff2d475ecec")"#).unwrap();

        obfuscate_token(&create_test_args(dir.path())).unwrap();
        let rewritten = obfuscate_token(&create_test_args(dir.path())).unwrap();

        assert!(rewritten.is_empty());
        assert_eq!(fs::read_to_string(&app).unwrap(), r#"a("090bbff2"+"d475ecec")"#);
    }

    #[test]
    fn test_skips_subdirectories_and_binary_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(
            dir.path().join("nested").join("app.js"),
            "090bbff2d475ecec",
        )
        .unwrap();
        fs::write(dir.path().join("logo.png"), [0xff, 0xfe, 0x00, 0x81]).unwrap();

        let rewritten = obfuscate_token(&create_test_args(dir.path())).unwrap();

        assert!(rewritten.is_empty());
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = create_test_args(&dir.path().join("missing"));

        assert!(obfuscate_token(&args).is_err());
    }

    #[test]
    fn test_empty_half_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = create_test_args(dir.path());
        args.tail = String::new();

        assert!(obfuscate_token(&args).is_err());
    }
}
