use crate::cli;
use color_eyre::eyre::{eyre, Result};
use duct::cmd;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn install(args: &cli::InstallArgs) -> Result<()> {
    println!("Building {} in release mode...", args.name);
    cmd!("cargo", "build", "--bin", &args.name, "--release").run()?;

    let install_dir = match &args.path {
        Some(path) => PathBuf::from(path),
        None => default_install_dir()?,
    };

    if !install_dir.exists() {
        println!("Creating directory: {}", install_dir.display());
        fs::create_dir_all(&install_dir)?;
    }

    let source = PathBuf::from("target").join("release").join(&args.name);
    let dest = install_dir.join(&args.name);

    println!("Installing {} to {}", args.name, dest.display());
    copy_executable(&source, &dest)?;

    println!("✓ Successfully installed {} to {}", args.name, dest.display());

    let path_var = env::var("PATH").unwrap_or_default();
    if !is_on_path(&install_dir, &path_var) {
        println!("\nNote: {} is not in your PATH.", install_dir.display());
        println!("Add it to your PATH by adding this line to your shell config:");
        println!("  export PATH=\"{}:$PATH\"", install_dir.display());
    }

    Ok(())
}

/// `~/.local/bin`
fn default_install_dir() -> Result<PathBuf> {
    let home = env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map_err(|_| eyre!("Could not determine home directory"))?;

    Ok(PathBuf::from(home).join(".local").join("bin"))
}

fn copy_executable(source: &Path, dest: &Path) -> Result<()> {
    fs::copy(source, dest)
        .map_err(|e| eyre!("Failed to copy {}: {}", source.display(), e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(dest)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(dest, perms)?;
    }

    // Copied binaries are killed on launch until re-signed
    #[cfg(target_os = "macos")]
    {
        let _ = cmd!("xattr", "-cr", dest).run();
        if let Err(e) = cmd!("codesign", "--force", "--sign", "-", dest).run() {
            eprintln!("Warning: Failed to re-sign binary: {e}");
        }
    }

    Ok(())
}

fn is_on_path(dir: &Path, path_var: &str) -> bool {
    env::split_paths(path_var).any(|entry| entry == dir)
}
