use pwa_icons::icon_gen::{run, Args, Outcome};
use pwa_icons::install::Installer;
use pwa_icons::render::Rasterizer;
use pwa_icons::{Error, Result};
use tempfile::TempDir;

struct OfflineInstaller;

impl Installer for OfflineInstaller {
    fn command_line(&self) -> String {
        "cargo install pwa-icons --features raster".to_string()
    }

    fn install(&self) -> Result<()> {
        Err(Error::InstallFailure {
            command: self.command_line(),
            reason: "network unreachable".to_string(),
        })
    }
}

fn missing_backend() -> Result<Box<dyn Rasterizer>> {
    Err(Error::MissingCapability { feature: "raster" })
}

/// With no PNG backend and a failing install, the run must still end with
/// the HTML generator on disk.
#[test]
fn test_missing_backend_and_failed_install_writes_html() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let args = Args {
        output: temp_dir.path().join("icons"),
        fallback_html: temp_dir.path().join("generate_icons.html"),
        install: true,
        ..Args::default()
    };

    let outcome = run(&args, missing_backend(), &OfflineInstaller);

    assert_eq!(outcome, Outcome::FallbackWritten(args.fallback_html.clone()));

    let html = std::fs::read_to_string(&args.fallback_html).expect("fallback page should exist");
    assert!(html.contains("[16, 32, 72, 96, 128, 144, 152, 192, 384, 512]"));
    assert!(html.contains("createRadialGradient"));
    assert!(html.contains("canvas.toDataURL()"));

    // No PNGs are produced on this path
    let pngs = std::fs::read_dir(&args.output).unwrap().count();
    assert_eq!(pngs, 0);
}

#[test]
fn test_fallback_uses_requested_sizes() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let args = Args {
        output: temp_dir.path().join("icons"),
        sizes: vec![64, 256],
        fallback_html: temp_dir.path().join("page.html"),
        ..Args::default()
    };

    let outcome = run(&args, missing_backend(), &OfflineInstaller);

    assert_eq!(outcome, Outcome::FallbackWritten(args.fallback_html.clone()));
    let html = std::fs::read_to_string(&args.fallback_html).unwrap();
    assert!(html.contains("const sizes = [64, 256];"));
}

#[test]
fn test_unwritable_fallback_gives_checklist() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let args = Args {
        output: temp_dir.path().join("icons"),
        fallback_html: temp_dir.path().join("missing-dir").join("generate_icons.html"),
        ..Args::default()
    };

    let outcome = run(&args, missing_backend(), &OfflineInstaller);

    assert_eq!(outcome, Outcome::ManualChecklist(args.sizes.clone()));
}

/// A binary built without the PNG backend falls back on its own
#[cfg(not(feature = "raster"))]
#[test]
fn test_binary_without_backend_writes_html() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_pwa-icons"))
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to run pwa-icons");

    assert!(output.status.success());
    assert!(temp_dir.path().join("generate_icons.html").exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Automatic install is off"));
    assert!(stderr.contains("cargo install pwa-icons --features raster"));
}
