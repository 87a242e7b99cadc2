use crate::error::{Error, Result};
use crate::fallback::{self, DEFAULT_FALLBACK_HTML};
use crate::icon::{icon_file_name, size_checklist, IconLayout, Palette, PWA_ICON_SIZES};
use crate::install::{CargoInstaller, Installer};
use crate::manifest::{self, ManifestIcons};
use crate::render::{self, Rasterizer};
use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};

// Plain options struct so the library does not depend on clap
#[derive(Debug, Clone)]
pub struct Args {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
    pub palette: Palette,
    pub fallback_html: PathBuf,
    pub manifest: Option<PathBuf>,
    /// Allow one automatic install attempt when the PNG backend is missing
    pub install: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from("icons"),
            sizes: PWA_ICON_SIZES.to_vec(),
            palette: Palette::default(),
            fallback_html: PathBuf::from(DEFAULT_FALLBACK_HTML),
            manifest: None,
            install: false,
        }
    }
}

/// How a run ended. Every variant has already been reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// All icons were written, in size order
    Rendered(Vec<PathBuf>),
    /// The PNG backend was installed; the tool has to be run again
    InstallScheduled { command: String },
    /// The PNG backend is unavailable; the HTML generator was written instead
    FallbackWritten(PathBuf),
    /// Something went wrong; the sizes to create by hand were printed
    ManualChecklist(Vec<u32>),
}

/// Generate the icon set with the backend compiled into this binary
pub fn generate_icons(args: &Args) -> Outcome {
    run(args, render::probe(), &CargoInstaller::default())
}

/// Run the fallback chain: render, else install, else write the HTML
/// generator, else print the manual checklist.
pub fn run(
    args: &Args,
    rasterizer: Result<Box<dyn Rasterizer>>,
    installer: &dyn Installer,
) -> Outcome {
    let result = match rasterizer {
        Ok(rasterizer) => render_all(args, rasterizer.as_ref()).map(Outcome::Rendered),
        Err(err) if err.is_missing_capability() => recover_missing_backend(args, &err, installer),
        Err(err) => Err(err),
    };

    let outcome = result.unwrap_or_else(|err| manual_checklist(&args.sizes, &err));
    log::debug!("run finished: {outcome:?}");
    outcome
}

fn render_all(args: &Args, rasterizer: &dyn Rasterizer) -> Result<Vec<PathBuf>> {
    // Ensure the output directory exists
    create_dir_all(&args.output).map_err(|err| Error::io(&args.output, err))?;
    log::info!(
        "rendering {} icons into {} with {}",
        args.sizes.len(),
        args.output.display(),
        rasterizer.name()
    );

    let mut written = Vec::with_capacity(args.sizes.len());
    for &size in &args.sizes {
        let layout = IconLayout::new(size);
        log::debug!("layout for {size}: {layout:?}");

        // Encode fully before touching the file
        let png = rasterizer.encode_icon(&layout, &args.palette)?;
        let output_path = args.output.join(icon_file_name(size));
        std::fs::write(&output_path, png).map_err(|err| Error::io(&output_path, err))?;

        println!("  ✓ Generated {}", output_path.display());
        written.push(output_path);
    }

    println!("✓ All PWA icons generated successfully!");

    if let Some(manifest_path) = &args.manifest {
        write_manifest(&args.output, &args.sizes, manifest_path)?;
    }

    Ok(written)
}

fn write_manifest(out_dir: &Path, sizes: &[u32], manifest_path: &Path) -> Result<()> {
    let icons = ManifestIcons::for_sizes(&manifest::url_dir_name(out_dir), sizes);
    manifest::write_manifest_icons(manifest_path, &icons)?;
    println!("  ✓ Generated {}", manifest_path.display());
    Ok(())
}

fn recover_missing_backend(
    args: &Args,
    missing: &Error,
    installer: &dyn Installer,
) -> Result<Outcome> {
    eprintln!("⚠ {missing}");

    let command = installer.command_line();
    if args.install {
        println!("Installing the PNG backend: {command}");
        match installer.install() {
            Ok(()) => {
                println!(
                    "✓ PNG backend installed. Run this command again to generate the icons."
                );
                return Ok(Outcome::InstallScheduled { command });
            }
            Err(err) => {
                eprintln!("✗ {err}");
                eprintln!("  You can install it manually with:");
                eprintln!("    {command}");
            }
        }
    } else {
        eprintln!("{}", install_off_notice(&command));
    }

    write_fallback(args)
}

fn install_off_notice(command: &str) -> String {
    format!(
        "Automatic install is off (pass --install to enable it). To install, run:\n    {command}"
    )
}

fn write_fallback(args: &Args) -> Result<Outcome> {
    create_dir_all(&args.output).map_err(|err| Error::io(&args.output, err))?;
    let html = fallback::write_fallback_html(&args.fallback_html, &args.sizes)?;
    println!(
        "📄 Created {} - open it in a browser to download the icons",
        html.display()
    );
    Ok(Outcome::FallbackWritten(html))
}

fn manual_checklist(sizes: &[u32], err: &Error) -> Outcome {
    eprintln!("✗ Error generating icons: {err}");
    println!("You can manually create PNG icons for the following sizes:");
    println!("{}", size_checklist(sizes));
    Outcome::ManualChecklist(sizes.to_vec())
}
