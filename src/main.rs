use anyhow::{Context, Result};
use clap::Parser;
use pwa_icons::{
    fallback::DEFAULT_FALLBACK_HTML,
    icon::{
        Palette, DEFAULT_BACKGROUND, DEFAULT_BALL, DEFAULT_HIGHLIGHT, MAX_ICON_SIZE,
        PWA_ICON_SIZES,
    },
    icon_gen,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "pwa-icons",
    about = "Generate placeholder icons in every standard PWA size"
)]
struct Cli {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "icons")]
    output: PathBuf,

    /// Icon sizes to generate. Defaults to the standard PWA set.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        value_parser = clap::value_parser!(u32).range(1..=MAX_ICON_SIZE as i64)
    )]
    sizes: Option<Vec<u32>>,

    /// Background color (CSS color format)
    #[clap(long, default_value = DEFAULT_BACKGROUND)]
    background: String,

    /// Ball color (CSS color format)
    #[clap(long, default_value = DEFAULT_BALL)]
    ball_color: String,

    /// Highlight color (CSS color format)
    #[clap(long, default_value = DEFAULT_HIGHLIGHT)]
    highlight_color: String,

    /// Where to write the browser-based generator if PNGs cannot be rendered
    #[clap(long, value_name = "FILE", default_value = DEFAULT_FALLBACK_HTML)]
    fallback_html: PathBuf,

    /// Also write a web app manifest `icons` fragment to this file
    #[clap(long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Try `cargo install` once if this binary was built without the PNG backend
    #[clap(long)]
    install: bool,
}

impl Cli {
    fn into_args(self) -> Result<icon_gen::Args> {
        let palette = Palette::from_css(&self.background, &self.ball_color, &self.highlight_color)
            .context("Invalid icon colors")?;

        Ok(icon_gen::Args {
            output: self.output,
            sizes: self.sizes.unwrap_or_else(|| PWA_ICON_SIZES.to_vec()),
            palette,
            fallback_html: self.fallback_html,
            manifest: self.manifest,
            install: self.install,
        })
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::parse().into_args()?;
    icon_gen::generate_icons(&args);

    Ok(())
}
