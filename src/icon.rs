//! Icon sizes, naming, geometry and colours
//!
//! Everything here is pure arithmetic so it can be shared by the PNG backend,
//! the HTML fallback and the manifest writer.

use crate::error::{Error, Result};
use std::str::FromStr;

/// The icon sizes conventionally required by installable web-app manifests
pub const PWA_ICON_SIZES: [u32; 10] = [16, 32, 72, 96, 128, 144, 152, 192, 384, 512];

/// Largest edge length the PNG backend will render
pub const MAX_ICON_SIZE: u32 = 4096;

/// Smallest ball radius, so the ball stays visible on tiny icons
pub const MIN_BALL_RADIUS: u32 = 4;

/// Smallest highlight radius
pub const MIN_HIGHLIGHT_RADIUS: u32 = 1;

pub const DEFAULT_BACKGROUND: &str = "#2196F3";
pub const DEFAULT_BALL: &str = "#FF6B6B";
pub const DEFAULT_HIGHLIGHT: &str = "#FFB6C1";

/// File name of the icon for `size`, e.g. `icon-192x192.png`
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}x{size}.png")
}

/// `16x16, 32x32, ...` for users who have to create the icons by hand
pub fn size_checklist(sizes: &[u32]) -> String {
    sizes
        .iter()
        .map(|size| format!("{size}x{size}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Geometry of a single icon, derived from its edge length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconLayout {
    pub size: u32,
    pub center: u32,
    pub ball_radius: u32,
    pub highlight_radius: u32,
    /// Center of the highlight, up and left of the ball's center
    pub highlight_center: (u32, u32),
}

impl IconLayout {
    pub fn new(size: u32) -> Self {
        let center = size / 2;
        let ball_radius = (size / 8).max(MIN_BALL_RADIUS);
        let highlight_radius = (ball_radius / 3).max(MIN_HIGHLIGHT_RADIUS);
        let offset = center.saturating_sub(ball_radius / 2);

        Self {
            size,
            center,
            ball_radius,
            highlight_radius,
            highlight_center: (offset, offset),
        }
    }

    /// Radii of the background rings, innermost first
    pub fn ring_radii(&self) -> std::ops::Range<u32> {
        0..self.center
    }
}

/// Fill colours for the three layers of an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: [u8; 3],
    pub ball: [u8; 3],
    pub highlight: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [0x21, 0x96, 0xF3],
            ball: [0xFF, 0x6B, 0x6B],
            highlight: [0xFF, 0xB6, 0xC1],
        }
    }
}

impl Palette {
    /// Build a palette from CSS colour strings (`#2196F3`, `tomato`, `rgb(...)`)
    pub fn from_css(background: &str, ball: &str, highlight: &str) -> Result<Self> {
        Ok(Self {
            background: parse_css_color(background)?,
            ball: parse_css_color(ball)?,
            highlight: parse_css_color(highlight)?,
        })
    }

    /// Colour of background ring `i`: the background shifted `i` steps
    /// towards red and green, saturating at 255.
    pub fn ring(&self, i: u32) -> [u8; 3] {
        let step = i.min(u8::MAX as u32) as u8;
        let [r, g, b] = self.background;
        [r.saturating_add(step), g.saturating_add(step), b]
    }
}

fn parse_css_color(value: &str) -> Result<[u8; 3]> {
    let color = css_color::Srgb::from_str(value).map_err(|err| Error::Color {
        value: value.to_string(),
        reason: format!("{err:?}"),
    })?;

    Ok([
        (color.red * 255.).round() as u8,
        (color.green * 255.).round() as u8,
        (color.blue * 255.).round() as u8,
    ])
}
