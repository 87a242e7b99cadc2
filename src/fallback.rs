//! Browser-based fallback for when PNGs cannot be rendered locally
//!
//! The page draws each icon on a `<canvas>` and triggers a download per size.
//! It uses a true radial gradient and draws only the ball, so its output does
//! not match the PNG backend pixel for pixel.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_FALLBACK_HTML: &str = "generate_icons.html";

const SIZES_PLACEHOLDER: &str = "{{SIZES}}";

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Icon Generator</title></head>
<body>
<canvas id="canvas"></canvas>
<script>
const canvas = document.getElementById('canvas');
const ctx = canvas.getContext('2d');
const sizes = {{SIZES}};

sizes.forEach(size => {
    canvas.width = size;
    canvas.height = size;

    // Create gradient background
    const gradient = ctx.createRadialGradient(size/2, size/2, 0, size/2, size/2, size/2);
    gradient.addColorStop(0, '#4CAF50');
    gradient.addColorStop(1, '#2196F3');

    ctx.fillStyle = gradient;
    ctx.fillRect(0, 0, size, size);

    // Add ball
    ctx.beginPath();
    ctx.arc(size/2, size/2, size/8, 0, Math.PI * 2);
    ctx.fillStyle = '#FF6B6B';
    ctx.fill();

    // Download the image
    const link = document.createElement('a');
    link.download = `icon-${size}x${size}.png`;
    link.href = canvas.toDataURL();
    link.click();
});
</script>
</body>
</html>
"#;

/// `[16, 32, 72]`
pub fn sizes_literal(sizes: &[u32]) -> String {
    let items = sizes
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{items}]")
}

pub fn fallback_html(sizes: &[u32]) -> String {
    TEMPLATE.replace(SIZES_PLACEHOLDER, &sizes_literal(sizes))
}

/// Write the fallback page to `path`, overwriting any previous copy
pub fn write_fallback_html(path: &Path, sizes: &[u32]) -> Result<PathBuf> {
    std::fs::write(path, fallback_html(sizes)).map_err(|err| Error::io(path, err))?;
    Ok(path.to_path_buf())
}
