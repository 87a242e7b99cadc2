//! The imaging capability: turning an [`IconLayout`] into encoded PNG bytes

use crate::error::{Error, Result};
use crate::icon::{IconLayout, Palette, MAX_ICON_SIZE};

/// Cargo feature that compiles in the PNG backend
pub const RASTER_FEATURE: &str = "raster";

/// Something that can draw an icon and encode it
pub trait Rasterizer {
    fn name(&self) -> &'static str;

    /// Render one icon and return the complete encoded file contents
    fn encode_icon(&self, layout: &IconLayout, palette: &Palette) -> Result<Vec<u8>>;
}

/// Look up the PNG backend compiled into this binary
pub fn probe() -> Result<Box<dyn Rasterizer>> {
    #[cfg(feature = "raster")]
    {
        let backend: Box<dyn Rasterizer> = Box::new(png::PngRasterizer);
        log::debug!("using {} backend", backend.name());
        Ok(backend)
    }

    #[cfg(not(feature = "raster"))]
    {
        Err(Error::MissingCapability {
            feature: RASTER_FEATURE,
        })
    }
}

#[cfg(feature = "raster")]
pub use png::PngRasterizer;

#[cfg(feature = "raster")]
mod png {
    use super::*;
    use image::{
        codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
        ColorType, ImageEncoder, Rgb, RgbImage,
    };
    use std::io::Write;

    /// PNG backend built on the `image` crate
    #[derive(Debug, Default, Clone, Copy)]
    pub struct PngRasterizer;

    impl Rasterizer for PngRasterizer {
        fn name(&self) -> &'static str {
            "image/png"
        }

        fn encode_icon(&self, layout: &IconLayout, palette: &Palette) -> Result<Vec<u8>> {
            if layout.size == 0 || layout.size > MAX_ICON_SIZE {
                return Err(Error::Encode {
                    size: layout.size,
                    reason: format!("size must be between 1 and {MAX_ICON_SIZE}"),
                });
            }

            let canvas = draw_icon(layout, palette);

            let mut buf = Vec::new();
            write_png(canvas.as_raw(), &mut buf, layout.size).map_err(|err| Error::Encode {
                size: layout.size,
                reason: err.to_string(),
            })?;
            Ok(buf)
        }
    }

    /// Paint background, rings, ball and highlight onto a fresh canvas
    pub(crate) fn draw_icon(layout: &IconLayout, palette: &Palette) -> RgbImage {
        let mut canvas = RgbImage::from_pixel(layout.size, layout.size, Rgb(palette.background));
        let center = layout.center as i64;

        // Rings grow outward with flat colours and each one covers every
        // smaller ring, so only the outermost is visible
        if let Some(i) = layout.ring_radii().last() {
            fill_circle(&mut canvas, (center, center), i as i64, Rgb(palette.ring(i)));
        }

        fill_circle(
            &mut canvas,
            (center, center),
            layout.ball_radius as i64,
            Rgb(palette.ball),
        );

        let (hx, hy) = layout.highlight_center;
        fill_circle(
            &mut canvas,
            (hx as i64, hy as i64),
            layout.highlight_radius as i64,
            Rgb(palette.highlight),
        );

        canvas
    }

    /// Fill every pixel within `radius` of `center`, clipped to the canvas
    fn fill_circle(canvas: &mut RgbImage, center: (i64, i64), radius: i64, color: Rgb<u8>) {
        let (cx, cy) = center;
        let width = canvas.width() as i64;
        let height = canvas.height() as i64;
        let radius_sq = radius * radius;

        let (x0, x1) = ((cx - radius).max(0), (cx + radius).min(width - 1));
        let (y0, y1) = ((cy - radius).max(0), (cy + radius).min(height - 1));

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x - cx;
                let dy = y - cy;
                if dx * dx + dy * dy <= radius_sq {
                    canvas.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    // Encode RGB data as PNG with compression
    fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> image::ImageResult<()> {
        let encoder =
            PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
        encoder.write_image(image_data, size, size, ColorType::Rgb8)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_16px_icon_layers() {
            let layout = IconLayout::new(16);
            let canvas = draw_icon(&layout, &Palette::default());

            // corner is untouched background
            assert_eq!(canvas.get_pixel(0, 0), &Rgb([0x21, 0x96, 0xF3]));
            // outermost ring (radius 7) wins over every smaller ring
            assert_eq!(canvas.get_pixel(14, 8), &Rgb([40, 157, 243]));
            // ball center is off the highlight
            assert_eq!(canvas.get_pixel(8, 8), &Rgb([0xFF, 0x6B, 0x6B]));
            assert_eq!(canvas.get_pixel(12, 8), &Rgb([0xFF, 0x6B, 0x6B]));
            // highlight sits up and to the left
            assert_eq!(canvas.get_pixel(6, 6), &Rgb([0xFF, 0xB6, 0xC1]));
            assert_eq!(canvas.get_pixel(7, 6), &Rgb([0xFF, 0xB6, 0xC1]));
        }

        #[test]
        fn test_512px_ring_color_saturates() {
            let layout = IconLayout::new(512);
            let canvas = draw_icon(&layout, &Palette::default());

            // radius 255 ring: 33+255 and 150+255 both clamp
            assert_eq!(canvas.get_pixel(256 + 200, 256), &Rgb([255, 255, 243]));
            assert_eq!(canvas.get_pixel(0, 0), &Rgb([0x21, 0x96, 0xF3]));
            assert_eq!(canvas.get_pixel(256, 256), &Rgb([0xFF, 0x6B, 0x6B]));
        }

        #[test]
        fn test_matches_full_ring_overdraw() {
            let palette = Palette::default();

            for size in [16, 72, 97] {
                let layout = IconLayout::new(size);
                let mut expected = RgbImage::from_pixel(size, size, Rgb(palette.background));
                let center = layout.center as i64;
                for i in layout.ring_radii() {
                    fill_circle(&mut expected, (center, center), i as i64, Rgb(palette.ring(i)));
                }
                fill_circle(
                    &mut expected,
                    (center, center),
                    layout.ball_radius as i64,
                    Rgb(palette.ball),
                );
                let (hx, hy) = layout.highlight_center;
                fill_circle(
                    &mut expected,
                    (hx as i64, hy as i64),
                    layout.highlight_radius as i64,
                    Rgb(palette.highlight),
                );

                assert!(draw_icon(&layout, &palette) == expected, "mismatch at {size}px");
            }
        }

        #[test]
        fn test_circle_clipped_to_canvas() {
            let layout = IconLayout::new(4);
            let canvas = draw_icon(&layout, &Palette::default());

            // ball radius 4 reaches past every edge of a 4x4 canvas
            assert_eq!(canvas.get_pixel(3, 3), &Rgb([0xFF, 0x6B, 0x6B]));
            // highlight center clamps to the corner
            assert_eq!(layout.highlight_center, (0, 0));
            assert_eq!(canvas.get_pixel(0, 0), &Rgb([0xFF, 0xB6, 0xC1]));
            assert_eq!(canvas.dimensions(), (4, 4));
        }

        #[test]
        fn test_encoded_png_decodes_to_rgb() {
            let layout = IconLayout::new(32);
            let bytes = PngRasterizer
                .encode_icon(&layout, &Palette::default())
                .unwrap();

            let decoded = image::load_from_memory(&bytes).unwrap();
            assert_eq!(decoded.width(), 32);
            assert_eq!(decoded.height(), 32);
            assert_eq!(decoded.color(), ColorType::Rgb8);
        }

        #[test]
        fn test_encoding_is_deterministic() {
            let layout = IconLayout::new(144);
            let palette = Palette::default();
            let first = PngRasterizer.encode_icon(&layout, &palette).unwrap();
            let second = PngRasterizer.encode_icon(&layout, &palette).unwrap();
            assert_eq!(first, second);
        }

        #[test]
        fn test_oversized_icon_is_rejected() {
            let palette = Palette::default();

            for size in [0, MAX_ICON_SIZE + 1, u32::MAX] {
                let err = PngRasterizer
                    .encode_icon(&IconLayout::new(size), &palette)
                    .unwrap_err();
                assert!(matches!(err, Error::Encode { size: s, .. } if s == size));
            }
        }

        #[test]
        fn test_probe_finds_png_backend() {
            let backend = probe().unwrap();
            assert_eq!(backend.name(), "image/png");
        }
    }
}
