use image::io::Reader as ImageReader;
use pwa_icons::icon::{IconLayout, Palette};
use std::process::ExitCode;

fn main() -> ExitCode {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "icons/icon-512x512.png".to_string());

    let decoded = ImageReader::open(&path)
        .map_err(|err| err.to_string())
        .and_then(|reader| reader.decode().map_err(|err| err.to_string()));

    let img = match decoded {
        Ok(img) => img,
        Err(err) => {
            eprintln!("Failed to load {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let rgb_img = img.to_rgb8();
    let width = img.width();
    let height = img.height();

    println!("Checking icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);

    if width != height {
        println!("⚠ Icon is not square");
        return ExitCode::FAILURE;
    }

    let layout = IconLayout::new(width);
    let palette = Palette::default();
    println!(
        "Expected ball radius {} and highlight radius {}",
        layout.ball_radius, layout.highlight_radius
    );

    let mut ok = true;

    // The highlight sits ball_radius/2 up and left, too far to cover the ball center
    let samples = [
        ("ball", (layout.center, layout.center), palette.ball),
        ("highlight", layout.highlight_center, palette.highlight),
        ("background", (0, 0), palette.background),
    ];

    for (name, (x, y), expected) in samples {
        if x >= width || y >= height {
            continue;
        }
        let pixel = rgb_img.get_pixel(x, y);
        let matches = pixel.0 == expected;
        println!(
            "  {name:<10} (x={x}, y={y}): RGB [{}, {}, {}] {}",
            pixel[0],
            pixel[1],
            pixel[2],
            if matches { "✓" } else { "✗" }
        );
        ok &= matches;
    }

    if ok {
        println!("✓ Icon layout verified!");
        ExitCode::SUCCESS
    } else {
        println!("⚠ Icon does not match the default layout");
        ExitCode::FAILURE
    }
}
