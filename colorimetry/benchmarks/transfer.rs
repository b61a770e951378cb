//! Benchmarks the exact against the fast sRGB transfer functions.
use brunch::Bench;
use std::hint::black_box;

use image_colorimetry::Color;

/// Every color of a coarse 8-bit grid, so both segments of the curve are exercised.
fn colors() -> Vec<Color> {
    let steps = (0..=255u8).step_by(15);
    steps
        .clone()
        .flat_map(|r| {
            let steps = steps.clone();
            steps.clone().flat_map(move |g| steps.clone().map(move |b| [r, g, b]))
        })
        .map(Color::from_rgb8)
        .collect()
}

fn to_linear(colors: Vec<Color>, convert: fn(Color) -> [f64; 3]) -> impl FnMut() -> f64 {
    move || {
        colors
            .iter()
            .map(|&color| convert(black_box(color)).iter().sum::<f64>())
            .sum()
    }
}

fn from_linear(colors: Vec<Color>, convert: fn(f64, f64, f64) -> Color) -> impl FnMut() -> f64 {
    move || {
        colors
            .iter()
            .map(|&Color { r, g, b }| {
                let color = convert(black_box(r), black_box(g), black_box(b));
                color.r + color.g + color.b
            })
            .sum()
    }
}

fn main() {
    let colors = colors();

    let mut benches = brunch::Benches::default();
    benches.extend([
        Bench::new("colorimetry::transfer::to_linear_rgb")
            .run(to_linear(colors.clone(), Color::to_linear_rgb)),
        Bench::new("colorimetry::transfer::to_linear_rgb_fast")
            .run(to_linear(colors.clone(), Color::to_linear_rgb_fast)),
        Bench::new("colorimetry::transfer::from_linear_rgb")
            .run(from_linear(colors.clone(), Color::from_linear_rgb)),
        Bench::new("colorimetry::transfer::from_linear_rgb_fast")
            .run(from_linear(colors, Color::from_linear_rgb_fast)),
    ]);
    benches.finish();
}
