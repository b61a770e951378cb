//! Renders a ramp between two colors in each blend model, one model per band.
use image_colorimetry::{Color, HexError, Model};

const WIDTH: u32 = 512;
const BAND: u32 = 32;

const MODELS: [Model; 8] = [
    Model::Rgb,
    Model::LinearRgb,
    Model::Hsl,
    Model::Hsv,
    Model::Lab,
    Model::Luv,
    Model::Hcl,
    Model::LuvLch,
];

fn main() -> Result<(), HexError> {
    let mut args = std::env::args().skip(1);
    let from: Color = args.next().as_deref().unwrap_or("#fdffcc").parse()?;
    let into: Color = args.next().as_deref().unwrap_or("#242a42").parse()?;

    let height = BAND * MODELS.len() as u32;
    let image = image::RgbImage::from_fn(WIDTH, height, |x, y| {
        let model = MODELS[(y / BAND) as usize];
        let t = f64::from(x) / f64::from(WIDTH - 1);
        image::Rgb(from.blend(into, t, model).clamped().to_rgb8())
    });

    let output = concat!(env!("CARGO_MANIFEST_DIR"), "/../blend.png");
    image.save(output).unwrap();

    Ok(())
}
