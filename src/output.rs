//! PNG export of the final pixel buffer.

use image::{ImageResult, RgbImage};
use log::info;

/// Encode the buffer as a PNG file at `output_path`.
///
/// Writing the output file is the only fallible operation in the program;
/// the error is returned so the driver can report it and exit.
pub fn save_image_as_png(image: &RgbImage, output_path: &str) -> ImageResult<()> {
    image.save(output_path)?;
    info!("Image saved as {}", output_path);
    Ok(())
}
