use clap::Parser;
use glam::Vec3A;
use image::Rgb;
use log::{error, info};
use std::time::Instant;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use spherecast::antialias::downsample;
use spherecast::camera::Camera;
use spherecast::output::save_image_as_png;
use spherecast::sphere::Sphere;

/// Fixed point light position for the whole render.
const LIGHT: Vec3A = Vec3A::new(-15.0, 15.0, 20.0);

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!("Spherecast - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    let sphere = Sphere::new(
        Vec3A::new(args.sphere_center[0], args.sphere_center[1], args.sphere_center[2]),
        args.sphere_radius,
        Rgb([args.sphere_color[0], args.sphere_color[1], args.sphere_color[2]]),
    );

    // Supersample: render at base * 2^levels so every antialias level halves
    // an even-sized buffer. The CLI caps the levels at 12, so the shift
    // cannot overflow; the multiply is still checked for very large bases.
    let scale = 1u32 << args.aa_levels;
    let (render_width, render_height) = match (args.width.checked_mul(scale), args.height.checked_mul(scale)) {
        (Some(w), Some(h)) => (w, h),
        _ => {
            error!(
                "supersampled resolution {}x{} at {} antialias levels exceeds u32",
                args.width, args.height, args.aa_levels
            );
            std::process::exit(1);
        }
    };
    let camera = Camera::new(render_width, render_height, args.fov);
    info!(
        "Output resolution: {}x{}, supersampled at {}x{} ({} antialias levels)",
        args.width, args.height, camera.image_width, camera.image_height, args.aa_levels
    );

    let start = Instant::now();
    let image = camera.render(&sphere, LIGHT);
    info!("raytrace: {:.3} secs", start.elapsed().as_secs_f32());

    let start = Instant::now();
    let image = downsample(image, args.aa_levels);
    info!("antialiasing: {:.3} secs", start.elapsed().as_secs_f32());

    if let Err(e) = save_image_as_png(&image, &args.output) {
        error!("unable to write image file {}: {}", args.output, e);
        std::process::exit(1);
    }
    info!("Image file: {}", args.output);
}
