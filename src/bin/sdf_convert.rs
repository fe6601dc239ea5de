use bitmap_sdf::config::convert::load_config;
use bitmap_sdf::image::io::{load_pixel_buffer, save_pixel_buffer, write_json_file};
use bitmap_sdf::{SdfConverter, SdfOutput};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mut image = load_pixel_buffer(&config.input)?;
    let converter = SdfConverter::new(config.params);
    let output = converter
        .convert(&mut image)
        .map_err(|e| format!("Conversion of {} failed: {e}", config.input.display()))?;

    let (sdf, report) = match output {
        SdfOutput::InPlace(report) => (image, report),
        SdfOutput::Resampled { image, report } => (image, report),
    };

    save_pixel_buffer(&sdf, &config.output.image)?;
    println!(
        "Saved {}x{} distance field to {} ({} of {} channels converted, {:.2} ms)",
        sdf.width(),
        sdf.height(),
        config.output.image.display(),
        report.converted_count(),
        report.channels.len(),
        report.timings.total_ms
    );

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("Saved conversion report to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: sdf_convert <config.json>".to_string()
}
