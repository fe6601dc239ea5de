//! I/O helpers for pixel buffers and JSON.
//!
//! - `load_pixel_buffer`: read a PNG/JPEG into `G8` (gray sources) or `Rgba8`.
//! - `save_pixel_buffer`: write an 8-bit buffer to disk, format chosen by extension.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{PixelBuffer, PixelFormat};
use image::{ColorType, DynamicImage, GrayImage, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk, keeping a single channel when the source is gray.
pub fn load_pixel_buffer(path: &Path) -> Result<PixelBuffer, String> {
    let img = image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    let width = img.width() as usize;
    let height = img.height() as usize;
    let (format, data) = match img.color() {
        ColorType::L8 | ColorType::L16 => (PixelFormat::G8, img.into_luma8().into_raw()),
        _ => (PixelFormat::Rgba8, img.into_rgba8().into_raw()),
    };
    PixelBuffer::from_raw(width, height, format, data)
        .map_err(|e| format!("Failed to wrap {}: {e}", path.display()))
}

/// Save an 8-bit pixel buffer. BGR-ordered layouts are swizzled to RGBA.
pub fn save_pixel_buffer(buffer: &PixelBuffer, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let (w, h) = (buffer.width() as u32, buffer.height() as u32);
    let image = match buffer.format() {
        PixelFormat::G8 => GrayImage::from_raw(w, h, buffer.as_bytes().to_vec())
            .map(DynamicImage::ImageLuma8),
        PixelFormat::Rgba8 => RgbaImage::from_raw(w, h, buffer.as_bytes().to_vec())
            .map(DynamicImage::ImageRgba8),
        PixelFormat::Bgra8 | PixelFormat::Bgre8 => {
            let rgba = buffer
                .as_bytes()
                .chunks_exact(4)
                .flat_map(|px| [px[2], px[1], px[0], px[3]])
                .collect();
            RgbaImage::from_raw(w, h, rgba).map(DynamicImage::ImageRgba8)
        }
        other => return Err(format!("Cannot save {other:?} buffers")),
    }
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
