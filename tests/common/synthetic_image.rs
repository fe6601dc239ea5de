#![allow(dead_code)]

/// Coverage of a pixel centred at integer `x` by the half-plane `x' < edge`.
fn half_plane_coverage(x: usize, edge: f32) -> f32 {
    (edge - (x as f32 - 0.5)).clamp(0.0, 1.0)
}

/// Antialiased vertical step: bright (255) left of `edge`, dark (0) right of it.
pub fn vertical_step_u8(width: usize, height: usize, edge: f32) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let row: Vec<u8> = (0..width)
        .map(|x| (half_plane_coverage(x, edge) * 255.0).round() as u8)
        .collect();
    row.iter().copied().cycle().take(width * height).collect()
}

/// Antialiased bright disc on a dark background.
pub fn disc_u8(width: usize, height: usize, center: [f32; 2], radius: f32) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(radius > 0.0, "radius must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let d = distance_to(center, [x as f32, y as f32]);
            let coverage = (radius - d + 0.5).clamp(0.0, 1.0);
            img[y * width + x] = (coverage * 255.0).round() as u8;
        }
    }
    img
}

/// RGBA8 icon: a colour gradient with the disc from [`disc_u8`] as alpha.
pub fn rgba_icon(width: usize, height: usize, center: [f32; 2], radius: f32) -> Vec<u8> {
    let alpha = disc_u8(width, height, center, radius);
    let mut data = Vec::with_capacity(width * height * 4);
    for (i, a) in alpha.into_iter().enumerate() {
        let (x, y) = (i % width, i / width);
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        data.extend_from_slice(&[r, g, 90, a]);
    }
    data
}

pub fn distance_to(a: [f32; 2], b: [f32; 2]) -> f32 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
}
