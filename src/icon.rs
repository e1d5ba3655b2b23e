//! Tray icon generation
//!
//! Draws a small dartboard: alternating rings with a bullseye

const BOARD_COLORS: [[u8; 4]; 2] = [
    [0x1E, 0x1E, 0x1E, 0xFF], // black
    [0xF2, 0xE6, 0xC8, 0xFF], // cream
];
const RING_COLORS: [[u8; 4]; 2] = [
    [0xD3, 0x2F, 0x2F, 0xFF], // red
    [0x2E, 0x7D, 0x32, 0xFF], // green
];
const BULL_COLOR: [u8; 4] = [0xD3, 0x2F, 0x2F, 0xFF];
const SEGMENTS: f32 = 20.0;

/// Color of the board at polar position, `None` outside the board
fn board_pixel(radius: f32, angle: f32) -> Option<[u8; 4]> {
    // Radii as fractions of the board radius
    const BULL: f32 = 0.12;
    const TREBLE_IN: f32 = 0.52;
    const TREBLE_OUT: f32 = 0.62;
    const DOUBLE_IN: f32 = 0.86;
    const DOUBLE_OUT: f32 = 1.0;

    if radius > DOUBLE_OUT {
        return None;
    }
    if radius <= BULL {
        return Some(BULL_COLOR);
    }

    let turn = (angle / std::f32::consts::TAU).rem_euclid(1.0);
    let segment = (turn * SEGMENTS) as usize % 2;
    let is_ring = (TREBLE_IN..TREBLE_OUT).contains(&radius) || radius >= DOUBLE_IN;

    Some(if is_ring {
        RING_COLORS[segment]
    } else {
        BOARD_COLORS[segment]
    })
}

/// Generate the dartboard icon, returns RGBA pixel data
fn generate_dartboard_icon(size: u32) -> Vec<u8> {
    let mut rgba = vec![0u8; (size * size * 4) as usize];
    let center = size as f32 / 2.0;
    let board_radius = center - 1.0;

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let radius = (dx * dx + dy * dy).sqrt() / board_radius;
            // Offset half a segment so 20 sits at the top
            let angle = dy.atan2(dx) + std::f32::consts::PI / SEGMENTS;

            if let Some(color) = board_pixel(radius, angle) {
                let idx = ((y * size + x) * 4) as usize;
                rgba[idx..idx + 4].copy_from_slice(&color);
            }
            // else: transparent (already 0)
        }
    }

    rgba
}

/// Load and create the tray icon
pub fn load_icon() -> Result<tray_icon::Icon, tray_icon::BadIcon> {
    let size = 32u32;
    let rgba = generate_dartboard_icon(size);

    tray_icon::Icon::from_rgba(rgba, size, size)
}
