use crate::driver::FrameOutcome;
use perch_base::{Tensor, Vec2};
use perch_posture::PostureLabel;

const GOOD_COLOR: [u8; 3] = [0, 255, 0];
const BAD_COLOR: [u8; 3] = [255, 0, 0];
const SKELETON_COLOR: [u8; 3] = [245, 117, 66];
const BOX_COLOR: [u8; 3] = [40, 40, 40];

fn set_pixel(buf: &mut [u8], width: usize, height: usize, x: i32, y: i32, color: [u8; 3]) {
    if x < 0 || y < 0 || x as usize >= width || y as usize >= height {
        return;
    }
    let idx = (y as usize * width + x as usize) * 3;
    buf[idx..idx + 3].copy_from_slice(&color);
}

// Cohen-Sutherland region codes
const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const ABOVE: u8 = 4;
const BELOW: u8 = 8;

fn region_code(x: i32, y: i32, width: i32, height: i32) -> u8 {
    let mut code = INSIDE;
    if x < 0 {
        code |= LEFT;
    } else if x >= width {
        code |= RIGHT;
    }
    if y < 0 {
        code |= ABOVE;
    } else if y >= height {
        code |= BELOW;
    }
    code
}

/// Move an out-of-bounds endpoint onto the buffer edge along the line's
/// true direction.
fn clip_endpoint(
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    code: u8,
    width: i32,
    height: i32,
) -> (i32, i32) {
    let dx = x1 - x0;
    let dy = y1 - y0;

    if code & ABOVE != 0 {
        (x0 + dx * (0 - y0) / dy, 0)
    } else if code & BELOW != 0 {
        (x0 + dx * (height - 1 - y0) / dy, height - 1)
    } else if code & LEFT != 0 {
        (0, y0 + dy * (0 - x0) / dx)
    } else {
        (width - 1, y0 + dy * (width - 1 - x0) / dx)
    }
}

/// Bresenham line with Cohen-Sutherland clipping, so off-frame landmarks
/// keep the segment on its true path instead of bending it toward a
/// clamped corner.
pub fn draw_line(
    buf: &mut [u8],
    width: usize,
    height: usize,
    mut x0: i32,
    mut y0: i32,
    mut x1: i32,
    mut y1: i32,
    color: [u8; 3],
) {
    let (w, h) = (width as i32, height as i32);

    loop {
        let code0 = region_code(x0, y0, w, h);
        let code1 = region_code(x1, y1, w, h);

        if code0 | code1 == 0 {
            break;
        }
        if code0 & code1 != 0 {
            // Both endpoints outside the same edge: nothing visible.
            return;
        }

        let code = if code0 != 0 { code0 } else { code1 };
        let (x, y) = clip_endpoint(x0, y0, x1, y1, code, w, h);
        if code == code0 {
            x0 = x;
            y0 = y;
        } else {
            x1 = x;
            y1 = y;
        }
    }

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        set_pixel(buf, width, height, x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Filled circle marker, clipped to the buffer.
pub fn draw_marker(
    buf: &mut [u8],
    width: usize,
    height: usize,
    cx: i32,
    cy: i32,
    radius: i32,
    color: [u8; 3],
) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                set_pixel(buf, width, height, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Filled axis-aligned rectangle, clipped to the buffer.
pub fn draw_filled_rect(
    buf: &mut [u8],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    color: [u8; 3],
) {
    for py in y..y + h {
        for px in x..x + w {
            set_pixel(buf, width, height, px, py, color);
        }
    }
}

/// Draw the frame's posture result onto the RGB buffer: the
/// shoulder–hip–knee segments, landmark dots, and a status box whose
/// indicator strip is green for good posture, red for bad.
pub fn annotate(frame: &mut Tensor<u8>, outcome: &FrameOutcome) {
    let (height, width) = (frame.shape[0], frame.shape[1]);
    let buf = frame.data.as_mut_slice();

    let to_pixels = |p: Vec2<f32>| -> (i32, i32) {
        ((p.x * width as f32) as i32, (p.y * height as f32) as i32)
    };

    let shoulder = to_pixels(outcome.sample.shoulder);
    let hip = to_pixels(outcome.sample.hip);
    let knee = to_pixels(outcome.sample.knee);

    draw_line(buf, width, height, shoulder.0, shoulder.1, hip.0, hip.1, SKELETON_COLOR);
    draw_line(buf, width, height, hip.0, hip.1, knee.0, knee.1, SKELETON_COLOR);
    for (x, y) in [shoulder, hip, knee] {
        draw_marker(buf, width, height, x, y, 4, [245, 66, 230]);
    }

    let indicator = match outcome.label {
        PostureLabel::Good => GOOD_COLOR,
        PostureLabel::Bad => BAD_COLOR,
    };
    draw_filled_rect(buf, width, height, 10, 10, 240, 60, BOX_COLOR);
    draw_filled_rect(buf, width, height, 20, 20, 40, 40, indicator);
}

/// Pack an RGB byte buffer into 0RGB u32 pixels for minifb.
pub fn rgb_to_argb(buf: &[u8], width: usize, height: usize) -> Vec<u32> {
    let mut argb = Vec::with_capacity(width * height);
    for pixel in buf.chunks_exact(3).take(width * height) {
        argb.push(((pixel[0] as u32) << 16) | ((pixel[1] as u32) << 8) | pixel[2] as u32);
    }
    argb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_line_horizontal() {
        let mut buf = vec![0u8; 10 * 5 * 3];
        draw_line(&mut buf, 10, 5, 1, 2, 8, 2, [255, 255, 255]);

        for x in 1..=8 {
            let idx = (2 * 10 + x) * 3;
            assert_eq!(buf[idx..idx + 3], [255, 255, 255]);
        }
        assert_eq!(buf[0..3], [0, 0, 0]);
    }

    #[test]
    fn test_draw_line_clips_out_of_bounds_endpoints() {
        let mut buf = vec![0u8; 10 * 10 * 3];
        draw_line(&mut buf, 10, 10, -5, 5, 15, 5, [255, 255, 255]);

        for x in 0..10 {
            let idx = (5 * 10 + x) * 3;
            assert_eq!(buf[idx..idx + 3], [255, 255, 255]);
        }
    }

    #[test]
    fn test_draw_line_keeps_true_path_when_clipped() {
        // A diagonal from (-10, 0) to (9, 9) enters the buffer at (0, 4).
        // Snapping the endpoint to (0, 0) instead would bend the segment
        // through the corner.
        let mut buf = vec![0u8; 10 * 10 * 3];
        draw_line(&mut buf, 10, 10, -10, 0, 9, 9, [255, 255, 255]);

        let entry = (4 * 10 + 0) * 3;
        assert_eq!(buf[entry..entry + 3], [255, 255, 255]);
        let corner = 0;
        assert_eq!(buf[corner..corner + 3], [0, 0, 0]);
        let end = (9 * 10 + 9) * 3;
        assert_eq!(buf[end..end + 3], [255, 255, 255]);
    }

    #[test]
    fn test_draw_line_fully_outside_draws_nothing() {
        let mut buf = vec![0u8; 10 * 10 * 3];
        draw_line(&mut buf, 10, 10, -5, -5, 20, -1, [255, 255, 255]);
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_draw_marker_fills_center_and_clips() {
        let mut buf = vec![0u8; 8 * 8 * 3];
        draw_marker(&mut buf, 8, 8, 0, 0, 2, [0, 255, 0]);

        let center = 0;
        assert_eq!(buf[center..center + 3], [0, 255, 0]);
        // Far corner untouched
        let corner = (7 * 8 + 7) * 3;
        assert_eq!(buf[corner..corner + 3], [0, 0, 0]);
    }

    #[test]
    fn test_draw_filled_rect() {
        let mut buf = vec![0u8; 6 * 6 * 3];
        draw_filled_rect(&mut buf, 6, 6, 1, 1, 2, 2, [9, 9, 9]);

        let inside = (1 * 6 + 1) * 3;
        assert_eq!(buf[inside..inside + 3], [9, 9, 9]);
        let outside = (3 * 6 + 3) * 3;
        assert_eq!(buf[outside..outside + 3], [0, 0, 0]);
    }

    #[test]
    fn test_rgb_to_argb_packing() {
        let buf = [255u8, 0, 0, 0, 255, 0, 0, 0, 255];
        let argb = rgb_to_argb(&buf, 3, 1);
        assert_eq!(argb, vec![0x00FF0000, 0x0000FF00, 0x000000FF]);
    }
}
