use crate::foundation::error::{KeylineError, KeylineResult};

/// Edge detection over a single-channel plane.
///
/// Pipeline: 3x3 Sobel gradients, L1 magnitude, non-maximum suppression along
/// the quantized gradient direction, then double-threshold hysteresis:
/// magnitudes above `high` seed edges and magnitudes above `low` extend them
/// through 8-connected neighbors. Returns a plane with 255 at edge pixels and
/// 0 elsewhere.
///
/// On a strictly binary plane this isolates the one-pixel contour between the
/// two regions.
pub fn detect_edges(
    src: &[u8],
    width: u32,
    height: u32,
    low: i32,
    high: i32,
) -> KeylineResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| KeylineError::evaluation("edge plane size overflow"))?;
    if src.len() != expected_len {
        return Err(KeylineError::evaluation(
            "detect_edges expects src matching width*height",
        ));
    }
    if low > high {
        return Err(KeylineError::validation(
            "edge low threshold must be <= high threshold",
        ));
    }
    if expected_len == 0 {
        return Ok(Vec::new());
    }

    let w = width as i32;
    let h = height as i32;
    let at = |x: i32, y: i32| -> i32 {
        let sx = x.clamp(0, w - 1);
        let sy = y.clamp(0, h - 1);
        i32::from(src[(sy * w + sx) as usize])
    };

    let mut mag = vec![0i32; expected_len];
    let mut dir = vec![0u8; expected_len];
    for y in 0..h {
        for x in 0..w {
            let gx = at(x + 1, y - 1) + 2 * at(x + 1, y) + at(x + 1, y + 1)
                - at(x - 1, y - 1)
                - 2 * at(x - 1, y)
                - at(x - 1, y + 1);
            let gy = at(x - 1, y + 1) + 2 * at(x, y + 1) + at(x + 1, y + 1)
                - at(x - 1, y - 1)
                - 2 * at(x, y - 1)
                - at(x + 1, y - 1);
            let idx = (y * w + x) as usize;
            mag[idx] = gx.abs() + gy.abs();
            dir[idx] = quantize_direction(gx, gy);
        }
    }

    // Non-maximum suppression: keep only crest pixels along the gradient
    // direction. The asymmetric comparison (strict against the previous
    // neighbor, non-strict against the next) keeps exactly one pixel of a
    // two-wide plateau.
    let mut thin = vec![0i32; expected_len];
    for y in 0..h {
        for x in 0..w {
            let idx = (y * w + x) as usize;
            let m = mag[idx];
            if m == 0 {
                continue;
            }
            let (ox, oy) = direction_step(dir[idx]);
            let prev = mag_at(&mag, w, h, x - ox, y - oy);
            let next = mag_at(&mag, w, h, x + ox, y + oy);
            if m > prev && m >= next {
                thin[idx] = m;
            }
        }
    }

    // Hysteresis: flood from strong pixels through weak ones.
    let mut out = vec![0u8; expected_len];
    let mut stack = Vec::new();
    for idx in 0..expected_len {
        if thin[idx] <= high || out[idx] != 0 {
            continue;
        }
        out[idx] = 255;
        stack.push(idx);
        while let Some(cur) = stack.pop() {
            let cx = (cur % width as usize) as i32;
            let cy = (cur / width as usize) as i32;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let nx = cx + dx;
                    let ny = cy + dy;
                    if nx < 0 || ny < 0 || nx >= w || ny >= h {
                        continue;
                    }
                    let nidx = (ny * w + nx) as usize;
                    if out[nidx] == 0 && thin[nidx] > low {
                        out[nidx] = 255;
                        stack.push(nidx);
                    }
                }
            }
        }
    }

    Ok(out)
}

// Quantize the gradient into 4 sectors: 0 horizontal, 1 vertical, 2 falling
// diagonal, 3 rising diagonal.
fn quantize_direction(gx: i32, gy: i32) -> u8 {
    let ax = gx.abs();
    let ay = gy.abs();
    if 2 * ay <= ax {
        0
    } else if 2 * ax <= ay {
        1
    } else if (gx > 0) == (gy > 0) {
        2
    } else {
        3
    }
}

fn direction_step(dir: u8) -> (i32, i32) {
    match dir {
        0 => (1, 0),
        1 => (0, 1),
        2 => (1, 1),
        _ => (1, -1),
    }
}

fn mag_at(mag: &[i32], w: i32, h: i32, x: i32, y: i32) -> i32 {
    if x < 0 || y < 0 || x >= w || y >= h {
        return 0;
    }
    mag[(y * w + x) as usize]
}

#[cfg(test)]
#[path = "../../tests/unit/raster/edge.rs"]
mod tests;
