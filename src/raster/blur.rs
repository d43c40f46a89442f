use crate::foundation::error::{KeylineError, KeylineResult};

/// Separable Gaussian blur over a single-channel plane.
///
/// The kernel radius is derived from sigma as `round(3 * sigma)`; sigma <= 0
/// degenerates to an identity copy. Border pixels are replicated, so a
/// constant plane blurs to itself and nothing bleeds in from outside the
/// image.
pub fn gaussian_blur_plane(
    src: &[u8],
    width: u32,
    height: u32,
    sigma: f32,
) -> KeylineResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| KeylineError::evaluation("blur plane size overflow"))?;
    if src.len() != expected_len {
        return Err(KeylineError::evaluation(
            "gaussian_blur_plane expects src matching width*height",
        ));
    }

    let radius = auto_radius(sigma)?;
    if radius == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    horizontal_pass(src, &mut tmp, width, height, &kernel);
    vertical_pass(&tmp, &mut out, width, height, &kernel);
    Ok(out)
}

fn auto_radius(sigma: f32) -> KeylineResult<u32> {
    if !sigma.is_finite() {
        return Err(KeylineError::validation("blur sigma must be finite"));
    }
    if sigma <= 0.0 {
        return Ok(0);
    }
    Ok((3.0 * sigma).round() as u32)
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> KeylineResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(KeylineError::validation("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let mut weights_f = Vec::<f64>::with_capacity((2 * r + 1) as usize);
    let mut sum = 0.0f64;
    let sigma = sigma as f64;
    let denom = 2.0 * sigma * sigma;
    for i in -r..=r {
        let x = i as f64;
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }
    if sum <= 0.0 {
        return Err(KeylineError::evaluation("gaussian kernel sum is zero"));
    }

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = ((wf / sum) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    // Force the fixed-point weights to sum to exactly 1.0 in q16 so constant
    // regions pass through unchanged.
    let target: i64 = 65536;
    let delta = target - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        let mid_val = i64::from(weights[mid]);
        let new_mid = (mid_val + delta).clamp(0, 65536);
        weights[mid] = new_mid as u32;
    }

    Ok(weights)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    for y in 0..height as i32 {
        for x in 0..w {
            let mut acc = 0u64;
            for (ki, &kw) in k.iter().enumerate() {
                let dx = ki as i32 - radius;
                let sx = (x + dx).clamp(0, w - 1);
                acc += (kw as u64) * (src[(y * w + sx) as usize] as u64);
            }
            dst[(y * w + x) as usize] = q16_to_u8(acc);
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0u64;
            for (ki, &kw) in k.iter().enumerate() {
                let dy = ki as i32 - radius;
                let sy = (y + dy).clamp(0, h - 1);
                acc += (kw as u64) * (src[(sy * w + x) as usize] as u64);
            }
            dst[(y * w + x) as usize] = q16_to_u8(acc);
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    (v.min(255)) as u8
}
