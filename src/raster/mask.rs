use crate::foundation::core::Rgba8;
use crate::foundation::error::{KeylineError, KeylineResult};
use crate::foundation::math::mul_div255_u8;

/// Harden a plane to {0, 255}: any non-zero value becomes 255.
pub fn binarize_in_place(plane: &mut [u8]) {
    for v in plane.iter_mut() {
        if *v != 0 {
            *v = 255;
        }
    }
}

/// Per-pixel maximum of two planes, written into `dst`.
pub fn max_in_place(dst: &mut [u8], src: &[u8]) -> KeylineResult<()> {
    if dst.len() != src.len() {
        return Err(KeylineError::evaluation(
            "max_in_place expects equal-length planes",
        ));
    }
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d = (*d).max(*s);
    }
    Ok(())
}

/// Paint `color` into an RGBA8 buffer wherever `mask` is non-zero. Color
/// channels are written as-is; alpha is scaled by the mask value so soft mask
/// edges come out as soft alpha.
pub fn fill_masked(dst: &mut [u8], mask: &[u8], color: Rgba8) -> KeylineResult<()> {
    if dst.len() != mask.len() * 4 {
        return Err(KeylineError::evaluation(
            "fill_masked expects rgba8 dst matching mask length",
        ));
    }
    for (px, &m) in dst.chunks_exact_mut(4).zip(mask.iter()) {
        if m == 0 {
            continue;
        }
        px[0] = color.r;
        px[1] = color.g;
        px[2] = color.b;
        px[3] = mul_div255_u8(u16::from(color.a), u16::from(m));
    }
    Ok(())
}

/// Copy whole RGBA8 pixels from `src` into `dst` wherever `mask` is non-zero.
pub fn copy_masked(dst: &mut [u8], src: &[u8], mask: &[u8]) -> KeylineResult<()> {
    if dst.len() != src.len() || dst.len() != mask.len() * 4 {
        return Err(KeylineError::evaluation(
            "copy_masked expects equal rgba8 buffers matching mask length",
        ));
    }
    for ((d, s), &m) in dst
        .chunks_exact_mut(4)
        .zip(src.chunks_exact(4))
        .zip(mask.iter())
    {
        if m == 0 {
            continue;
        }
        d.copy_from_slice(s);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/raster/mask.rs"]
mod tests;
