use crate::raster::plane::PixelPlane;

/// Copy the three color bytes of `width` pixels from `src` into `dst`.
///
/// `dst_step`/`src_step` are the byte distances between consecutive pixels on each side and must
/// be at least 3. Bytes past the first three of each destination pixel are never written.
/// Copies fewer pixels if either slice runs out first.
pub fn blit_row(dst: &mut [u8], dst_step: usize, src: &[u8], src_step: usize, width: usize) {
    debug_assert!(dst_step >= 3 && src_step >= 3);
    for (d, s) in dst
        .chunks_mut(dst_step)
        .zip(src.chunks(src_step))
        .take(width)
    {
        if d.len() < 3 || s.len() < 3 {
            break;
        }
        d[..3].copy_from_slice(&s[..3]);
    }
}

/// Copy the overlapping region of `src` into `dst`, row by row.
///
/// Component counts and row strides may differ between the two planes.
pub fn blit_plane(dst: &mut PixelPlane, src: &PixelPlane) {
    let width = dst.width().min(src.width()) as usize;
    let height = dst.height().min(src.height());
    let (dst_step, src_step) = (dst.components(), src.components());
    for y in 0..height {
        blit_row(dst.row_mut(y), dst_step, src.row(y), src_step, width);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/blit.rs"]
mod tests;
