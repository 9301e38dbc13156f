//! 3x subpixel downsampling.
//!
//! The source plane is rasterized at three times the output resolution along one axis. Each
//! output pixel owns one triplet of oversampled pixels; every color channel is low-pass filtered
//! around the subpixel that channel occupies on the physical display. The first and last output
//! column (row) lack a full 5-tap neighbourhood and are copied from the outermost oversampled
//! column (row) instead.

use crate::foundation::core::SubpixelOrder;
use crate::foundation::error::{RenderError, RenderResult};
use crate::raster::blit::blit_row;
use crate::raster::filter::fir5;
use crate::raster::plane::PixelPlane;

/// Shrink a plane oversampled 3x horizontally into `dst`.
///
/// The output width is `dst.width()`; `src` must be exactly three times as wide and at least as
/// tall. Only the three color bytes of each destination pixel are written.
pub fn downsample_horizontal(
    dst: &mut PixelPlane,
    src: &PixelPlane,
    order: SubpixelOrder,
) -> RenderResult<()> {
    let width = dst.width() as usize;
    let height = dst.height();
    if src.width() as usize != width * 3 || src.height() < height {
        return Err(RenderError::invalid_arguments(format!(
            "horizontal downsample needs a {}x{} source, got {}x{}",
            width * 3,
            height,
            src.width(),
            src.height()
        )));
    }
    if width == 0 {
        return Ok(());
    }

    let n = src.components();
    let m = dst.components();
    let offsets = order.channel_offsets();
    let last_src = (width * 3 - 1) * n;

    for y in 0..height {
        let s = src.row(y);
        let d = dst.row_mut(y);

        d[..3].copy_from_slice(&s[..3]);
        if width >= 2 {
            let last_dst = (width - 1) * m;
            d[last_dst..last_dst + 3].copy_from_slice(&s[last_src..last_src + 3]);
        }

        for x in 1..width.saturating_sub(1) {
            let mid = 3 * x + 1;
            let out = &mut d[x * m..x * m + 3];
            for (ch, &off) in offsets.iter().enumerate() {
                // x >= 1 keeps `c - 2 >= 1`; x <= width - 2 keeps `c + 2 <= 3 * width - 2`.
                let c = mid.wrapping_add_signed(off);
                let tap = |i: usize| s[(c + i - 2) * n + ch];
                out[ch] = fir5([tap(0), tap(1), tap(2), tap(3), tap(4)]);
            }
        }
    }
    Ok(())
}

/// Shrink a plane oversampled 3x vertically into `dst`.
///
/// The output height is `dst.height()`; `src` must be exactly three times as tall and at least as
/// wide. Only the three color bytes of each destination pixel are written.
pub fn downsample_vertical(
    dst: &mut PixelPlane,
    src: &PixelPlane,
    order: SubpixelOrder,
) -> RenderResult<()> {
    let width = dst.width() as usize;
    let height = dst.height();
    if src.height() as u64 != u64::from(height) * 3 || (src.width() as usize) < width {
        return Err(RenderError::invalid_arguments(format!(
            "vertical downsample needs a {}x{} source, got {}x{}",
            width,
            u64::from(height) * 3,
            src.width(),
            src.height()
        )));
    }
    if height == 0 {
        return Ok(());
    }

    let n = src.components();
    let m = dst.components();
    let offsets = order.channel_offsets();

    blit_row(dst.row_mut(0), m, src.row(0), n, width);
    if height >= 2 {
        blit_row(dst.row_mut(height - 1), m, src.row(height * 3 - 1), n, width);
    }

    for y in 1..height.saturating_sub(1) {
        // Rows mid-3 ..= mid+3 cover every tap of every channel.
        let mid = 3 * y + 1;
        let rows: [&[u8]; 7] = std::array::from_fn(|i| src.row(mid - 3 + i as u32));
        let d = dst.row_mut(y);
        for x in 0..width {
            let out = &mut d[x * m..x * m + 3];
            for (ch, &off) in offsets.iter().enumerate() {
                let first = (1 + off) as usize;
                let tap = |i: usize| rows[first + i][x * n + ch];
                out[ch] = fir5([tap(0), tap(1), tap(2), tap(3), tap(4)]);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/raster/subpix.rs"]
mod tests;
