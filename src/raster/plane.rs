use crate::foundation::error::{RenderError, RenderResult};

/// A rectangular, row-major grid of 8-bit pixels.
///
/// Each pixel has `components` bytes (3 or 4); the first three are color channels in BGR order.
/// Rows are `row_stride` bytes apart and may carry trailing padding. The last row only needs
/// `width * components` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelPlane {
    width: u32,
    height: u32,
    components: usize,
    row_stride: usize,
    data: Vec<u8>,
}

impl PixelPlane {
    /// Allocate a tightly packed plane filled with `0`.
    pub fn new(width: u32, height: u32, components: usize) -> RenderResult<Self> {
        Self::filled(width, height, components, 0)
    }

    /// Allocate a tightly packed plane with every byte set to `value`.
    pub fn filled(width: u32, height: u32, components: usize, value: u8) -> RenderResult<Self> {
        let row_stride = min_row_stride(width, components)?;
        Self::with_stride(width, height, components, row_stride, value)
    }

    /// Allocate a plane with an explicit row stride, every byte set to `value`.
    pub fn with_stride(
        width: u32,
        height: u32,
        components: usize,
        row_stride: usize,
        value: u8,
    ) -> RenderResult<Self> {
        check_components(components)?;
        let min = min_row_stride(width, components)?;
        if row_stride < min {
            return Err(RenderError::invalid_arguments(format!(
                "row stride {row_stride} is smaller than width * components ({min})"
            )));
        }
        let len = (height as usize)
            .checked_mul(row_stride)
            .ok_or_else(|| RenderError::invalid_arguments("plane byte size overflows usize"))?;

        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|e| {
            RenderError::out_of_memory(format!("{width}x{height} plane ({len} bytes): {e}"))
        })?;
        data.resize(len, value);

        Ok(Self {
            width,
            height,
            components,
            row_stride,
            data,
        })
    }

    /// Wrap an existing byte buffer, validating its geometry.
    pub fn from_parts(
        width: u32,
        height: u32,
        components: usize,
        row_stride: usize,
        data: Vec<u8>,
    ) -> RenderResult<Self> {
        check_components(components)?;
        let min = min_row_stride(width, components)?;
        if row_stride < min {
            return Err(RenderError::invalid_arguments(format!(
                "row stride {row_stride} is smaller than width * components ({min})"
            )));
        }
        let required = required_len(height, row_stride, min)
            .ok_or_else(|| RenderError::invalid_arguments("plane byte size overflows usize"))?;
        if data.len() < required {
            return Err(RenderError::invalid_arguments(format!(
                "plane buffer too small: {} bytes, need {required}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            components,
            row_stride,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per pixel.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Bytes between the starts of consecutive rows.
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    /// Raw backing bytes, including row padding.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw backing bytes, including row padding.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the plane and return its backing bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Pixel bytes of row `y` (`width * components` bytes, no padding).
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.row_stride;
        &self.data[start..start + self.row_len()]
    }

    /// Mutable pixel bytes of row `y`.
    ///
    /// Panics if `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.row_stride;
        let len = self.row_len();
        &mut self.data[start..start + len]
    }

    /// All `components` bytes of the pixel at `(x, y)`.
    ///
    /// Panics if the coordinate is outside the plane.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        assert!(x < self.width, "x {x} out of bounds (width {})", self.width);
        let off = x as usize * self.components;
        &self.row(y)[off..off + self.components]
    }

    /// The three color bytes of the pixel at `(x, y)`.
    pub fn bgr(&self, x: u32, y: u32) -> [u8; 3] {
        let px = self.pixel(x, y);
        [px[0], px[1], px[2]]
    }

    fn row_len(&self) -> usize {
        self.width as usize * self.components
    }
}

fn check_components(components: usize) -> RenderResult<()> {
    if components != 3 && components != 4 {
        return Err(RenderError::invalid_arguments(format!(
            "unsupported component count {components} (expected 3 or 4)"
        )));
    }
    Ok(())
}

fn min_row_stride(width: u32, components: usize) -> RenderResult<usize> {
    (width as usize)
        .checked_mul(components)
        .ok_or_else(|| RenderError::invalid_arguments("row size overflows usize"))
}

fn required_len(height: u32, row_stride: usize, row_len: usize) -> Option<usize> {
    if height == 0 {
        return Some(0);
    }
    (height as usize - 1)
        .checked_mul(row_stride)?
        .checked_add(row_len)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/plane.rs"]
mod tests;
