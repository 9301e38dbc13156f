use crate::foundation::error::{RenderError, RenderResult};
use crate::raster::plane::PixelPlane;

/// Pixel format of a [`Surface`].
///
/// The 32-bit formats are native-endian words; on little-endian hosts their bytes are
/// `B, G, R, A` (or `B, G, R, X`), matching the rasterizer's BGR channel order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceFormat {
    /// 32 bits per pixel with alpha in the high byte.
    Argb32,
    /// 32 bits per pixel, high byte unused.
    Rgb24,
    /// 8-bit alpha mask.
    A8,
}

impl SurfaceFormat {
    /// Bytes per pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Argb32 | Self::Rgb24 => 4,
            Self::A8 => 1,
        }
    }

    /// Returns `true` when page content can be rendered into this format.
    pub fn is_renderable(self) -> bool {
        self.bytes_per_pixel() == 4
    }

    /// Smallest 4-byte-aligned row stride for `width` pixels.
    pub fn stride_for_width(self, width: u32) -> Option<usize> {
        let row = (width as usize).checked_mul(self.bytes_per_pixel())?;
        Some(row.checked_add(3)? & !3)
    }
}

/// A caller-owned drawing surface with a fixed size and row stride.
///
/// Rendering into a surface writes the three color bytes of every pixel and leaves the fourth
/// byte untouched. The surface is never resized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    format: SurfaceFormat,
    storage: Storage,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Storage {
    Color(PixelPlane),
    Mask {
        width: u32,
        height: u32,
        stride: usize,
        data: Vec<u8>,
    },
}

impl Surface {
    /// Allocate a zeroed surface with an aligned stride.
    pub fn new(format: SurfaceFormat, width: u32, height: u32) -> RenderResult<Self> {
        let stride = format
            .stride_for_width(width)
            .ok_or_else(|| RenderError::invalid_arguments("surface row size overflows usize"))?;
        let storage = if format.is_renderable() {
            Storage::Color(PixelPlane::with_stride(width, height, 4, stride, 0)?)
        } else {
            let len = (height as usize)
                .checked_mul(stride)
                .ok_or_else(|| RenderError::invalid_arguments("surface size overflows usize"))?;
            let mut data = Vec::new();
            data.try_reserve_exact(len).map_err(|e| {
                RenderError::out_of_memory(format!("{width}x{height} surface: {e}"))
            })?;
            data.resize(len, 0);
            Storage::Mask {
                width,
                height,
                stride,
                data,
            }
        };
        Ok(Self { format, storage })
    }

    /// Wrap caller-provided pixel storage.
    pub fn from_data(
        format: SurfaceFormat,
        width: u32,
        height: u32,
        stride: usize,
        data: Vec<u8>,
    ) -> RenderResult<Self> {
        let storage = if format.is_renderable() {
            Storage::Color(PixelPlane::from_parts(width, height, 4, stride, data)?)
        } else {
            let needed = if height == 0 {
                0
            } else {
                (height as usize - 1) * stride + width as usize
            };
            if stride < width as usize || data.len() < needed {
                return Err(RenderError::invalid_arguments(format!(
                    "mask surface buffer does not fit {width}x{height} with stride {stride}"
                )));
            }
            Storage::Mask {
                width,
                height,
                stride,
                data,
            }
        };
        Ok(Self { format, storage })
    }

    /// Pixel format.
    pub fn format(&self) -> SurfaceFormat {
        self.format
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        match &self.storage {
            Storage::Color(p) => p.width(),
            Storage::Mask { width, .. } => *width,
        }
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        match &self.storage {
            Storage::Color(p) => p.height(),
            Storage::Mask { height, .. } => *height,
        }
    }

    /// Bytes between the starts of consecutive rows.
    pub fn stride(&self) -> usize {
        match &self.storage {
            Storage::Color(p) => p.row_stride(),
            Storage::Mask { stride, .. } => *stride,
        }
    }

    /// Raw pixel bytes.
    pub fn data(&self) -> &[u8] {
        match &self.storage {
            Storage::Color(p) => p.data(),
            Storage::Mask { data, .. } => data,
        }
    }

    /// Mutable raw pixel bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        match &mut self.storage {
            Storage::Color(p) => p.data_mut(),
            Storage::Mask { data, .. } => data,
        }
    }

    /// Consume the surface and return its pixel bytes.
    pub fn into_data(self) -> Vec<u8> {
        match self.storage {
            Storage::Color(p) => p.into_data(),
            Storage::Mask { data, .. } => data,
        }
    }

    /// The 4-component plane view of a renderable surface.
    pub fn plane(&self) -> Option<&PixelPlane> {
        match &self.storage {
            Storage::Color(p) => Some(p),
            Storage::Mask { .. } => None,
        }
    }

    /// Mutable 4-component plane of a renderable surface.
    ///
    /// Fails with [`RenderError::Unknown`] for formats that cannot hold rendered pages.
    pub(crate) fn plane_mut(&mut self) -> RenderResult<&mut PixelPlane> {
        match &mut self.storage {
            Storage::Color(p) => Ok(p),
            Storage::Mask { .. } => Err(RenderError::unknown(format!(
                "unsupported surface format {:?}",
                self.format
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
