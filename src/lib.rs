//! lcdpage rasterizes vector pages into display buffers with LCD subpixel antialiasing.
//!
//! # Pipeline overview
//!
//! 1. **Scale**: derive device-pixels-per-page-unit from the document zoom (owned buffers) or
//!    from the target surface size (surfaces, independent per axis).
//! 2. **Rasterize**: draw the page at 3x along the subpixel axis into a white BGR plane
//!    ([`VectorRasterizer`], [`CpuRasterizer`]).
//! 3. **Downsample**: filter each color channel around its physical subpixel with a fixed-point
//!    5-tap FIR ([`fir5`]), or blit directly when antialiasing is off.
//!
//! Two entry points write the result: [`PageRenderer::render_to_owned_buffer`] returns a new
//! 3-component plane, [`PageRenderer::render_into_surface_buffer`] writes the color bytes of a
//! caller-owned 4-byte-per-pixel [`Surface`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod page;
mod raster;
mod render;

pub use foundation::core::{
    Affine, BezPath, Point, Rect, ScaleFactors, SubpixelOrder, Supersampling,
};
pub use foundation::error::{ErrorCode, RenderError, RenderResult};
pub use page::model::{Document, FillRule, Page, PageContent, PageItem};
pub use raster::blit::{blit_plane, blit_row};
pub use raster::filter::{FIR_WEIGHT_SUM, fir5};
pub use raster::plane::PixelPlane;
pub use raster::subpix::{downsample_horizontal, downsample_vertical};
pub use render::cpu::CpuRasterizer;
pub use render::rasterizer::{DisplayList, DisplaySource, DrawCommand, VectorRasterizer};
pub use render::renderer::{
    PageRenderer, RenderOpts, SUBPIXEL_ORDER_ENV, parse_subpixel_setting,
};
pub use render::surface::{Surface, SurfaceFormat};
