use crate::foundation::core::{ScaleFactors, SubpixelOrder, Supersampling};
use crate::foundation::error::{RenderError, RenderResult};
use crate::page::model::{Document, Page};
use crate::raster::blit::blit_plane;
use crate::raster::plane::PixelPlane;
use crate::raster::subpix::{downsample_horizontal, downsample_vertical};
use crate::render::cpu::CpuRasterizer;
use crate::render::rasterizer::VectorRasterizer;
use crate::render::surface::Surface;

/// Environment variable read by [`RenderOpts::from_env`].
pub const SUBPIXEL_ORDER_ENV: &str = "LCDPAGE_SUBPIXEL_ORDER";

/// Rendering options shared by every call on a [`PageRenderer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOpts {
    pub(crate) subpixel: Option<SubpixelOrder>,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            subpixel: Some(SubpixelOrder::default()),
        }
    }
}

impl RenderOpts {
    /// Return options with a configured subpixel order; `None` disables LCD antialiasing.
    pub fn with_subpixel_order(mut self, order: Option<SubpixelOrder>) -> Self {
        self.subpixel = order;
        self
    }

    /// Configured subpixel order, if LCD antialiasing is enabled.
    pub fn subpixel_order(&self) -> Option<SubpixelOrder> {
        self.subpixel
    }

    /// Defaults overridden by [`SUBPIXEL_ORDER_ENV`] (`hrgb`, `hbgr`, `vrgb`, `vbgr` or `none`).
    ///
    /// Unrecognised values are ignored.
    pub fn from_env() -> Self {
        let opts = Self::default();
        match std::env::var(SUBPIXEL_ORDER_ENV)
            .ok()
            .and_then(|v| parse_subpixel_setting(&v))
        {
            Some(order) => opts.with_subpixel_order(order),
            None => opts,
        }
    }
}

/// Parse a subpixel setting where `none`/`off` means antialiasing disabled.
pub fn parse_subpixel_setting(value: &str) -> Option<Option<SubpixelOrder>> {
    let v = value.trim();
    if v.eq_ignore_ascii_case("none") || v.eq_ignore_ascii_case("off") {
        return Some(None);
    }
    v.parse::<SubpixelOrder>().ok().map(Some)
}

/// Renders pages into display buffers, applying LCD subpixel antialiasing when configured.
///
/// Each call rasterizes from scratch: the page is drawn at 3x along the subpixel axis, then
/// filtered down into the destination. Nothing is cached between calls apart from whatever the
/// rasterizer keeps internally.
pub struct PageRenderer<R = CpuRasterizer> {
    rasterizer: R,
    opts: RenderOpts,
}

impl PageRenderer<CpuRasterizer> {
    /// Renderer backed by the CPU rasterizer.
    pub fn cpu(opts: RenderOpts) -> Self {
        Self::new(CpuRasterizer::new(), opts)
    }
}

impl<R: VectorRasterizer> PageRenderer<R> {
    /// Build a renderer around a vector rasterizer.
    pub fn new(rasterizer: R, opts: RenderOpts) -> Self {
        Self { rasterizer, opts }
    }

    /// Options this renderer was built with.
    pub fn opts(&self) -> RenderOpts {
        self.opts
    }

    /// Shared access to the underlying rasterizer.
    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Render `page` at the document zoom into a newly allocated 3-component BGR plane.
    ///
    /// The output is `round(zoom * page size)` pixels. Fails with
    /// [`RenderError::InvalidArguments`] when `page` is `None` (nothing is allocated), and
    /// never returns a partially rendered plane.
    #[tracing::instrument(skip_all, fields(zoom = document.zoom()))]
    pub fn render_to_owned_buffer(
        &mut self,
        document: &Document,
        page: Option<&Page>,
    ) -> RenderResult<PixelPlane> {
        let page = page.ok_or_else(|| RenderError::invalid_arguments("no page to render"))?;
        page.validate()?;

        let scale = ScaleFactors::uniform(document.zoom());
        if !scale.is_valid() {
            return Err(RenderError::invalid_arguments(format!(
                "document zoom must be finite and > 0, got {}",
                document.zoom()
            )));
        }
        let (width, height) = scale.pixel_size(page.width, page.height)?;
        check_output_size(width, height)?;

        let mut plane = PixelPlane::new(width, height, 3)?;
        self.rasterize_into(page, &mut plane, scale)?;
        Ok(plane)
    }

    /// Render `page` into a caller-owned 4-byte-per-pixel surface, stretching it to fill.
    ///
    /// Horizontal and vertical scales are derived independently from the surface size. Only
    /// the three color bytes of each pixel are written. On failure the surface may be
    /// partially written.
    #[tracing::instrument(skip_all, fields(width = surface.width(), height = surface.height()))]
    pub fn render_into_surface_buffer(
        &mut self,
        page: Option<&Page>,
        surface: &mut Surface,
    ) -> RenderResult<()> {
        let page = page.ok_or_else(|| RenderError::invalid_arguments("no page to render"))?;
        page.validate()?;

        let plane = surface.plane_mut()?;
        check_output_size(plane.width(), plane.height())?;
        let scale = ScaleFactors::fit(page.width, page.height, plane.width(), plane.height());
        self.rasterize_into(page, plane, scale)
    }

    fn rasterize_into(
        &mut self,
        page: &Page,
        dst: &mut PixelPlane,
        scale: ScaleFactors,
    ) -> RenderResult<()> {
        if !scale.is_valid() {
            return Err(RenderError::invalid_arguments(format!(
                "scale must be finite and > 0, got {}x{}",
                scale.x, scale.y
            )));
        }

        let ss = Supersampling::for_order(self.opts.subpixel);
        let (src_width, src_height) = ss
            .apply(dst.width(), dst.height())
            .ok_or_else(|| RenderError::invalid_arguments("oversampled size overflows u32"))?;
        tracing::debug!(
            subpix_x = ss.x,
            subpix_y = ss.y,
            src_width,
            src_height,
            scale_x = scale.x,
            scale_y = scale.y,
            "rasterizing page"
        );

        let list = self
            .rasterizer
            .record(page, scale.supersampled(ss))
            .map_err(RenderError::into_unknown)?;
        let src = self
            .rasterizer
            .rasterize(&list, src_width, src_height)
            .map_err(RenderError::into_unknown)?;
        if src.width() != src_width || src.height() != src_height {
            return Err(RenderError::unknown(format!(
                "rasterizer returned {}x{}, requested {src_width}x{src_height}",
                src.width(),
                src.height()
            )));
        }

        let order = self.opts.subpixel.unwrap_or_default();
        if ss.x == 3 {
            tracing::debug!(%order, "horizontal subpixel downsample");
            downsample_horizontal(dst, &src, order)
        } else if ss.y == 3 {
            tracing::debug!(%order, "vertical subpixel downsample");
            downsample_vertical(dst, &src, order)
        } else {
            tracing::debug!("direct blit");
            blit_plane(dst, &src);
            Ok(())
        }
    }
}

fn check_output_size(width: u32, height: u32) -> RenderResult<()> {
    if width == 0 || height == 0 {
        return Err(RenderError::invalid_arguments(format!(
            "output has no pixels ({width}x{height})"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
