use crate::foundation::core::{Affine, BezPath};
use crate::foundation::error::{RenderError, RenderResult};
use crate::page::model::FillRule;
use crate::raster::plane::PixelPlane;
use crate::render::rasterizer::{DisplayList, DisplaySource, DrawCommand, VectorRasterizer};

/// CPU vector rasterizer.
///
/// Native page items are drawn with `vello_cpu`; SVG pages with `resvg`. The `vello_cpu` render
/// context is kept between calls and reused while the raster size does not change.
#[derive(Default)]
pub struct CpuRasterizer {
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuRasterizer {
    /// Create a rasterizer with no cached render context.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> RenderResult<R>,
    ) -> RenderResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn rasterize_commands(
        &mut self,
        transform: Affine,
        commands: &[DrawCommand],
        width: u32,
        height: u32,
    ) -> RenderResult<PixelPlane> {
        let w = to_u16(width, "width")?;
        let h = to_u16(height, "height")?;

        let pixmap = self.with_ctx_mut(w, h, |ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(w),
                f64::from(h),
            ));

            ctx.set_transform(affine_to_cpu(transform));
            for cmd in commands {
                match cmd {
                    DrawCommand::Fill { path, color, rule } => {
                        ctx.set_fill_rule(fill_rule_to_cpu(*rule));
                        ctx.set_paint(color_to_cpu(*color));
                        ctx.fill_path(&bezpath_to_cpu(path));
                    }
                    DrawCommand::Stroke { path, color, width } => {
                        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
                        ctx.set_paint(color_to_cpu(*color));
                        ctx.stroke_path(&bezpath_to_cpu(path));
                    }
                }
            }

            ctx.flush();
            let mut pixmap = vello_cpu::Pixmap::new(w, h);
            ctx.render_to_pixmap(&mut pixmap);
            Ok(pixmap)
        })?;

        bgr_plane_from_premul_rgba(pixmap.data_as_u8_slice(), width, height)
    }
}

impl VectorRasterizer for CpuRasterizer {
    #[tracing::instrument(skip(self, list))]
    fn rasterize(
        &mut self,
        list: &DisplayList,
        width: u32,
        height: u32,
    ) -> RenderResult<PixelPlane> {
        if width == 0 || height == 0 {
            return Err(RenderError::unknown(format!(
                "cannot rasterize an empty {width}x{height} target"
            )));
        }
        match list.source() {
            DisplaySource::Commands(commands) => {
                self.rasterize_commands(list.transform(), commands, width, height)
            }
            DisplaySource::Svg(tree) => rasterize_svg(tree, list.transform(), width, height),
        }
    }
}

fn rasterize_svg(
    tree: &usvg::Tree,
    transform: Affine,
    width: u32,
    height: u32,
) -> RenderResult<PixelPlane> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| RenderError::unknown(format!("failed to allocate {width}x{height} svg pixmap")))?;
    pixmap.fill(resvg::tiny_skia::Color::WHITE);

    let [a, b, c, d, e, f] = transform.as_coeffs();
    let xform = resvg::tiny_skia::Transform::from_row(
        a as f32, b as f32, c as f32, d as f32, e as f32, f as f32,
    );
    resvg::render(tree, xform, &mut pixmap.as_mut());

    bgr_plane_from_premul_rgba(pixmap.data(), width, height)
}

/// Flatten premultiplied RGBA8 onto white and repack as 3-component BGR.
fn bgr_plane_from_premul_rgba(rgba: &[u8], width: u32, height: u32) -> RenderResult<PixelPlane> {
    let expected = (width as usize) * (height as usize) * 4;
    if rgba.len() != expected {
        return Err(RenderError::unknown(format!(
            "raster buffer size mismatch: {} bytes, expected {expected}",
            rgba.len()
        )));
    }

    let mut plane = PixelPlane::new(width, height, 3)?;
    for (dst, src) in plane
        .data_mut()
        .chunks_exact_mut(3)
        .zip(rgba.chunks_exact(4))
    {
        let under = 255 - src[3];
        dst[0] = src[2].saturating_add(under);
        dst[1] = src[1].saturating_add(under);
        dst[2] = src[0].saturating_add(under);
    }
    Ok(plane)
}

fn to_u16(v: u32, what: &str) -> RenderResult<u16> {
    v.try_into()
        .map_err(|_| RenderError::unknown(format!("raster {what} {v} exceeds u16")))
}

fn color_to_cpu([r, g, b, a]: [u8; 4]) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn fill_rule_to_cpu(rule: FillRule) -> vello_cpu::peniko::Fill {
    match rule {
        FillRule::NonZero => vello_cpu::peniko::Fill::NonZero,
        FillRule::EvenOdd => vello_cpu::peniko::Fill::EvenOdd,
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
