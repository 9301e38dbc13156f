use std::fmt;
use std::sync::Arc;

use kurbo::Shape;

use crate::foundation::core::{Affine, BezPath, ScaleFactors};
use crate::foundation::error::{RenderError, RenderResult};
use crate::page::model::{FillRule, Page, PageContent, PageItem};
use crate::raster::plane::PixelPlane;

/// Turns page content into a BGR [`PixelPlane`].
///
/// Rasterization happens in two steps: [`VectorRasterizer::record`] resolves the page into a
/// [`DisplayList`] under a scale matrix, then [`VectorRasterizer::rasterize`] draws that list
/// into a plane of an exact pixel size. A rasterizer is driven by one caller at a time (`&mut`).
pub trait VectorRasterizer {
    /// Resolve a page's content into drawable commands at `scale` device pixels per page unit.
    fn record(&mut self, page: &Page, scale: ScaleFactors) -> RenderResult<DisplayList> {
        DisplayList::record(page, scale)
    }

    /// Draw `list` into a freshly allocated `width x height` plane.
    ///
    /// The plane is cleared to opaque white before drawing. Its first three bytes per pixel are
    /// blue, green and red.
    fn rasterize(
        &mut self,
        list: &DisplayList,
        width: u32,
        height: u32,
    ) -> RenderResult<PixelPlane>;
}

/// A page resolved into device-space drawing commands.
pub struct DisplayList {
    transform: Affine,
    source: DisplaySource,
}

/// What a [`DisplayList`] draws.
pub enum DisplaySource {
    /// Native fill/stroke commands, in page units.
    Commands(Vec<DrawCommand>),
    /// A parsed SVG tree, in page units.
    Svg(Arc<usvg::Tree>),
}

/// A single resolved drawing command. Colors are straight RGBA8.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fill a path.
    Fill {
        /// Path in page units.
        path: BezPath,
        /// Fill color.
        color: [u8; 4],
        /// Winding rule.
        rule: FillRule,
    },
    /// Stroke a path.
    Stroke {
        /// Path in page units.
        path: BezPath,
        /// Stroke color.
        color: [u8; 4],
        /// Stroke width in page units.
        width: f64,
    },
}

impl DisplayList {
    /// A list of native commands drawn under `transform`.
    pub fn from_commands(transform: Affine, commands: Vec<DrawCommand>) -> Self {
        Self {
            transform,
            source: DisplaySource::Commands(commands),
        }
    }

    /// Resolve `page` under a `scale` matrix.
    ///
    /// Malformed path data, invalid stroke widths and unparsable SVG fail with
    /// [`RenderError::Unknown`].
    pub fn record(page: &Page, scale: ScaleFactors) -> RenderResult<Self> {
        let transform = scale.to_affine();
        let source = match &page.content {
            PageContent::Items(items) => {
                let commands = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        resolve_item(item).map_err(|e| {
                            RenderError::unknown(format!("page item {i}: {e}"))
                        })
                    })
                    .collect::<RenderResult<Vec<_>>>()?;
                DisplaySource::Commands(commands)
            }
            PageContent::Svg(text) => {
                let opts = usvg::Options::default();
                let tree = usvg::Tree::from_data(text.as_bytes(), &opts)
                    .map_err(|e| RenderError::unknown(format!("parse page svg: {e}")))?;
                DisplaySource::Svg(Arc::new(tree))
            }
        };
        Ok(Self { transform, source })
    }

    /// Page-to-device transform.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// The recorded content.
    pub fn source(&self) -> &DisplaySource {
        &self.source
    }

    /// Number of native commands (`0` for SVG content).
    pub fn len(&self) -> usize {
        match &self.source {
            DisplaySource::Commands(c) => c.len(),
            DisplaySource::Svg(_) => 0,
        }
    }

    /// Returns `true` when there is no native command and no SVG tree.
    pub fn is_empty(&self) -> bool {
        matches!(&self.source, DisplaySource::Commands(c) if c.is_empty())
    }
}

impl fmt::Debug for DisplayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("DisplayList");
        d.field("transform", &self.transform);
        match &self.source {
            DisplaySource::Commands(c) => d.field("commands", c),
            DisplaySource::Svg(tree) => d.field("svg_size", &tree.size()),
        };
        d.finish()
    }
}

fn resolve_item(item: &PageItem) -> RenderResult<DrawCommand> {
    Ok(match item {
        PageItem::FillRect { rect, color } => DrawCommand::Fill {
            path: rect.to_path(0.1),
            color: *color,
            rule: FillRule::NonZero,
        },
        PageItem::FillPath {
            d,
            color,
            fill_rule,
        } => DrawCommand::Fill {
            path: parse_path(d)?,
            color: *color,
            rule: *fill_rule,
        },
        PageItem::StrokePath { d, color, width } => {
            if !width.is_finite() || *width < 0.0 {
                return Err(RenderError::unknown(format!(
                    "stroke width must be finite and >= 0, got {width}"
                )));
            }
            DrawCommand::Stroke {
                path: parse_path(d)?,
                color: *color,
                width: *width,
            }
        }
    })
}

fn parse_path(d: &str) -> RenderResult<BezPath> {
    BezPath::from_svg(d.trim())
        .map_err(|e| RenderError::unknown(format!("invalid svg path data: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/rasterizer.rs"]
mod tests;
