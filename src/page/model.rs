use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::Rect;
use crate::foundation::error::{RenderError, RenderResult};

/// A paginated document: a zoom factor shared by every page, plus the pages themselves.
///
/// This is the JSON-facing page description consumed by the renderer. Page geometry is expressed
/// in page units; the zoom maps one page unit to that many device pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Document {
    #[serde(default = "default_zoom")]
    zoom: f64,
    pages: Vec<Page>,
}

fn default_zoom() -> f64 {
    1.0
}

impl Document {
    /// Build a document from a zoom factor and its pages.
    pub fn new(zoom: f64, pages: Vec<Page>) -> Self {
        Self { zoom, pages }
    }

    /// Parse a document from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> RenderResult<Self> {
        let doc: Document = serde_json::from_reader(r).map_err(|e| {
            RenderError::invalid_arguments(format!("parse document JSON: {e}"))
        })?;
        doc.validate()?;
        Ok(doc)
    }

    /// Parse a document from a JSON file on disk and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RenderError::invalid_arguments(format!(
                "open document JSON '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check the zoom and every page's geometry.
    pub fn validate(&self) -> RenderResult<()> {
        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return Err(RenderError::invalid_arguments(format!(
                "document zoom must be finite and > 0, got {}",
                self.zoom
            )));
        }
        for (i, page) in self.pages.iter().enumerate() {
            page.validate()
                .map_err(|e| RenderError::invalid_arguments(format!("page {i}: {e}")))?;
        }
        Ok(())
    }

    /// Device pixels per page unit on both axes.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Return a copy with a different zoom factor.
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    /// All pages, in order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// The page at `index`, if there is one.
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }
}

/// One page: its size in page units and its vector content.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Page {
    /// Width in page units.
    pub width: f64,
    /// Height in page units.
    pub height: f64,
    /// What to draw.
    pub content: PageContent,
}

impl Page {
    /// A page drawn from native vector items.
    pub fn with_items(width: f64, height: f64, items: Vec<PageItem>) -> Self {
        Self {
            width,
            height,
            content: PageContent::Items(items),
        }
    }

    /// A page drawn from an SVG document whose user units are page units.
    pub fn with_svg(width: f64, height: f64, svg: impl Into<String>) -> Self {
        Self {
            width,
            height,
            content: PageContent::Svg(svg.into()),
        }
    }

    /// Check that the page has a finite, non-empty size.
    pub fn validate(&self) -> RenderResult<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if !ok(self.width) || !ok(self.height) {
            return Err(RenderError::invalid_arguments(format!(
                "page size must be finite and > 0, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Vector content of a page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageContent {
    /// Native drawing items, painted in order.
    Items(Vec<PageItem>),
    /// SVG source text.
    Svg(String),
}

/// A single native drawing operation. Colors are straight (non-premultiplied) RGBA8.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageItem {
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Rectangle in page units.
        rect: Rect,
        /// Fill color.
        color: [u8; 4],
    },
    /// Fill a path given as SVG path data.
    FillPath {
        /// SVG path data (`d` attribute syntax).
        d: String,
        /// Fill color.
        color: [u8; 4],
        /// Winding rule.
        #[serde(default)]
        fill_rule: FillRule,
    },
    /// Stroke a path given as SVG path data.
    StrokePath {
        /// SVG path data (`d` attribute syntax).
        d: String,
        /// Stroke color.
        color: [u8; 4],
        /// Stroke width in page units.
        width: f64,
    },
}

/// Path winding rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillRule {
    /// Non-zero winding.
    #[default]
    NonZero,
    /// Even-odd.
    EvenOdd,
}

#[cfg(test)]
#[path = "../../tests/unit/page/model.rs"]
mod tests;
