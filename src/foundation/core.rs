use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{RenderError, RenderResult};

pub use kurbo::{Affine, BezPath, Point, Rect};

/// Physical arrangement of an LCD's color subpixels.
///
/// The axis decides which dimension is rasterized at 3x; the RGB/BGR half decides whether red
/// sits on the leading (left/top) or trailing subpixel.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SubpixelOrder {
    /// Vertical stripes, red on the left.
    #[default]
    HorizontalRgb,
    /// Vertical stripes, blue on the left.
    HorizontalBgr,
    /// Horizontal stripes, red on top.
    VerticalRgb,
    /// Horizontal stripes, blue on top.
    VerticalBgr,
}

impl SubpixelOrder {
    /// All orders, in declaration order.
    pub const ALL: [SubpixelOrder; 4] = [
        Self::HorizontalRgb,
        Self::HorizontalBgr,
        Self::VerticalRgb,
        Self::VerticalBgr,
    ];

    /// Returns `true` when the oversampled axis is x.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::HorizontalRgb | Self::HorizontalBgr)
    }

    /// Returns `true` when blue occupies the leading subpixel.
    pub fn is_bgr(self) -> bool {
        matches!(self, Self::HorizontalBgr | Self::VerticalBgr)
    }

    /// Subpixel offset of each output channel relative to the middle sample of its triplet.
    ///
    /// Indexed by output channel in BGR byte order: `[blue, green, red]`.
    pub fn channel_offsets(self) -> [isize; 3] {
        if self.is_bgr() { [-1, 0, 1] } else { [1, 0, -1] }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::HorizontalRgb => "hrgb",
            Self::HorizontalBgr => "hbgr",
            Self::VerticalRgb => "vrgb",
            Self::VerticalBgr => "vbgr",
        }
    }
}

impl fmt::Display for SubpixelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubpixelOrder {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|o| o.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                RenderError::invalid_arguments(format!(
                    "unknown subpixel order '{s}' (expected hrgb, hbgr, vrgb or vbgr)"
                ))
            })
    }
}

/// Integer supersampling multipliers per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Supersampling {
    /// Horizontal multiplier, `1` or `3`.
    pub x: u32,
    /// Vertical multiplier, `1` or `3`.
    pub y: u32,
}

impl Supersampling {
    /// No oversampling on either axis.
    pub const NONE: Supersampling = Supersampling { x: 1, y: 1 };

    /// Multipliers for a configured subpixel order; `None` disables oversampling.
    pub fn for_order(order: Option<SubpixelOrder>) -> Self {
        match order {
            Some(o) if o.is_horizontal() => Self { x: 3, y: 1 },
            Some(_) => Self { x: 1, y: 3 },
            None => Self::NONE,
        }
    }

    /// Oversampled pixel size for a `width x height` output, if it fits in `u32`.
    pub fn apply(self, width: u32, height: u32) -> Option<(u32, u32)> {
        Some((width.checked_mul(self.x)?, height.checked_mul(self.y)?))
    }
}

/// Device pixels per page unit, per axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScaleFactors {
    /// Horizontal scale.
    pub x: f64,
    /// Vertical scale.
    pub y: f64,
}

impl ScaleFactors {
    /// Same scale on both axes (document zoom).
    pub fn uniform(scale: f64) -> Self {
        Self { x: scale, y: scale }
    }

    /// Independent scales that map a `page_width x page_height` page onto a
    /// `pixel_width x pixel_height` target.
    pub fn fit(page_width: f64, page_height: f64, pixel_width: u32, pixel_height: u32) -> Self {
        Self {
            x: f64::from(pixel_width) / page_width,
            y: f64::from(pixel_height) / page_height,
        }
    }

    /// Scale multiplied by the supersampling factors.
    pub fn supersampled(self, s: Supersampling) -> Self {
        Self {
            x: self.x * f64::from(s.x),
            y: self.y * f64::from(s.y),
        }
    }

    /// Pixel size of a page at this scale, rounded to the nearest pixel.
    pub fn pixel_size(self, page_width: f64, page_height: f64) -> RenderResult<(u32, u32)> {
        fn to_px(v: f64) -> RenderResult<u32> {
            let r = v.round();
            if !r.is_finite() || r < 0.0 || r > f64::from(u32::MAX) {
                return Err(RenderError::invalid_arguments(format!(
                    "page pixel size out of range: {v}"
                )));
            }
            Ok(r as u32)
        }
        Ok((to_px(self.x * page_width)?, to_px(self.y * page_height)?))
    }

    /// Returns `true` when both scales are finite and strictly positive.
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.x > 0.0 && self.y.is_finite() && self.y > 0.0
    }

    /// Scale matrix for this factor pair.
    pub fn to_affine(self) -> Affine {
        Affine::scale_non_uniform(self.x, self.y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
