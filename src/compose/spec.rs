use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::foundation::error::CarouselResult;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Output specification for slide export.
///
/// A pure data model: serializable via Serde (JSON) and defaulting to the
/// standard social-carousel geometry (1080x1350 portrait, 4:5). The
/// compositor reads everything it needs from here; a caller can override
/// any field before rendering.
pub struct ExportSpec {
    /// Output canvas width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Output canvas height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
    /// JPEG quality, 1-100.
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
    /// Left margin for text blocks in pixels.
    #[serde(default = "default_margin_x")]
    pub margin_x: f64,
    /// Title block typography.
    #[serde(default = "TextBlockSpec::title")]
    pub title: TextBlockSpec,
    /// Body block typography.
    #[serde(default = "TextBlockSpec::body")]
    pub body: TextBlockSpec,
    /// Bottom gradient overlay.
    #[serde(default)]
    pub gradient: GradientSpec,
}

impl Default for ExportSpec {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            jpeg_quality: default_jpeg_quality(),
            margin_x: default_margin_x(),
            title: TextBlockSpec::title(),
            body: TextBlockSpec::body(),
            gradient: GradientSpec::default(),
        }
    }
}

impl ExportSpec {
    /// Maximum line width available to wrapped text.
    pub fn max_text_width(&self) -> f64 {
        f64::from(self.width) - 2.0 * self.margin_x
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Typography for one text block (title or body).
pub struct TextBlockSpec {
    /// Font size in pixels.
    pub font_size: f32,
    /// Line height as a multiple of the font size.
    pub line_height_factor: f32,
    /// Distance of the block's first baseline above the bottom edge.
    pub baseline_from_bottom: f64,
}

impl TextBlockSpec {
    /// Title block defaults: bold 64px, 1.2 line height, 240px up.
    pub fn title() -> Self {
        Self {
            font_size: 64.0,
            line_height_factor: 1.2,
            baseline_from_bottom: 240.0,
        }
    }

    /// Body block defaults: 36px, 1.3 line height, 120px up.
    pub fn body() -> Self {
        Self {
            font_size: 36.0,
            line_height_factor: 1.3,
            baseline_from_bottom: 120.0,
        }
    }

    /// Vertical advance between wrapped lines in pixels.
    pub fn line_height(&self) -> f64 {
        f64::from(self.font_size * self.line_height_factor)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Vertical black gradient overlay covering the lower part of the canvas.
pub struct GradientSpec {
    /// Fraction of the canvas height where the gradient starts.
    pub start_fraction: f64,
    /// Alpha ramp over the gradient span, offsets in `[0, 1]`.
    pub stops: Vec<GradientStop>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One alpha stop of the gradient ramp.
pub struct GradientStop {
    /// Position within the gradient span, 0 = top, 1 = bottom.
    pub offset: f64,
    /// Overlay opacity at this offset, 0 = transparent, 1 = opaque.
    pub alpha: f64,
}

impl Default for GradientSpec {
    /// Transparent at the top of the span, 70% black at 70%, 90% at the
    /// bottom, starting at 40% of the canvas height.
    fn default() -> Self {
        Self {
            start_fraction: 0.4,
            stops: vec![
                GradientStop { offset: 0.0, alpha: 0.0 },
                GradientStop { offset: 0.7, alpha: 0.7 },
                GradientStop { offset: 1.0, alpha: 0.9 },
            ],
        }
    }
}

#[derive(Clone, Debug)]
/// Raw font data for the two text faces the compositor renders with.
///
/// The title face is expected to carry bold weight, the body face regular
/// weight; the compositor draws whatever faces it is given. Word-wrap
/// measurement shares these exact bytes with final rendering so measured
/// and drawn text can never disagree.
pub struct FontSet {
    /// Font bytes used for the title block.
    pub title: Arc<Vec<u8>>,
    /// Font bytes used for the body block.
    pub body: Arc<Vec<u8>>,
}

impl FontSet {
    /// Build a font set from raw font bytes.
    pub fn from_bytes(title: Vec<u8>, body: Vec<u8>) -> Self {
        Self {
            title: Arc::new(title),
            body: Arc::new(body),
        }
    }

    /// Build a font set by reading two font files.
    pub fn from_paths(title: &Path, body: &Path) -> CarouselResult<Self> {
        let title_bytes = std::fs::read(title)
            .with_context(|| format!("read title font '{}'", title.display()))?;
        let body_bytes = std::fs::read(body)
            .with_context(|| format!("read body font '{}'", body.display()))?;
        Ok(Self::from_bytes(title_bytes, body_bytes))
    }
}

fn default_width() -> u32 {
    1080
}

fn default_height() -> u32 {
    1350
}

fn default_jpeg_quality() -> u8 {
    90
}

fn default_margin_x() -> f64 {
    60.0
}

#[cfg(test)]
#[path = "../../tests/unit/compose/spec.rs"]
mod tests;
