use anyhow::Context;
use image::ImageEncoder as _;

use crate::{
    compose::fit::cover_fit,
    compose::gradient::{composite_gradient, over_in_place},
    compose::spec::{ExportSpec, FontSet, TextBlockSpec},
    compose::text::{TextBrushRgba8, TextLayoutEngine},
    compose::wrap::wrap_greedy,
    foundation::error::{CarouselError, CarouselResult},
    ingest::decode::{PreparedImage, decode_image},
    slide::model::Slide,
};

#[derive(Clone, Debug)]
/// Final composited output for one slide.
pub struct RenderedSlide {
    /// Suggested download file name, `instagram-slide-<id>.jpg`.
    pub file_name: String,
    /// JPEG-encoded bytes at the spec's quality.
    pub jpeg: Vec<u8>,
}

/// Composites one slide's current image, gradient overlay and text blocks
/// onto a fixed-size canvas and serializes the result to JPEG.
///
/// Layer order is fixed: cover-fitted image, then the bottom gradient, then
/// white text. Text is wrapped with the same Parley shaping that renders
/// the final glyphs. The compositor owns the shaping contexts, so one
/// instance is reused across a batch; it performs no IO.
pub struct Compositor {
    fonts: FontSet,
    text: TextLayoutEngine,
}

impl Compositor {
    /// Create a compositor drawing text with the given faces.
    pub fn new(fonts: FontSet) -> Self {
        Self {
            fonts,
            text: TextLayoutEngine::new(),
        }
    }

    /// Render one slide to a downloadable JPEG per the output spec.
    #[tracing::instrument(skip_all, fields(slide = %slide.id))]
    pub fn render(&mut self, slide: &Slide, spec: &ExportSpec) -> CarouselResult<RenderedSlide> {
        let width_u16: u16 = spec
            .width
            .try_into()
            .map_err(|_| CarouselError::render("canvas width exceeds u16"))?;
        let height_u16: u16 = spec
            .height
            .try_into()
            .map_err(|_| CarouselError::render("canvas height exceeds u16"))?;

        let source = decode_image(slide.current_image.data())
            .map_err(|e| CarouselError::render(format!("source image undecodable: {e}")))?;

        let mut base = vello_cpu::Pixmap::new(width_u16, height_u16);
        self.draw_cover_image(&source, spec, width_u16, height_u16, &mut base)?;
        composite_gradient(
            base.data_as_u8_slice_mut(),
            spec.width,
            spec.height,
            &spec.gradient,
        )?;
        self.draw_text_blocks(slide, spec, width_u16, height_u16, &mut base)?;

        let rgb = premul_rgba8_to_rgb8(base.data_as_u8_slice());
        let mut jpeg = Vec::new();
        let encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, spec.jpeg_quality);
        encoder
            .write_image(&rgb, spec.width, spec.height, image::ExtendedColorType::Rgb8)
            .context("encode jpeg")?;

        Ok(RenderedSlide {
            file_name: format!("instagram-slide-{}.jpg", slide.id),
            jpeg,
        })
    }

    fn draw_cover_image(
        &self,
        source: &PreparedImage,
        spec: &ExportSpec,
        width_u16: u16,
        height_u16: u16,
        base: &mut vello_cpu::Pixmap,
    ) -> CarouselResult<()> {
        let fit = cover_fit(source.width, source.height, spec.width, spec.height)?;
        let paint = image_paint(source)?;

        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        ctx.set_transform(vello_cpu::kurbo::Affine::new([
            fit.scale, 0.0, 0.0, fit.scale, fit.x, fit.y,
        ]));
        ctx.set_paint(paint);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(source.width),
            f64::from(source.height),
        ));
        ctx.flush();
        ctx.render_to_pixmap(base);
        Ok(())
    }

    fn draw_text_blocks(
        &mut self,
        slide: &Slide,
        spec: &ExportSpec,
        width_u16: u16,
        height_u16: u16,
        base: &mut vello_cpu::Pixmap,
    ) -> CarouselResult<()> {
        // Empty blocks are skipped entirely, no placeholder drawn.
        if slide.title.is_empty() && slide.body.is_empty() {
            return Ok(());
        }

        let mut overlay = vello_cpu::Pixmap::new(width_u16, height_u16);
        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);

        if !slide.title.is_empty() {
            let font_bytes = self.fonts.title.clone();
            self.draw_block(&mut ctx, &slide.title, &font_bytes, &spec.title, spec)?;
        }
        if !slide.body.is_empty() {
            let font_bytes = self.fonts.body.clone();
            self.draw_block(&mut ctx, &slide.body, &font_bytes, &spec.body, spec)?;
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut overlay);
        over_in_place(base.data_as_u8_slice_mut(), overlay.data_as_u8_slice())
    }

    fn draw_block(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        font_bytes: &[u8],
        block: &TextBlockSpec,
        spec: &ExportSpec,
    ) -> CarouselResult<()> {
        let max_width = spec.max_text_width() as f32;
        let mut measure_err = None;
        let lines = wrap_greedy(text, max_width, |candidate| {
            match self.text.measure_width(candidate, font_bytes, block.font_size) {
                Ok(w) => w,
                Err(e) => {
                    measure_err.get_or_insert(e);
                    0.0
                }
            }
        });
        if let Some(err) = measure_err {
            return Err(err);
        }

        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font_bytes.to_vec()),
            0,
        );
        let block_top = f64::from(spec.height) - block.baseline_from_bottom;
        for (idx, line_text) in lines.iter().enumerate() {
            let layout = self.text.layout_line(
                line_text,
                font_bytes,
                block.font_size,
                TextBrushRgba8::WHITE,
            )?;
            let first_baseline = layout
                .lines()
                .next()
                .map(|l| f64::from(l.metrics().baseline))
                .unwrap_or(0.0);
            let baseline_y = block_top + idx as f64 * block.line_height();
            ctx.set_transform(vello_cpu::kurbo::Affine::translate((
                spec.margin_x,
                baseline_y - first_baseline,
            )));

            for line in layout.lines() {
                for item in line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };

                    let brush = run.style().brush;
                    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                        brush.r, brush.g, brush.b, brush.a,
                    ));

                    let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    ctx.glyph_run(&font)
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs);
                }
            }
        }
        Ok(())
    }
}

fn image_paint(source: &PreparedImage) -> CarouselResult<vello_cpu::Image> {
    let pixmap =
        premul_bytes_to_pixmap(source.rgba8_premul.as_slice(), source.width, source.height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(std::sync::Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> CarouselResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| CarouselError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CarouselError::render("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(CarouselError::render("prepared image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

fn premul_rgba8_to_rgb8(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() / 4 * 3);
    for px in data.chunks_exact(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            out.extend_from_slice(&[0, 0, 0]);
            continue;
        }
        for i in 0..3 {
            out.push(((u16::from(px[i]) * 255 + a / 2) / a).min(255) as u8);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/compose/renderer.rs"]
mod tests;
