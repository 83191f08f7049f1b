use crate::{
    compose::spec::GradientSpec,
    foundation::error::{CarouselError, CarouselResult},
};

/// Overlay opacity at position `t` in `[0, 1]` along the gradient span.
///
/// Piecewise-linear interpolation between the spec's stops; positions
/// before the first stop clamp to its alpha, positions after the last stop
/// clamp to the last alpha.
pub fn overlay_alpha(t: f64, spec: &GradientSpec) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let Some(first) = spec.stops.first() else {
        return 0.0;
    };
    if t <= first.offset {
        return first.alpha;
    }
    for pair in spec.stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= 0.0 {
                return b.alpha;
            }
            let k = (t - a.offset) / span;
            return a.alpha + (b.alpha - a.alpha) * k;
        }
    }
    spec.stops.last().map(|s| s.alpha).unwrap_or(0.0)
}

/// Composite the bottom gradient overlay onto a premultiplied RGBA8 canvas.
///
/// Rows above `start_fraction * height` are untouched. Within the span,
/// every pixel of a row receives the same black overlay at the row's ramp
/// alpha, blended src-over in premultiplied space.
pub fn composite_gradient(
    canvas: &mut [u8],
    width: u32,
    height: u32,
    spec: &GradientSpec,
) -> CarouselResult<()> {
    let (w, h) = (width as usize, height as usize);
    if canvas.len() != w * h * 4 {
        return Err(CarouselError::render(
            "gradient canvas byte length does not match dimensions",
        ));
    }

    let y0 = (spec.start_fraction * h as f64).round().max(0.0) as usize;
    let span = h.saturating_sub(y0);
    if span == 0 {
        return Ok(());
    }

    for y in y0..h {
        let t = (y - y0) as f64 / span as f64;
        let alpha = ((overlay_alpha(t, spec) * 255.0).round() as i64).clamp(0, 255) as u8;
        if alpha == 0 {
            continue;
        }
        let row = &mut canvas[y * w * 4..(y + 1) * w * 4];
        for px in row.chunks_exact_mut(4) {
            // Premultiplied black at `alpha` over dst: rgb scale by (1 - a).
            let out = over([px[0], px[1], px[2], px[3]], [0, 0, 0, alpha]);
            px.copy_from_slice(&out);
        }
    }
    Ok(())
}

pub(crate) type PremulRgba8 = [u8; 4];

/// Source-over blend of two premultiplied RGBA8 pixels.
pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255(u16::from(dst[3]), inv));
    for i in 0..3 {
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = src[i].saturating_add(dc);
    }
    out
}

/// In-place source-over of one premultiplied RGBA8 buffer onto another.
pub(crate) fn over_in_place(dst: &mut [u8], src: &[u8]) -> CarouselResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(CarouselError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/compose/gradient.rs"]
mod tests;
