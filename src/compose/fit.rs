use crate::foundation::error::{CarouselError, CarouselResult};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Placement of a source image cover-fitted onto a target canvas.
pub struct CoverFit {
    /// Uniform scale factor applied to the source.
    pub scale: f64,
    /// X position of the scaled image's top-left corner (may be negative).
    pub x: f64,
    /// Y position of the scaled image's top-left corner (may be negative).
    pub y: f64,
    /// Scaled draw width.
    pub draw_width: f64,
    /// Scaled draw height.
    pub draw_height: f64,
}

/// Compute cover-fit placement: fill the whole target, cropping overflow.
///
/// `scale = max(dst_w / src_w, dst_h / src_h)` guarantees the canvas is
/// fully covered with no letterboxing; the image is centered so the
/// overflowing dimension is cropped evenly on both sides.
pub fn cover_fit(src_w: u32, src_h: u32, dst_w: u32, dst_h: u32) -> CarouselResult<CoverFit> {
    if src_w == 0 || src_h == 0 {
        return Err(CarouselError::render("source image has a zero dimension"));
    }
    if dst_w == 0 || dst_h == 0 {
        return Err(CarouselError::render("target canvas has a zero dimension"));
    }

    let (src_w, src_h) = (f64::from(src_w), f64::from(src_h));
    let (dst_w, dst_h) = (f64::from(dst_w), f64::from(dst_h));
    let scale = (dst_w / src_w).max(dst_h / src_h);
    Ok(CoverFit {
        scale,
        x: dst_w / 2.0 - (src_w / 2.0) * scale,
        y: dst_h / 2.0 - (src_h / 2.0) * scale,
        draw_width: src_w * scale,
        draw_height: src_h * scale,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compose/fit.rs"]
mod tests;
