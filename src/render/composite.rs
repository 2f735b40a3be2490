use crate::foundation::color::Rgb8;
use crate::foundation::error::{MazeError, MazeResult};
use crate::foundation::math::{mul_div255_u8, mul_div255_u16};

/// Source-over of premultiplied RGBA8 `src` onto `dst`, in place.
pub(crate) fn premul_over_in_place(dst: &mut [u8], src: &[u8]) -> MazeResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(MazeError::render(
            "premul_over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let sa = u16::from(s[3]);
        if sa == 0 {
            continue;
        }
        if sa == 255 {
            d.copy_from_slice(s);
            continue;
        }
        let inv = 255u16 - sa;
        d[3] = s[3].saturating_add(mul_div255_u8(u16::from(d[3]), inv));
        for c in 0..3 {
            let dc = mul_div255_u8(u16::from(d[c]), inv);
            d[c] = s[c].saturating_add(dc);
        }
    }
    Ok(())
}

/// Flatten premultiplied RGBA8 over an opaque background into packed RGB8.
pub(crate) fn flatten_premul_to_rgb8(src_premul: &[u8], bg: Rgb8) -> MazeResult<Vec<u8>> {
    if !src_premul.len().is_multiple_of(4) {
        return Err(MazeError::render(
            "flatten_premul_to_rgb8 expects an rgba8 buffer",
        ));
    }
    let bg = bg.to_array().map(u16::from);
    let mut out = Vec::with_capacity(src_premul.len() / 4 * 3);
    for s in src_premul.chunks_exact(4) {
        let inv = 255u16 - u16::from(s[3]);
        for c in 0..3 {
            let v = u16::from(s[c]) + mul_div255_u16(bg[c], inv);
            out.push(v.min(255) as u8);
        }
    }
    Ok(out)
}
