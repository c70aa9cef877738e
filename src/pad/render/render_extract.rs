use super::PadCore;

pub(super) fn collect_dirty_rect(pad: &mut PadCore) -> bool {
    pad.pending_rect = pad.surface.take_dirty_rect();
    pad.pending_rect.is_some()
}

pub(super) fn extract_pending_pixels(pad: &mut PadCore) -> &[u32] {
    let Some(rect) = pad.pending_rect else {
        return &pad.rect_transfer_buffer[..0];
    };

    let needed = rect.w as usize * rect.h as usize;
    if pad.rect_transfer_buffer.len() < needed {
        pad.rect_transfer_buffer.resize(needed, 0);
    }

    let stride = pad.surface.width() as usize;
    let src = pad.surface.pixels();
    let row_len = rect.w as usize;

    for (i, y) in (rect.y..rect.y + rect.h).enumerate() {
        let src_start = y as usize * stride + rect.x as usize;
        let dst_start = i * row_len;
        pad.rect_transfer_buffer[dst_start..dst_start + row_len]
            .copy_from_slice(&src[src_start..src_start + row_len]);
    }

    &pad.rect_transfer_buffer[..needed]
}
