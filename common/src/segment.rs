//! Loadable-segment byte placement.

/// Fills a segment's memory image: the file bytes first, then an
/// explicit zero tail up to the full in-memory size. Freshly allocated
/// pages carry whatever the firmware left there, so the tail must be
/// cleared here, not assumed.
///
/// `dst` spans the segment's full in-memory size; `src` is the
/// segment's file extent and must not be longer than `dst`.
pub fn place_segment(dst: &mut [u8], src: &[u8]) {
    let (image, tail) = dst.split_at_mut(src.len());
    image.copy_from_slice(src);
    tail.fill(0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn file_bytes_then_zero_tail() {
        // mem_size > file_size: the gap past the file bytes is the
        // image's zero-initialized data.
        let src = [0xDE, 0xAD, 0xBE, 0xEF];
        let mut dst = vec![0x55u8; 10];
        place_segment(&mut dst, &src);
        assert_eq!(&dst[..4], &src);
        assert_eq!(&dst[4..], &[0u8; 6]);
    }

    #[test]
    fn full_file_extent_has_no_tail() {
        // mem_size == file_size: every byte comes from the file.
        let src: [u8; 8] = core::array::from_fn(|i| i as u8 + 1);
        let mut dst = vec![0xAAu8; 8];
        place_segment(&mut dst, &src);
        assert_eq!(dst, src);
    }

    #[test]
    fn empty_file_extent_zeroes_everything() {
        let mut dst = vec![0xFFu8; 16];
        place_segment(&mut dst, &[]);
        assert!(dst.iter().all(|&b| b == 0));
    }
}
