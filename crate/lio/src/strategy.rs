use std::ops::Range;

/// How a [`Buffer`](crate::Buffer) moves items in and out of its storage.
pub trait CopyStrategy<T> {
    /// `dest` and `src` have the same length.
    fn copy_slice(dest: &mut [T], src: &[T]);

    /// Moves `slice[area]` to the front of `slice`.
    fn compact_within(slice: &mut [T], area: Range<usize>);
}

/// Bitwise copies, for `T: Copy`.
pub struct SCopy;

/// Item by item clones, for `T: Clone`.
pub struct SClone;

impl<T: Copy> CopyStrategy<T> for SCopy {
    fn copy_slice(dest: &mut [T], src: &[T]) {
        dest.copy_from_slice(src);
    }

    fn compact_within(slice: &mut [T], area: Range<usize>) {
        slice.copy_within(area, 0);
    }
}

impl<T: Clone> CopyStrategy<T> for SClone {
    fn copy_slice(dest: &mut [T], src: &[T]) {
        dest.clone_from_slice(src);
    }

    fn compact_within(slice: &mut [T], Range { start, end }: Range<usize>) {
        if start == 0 || start == end {
            return;
        }
        // Items before `start` were already handed out, so their order
        // after the rotation does not matter.
        slice[..end].rotate_left(start);
    }
}
