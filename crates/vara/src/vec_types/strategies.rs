use core::{
    mem::needs_drop,
    ptr::NonNull,
};

/// Relocates `len` live values from `src` into the uninitialized slots at
/// `dst`. Relocation is a move: the source slots are dead afterwards and
/// must not be dropped.
#[inline(always)]
pub(crate) unsafe fn move_elements<T>(src: NonNull<T>, dst: NonNull<T>, len: usize) {
    if needs_drop::<T>() {
        unsafe {
            for i in 0..len {
                dst.add(i).write(src.add(i).read())
            }
        }
    }
    else {
        unsafe {
            src.copy_to_nonoverlapping(dst, len);
        }
    }
}

/// Clones `len` live values from `src` into the uninitialized slots at
/// `dst`, in index order. The source slots stay live.
#[inline(always)]
pub(crate) unsafe fn clone_elements<T: Clone>(src: NonNull<T>, dst: NonNull<T>, len: usize) {
    unsafe {
        for i in 0..len {
            dst.add(i).write(src.add(i).as_ref().clone());
        }
    }
}

/// Drops `len` live values starting at `ptr`, in index order. The slots
/// revert to uninitialized memory.
#[inline(always)]
pub(crate) unsafe fn drop_in_place<T>(ptr: NonNull<T>, len: usize) {
    if needs_drop::<T>() {
        unsafe {
            for i in 0..len {
                ptr.add(i).drop_in_place();
            }
        }
    }
}
