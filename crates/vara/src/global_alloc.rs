use std::alloc::{Layout, alloc, dealloc};

use core::{
    mem,
    ptr::NonNull,
};

/// The allocation leaf every container in this crate is built on.
///
/// Hands out raw uninitialized blocks. Constructing values into a block
/// and dropping them again is the caller's responsibility.
pub struct GlobalAlloc;

pub static GLOBAL_ALLOC: GlobalAlloc = GlobalAlloc;

impl GlobalAlloc {

    unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>> {
        let layout = Layout::from_size_align(size, align).ok()?;
        if layout.size() == 0 {
            return None
        }
        let ptr = unsafe { alloc(layout) };
        NonNull::new(ptr)
    }

    pub unsafe fn allocate_uninit<T>(&self, count: usize) -> Option<NonNull<T>> {
        let size = mem::size_of::<T>().checked_mul(count)?;
        let align = mem::align_of::<T>();
        unsafe { self.allocate_raw(size, align).map(|ptr| ptr.cast::<T>()) }
    }

    unsafe fn free_raw(&self, ptr: NonNull<u8>, size: usize, align: usize) {
        let layout = match Layout::from_size_align(size, align) {
            Ok(l) => l,
            Err(_) => return,
        };
        unsafe { dealloc(ptr.as_ptr(), layout) }
    }

    pub unsafe fn free_uninit<T>(&self, ptr: NonNull<T>, count: usize) {
        let size = mem::size_of::<T>() * count;
        let align = mem::align_of::<T>();
        unsafe { self.free_raw(ptr.cast::<u8>(), size, align) }
    }
}
