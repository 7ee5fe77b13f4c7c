//! Unsafe, centralized operations on the slot's `MaybeUninit<T>` storage.
//!
//! `OptionalSlot` never touches its storage through `ptr::*` or
//! `MaybeUninit::assume_init_*` directly; every reinterpretation of the
//! storage as `T` goes through the helpers below so the unsafe surface can be
//! audited in one place:
//! - construction (`write`)
//! - conversion to references (`assume_init_ref` / `assume_init_mut`)
//! - moves out (`read`)
//! - destruction (`drop_in_place`)
//!
//! ## Core invariant
//! The storage holds a live `T` *exactly when* the owning slot's `occupied`
//! tag is `true`. Callers flip the tag in the same step as the storage
//! transition: after a `write`, before a `read` or `drop_in_place` returns
//! control to code that could observe the slot.

use core::{mem::MaybeUninit, ptr};

/// Interprets an occupied storage as `&T`.
///
/// # Safety
/// - `storage` must hold a live `T`.
#[inline(always)]
pub(super) unsafe fn assume_init_ref<T>(storage: &MaybeUninit<T>) -> &T {
    // SAFETY: caller asserts `storage` is initialized.
    unsafe { storage.assume_init_ref() }
}

/// Interprets an occupied storage as `&mut T`.
///
/// # Safety
/// - `storage` must hold a live `T`.
#[inline(always)]
pub(super) unsafe fn assume_init_mut<T>(storage: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: caller asserts `storage` is initialized; `&mut` gives exclusivity.
    unsafe { storage.assume_init_mut() }
}

/// Constructs a `T` in empty storage and returns a reference to it.
///
/// # Safety
/// - `storage` must NOT hold a live `T`; otherwise the old value leaks.
#[inline(always)]
pub(super) unsafe fn write<T>(storage: &mut MaybeUninit<T>, value: T) -> &mut T {
    storage.write(value)
}

/// Bitwise-moves the live `T` out of the storage.
///
/// # Safety
/// - `storage` must hold a live `T`.
/// - The caller must clear the occupancy tag afterwards; the bytes left
///   behind are logically uninitialized.
#[inline(always)]
pub(super) unsafe fn read<T>(storage: &MaybeUninit<T>) -> T {
    // SAFETY: caller asserts initialization and takes over ownership.
    unsafe { ptr::read(storage.as_ptr()) }
}

/// Runs `T`'s destructor in place.
///
/// # Safety
/// - `storage` must hold a live `T`.
/// - Must not be called more than once for the same logical value.
#[inline(always)]
pub(super) unsafe fn drop_in_place<T>(storage: &mut MaybeUninit<T>) {
    // SAFETY: caller asserts initialization and drop uniqueness.
    unsafe { ptr::drop_in_place(storage.as_mut_ptr()) }
}
