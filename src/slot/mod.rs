//! `OptionalSlot` — inline storage for zero or one `T`.
//!
//! The slot keeps its payload in a `MaybeUninit<T>` next to an `occupied`
//! tag. All reinterpretation of that storage goes through [`raw`], and every
//! transition keeps the tag and the storage in lockstep:
//! - `occupied == false` ⇒ no live `T`; the storage is never read.
//! - `occupied == true` ⇒ exactly one live, fully constructed `T`.
//! - dropping the slot drops the payload iff `occupied`, at most once.

// Emits a `tracing` event for a slot state transition; no-op without the feature.
macro_rules! trace_transition {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "optslot::slot", $($arg)*);
    };
}

#[cfg(feature = "proptest")]
mod arbitrary;
mod assign;
mod error;
mod raw;


pub use error::EmptyAccess;

use core::{fmt, mem, mem::MaybeUninit};

/// A fixed-size slot that may or may not hold a constructed `T`.
///
/// No allocation happens beyond the inline storage. The slot exclusively owns
/// its payload and destroys it exactly once: on [`reset`](Self::reset), on the
/// pre-destruction step of [`emplace`](Self::emplace), when cleared by
/// assignment from an empty slot, or when the slot itself is dropped.
///
/// # Example
///
/// ```rust
/// use optslot::{EmptyAccess, OptionalSlot};
///
/// let mut slot = OptionalSlot::new();
/// assert!(!slot.has_value());
///
/// slot.emplace(42);
/// assert_eq!(slot.value(), Ok(&42));
///
/// slot.reset();
/// assert_eq!(slot.value(), Err(EmptyAccess));
/// ```
pub struct OptionalSlot<T> {
    storage: MaybeUninit<T>,
    occupied: bool,
}

impl<T> OptionalSlot<T> {
    /// Creates an empty slot. No `T` is constructed.
    #[inline]
    pub const fn new() -> Self {
        Self {
            storage: MaybeUninit::uninit(),
            occupied: false,
        }
    }

    /// Creates an occupied slot by moving `value` into it.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self {
            storage: MaybeUninit::new(value),
            occupied: true,
        }
    }

    /// Creates an occupied slot holding a clone of `value`.
    #[inline]
    pub fn some_cloned(value: &T) -> Self
    where
        T: Clone,
    {
        Self::some(value.clone())
    }

    /// Moves the payload out of `source` into a new slot, leaving `source` empty.
    ///
    /// An empty `source` yields an empty slot.
    #[inline]
    pub fn take_from(source: &mut Self) -> Self {
        match source.take() {
            Some(value) => Self::some(value),
            None => Self::new(),
        }
    }

    /// Returns `true` if the slot currently holds a value.
    #[inline(always)]
    pub const fn has_value(&self) -> bool {
        self.occupied
    }

    /// Returns `true` if the slot holds no value.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        !self.occupied
    }

    /// Returns a shared reference to the payload.
    ///
    /// # Errors
    /// Returns [`EmptyAccess`] if the slot is empty.
    #[inline]
    pub fn value(&self) -> Result<&T, EmptyAccess> {
        self.get().ok_or_else(Self::empty_access)
    }

    /// Returns an exclusive reference to the payload.
    ///
    /// # Errors
    /// Returns [`EmptyAccess`] if the slot is empty.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, EmptyAccess> {
        self.get_mut().ok_or_else(Self::empty_access)
    }

    /// Consumes the slot and moves the payload out.
    ///
    /// # Errors
    /// Returns [`EmptyAccess`] if the slot is empty.
    #[inline]
    pub fn into_value(mut self) -> Result<T, EmptyAccess> {
        self.take().ok_or_else(Self::empty_access)
    }

    #[cold]
    fn empty_access() -> EmptyAccess {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "optslot::slot", "checked access on empty slot");
        EmptyAccess
    }

    /// Returns the payload if present.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        if self.occupied {
            // SAFETY: `occupied` is true.
            Some(unsafe { raw::assume_init_ref(&self.storage) })
        } else {
            None
        }
    }

    /// Returns the payload mutably if present.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.occupied {
            // SAFETY: `occupied` is true.
            Some(unsafe { raw::assume_init_mut(&mut self.storage) })
        } else {
            None
        }
    }

    /// Returns the payload without checking occupancy.
    ///
    /// # Safety
    /// The slot must be occupied (see [`has_value`](Self::has_value)).
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.occupied, "get_unchecked on empty OptionalSlot");
        // SAFETY: caller guarantees occupancy.
        unsafe { raw::assume_init_ref(&self.storage) }
    }

    /// Returns the payload mutably without checking occupancy.
    ///
    /// # Safety
    /// The slot must be occupied (see [`has_value`](Self::has_value)).
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.occupied, "get_unchecked_mut on empty OptionalSlot");
        // SAFETY: caller guarantees occupancy.
        unsafe { raw::assume_init_mut(&mut self.storage) }
    }

    /// Consumes the slot and moves the payload out without checking occupancy.
    ///
    /// # Safety
    /// The slot must be occupied (see [`has_value`](Self::has_value)).
    #[inline]
    pub unsafe fn into_inner_unchecked(mut self) -> T {
        debug_assert!(self.occupied, "into_inner_unchecked on empty OptionalSlot");
        self.occupied = false;
        // SAFETY: caller guarantees occupancy; the tag is cleared so `Drop` skips it.
        unsafe { raw::read(&self.storage) }
    }

    /// Destroys the payload, if any, leaving the slot empty. Idempotent.
    #[inline]
    pub fn reset(&mut self) {
        if self.occupied {
            // Clear first: a panicking destructor must not lead to a second drop.
            self.occupied = false;
            trace_transition!("reset: dropping payload");
            // SAFETY: the tag was set, so the storage held a live `T`.
            unsafe { raw::drop_in_place(&mut self.storage) }
        }
    }

    /// Destroys any current payload, then stores `value`.
    ///
    /// Returns a reference to the new payload.
    #[inline]
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.reset();
        trace_transition!("emplace");
        self.construct(value)
    }

    /// Destroys any current payload, then constructs a new one with `init`.
    ///
    /// The old payload is gone before `init` runs. If `init` panics the slot
    /// is left empty (weak guarantee, the prior value is not restored).
    pub fn emplace_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.reset();
        trace_transition!("emplace_with");
        self.construct(init())
    }

    /// Fallible [`emplace_with`](Self::emplace_with).
    ///
    /// # Errors
    /// Returns `init`'s error unchanged. The slot is then empty, since the
    /// prior payload was already destroyed.
    pub fn try_emplace_with<F, E>(&mut self, init: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.reset();
        trace_transition!("try_emplace_with");
        let value = init()?;
        Ok(self.construct(value))
    }

    /// Moves the payload out, leaving the slot empty.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        if !self.occupied {
            return None;
        }
        self.occupied = false;
        // SAFETY: the tag was set; it is now cleared so the bytes are never read again.
        Some(unsafe { raw::read(&self.storage) })
    }

    /// Stores `value` and returns the previous payload, if any.
    #[inline]
    pub fn replace(&mut self, value: T) -> Option<T> {
        let prev = self.take();
        self.construct(value);
        prev
    }

    /// Returns the payload, constructing it with `init` first if the slot is empty.
    pub fn get_or_insert_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if !self.occupied {
            return self.construct(init());
        }
        // SAFETY: `occupied` is true.
        unsafe { raw::assume_init_mut(&mut self.storage) }
    }

    /// Exchanges the contents of two slots. Nothing is constructed or dropped.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Converts the slot into an `Option<T>`.
    #[inline]
    pub fn into_option(mut self) -> Option<T> {
        self.take()
    }

    /// Constructs `value` into empty storage.
    #[inline(always)]
    fn construct(&mut self, value: T) -> &mut T {
        debug_assert!(!self.occupied, "construct over a live payload");
        self.occupied = true;
        // SAFETY: the slot was empty, so nothing is overwritten.
        unsafe { raw::write(&mut self.storage, value) }
    }
}

impl<T> Default for OptionalSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OptionalSlot<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T> From<T> for OptionalSlot<T> {
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T> From<Option<T>> for OptionalSlot<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::new(),
        }
    }
}

impl<T> From<OptionalSlot<T>> for Option<T> {
    fn from(slot: OptionalSlot<T>) -> Self {
        slot.into_option()
    }
}

impl<T: fmt::Debug> fmt::Debug for OptionalSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("OptionalSlot").field(value).finish(),
            None => f.write_str("OptionalSlot(<empty>)"),
        }
    }
}

impl<T: PartialEq> PartialEq for OptionalSlot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T: Eq> Eq for OptionalSlot<T> {}
