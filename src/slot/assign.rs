//! Assignment into a slot, from a bare value or from another slot.
//!
//! An occupied target is assigned in place (the live `T` is reused); an empty
//! target gets a freshly constructed `T`. Assigning from an empty slot clears
//! the target.

use super::{raw, OptionalSlot};

impl<T> OptionalSlot<T> {
    /// Moves `value` into the slot.
    ///
    /// If occupied, the live payload is overwritten with `*payload = value`.
    /// Otherwise `value` is constructed into the empty storage. The slot is
    /// always occupied afterwards.
    pub fn assign(&mut self, value: T) -> &mut T {
        if self.occupied {
            // SAFETY: `occupied` is true.
            let payload = unsafe { raw::assume_init_mut(&mut self.storage) };
            *payload = value;
            payload
        } else {
            self.construct(value)
        }
    }

    /// Copies `value` into the slot.
    ///
    /// If occupied, the live payload is updated through [`Clone::clone_from`],
    /// letting `T` reuse its own resources. Otherwise a clone of `value` is
    /// constructed into the empty storage.
    pub fn assign_cloned(&mut self, value: &T) -> &mut T
    where
        T: Clone,
    {
        if self.occupied {
            // SAFETY: `occupied` is true.
            let payload = unsafe { raw::assume_init_mut(&mut self.storage) };
            payload.clone_from(value);
            payload
        } else {
            self.construct(value.clone())
        }
    }

    /// Moves the contents of `rhs` into `self`, leaving `rhs` empty.
    ///
    /// - `rhs` empty: `self` is reset.
    /// - `rhs` occupied, `self` occupied: the payload is move-assigned in place.
    /// - `rhs` occupied, `self` empty: the payload is moved into `self`'s storage.
    ///
    /// Both arguments are exclusive borrows, so `self` and `rhs` are never the
    /// same slot.
    pub fn assign_take(&mut self, rhs: &mut Self) {
        match rhs.take() {
            Some(value) => {
                trace_transition!(occupied = self.occupied, "assign_take: moving payload");
                self.assign(value);
            }
            None => self.reset(),
        }
    }
}

impl<T: Clone> Clone for OptionalSlot<T> {
    fn clone(&self) -> Self {
        match self.get() {
            Some(value) => Self::some_cloned(value),
            None => Self::new(),
        }
    }

    /// Copy-assigns from `source`.
    ///
    /// An empty `source` resets `self`. An occupied `source` is copied into
    /// `self` via [`assign_cloned`](OptionalSlot::assign_cloned), so an
    /// occupied `self` keeps its payload object and only clone-assigns into it.
    fn clone_from(&mut self, source: &Self) {
        match source.get() {
            Some(value) => {
                self.assign_cloned(value);
            }
            None => self.reset(),
        }
    }
}
