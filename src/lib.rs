//! # `optslot` - Inline Optional Value Slot
//!
//! A fixed-size storage slot that may or may not hold a constructed value of
//! type `T`. The slot manages the payload's lifetime by hand (inline
//! `MaybeUninit<T>` storage plus an occupancy tag) and guarantees that every
//! stored value is constructed once and destroyed exactly once.
//!
//! ## Safety Guarantees
//!
//! - **No uninitialized reads**: storage is only reinterpreted as `T` while the
//!   occupancy tag is set. All such reinterpretations live in one private,
//!   audited module.
//! - **Exactly-once destruction**: the tag is cleared before a payload's
//!   destructor runs, so even a panicking destructor is never re-run.
//! - **Checked access by default**: [`OptionalSlot::value`] and friends return
//!   [`EmptyAccess`] on an empty slot. The unchecked accessors are `unsafe`.
//!
//! ## Failure Model
//!
//! [`EmptyAccess`] is the only error the slot reports. Errors produced while
//! constructing a payload (see [`OptionalSlot::try_emplace_with`]) are returned
//! unchanged. `emplace` offers the weak guarantee: the old payload is destroyed
//! before the new one is built, so a failed construction leaves the slot empty.
//!
//! ## Threading
//!
//! The slot is a plain single-owner value with no internal synchronization.
//! It is `Send`/`Sync` exactly when `T` is.
//!
//! ## Example
//!
//! ```rust
//! use optslot::OptionalSlot;
//!
//! let mut a = OptionalSlot::some(String::from("slot"));
//! let mut b = OptionalSlot::new();
//!
//! b.clone_from(&a);
//! b.value_mut().unwrap().push('!');
//! assert_eq!(a.value().unwrap(), "slot");
//! assert_eq!(b.value().unwrap(), "slot!");
//!
//! a.assign_take(&mut b);
//! assert!(!b.has_value());
//! assert_eq!(a.value().unwrap(), "slot!");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod slot;

pub use slot::{EmptyAccess, OptionalSlot};

// Compile-time assertions for the inline layout.
const _: () = {
    use core::mem;

    // The slot never adds indirection: payload plus a one-byte tag, padded.
    assert!(mem::size_of::<OptionalSlot<u64>>() == mem::size_of::<u64>() * 2);
    assert!(mem::align_of::<OptionalSlot<u64>>() == mem::align_of::<u64>());
    assert!(mem::size_of::<OptionalSlot<u8>>() == 2);
    assert!(mem::size_of::<OptionalSlot<()>>() == 1);
};
