//! Exactly-once construction/destruction accounting for `OptionalSlot` payloads.

use optslot::OptionalSlot;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Default)]
struct Ledger {
    clones: Cell<usize>,
    clone_froms: Cell<usize>,
    drops: Cell<usize>,
}

/// A payload that records every clone, clone-assignment, and drop.
struct Tracked {
    id: u32,
    ledger: Rc<Ledger>,
}

impl Tracked {
    fn new(id: u32, ledger: &Rc<Ledger>) -> Self {
        Self { id, ledger: Rc::clone(ledger) }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.ledger.clones.set(self.ledger.clones.get() + 1);
        Self { id: self.id, ledger: Rc::clone(&self.ledger) }
    }

    fn clone_from(&mut self, source: &Self) {
        self.ledger.clone_froms.set(self.ledger.clone_froms.get() + 1);
        self.id = source.id;
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.ledger.drops.set(self.ledger.drops.get() + 1);
    }
}

#[test]
fn test_empty_slot_drops_nothing() {
    let ledger = Rc::new(Ledger::default());
    {
        let _slot: OptionalSlot<Tracked> = OptionalSlot::new();
    }
    assert_eq!(ledger.drops.get(), 0);
}

#[test]
fn test_slot_drop_destroys_payload_once() {
    let ledger = Rc::new(Ledger::default());
    {
        let _slot = OptionalSlot::some(Tracked::new(1, &ledger));
    }
    assert_eq!(ledger.drops.get(), 1);
}

#[test]
fn test_double_reset_drops_once() {
    let ledger = Rc::new(Ledger::default());
    let mut slot = OptionalSlot::some(Tracked::new(1, &ledger));

    slot.reset();
    assert_eq!(ledger.drops.get(), 1);
    slot.reset();
    assert_eq!(ledger.drops.get(), 1);

    drop(slot);
    assert_eq!(ledger.drops.get(), 1);
}

#[test]
fn test_emplace_destroys_previous_payload() {
    let ledger = Rc::new(Ledger::default());
    let mut slot = OptionalSlot::some(Tracked::new(1, &ledger));

    slot.emplace(Tracked::new(2, &ledger));
    assert_eq!(ledger.drops.get(), 1);
    assert_eq!(slot.value().map(|t| t.id), Ok(2));

    drop(slot);
    assert_eq!(ledger.drops.get(), 2);
}

#[test]
fn test_failed_try_emplace_keeps_no_payload() {
    let ledger = Rc::new(Ledger::default());
    let mut slot = OptionalSlot::some(Tracked::new(1, &ledger));

    let result = slot.try_emplace_with(|| Err::<Tracked, _>("construction failed"));
    assert_eq!(result.err(), Some("construction failed"));
    assert!(!slot.has_value());
    assert_eq!(ledger.drops.get(), 1);

    drop(slot);
    assert_eq!(ledger.drops.get(), 1);
}

#[test]
fn test_copy_construction_clones_once() {
    let ledger = Rc::new(Ledger::default());
    let source = OptionalSlot::some(Tracked::new(7, &ledger));

    let copy = source.clone();
    assert_eq!(ledger.clones.get(), 1);
    assert_eq!(copy.value().map(|t| t.id), Ok(7));

    drop(copy);
    drop(source);
    assert_eq!(ledger.drops.get(), 2);
}

#[test]
fn test_copy_assignment_into_occupied_reuses_payload() {
    let ledger = Rc::new(Ledger::default());
    let source = OptionalSlot::some(Tracked::new(7, &ledger));
    let mut target = OptionalSlot::some(Tracked::new(3, &ledger));

    target.clone_from(&source);

    assert_eq!(ledger.clone_froms.get(), 1);
    assert_eq!(ledger.clones.get(), 0);
    assert_eq!(ledger.drops.get(), 0);
    assert_eq!(target.value().map(|t| t.id), Ok(7));
}

#[test]
fn test_copy_assignment_into_empty_constructs() {
    let ledger = Rc::new(Ledger::default());
    let source = OptionalSlot::some(Tracked::new(7, &ledger));
    let mut target = OptionalSlot::new();

    target.clone_from(&source);

    assert_eq!(ledger.clones.get(), 1);
    assert_eq!(ledger.clone_froms.get(), 0);
    assert_eq!(target.value().map(|t| t.id), Ok(7));
}

#[test]
fn test_value_assignment_into_occupied_drops_old_value() {
    let ledger = Rc::new(Ledger::default());
    let mut slot = OptionalSlot::some(Tracked::new(1, &ledger));

    slot.assign(Tracked::new(2, &ledger));
    assert_eq!(ledger.drops.get(), 1);
    assert_eq!(slot.value().map(|t| t.id), Ok(2));
}

#[test]
fn test_move_assignment_transfers_without_extra_drops() {
    let ledger = Rc::new(Ledger::default());
    let mut source = OptionalSlot::some(Tracked::new(1, &ledger));
    let mut target = OptionalSlot::new();

    target.assign_take(&mut source);
    assert_eq!(ledger.drops.get(), 0);
    assert!(!source.has_value());

    drop(source);
    assert_eq!(ledger.drops.get(), 0);
    drop(target);
    assert_eq!(ledger.drops.get(), 1);
}

#[test]
fn test_assign_from_empty_destroys_target_payload() {
    let ledger = Rc::new(Ledger::default());
    let mut target = OptionalSlot::some(Tracked::new(1, &ledger));
    let mut empty = OptionalSlot::new();

    target.assign_take(&mut empty);
    assert_eq!(ledger.drops.get(), 1);

    let mut target = OptionalSlot::some(Tracked::new(2, &ledger));
    target.clone_from(&OptionalSlot::new());
    assert_eq!(ledger.drops.get(), 2);
}

#[test]
fn test_take_and_into_value_hand_over_ownership() {
    let ledger = Rc::new(Ledger::default());

    let mut slot = OptionalSlot::some(Tracked::new(1, &ledger));
    let taken = slot.take();
    drop(slot);
    assert_eq!(ledger.drops.get(), 0);
    drop(taken);
    assert_eq!(ledger.drops.get(), 1);

    let slot = OptionalSlot::some(Tracked::new(2, &ledger));
    let value = slot.into_value();
    assert_eq!(ledger.drops.get(), 1);
    drop(value);
    assert_eq!(ledger.drops.get(), 2);
}
