use optslot::{EmptyAccess, OptionalSlot};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Emplace(u16),
    Assign(u16),
    Replace(u16),
    Reset,
    Take,
    CopyFromOther,
    TakeFromOther,
    SwapWithOther,
    StoreInOther(Option<u16>),
    Mutate(u16),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        any::<u16>().prop_map(Operation::Emplace),
        any::<u16>().prop_map(Operation::Assign),
        any::<u16>().prop_map(Operation::Replace),
        Just(Operation::Reset),
        Just(Operation::Take),
        Just(Operation::CopyFromOther),
        Just(Operation::TakeFromOther),
        Just(Operation::SwapWithOther),
        any::<Option<u16>>().prop_map(Operation::StoreInOther),
        any::<u16>().prop_map(Operation::Mutate),
    ]
}

fn assert_matches(slot: &OptionalSlot<u16>, model: &Option<u16>) {
    assert_eq!(slot.has_value(), model.is_some());
    match model {
        Some(v) => assert_eq!(slot.value(), Ok(v)),
        None => assert_eq!(slot.value(), Err(EmptyAccess)),
    }
}

proptest! {
    #[test]
    fn test_slot_matches_option_model(ops in proptest::collection::vec(operation(), 1..100)) {
        let mut slot: OptionalSlot<u16> = OptionalSlot::new();
        let mut other: OptionalSlot<u16> = OptionalSlot::new();
        let mut model: Option<u16> = None;
        let mut other_model: Option<u16> = None;

        for op in ops {
            match op {
                Operation::Emplace(v) => {
                    slot.emplace(v);
                    model = Some(v);
                }
                Operation::Assign(v) => {
                    slot.assign(v);
                    model = Some(v);
                }
                Operation::Replace(v) => {
                    assert_eq!(slot.replace(v), model.replace(v));
                }
                Operation::Reset => {
                    slot.reset();
                    model = None;
                }
                Operation::Take => {
                    assert_eq!(slot.take(), model.take());
                }
                Operation::CopyFromOther => {
                    slot.clone_from(&other);
                    model = other_model;
                }
                Operation::TakeFromOther => {
                    slot.assign_take(&mut other);
                    model = other_model.take();
                }
                Operation::SwapWithOther => {
                    slot.swap(&mut other);
                    std::mem::swap(&mut model, &mut other_model);
                }
                Operation::StoreInOther(v) => {
                    other = OptionalSlot::from(v);
                    other_model = v;
                }
                Operation::Mutate(v) => {
                    let slot_result = slot.value_mut().map(|x| { *x ^= v; *x });
                    let model_result = model.as_mut().map(|x| { *x ^= v; *x }).ok_or(EmptyAccess);
                    assert_eq!(slot_result, model_result);
                }
            }

            assert_matches(&slot, &model);
            assert_matches(&other, &other_model);
        }
    }

    #[test]
    fn test_clone_is_independent(initial in any::<Option<u16>>(), delta in 1u16..) {
        let original: OptionalSlot<u16> = OptionalSlot::from(initial);
        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);

        if let Ok(v) = copy.value_mut() {
            *v = v.wrapping_add(delta);
            prop_assert_ne!(&copy, &original);
        }
        prop_assert_eq!(original.get().copied(), initial);
    }
}
