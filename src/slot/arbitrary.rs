//! `proptest` strategy support: generates slots that are empty or hold an arbitrary `T`.

use proptest::{
    arbitrary::{any_with, Arbitrary},
    option::{self, OptionStrategy},
    strategy::{Map, Strategy},
};

use super::OptionalSlot;

fn from_option<T>(value: Option<T>) -> OptionalSlot<T> {
    value.into()
}

impl<T: Arbitrary> Arbitrary for OptionalSlot<T> {
    type Parameters = T::Parameters;
    type Strategy = Map<OptionStrategy<T::Strategy>, fn(Option<T>) -> Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        option::of(any_with::<T>(args)).prop_map(from_option as fn(Option<T>) -> Self)
    }
}
