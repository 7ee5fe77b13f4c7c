/// The error returned by checked access to an empty [`OptionalSlot`](super::OptionalSlot).
///
/// This is the only failure the slot itself reports. Errors raised while
/// constructing or assigning the payload pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyAccess;

impl core::fmt::Display for EmptyAccess {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("access to an empty optional slot")
    }
}

impl std::error::Error for EmptyAccess {}
