//! Event guard: decides whether a pointer event may reach a recognizer.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::pointer::{PointerInput, PointerTypes};

/// Whether a recognizer should process `input`.
///
/// Secondary contacts of a multi-touch interaction are rejected so a gesture
/// is never recognized twice for the same touch sequence, and so are pointer
/// types outside `allowed`.
#[must_use]
pub fn should_handle(input: &PointerInput, allowed: PointerTypes) -> bool {
    input.is_primary && pointer_type_allowed(input, allowed)
}

/// Pointer-type check alone, for recognizers that track secondary contacts.
#[must_use]
pub fn pointer_type_allowed(input: &PointerInput, allowed: PointerTypes) -> bool {
    input.pointer_type.is_some_and(|t| allowed.contains(t))
}
