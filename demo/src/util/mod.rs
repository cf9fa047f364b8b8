//! Pure helpers shared by the demo components.

pub mod format;
