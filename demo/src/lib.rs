//! # demo
//!
//! Leptos front end for the cube game and a gesture playground.
//!
//! Built with the `csr` feature for the browser (`trunk serve`); without it
//! the components still compile and the pure helpers in [`util`] are tested
//! natively.

pub mod app;
pub mod components;
pub mod util;
