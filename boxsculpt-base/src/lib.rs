//! This library is an internal component of [`boxsculpt`],
//! which defines the core geometric types and the ray intersection tests
//! used for picking boxes and grid walls.
//! Do not depend on this library; use only [`boxsculpt`] instead.
//!
//! [`boxsculpt`]: https://crates.io/crates/boxsculpt/

#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![cfg_attr(
    not(test),
    warn(clippy::std_instead_of_core, clippy::std_instead_of_alloc)
)]
#![warn(clippy::missing_inline_in_public_items)]

#[cfg(any(feature = "std", test))]
#[cfg_attr(test, macro_use)]
extern crate std;

/// Do not use this module directly; its contents are re-exported from `boxsculpt`.
pub mod math;

/// Do not use this module directly; its contents are re-exported from `boxsculpt`.
pub mod raycast;

// reexport for convenience of our tests
#[doc(hidden)]
pub use euclid;
