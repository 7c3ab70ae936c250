//! Box Sculpt is an interactive editor for building a set of axis-aligned boxes inside
//! a fixed 3D grid, using nothing more than a 2D pointer and a few keys.
//!
//! The resulting boxes are meant to be handed to a downstream consumer, such as a
//! particle simulation that fills them with fluid; see [`volume`].
//!
//! ## Overview
//!
//! * [`math`] and [`raycast`] contain the geometry: [`Aab`](math::Aab) boxes, the
//!   [`Grid`](math::Grid) they live in, and the intersection tests used to find what is
//!   under the pointer.
//! * [`camera`] turns pointer positions into world-space [`Ray`](raycast::Ray)s, and
//!   provides a simple [`OrbitCamera`](camera::OrbitCamera).
//! * [`editor::BoxEditor`] owns the boxes and interprets pointer and key events as
//!   drawing, extruding, resizing, or translating them.
//! * [`listen`] is the change notification mechanism the editor uses to tell its host
//!   that the boxes or the interaction have changed.
//!
//! Rendering is not part of this crate; everything a renderer needs is available by
//! reading the editor's state after each event.
//!
//! ## Example
//!
//! ```
//! use boxsculpt::editor::{BoxEditor, Interaction};
//! use boxsculpt::math::Aab;
//! use boxsculpt::raycast::Ray;
//!
//! let mut editor = BoxEditor::new(Default::default()).unwrap();
//!
//! // Look straight down at the floor and drag out a footprint.
//! editor.pointer_down(Ray::new([4.2, 30.0, 6.1], [0.0, -1.0, 0.0]));
//! editor.pointer_move(Ray::new([6.8, 30.0, 9.2], [0.0, -1.0, 0.0]));
//! editor.pointer_up();
//! assert!(matches!(editor.interaction(), Interaction::Extruding { .. }));
//!
//! // Pull it upward from the side, then release to commit.
//! editor.pointer_move(Ray::new([30.0, 3.2, 9.0], [-1.0, 0.0, 0.0]));
//! editor.pointer_up();
//! assert_eq!(editor.boxes(), &[Aab::new(4.0, 7.0, 0.0, 3.0, 6.0, 9.0)]);
//! ```

// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![forbid(unsafe_code)]

pub use boxsculpt_base::math;
pub use boxsculpt_base::raycast;

pub mod camera;
pub mod config;
pub mod editor;
pub mod input;
pub mod listen;
pub mod presets;
pub mod volume;

/// Re-export the version of the [`euclid`] vector math library we're using.
pub use euclid;
