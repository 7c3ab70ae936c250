use crate::math::{Aab, Face6, FreePoint};
use crate::raycast::AabHit;

/// The editor's current mode, and the data belonging to it.
///
/// Exactly one interaction is live at a time. Every interaction other than
/// [`Idle`](Self::Idle) begins with a pointer press and ends with the matching release
/// or a cancellation.
#[derive(Clone, Debug, Default, PartialEq)]
#[allow(clippy::exhaustive_enums)]
pub enum Interaction {
    /// Nothing is being manipulated.
    #[default]
    Idle,

    /// A new box's footprint is being dragged out across one of the grid's walls.
    Drawing {
        /// The box being drawn. It has zero thickness along the wall's axis, and is not
        /// yet part of the editor's collection.
        draft: Aab,
        /// Where the press happened, snapped to the grid. One corner of the footprint.
        anchor: FreePoint,
        /// The latest pointer position on the wall, snapped. The corner opposite
        /// `anchor`.
        corner: FreePoint,
        /// The wall being drawn on.
        wall: Face6,
    },

    /// A footprint from [`Drawing`](Self::Drawing) is being pulled away from its wall to
    /// give it thickness.
    Extruding {
        /// The box being extruded. Not yet part of the editor's collection.
        draft: Aab,
        /// The wall the footprint was drawn on. The face of the draft lying on that
        /// wall stays fixed; the [opposite](Face6::opposite) face moves.
        wall: Face6,
        /// The point, on the wall, whose perpendicular line the pointer is projected
        /// onto to find the new thickness.
        pivot: FreePoint,
    },

    /// A face of an existing box is being moved, with the opposite face fixed.
    Resizing {
        /// Index of the box in [`BoxEditor::boxes()`](super::BoxEditor::boxes).
        index: usize,
        /// The face being moved.
        face: Face6,
        /// Where the face was grabbed; the pointer is projected onto the line through
        /// this point perpendicular to the face.
        grab_point: FreePoint,
    },

    /// An existing box is being moved without changing its size.
    Translating {
        /// Index of the box in [`BoxEditor::boxes()`](super::BoxEditor::boxes).
        index: usize,
        /// The face that was grabbed. The box moves within the plane of this face.
        face: Face6,
        /// Where the face was grabbed.
        grab_point: FreePoint,
        /// The box as it was when grabbed; each movement is computed relative to this.
        start: Aab,
    },
}

impl Interaction {
    /// Returns whether this is [`Interaction::Idle`].
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    /// Returns the uncommitted box, if this interaction is creating one.
    pub fn draft(&self) -> Option<&Aab> {
        match self {
            Interaction::Drawing { draft, .. } | Interaction::Extruding { draft, .. } => {
                Some(draft)
            }
            Interaction::Idle | Interaction::Resizing { .. } | Interaction::Translating { .. } => {
                None
            }
        }
    }

    /// Returns the index of the committed box being edited, if any.
    pub fn box_index(&self) -> Option<usize> {
        match *self {
            Interaction::Resizing { index, .. } | Interaction::Translating { index, .. } => {
                Some(index)
            }
            Interaction::Idle | Interaction::Drawing { .. } | Interaction::Extruding { .. } => {
                None
            }
        }
    }

    /// A short lowercase name for the mode, for logging and display.
    pub fn name(&self) -> &'static str {
        match self {
            Interaction::Idle => "idle",
            Interaction::Drawing { .. } => "drawing",
            Interaction::Extruding { .. } => "extruding",
            Interaction::Resizing { .. } => "resizing",
            Interaction::Translating { .. } => "translating",
        }
    }
}

/// What is under the pointer while the editor is idle; see
/// [`BoxEditor::hover()`](super::BoxEditor::hover).
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(clippy::exhaustive_enums)]
pub enum Hover {
    /// A face of a committed box.
    Box {
        /// Index of the box in [`BoxEditor::boxes()`](super::BoxEditor::boxes).
        index: usize,
        /// Where the pointer ray enters the box.
        hit: AabHit,
    },
    /// A wall of the grid, where pressing would start drawing a box.
    Wall {
        /// The wall.
        face: Face6,
        /// The point where drawing would start, snapped to the grid.
        point: FreePoint,
    },
}

/// Which box face a renderer should tint; see
/// [`BoxEditor::highlight()`](super::BoxEditor::highlight).
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(clippy::exhaustive_structs)]
pub struct Highlight {
    /// The box the face belongs to.
    pub target: HighlightTarget,
    /// The face to tint.
    pub face: Face6,
    /// How to tint it.
    pub style: HighlightStyle,
}

/// The box referred to by a [`Highlight`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[allow(clippy::exhaustive_enums)]
pub enum HighlightTarget {
    /// The box at this index in [`BoxEditor::boxes()`](super::BoxEditor::boxes).
    Box(usize),
    /// The box returned by [`BoxEditor::draft()`](super::BoxEditor::draft).
    Draft,
}

/// The manner in which a highlighted face should be drawn.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[allow(clippy::exhaustive_enums)]
pub enum HighlightStyle {
    /// The face is being dragged.
    Active,
    /// The face is under the pointer and would be dragged if pressed.
    Hover,
}

impl HighlightStyle {
    /// The gray level, from 0 (black) to 1 (white), that the face should be drawn in.
    pub fn gray_level(self) -> f32 {
        match self {
            HighlightStyle::Active => 0.75,
            HighlightStyle::Hover => 0.9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exhaust::Exhaust as _;

    #[test]
    fn accessors() {
        let draft = Aab::new(0., 1., 0., 0., 0., 1.);
        let drawing = Interaction::Drawing {
            draft,
            anchor: draft.lower_bounds_p(),
            corner: draft.upper_bounds_p(),
            wall: Face6::NY,
        };
        assert_eq!(drawing.draft(), Some(&draft));
        assert_eq!(drawing.box_index(), None);
        assert!(!drawing.is_idle());

        let translating = Interaction::Translating {
            index: 3,
            face: Face6::PX,
            grab_point: draft.upper_bounds_p(),
            start: draft,
        };
        assert_eq!(translating.draft(), None);
        assert_eq!(translating.box_index(), Some(3));
        assert_eq!(translating.name(), "translating");

        assert!(Interaction::default().is_idle());
    }

    #[test]
    fn active_is_darker_than_hover() {
        for style in HighlightStyle::exhaust() {
            assert!((0.0..=1.0).contains(&style.gray_level()));
        }
        assert!(HighlightStyle::Active.gray_level() < HighlightStyle::Hover.gray_level());
    }
}
