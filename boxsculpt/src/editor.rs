//! [`BoxEditor`], the interactive editing state machine.

use core::fmt;

use euclid::Point2D;

use crate::camera::{NominalPixel, PickingView};
use crate::config::{ConfigError, EditorConfig};
use crate::input::{HeldKeys, Key};
use crate::listen;
use crate::math::{self, Aab, Axis, Face6, FreeCoordinate, FreePoint, FreeVector, Grid};
use crate::raycast::{self, Ray};
use crate::volume;

mod interaction;
pub use interaction::*;


/// Message sent by a [`BoxEditor`] to its listeners.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[allow(clippy::exhaustive_enums)]
pub enum EditorChange {
    /// The collection of committed boxes changed: a box was added, removed, or edited
    /// in place.
    Boxes,
    /// The [`Interaction`] changed, either in mode or in the geometry of its draft box.
    Interaction,
}

/// Owns a set of boxes and edits them in response to pointer and keyboard input.
///
/// Input arrives through the `pointer_*` and `key_*` methods, which each fully process
/// one event before returning. Pointer events come in two forms: ray-level methods such
/// as [`pointer_move()`](Self::pointer_move), which take a world-space [`Ray`], and
/// screen-level methods such as [`pointer_move_at()`](Self::pointer_move_at), which take
/// a pointer position and a [`PickingView`] to build the ray with.
///
/// A press on a box grabs the face under the pointer, and dragging resizes the box;
/// with [`Key::TRANSLATE`] held, dragging moves the whole box instead. A press on a wall
/// of the grid starts drawing the footprint of a new box on that wall. Releasing then
/// switches to extruding it; moving the pointer sets its thickness and the next release
/// adds it to [`boxes()`](Self::boxes).
///
/// While [`Key::CAMERA`] is held, presses are not taken by the editor, so that the host
/// can give them to its camera controller instead.
///
/// Changes are announced through [`listen::Listen`] as [`EditorChange`] messages.
pub struct BoxEditor {
    config: EditorConfig,
    grid: Grid,
    boxes: Vec<Aab>,
    interaction: Interaction,
    keys: HeldKeys,
    /// Most recent pointer ray, or [`None`] if the pointer could not be projected.
    pointer: Option<Ray>,
    /// Whether the camera reported dragging as of the last screen-level event.
    camera_dragging: bool,
    notifier: listen::Notifier<EditorChange>,
}

impl BoxEditor {
    /// Constructs an editor with no boxes.
    ///
    /// Returns an error if `config` is not valid.
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        let grid = config.validate()?;
        Ok(Self {
            config,
            grid,
            boxes: Vec::new(),
            interaction: Interaction::Idle,
            keys: HeldKeys::default(),
            pointer: None,
            camera_dragging: false,
            notifier: listen::Notifier::new(),
        })
    }

    /// Returns the configuration this editor was created with.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Returns the grid that boxes are drawn in.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Returns the committed boxes, in the order they were added.
    pub fn boxes(&self) -> &[Aab] {
        &self.boxes
    }

    /// Returns the current interaction.
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Returns the box being drawn or extruded, which is not yet part of
    /// [`boxes()`](Self::boxes).
    pub fn draft(&self) -> Option<&Aab> {
        self.interaction.draft()
    }

    // --- Pointer input ---

    /// Handles the pointer moving, given the world-space ray under the pointer.
    pub fn pointer_move(&mut self, ray: Ray) {
        self.pointer = Some(ray);
        let step = self.config.step;

        match self.interaction {
            Interaction::Idle => {}

            Interaction::Drawing {
                anchor,
                corner,
                wall,
                ..
            } => {
                let Some(point) =
                    raycast::ray_plane_intersection(ray, wall.axis(), self.grid.wall_position(wall))
                else {
                    return;
                };
                let point = self.snap_to_wall(point, wall);
                if point != corner {
                    let draft = Aab::spanning(anchor, point);
                    log::trace!("drawing footprint {draft:?}");
                    self.set_interaction(Interaction::Drawing {
                        draft,
                        anchor,
                        corner: point,
                        wall,
                    });
                }
            }

            Interaction::Extruding { draft, wall, pivot } => {
                let axis = wall.axis();
                let Some(coordinate) = raycast::closest_coordinate_on_axis_line(ray, pivot, axis)
                else {
                    return;
                };
                let base = self.grid.wall_position(wall);
                let coordinate =
                    math::quantize(coordinate, step).clamp(0.0, self.grid.extent(axis));
                // Never past the wall the footprint was drawn on.
                let coordinate = if wall.is_negative() {
                    coordinate.max(base)
                } else {
                    coordinate.min(base)
                };
                let Some(extruded) = draft.with_face_at(wall.opposite(), coordinate) else {
                    return;
                };
                if extruded != draft {
                    log::trace!("extruding {extruded:?}");
                    self.set_interaction(Interaction::Extruding {
                        draft: extruded,
                        wall,
                        pivot,
                    });
                }
            }

            Interaction::Resizing {
                index,
                face,
                grab_point,
            } => {
                let Some(&current) = self.boxes.get(index) else {
                    self.set_interaction(Interaction::Idle);
                    return;
                };
                let Some(coordinate) =
                    raycast::closest_coordinate_on_axis_line(ray, grab_point, face.axis())
                else {
                    return;
                };
                let Some(resized) = self.resized(current, face, math::quantize(coordinate, step))
                else {
                    return;
                };
                if resized != current {
                    log::trace!("resizing box {index} to {resized:?}");
                    self.boxes[index] = resized;
                    self.notify(EditorChange::Boxes);
                }
            }

            Interaction::Translating {
                index,
                face,
                grab_point,
                start,
            } => {
                let Some(&current) = self.boxes.get(index) else {
                    self.set_interaction(Interaction::Idle);
                    return;
                };
                let axis = face.axis();
                let Some(point) = raycast::ray_plane_intersection(ray, axis, grab_point[axis])
                else {
                    return;
                };
                let delta = math::quantize_vector(point - grab_point, step);
                let mut moved = start.translate(delta);
                if self.config.confine_translation {
                    moved = confine(moved, &self.grid);
                }
                if moved != current {
                    log::trace!("moving box {index} to {moved:?}");
                    self.boxes[index] = moved;
                    self.notify(EditorChange::Boxes);
                }
            }
        }
    }

    /// Handles a pointer press, given the world-space ray under the pointer.
    ///
    /// Returns whether the editor took the press. If it did not, because nothing
    /// editable is under the pointer or [`Key::CAMERA`] is held, the host may use the
    /// press for something else, such as rotating the camera.
    pub fn pointer_down(&mut self, ray: Ray) -> bool {
        self.pointer = Some(ray);

        match self.interaction {
            Interaction::Idle => {}
            Interaction::Extruding { .. } => {
                // The release that follows commits the box.
                return true;
            }
            Interaction::Drawing { .. }
            | Interaction::Resizing { .. }
            | Interaction::Translating { .. } => {
                log::debug!("ignoring press while {}", self.interaction.name());
                return true;
            }
        }

        if self.keys.is_held(Key::CAMERA) || !ray.is_usable() {
            return false;
        }

        if let Some((index, hit)) = raycast::nearest_aab_intersection(ray, &self.boxes) {
            let interaction = if self.keys.is_held(Key::TRANSLATE) {
                Interaction::Translating {
                    index,
                    face: hit.face,
                    grab_point: hit.point,
                    start: self.boxes[index],
                }
            } else {
                Interaction::Resizing {
                    index,
                    face: hit.face,
                    grab_point: hit.point,
                }
            };
            log::debug!(
                "grabbed {face:?} of box {index}; {mode}",
                face = hit.face,
                mode = interaction.name()
            );
            self.set_interaction(interaction);
            true
        } else if let Some(hit) = raycast::grid_boundary_intersection(ray, &self.grid) {
            let anchor = self.snap_to_wall(hit.point, hit.face);
            log::debug!("drawing on {:?} from {anchor:?}", hit.face);
            self.set_interaction(Interaction::Drawing {
                draft: Aab::spanning(anchor, anchor),
                anchor,
                corner: anchor,
                wall: hit.face,
            });
            true
        } else {
            false
        }
    }

    /// Handles the pointer being released.
    ///
    /// This finishes the current interaction, except that finishing drawing a footprint
    /// begins extruding it.
    pub fn pointer_up(&mut self) {
        match self.interaction {
            Interaction::Idle => {}

            Interaction::Drawing {
                draft,
                corner,
                wall,
                ..
            } => {
                let size = draft.size();
                let [a, b] = wall.axis().others();
                if size[a] > 0.0 && size[b] > 0.0 {
                    log::debug!("footprint {draft:?} drawn; extruding");
                    self.set_interaction(Interaction::Extruding {
                        draft,
                        wall,
                        pivot: corner,
                    });
                } else {
                    log::debug!("discarding footprint {draft:?} with no area");
                    self.set_interaction(Interaction::Idle);
                }
            }

            Interaction::Extruding { draft, .. } => {
                log::debug!("adding box {draft:?}");
                self.boxes.push(draft);
                self.interaction = Interaction::Idle;
                self.notify(EditorChange::Boxes);
                self.notify(EditorChange::Interaction);
            }

            Interaction::Resizing { .. } | Interaction::Translating { .. } => {
                log::debug!("finished {}", self.interaction.name());
                self.set_interaction(Interaction::Idle);
            }
        }
    }

    /// Abandons the current interaction, such as when the host loses pointer capture.
    ///
    /// A box being drawn or extruded is discarded. Changes already made to a box being
    /// resized or translated are kept.
    pub fn pointer_cancel(&mut self) {
        if !self.interaction.is_idle() {
            log::debug!("cancelled {}", self.interaction.name());
            self.set_interaction(Interaction::Idle);
        }
    }

    /// Like [`pointer_move()`](Self::pointer_move), but takes a pointer position in
    /// the viewport.
    pub fn pointer_move_at(
        &mut self,
        view: &PickingView<'_>,
        position: Point2D<FreeCoordinate, NominalPixel>,
    ) {
        self.camera_dragging = view.camera.is_dragging();
        match view.ray_through_pixel(position) {
            Some(ray) => self.pointer_move(ray),
            None => self.pointer = None,
        }
    }

    /// Like [`pointer_down()`](Self::pointer_down), but takes a pointer position in
    /// the viewport.
    pub fn pointer_down_at(
        &mut self,
        view: &PickingView<'_>,
        position: Point2D<FreeCoordinate, NominalPixel>,
    ) -> bool {
        self.camera_dragging = view.camera.is_dragging();
        match view.ray_through_pixel(position) {
            Some(ray) => self.pointer_down(ray),
            None => {
                self.pointer = None;
                false
            }
        }
    }

    // --- Keyboard input ---

    /// Handles incoming key-down events. Returns whether the key was used.
    ///
    /// [`Key::CANCEL`] acts like [`pointer_cancel()`](Self::pointer_cancel).
    pub fn key_down(&mut self, key: Key) -> bool {
        match key {
            Key::CANCEL => {
                self.pointer_cancel();
                true
            }
            Key::CAMERA | Key::TRANSLATE => {
                self.keys.press(key);
                true
            }
            _ => false,
        }
    }

    /// Handles incoming key-up events.
    pub fn key_up(&mut self, key: Key) {
        self.keys.release(key);
    }

    /// Handles the keyboard focus being gained or lost. If the platform does not have
    /// a concept of focus, you need not call this method, but may call it with `true`.
    ///
    /// `BoxEditor` will assume that if focus is lost, key-up events may be lost and
    /// so currently held keys should stop taking effect.
    pub fn key_focus(&mut self, has_focus: bool) {
        if !has_focus {
            self.keys.clear();
        }
    }

    // --- Presentation ---

    /// Returns what a press would act on, for hover feedback.
    ///
    /// Returns [`None`] unless the editor is idle, and also while [`Key::CAMERA`] is
    /// held or the camera is being dragged.
    pub fn hover(&self) -> Option<Hover> {
        if !self.interaction.is_idle() || self.keys.is_held(Key::CAMERA) || self.camera_dragging
        {
            return None;
        }
        let ray = self.pointer?;
        if let Some((index, hit)) = raycast::nearest_aab_intersection(ray, &self.boxes) {
            return Some(Hover::Box { index, hit });
        }
        let hit = raycast::grid_boundary_intersection(ray, &self.grid)?;
        Some(Hover::Wall {
            face: hit.face,
            point: self.snap_to_wall(hit.point, hit.face),
        })
    }

    /// Returns the box face that should be drawn highlighted, if any: the face being
    /// resized or extruded, or else the hovered face.
    pub fn highlight(&self) -> Option<Highlight> {
        match self.interaction {
            Interaction::Resizing { index, face, .. } => Some(Highlight {
                target: HighlightTarget::Box(index),
                face,
                style: HighlightStyle::Active,
            }),
            Interaction::Extruding { wall, .. } => Some(Highlight {
                target: HighlightTarget::Draft,
                face: wall.opposite(),
                style: HighlightStyle::Active,
            }),
            Interaction::Idle => match self.hover()? {
                Hover::Box { index, hit } => Some(Highlight {
                    target: HighlightTarget::Box(index),
                    face: hit.face,
                    style: HighlightStyle::Hover,
                }),
                Hover::Wall { .. } => None,
            },
            Interaction::Drawing { .. } | Interaction::Translating { .. } => None,
        }
    }

    // --- Bulk operations ---

    /// Removes all boxes, abandoning any interaction.
    pub fn clear_boxes(&mut self) {
        self.set_interaction(Interaction::Idle);
        if !self.boxes.is_empty() {
            self.boxes.clear();
            self.notify(EditorChange::Boxes);
        }
    }

    /// Adds a box to the end of [`boxes()`](Self::boxes), abandoning any interaction.
    ///
    /// Boxes outside the grid are accepted, but a warning is logged.
    pub fn append_box(&mut self, aab: Aab) {
        self.set_interaction(Interaction::Idle);
        self.push_box(aab);
        self.notify(EditorChange::Boxes);
    }

    /// Replaces all boxes with `boxes`, abandoning any interaction.
    ///
    /// Equivalent to [`clear_boxes()`](Self::clear_boxes) followed by
    /// [`append_box()`](Self::append_box) for each box, except that only one
    /// [`EditorChange::Boxes`] notification is sent.
    pub fn load_preset(&mut self, boxes: impl IntoIterator<Item = Aab>) {
        self.set_interaction(Interaction::Idle);
        self.boxes.clear();
        for aab in boxes {
            self.push_box(aab);
        }
        log::debug!("loaded {} boxes", self.boxes.len());
        self.notify(EditorChange::Boxes);
    }

    // --- Downstream queries ---

    /// Sum of the volumes of the committed boxes.
    pub fn total_volume(&self) -> FreeCoordinate {
        volume::total_volume(&self.boxes)
    }

    /// Returns whether the boxes are ready to be used: at least one has nonzero volume,
    /// and no new box is in the middle of being drawn or extruded.
    pub fn can_start(&self) -> bool {
        self.draft().is_none() && self.boxes.iter().any(|aab| aab.volume() > 0.0)
    }

    // --- Internals ---

    fn set_interaction(&mut self, interaction: Interaction) {
        if interaction != self.interaction {
            self.interaction = interaction;
            self.notify(EditorChange::Interaction);
        }
    }

    fn notify(&self, change: EditorChange) {
        self.notifier.notify(&change);
    }

    fn push_box(&mut self, aab: Aab) {
        if !self.grid.bounds().contains_box(aab) {
            log::warn!("box {aab:?} extends outside {:?}", self.grid);
        }
        self.boxes.push(aab);
    }

    /// Snaps a point on `wall` to the grid step, keeping it within the wall.
    fn snap_to_wall(&self, point: FreePoint, wall: Face6) -> FreePoint {
        let mut snapped = self.grid.clamp_point(math::quantize_point(point, self.config.step));
        snapped[wall.axis()] = self.grid.wall_position(wall);
        snapped
    }

    /// Moves `face` of `aab` as close to `target` as the grid and the minimum thickness
    /// allow.
    ///
    /// A box already thinner than the minimum may not become any thinner. A face that is
    /// already outside the grid may stay there, but not move farther out.
    fn resized(&self, aab: Aab, face: Face6, target: FreeCoordinate) -> Option<Aab> {
        let axis = face.axis();
        let lower = aab.lower_bounds_p()[axis];
        let upper = aab.upper_bounds_p()[axis];
        let min_thickness = self.config.min_thickness.min(upper - lower);
        // Rounding in `min_thickness` may put the thickness limit an ulp past the
        // opposite face, so each limit is kept on the correct side of it, and the grid
        // limit is never allowed to pass the thickness limit.
        let position = if face.is_positive() {
            let thinnest = (lower + min_thickness).clamp(lower, upper);
            let farthest = self.grid.extent(axis).max(upper).max(thinnest);
            target.max(thinnest).min(farthest)
        } else {
            let thinnest = (upper - min_thickness).clamp(lower, upper);
            let farthest = lower.min(0.0).min(thinnest);
            target.min(thinnest).max(farthest)
        };
        aab.with_face_at(face, position)
    }
}

/// Moves `aab` the shortest distance that puts it inside `grid`, or if it is too large
/// to fit, aligns its lower bound with the grid's on that axis.
fn confine(aab: Aab, grid: &Grid) -> Aab {
    let mut shift = FreeVector::zero();
    for axis in Axis::ALL {
        let lower = aab.lower_bounds_p()[axis];
        let upper = aab.upper_bounds_p()[axis];
        let extent = grid.extent(axis);
        shift[axis] = if lower < 0.0 {
            -lower
        } else if upper > extent {
            (extent - upper).max(-lower)
        } else {
            0.0
        };
    }
    aab.translate(shift)
}

impl listen::Listen for BoxEditor {
    type Msg = EditorChange;
    type Listener = <listen::Notifier<Self::Msg> as listen::Listen>::Listener;

    fn listen_raw(&self, listener: Self::Listener) {
        self.notifier.listen_raw(listener)
    }
}

impl fmt::Debug for BoxEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            config,
            grid,
            boxes,
            interaction,
            keys,
            pointer,
            camera_dragging,
            notifier: _,
        } = self;
        f.debug_struct("BoxEditor")
            .field("config", config)
            .field("grid", grid)
            .field("boxes", boxes)
            .field("interaction", interaction)
            .field("keys", keys)
            .field("pointer", pointer)
            .field("camera_dragging", camera_dragging)
            .finish_non_exhaustive()
    }
}
