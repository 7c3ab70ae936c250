use boxsculpt::camera::{CameraView as _, OrbitCamera, PickingView, Projection, Viewport};
use boxsculpt::editor::BoxEditor;
use boxsculpt::euclid::Angle;
use boxsculpt::math::{Aab, FreeCoordinate};
use boxsculpt::volume;

use crate::script::ScriptEvent;

/// A [`BoxEditor`] together with the camera and display it is being viewed through,
/// standing in for an interactive window.
///
/// Pointer presses that the editor does not take rotate the camera, as they would in an
/// interactive session.
#[derive(Debug)]
pub struct ScriptSession {
    editor: BoxEditor,
    camera: OrbitCamera,
    viewport: Viewport,
    projection: Projection,
}

impl ScriptSession {
    /// Vertical field of view of the simulated display.
    pub const FIELD_OF_VIEW: Angle<FreeCoordinate> = Angle {
        radians: core::f64::consts::FRAC_PI_3,
    };

    /// Wraps `editor`, viewing it from an [`OrbitCamera`] centered on its grid.
    pub fn new(editor: BoxEditor, viewport: Viewport) -> Self {
        let camera = OrbitCamera::for_grid(&editor.grid());
        let projection = Projection::perspective(
            Self::FIELD_OF_VIEW,
            viewport.nominal_aspect_ratio(),
            0.1,
            1000.0,
        );
        Self {
            editor,
            camera,
            viewport,
            projection,
        }
    }

    /// The editor.
    pub fn editor(&self) -> &BoxEditor {
        &self.editor
    }

    /// The camera.
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Apply all of `events`, in order.
    pub fn run(&mut self, events: impl IntoIterator<Item = ScriptEvent>) {
        let mut count = 0usize;
        for event in events {
            self.apply(&event);
            count += 1;
        }
        log::debug!(
            "Replayed {count} events; {n} boxes, {interaction}",
            n = self.editor.boxes().len(),
            interaction = self.editor.interaction().name()
        );
    }

    /// Apply one event.
    pub fn apply(&mut self, event: &ScriptEvent) {
        log::trace!("{event:?}");
        let view = PickingView {
            viewport: self.viewport,
            projection: self.projection,
            camera: &self.camera,
        };
        match *event {
            ScriptEvent::PointerMove { pointer } => {
                if let Some(position) = pointer.pixel() {
                    self.editor.pointer_move_at(&view, position);
                    self.camera.drag_to(position);
                } else if let Some(ray) = pointer.ray() {
                    self.editor.pointer_move(ray);
                }
            }
            ScriptEvent::PointerDown { pointer } => {
                if let Some(position) = pointer.pixel() {
                    if !self.editor.pointer_down_at(&view, position) {
                        self.camera.begin_drag(position);
                    }
                } else if let Some(ray) = pointer.ray() {
                    self.editor.pointer_down(ray);
                }
            }
            ScriptEvent::PointerUp => {
                if self.camera.is_dragging() {
                    self.camera.end_drag();
                } else {
                    self.editor.pointer_up();
                }
            }
            ScriptEvent::PointerCancel => {
                self.camera.end_drag();
                self.editor.pointer_cancel();
            }
            ScriptEvent::KeyDown { key } => {
                if !self.editor.key_down(key) {
                    log::debug!("Key {key:?} has no effect");
                }
            }
            ScriptEvent::KeyUp { key } => self.editor.key_up(key),
            ScriptEvent::Focus { has_focus } => self.editor.key_focus(has_focus),
            ScriptEvent::Zoom { delta } => self.camera.zoom(delta),
        }
    }

    /// Describe the current state of the editor, scattering `particle_count` particles
    /// through the boxes using `rng`.
    pub fn summary(&self, particle_count: usize, rng: &mut impl rand::Rng) -> Summary {
        let boxes = self.editor.boxes().to_vec();
        let particles = volume::scatter_points(&boxes, particle_count, rng)
            .into_iter()
            .map(|point| point.to_array())
            .collect();
        let size = self.editor.grid().size();
        Summary {
            grid_size: [size.width, size.height, size.depth],
            total_volume: self.editor.total_volume(),
            can_start: self.editor.can_start(),
            boxes,
            particles,
        }
    }
}

/// What the `boxsculpt` binary prints when it is done.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct Summary {
    /// Dimensions of the grid.
    pub grid_size: [FreeCoordinate; 3],
    /// The committed boxes.
    pub boxes: Vec<Aab>,
    /// Sum of the volumes of `boxes`.
    pub total_volume: FreeCoordinate,
    /// Whether the boxes are ready to hand to a simulation.
    pub can_start: bool,
    /// Particle positions scattered through `boxes`, if any were requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub particles: Vec<[FreeCoordinate; 3]>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::Pointer;
    use boxsculpt::config::EditorConfig;
    use boxsculpt::input::Key;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng as _;

    fn session() -> ScriptSession {
        ScriptSession::new(
            BoxEditor::new(EditorConfig::default()).unwrap(),
            Viewport::with_size(800.0, 600.0),
        )
    }

    fn down(x: f64, z: f64) -> Pointer {
        Pointer::Ray {
            origin: [x, 30.0, z],
            direction: [0.0, -1.0, 0.0],
        }
    }

    #[test]
    fn draw_box_with_rays() {
        let mut session = session();
        session.run([
            ScriptEvent::PointerDown {
                pointer: down(4.2, 6.1),
            },
            ScriptEvent::PointerMove {
                pointer: down(6.8, 9.2),
            },
            ScriptEvent::PointerUp,
            ScriptEvent::PointerMove {
                pointer: Pointer::Ray {
                    origin: [30.0, 3.2, 9.0],
                    direction: [-1.0, 0.0, 0.0],
                },
            },
            ScriptEvent::PointerUp,
        ]);
        assert_eq!(
            session.editor().boxes(),
            &[Aab::new(4., 7., 0., 3., 6., 9.)]
        );

        let mut rng = rand_xoshiro::Xoshiro256Plus::seed_from_u64(1);
        let summary = session.summary(10, &mut rng);
        assert_eq!(summary.total_volume, 27.0);
        assert!(summary.can_start);
        assert_eq!(summary.particles.len(), 10);
        assert_eq!(summary.grid_size, [40.0, 20.0, 20.0]);
    }

    #[test]
    fn press_on_nothing_rotates_camera() {
        let mut session = session();
        session.run([
            // Top left corner looks over the grid.
            ScriptEvent::PointerDown {
                pointer: Pointer::Pixel([0.0, 0.0]),
            },
            ScriptEvent::PointerMove {
                pointer: Pointer::Pixel([100.0, 0.0]),
            },
        ]);
        assert!(session.camera().is_dragging());
        assert!((session.camera().azimuth() - 0.5).abs() < 1e-12);
        assert!(session.editor().interaction().is_idle());

        session.apply(&ScriptEvent::PointerUp);
        assert!(!session.camera().is_dragging());
    }

    #[test]
    fn press_with_camera_key_rotates_camera() {
        let mut session = session();
        session.run([
            ScriptEvent::KeyDown { key: Key::CAMERA },
            ScriptEvent::PointerDown {
                pointer: Pointer::Pixel([399.5, 299.5]),
            },
        ]);
        assert!(session.camera().is_dragging());
        assert!(session.editor().interaction().is_idle());
    }

    #[test]
    fn press_on_wall_draws() {
        let mut session = session();
        session.apply(&ScriptEvent::PointerDown {
            pointer: Pointer::Pixel([399.5, 299.5]),
        });
        assert!(!session.camera().is_dragging());
        assert_eq!(session.editor().interaction().name(), "drawing");

        session.apply(&ScriptEvent::PointerCancel);
        assert!(session.editor().interaction().is_idle());
    }

    #[test]
    fn zoom() {
        let mut session = session();
        session.apply(&ScriptEvent::Zoom { delta: -3.0 });
        assert_eq!(session.camera().distance(), 38.0);
    }
}
