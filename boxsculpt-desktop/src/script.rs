//! Scripted input: a recorded sequence of pointer, keyboard and camera events.
//!
//! A script is a JSON array of events, each an object whose `"event"` field names the kind
//! of event. For example:
//!
//! ```json
//! [
//!     {"event": "pointer_down", "pointer": {"pixel": [400, 300]}},
//!     {"event": "pointer_move", "pointer": {"ray": {"origin": [5, 30, 5], "direction": [0, -1, 0]}}},
//!     {"event": "pointer_up"},
//!     {"event": "key_down", "key": "shift"},
//!     {"event": "zoom", "delta": -1}
//! ]
//! ```

use std::path::Path;

use boxsculpt::camera::NominalPixel;
use boxsculpt::euclid::Point2D;
use boxsculpt::input::Key;
use boxsculpt::raycast::Ray;

/// One input event.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case", deny_unknown_fields)]
#[non_exhaustive]
pub enum ScriptEvent {
    /// The pointer moved.
    PointerMove {
        /// Where the pointer is.
        pointer: Pointer,
    },
    /// The pointer button was pressed.
    PointerDown {
        /// Where the pointer is.
        pointer: Pointer,
    },
    /// The pointer button was released.
    PointerUp,
    /// The host lost track of the pointer.
    PointerCancel,
    /// A key was pressed.
    KeyDown {
        /// Which key.
        key: Key,
    },
    /// A key was released.
    KeyUp {
        /// Which key.
        key: Key,
    },
    /// The window gained or lost keyboard focus.
    Focus {
        /// Whether the window now has focus.
        has_focus: bool,
    },
    /// The scroll wheel moved; positive is away from the scene.
    Zoom {
        /// Scroll amount; only its sign matters.
        delta: f64,
    },
}

/// A pointer location, either on screen or already converted into the world.
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
#[non_exhaustive]
pub enum Pointer {
    /// Pixel position in the display, origin at top left.
    Pixel([f64; 2]),
    /// A world-space ray, bypassing the camera.
    Ray {
        /// Start of the ray.
        origin: [f64; 3],
        /// Direction of the ray; need not be normalized.
        direction: [f64; 3],
    },
}

impl Pointer {
    /// Returns the pixel position, if this is one.
    pub fn pixel(self) -> Option<Point2D<f64, NominalPixel>> {
        match self {
            Pointer::Pixel(p) => Some(Point2D::from(p)),
            Pointer::Ray { .. } => None,
        }
    }

    /// Returns the ray, if this is one.
    pub fn ray(self) -> Option<Ray> {
        match self {
            Pointer::Pixel(_) => None,
            Pointer::Ray { origin, direction } => Some(Ray::new(origin, direction)),
        }
    }
}

/// Reads a script file.
pub fn read_script(path: &Path) -> Result<Vec<ScriptEvent>, anyhow::Error> {
    crate::read_json_file("script", path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxsculpt::euclid::point2;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_events() {
        let events: Vec<ScriptEvent> = serde_json::from_str(
            r#"[
                {"event": "pointer_down", "pointer": {"pixel": [400, 300]}},
                {"event": "pointer_move", "pointer": {"ray": {"origin": [5, 30, 5], "direction": [0, -1, 0]}}},
                {"event": "pointer_up"},
                {"event": "key_down", "key": {"character": " "}},
                {"event": "key_up", "key": "shift"},
                {"event": "focus", "has_focus": false},
                {"event": "zoom", "delta": -1}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            events,
            vec![
                ScriptEvent::PointerDown {
                    pointer: Pointer::Pixel([400.0, 300.0])
                },
                ScriptEvent::PointerMove {
                    pointer: Pointer::Ray {
                        origin: [5.0, 30.0, 5.0],
                        direction: [0.0, -1.0, 0.0]
                    }
                },
                ScriptEvent::PointerUp,
                ScriptEvent::KeyDown { key: Key::CAMERA },
                ScriptEvent::KeyUp {
                    key: Key::TRANSLATE
                },
                ScriptEvent::Focus { has_focus: false },
                ScriptEvent::Zoom { delta: -1.0 },
            ]
        );
    }

    #[test]
    fn unknown_event() {
        let error =
            serde_json::from_str::<Vec<ScriptEvent>>(r#"[{"event": "jump"}]"#).unwrap_err();
        assert!(error.to_string().contains("unknown variant `jump`"), "{error}");
    }

    #[test]
    fn pointer_accessors() {
        let pixel = Pointer::Pixel([1.0, 2.0]);
        assert_eq!(pixel.pixel(), Some(point2(1.0, 2.0)));
        assert_eq!(pixel.ray(), None);
        let ray = Pointer::Ray {
            origin: [0.0; 3],
            direction: [1.0, 0.0, 0.0],
        };
        assert_eq!(ray.pixel(), None);
        assert_eq!(ray.ray(), Some(Ray::new([0., 0., 0.], [1., 0., 0.])));
    }
}
