//! Keyboard input, in a platform-neutral form.

use std::collections::HashSet;

/// A platform-neutral representation of keyboard keys for [`BoxEditor`].
///
/// [`BoxEditor`]: crate::editor::BoxEditor
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Key {
    /// Letters should be lowercase. The space bar is `Character(' ')`.
    Character(char),
    /// Either shift key.
    Shift,
    /// Escape key.
    Escape,
}

impl Key {
    /// The key which, while held, hands the pointer to the camera.
    pub const CAMERA: Key = Key::Character(' ');
    /// The key which, while held, makes grabbing a box move it instead of resizing it.
    pub const TRANSLATE: Key = Key::Shift;
    /// The key which abandons the current interaction.
    pub const CANCEL: Key = Key::Escape;
}

/// The set of keys currently held, as far as the editor knows.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct HeldKeys {
    keys: HashSet<Key>,
}

impl HeldKeys {
    /// Returns whether the key was not already held.
    pub fn press(&mut self, key: Key) -> bool {
        self.keys.insert(key)
    }

    /// Returns whether the key was held.
    pub fn release(&mut self, key: Key) -> bool {
        self.keys.remove(&key)
    }

    /// Forget all held keys, because key-up events may not arrive.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        let mut keys = HeldKeys::default();
        assert!(keys.press(Key::Shift));
        assert!(!keys.press(Key::Shift));
        assert!(keys.is_held(Key::TRANSLATE));
        assert!(keys.release(Key::Shift));
        assert!(!keys.release(Key::Shift));
        assert!(!keys.is_held(Key::Shift));
    }

    #[test]
    fn key_json() {
        assert_eq!(
            serde_json::from_str::<Key>(r#"{"character": " "}"#).unwrap(),
            Key::CAMERA
        );
        assert_eq!(serde_json::from_str::<Key>(r#""shift""#).unwrap(), Key::Shift);
        assert_eq!(serde_json::to_string(&Key::Escape).unwrap(), r#""escape""#);
    }
}
