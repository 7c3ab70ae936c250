//! Ready-made box arrangements, for [`BoxEditor::load_preset()`].
//!
//! [`BoxEditor::load_preset()`]: crate::editor::BoxEditor::load_preset

use crate::math::Aab;

/// A named, built-in set of boxes, sized to fit the default 40 × 20 × 20 grid.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
#[non_exhaustive]
pub enum Preset {
    /// A single tall column against one end of the grid.
    DamBreak,
    /// A shallow layer covering the floor, with a block suspended above its middle.
    BlockDrop,
    /// Two tall columns at opposite ends of the grid.
    DoubleSplash,
}

impl Preset {
    /// Returns the boxes making up this preset.
    pub fn boxes(self) -> Vec<Aab> {
        match self {
            Preset::DamBreak => vec![Aab::new(0., 15., 0., 20., 0., 20.)],
            Preset::BlockDrop => vec![
                Aab::new(0., 40., 0., 7., 0., 20.),
                Aab::new(12., 28., 12., 20., 5., 15.),
            ],
            Preset::DoubleSplash => vec![
                Aab::new(0., 10., 0., 20., 0., 15.),
                Aab::new(30., 40., 0., 20., 5., 20.),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use strum::IntoEnumIterator as _;

    #[test]
    fn presets_fit_default_grid() {
        let grid = EditorConfig::default().validate().unwrap();
        for preset in Preset::iter() {
            let boxes = preset.boxes();
            assert!(!boxes.is_empty(), "{preset}");
            for aab in boxes {
                assert!(grid.bounds().contains_box(aab), "{preset}: {aab:?}");
                assert!(aab.volume() > 0.0, "{preset}: {aab:?}");
            }
        }
    }

    #[test]
    fn names() {
        assert_eq!(Preset::DamBreak.to_string(), "dam-break");
        assert_eq!("double-splash".parse::<Preset>(), Ok(Preset::DoubleSplash));
        assert!("nonexistent".parse::<Preset>().is_err());
    }
}
