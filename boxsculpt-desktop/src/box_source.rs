use std::path::PathBuf;

use boxsculpt::math::Aab;
use boxsculpt::presets::Preset;

/// Where the boxes the editor starts with come from.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub enum BoxSource {
    /// Start with no boxes.
    #[default]
    Empty,
    /// Start with a built-in preset.
    Preset(Preset),
    /// Read a JSON array of boxes from the given file.
    File(PathBuf),
}

impl BoxSource {
    /// Produces the boxes, reading the file if there is one.
    pub fn load(self) -> Result<Vec<Aab>, anyhow::Error> {
        let boxes = match self {
            BoxSource::Empty => Vec::new(),
            BoxSource::Preset(preset) => {
                log::debug!("Using preset {preset}");
                preset.boxes()
            }
            BoxSource::File(path) => crate::read_json_file("boxes", &path)?,
        };
        Ok(boxes)
    }
}
