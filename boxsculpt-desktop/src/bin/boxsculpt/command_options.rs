//! Command line option parsing.

use std::path::PathBuf;
use std::str::FromStr;

use clap::builder::{PossibleValue, PossibleValuesParser, TypedValueParser};
use clap::Parser;
use strum::IntoEnumIterator;

use boxsculpt::camera::NominalPixel;
use boxsculpt::euclid::Size2D;
use boxsculpt::presets::Preset;
use boxsculpt_desktop::logging::LoggingArgs;
use boxsculpt_desktop::{BoxSource, ConfigArgs};

#[derive(Clone, Debug, Parser)]
#[command(
    name = crate::TITLE, author, about, version,
    help_template = "\
{name} {version}
{author}
{about-with-newline}
{usage-heading}
    {usage}

{all-args}{after-help}",
)]
pub(crate) struct BoxsculptArgs {
    /// Size of the simulated display that pixel positions in the script refer to.
    #[arg(long = "display-size", value_name = "W×H", default_value = "800x600")]
    pub(crate) display_size: DisplaySizeArg,

    /// Which built-in set of boxes to start with.
    #[arg(
        long = "preset",
        short = 'p',
        value_parser = PossibleValuesParser::new(
            Preset::iter().map(|p| PossibleValue::new(<&str>::from(p))),
        ).map(|string| Preset::from_str(&string).unwrap()),
    )]
    pub(crate) preset: Option<Preset>,

    /// JSON file containing an array of boxes to start with, each written as
    /// {"lower": [x, y, z], "upper": [x, y, z]}.
    #[arg(long = "boxes", value_name = "FILE", conflicts_with = "preset")]
    pub(crate) boxes_file: Option<PathBuf>,

    /// Number of particles to scatter through the boxes and include in the output.
    #[arg(long = "particles", value_name = "COUNT", default_value_t = 0)]
    pub(crate) particles: usize,

    /// Seed value for scattering particles.
    ///
    /// May be an integer between 0 and 18446744073709551615 (2⁶⁴ - 1).
    ///
    /// If not specified, a randomly chosen seed will be used.
    #[arg(long = "seed")]
    pub(crate) seed: Option<u64>,

    #[command(flatten)]
    pub(crate) logging: LoggingArgs,

    #[command(flatten)]
    pub(crate) config: ConfigArgs,

    /// JSON file of input events to replay. If not specified, no events are replayed.
    #[arg(value_name = "SCRIPT")]
    pub(crate) script_file: Option<PathBuf>,
}

impl BoxsculptArgs {
    /// Where the starting boxes come from.
    pub(crate) fn box_source(&self) -> BoxSource {
        match (self.preset, &self.boxes_file) {
            (_, Some(path)) => BoxSource::File(path.clone()),
            (Some(preset), None) => BoxSource::Preset(preset),
            (None, None) => BoxSource::Empty,
        }
    }
}

/// Display size, parseable in a variety of formats.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DisplaySizeArg(pub Size2D<u32, NominalPixel>);

impl FromStr for DisplaySizeArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dims: [u32; 2] = s
            .split(&['×', 'x', ',', ';', ' '][..])
            .map(|s| {
                s.parse::<u32>()
                    .map_err(|_| format!("{s:?} not an integer"))
            })
            .collect::<Result<Vec<u32>, String>>()?
            .try_into()
            .map_err(|_| String::from("must be two integers"))?;
        if dims.contains(&0) {
            return Err(String::from("must not be zero"));
        }
        Ok(DisplaySizeArg(Size2D::from(dims)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> clap::error::Result<BoxsculptArgs> {
        BoxsculptArgs::try_parse_from(std::iter::once("boxsculpt").chain(args.iter().copied()))
    }

    #[test]
    fn box_source_default() {
        assert_eq!(parse(&[]).unwrap().box_source(), BoxSource::Empty);
    }

    #[test]
    fn box_source_preset() {
        assert_eq!(
            parse(&["--preset", "block-drop"]).unwrap().box_source(),
            BoxSource::Preset(Preset::BlockDrop)
        );
    }

    #[test]
    fn box_source_file() {
        assert_eq!(
            parse(&["--boxes", "foo/boxes.json"]).unwrap().box_source(),
            BoxSource::File(PathBuf::from("foo/boxes.json"))
        );
    }

    #[test]
    fn box_source_conflict() {
        assert_eq!(
            parse(&["--preset", "dam-break", "--boxes", "foo.json"])
                .unwrap_err()
                .kind(),
            ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn invalid_preset() {
        assert_eq!(
            parse(&["--preset", "foo"]).unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
    }

    #[test]
    fn display_size_parse() {
        let parse = |s: &str| s.parse::<DisplaySizeArg>().map(|DisplaySizeArg(size)| size);
        let err = |s: &str| Err(s.to_owned());
        assert_eq!(parse("1,2"), Ok(Size2D::new(1, 2)));
        assert_eq!(parse("30x93"), Ok(Size2D::new(30, 93)));
        assert_eq!(parse("30×93"), Ok(Size2D::new(30, 93)));
        assert_eq!(parse(""), err("\"\" not an integer"));
        assert_eq!(parse("1"), err("must be two integers"));
        assert_eq!(parse("a"), err("\"a\" not an integer"));
        assert_eq!(parse("1×1×1"), err("must be two integers"));
        assert_eq!(parse("0x5"), err("must not be zero"));
    }

    #[test]
    fn default_display_size() {
        let DisplaySizeArg(size) = parse(&[]).unwrap().display_size;
        assert_eq!(size, Size2D::new(800, 600));
    }
}
