//! Binary for the Box Sculpt command-line driver.

// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![forbid(unsafe_code)]

use std::io::Write as _;
use std::time::Instant;

use anyhow::Context as _;
use clap::Parser as _;
use rand::SeedableRng as _;

use boxsculpt::camera::Viewport;
use boxsculpt::editor::BoxEditor;
use boxsculpt_desktop::{ScriptSession, logging, script};

mod command_options;
use command_options::{BoxsculptArgs, DisplaySizeArg};

static TITLE: &str = "Box Sculpt";

fn main() -> Result<(), anyhow::Error> {
    // Parse and transform command-line arguments.
    let options = BoxsculptArgs::parse();
    let box_source = options.box_source();
    // Destructure as a check that we're using/skipping all the args
    let BoxsculptArgs {
        display_size: DisplaySizeArg(display_size),
        preset: _,     // used in box_source
        boxes_file: _, // used in box_source
        particles,
        seed,
        logging: logging_args,
        config: config_args,
        script_file,
    } = options;

    logging::install(&logging_args)?;

    // After setting up logging, do other option interpretation steps.

    let config = config_args.build_config()?;
    let boxes = box_source.load()?;
    let events = match script_file {
        Some(path) => script::read_script(&path)?,
        None => Vec::new(),
    };

    let start_time = Instant::now();
    let mut editor = BoxEditor::new(config).context("invalid editor settings")?;
    editor.load_preset(boxes);
    let viewport = Viewport::with_size(display_size.width.into(), display_size.height.into());
    let mut session = ScriptSession::new(editor, viewport);
    session.run(events);
    log::debug!(
        "Finished replaying ({:.3} s)",
        Instant::now().duration_since(start_time).as_secs_f32()
    );

    let seed: u64 = seed.unwrap_or_else(|| {
        let seed = rand::random();
        log::info!("Randomly chosen particle seed: {seed}");
        seed
    });
    let mut rng = rand_xoshiro::Xoshiro256Plus::seed_from_u64(seed);
    let summary = session.summary(particles, &mut rng);

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &summary).context("failed to write output")?;
    writeln!(stdout).context("failed to write output")?;

    Ok(())
}
