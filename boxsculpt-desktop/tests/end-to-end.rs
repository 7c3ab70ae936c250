use pretty_assertions::assert_eq;
use snapbox::cmd::{Command, cargo_bin};

#[test]
fn trycmd_tests() {
    let tc = trycmd::TestCases::new();
    tc.case("tests/end-to-end/*.toml");
    tc.run();
}

/// Particle positions are random, so rather than a snapshot, check that they land
/// in the boxes and that the same seed reproduces them.
#[test]
fn seeded_particles() {
    let run = || {
        let assert = Command::new(cargo_bin!("boxsculpt"))
            .current_dir("tests/end-to-end/config-file.in")
            .args([
                "--simplify-log-format",
                "--config",
                "config.json",
                "--boxes",
                "boxes.json",
                "--particles",
                "5",
                "--seed",
                "1234",
            ])
            .assert()
            .success();
        serde_json::from_slice::<serde_json::Value>(&assert.get_output().stdout).unwrap()
    };

    let summary = run();
    let particles = summary["particles"].as_array().unwrap();
    assert_eq!(particles.len(), 5);
    for particle in particles {
        for coordinate in particle.as_array().unwrap() {
            let c = coordinate.as_f64().unwrap();
            assert!((0.0..=2.0).contains(&c), "{particle}");
        }
    }

    assert_eq!(run(), summary);
}
