//! 하위 명령 파싱과 실행.
use clap::Parser;
use material_reference_toolbox::app::{run, AppError, Cli, Command};
use material_reference_toolbox::config::Config;

#[test]
fn hardness_command_parses_and_runs() {
    let cli = Cli::try_parse_from(["tool", "hardness", "HB", "229", "--json"]).unwrap();
    assert!(cli.json);
    assert!(matches!(cli.command, Command::Hardness { cubic: false, .. }));
    run(&cli, &Config::default()).unwrap();
}

#[test]
fn bad_hardness_reading_is_reported() {
    let cli = Cli::try_parse_from(["tool", "hardness", "HQ", "10"]).unwrap();
    assert!(matches!(
        run(&cli, &Config::default()),
        Err(AppError::Hardness(_))
    ));
}

#[test]
fn material_lookup() {
    let cli = Cli::try_parse_from(["tool", "material", "10х18н9т", "-t", "20", "-t", "650"]).unwrap();
    run(&cli, &Config::default()).unwrap();

    let cli = Cli::try_parse_from(["tool", "material", "unobtainium"]).unwrap();
    assert!(matches!(
        run(&cli, &Config::default()),
        Err(AppError::UnknownMaterial(_))
    ));
}

#[test]
fn young_and_unit_commands() {
    let cli = Cli::try_parse_from(["tool", "young", "--mu", "0.3", "-e", "2.1e11"]).unwrap();
    run(&cli, &Config::default()).unwrap();

    let cli = Cli::try_parse_from(["tool", "unit", "g/cm3", "7.85"]).unwrap();
    run(&cli, &Config::default()).unwrap();

    let cli = Cli::try_parse_from(["tool", "unit", "xyz"]).unwrap();
    assert!(matches!(run(&cli, &Config::default()), Err(AppError::Unit(_))));
}
