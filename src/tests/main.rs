use clap::Parser;

use passforge::generator::GenerationSettings;

use super::{meter_bar, parse_length, Cli, Command, GenerateArgs};

fn generate_args(args: &[&str]) -> GenerateArgs {
    let mut argv = vec!["passforge", "generate"];
    argv.extend_from_slice(args);

    match Cli::try_parse_from(argv).unwrap().command {
        Some(Command::Generate(args)) => args,
        other => panic!("expected generate, got {other:?}"),
    }
}

#[test]
fn no_subcommand_generates() {
    let cli = Cli::try_parse_from(["passforge"]).unwrap();

    assert!(cli.command.is_none());
}

#[test]
fn flags_override_defaults() {
    let args = generate_args(&["--length", "20", "--symbols", "--no-numbers"]);

    let settings = args.apply(GenerationSettings::default());

    assert_eq!(
        GenerationSettings {
            length: 20,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: false,
            include_symbols: true,
        },
        settings
    );
}

#[test]
fn no_flags_keep_defaults() {
    let args = generate_args(&[]);

    assert_eq!(
        GenerationSettings::default(),
        args.apply(GenerationSettings::default())
    );
}

#[test]
fn last_toggle_wins() {
    let args = generate_args(&["--no-lowercase", "--lowercase"]);

    assert!(args.apply(GenerationSettings::default()).include_lowercase);

    let args = generate_args(&["--symbols", "--no-symbols"]);

    assert!(!args.apply(GenerationSettings::default()).include_symbols);
}

#[test]
fn length_outside_slider_range_is_rejected() {
    assert!(Cli::try_parse_from(["passforge", "generate", "-l", "5"]).is_err());
    assert!(Cli::try_parse_from(["passforge", "generate", "-l", "33"]).is_err());
    assert!(Cli::try_parse_from(["passforge", "generate", "-l", "abc"]).is_err());
}

#[test]
fn parse_length_accepts_range() {
    assert_eq!(Ok(6), parse_length("6"));
    assert_eq!(Ok(32), parse_length("32"));
}

#[test]
fn score_subcommand() {
    let cli = Cli::try_parse_from(["passforge", "score", "hunter2"]).unwrap();

    match cli.command {
        Some(Command::Score { password }) => assert_eq!("hunter2", password),
        other => panic!("expected score, got {other:?}"),
    }
}

#[test]
fn meter_bar_fills_proportionally() {
    assert_eq!("....................", meter_bar(0));
    assert_eq!("##########..........", meter_bar(50));
    assert_eq!("####################", meter_bar(100));
    assert_eq!("###.................", meter_bar(19));
}
