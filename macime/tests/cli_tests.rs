use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use macime::Cli;
use macime_core::{Command, OutputFormat, View};
use pretty_assertions::assert_eq;

fn parse(args: &[&str]) -> Command {
    let mut argv = vec!["macime"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("arguments should parse").into_command()
}

fn parse_err(args: &[&str]) -> clap::Error {
    let mut argv = vec!["macime"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect_err("arguments should be rejected")
}

#[test]
fn test_command_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_get_variants() {
    assert_eq!(parse(&["get"]), Command::Get { view: View::Id, format: OutputFormat::Text });
    assert_eq!(
        parse(&["get", "--detail", "--json"]),
        Command::Get { view: View::Detail, format: OutputFormat::Json }
    );
    assert_eq!(parse(&["get", "--name"]), Command::Get { view: View::Name, format: OutputFormat::Text });
}

#[test]
fn test_detail_and_name_conflict() {
    assert_eq!(parse_err(&["get", "--detail", "--name"]).kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn test_set_variants() {
    assert_eq!(
        parse(&["set", "com.apple.keylayout.ABC"]),
        Command::Set { id: "com.apple.keylayout.ABC".to_string(), save: false, session_id: None }
    );
    assert_eq!(
        parse(&["set", "com.apple.keylayout.ABC", "--save", "--session-id", "nvim"]),
        Command::Set {
            id: "com.apple.keylayout.ABC".to_string(),
            save: true,
            session_id: Some("nvim".to_string()),
        }
    );
}

#[test]
fn test_set_requires_id() {
    let err = parse_err(&["set"]);
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    assert!(err.use_stderr());
}

#[test]
fn test_load_variants() {
    assert_eq!(parse(&["load"]), Command::Load { session_id: None });
    assert_eq!(
        parse(&["load", "--session-id", "foo"]),
        Command::Load { session_id: Some("foo".to_string()) }
    );
}

#[test]
fn test_session_id_must_be_a_plain_name() {
    assert_eq!(parse_err(&["load", "--session-id", "../etc"]).kind(), ErrorKind::ValueValidation);
    assert_eq!(parse_err(&["load", "--session-id", ""]).kind(), ErrorKind::ValueValidation);
}

#[test]
fn test_list_variants() {
    assert_eq!(
        parse(&["list", "--select-capable", "--json"]),
        Command::List { view: View::Id, format: OutputFormat::Json, select_capable: true }
    );
    assert_eq!(
        parse(&["list", "--detail"]),
        Command::List { view: View::Detail, format: OutputFormat::Text, select_capable: false }
    );
}

#[test]
fn test_toggle_splits_comma_separated_ids() {
    assert_eq!(
        parse(&["toggle", "com.apple.A,com.apple.B", "--save"]),
        Command::Toggle {
            ids: vec!["com.apple.A".to_string(), "com.apple.B".to_string()],
            save: true,
            session_id: None,
            format: OutputFormat::Text,
        }
    );
}

#[test]
fn test_version_flags() {
    for flag in ["-v", "--version"] {
        let err = parse_err(&[flag]);
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(!err.use_stderr());
        assert!(err.to_string().starts_with("macime "));
    }
}

#[test]
fn test_help_flags() {
    for flag in ["-h", "--help"] {
        let err = parse_err(&[flag]);
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
    }
}

#[test]
fn test_unknown_subcommand_and_option_are_errors() {
    assert!(parse_err(&["switch"]).use_stderr());
    assert!(parse_err(&["get", "--bogus"]).use_stderr());
}

#[test]
fn test_json_flag_selects_error_format() {
    assert_eq!(parse(&["get", "--json"]).format(), OutputFormat::Json);
    assert_eq!(parse(&["set", "x"]).format(), OutputFormat::Text);
}

#[test]
fn test_toggle_drops_empty_ids() {
    let expected = |ids: &[&str]| Command::Toggle {
        ids: ids.iter().map(|id| id.to_string()).collect(),
        save: false,
        session_id: None,
        format: OutputFormat::Text,
    };

    assert_eq!(parse(&["toggle", "com.apple.A,"]), expected(&["com.apple.A"]));
    assert_eq!(
        parse(&["toggle", "com.apple.A,,com.apple.B"]),
        expected(&["com.apple.A", "com.apple.B"])
    );
}

#[cfg(not(target_os = "macos"))]
#[test]
fn test_failure_exits_one_with_error_on_stderr() {
    let cli = Cli::try_parse_from(["macime", "get"]).unwrap();
    let (mut out, mut err) = (Vec::new(), Vec::new());

    assert_eq!(macime::run_with(cli, &mut out, &mut err), 1);
    assert!(out.is_empty());
    assert_eq!(
        String::from_utf8(err).unwrap(),
        format!("Unsupported platform: {}\n", std::env::consts::OS)
    );
}

#[cfg(not(target_os = "macos"))]
#[test]
fn test_failure_in_json_mode_writes_error_object() {
    let cli = Cli::try_parse_from(["macime", "list", "--json"]).unwrap();
    let (mut out, mut err) = (Vec::new(), Vec::new());

    assert_eq!(macime::run_with(cli, &mut out, &mut err), 1);
    assert!(out.is_empty());
    assert_eq!(
        String::from_utf8(err).unwrap(),
        format!("{{\"error\":\"Unsupported platform: {}\"}}\n", std::env::consts::OS)
    );
}
