//! Tests for CLI argument parsing.

use std::path::PathBuf;

use super::cli::{Cli, Command, EventTypeArg, ImpactLevelArg};
use crate::notifier::{EventType, ImpactLevel};

fn parse(args: &[&str]) -> Cli {
    let mut full_args = vec!["mail-notifier"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

fn try_parse(args: &[&str]) -> Result<Cli, clap::Error> {
    let mut full_args = vec!["mail-notifier"];
    full_args.extend(args);
    Cli::try_parse_from_iter(full_args)
}

mod send_command {
    use super::*;

    #[test]
    fn minimal_send_defaults_to_info() {
        let cli = parse(&["send", "--subject", "S", "--content", "C"]);

        let Command::Send(args) = cli.command else {
            panic!("Expected send command");
        };
        assert_eq!(args.subject, "S");
        assert_eq!(args.content, "C");
        assert_eq!(args.kind, EventTypeArg::Info);
        assert!(args.to.is_empty());
        assert!(args.impact.is_none());
    }

    #[test]
    fn short_flags_are_accepted() {
        let cli = parse(&["send", "-s", "S", "-m", "C", "-k", "error"]);

        let Command::Send(args) = cli.command else {
            panic!("Expected send command");
        };
        assert_eq!(args.kind, EventTypeArg::Error);
    }

    #[test]
    fn repeated_flags_collect_in_order() {
        let cli = parse(&[
            "send",
            "-s",
            "S",
            "-m",
            "C",
            "--to",
            "a@example.com",
            "--to",
            "b@example.com",
            "--meta",
            "build=12",
            "--attach",
            "report.txt",
        ]);

        let Command::Send(args) = cli.command else {
            panic!("Expected send command");
        };
        assert_eq!(args.to, vec!["a@example.com", "b@example.com"]);
        assert_eq!(args.meta, vec!["build=12"]);
        assert_eq!(args.attach, vec![PathBuf::from("report.txt")]);
    }

    #[test]
    fn missing_subject_is_rejected() {
        assert!(try_parse(&["send", "--content", "C"]).is_err());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(try_parse(&["send", "-s", "S", "-m", "C", "--kind", "debug"]).is_err());
    }
}

mod global_options {
    use super::*;

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = parse(&[
            "status",
            "--base-url",
            "http://localhost:3000",
            "--api-key",
            "k",
            "-v",
        ]);

        assert!(matches!(cli.command, Command::Status));
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(cli.api_key.as_deref(), Some("k"));
        assert!(cli.verbose);
    }

    #[test]
    fn config_path_is_parsed() {
        let cli = parse(&["-c", "/etc/mail-notifier.toml", "status"]);

        assert_eq!(cli.config, Some(PathBuf::from("/etc/mail-notifier.toml")));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(try_parse(&[]).is_err());
    }
}

mod init_command {
    use super::*;

    #[test]
    fn init_uses_default_output() {
        let cli = parse(&["init"]);

        let Command::Init { output } = cli.command else {
            panic!("Expected init command");
        };
        assert_eq!(output, PathBuf::from("mail-notifier.toml"));
    }

    #[test]
    fn init_accepts_custom_output() {
        let cli = parse(&["init", "-o", "custom.toml"]);

        let Command::Init { output } = cli.command else {
            panic!("Expected init command");
        };
        assert_eq!(output, PathBuf::from("custom.toml"));
    }
}

mod value_enums {
    use super::*;

    #[test]
    fn event_type_arg_converts() {
        assert_eq!(EventType::from(EventTypeArg::Info), EventType::Info);
        assert_eq!(EventType::from(EventTypeArg::Error), EventType::Error);
        assert_eq!(EventType::from(EventTypeArg::Warning), EventType::Warning);
        assert_eq!(EventType::from(EventTypeArg::Success), EventType::Success);
    }

    #[test]
    fn impact_level_arg_converts() {
        assert_eq!(
            ImpactLevel::from(ImpactLevelArg::Critical),
            ImpactLevel::Critical
        );
        assert_eq!(ImpactLevel::from(ImpactLevelArg::Low), ImpactLevel::Low);
    }
}
