use crate::global_settings::GlobalSettings;
use clap::{Arg, Command, arg};

pub(crate) fn build_cli() -> Command {
    Command::new("allen")
        .version("0.1")
        .about("Compose relations of Allen's interval algebra")
        .subcommand_required(true)
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .subcommand(
            Command::new("relations")
                .about("List the thirteen relations and their timelines"),
        )
        .subcommand(
            Command::new("compose")
                .about("Compose two relations: X FIRST Y and Y SECOND Z")
                .arg(arg!(<FIRST> "Relation between X and Y (e.g. p, di, overlaps)"))
                .arg(arg!(<SECOND> "Relation between Y and Z"))
                .arg(arg!(--explain "Show every superposition considered")),
        )
        .subcommand(
            Command::new("table")
                .about("Show the composition of every pair of relations")
                .arg(arg!(--json "Output the table as JSON")),
        )
        .subcommand(
            Command::new("verify")
                .about("Check the algebraic properties of the composition table"),
        )
        .subcommand(
            // Use    eval "$(allen completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}

#[cfg(test)]
mod test {
    use crate::args::build_cli;

    #[test]
    fn test_cli() {
        build_cli().debug_assert();

        let m = build_cli()
            .try_get_matches_from(["allen", "-vv", "compose", "o", "di", "--explain"])
            .unwrap();
        assert_eq!(m.get_count("verbose"), 2);
        let (name, sub) = m.subcommand().unwrap();
        assert_eq!(name, "compose");
        assert_eq!(sub.get_one::<String>("FIRST").map(String::as_str), Some("o"));
        assert_eq!(sub.get_one::<String>("SECOND").map(String::as_str), Some("di"));
        assert!(sub.get_flag("explain"));

        assert!(build_cli().try_get_matches_from(["allen", "compose", "o"]).is_err());
    }
}
