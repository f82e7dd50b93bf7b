use allen_lib::{Relation, RelationSet};
use clap::{Arg, ArgMatches, arg};
use itertools::Itertools;

pub struct GlobalSettings {
    // Show relation names rather than their one-letter code
    pub names: bool,

    pub table: crate::tables::Settings,

    // Number of --verbose switches
    pub verbosity: u8,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(--names "Show relation names instead of their codes")
                .global(true),
            arg!(--colsep [SEP] "Separator between table columns")
                .default_value("│")
                .global(true),
            arg!(-v --verbose ... "More logging, repeat for more details")
                .global(true),
        ]
    }

    /// Create the settings from the command line arguments.
    pub fn new(args: &ArgMatches) -> Self {
        GlobalSettings {
            names: args.get_flag("names"),
            verbosity: args.get_count("verbose"),
            table: crate::tables::Settings {
                colsep: args
                    .get_one::<String>("colsep")
                    .cloned()
                    .unwrap_or_else(|| "│".to_string()),
            },
        }
    }

    /// Default log level, unless overridden by RUST_LOG
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn relation(&self, rel: Relation) -> String {
        if self.names {
            rel.name().to_string()
        } else {
            rel.code().to_string()
        }
    }

    pub fn relation_set(&self, set: &RelationSet) -> String {
        if self.names {
            set.iter().map(Relation::name).join(", ")
        } else if set.is_full() {
            "full".to_string()
        } else {
            set.codes()
        }
    }
}

#[cfg(test)]
mod test {
    use crate::args::build_cli;
    use crate::global_settings::GlobalSettings;
    use allen_lib::{Relation, RelationSet};

    #[test]
    fn test_settings() {
        let m = build_cli()
            .try_get_matches_from(["allen", "table", "--names", "--colsep", "|"])
            .unwrap();
        let (_, sub) = m.subcommand().unwrap();
        let globals = GlobalSettings::new(sub);
        assert!(globals.names);
        assert_eq!(globals.table.colsep, "|");
        assert_eq!(globals.log_level(), "warn");
        assert_eq!(globals.relation(Relation::MetBy), "Met-by");
        assert_eq!(
            globals.relation_set(&RelationSet::full()),
            Relation::ALL.map(Relation::name).join(", ")
        );

        let m = build_cli()
            .try_get_matches_from(["allen", "-vvv", "relations"])
            .unwrap();
        let (_, sub) = m.subcommand().unwrap();
        let globals = GlobalSettings::new(sub);
        assert!(!globals.names);
        assert_eq!(globals.table.colsep, "│");
        assert_eq!(globals.log_level(), "trace");
        assert_eq!(globals.relation(Relation::MetBy), "M");
        assert_eq!(globals.relation_set(&RelationSet::full()), "full");
        assert_eq!(
            globals.relation_set(&RelationSet::parse_codes("DSO").unwrap()),
            "DSO"
        );
    }
}
