mod args;
mod compose_view;
mod global_settings;
mod relations_view;
mod table_view;
pub mod tables;
mod verify_view;

use crate::{
    args::build_cli,
    compose_view::compose_view,
    global_settings::GlobalSettings,
    relations_view::relations_view,
    table_view::{table_json, table_view},
    verify_view::verify_view,
};
use allen_lib::{CompositionTable, Relation};
use anyhow::{Result, bail};
use clap::ArgMatches;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;

/// Read a relation from a positional argument
fn relation_arg(args: &ArgMatches, name: &str) -> Result<Relation> {
    match args.get_one::<String>(name) {
        None => bail!("missing {}", name),
        Some(code) => Ok(Relation::parse(code)?),
    }
}

fn build_table(multi: &MultiProgress) -> Result<CompositionTable> {
    let progress = multi.add(
        ProgressBar::new(1) //  length is only known once we start
            .with_style(ProgressStyle::with_template(
                "[{pos:3}/{len:3}] {msg} {wide_bar} {elapsed_precise}",
            )?)
            .with_message("composing"),
    );
    let table = CompositionTable::build_with_progress(|current, max| {
        progress.set_length(max);
        progress.set_position(current);
    })?;
    progress.finish_and_clear();
    Ok(table)
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let Some((command, sub)) = matches.subcommand() else {
        bail!("no command given");
    };
    let globals = GlobalSettings::new(sub);

    // Log lines are printed above the progress bars, not through them
    let logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(globals.log_level()),
    )
    .build();
    let level = logger.filter();
    let multi = MultiProgress::new();
    LogWrapper::new(multi.clone(), logger).try_init()?;
    log::set_max_level(level);

    let output = match command {
        "relations" => relations_view(&globals),
        "compose" => compose_view(
            &globals,
            relation_arg(sub, "FIRST")?,
            relation_arg(sub, "SECOND")?,
            sub.get_flag("explain"),
        )?,
        "table" => {
            let table = build_table(&multi)?;
            if sub.get_flag("json") {
                table_json(&table)?
            } else {
                table_view(&globals, &table)
            }
        }
        "verify" => verify_view()?,
        "completions" => {
            if let Some(shell) =
                sub.get_one::<clap_complete_command::Shell>("shell")
            {
                shell.generate(&mut build_cli(), &mut std::io::stdout());
            }
            String::new()
        }
        _ => bail!("unknown command {}", command),
    };
    print!("{}", output);
    Ok(())
}
