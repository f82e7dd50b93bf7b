use crate::{
    global_settings::GlobalSettings,
    tables::{Column, Table},
};
use allen_lib::{
    Relation, RelationSet, compose,
    composition::{Step, compose_traced},
};
use anyhow::Result;
use console::Term;

pub fn compose_view(
    globals: &GlobalSettings,
    first: Relation,
    second: Relation,
    explain: bool,
) -> Result<String> {
    let summary = |set: &RelationSet| {
        format!(
            "{} ∘ {} = {}",
            globals.relation(first),
            globals.relation(second),
            globals.relation_set(set),
        )
    };

    if !explain {
        return Ok(format!("{}\n", summary(&compose(first, second)?)));
    }

    let trace = compose_traced(first, second)?;

    let merged_image = |step: &Step, _idx: &usize| step.merged.to_string();
    let projected_image =
        |step: &Step, _idx: &usize| step.projected.to_string();
    let outcome_image = |step: &Step, _idx: &usize| match step.outcome.relation() {
        Some(rel) => globals.relation(rel),
        None => "?".to_string(),
    };
    let columns = vec![
        Column::new(0, &merged_image).with_title("Superposition"),
        Column::new(0, &projected_image).with_title("Projection on 0, 2"),
        Column::new(0, &outcome_image).with_title("0 rel 2"),
    ];
    let mut table = Table::new(columns, &globals.table).with_col_headers();
    table.add_rows(&trace.steps);

    let mut output = format!(
        "{}  (0 {} 1)\n{}  (1 {} 2)\n\n",
        trace.first_timeline,
        globals.relation(first),
        trace.second_timeline,
        globals.relation(second),
    );
    output.push_str(&table.to_string(Term::stdout().size().1 as usize));
    output.push('\n');
    if trace.unknown > 0 {
        output.push_str(&format!(
            "{} superpositions had no relation\n",
            trace.unknown
        ));
    }
    output.push_str(&summary(&trace.result));
    output.push('\n');
    Ok(output)
}
