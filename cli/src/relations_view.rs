use crate::{
    global_settings::GlobalSettings,
    tables::{Column, Table},
};
use allen_lib::{Relation, codec::encode, endpoints::IntervalId};
use console::Term;

pub fn relations_view(globals: &GlobalSettings) -> String {
    let code_image = |rel: &Relation, _idx: &usize| rel.code().to_string();
    let name_image = |rel: &Relation, _idx: &usize| rel.name().to_string();
    let legacy_image =
        |rel: &Relation, _idx: &usize| rel.legacy_code().to_string();
    let inverse_image =
        |rel: &Relation, _idx: &usize| globals.relation(rel.inverse());
    let timeline_image = |rel: &Relation, _idx: &usize| {
        encode(IntervalId(0), IntervalId(1), *rel).to_string()
    };

    let columns = vec![
        Column::new(0, &code_image).with_title("Code"),
        Column::new(0, &name_image).with_title("Name"),
        Column::new(0, &legacy_image).with_title("Allen"),
        Column::new(0, &inverse_image).with_title("Inverse"),
        Column::new(0, &timeline_image).with_title("0 rel 1"),
    ];
    let mut table = Table::new(columns, &globals.table)
        .with_title("Allen relations")
        .with_col_headers();
    table.add_rows(&Relation::ALL);
    table.to_string(Term::stdout().size().1 as usize)
}
