use crate::{
    global_settings::GlobalSettings,
    tables::{Align, Column, Table},
};
use allen_lib::{CompositionTable, Relation};
use anyhow::Result;
use console::Term;

/// Display the table as a grid: the first relation on each row, the second
/// one on each column.
pub fn table_view(
    globals: &GlobalSettings,
    compositions: &CompositionTable,
) -> String {
    let row_image = |first: &Relation, _col: &Option<Relation>| {
        globals.relation(*first)
    };
    let cell_image = |first: &Relation, second: &Option<Relation>| {
        second.map_or(String::new(), |second| {
            globals.relation_set(&compositions.get(*first, second))
        })
    };

    let mut columns = vec![Column::new(None, &row_image).with_title("∘")];
    columns.extend(Relation::ALL.into_iter().map(|second| {
        Column::new(Some(second), &cell_image)
            .with_title(&globals.relation(second))
            .with_align(Align::Center)
    }));

    let mut table = Table::new(columns, &globals.table)
        .with_title(&format!(
            "Composition table ({} relations)",
            compositions.total_size()
        ))
        .with_col_headers();
    table.add_rows(&Relation::ALL);
    table.to_string(Term::stdout().size().1 as usize)
}

pub fn table_json(compositions: &CompositionTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(compositions)?)
}

#[cfg(test)]
mod test {
    use crate::global_settings::GlobalSettings;
    use crate::table_view::{table_json, table_view};
    use crate::tables::Settings;
    use allen_lib::CompositionTable;

    #[test]
    fn test_grid() {
        let globals = GlobalSettings {
            names: false,
            table: Settings {
                colsep: "|".to_string(),
            },
            verbosity: 0,
        };
        let table = CompositionTable::build().unwrap();
        let out = table_view(&globals, &table);
        let lines: Vec<&str> = out.lines().collect();

        // title (3 lines), headers, separator, then one line per relation
        assert_eq!(lines.len(), 3 + 2 + 13);
        assert!(lines.iter().any(|l| l.contains("409 relations")));
        assert!(lines.iter().any(|l| l.starts_with("∘|")));
        let e_row = lines.iter().find(|l| l.starts_with("e|")).unwrap();
        assert_eq!(
            e_row.split('|').map(str::trim).collect::<Vec<_>>(),
            ["e", "p", "m", "o", "F", "D", "s", "e", "S", "d", "f", "O", "M", "P"]
        );
    }

    #[test]
    fn test_json() {
        let table = CompositionTable::build().unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&table_json(&table).unwrap()).unwrap();
        assert_eq!(json["d,D"], "pmoFDseSdfOMP");
        assert_eq!(json["s,S"], "seS");
    }
}
