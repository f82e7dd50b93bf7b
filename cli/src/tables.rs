#[derive(Clone, Copy)]
pub enum Align {
    Left,
    Center,
}

pub struct Column<'a, TRow, TCol> {
    align: Align,
    title: Option<String>,
    data: TCol,
    get_content: &'a dyn Fn(&TRow, &TCol) -> String,

    computed_width: usize,
}
impl<'a, TRow, TCol> Column<'a, TRow, TCol> {
    pub fn new(
        data: TCol,
        get_content: &'a dyn Fn(&TRow, &TCol) -> String,
    ) -> Self {
        Self {
            align: Align::Left,
            title: None,
            computed_width: 0,
            data,
            get_content,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    fn content(&self, row: &TRow) -> String {
        (self.get_content)(row, &self.data)
    }
}

#[derive(Debug)]
enum RowData {
    Separator,
    Cells(Vec<String>),
    Headers,
}

#[derive(Clone)]
pub struct Settings {
    pub colsep: String,
}
impl Default for Settings {
    fn default() -> Self {
        Settings {
            colsep: "│".to_string(),
        }
    }
}

/// A table of text.  Cells are never truncated: the composition of two
/// relations must be shown in full, so a table wider than the terminal
/// simply wraps.
pub struct Table<'a, TRow, TCol> {
    columns: Vec<Column<'a, TRow, TCol>>,
    rows: Vec<RowData>,
    title: Option<String>,
    settings: Settings,
}
impl<'a, TRow, TCol> Table<'a, TRow, TCol> {
    pub fn new(
        columns: Vec<Column<'a, TRow, TCol>>,
        settings: &Settings,
    ) -> Self {
        Self {
            rows: Vec::new(),
            columns,
            title: None,
            settings: settings.clone(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_col_headers(mut self) -> Self {
        self.rows.push(RowData::Headers);
        self.rows.push(RowData::Separator);
        self
    }

    pub fn add_rows(&mut self, rows: &[TRow]) {
        self.rows.extend(rows.iter().map(|row| {
            RowData::Cells(
                self.columns.iter().map(|col| col.content(row)).collect(),
            )
        }));
    }

    /// Compute the size allocated for each column: the width of its
    /// widest cell
    fn compute_widths(&mut self) {
        for (colidx, col) in self.columns.iter_mut().enumerate() {
            col.computed_width = self
                .rows
                .iter()
                .map(|row| match row {
                    RowData::Separator => 0,
                    RowData::Headers => {
                        col.title.as_ref().map_or(0, |t| t.chars().count())
                    }
                    RowData::Cells(cells) => {
                        cells.get(colidx).map_or(0, |c| c.chars().count())
                    }
                })
                .max()
                .unwrap_or(0);
        }
    }

    fn total_width(&self) -> usize {
        self.columns.iter().map(|c| c.computed_width).sum::<usize>()
            + self.columns.len().saturating_sub(1)
                * self.settings.colsep.chars().count()
    }

    /// Render the table.  The title is centered within `max_width`, or the
    /// width of the table if that is smaller.
    pub fn to_string(&mut self, max_width: usize) -> String {
        self.compute_widths();
        let mut result = String::new();

        if let Some(title) = &self.title {
            let width = std::cmp::min(max_width, self.total_width());
            push_sep(&mut result, width);
            result.push('\n');
            push_align(&mut result, title, width, Align::Center);
            result.push('\n');
            push_sep(&mut result, width);
            result.push('\n');
        }

        for row in &self.rows {
            for (colidx, col) in self.columns.iter().enumerate() {
                match row {
                    RowData::Separator => {
                        push_sep(&mut result, col.computed_width);
                    }
                    RowData::Headers => {
                        push_align(
                            &mut result,
                            col.title.as_deref().unwrap_or(""),
                            col.computed_width,
                            Align::Center,
                        );
                    }
                    RowData::Cells(cells) => {
                        push_align(
                            &mut result,
                            cells.get(colidx).map_or("", |c| c.as_str()),
                            col.computed_width,
                            col.align,
                        );
                    }
                }

                if colidx + 1 < self.columns.len() {
                    match row {
                        RowData::Separator => result.push('┼'),
                        RowData::Headers | RowData::Cells(_) => {
                            result.push_str(&self.settings.colsep)
                        }
                    }
                }
            }
            result.push('\n');
        }

        result
    }
}

fn push_sep(into: &mut String, width: usize) {
    into.push_str(&format!("{:─^width$}", "", width = width));
}
fn push_align(into: &mut String, value: &str, width: usize, align: Align) {
    match align {
        Align::Left => into.push_str(&format!("{:<width$}", value)),
        Align::Center => into.push_str(&format!("{:^width$}", value)),
    }
}

#[cfg(test)]
mod test {
    use crate::tables::{Align, Column, Settings, Table};

    #[test]
    fn test_table() {
        let image = |row: &[&str; 2], idx: &usize| {
            row.get(*idx).map_or(String::new(), |s| s.to_string())
        };

        let columns = vec![
            Column::new(0, &image).with_title("Code"),
            Column::new(1, &image)
                .with_title("Set")
                .with_align(Align::Center),
        ];
        let mut table =
            Table::new(columns, &Settings::default()).with_col_headers();
        table.add_rows(&[["p", "pmosd"], ["oi", "P"]]);

        assert_eq!(
            table.to_string(80),
            "Code│ Set \n\
             ────┼─────\n\
             p   │pmosd\n\
             oi  │  P  \n"
        );
    }

    #[test]
    fn test_title() {
        let image = |row: &&str, _idx: &()| row.to_string();
        let columns = vec![Column::new((), &image)];
        let mut table = Table::new(
            columns,
            &Settings {
                colsep: "|".to_string(),
            },
        )
        .with_title("ab");
        table.add_rows(&["wxyz"]);
        assert_eq!(table.to_string(80), "────\n ab \n────\nwxyz\n");

        // Title is narrowed to the screen
        assert_eq!(table.to_string(2), "──\nab\n──\nwxyz\n");
    }
}
