//! Column-aligned table rendering.

use crate::terminal::{TermError, Terminal};

const GUTTER: usize = 2;

/// A table over a slice of items, one row per item.
///
/// Columns are `(header, accessor)` pairs; each column's width is the
/// maximum of its header length and every stringified cell length, and
/// every cell (headers included) is padded to that width plus a two-space
/// gutter. Output is the header row, a separator row of dashes, then the
/// item rows.
///
/// # Examples
///
/// ```rust
/// use termflow::render::Table;
///
/// struct User {
///     name: &'static str,
///     role: &'static str,
/// }
///
/// let users = [
///     User { name: "Alice", role: "Admin" },
///     User { name: "Bob", role: "User" },
/// ];
///
/// let rendered = Table::new()
///     .column("Name", |user: &User| user.name.to_string())
///     .column("Role", |user: &User| user.role.to_string())
///     .render(&users);
/// assert!(rendered.starts_with("Name   Role"));
/// ```
pub struct Table<'a, T> {
    columns: Vec<Column<'a, T>>,
}

struct Column<'a, T> {
    header: String,
    accessor: Box<dyn Fn(&T) -> String + 'a>,
}

impl<T> Default for Table<'_, T> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
        }
    }
}

impl<'a, T> Table<'a, T> {
    /// Creates a table with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column with `header` and a cell accessor.
    #[must_use]
    pub fn column<F>(mut self, header: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> String + 'a,
    {
        self.columns.push(Column {
            header: header.into(),
            accessor: Box::new(accessor),
        });
        self
    }

    /// Renders the table for `items` as a newline-terminated string.
    pub fn render(&self, items: &[T]) -> String {
        let cells: Vec<Vec<String>> = items
            .iter()
            .map(|item| {
                self.columns
                    .iter()
                    .map(|column| (column.accessor)(item))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let widest_cell = cells
                    .iter()
                    .map(|row| row[index].chars().count())
                    .max()
                    .unwrap_or(0);
                column.header.chars().count().max(widest_cell)
            })
            .collect();

        let mut output = String::new();
        for (column, width) in self.columns.iter().zip(&widths) {
            push_padded(&mut output, &column.header, width + GUTTER);
        }
        output.push('\n');
        for width in &widths {
            output.push_str(&"-".repeat(width + GUTTER));
        }
        output.push('\n');
        for row in &cells {
            for (cell, width) in row.iter().zip(&widths) {
                push_padded(&mut output, cell, width + GUTTER);
            }
            output.push('\n');
        }
        output
    }

    /// Renders the table and writes it through `terminal`.
    pub fn write_to<C: Terminal>(&self, terminal: &mut C, items: &[T]) -> Result<(), TermError> {
        terminal.write(&self.render(items))
    }
}

fn push_padded(output: &mut String, text: &str, width: usize) {
    output.push_str(text);
    for _ in text.chars().count()..width {
        output.push(' ');
    }
}
