//! Plain-text rendering of engine output.

use toolmatrix_core::{CellContent, Matrix, Tool};

const COLUMN_GAP: &str = "  ";
const MAX_CELL_CHARS: usize = 48;

/// Renders `matrix` as an aligned text table.
pub fn render_matrix(matrix: &Matrix) -> String {
    if matrix.row_labels.is_empty() || matrix.column_labels.is_empty() {
        return "(no rows to show for this selection)\n".to_string();
    }

    let mut table: Vec<Vec<String>> = Vec::with_capacity(matrix.row_labels.len() + 1);
    let mut header = vec![String::new()];
    header.extend(matrix.column_labels.iter().cloned());
    table.push(header);
    for (label, cells) in matrix.row_labels.iter().zip(&matrix.cells) {
        let mut row = vec![label.clone()];
        row.extend(cells.iter().map(render_cell));
        table.push(row);
    }

    let widths: Vec<usize> = (0..table[0].len())
        .map(|column| {
            table
                .iter()
                .map(|row| row[column].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in &table {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(text, width)| pad(text, *width))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// One line per tool: name, link and filter values.
pub fn render_tools(tools: &[Tool]) -> String {
    let mut out = String::new();
    for tool in tools {
        out.push_str(&tool.name);
        if !tool.link.is_empty() {
            out.push_str(&format!(" <{}>", tool.link));
        }
        out.push('\n');
        if !tool.tooltip.is_empty() {
            out.push_str(&format!("    {}\n", tool.tooltip));
        }
        for (category, values) in &tool.filter_values {
            out.push_str(&format!("    {category}: {}\n", values.join(", ")));
        }
        if !tool.goals.is_empty() {
            out.push_str(&format!("    goals: {}\n", tool.goals.join(", ")));
        }
    }
    out
}

fn render_cell(cell: &CellContent) -> String {
    let text = match cell {
        CellContent::Text(text) | CellContent::Empty(text) => text.clone(),
        CellContent::Tools(tools) => tools
            .iter()
            .map(|tool| tool.display_name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    };
    truncate(&text, MAX_CELL_CHARS)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{text}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::{render_matrix, truncate};
    use toolmatrix_core::{CellContent, Matrix, ToolRef};

    #[test]
    fn table_aligns_columns_by_char_count() {
        let matrix = Matrix {
            row_labels: vec!["Lizenz: Kostenlos".to_string()],
            column_labels: vec!["Bilder bearbeiten".to_string(), "Übersetzen".to_string()],
            cells: vec![vec![
                CellContent::Empty("-".to_string()),
                CellContent::Tools(vec![ToolRef {
                    display_name: "DeepL".to_string(),
                    link: String::new(),
                    tooltip: String::new(),
                }]),
            ]],
        };

        let text = render_matrix(&matrix);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0].find("Übersetzen").map(|byte| lines[0][..byte].chars().count()),
            lines[1].find("DeepL").map(|byte| lines[1][..byte].chars().count())
        );
    }

    #[test]
    fn empty_matrix_renders_notice() {
        assert!(render_matrix(&Matrix::default()).contains("no rows"));
    }

    #[test]
    fn long_cells_are_truncated() {
        assert_eq!(truncate("abcdefgh", 6), "abc...");
        assert_eq!(truncate("abc", 6), "abc");
    }
}
