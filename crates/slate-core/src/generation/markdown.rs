//! Markdown formatting routines used by the document assembler

/// Separator between one-of alternatives inside a table cell
pub const ALTERNATIVE_SEPARATOR: &str = "<br />";

/// Column titles of the field table
pub const FIELD_TABLE_HEADER: [&str; 4] = ["Parameter", "Type", "Label", "Comments"];

/// `## text`
pub fn heading(level: usize, text: &str) -> String {
    format!("{} {}", "#".repeat(level), text)
}

/// A `~~~` fenced block whose body is exactly `code`
pub fn code_block(language: &str, code: &str) -> String {
    let mut block = format!("~~~{language}\n{code}");
    if !code.is_empty() && !code.ends_with('\n') {
        block.push('\n');
    }
    block.push_str("~~~");
    block
}

/// Free-form comment text, or `None` when blank
pub fn paragraph(text: &str) -> Option<String> {
    let text = text.trim_start_matches(['\n', '\r']).trim_end();
    (!text.trim().is_empty()).then(|| text.to_string())
}

/// Make text safe for a single table cell
pub fn table_cell(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}

/// `| a | b |`; empty cells collapse to `| |`
pub fn table_row<S: AsRef<str>>(cells: &[S]) -> String {
    let mut row = String::from("|");
    for cell in cells {
        let cell = cell.as_ref();
        if cell.is_empty() {
            row.push_str(" |");
        } else {
            row.push(' ');
            row.push_str(cell);
            row.push_str(" |");
        }
    }
    row
}

/// Header row plus the dashed separator row
pub fn table_header(titles: &[&str]) -> String {
    let separator: Vec<String> = titles.iter().map(|t| "-".repeat(t.len())).collect();
    format!("{}\n{}", table_row(titles), table_row(&separator))
}

/// `- [name](url)`
pub fn link_item(name: &str, url: &str) -> String {
    format!("- [{name}]({url})")
}

/// Join blocks with blank lines and end with a newline
pub fn join_blocks(blocks: &[String]) -> String {
    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}
