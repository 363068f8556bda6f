// src/parse.rs

/// Parse CSV text into rows of trimmed field strings.
///
/// Lines are split on `\n`. A double-quoted field may span several physical
/// lines and contain raw commas; inside quotes `""` stands for one literal `"`.
/// Each field is trimmed when it is closed.
///
/// Rows whose fields are all empty are dropped, *except* a row still being
/// accumulated when the input runs out (an unterminated quoted field that
/// already had earlier fields closed), which is appended as-is. That
/// asymmetry is kept on purpose: downstream consumers of the generated JSON
/// may rely on either behaviour.
///
/// Never fails. An unbalanced quote swallows the rest of the input into the
/// open field.
pub fn parse(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut current_row: Vec<String> = Vec::new();
    let mut current_field = String::new();
    let mut in_quotes = false;

    for line in text.split('\n') {
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '"' if in_quotes && chars.peek() == Some(&'"') => {
                    current_field.push('"');
                    chars.next();
                }
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => close_field(&mut current_row, &mut current_field),
                _ => current_field.push(c),
            }
        }

        if in_quotes {
            // line break belongs to the quoted field
            current_field.push('\n');
            continue;
        }

        close_field(&mut current_row, &mut current_field);
        let row = std::mem::take(&mut current_row);
        if row.iter().any(|f| !f.is_empty()) {
            rows.push(row);
        }
    }

    if !current_row.is_empty() {
        close_field(&mut current_row, &mut current_field);
        rows.push(current_row);
    }

    rows
}

fn close_field(row: &mut Vec<String>, field: &mut String) {
    row.push(trim_field(field).to_string());
    field.clear();
}

/// Whitespace for trimming purposes, including the U+FEFF byte-order mark
/// that spreadsheet exports put in front of the first header.
pub fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Trim [`is_blank_char`] from both ends.
pub fn trim_field(s: &str) -> &str {
    s.trim_matches(is_blank_char)
}
