//! Output formatting utilities.

use dataid_canonical::str_form;
use dataid_linkage::{GroupRow, GroupTable};

/// Formats a group table as JSON.
pub fn format_json(groups: &GroupTable) -> String {
    serde_json::to_string_pretty(groups).unwrap_or_else(|_| "[]".to_string())
}

/// Formats a group row as a simple table row.
pub fn format_table_row(row: &GroupRow) -> String {
    format!("{:<10} {}", row.group_id, truncate(&str_form(&row.value), 60))
}

/// Prints table header.
pub fn print_table_header() {
    println!("{:<10} {}", GroupTable::COLUMNS[0].to_uppercase(), GroupTable::COLUMNS[1].to_uppercase());
    println!("{}", "-".repeat(72));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataid_canonical::Value;

    #[test]
    fn truncates_long_values() {
        let row = GroupRow {
            group_id: 3,
            value: Value::from("x".repeat(100)),
        };
        let line = format_table_row(&row);
        assert!(line.starts_with("3 "));
        assert!(line.ends_with("..."));
    }
}
