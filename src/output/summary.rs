//! Plain-text table of ranked entries for the terminal.

use crate::parser::AggregatedEntry;

const NAME_WIDTH: usize = 40;

/// Render the top `max_lines` entries as a table
pub fn format_summary(entries: &[AggregatedEntry], max_lines: usize) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  {:>4}  {:<width$}  {:>8}", "#", "NAME", "VALUE", width = NAME_WIDTH));
    lines.push(format!("  {}", "-".repeat(NAME_WIDTH + 16)));

    for (rank, entry) in entries.iter().take(max_lines).enumerate() {
        lines.push(format!(
            "  {:>4}  {:<width$}  {:>8}",
            rank + 1,
            shorten(&entry.name, NAME_WIDTH),
            entry.value,
            width = NAME_WIDTH
        ));
    }

    if entries.len() > max_lines {
        lines.push(format!("  ... {} more", entries.len() - max_lines));
    }
    if entries.is_empty() {
        lines.push("  (no entries above threshold)".to_string());
    }

    lines.join("\n")
}

fn shorten(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        return name.to_string();
    }
    let kept: String = name.chars().take(max_chars - 3).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_ranked_entries() {
        let entries = vec![AggregatedEntry::new("ai", 9), AggregatedEntry::new("cloud", 3)];
        let summary = format_summary(&entries, 10);

        assert!(summary.contains("ai"));
        assert!(summary.contains("cloud"));
        assert!(!summary.contains("more"));
    }

    #[test]
    fn test_summary_truncates() {
        let entries = vec![
            AggregatedEntry::new("a", 5),
            AggregatedEntry::new("b", 4),
            AggregatedEntry::new("c", 3),
        ];
        assert!(format_summary(&entries, 2).contains("... 1 more"));
    }

    #[test]
    fn test_shorten_long_names() {
        let long = "x".repeat(60);
        assert_eq!(shorten(&long, 10).chars().count(), 10);
        assert!(shorten(&long, 10).ends_with("..."));
    }
}
