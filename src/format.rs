//! Terminal rendering of todos and their fields.

use chrono::Local;
use colored::{ColoredString, Colorize};

use crate::task::{Priority, Status, Todo};

#[derive(Debug, Default, Clone)]
pub struct FormatOptions {
    /// Printed right before the title, e.g. `"3. "`.
    pub prefix: Option<String>,
    pub show_created_at: bool,
}

impl FormatOptions {
    pub fn numbered(position: usize) -> Self {
        Self {
            prefix: Some(format!("{position}. ")),
            show_created_at: true,
        }
    }
}

/// Renders a todo as a short block: title line, then status and priority.
pub fn format_todo(todo: &Todo, opts: &FormatOptions) -> String {
    let prefix = opts.prefix.as_deref().unwrap_or("");
    let mut header = format!("{prefix}{}", todo.title).bold().to_string();
    if opts.show_created_at {
        if let Some(created_at) = todo.created_at {
            let date = created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M");
            header.push(' ');
            header.push_str(&format!("({date})").dimmed().to_string());
        }
    }
    format!(
        "\n{header}\nStatus: {} Priority: {}\n",
        format_status(todo.status),
        format_priority(todo.priority)
    )
}

pub fn format_priority(priority: Priority) -> ColoredString {
    let text = priority.as_str();
    match priority {
        Priority::Low => text.bright_blue(),
        Priority::Medium => text.yellow(),
        Priority::High => text.bright_red(),
        Priority::Urgent => text.red(),
    }
}

pub fn format_status(status: Status) -> ColoredString {
    match status {
        Status::Todo => status_text(status).white(),
        Status::InProgress => status_text(status).yellow(),
        Status::Done => status_text(status).green(),
    }
}

/// Uncolored status label, shared with the full-screen viewer.
pub fn status_text(status: Status) -> &'static str {
    match status {
        Status::Todo => "○ Todo",
        Status::InProgress => "◐ In progress",
        Status::Done => "✔ Done",
    }
}

/// Highlights every case-insensitive occurrence of `target` in `content`
/// with the default style (bright magenta, underlined).
pub fn highlight_occurrences(content: &str, target: &str) -> String {
    highlight_occurrences_with(content, target, |s| {
        s.bright_magenta().underline().to_string()
    })
}

/// Like [`highlight_occurrences`] but with a caller supplied style.
///
/// Matches are found left to right and never overlap; the matched text keeps
/// its original casing.
pub fn highlight_occurrences_with(
    content: &str,
    target: &str,
    paint: impl Fn(&str) -> String,
) -> String {
    let needle: Vec<char> = target.chars().collect();
    if needle.is_empty() {
        return content.to_string();
    }

    let chars: Vec<(usize, char)> = content.char_indices().collect();
    let mut out = String::with_capacity(content.len());
    let mut plain_from = 0;
    let mut i = 0;
    while i + needle.len() <= chars.len() {
        let window = &chars[i..i + needle.len()];
        if window
            .iter()
            .map(|&(_, c)| c)
            .zip(needle.iter().copied())
            .all(|(a, b)| chars_eq_ignore_case(a, b))
        {
            let start = window[0].0;
            let end = chars
                .get(i + needle.len())
                .map_or(content.len(), |&(byte, _)| byte);
            out.push_str(&content[plain_from..start]);
            out.push_str(&paint(&content[start..end]));
            plain_from = end;
            i += needle.len();
        } else {
            i += 1;
        }
    }
    out.push_str(&content[plain_from..]);
    out
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Case-insensitive substring test used by title lookup. Folds case one
/// char at a time, the same way [`highlight_occurrences_with`] does, so every
/// title it accepts gets a highlighted occurrence.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return true;
    }
    let haystack: Vec<char> = haystack.chars().collect();
    haystack.windows(needle.len()).any(|window| {
        window
            .iter()
            .zip(&needle)
            .all(|(&a, &b)| chars_eq_ignore_case(a, b))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn brackets(s: &str) -> String {
        format!("[{s}]")
    }

    #[test]
    fn highlights_only_the_match() {
        assert_eq!(
            highlight_occurrences_with("Buy milk", "milk", brackets),
            "Buy [milk]"
        );
    }

    #[test]
    fn match_is_case_insensitive_and_keeps_casing() {
        assert_eq!(
            highlight_occurrences_with("Buy MILK and Milk", "milk", brackets),
            "Buy [MILK] and [Milk]"
        );
    }

    #[test]
    fn no_occurrence_returns_content_unchanged() {
        assert_eq!(
            highlight_occurrences_with("Buy milk", "bread", brackets),
            "Buy milk"
        );
        assert_eq!(highlight_occurrences("Buy milk", "bread"), "Buy milk");
        assert_eq!(highlight_occurrences_with("Buy milk", "", brackets), "Buy milk");
    }

    #[test]
    fn adjacent_matches_do_not_overlap() {
        assert_eq!(highlight_occurrences_with("aaaa", "aa", brackets), "[aa][aa]");
        assert_eq!(highlight_occurrences_with("aaa", "aa", brackets), "[aa]a");
        assert_eq!(
            highlight_occurrences_with("abababa", "aba", brackets),
            "[aba]b[aba]"
        );
    }

    #[test]
    fn handles_multibyte_text() {
        assert_eq!(
            highlight_occurrences_with("Café CAFÉ", "café", brackets),
            "[Café] [CAFÉ]"
        );
    }

    #[test]
    fn todo_block_contains_title_status_and_priority() {
        let todo = Todo {
            id: "1".into(),
            title: "Buy milk".into(),
            priority: Priority::High,
            status: Status::Done,
            created_at: None,
        };
        let text = format_todo(&todo, &FormatOptions::numbered(2));
        assert!(text.starts_with('\n'));
        assert!(text.contains("2. Buy milk"));
        assert!(text.contains("Status: "));
        assert!(text.contains("✔ Done"));
        assert!(text.contains("high"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn created_at_only_when_requested() {
        let todo = Todo::new("Water the plants", Priority::Low, Status::Todo);
        let year = todo
            .created_at
            .unwrap()
            .with_timezone(&Local)
            .format("(%Y-")
            .to_string();
        assert!(format_todo(&todo, &FormatOptions::numbered(1)).contains(&year));
        assert!(!format_todo(&todo, &FormatOptions::default()).contains(&year));
    }

    #[test]
    fn contains_ignore_case_matches_substrings() {
        assert!(contains_ignore_case("Write REPORT", "report"));
        assert!(!contains_ignore_case("Write report", "reports"));
        assert!(contains_ignore_case("Buy milk", ""));
    }

    #[test]
    fn matching_and_highlighting_agree() {
        let cases = [
            ("Café CAFÉ", "café"),
            ("ΟΔΟΣ", "οδος"),
            ("ΟΔΟΣ", "οδοσ"),
            ("İstanbul trip", "istanbul"),
            ("İstanbul trip", "İSTANBUL"),
            ("Buy milk", "bread"),
        ];
        for (content, target) in cases {
            let highlighted = highlight_occurrences_with(content, target, brackets) != content;
            assert_eq!(
                contains_ignore_case(content, target),
                highlighted,
                "{content:?} / {target:?}"
            );
        }
        assert!(contains_ignore_case("ΟΔΟΣ", "οδοσ"));
    }
}
