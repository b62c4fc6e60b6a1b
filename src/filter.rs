use crate::items::{Priority, TodoItem};

/// Keeps items whose text, file name or display string contains the keyword,
/// case-insensitively. An empty or whitespace-only keyword keeps everything.
pub fn filter_todos(items: &[TodoItem], keyword: &str) -> Vec<TodoItem> {
    let keyword = keyword.trim();

    if keyword.is_empty() {
        return items.to_vec();
    }

    let keyword = keyword.to_lowercase();

    items
        .iter()
        .filter(|item| matches_todo(item, &keyword))
        .cloned()
        .collect()
}

fn matches_todo(item: &TodoItem, keyword: &str) -> bool {
    item.text.to_lowercase().contains(keyword)
        || item.file_name().to_lowercase().contains(keyword)
        || item.display_text().to_lowercase().contains(keyword)
}

pub fn filter_by_priority(items: &[TodoItem], priority: Priority) -> Vec<TodoItem> {
    items
        .iter()
        .filter(|item| item.priority == priority)
        .cloned()
        .collect()
}

#[cfg(test)]
fn sample_items() -> Vec<TodoItem> {
    use std::path::PathBuf;

    vec![
        TodoItem {
            file: PathBuf::from("src/Parser.kt"),
            line: 3,
            text: String::from("TODO: rewrite the tokenizer"),
            priority: Priority::Low,
        },
        TodoItem {
            file: PathBuf::from("src/Main.kt"),
            line: 7,
            text: String::from("FIXME: bug here"),
            priority: Priority::High,
        },
        TodoItem {
            file: PathBuf::from("build.gradle.kts"),
            line: 1,
            text: String::from("HACK: pin the plugin version"),
            priority: Priority::Medium,
        },
    ]
}

#[test]
fn empty_keyword_test() {
    let items = sample_items();

    assert_eq!(items, filter_todos(&items, ""));
    assert_eq!(items, filter_todos(&items, "   "));
    assert_eq!(items, filter_todos(&items, "\t\n"));
}

#[test]
fn text_match_test() {
    let items = sample_items();

    let filtered = filter_todos(&items, "BUG HERE");

    assert_eq!(1, filtered.len());
    assert_eq!("FIXME: bug here", filtered[0].text);
}

#[test]
fn file_name_match_test() {
    let items = sample_items();

    // Matches against the base name, not the full path.
    let filtered = filter_todos(&items, "gradle");

    assert_eq!(1, filtered.len());
    assert_eq!("HACK: pin the plugin version", filtered[0].text);

    assert_eq!(0, filter_todos(&items, "src/").len());
}

#[test]
fn display_text_match_test() {
    let items = sample_items();

    // `:7]` only occurs in the formatted display string.
    let filtered = filter_todos(&items, ":7]");

    assert_eq!(1, filtered.len());
    assert_eq!("FIXME: bug here", filtered[0].text);

    // Priority names are part of the display string too.
    let filtered = filter_todos(&items, "(medium)");

    assert_eq!(1, filtered.len());
    assert_eq!(Priority::Medium, filtered[0].priority);
}

#[test]
fn order_preserved_test() {
    let items = sample_items();

    // All three display strings contain `kt`.
    let filtered = filter_todos(&items, "kt");

    assert_eq!(items, filtered);
}

#[test]
fn idempotence_test() {
    let items = sample_items();

    for keyword in ["", "kt", "bug", "(high)", "zzz"] {
        let once = filter_todos(&items, keyword);
        let twice = filter_todos(&once, keyword);

        assert_eq!(once, twice);
    }
}

#[test]
fn display_round_trip_test() {
    let items = sample_items();

    // Any substring of an item's display string keeps that item.
    for item in &items {
        let display = item.display_text();

        for keyword in [&display[..5], &display[3..12], &display[display.len() - 6..]] {
            let filtered = filter_todos(&items, keyword);

            assert!(filtered.contains(item), "keyword {keyword:?} lost {display:?}");
        }
    }
}

#[test]
fn priority_filter_test() {
    let items = sample_items();

    let high = filter_by_priority(&items, Priority::High);

    assert_eq!(1, high.len());
    assert_eq!("FIXME: bug here", high[0].text);

    assert_eq!(1, filter_by_priority(&items, Priority::Medium).len());
    assert_eq!(1, filter_by_priority(&items, Priority::Low).len());
}
