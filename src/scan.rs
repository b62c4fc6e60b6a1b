use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glob::glob;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::items::{Priority, TodoItem};

// Matches `// TODO: rest`, `//FIXME rest`, `// hack:` anywhere in a line.
// Colon and trailing content are both optional.
static MARKER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)//\s*(TODO|FIXME|HACK|NOTE|BUG)\s*:?\s*(.*)").unwrap()
});

pub struct Stats {
    visited_folders: usize,
    visited_files: usize,
}

impl Stats {
    pub fn new() -> Stats {
        Stats {
            visited_folders: 0,
            visited_files: 0,
        }
    }

    pub fn print(&self) {
        eprintln!("[INFO] Visited folders: {}", self.visited_folders);
        eprintln!("[INFO] Visited files: {}", self.visited_files);
    }
}

pub fn is_eligible_file(path: &Path, extensions: &[String]) -> bool {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy().to_lowercase(),
        None => return false,
    };

    extensions
        .iter()
        .any(|ext| name.ends_with(&format!(".{}", ext.to_lowercase())))
}

pub fn scan_string(str: String, filename: PathBuf, items: &mut Vec<TodoItem>) {
    for (line_num, line) in str.split('\n').enumerate() {
        if !line.contains("//") {
            continue;
        }

        // First marker on the line wins; the rest of the line is its content.
        let Some(captures) = MARKER_PATTERN.captures(line) else {
            continue;
        };

        let keyword = captures[1].to_uppercase();
        let content = captures[2].trim();

        // A bare marker renders as `TODO:`, without a trailing space.
        let text = if content.is_empty() {
            format!("{keyword}:")
        } else {
            format!("{keyword}: {content}")
        };

        items.push(TodoItem {
            file: filename.clone(),
            line: line_num + 1,
            text,
            priority: Priority::from_keyword(&keyword),
        });
    }
}

pub fn scan_file(path: &Path, items: &mut Vec<TodoItem>) -> io::Result<()> {
    match fs::read_to_string(path) {
        Ok(str) => scan_string(str, path.to_path_buf(), items),
        Err(_) => (),
    };

    Ok(())
}

pub fn add_excludes_from_gitignore(base_dir: &Path, excludes: &mut Vec<PathBuf>) {
    let gitignore = base_dir.join(".gitignore");

    let Ok(content) = fs::read_to_string(&gitignore) else {
        return;
    };

    for line in content.lines() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Patterns are anchored at the directory holding the .gitignore.
        let pattern = base_dir.join(line);

        let Ok(paths) = glob(&pattern.to_string_lossy()) else {
            continue;
        };

        for path in paths.flatten() {
            excludes.push(path);
        }
    }
}

pub fn scan_dir(
    path: &Path,
    extensions: &[String],
    items: &mut Vec<TodoItem>,
    excludes: &mut Vec<PathBuf>,
    stats: &mut Stats,
) -> io::Result<()> {
    stats.visited_folders += 1;

    // Pick up this directory's ignore patterns before descending into it.
    add_excludes_from_gitignore(path, excludes);

    'entry: for entry in fs::read_dir(path)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        if name.starts_with('.') {
            continue;
        }

        for exclude in &*excludes {
            if path == *exclude {
                continue 'entry;
            }
        }

        if path.is_dir() {
            scan_dir(path.as_path(), extensions, items, excludes, stats)?
        } else {
            stats.visited_files += 1;

            if is_eligible_file(&path, extensions) {
                scan_file(path.as_path(), items)?
            }
        }
    }

    Ok(())
}

#[test]
fn extract_test() {
    let str = "// TODO: fix this\nother line\n// FIXME bug here";

    let mut items: Vec<TodoItem> = vec![];
    let path = PathBuf::from("a.kt");

    scan_string(str.to_string(), path.clone(), &mut items);

    assert_eq!(2, items.len());

    assert_eq!(TodoItem {
        file: path.clone(),
        line: 1,
        text: String::from("TODO: fix this"),
        priority: Priority::Low,
    }, items[0]);

    assert_eq!(TodoItem {
        file: path.clone(),
        line: 3,
        text: String::from("FIXME: bug here"),
        priority: Priority::High,
    }, items[1]);
}

#[test]
fn lowercase_keyword_test() {
    let mut items: Vec<TodoItem> = vec![];

    scan_string(
        "// hack: quick patch".to_string(),
        PathBuf::from("a.kt"),
        &mut items,
    );

    assert_eq!(1, items.len());
    assert_eq!("HACK: quick patch", items[0].text);
    assert_eq!(Priority::Medium, items[0].priority);
}

#[test]
fn bare_marker_test() {
    let str = "// TODO\n// FIXME:\n// NOTE:   ";

    let mut items: Vec<TodoItem> = vec![];

    scan_string(str.to_string(), PathBuf::from("a.kt"), &mut items);

    assert_eq!(3, items.len());
    assert_eq!("TODO:", items[0].text);
    assert_eq!("FIXME:", items[1].text);
    assert_eq!("NOTE:", items[2].text);
}

#[test]
fn marker_mid_line_test() {
    let mut items: Vec<TodoItem> = vec![];

    scan_string(
        "val x = compute() // NOTE check overflow".to_string(),
        PathBuf::from("Math.kt"),
        &mut items,
    );

    assert_eq!(1, items.len());
    assert_eq!("NOTE: check overflow", items[0].text);
    assert_eq!(1, items[0].line);
}

#[test]
fn first_marker_only_test() {
    let mut items: Vec<TodoItem> = vec![];

    scan_string(
        "// TODO: a // FIXME b".to_string(),
        PathBuf::from("a.kt"),
        &mut items,
    );

    // One item per line; the second marker becomes part of the content.
    assert_eq!(1, items.len());
    assert_eq!("TODO: a // FIXME b", items[0].text);
    assert_eq!(Priority::Low, items[0].priority);
}

#[test]
fn crlf_test() {
    let str = "// BUG: crash on empty list\r\nfun main() {}\r\n// todo\r";

    let mut items: Vec<TodoItem> = vec![];

    scan_string(str.to_string(), PathBuf::from("a.kt"), &mut items);

    assert_eq!(2, items.len());
    assert_eq!("BUG: crash on empty list", items[0].text);
    assert_eq!(Priority::High, items[0].priority);
    assert_eq!("TODO:", items[1].text);
    assert_eq!(3, items[1].line);
}

#[test]
fn no_match_test() {
    let str = "fun main() {\n    println(\"x\")\n}\n# TODO not a line comment\n";

    let mut items: Vec<TodoItem> = vec![];

    scan_string(str.to_string(), PathBuf::from("a.kt"), &mut items);

    assert_eq!(0, items.len());
}

#[test]
fn empty_input_test() {
    let mut items: Vec<TodoItem> = vec![];

    scan_string(String::new(), PathBuf::from("a.kt"), &mut items);

    assert_eq!(0, items.len());
}

#[test]
fn all_keywords_test() {
    let str = "// todo a\n// Fixme b\n// HACK c\n// nOtE d\n// BUG e";

    let mut items: Vec<TodoItem> = vec![];

    scan_string(str.to_string(), PathBuf::from("a.kt"), &mut items);

    assert_eq!(5, items.len());

    let priorities: Vec<Priority> = items.iter().map(|item| item.priority).collect();

    assert_eq!(
        vec![
            Priority::Low,
            Priority::High,
            Priority::Medium,
            Priority::Low,
            Priority::High,
        ],
        priorities
    );
}

#[test]
fn eligible_file_test() {
    let extensions = vec!["kt".to_string(), "kts".to_string()];

    assert!(is_eligible_file(Path::new("src/Main.kt"), &extensions));
    assert!(is_eligible_file(Path::new("build.gradle.KTS"), &extensions));
    assert!(!is_eligible_file(Path::new("src/Main.java"), &extensions));
    assert!(!is_eligible_file(Path::new("notes.txt"), &extensions));
    assert!(!is_eligible_file(Path::new(""), &extensions));
}

#[test]
fn unreadable_file_test() {
    let mut items: Vec<TodoItem> = vec![];

    // Missing files yield no items, not an error.
    scan_file(Path::new("does/not/exist.kt"), &mut items).unwrap();

    assert_eq!(0, items.len());
}
