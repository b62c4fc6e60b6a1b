use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// FIXME and BUG are high, HACK is medium, everything else is low.
    pub fn from_keyword(keyword: &str) -> Priority {
        match keyword.to_uppercase().as_str() {
            "FIXME" | "BUG" => Priority::High,
            "HACK" => Priority::Medium,
            _ => Priority::Low,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Sort level, high priorities first.
    pub fn level(&self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct TodoItem {
    pub file: PathBuf,
    pub line: usize,
    pub text: String,
    pub priority: Priority,
}

impl TodoItem {
    /// Base name of the file, used for display and keyword matching.
    pub fn file_name(&self) -> String {
        self.file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn display_text(&self) -> String {
        format!(
            "[{}:{}] {} ({})",
            self.file_name(),
            self.line,
            self.text,
            self.priority.display_name()
        )
    }
}

#[test]
fn keyword_mapping_test() {
    assert_eq!(Priority::High, Priority::from_keyword("FIXME"));
    assert_eq!(Priority::High, Priority::from_keyword("bug"));
    assert_eq!(Priority::High, Priority::from_keyword("Bug"));
    assert_eq!(Priority::Medium, Priority::from_keyword("hack"));
    assert_eq!(Priority::Medium, Priority::from_keyword("HACK"));
    assert_eq!(Priority::Low, Priority::from_keyword("TODO"));
    assert_eq!(Priority::Low, Priority::from_keyword("note"));
    assert_eq!(Priority::Low, Priority::from_keyword("XXX"));
    assert_eq!(Priority::Low, Priority::from_keyword(""));
}

#[test]
fn display_text_test() {
    let item = TodoItem {
        file: PathBuf::from("src/Main.kt"),
        line: 12,
        text: String::from("FIXME: handle null"),
        priority: Priority::High,
    };

    assert_eq!("[Main.kt:12] FIXME: handle null (High)", item.display_text());
    assert_eq!("Main.kt", item.file_name());
}

#[test]
fn file_name_empty_path_test() {
    let item = TodoItem {
        file: PathBuf::new(),
        line: 1,
        text: String::from("TODO:"),
        priority: Priority::Low,
    };

    assert_eq!("", item.file_name());
    assert_eq!("[:1] TODO: (Low)", item.display_text());
}
