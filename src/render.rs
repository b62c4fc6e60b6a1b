use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::items::{Priority, TodoItem};

impl TodoItem {
    pub fn render(&self) {
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);

        write_ansi(&mut stdout, Color::Ansi256(243), "- ", false);

        let location = format!("[{}:{}]", self.file_name(), self.line);

        write_ansi(&mut stdout, Color::Cyan, location.as_str(), false);
        write_ansi(&mut stdout, Color::Blue, format!(" {}", self.text).as_str(), true);

        write!(&mut stdout, "\n").unwrap();
    }
}

pub fn write_ansi(stdout: &mut StandardStream, color: Color, text: &str, bold: bool) {
    stdout.set_color(
    ColorSpec::new()
            .set_fg(Some(color))
            .set_bold(bold)
    ).unwrap();

    write!(stdout, "{text}").unwrap();

    stdout.reset().unwrap();
}

fn heading_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::White,
    }
}

pub fn render_todos(items: Vec<TodoItem>) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    write_ansi(&mut stdout, Color::Yellow, "# TODOs", true);
    write!(stdout, "\n\n").unwrap();

    if items.is_empty() {
        write_ansi(&mut stdout, Color::Ansi256(243), "No marker comments found.", false);
        write!(stdout, "\n").unwrap();

        return;
    }

    // High first; scan order is kept within each group.
    let mut priorities: Vec<Priority> = vec![];

    for item in &items {
        if !priorities.contains(&item.priority) {
            priorities.push(item.priority);
        }
    }

    priorities.sort_by_key(|priority| priority.level());

    for priority in priorities {
        let group: Vec<&TodoItem> = items
            .iter()
            .filter(|item| item.priority == priority)
            .collect();

        let heading = format!("## {} ({})", priority.display_name(), group.len());

        write_ansi(&mut stdout, heading_color(priority), heading.as_str(), true);
        write!(stdout, "\n").unwrap();

        for item in group {
            item.render();
        }

        println!("");
    }
}
