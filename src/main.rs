use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crate::filter::{filter_by_priority, filter_todos};
use crate::items::{Priority, TodoItem};
use crate::render::render_todos;
use crate::scan::{Stats, is_eligible_file, scan_dir, scan_file};
use crate::state::FilterState;

pub mod scan;
pub mod render;
pub mod items;
pub mod filter;
pub mod state;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    // Paths to search
    #[arg(default_values_t = Vec::from([".".to_string()]))]
    paths: Vec<String>,

    // Paths to exclude
    #[arg(short, long, default_values_t = Vec::from([
        "build".to_string(),
        "out".to_string(),
    ]))]
    exclude: Vec<String>,

    /// File extensions eligible for scanning
    #[arg(short = 'x', long = "extensions", default_values_t = Vec::from([
        "kt".to_string(),
        "kts".to_string(),
    ]))]
    extensions: Vec<String>,

    /// Keyword to filter items by (matches text, file name and display string)
    #[arg(short, long)]
    filter: Option<String>,

    /// Reuse the previously saved filter keyword
    #[arg(long, default_value_t = false)]
    last: bool,

    /// Print recently used filter keywords and exit
    #[arg(long, default_value_t = false)]
    recent: bool,

    /// Only show items with the given priority (high, medium or low)
    #[arg(short, long, value_parser = parse_priority)]
    priority: Option<Priority>,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn parse_priority(value: &str) -> Result<Priority, String> {
    match value.to_lowercase().as_str() {
        "high" => Ok(Priority::High),
        "medium" => Ok(Priority::Medium),
        "low" => Ok(Priority::Low),
        _ => Err(format!("unknown priority '{value}', expected high, medium or low")),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut state = FilterState::load().unwrap_or_default();

    if args.recent {
        for keyword in &state.recent_keywords {
            println!("{keyword}");
        }

        return Ok(());
    }

    let root_dir: PathBuf = std::env::current_dir().context("Failed to get current directory")?;
    let mut paths: Vec<PathBuf> = vec![];
    let mut excludes: Vec<PathBuf> = vec![];

    for p in args.paths {
        paths.push(root_dir.join(p));
    }

    for exclude in args.exclude {
        excludes.push(root_dir.join(exclude));
    }

    let mut items: Vec<TodoItem> = vec![];
    let mut stats = Stats::new();

    for p in &paths {
        if p.is_dir() {
            scan_dir(p.as_path(), &args.extensions, &mut items, &mut excludes, &mut stats)
                .with_context(|| format!("Failed to scan {}", p.display()))?;
        } else if is_eligible_file(p, &args.extensions) {
            scan_file(p.as_path(), &mut items)
                .with_context(|| format!("Failed to scan {}", p.display()))?;
        }
    }

    let keyword = match args.filter {
        Some(keyword) => {
            state.record_keyword(&keyword);

            if let Err(err) = state.save() {
                eprintln!("[WARN] Failed to save filter state: {err}");
            }

            keyword
        }
        None if args.last => state.last_keyword.clone(),
        None => String::new(),
    };

    if let Some(priority) = args.priority {
        items = filter_by_priority(&items, priority);
    }

    let items = filter_todos(&items, &keyword);

    render_todos(items);

    if args.verbose {
        eprint!("\n\n");
        stats.print();
        eprintln!("Paths: {:?}", &paths);
        eprintln!("Excludes: {:?}", &excludes);
    }

    Ok(())
}
