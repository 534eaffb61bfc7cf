use crate::errors::AppResult;
use crate::store::journal::{JournalEntry, read_entries};
use crate::ui::messages::{header, info};
use crate::utils::colors::dim;
use ansi_term::Colour;
use std::path::Path;

/// Colour of each journal operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "start" => Colour::Green,
        "stop" => Colour::Yellow,
        "reset" => Colour::Red,
        "push" => Colour::Blue,
        "push_failed" => Colour::Purple,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render journal entries as aligned lines, without a trailing newline.
    pub fn render(entries: &[JournalEntry]) -> Vec<String> {
        let id_w = entries.len().to_string().len();
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        // op + target column, capped at 40
        let op_target: Vec<String> = entries
            .iter()
            .map(|e| {
                if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                }
            })
            .collect();
        let op_w = op_target.iter().map(|s| s.len()).max().unwrap_or(0).min(40);

        entries
            .iter()
            .zip(op_target)
            .enumerate()
            .map(|(i, (entry, op_target))| {
                let padded = format!("{:<op_w$}", op_target, op_w = op_w);
                // colour only the operation, padding stays aligned
                let rest = &padded[entry.operation.len()..];
                let colored = color_for_operation(&entry.operation).paint(entry.operation.as_str());

                format!(
                    "{:>id_w$}: {} | {}{} => {}",
                    i + 1,
                    dim(&format!("{:<date_w$}", entry.date, date_w = date_w)),
                    colored,
                    rest,
                    entry.message,
                    id_w = id_w
                )
            })
            .collect()
    }

    pub fn print_log(path: &Path) -> AppResult<()> {
        let entries = read_entries(path)?;

        if entries.is_empty() {
            info("The journal is empty.");
            return Ok(());
        }

        header(format!("Journal ({})", path.display()));
        for line in Self::render(&entries) {
            println!("{}", line);
        }

        Ok(())
    }
}
