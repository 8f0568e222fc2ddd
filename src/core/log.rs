use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::store::oplog::{LogEntry, read_all};
use ansi_term::Colour;

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "in" => Colour::Green,
        "out" => Colour::Red,
        "export" => Colour::Cyan,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

const OP_MAX: usize = 60;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &RecordStore) -> AppResult<()> {
        let entries = read_all(store.path())?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");
        for line in render(&entries) {
            println!("{line}");
        }

        Ok(())
    }
}

/// One output line per entry: `N: date | op (target) => message`.
pub fn render(entries: &[LogEntry]) -> Vec<String> {
    let op_target: Vec<String> = entries
        .iter()
        .map(|e| {
            let s = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };
            truncate(&s, OP_MAX)
        })
        .collect();

    let op_w = op_target.iter().map(|s| s.chars().count()).max().unwrap_or(0);
    let id_w = entries.len().to_string().len();
    let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

    entries
        .iter()
        .zip(op_target)
        .enumerate()
        .map(|(i, (e, ot))| {
            let padding = " ".repeat(op_w.saturating_sub(ot.chars().count()));

            // only the operation word is colored
            let colored = match ot.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color_for_operation(&e.operation).paint(op), rest),
                None => color_for_operation(&e.operation).paint(ot.as_str()).to_string(),
            };

            format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                i + 1,
                e.date,
                colored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            )
        })
        .collect()
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t: String = s.chars().take(max - 3).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}
