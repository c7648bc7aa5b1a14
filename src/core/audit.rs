use crate::db::log::{LogEntry, load_entries};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::truncate;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ansi regex"));

fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// ANSI colour per journaled operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "login" | "logout" => Colour::Cyan,
        "user_add" | "machine_add" | "log_add" | "tools_add" | "item_add" => Colour::Green,
        "user_del" | "machine_del" | "tools_del" => Colour::Red,
        "user_status" | "item_adjust" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" | "export" | "notify" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

const OP_WIDTH: usize = 40;

fn render_entry(e: &LogEntry, id_w: usize, date_w: usize) -> String {
    let color = color_for_operation(&e.operation);

    let date = chrono::DateTime::parse_from_rfc3339(&e.date)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| e.date.clone());

    let op_target = if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    };

    // only the operation word is coloured
    let visible = truncate(&op_target, OP_WIDTH);
    let colored = match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    };
    let padding = " ".repeat(OP_WIDTH.saturating_sub(strip_ansi(&colored).chars().count()));

    format!(
        "{:>id_w$}: {:<date_w$} | {}{} => {}",
        e.id,
        date,
        colored,
        padding,
        e.message,
        id_w = id_w,
        date_w = date_w
    )
}

pub struct AuditLogic;

impl AuditLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_entries(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");
        for e in &entries {
            println!("{}", render_entry(e, id_w, date_w));
        }
        Ok(())
    }
}
