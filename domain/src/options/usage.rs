//! Help text synthesis for parsed-option tools.
//!
//! Output is a pure function of the tool name, its summary and
//! [`GLOBAL_OPTIONS`], so repeated calls are byte-identical.

use super::entities::GLOBAL_OPTIONS;

/// Gap between the flag column and the description column
const COLUMN_GAP: usize = 3;

/// `usage: <name> [-D <property=value>]... [-I <indexref>] [args]...`
pub fn usage_line(name: &str) -> String {
    let mut line = format!("usage: {}", name);
    for spec in &GLOBAL_OPTIONS {
        line.push(' ');
        line.push_str(&spec.usage());
    }
    line.push_str(" [args]...");
    line
}

/// One aligned row per option, each newline-terminated
pub fn option_table() -> String {
    let width = GLOBAL_OPTIONS
        .iter()
        .map(|spec| spec.flag().len())
        .max()
        .unwrap_or(0);

    GLOBAL_OPTIONS
        .iter()
        .map(|spec| {
            format!(
                " {:<width$}{}{}\n",
                spec.flag(),
                " ".repeat(COLUMN_GAP),
                spec.description,
                width = width
            )
        })
        .collect()
}

/// Full help: usage line, blank line, summary, blank line, option table
pub fn synthesize_help(name: &str, summary: &str) -> String {
    format!("{}\n\n{}\n\n{}", usage_line(name), summary, option_table())
}
