use std::io::Write;

use chrono::Local;
use colored::{ColoredString, Colorize};
use env_logger::Builder;
use log::Level;

fn paint(level: Level) -> ColoredString {
    let tag = format!("{:>5}", level);
    match level {
        Level::Error => tag.red(),
        Level::Warn => tag.yellow(),
        Level::Info => tag.green(),
        Level::Debug => tag.blue(),
        Level::Trace => tag.purple(),
    }
}

/// Installs the global logger. `filter` uses `RUST_LOG` syntax.
pub fn setup_logger(filter: &str, name: &str, version: &str) {
    let tag = format!("{}_{}", name, version);
    Builder::new()
        .parse_filters(filter)
        .format(move |buf, record| {
            writeln!(
                buf,
                "{}:{} [{} {}]{}: {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                tag.purple(),
                Local::now().format("%Y%m%d %H:%M:%S").to_string().purple(),
                paint(record.level()),
                record.args()
            )
        })
        .init();
}
