use crate::model::config::LoggingConfig;
use env_logger::{Builder, Target, WriteStyle};
use log::Level;
use std::env;
use std::io::Write;
use std::str::FromStr;

pub fn setup_logger(verbose: bool, config: &LoggingConfig) {
    let level = if verbose {
        Level::Debug
    } else {
        Level::from_str(&config.level).unwrap_or(Level::Info)
    };

    let mut builder = Builder::new();
    builder.filter(None, level.to_level_filter());
    builder.target(Target::Stdout);
    builder.write_style(if config.colored {
        WriteStyle::Auto
    } else {
        WriteStyle::Never
    });

    builder.format(|buf, record| match record.level() {
        Level::Error => writeln!(buf, "error: {}", record.args()),
        Level::Warn => writeln!(buf, "warning: {}", record.args()),
        _ => writeln!(buf, "{}", record.args()),
    });

    if env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    }

    builder.init();
}
