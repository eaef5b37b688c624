use std::io::{self, Write};

use env_logger::{fmt::Formatter, Builder, Target};
use log::Record;

use crate::error::{Error, Result};
use crate::options::{LogFormat, LogOptions};

/// Installs the global logger on stderr. Fails if a logger is already set.
pub fn init_logger(options: &LogOptions) -> Result<()> {
    let options = *options;

    Builder::new()
        .filter_level(options.log_level.to_filter())
        .write_style(env_logger::WriteStyle::Never)
        .target(Target::Stderr)
        .format(move |buf: &mut Formatter, record| {
            if options.log_timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }
            write_record(buf, options.log_format, record)
        })
        .try_init()
        .map_err(|e| Error::other(format!("logger init failed: {e}")))
}

fn write_record(out: &mut impl Write, log_format: LogFormat, record: &Record) -> io::Result<()> {
    let level = record.level().as_str();
    match log_format {
        LogFormat::Compact => writeln!(out, "{} {}", level, record.args()),
        LogFormat::Pretty => writeln!(out, "{} [{}] {}", level, record.target(), record.args()),
    }
}
