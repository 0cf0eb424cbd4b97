use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use spdlog::sink::{RotatingFileSink, RotationPolicy, Sink, StdStream, StdStreamSink};
use spdlog::{Level, LevelFilter, Logger};

use crate::config::{Config, Log, LogLevel};

const MAX_LOG_FILES: usize = 30;

impl LogLevel {
    fn as_level(self) -> Level {
        match self {
            LogLevel::Critical => Level::Critical,
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warn,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
            LogLevel::Trace => Level::Trace,
        }
    }
}

fn stream_sink(std_stream: StdStream, level_filter: LevelFilter) -> spdlog::Result<Arc<dyn Sink>> {
    let sink = StdStreamSink::builder()
        .std_stream(std_stream)
        .level_filter(level_filter)
        .build()?;
    Ok(Arc::new(sink))
}

fn daily_file_sink(location: &Path) -> spdlog::Result<Arc<dyn Sink>> {
    let sink = RotatingFileSink::builder()
        .base_path(location)
        .rotation_policy(RotationPolicy::Daily { hour: 0, minute: 0 })
        .max_files(MAX_LOG_FILES)
        .rotate_on_open(false)
        .build()?;
    Ok(Arc::new(sink))
}

fn build_logger(log: &Log) -> spdlog::Result<Logger> {
    let mut sinks = vec![];
    if let Some(ref location) = log.location {
        sinks.push(daily_file_sink(location)?);
    }
    // Warnings and errors go to stderr, everything else to stdout
    if log.log_to_console {
        sinks.push(stream_sink(StdStream::Stdout, LevelFilter::MoreVerbose(Level::Warn))?);
        sinks.push(stream_sink(StdStream::Stderr, LevelFilter::MoreSevereEqual(Level::Warn))?);
    }

    let logger = Logger::builder().sinks(sinks).build()?;
    logger.set_flush_level_filter(LevelFilter::MoreSevereEqual(Level::Info));
    logger.set_level_filter(LevelFilter::MoreSevereEqual(log.level.as_level()));
    Ok(logger)
}

/// Without a [log] section only warnings and errors reach the console,
/// the summary line is the only regular output.
pub fn configure_logger(config: &Config) -> spdlog::Result<()> {
    let Some(ref log) = config.log else {
        spdlog::default_logger().set_level_filter(LevelFilter::MoreSevereEqual(Level::Warn));
        return Ok(());
    };

    let logger = Arc::new(build_logger(log)?);
    logger.set_flush_period(Some(Duration::from_secs(2)));
    spdlog::set_default_logger(logger);

    Ok(())
}
