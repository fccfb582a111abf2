use std::{fmt, panic::Location, sync::Arc};

use log::{Level, LevelFilter, Log, Record};
use log4rs::{
  append::console::{ConsoleAppender, Target},
  config::{Appender, Config, Root},
  encode::{json::JsonEncoder, pattern::PatternEncoder, Encode},
};

use crate::error::Error;

const LOG_TARGET: &str = "prism_client";
const APPENDER_NAME: &str = "stderr";
// Docs about pattern encoder https://docs.rs/log4rs/latest/log4rs/encode/pattern/index.html
const DEVELOPMENT_PATTERN: &str =
  "{d(%Y-%m-%dT%H:%M:%S%.3f%:z)} {h({l:<5})} {f}:{L} {m}{n}";

/// Leveled logger handed to the factory and to the Prism client.
///
/// It wraps its own `log4rs` logger instead of installing a global one, so it
/// can be built as many times as clients are created.
#[derive(Clone)]
pub struct Logger {
  inner: Arc<dyn Log>,
  level: LevelFilter,
}

impl Logger {
  /// JSON lines to stderr, info and above
  pub fn production() -> Result<Self, Error> {
    Self::build(Box::new(JsonEncoder::new()), LevelFilter::Info)
  }

  /// Human readable lines to stderr, debug and above
  pub fn development() -> Result<Self, Error> {
    Self::build(
      Box::new(PatternEncoder::new(DEVELOPMENT_PATTERN)),
      LevelFilter::Debug,
    )
  }

  pub fn new(debug: bool) -> Result<Self, Error> {
    if debug {
      Self::development()
    } else {
      Self::production()
    }
  }

  fn build(encoder: Box<dyn Encode>, level: LevelFilter) -> Result<Self, Error> {
    let stderr = ConsoleAppender::builder()
      .target(Target::Stderr)
      .encoder(encoder)
      .build();

    let config = Config::builder()
      .appender(Appender::builder().build(APPENDER_NAME, Box::new(stderr)))
      .build(Root::builder().appender(APPENDER_NAME).build(level))
      .map_err(|e| Error::LoggerInitError(e.to_string()))?;

    Ok(Self {
      inner: Arc::new(log4rs::Logger::new(config)),
      level,
    })
  }

  pub fn level(&self) -> LevelFilter {
    self.level
  }

  pub fn enabled(&self, level: Level) -> bool {
    level <= self.level
  }

  /// Records carry the file and line of the caller
  #[track_caller]
  pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
    if !self.enabled(level) {
      return;
    }

    let location = Location::caller();

    self.inner.log(
      &Record::builder()
        .level(level)
        .target(LOG_TARGET)
        .file(Some(location.file()))
        .line(Some(location.line()))
        .args(args)
        .build(),
    );
  }

  #[track_caller]
  pub fn info(&self, args: fmt::Arguments<'_>) {
    self.log(Level::Info, args)
  }

  /// Verbose output, only shown by the development logger
  #[track_caller]
  pub fn debug(&self, args: fmt::Arguments<'_>) {
    self.log(Level::Debug, args)
  }

  #[track_caller]
  pub fn error(&self, args: fmt::Arguments<'_>) {
    self.log(Level::Error, args)
  }

  pub fn flush(&self) {
    self.inner.flush()
  }
}

impl fmt::Debug for Logger {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Logger").field("level", &self.level).finish()
  }
}
