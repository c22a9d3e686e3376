#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub use color_eyre::eyre;
pub use thrifty_testhelpers_macros::test;

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::{OwoColorize, Style};
use std::io::Write;
use std::sync::Once;

/// Environment variable holding the maximum log level for tests
pub const LOG_ENV: &str = "THRIFTY_LOG";

struct TestLogger;

impl Log for TestLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level_style = match record.level() {
            Level::Error => Style::new().red().bold(),
            Level::Warn => Style::new().yellow(),
            Level::Info => Style::new().green(),
            Level::Debug => Style::new().blue(),
            Level::Trace => Style::new().cyan(),
        };

        eprintln!(
            "{:>5} {} {}",
            record.level().style(level_style),
            record.target().dimmed(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Reads [`LOG_ENV`], falling back to `Trace` when unset or unparseable.
pub fn level_from_env() -> LevelFilter {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|raw| raw.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Trace)
}

/// Installs color-eyre (except on miri) and the test logger.
///
/// Safe to call from every test: only the first call in a process does anything.
pub fn setup() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        #[cfg(not(miri))]
        {
            use color_eyre::config::HookBuilder;
            use regex::Regex;
            use std::sync::LazyLock;

            // Test harness and panic plumbing, not worth showing in reports.
            static IGNORE_FRAMES: LazyLock<Regex> = LazyLock::new(|| {
                Regex::new(r"^(std::panic|core::panic|test::run_test|test::__rust_begin_short_backtrace|std::sys::(pal|backtrace)|std::thread::Builder|core::ops::function)")
                    .expect("frame filter regex is valid")
            });

            let filter = move |frames: &mut Vec<&color_eyre::config::Frame>| {
                frames.retain(|frame| {
                    frame
                        .name
                        .as_ref()
                        .map(|n| !IGNORE_FRAMES.is_match(&n.to_string()))
                        .unwrap_or(true)
                });
            };

            // Another harness may have installed a hook already; keep theirs.
            let _ = HookBuilder::default()
                .add_frame_filter(Box::new(filter))
                .install();
        }

        if log::set_boxed_logger(Box::new(TestLogger)).is_ok() {
            log::set_max_level(level_from_env());
        }
    });
}
