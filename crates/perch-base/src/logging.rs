use log::{Level, Log, Metadata, Record};
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

/// A logger that writes timestamped records to stdout via println!.
pub struct StdoutLogger {
    max_level: Level,
}

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        println!(
            "{} [{}] {}: {}",
            format_timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

/// Install a `StdoutLogger` as the global logger.
///
/// Can only succeed once per process; later calls are silently ignored so
/// tests that race on init do not panic.
pub fn init_stdout_logger(level: Level) {
    let logger = Box::leak(Box::new(StdoutLogger { max_level: level }));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level.to_level_filter());
    }
}

/// Format current UTC time as YYYY-MM-DDTHH:MM:SS without pulling in a
/// date-time dependency.
pub fn format_timestamp() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let (year, month, day) = civil_from_days((secs / 86400) as i64);
    let time = secs % 86400;

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        year,
        month,
        day,
        time / 3600,
        (time % 3600) / 60,
        time % 60
    )
}

/// Days since Unix epoch to civil (year, month, day).
/// Howard Hinnant's algorithm, http://howardhinnant.github.io/date_algorithms.html
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    (if m <= 2 { y + 1 } else { y }, m, d)
}
