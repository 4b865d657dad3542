use log::{Level, Metadata, Record, SetLoggerError};
use std::fs::OpenOptions;
use std::io::Write;

/// Appends every record at or above `level` to a file.
struct FileLogger {
    file_path: String,
    level: Level,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Routes stylesheet and factory logs to `path`.
///
/// Fails if a logger has already been installed.
pub fn init_logger(path: &str, level: Level) -> Result<(), SetLoggerError> {
    let logger = FileLogger {
        file_path: path.to_string(),
        level,
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}
