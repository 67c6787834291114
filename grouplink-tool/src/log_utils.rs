use log::{Log, Metadata, Record};
use once_cell::sync::OnceCell;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::ops::DerefMut;
use std::sync::Mutex;

/// Logs records in the standard error stream, keeping stdout for command output
pub struct StderrLogger;

/// Logs records in the provided file by path
pub struct FileLogger {
    file: Mutex<BufWriter<File>>,
}

/// Forces flushing buffered records to a destination while dropping
pub struct LogFlushGuard;

pub fn make_stderr_logger() -> &'static dyn Log {
    static LOGGER: StderrLogger = StderrLogger;
    &LOGGER
}

pub fn make_file_logger(path: &str) -> std::io::Result<&'static dyn Log> {
    static LOGGER: OnceCell<FileLogger> = OnceCell::new();

    let logger = LOGGER.get_or_try_init(|| FileLogger::new(path))?;
    Ok(logger)
}

fn write_record(mut w: impl Write, record: &Record) -> std::io::Result<()> {
    writeln!(
        w,
        "{} [{}] [{}] {}",
        chrono::Local::now().format("%T.%6f"),
        record.level(),
        record.target(),
        record.args(),
    )
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = write_record(std::io::stderr().lock(), record);
        }
    }

    fn flush(&self) {}
}

impl FileLogger {
    pub fn new(path: &str) -> std::io::Result<Self> {
        Ok(Self {
            file: Mutex::new(BufWriter::new(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)?,
            )),
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            if let Err(e) = write_record(file.deref_mut(), record) {
                eprintln!("Log write failure: {}", e);
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            if let Err(e) = file.flush() {
                eprintln!("Log flush failure: {}", e);
            }
        }
    }
}

impl Drop for LogFlushGuard {
    fn drop(&mut self) {
        log::logger().flush()
    }
}
