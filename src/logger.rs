use {
    log::{LevelFilter, Log, Metadata, Record},
    std::io::Write,
};

struct Logger {
    level: LevelFilter,
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "[{}] {}",
            record.level().as_str().to_lowercase(),
            record.args()
        );
    }

    fn flush(&self) {}
}

pub fn install(level: LevelFilter) {
    let _ = log::set_boxed_logger(Box::new(Logger { level }));
    log::set_max_level(level);
}
