//! Demo driver: a sequential run followed by workers logging concurrently
//! through one shared logger.

use std::{thread, time::Duration};

use crate::{LogWriter, SerializedLogger};

/// Log file used by the `seriallog` binary when no path is given.
pub const DEFAULT_LOG_FILE: &str = "myLogs.txt";

#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Number of concurrent workers.
    pub threads: usize,
    /// Iterations per worker; each iteration logs one INFO and one DEBUG line.
    pub messages: usize,
    /// Sleep between iterations.
    pub pause: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            threads: 5,
            messages: 5,
            pause: Duration::from_millis(100),
        }
    }
}

/// One call per severity, framed by section banners.
pub fn single_thread_logging<C: LogWriter>(logger: &SerializedLogger<C>, log_file: &str) {
    logger.info("----- IN SINGLE THREAD LOGIC ------");
    logger.debug("This is debug message");
    logger.info(format!("Application started and logfile name is : {log_file}"));
    logger.warning("Low memory condition detected");
    logger.error("Failed some where");
    logger.critical("Crash detected");
    logger.info("----- END SINGLE THREAD LOGIC ------");
}

pub fn thread_function<C: LogWriter>(
    logger: &SerializedLogger<C>,
    thread_id: usize,
    messages: usize,
    pause: Duration,
) {
    for i in 0..messages {
        // two independent calls: another worker may log in between
        logger.info(format!("Thread : {thread_id} - Message {i}"));
        logger.debug(format!("In threading debug - The thread is :{thread_id}"));
        thread::sleep(pause);
    }
}

/// Runs the sequential part, then `config.threads` workers numbered from 1,
/// and returns once every worker has finished.
pub fn run<C: LogWriter + Send>(logger: &SerializedLogger<C>, log_file: &str, config: &DemoConfig) {
    single_thread_logging(logger, log_file);
    logger.info("----- IN MULTI THREAD LOGIC -----");
    thread::scope(|scope| {
        for thread_id in 1..=config.threads {
            scope.spawn(move || thread_function(logger, thread_id, config.messages, config.pause));
        }
    });
    logger.info("------ ALL THREADS ARE COMPLETED ------");
}
