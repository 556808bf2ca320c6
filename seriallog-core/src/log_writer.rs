use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Append-only destination for formatted log lines.
///
/// Implementations never panic on I/O failure: logging must not take the host
/// program down, so write errors are dropped.
pub trait LogWriter {
    /// Writes `line` followed by a newline.
    fn regular(&mut self, line: &str);
    fn flush(&mut self);
}

impl<W: LogWriter + ?Sized> LogWriter for Box<W> {
    fn regular(&mut self, line: &str) {
        (**self).regular(line)
    }

    fn flush(&mut self) {
        (**self).flush()
    }
}

impl<W: LogWriter + ?Sized> LogWriter for &mut W {
    fn regular(&mut self, line: &str) {
        (**self).regular(line)
    }

    fn flush(&mut self) {
        (**self).flush()
    }
}

/// Log file opened in append mode. Existing content is never truncated.
pub struct LogFile {
    file: BufWriter<File>,
    path: PathBuf,
}

impl LogFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, std::io::Error> {
        let file = File::options().create(true).append(true).open(&path)?;
        Ok(Self {
            file: BufWriter::new(file),
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogWriter for LogFile {
    fn regular(&mut self, line: &str) {
        // flushed per line so a returned `log` call is visible in the file
        writeln!(self.file, "{line}").ok();
        self.file.flush().ok();
    }

    fn flush(&mut self) {
        self.file.flush().ok();
    }
}

impl Drop for LogFile {
    fn drop(&mut self) {
        self.flush();
    }
}

#[derive(Default, Debug)]
pub struct LogStdout;

impl LogWriter for LogStdout {
    fn regular(&mut self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{line}").ok();
        stdout.flush().ok();
    }

    fn flush(&mut self) {
        std::io::stdout().flush().ok();
    }
}
