//! Plain-text transcript logging, toggled with `/log`.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct LoggingState {
    file_path: Option<String>,
    is_active: bool,
}

impl LoggingState {
    pub fn new(log_file: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut logging = LoggingState {
            file_path: log_file,
            is_active: false,
        };

        // A log file supplied on the command line enables logging immediately.
        if let Some(path) = logging.file_path.clone() {
            logging.set_log_file(path)?;
        }

        Ok(logging)
    }

    pub fn set_log_file(&mut self, path: String) -> Result<String, Box<dyn std::error::Error>> {
        // Test if we can create/write to the file
        self.test_file_access(&path)?;

        self.file_path = Some(path.clone());
        self.is_active = true;

        Ok(format!("Logging enabled to: {path}"))
    }

    pub fn toggle_logging(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        match &self.file_path {
            Some(path) => {
                self.is_active = !self.is_active;
                if self.is_active {
                    Ok(format!("Logging resumed to: {path}"))
                } else {
                    Ok(format!("Logging paused (file: {path})"))
                }
            }
            None => {
                Err("No log file specified. Use /log <filename> to enable logging first.".into())
            }
        }
    }

    pub fn log_message(&self, content: &str) -> Result<(), Box<dyn std::error::Error>> {
        let Some(file_path) = self.file_path.as_ref().filter(|_| self.is_active) else {
            return Ok(());
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;
        let mut writer = BufWriter::new(file);

        // Write each line of content, preserving the exact formatting, then
        // an empty line for spacing (matching screen display).
        for line in content.lines() {
            writeln!(writer, "{line}")?;
        }
        writeln!(writer)?;

        writer.flush()?;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn get_status_string(&self) -> String {
        match (&self.file_path, self.is_active) {
            (None, _) => "disabled".to_string(),
            (Some(path), true) => format!(
                "active ({})",
                Path::new(path)
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
            ),
            (Some(path), false) => format!(
                "paused ({})",
                Path::new(path)
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
            ),
        }
    }

    fn test_file_access(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_without_file_is_an_error() {
        let mut logging = LoggingState::new(None).unwrap();
        assert!(logging.toggle_logging().is_err());
        assert_eq!(logging.get_status_string(), "disabled");
    }

    #[test]
    fn log_message_appends_with_spacing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.log");
        let path_str = path.to_string_lossy().to_string();

        let mut logging = LoggingState::new(None).unwrap();
        logging.set_log_file(path_str).unwrap();
        logging.log_message("You: hello").unwrap();
        logging.log_message("hi there").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "You: hello\n\nhi there\n\n");
    }

    #[test]
    fn paused_logging_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.log");
        let path_str = path.to_string_lossy().to_string();

        let mut logging = LoggingState::new(Some(path_str)).unwrap();
        assert!(logging.is_active());
        logging.toggle_logging().unwrap();
        logging.log_message("dropped").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.is_empty());
    }
}
