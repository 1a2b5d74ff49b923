/// Options for the file-level compress/decompress helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Extension given to decompressed files, including the dot
    pub extension: String,
    /// Log elapsed wall-clock time of each operation at info level
    pub report_time: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            extension: ".txt".to_string(),
            report_time: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the decompressed-file extension; a missing leading dot is added.
    pub fn with_extension<S: Into<String>>(mut self, extension: S) -> Self {
        let extension = extension.into();
        self.extension = if extension.is_empty() || extension.starts_with('.') {
            extension
        } else {
            format!(".{extension}")
        };
        self
    }

    pub fn with_report_time(mut self, report_time: bool) -> Self {
        self.report_time = report_time;
        self
    }
}
