//! The browser-facing side effects the controller needs.

/// A file handed to the host for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub content_type: String,
    pub content: String,
}

pub trait UiHost {
    /// Blocking, user-visible message.
    fn alert(&mut self, message: &str);
    fn show_loading(&mut self, text: &str);
    fn hide_loading(&mut self);
    fn download(&mut self, file: ExportFile);
}
