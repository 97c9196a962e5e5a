use std::path::Path;

pub mod rapp;

pub use rapp::RappDecoration;

/// Trait for the fixed comment blocks wrapped around a file
pub trait Decoration {
    /// Lines placed at the top of the file, each with its own terminator
    fn header(&self, display_name: &str) -> Vec<String>;

    /// Lines placed after the original content, each with its own terminator
    fn trailer(&self) -> Vec<String>;
}

/// Name shown in the header: the final path segment, never the directories
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
