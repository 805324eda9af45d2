//! File type descriptor for nlang sources.

use std::path::Path;

/// Describes a language file type for editor registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileType {
    pub name: &'static str,
    pub description: &'static str,
    /// Extension without the leading dot
    pub default_extension: &'static str,
}

/// The nlang file type
pub const NLANG_FILE_TYPE: FileType = FileType {
    name: "nlang file",
    description: "nlang language file",
    default_extension: "n",
};

impl FileType {
    /// Check if `path` carries this file type's extension.
    pub fn matches_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.default_extension)
    }
}
