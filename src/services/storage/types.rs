//! Entry types returned by storage listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a listed entry is a real object or a synthesized folder.
///
/// Folders are common-prefix groups returned by the listing call; no real
/// folder objects exist in the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Folder,
}

/// One listed object (file) or common prefix (folder) in the bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectEntry {
    /// Full key of the entry. Folder keys end with a slash.
    pub key: String,
    pub kind: EntryKind,
    /// Size in bytes. Files only.
    pub size: Option<u64>,
    /// Last modified timestamp. Files only.
    pub last_modified: Option<DateTime<Utc>>,
}

impl ObjectEntry {
    /// Create a file entry.
    pub fn file(key: String, size: u64, last_modified: Option<DateTime<Utc>>) -> Self {
        Self {
            key,
            kind: EntryKind::File,
            size: Some(size),
            last_modified,
        }
    }

    /// Create a folder entry from a common prefix.
    pub fn folder(key: String) -> Self {
        Self {
            key,
            kind: EntryKind::Folder,
            size: None,
            last_modified: None,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    /// Last path segment of the key, without the trailing slash for folders.
    pub fn name(&self) -> &str {
        self.key
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(&self.key)
    }

    /// Get a human-readable size string.
    pub fn size_display(&self) -> String {
        match self.size {
            Some(bytes) if bytes >= 1_073_741_824 => {
                format!("{:.1} GB", bytes as f64 / 1_073_741_824.0)
            }
            Some(bytes) if bytes >= 1_048_576 => {
                format!("{:.1} MB", bytes as f64 / 1_048_576.0)
            }
            Some(bytes) if bytes >= 1024 => {
                format!("{:.1} KB", bytes as f64 / 1024.0)
            }
            Some(bytes) => format!("{} B", bytes),
            None => "-".to_string(),
        }
    }

    /// Get the file extension if any.
    pub fn extension(&self) -> Option<&str> {
        if self.is_folder() {
            return None;
        }
        self.name().rsplit_once('.').map(|(_, ext)| ext)
    }

    /// Check if this is an image file (rendered inline by the preview dialog).
    pub fn is_image(&self) -> bool {
        match self.extension() {
            Some(ext) => matches!(
                ext.to_lowercase().as_str(),
                "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "ico" | "bmp"
            ),
            None => false,
        }
    }

    /// Check if this is a previewable file type.
    pub fn is_previewable(&self) -> bool {
        if self.is_image() {
            return true;
        }
        match self.extension() {
            Some(ext) => matches!(
                ext.to_lowercase().as_str(),
                "txt" | "json" | "yaml" | "yml" | "toml" | "md" | "csv" | "xml" | "html" | "log"
            ),
            None => false,
        }
    }
}

/// Sort entries the way listings are presented: folders first, then by name.
pub fn sort_entries(entries: &mut [ObjectEntry]) {
    entries.sort_by(|a, b| match (a.is_folder(), b.is_folder()) {
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        _ => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_name() {
        let file = ObjectEntry::file("photos/cat.jpg".to_string(), 1000, None);
        assert_eq!(file.name(), "cat.jpg");

        let folder = ObjectEntry::folder("photos/2024/".to_string());
        assert_eq!(folder.name(), "2024");

        let root_file = ObjectEntry::file("readme.txt".to_string(), 120, None);
        assert_eq!(root_file.name(), "readme.txt");
    }

    #[test]
    fn test_size_display() {
        let small = ObjectEntry::file("a".to_string(), 500, None);
        assert_eq!(small.size_display(), "500 B");

        let medium = ObjectEntry::file("a".to_string(), 1_500_000, None);
        assert_eq!(medium.size_display(), "1.4 MB");

        let folder = ObjectEntry::folder("a/".to_string());
        assert_eq!(folder.size_display(), "-");
    }

    #[test]
    fn test_extension_and_preview() {
        let image = ObjectEntry::file("photos/cat.JPG".to_string(), 1, None);
        assert_eq!(image.extension(), Some("JPG"));
        assert!(image.is_image());
        assert!(image.is_previewable());

        let text = ObjectEntry::file("notes.md".to_string(), 1, None);
        assert!(!text.is_image());
        assert!(text.is_previewable());

        let folder = ObjectEntry::folder("photos/".to_string());
        assert_eq!(folder.extension(), None);
        assert!(!folder.is_previewable());

        let no_ext = ObjectEntry::file("Makefile".to_string(), 1, None);
        assert_eq!(no_ext.extension(), None);
    }

    #[test]
    fn test_sort_folders_first() {
        let mut entries = vec![
            ObjectEntry::file("zebra.txt".to_string(), 1, None),
            ObjectEntry::folder("beta/".to_string()),
            ObjectEntry::file("alpha.txt".to_string(), 1, None),
            ObjectEntry::folder("Alpha/".to_string()),
        ];
        sort_entries(&mut entries);

        let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["Alpha/", "beta/", "alpha.txt", "zebra.txt"]);
    }
}
