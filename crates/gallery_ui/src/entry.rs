//! A single listing entry.

use gallery_host::{child_path, thumbnail_url, GalleryConfig, HistoryBridge};

use crate::view::LinkActivation;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Visual shown before the entry name.
pub enum EntryKind {
    /// Folder icon; clicks navigate in-page.
    Directory {
        /// Folder icon image source.
        icon_src: String,
    },
    /// Server-rendered preview; clicks follow the link to the file.
    File {
        /// Thumbnail image source.
        thumbnail_src: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Render model for one entry of a directory listing.
pub struct EntryView {
    /// Directory path the entry was listed under.
    pub path: String,
    /// Entry name, shown after the icon.
    pub filename: String,
    /// Link target: the directory path joined with the name.
    pub href: String,
    /// Folder or file visual.
    pub kind: EntryKind,
}

impl EntryView {
    /// Builds the entry for `filename` inside the directory at `path`.
    pub fn new(path: &str, filename: &str, is_dir: bool, config: &GalleryConfig) -> Self {
        let kind = if is_dir {
            EntryKind::Directory {
                icon_src: config.folder_icon_src.clone(),
            }
        } else {
            EntryKind::File {
                thumbnail_src: thumbnail_url(path, filename, &config.thumbnail_query),
            }
        };
        Self {
            path: path.to_string(),
            filename: filename.to_string(),
            href: child_path(path, filename),
            kind,
        }
    }

    /// Returns `true` for directory entries.
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory { .. })
    }

    /// Handles a click on the entry link.
    ///
    /// Directories navigate through `history`; files are left to the browser.
    pub fn activate(&self, history: &dyn HistoryBridge) -> LinkActivation {
        if self.is_dir() {
            history.navigate(&self.href);
            LinkActivation::Intercepted
        } else {
            LinkActivation::FollowLink
        }
    }
}
