//! Destination-name policy.
//!
//! Picks the output stem for each file. Priority order: videos always keep
//! their original stem; images get a timestamp-derived name when auto-rename
//! is on; everything else takes the custom name when one was supplied, or
//! falls back to the original stem.

use std::path::Path;

use chrono::{DateTime, Local};

use crate::model::{FileCategory, RenamePattern, SourceFile};

/// Run-scoped counter for auto-renamed images.
///
/// The sequence starts at 01 and advances only when an image actually takes
/// the rename branch, so names stay distinct even if the clock doesn't move
/// between files.
pub(crate) struct NameAllocator {
    next_seq: u32,
}

impl NameAllocator {
    pub(crate) fn new() -> Self {
        NameAllocator { next_seq: 1 }
    }

    pub(crate) fn allocate(&mut self, pattern: RenamePattern) -> String {
        let name = timestamp_name(pattern, Local::now(), self.next_seq);
        self.next_seq += 1;
        name
    }
}

/// Format a timestamp-derived stem: `YYYYMMDDHHMMSS_NN`, with three digits of
/// milliseconds spliced in before the separator for the millisecond pattern.
pub(crate) fn timestamp_name(pattern: RenamePattern, now: DateTime<Local>, seq: u32) -> String {
    match pattern {
        RenamePattern::Seconds => format!("{}_{:02}", now.format("%Y%m%d%H%M%S"), seq),
        RenamePattern::Milliseconds => format!("{}_{:02}", now.format("%Y%m%d%H%M%S%3f"), seq),
    }
}

/// Apply the naming policy for one source file.
pub(crate) fn choose_name(
    source: &SourceFile,
    category: FileCategory,
    auto_rename_images: bool,
    pattern: RenamePattern,
    alloc: &mut NameAllocator,
) -> String {
    if category == FileCategory::Video {
        return stem_of(&source.path);
    }
    if category == FileCategory::Image && auto_rename_images {
        return alloc.allocate(pattern);
    }
    match &source.custom_name {
        Some(name) => name.clone(),
        None => stem_of(&source.path),
    }
}

/// Base name without extension.
pub(crate) fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Lowercased extension without the dot; empty when there is none.
pub(crate) fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Timelike;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 9, 14, 30, 5).unwrap()
    }

    #[test]
    fn test_second_pattern_format() {
        assert_eq!(
            timestamp_name(RenamePattern::Seconds, fixed_now(), 1),
            "20250309143005_01"
        );
        assert_eq!(
            timestamp_name(RenamePattern::Seconds, fixed_now(), 12),
            "20250309143005_12"
        );
    }

    #[test]
    fn test_millisecond_pattern_format() {
        let now = fixed_now().with_nanosecond(123_000_000).unwrap();
        assert_eq!(
            timestamp_name(RenamePattern::Milliseconds, now, 3),
            "20250309143005123_03"
        );
    }

    #[test]
    fn test_allocator_increments_per_call() {
        let mut alloc = NameAllocator::new();
        let first = alloc.allocate(RenamePattern::Seconds);
        let second = alloc.allocate(RenamePattern::Seconds);
        assert!(first.ends_with("_01"));
        assert!(second.ends_with("_02"));
    }

    #[test]
    fn test_video_keeps_stem_over_everything() {
        let source = SourceFile::with_name("/tmp/holiday.mp4", "renamed");
        let mut alloc = NameAllocator::new();
        let name = choose_name(
            &source,
            FileCategory::Video,
            true,
            RenamePattern::Seconds,
            &mut alloc,
        );
        assert_eq!(name, "holiday");
    }

    #[test]
    fn test_image_rename_only_when_enabled() {
        let source = SourceFile::new("/tmp/photo.jpg");
        let mut alloc = NameAllocator::new();
        let renamed = choose_name(
            &source,
            FileCategory::Image,
            true,
            RenamePattern::Seconds,
            &mut alloc,
        );
        assert!(renamed.ends_with("_01"));
        assert_ne!(renamed, "photo");

        let kept = choose_name(
            &source,
            FileCategory::Image,
            false,
            RenamePattern::Seconds,
            &mut alloc,
        );
        assert_eq!(kept, "photo");
    }

    #[test]
    fn test_custom_name_wins_for_documents() {
        let source = SourceFile::with_name("/tmp/draft.txt", "notes");
        let mut alloc = NameAllocator::new();
        let name = choose_name(
            &source,
            FileCategory::Document,
            true,
            RenamePattern::Seconds,
            &mut alloc,
        );
        assert_eq!(name, "notes");
    }

    #[test]
    fn test_stem_and_extension_helpers() {
        assert_eq!(stem_of(Path::new("/a/b/PHOTO.JPG")), "PHOTO");
        assert_eq!(extension_of(Path::new("/a/b/PHOTO.JPG")), "jpg");
        assert_eq!(stem_of(Path::new("/a/b/noext")), "noext");
        assert_eq!(extension_of(Path::new("/a/b/noext")), "");
    }
}
