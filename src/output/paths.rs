// src/output/paths.rs
//! Pure functions for file naming. No I/O happens here.

use crate::constants::FILE_NAME_ID_PREFIX_LEN;
use crate::types::PageId;
use chrono::{DateTime, FixedOffset};
use std::path::{Path, PathBuf};

/// `YYYYMMDD_HHMM-<id prefix>.md`, in the timestamp's own offset.
///
/// The id prefix keeps two moments created in the same minute apart.
pub fn moment_file_name(created_time: &DateTime<FixedOffset>, page_id: &PageId) -> String {
    format!(
        "{}-{}.md",
        created_time.format("%Y%m%d_%H%M"),
        page_id.short(FILE_NAME_ID_PREFIX_LEN)
    )
}

pub fn moment_path(output_dir: &Path, file_name: &str) -> PathBuf {
    output_dir.join(file_name)
}
