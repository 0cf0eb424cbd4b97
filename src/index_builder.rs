use std::fmt;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

use spdlog::{debug, info};

use crate::post::PostEntry;
use crate::post_index::PostIndex;
use crate::post_list::PostList;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    pub output_path: PathBuf,
    pub written: usize,
    /// .txt files without a date separator
    pub skipped: usize,
}

impl Display for IndexSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Successfully updated {} with {} posts.", self.output_path.display(), self.written)
    }
}

/// Rebuilds the index at `output_path` from the file names in `posts_dir`
/// and returns how many posts were written.
pub fn build_index(posts_dir: &Path, output_path: &Path) -> io::Result<usize> {
    let summary = build_index_summary(posts_dir, output_path)?;
    Ok(summary.written)
}

pub fn build_index_summary(posts_dir: &Path, output_path: &Path) -> io::Result<IndexSummary> {
    let post_list = PostList::new(posts_dir);
    post_list.ensure_dir()?;

    let mut index = PostIndex::new();
    let mut skipped = 0;
    for file_name in post_list.retrieve_files()? {
        match PostEntry::from_file_name(&file_name) {
            Some(post) => index.add(post),
            None => {
                debug!("Skipping {}: no date separator in file name", file_name);
                skipped += 1;
            }
        }
    }

    index.sort();
    index.write_to(output_path)?;

    info!("Indexed {} posts from {} into {} ({} skipped)",
        index.len(), posts_dir.display(), output_path.display(), skipped);

    Ok(IndexSummary {
        output_path: output_path.to_path_buf(),
        written: index.len(),
        skipped,
    })
}
