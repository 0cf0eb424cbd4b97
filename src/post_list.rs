use std::{fs, io};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use spdlog::debug;

pub const POST_EXTENSION: &str = ".txt";

pub struct PostList {
    pub root_dir: PathBuf,
}

impl PostList {
    pub fn new(root_dir: &Path) -> PostList {
        PostList {
            root_dir: root_dir.to_path_buf(),
        }
    }

    /// Creates the posts directory when it's missing, so a fresh checkout
    /// produces an empty index instead of failing
    pub fn ensure_dir(&self) -> io::Result<()> {
        if !self.root_dir.exists() {
            debug!("Creating posts directory {}", self.root_dir.display());
            fs::create_dir_all(&self.root_dir)?;
        }
        Ok(())
    }

    /// File names (not paths) of the post candidates, in directory listing order.
    /// A post whose name is not valid UTF-8 is an error, not a skip.
    pub fn retrieve_files(&self) -> io::Result<Vec<String>> {
        let mut posts = vec![];
        let entries = fs::read_dir(self.root_dir.as_path())?;
        for entry in entries {
            let entry = entry?;
            // Follows symlinks, so a link to a directory is not a post either
            if entry.path().is_dir() {
                continue;
            }
            let file_name = entry.file_name();
            if !file_name.to_string_lossy().ends_with(POST_EXTENSION) {
                continue;
            }
            match file_name.to_str() {
                Some(file_name) => posts.push(file_name.to_string()),
                None => return Err(io::Error::new(
                    ErrorKind::InvalidData, format!("Post file name is not valid UTF-8: {:?}", file_name))),
            }
        }
        Ok(posts)
    }
}
