use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use spdlog::info;

use crate::post_list::POST_EXTENSION;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

pub fn post_file_name(date: &str, title: &str) -> String {
    format!("{}_{}{}", date, title, POST_EXTENSION)
}

fn has_separator(value: &str) -> bool {
    value.contains('/') || value.contains('\\')
}

fn validate(date: &str, title: &str) -> io::Result<()> {
    if title.is_empty() {
        return Err(io::Error::new(ErrorKind::InvalidInput, "Post title is required"));
    }
    if has_separator(title) {
        return Err(io::Error::new(ErrorKind::InvalidInput, format!("Post title cannot contain path separators: {}", title)));
    }
    // The first underscore ends the date, so the date itself cannot have one
    if date.is_empty() || date.contains('_') || has_separator(date) {
        return Err(io::Error::new(ErrorKind::InvalidInput, format!("Invalid post date: {}", date)));
    }
    Ok(())
}

/// Creates `<posts_dir>/<date>_<title>.txt` with the title as its first line.
/// An existing post with the same name is left untouched.
pub fn create_post(posts_dir: &Path, date: &str, title: &str) -> io::Result<PathBuf> {
    let date = date.trim();
    let title = title.trim();
    validate(date, title)?;

    fs::create_dir_all(posts_dir)?;
    let full_path = posts_dir.join(post_file_name(date, title));

    let mut file = match OpenOptions::new().write(true).create_new(true).open(&full_path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(io::Error::new(e.kind(), format!("Post already exists: {}", full_path.display())));
        }
        Err(e) => return Err(e),
    };
    writeln!(file, "{}", title)?;
    writeln!(file)?;

    info!("Created post {}", full_path.display());
    Ok(full_path)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use crate::post::PostEntry;

    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(post_file_name("2024-05-01", "My First Post"), "2024-05-01_My First Post.txt");
    }

    #[test]
    fn test_today_format() {
        let today = today();
        assert!(NaiveDate::parse_from_str(&today, DATE_FORMAT).is_ok());
    }

    #[test]
    fn test_create_post() -> io::Result<()> {
        let temp = TempDir::new()?;
        let posts_dir = temp.path().join("posts");

        let path = create_post(&posts_dir, "2024-05-01", "  My First Post ")?;
        assert_eq!(path, posts_dir.join("2024-05-01_My First Post.txt"));
        assert_eq!(fs::read_to_string(&path)?, "My First Post\n\n");

        let file_name = path.file_name().unwrap().to_str().unwrap();
        let entry = PostEntry::from_file_name(file_name).unwrap();
        assert_eq!(entry.date, "2024-05-01");
        assert_eq!(entry.title, "My First Post");
        Ok(())
    }

    #[test]
    fn test_never_overwrites() -> io::Result<()> {
        let temp = TempDir::new()?;
        let path = create_post(temp.path(), "2024-05-01", "Post")?;
        fs::write(&path, "edited")?;

        let err = create_post(temp.path(), "2024-05-01", "Post").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&path)?, "edited");
        Ok(())
    }

    #[test]
    fn test_invalid_input() {
        let temp = TempDir::new().unwrap();
        for (date, title) in [("2024-05-01", "  "), ("2024-05-01", "../escape"), ("2024_05_01", "Post"), ("", "Post")] {
            let err = create_post(temp.path(), date, title).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "date={} title={}", date, title);
        }
    }
}
