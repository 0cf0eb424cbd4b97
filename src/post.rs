use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::post_list::POST_EXTENSION;

const DATE_SEPARATOR: char = '_';

/// One line of the index. Field order is the key order in the JSON output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PostEntry {
    pub date: String,
    pub title: String,
    pub filename: String,
}

impl Display for PostEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "date={}, title={}, filename={}", self.date, self.title, self.filename)
    }
}

/// Example of post file name
/// 2024-05-01_My First Post.txt
///
/// Everything before the first underscore is the date, the rest is the title.
/// The date is not validated, any text is accepted.
impl PostEntry {
    pub fn from_file_name(file_name: &str) -> Option<PostEntry> {
        let stem = file_name.strip_suffix(POST_EXTENSION).unwrap_or(file_name);
        let (date, title) = stem.split_once(DATE_SEPARATOR)?;

        Some(PostEntry {
            date: date.trim().to_string(),
            title: title.trim().to_string(),
            filename: file_name.to_string(),
        })
    }
}
