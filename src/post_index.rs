use std::{fs, io};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use crate::post::PostEntry;

const JSON_INDENT: &[u8] = b"    ";

#[derive(Default)]
pub struct PostIndex {
    pub posts: Vec<PostEntry>,
}

impl PostIndex {
    pub fn new() -> PostIndex {
        PostIndex::default()
    }

    pub fn add(&mut self, post: PostEntry) {
        self.posts.push(post);
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Newest first. Dates are compared as plain strings, so "2024-2-1" and
    /// "2024-02-01" do not sort chronologically. Ties keep insertion order.
    pub fn sort(&mut self) {
        self.posts.sort_by(|a, b| b.date.cmp(&a.date));
    }

    pub fn to_json(&self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        self.posts.serialize(&mut serializer)?;
        Ok(buf)
    }

    /// Replaces whatever is at `output_path`
    pub fn write_to(&self, output_path: &Path) -> io::Result<()> {
        let json = self.to_json()?;
        fs::write(output_path, json)
    }
}
