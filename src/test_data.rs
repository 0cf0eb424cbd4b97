#[cfg(test)]
pub const POST_FILE_NAMES: [&str; 5] = [
    "2024-05-01_My First Post.txt",
    "2024-01-01_Part_One.txt",
    "2023-12-31_회고.txt",
    "2024-03-15_Spring notes.txt",
    "note.txt",
];
