pub mod config;
pub mod logger;
pub mod post;
pub mod post_list;
pub mod post_index;
pub mod post_file;
pub mod index_builder;
mod test_data;
