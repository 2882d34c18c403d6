//! Input handling module

pub mod file_reader;
pub mod walker;

pub use file_reader::FileReader;
pub use walker::collect_text_files;
