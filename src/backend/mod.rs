pub mod editor;
pub mod error;
pub mod export;
pub mod grid;
pub mod loader;
pub mod parser;
pub mod settings;
pub mod writer;
