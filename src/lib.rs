pub mod config;
pub mod domain;
pub mod parser;
pub mod writer;
