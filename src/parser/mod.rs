pub mod keyword_parser;

pub use keyword_parser::KeywordParser;
