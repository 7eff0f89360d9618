// Library for tests to access modules

pub mod check;
pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod evaluator;
pub mod fetcher;
pub mod models;
pub mod report;
pub mod version;
