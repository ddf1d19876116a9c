pub mod browse;
pub mod config;
pub mod consts;
pub mod error;
pub mod export;
pub mod format;
pub mod method;
pub mod persist;
pub mod result;
pub mod service;
pub mod switch;
pub mod upload;
