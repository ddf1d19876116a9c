pub mod clear;
pub mod compress;
pub mod config;
pub mod export;
pub mod health;
pub mod levels;
pub mod methods;
pub mod select;
pub mod show;
pub mod switch;
