//! depender-render library — issue dependency crawling and graph rendering.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
