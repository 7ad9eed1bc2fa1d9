// src/lib.rs
pub mod colors;
pub mod config;
pub mod error;
pub mod fragment;
pub mod level;
pub mod logger;

pub use error::*;

pub use colors::{Color, ColorWrap, RESET};
pub use config::LoggerConfig;
pub use fragment::Fragment;
pub use level::{Level, Stream};
pub use logger::{format_line, Logger};
