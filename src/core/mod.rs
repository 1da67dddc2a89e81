// src/core/mod.rs

pub mod html;
pub mod lines;
pub mod net;
pub mod sanitize;
pub mod tokens;
