// src/model/mod.rs

pub mod progress;
pub mod schedule;
