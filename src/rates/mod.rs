// src/rates/mod.rs

pub mod derivation;
