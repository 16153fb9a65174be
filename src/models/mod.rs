// src/models/mod.rs

pub mod assessment;
pub mod contact;
