// src/handlers/mod.rs

pub mod admin;
pub mod community;
pub mod interaction;
pub mod presence;
pub mod session;
