//! Background Tasks Module
//!
//! Contains background tasks that run alongside request handling.
//!
//! # Tasks
//! - TTL Reaper: removes idle cache entries at half-TTL intervals

mod reaper;

pub use reaper::{spawn_reaper_task, ReaperHandle};
