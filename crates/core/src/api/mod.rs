//! Public conversion API.

pub mod high_level;
