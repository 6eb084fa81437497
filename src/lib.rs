pub mod actors;
pub mod audio;
pub mod compute;
pub mod config;
pub mod entities;
pub mod level;
pub mod physics;
