pub mod audio;
pub mod collision;
pub mod compute;
pub mod dispatch;
pub mod display;
pub mod entities;
pub mod events;
pub mod geometry;
pub mod input;
pub mod physics;
pub mod spawn;
