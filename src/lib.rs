pub mod calendar;
pub mod cmds;
pub mod config;
pub mod events;
pub mod holiday;
pub mod insight;
pub mod ui;
