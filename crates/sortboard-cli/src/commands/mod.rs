pub mod config;
pub mod items;
pub mod run;
pub mod simulate;
