pub mod output;
pub mod show;
