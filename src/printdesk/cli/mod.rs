mod commands;
mod logging;
mod print;
mod prompt;
mod setup;

pub use commands::run;
