use crate::cli::run;

pub mod cli;
mod config;
pub mod domain;

fn main() {
    run();
}
