// src/main.rs
use anyhow::Result;
use bookbot::Args;
use clap::Parser as _;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    bookbot::run(args)
}
