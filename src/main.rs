use clap::Parser as _;

use vidtree::runtime::{self, Args};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    runtime::run(Args::parse())
}
