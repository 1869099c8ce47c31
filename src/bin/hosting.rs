//! Tournament Host Binary
//!
//! Serves player and commander WebSockets for one live pass/take
//! tournament. All state is in memory; settled games and scores are
//! journaled under `--records`.

use centipede::lobby::*;
use centipede::matching::Policy;
use centipede::payoff::Escalation;
use centipede::records::*;
use centipede::tournament::Mode;
use centipede::*;
use clap::Parser;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about = "Host a live pass/take tournament", long_about = None)]
struct Args {
    /// Address to serve on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8080")]
    bind: String,
    /// `fixed` round-robin or `dynamic` rematching.
    #[arg(long, default_value = "fixed")]
    mode: String,
    /// Fixed schedule: `circle` or `strangers`.
    #[arg(long, default_value = "circle")]
    schedule: String,
    /// Payoff escalation: `linear` or `exponential`.
    #[arg(long, default_value = "linear")]
    payoff: String,
    /// Chance a continue is logged as a bonus continue.
    #[arg(long, default_value_t = BONUS_PROBABILITY)]
    bonus: Probability,
    /// Seed for shuffles and bonus draws.
    #[arg(long)]
    seed: Option<u64>,
    /// Directory for the game journal and score file.
    #[arg(long, default_value = "logs")]
    records: std::path::PathBuf,
    /// Keep records in memory only.
    #[arg(long)]
    ephemeral: bool,
}

impl TryFrom<&Args> for Config {
    type Error = anyhow::Error;
    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        Config {
            mode: Mode::try_from(args.mode.as_str()).map_err(anyhow::Error::msg)?,
            policy: Policy::try_from(args.schedule.as_str()).map_err(anyhow::Error::msg)?,
            escalation: Escalation::try_from(args.payoff.as_str()).map_err(anyhow::Error::msg)?,
            bonus: args.bonus,
            seed: args.seed,
            ..Config::default()
        }
        .validate()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log()?;
    kys();
    let config = Config::try_from(&args)?;
    let recorder: Arc<dyn Recorder> = match args.ephemeral {
        true => Arc::new(Memory::default()),
        false => Arc::new(Journal::new(&args.records)?),
    };
    hosting::Server::run(&args.bind, Host::new(config, recorder)).await?;
    Ok(())
}
