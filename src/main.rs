//! Reflect (RF) chain parameter tool
//!
//! Builds and self-checks every network profile, selects one, and prints
//! it. Exits non-zero if the compiled-in constants fail their checks.

use clap::Parser;
use rf_params::chainparams::Base58Type;
use rf_params::constants::{CHAIN_FULL_NAME, CHAIN_NAME, DEFAULT_LOG_FILTER, NETWORK_ENV_VAR};
use rf_params::node::GenesisInfo;
use rf_params::{ActiveNetwork, NetworkError, NetworkId, NetworkProfile};
use tracing_subscriber::EnvFilter;

/// Print the chain parameters of one Reflect network
#[derive(Parser, Debug)]
#[command(name = "rf-params", version)]
struct Cli {
    /// Network name: main, test or regtest (mainnet, testnet, testnet3 also accepted)
    #[arg(env = NETWORK_ENV_VAR, conflicts_with_all = ["testnet", "regtest"])]
    network: Option<String>,

    /// Use the public test network
    #[arg(long, conflicts_with = "regtest")]
    testnet: bool,

    /// Use the local regression-test network
    #[arg(long)]
    regtest: bool,

    /// Print the selected profile as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Explicit name (or `RF_NETWORK`), then switches, then main
    fn network_name(&self) -> Result<String, NetworkError> {
        match &self.network {
            Some(name) => Ok(name.clone()),
            None => Ok(NetworkId::from_flags(self.testnet, self.regtest)?.to_string()),
        }
    }
}

fn print_profile(profile: &NetworkProfile) {
    let consensus = &profile.consensus;
    let genesis = GenesisInfo::from(&profile.genesis);
    let reward: i64 = profile
        .genesis
        .transactions
        .iter()
        .map(|tx| tx.total_output_value())
        .sum();

    println!("{} ({}) network: {}", CHAIN_FULL_NAME, CHAIN_NAME, profile.network);
    println!("  Genesis:       {}", genesis.hash);
    println!("  Merkle Root:   {}", genesis.merkle_root);
    println!(
        "  Genesis Time:  {} (nonce {}, bits {:#010x}, reward {})",
        genesis.timestamp, genesis.nonce, genesis.bits, reward
    );
    println!("  Magic:         {}", hex::encode(profile.message_start));
    println!("  Port:          {}", profile.default_port);
    println!(
        "  Address:       pubkey {:?} script {:?} secret {:?}",
        profile.base58_prefix(Base58Type::PubkeyAddress),
        profile.base58_prefix(Base58Type::ScriptAddress),
        profile.base58_prefix(Base58Type::SecretKey)
    );
    println!("  Cashaddr:      {}", profile.cashaddr_prefix);
    println!("  Last PoW:      {}", consensus.last_pow_block);
    println!("  Maturity:      {}", consensus.coinbase_maturity);
    println!("  Retarget:      {} blocks", consensus.difficulty_adjustment_interval());
    println!("  DNS Seeds:     {}", profile.dns_seeds.len());
    println!("  Checkpoints:   {}", profile.checkpoints.checkpoints.len());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Integrity failures end the process here
    let network = ActiveNetwork::bootstrap()?;
    let profile = network.select(&cli.network_name()?)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(profile)?);
    } else {
        print_profile(profile);
    }

    Ok(())
}
