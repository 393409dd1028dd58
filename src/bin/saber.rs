//! `saber`: run one SABER key exchange and report whether both sides agree.
//!
//! ```text
//! saber --version fire --mu 6
//! RUST_LOG=saber_kem=trace saber
//! ```

use std::process::ExitCode;

use clap::Parser;
use rand::rngs::OsRng;
use rand::RngCore;
use saber::kem::{SaberCpaPke, SaberKem};
use saber::params::Variant;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "saber", about = "SABER key encapsulation demo", disable_version_flag = true)]
struct Args {
    /// Security level: light, default or fire
    #[arg(short = 'v', long = "version", default_value = "light")]
    variant: Variant,

    /// Override the secret distribution width (even, below 2^EP)
    #[arg(long)]
    mu: Option<u32>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("saber=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

fn run(args: &Args) -> Result<bool, Box<dyn std::error::Error>> {
    let kem = match args.mu {
        Some(mu) => SaberKem::with_mu(args.variant, mu)?,
        None => SaberKem::from_variant(args.variant),
    };
    let params = kem.params();
    info!(variant = %args.variant, mu = params.mu, "parameters loaded");

    let mut rng = OsRng;
    let (pk, sk) = kem.keypair(&mut rng)?;
    let (ct, key1) = kem.encapsulate(&pk, &mut rng)?;
    let key2 = kem.decapsulate(&sk, &ct)?;
    let kem_ok = key1 == key2;

    println!("{} (MU = {})", params.name(), params.mu);
    println!("  public key:    {} bytes", pk.len());
    println!("  secret key:    {} bytes", sk.len());
    println!("  ciphertext:    {} bytes", ct.len());
    println!("  session key:   {} bytes", key1.len());
    println!("  keys agree:    {}", kem_ok);

    let pke = SaberCpaPke::new(*params)?;
    let (cpa_pk, cpa_sk) = pke.keypair(&mut rng)?;
    let mut message = [0u8; 32];
    let mut seed = [0u8; 32];
    rng.fill_bytes(&mut message);
    rng.fill_bytes(&mut seed);
    let cpa_ct = pke.encrypt(&cpa_pk, &message, &seed)?;
    let pke_ok = pke.decrypt(&cpa_sk, &cpa_ct)?[..] == message[..];

    println!("  CPA round trip: {}", pke_ok);
    Ok(kem_ok && pke_ok)
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            error!("round trip mismatch");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(error = %e, "saber run failed");
            ExitCode::FAILURE
        }
    }
}
