use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use csrgen::config::Config;
use csrgen::key::KeyPair;
use csrgen::request::{SigningRequest, params::RequestParams};

#[derive(Parser)]
#[command(name = "csrgen", version, about = "Generate an RSA key and a PKCS#10 CSR from a TOML config")]
struct Args {
    /// Path to the TOML configuration file
    config: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = Config::from_file(&args.config)?;
    debug!("loaded configuration for {}", config.common_name());

    let key_pair = KeyPair::generate(config.key_size())?;
    debug!("generated {}-bit RSA key pair", key_pair.bits());

    let key_path = config.key_path();
    std::fs::write(&key_path, key_pair.to_pkcs1_pem()?)
        .with_context(|| format!("Failed to write {}", key_path.display()))?;
    println!("Key written to {}", key_path.display());

    let request = SigningRequest::build(&RequestParams::from_config(&config), &key_pair)?;
    debug!("signed request for {} SAN entries", config.dns_names().len());

    let csr_path = config.csr_path();
    std::fs::write(&csr_path, request.to_pem()?)
        .with_context(|| format!("Failed to write {}", csr_path.display()))?;
    println!("CSR written to {}", csr_path.display());

    Ok(())
}
