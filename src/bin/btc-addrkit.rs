//! Command line front end: generate keys and print the addresses of public keys.

use btc_addrkit::{
    address::{Address, AddressType},
    error::Error,
    key::{PrivKey, PubKey},
    script::RedeemScript,
    util::Network,
};
use clap::{ArgAction, Parser, Subcommand};
use log::debug;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "btc-addrkit", version, about = "Bitcoin keys and addresses for mainnet and testnet")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new private key and print its WIF and addresses
    Generate {
        #[arg(short, long, default_value_t = Network::Bitcoin)]
        network: Network,
        /// Use the uncompressed public key (P2PKH and P2SH only)
        #[arg(long)]
        uncompressed: bool,
        #[arg(long)]
        json: bool,
    },
    /// Derive an address from a hex encoded public key
    Address {
        #[arg(long)]
        pubkey: String,
        #[arg(short = 't', long = "type", default_value_t = AddressType::P2WPKH)]
        address_type: AddressType,
        #[arg(short, long, default_value_t = Network::Bitcoin)]
        network: Network,
        #[arg(long)]
        json: bool,
    },
    /// Derive an m-of-n multisig address, n is the number of keys given
    Multisig {
        #[arg(short)]
        m: u8,
        /// Compressed public key in hex, repeat for every cosigner in order
        #[arg(short, long = "key", required = true)]
        keys: Vec<String>,
        #[arg(short = 't', long = "type", default_value_t = AddressType::P2WSH)]
        address_type: AddressType,
        #[arg(short, long, default_value_t = Network::Bitcoin)]
        network: Network,
        #[arg(long)]
        json: bool,
    },
    /// Decode a WIF private key and print its addresses
    Wif {
        #[arg(long)]
        wif: String,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct AddressEntry {
    #[serde(rename = "type")]
    address_type: AddressType,
    address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    derivation_path: Option<String>,
}

#[derive(Serialize)]
struct Report {
    network: Network,
    #[serde(skip_serializing_if = "Option::is_none")]
    private_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wif: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    redeem_script: Option<String>,
    addresses: Vec<AddressEntry>,
}

impl Report {
    fn new(network: Network) -> Self {
        Self {
            network,
            private_key: None,
            wif: None,
            public_key: None,
            redeem_script: None,
            addresses: Vec::new(),
        }
    }

    fn push(&mut self, address_type: AddressType, address: String) {
        self.addresses.push(AddressEntry {
            derivation_path: address_type.derivation_path(self.network),
            address_type,
            address,
        });
    }

    fn print(&self, json: bool) -> Result<(), Box<dyn std::error::Error>> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
            return Ok(());
        }

        println!("Network:        {}", self.network);
        if let Some(k) = &self.private_key {
            println!("Private key:    {}", k);
        }
        if let Some(w) = &self.wif {
            println!("WIF:            {}", w);
        }
        if let Some(p) = &self.public_key {
            println!("Public key:     {}", p);
        }
        if let Some(s) = &self.redeem_script {
            println!("Redeem script:  {}", s);
        }
        for entry in &self.addresses {
            println!("{:<15} {}", format!("{}:", entry.address_type), entry.address);
        }
        Ok(())
    }
}

fn key_report(k: &PrivKey, pk: &PubKey, network: Network) -> btc_addrkit::error::Result<Report> {
    let mut report = Report::new(network);
    report.private_key = Some(k.to_string());
    report.wif = Some(k.export_as_wif(pk.is_compressed(), network));
    report.public_key = Some(pk.as_hex());
    for (address_type, address) in Address::all(pk, network)? {
        report.push(address_type, address);
    }
    Ok(report)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Generate { network, uncompressed, json } => {
            let k = PrivKey::new_rand()?;
            let pk = PubKey::from_priv_key(&k, !uncompressed)?;
            key_report(&k, &pk, network)?.print(json)
        }
        Commands::Address { pubkey, address_type, network, json } => {
            let pk = PubKey::from_hex(&pubkey)?;
            let mut report = Report::new(network);
            report.public_key = Some(pk.as_hex());
            report.push(address_type, Address::derive(&pk, address_type, network)?);
            report.print(json)
        }
        Commands::Multisig { m, keys, address_type, network, json } => {
            let keys = keys
                .iter()
                .map(|k| PubKey::from_hex(k))
                .collect::<btc_addrkit::error::Result<Vec<PubKey>>>()?;
            if keys.len() > u8::MAX as usize {
                return Err(Error::InvalidMultisigParams(format!("{} keys given", keys.len())).into());
            }
            let n = keys.len() as u8;
            debug!("{} cosigner keys parsed", n);

            let mut report = Report::new(network);
            report.redeem_script = Some(RedeemScript::multisig(m, n, &keys)?.as_hex());
            report.push(address_type, Address::derive_multisig(m, n, &keys, address_type, network)?);
            report.print(json)
        }
        Commands::Wif { wif, json } => {
            let (k, compressed, network) = PrivKey::from_wif(&wif)?;
            let pk = PubKey::from_priv_key(&k, compressed)?;
            key_report(&k, &pk, network)?.print(json)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = stderrlog::new()
        .module(module_path!())
        .verbosity(1 + cli.verbose as usize)
        .init()
    {
        eprintln!("Error: cannot install logger: {}", e);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
