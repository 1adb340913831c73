use clap::{Parser, Subcommand};

/// W2W — command-line client for the W2W wallet and blockchain daemons.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Daemon host, including the http:// or https:// scheme.
    #[arg(long, default_value = "http://127.0.0.1", env = "W2W_HOST")]
    pub host: String,

    /// Wallet RPC port (wallet service or wallet daemon).
    #[arg(long, default_value = "8070", env = "W2W_WALLET_PORT")]
    pub wallet_port: u16,

    /// Blockchain daemon RPC port.
    #[arg(long, default_value = "32348", env = "W2W_DAEMON_PORT")]
    pub daemon_port: u16,

    /// Per-request timeout in milliseconds.
    #[arg(long, default_value = "5000", env = "W2W_TIMEOUT_MS")]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // Wallet service
    /// Wallet balance.
    Balance,
    /// Wallet height.
    Height,
    /// Wallet outputs.
    Outputs,
    /// Wallet transfers.
    Transfers,
    /// Incoming payments for a payment id.
    Payments {
        payment_id: String,
    },
    /// Wallet messages.
    Messages {
        #[arg(long)]
        first_tx_id: Option<u64>,
        #[arg(long)]
        tx_limit: Option<u64>,
    },
    /// Persist the wallet to disk.
    Store,
    /// Rescan the wallet.
    Reset,
    /// Merge small outputs.
    Optimize,
    /// Send funds through the wallet service.
    Send {
        /// Destination as ADDRESS:AMOUNT[:MESSAGE] (repeatable).
        #[arg(long = "to", required = true)]
        transfers: Vec<String>,
        #[arg(long)]
        payment_id: Option<String>,
        #[arg(long)]
        mix_in: Option<u64>,
        #[arg(long)]
        unlock_height: Option<u64>,
        #[arg(long)]
        fee: Option<u64>,
    },

    // Wallet daemon
    /// Wallet daemon status.
    Status,
    /// List wallet addresses.
    Addresses,
    /// Create a new wallet address.
    CreateAddress,
    /// Delete a wallet address.
    DeleteAddress {
        address: String,
    },
    /// Show the view secret key.
    ViewKey,
    /// Show the spend keys of an address.
    SpendKeys {
        address: String,
    },
    /// Look up a wallet transaction by hash.
    Tx {
        hash: String,
    },

    // Blockchain daemon
    /// Block count.
    Count,
    /// Node info.
    Info,
    /// Chain height.
    Index,
    /// Header of the last block.
    LastHeader,
    /// Header of the block at a height.
    Header {
        height: u64,
    },
    /// Block by hash.
    Block {
        hash: String,
    },
    /// Transaction pool.
    Pool,
}
