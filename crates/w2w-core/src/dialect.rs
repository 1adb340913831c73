//! Field-name mapping tables for the backend RPC dialects.
//!
//! Façade options use one caller-facing vocabulary (`mixIn`,
//! `unlockHeight`, ...). Each backend expects its own names on the wire, so
//! every dialect is a small table of caller name → wire name.

/// A backend wire vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Single-wallet service (`transfer`, `get_payments`, ...).
    Wallet,
    /// Multi-address wallet daemon, transaction-building calls
    /// (`sendTransaction`, `createDelayedTransaction`).
    WalletdTransaction,
    /// Blockchain daemon.
    Daemon,
}

const WALLET: &[(&str, &str)] = &[
    ("transfers", "destinations"),
    ("mixIn", "mixin"),
    ("unlockHeight", "unlock_time"),
    ("paymentId", "payment_id"),
    ("firstTxId", "first_tx_id"),
    ("txLimit", "tx_limit"),
];

const WALLETD_TRANSACTION: &[(&str, &str)] = &[
    ("addresses", "sourceAddresses"),
    ("mixIn", "anonymity"),
    ("unlockHeight", "unlockTime"),
];

const DAEMON: &[(&str, &str)] = &[
    ("address", "wallet_address"),
    ("reserveSize", "reserve_size"),
    ("txs", "txs_hashes"),
    ("rawTx", "tx_as_hex"),
];

impl Dialect {
    pub fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Wallet => WALLET,
            Self::WalletdTransaction => WALLETD_TRANSACTION,
            Self::Daemon => DAEMON,
        }
    }

    /// Wire name for `field`, or `None` if the dialect keeps it as is.
    pub fn wire_name(self, field: &str) -> Option<&'static str> {
        self.table()
            .iter()
            .find(|(caller, _)| *caller == field)
            .map(|(_, wire)| *wire)
    }
}
