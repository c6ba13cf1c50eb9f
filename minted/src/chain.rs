//! Supported chains and their identifiers.

use core::fmt;
use core::str::FromStr;

use crate::Error;

/// A blockchain a wallet can be generated for.
///
/// # Identifiers
///
/// | Chain               | id       | aliases            |
/// |---------------------|----------|--------------------|
/// | Ethereum            | `eth`    | `ethereum`         |
/// | Binance Smart Chain | `bsc`    | `binance`, `bnb`   |
/// | Solana              | `sol`    | `solana`           |
/// | Bitcoin             | `btc`    | `bitcoin`          |
/// | Tron                | `tron`   | `trx`              |
/// | Cosmos              | `cosmos` | `atom`             |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainType {
    /// Ethereum mainnet.
    Ethereum,
    /// Binance Smart Chain, which shares Ethereum's keys and addresses.
    BinanceSmartChain,
    /// Solana.
    Solana,
    /// Bitcoin mainnet, legacy P2PKH.
    Bitcoin,
    /// Tron.
    Tron,
    /// Cosmos Hub.
    Cosmos,
}

impl ChainType {
    /// Every supported chain, in prompt order.
    pub const ALL: [Self; 6] = [
        Self::Ethereum,
        Self::BinanceSmartChain,
        Self::Solana,
        Self::Bitcoin,
        Self::Tron,
        Self::Cosmos,
    ];

    /// Short identifier used at the prompt and in file names.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Ethereum => "eth",
            Self::BinanceSmartChain => "bsc",
            Self::Solana => "sol",
            Self::Bitcoin => "btc",
            Self::Tron => "tron",
            Self::Cosmos => "cosmos",
        }
    }

    /// Human-readable chain name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ethereum => "Ethereum",
            Self::BinanceSmartChain => "Binance Smart Chain",
            Self::Solana => "Solana",
            Self::Bitcoin => "Bitcoin",
            Self::Tron => "Tron",
            Self::Cosmos => "Cosmos",
        }
    }

    /// Comma-separated list of the primary ids, e.g. for prompts.
    #[must_use]
    pub fn id_list() -> String {
        Self::ALL.map(Self::id).join(", ")
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ChainType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "eth" | "ethereum" => Ok(Self::Ethereum),
            "bsc" | "binance" | "bnb" => Ok(Self::BinanceSmartChain),
            "sol" | "solana" => Ok(Self::Solana),
            "btc" | "bitcoin" => Ok(Self::Bitcoin),
            "tron" | "trx" => Ok(Self::Tron),
            "cosmos" | "atom" => Ok(Self::Cosmos),
            _ => Err(Error::UnsupportedChain(s.trim().to_string())),
        }
    }
}
