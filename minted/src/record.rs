//! Generated wallet record.

use core::fmt;

use zeroize::Zeroizing;

use crate::ChainType;

/// One generated wallet: mnemonic, private key and address for a chain.
///
/// Secret fields are wiped on drop and redacted from `Debug` output.
#[derive(Clone)]
pub struct WalletRecord {
    /// Chain the keys were derived for.
    pub chain: ChainType,
    /// 12-word English BIP39 phrase.
    pub mnemonic: Zeroizing<String>,
    /// Private key in the chain's native text encoding.
    pub private_key: Zeroizing<String>,
    /// Account address.
    pub address: String,
}

impl fmt::Debug for WalletRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletRecord")
            .field("chain", &self.chain)
            .field("mnemonic", &"[REDACTED]")
            .field("private_key", &"[REDACTED]")
            .field("address", &self.address)
            .finish()
    }
}
