//! Wallet provider state as seen by the header.

use serde::Deserialize;
use serde::Serialize;

/// Connection state of the user's wallet account.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, strum::EnumIs)]
pub enum AccountState {
    #[default]
    Disconnected,
    Loading,
    Locked,
    None,
    Ready { address: String },
}

impl AccountState {
    /// The account address, only known once the account is `Ready`.
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::Ready { address } => Some(address),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct ProviderState {
    pub account: AccountState,
}

impl ProviderState {
    pub fn ready(address: impl Into<String>) -> Self {
        Self {
            account: AccountState::Ready {
                address: address.into(),
            },
        }
    }

    /// A wallet counts as connected only when its account is `Ready`.
    pub fn is_wallet_connected(&self) -> bool {
        self.account.is_ready()
    }
}
