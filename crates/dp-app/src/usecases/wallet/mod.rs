mod selector;

pub use selector::WalletSelector;
