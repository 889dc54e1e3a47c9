/// Fixed network profile. Selection toggles which one is active; the
/// profiles themselves are not user-editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Network {
    pub name: &'static str,
    pub ticker: &'static str,
    pub ss58_prefix: u16,
    pub decimals: u32,
    pub data_url: &'static str,
}

pub const KUSAMA: Network = Network {
    name: "Kusama",
    ticker: "KSM",
    ss58_prefix: 2,
    decimals: 12,
    data_url: "https://api.kusama.subvt.io:17900/validator/reward/chart",
};

pub const POLKADOT: Network = Network {
    name: "Polkadot",
    ticker: "DOT",
    ss58_prefix: 0,
    decimals: 10,
    data_url: "https://api.polkadot.subvt.io:18900/validator/reward/chart",
};

impl Network {
    pub fn from_name(name: &str) -> Option<&'static Network> {
        match name.to_lowercase().as_str() {
            "kusama" | "ksm" => Some(&KUSAMA),
            "polkadot" | "dot" => Some(&POLKADOT),
            _ => None,
        }
    }
}
