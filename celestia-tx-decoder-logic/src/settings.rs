use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DecoderSettings {
    #[serde(default = "default_address_prefix")]
    pub address_prefix: String,
    #[serde(default = "default_validator_prefix")]
    pub validator_prefix: String,
    #[serde(default = "default_native_denom")]
    pub native_denom: String,
    #[serde(default = "default_display_denom")]
    pub display_denom: String,
    #[serde(default = "default_display_denom_exponent")]
    pub display_denom_exponent: u32,
    /// Destination port of packets carrying interchain account transactions.
    #[serde(default = "default_ica_host_port")]
    pub ica_host_port: String,
    /// How deep nested messages (ICA packets, gov proposals) are dispatched.
    #[serde(default = "default_max_nesting_depth")]
    pub max_nesting_depth: usize,
}

fn default_address_prefix() -> String {
    "celestia".to_string()
}

fn default_validator_prefix() -> String {
    "celestiavaloper".to_string()
}

fn default_native_denom() -> String {
    "utia".to_string()
}

fn default_display_denom() -> String {
    "tia".to_string()
}

fn default_display_denom_exponent() -> u32 {
    6
}

fn default_ica_host_port() -> String {
    "icahost".to_string()
}

fn default_max_nesting_depth() -> usize {
    2
}

impl Default for DecoderSettings {
    fn default() -> Self {
        Self {
            address_prefix: default_address_prefix(),
            validator_prefix: default_validator_prefix(),
            native_denom: default_native_denom(),
            display_denom: default_display_denom(),
            display_denom_exponent: default_display_denom_exponent(),
            ica_host_port: default_ica_host_port(),
            max_nesting_depth: default_max_nesting_depth(),
        }
    }
}
