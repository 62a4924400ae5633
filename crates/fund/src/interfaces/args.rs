use clap::Parser;
use derive_builder::Builder;
use slotmint_config::parse_url_arg;

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Set the native balance of test accounts on a development node",
    override_usage = "slotmint fund <ACCOUNTS>... [OPTIONS]"
)]
/// Arguments for the fund operation
pub struct FundArgs {
    /// The accounts to fund.
    #[clap(required = true, num_args = 1..)]
    pub accounts: Vec<String>,

    /// The amount of native currency to set, denominated in ether.
    #[clap(long, short, default_value = "1000000", hide_default_value = true)]
    pub amount: String,

    /// The RPC provider to use.
    /// This can be an explicit URL or a reference to a MESC endpoint.
    #[clap(long, short, value_parser = parse_url_arg, default_value = "", hide_default_value = true)]
    pub rpc_url: String,
}

impl FundArgsBuilder {
    /// Creates a new FundArgsBuilder with default values
    pub fn new() -> Self {
        Self {
            accounts: Some(Vec::new()),
            amount: Some(String::from("1000000")),
            rpc_url: Some(String::new()),
        }
    }
}
