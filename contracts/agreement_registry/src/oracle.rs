use soroban_sdk::{contractclient, Env};

/// The narrow read surface the registry needs from whatever price feed it is
/// configured with. `latest_price` is the reference-currency price of one
/// whole settlement token, scaled by `10^decimals`.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    fn latest_price(env: Env) -> i128;
    fn decimals(env: Env) -> u32;
}
