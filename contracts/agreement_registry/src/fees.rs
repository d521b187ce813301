use soroban_sdk::{Address, Env};

use crate::oracle::PriceFeedClient;
use crate::types::Error;

/// Owner's cut of a terminating transfer: `amount * percent / 100`, floored.
pub fn service_fee(amount: i128, percent: u32) -> i128 {
    amount * percent as i128 / 100
}

/// Converts `amount_ref` whole reference-currency units into settlement-token
/// units through the configured feed. The feed quotes the reference price of
/// one whole token scaled by `10^feed_decimals`, so
///
///   native = amount_ref * 10^(token_decimals + feed_decimals) / price
///
/// truncating toward zero. A non-positive price is a dead feed.
pub fn convert_to_native(
    e: &Env,
    feed: &Address,
    amount_ref: i128,
    token_decimals: u32,
) -> Result<i128, Error> {
    let client = PriceFeedClient::new(e, feed);
    let price = client.latest_price();
    if price <= 0 {
        return Err(Error::OracleUnavailable);
    }
    let feed_decimals = client.decimals();
    let scale = 10i128.pow(token_decimals + feed_decimals);
    Ok(amount_ref * scale / price)
}
