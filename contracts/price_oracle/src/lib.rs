#![no_std]
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Decimals,
    Price,
}

/// Admin-updatable price feed for test networks. Answers the two reads the
/// agreement registry consumes: the reference-currency price of one whole
/// settlement token, scaled by `10^decimals`, and the scale itself.
#[contract]
pub struct PriceOracle;

#[contractimpl]
impl PriceOracle {
    /// One-time initializer. `decimals` is fixed for the feed's lifetime.
    pub fn init(e: Env, admin: Address, decimals: u32, price: i128) -> Result<(), Error> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }
        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Decimals, &decimals);
        e.storage().instance().set(&DataKey::Price, &price);
        Ok(())
    }

    /// Admin-only. Non-positive prices are accepted so consumers can exercise
    /// their dead-feed handling.
    pub fn set_price(e: Env, price: i128) -> Result<(), Error> {
        let admin: Address = e
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        admin.require_auth();
        e.storage().instance().set(&DataKey::Price, &price);
        Ok(())
    }

    pub fn latest_price(e: Env) -> Result<i128, Error> {
        e.storage()
            .instance()
            .get(&DataKey::Price)
            .ok_or(Error::NotInitialized)
    }

    pub fn decimals(e: Env) -> Result<u32, Error> {
        e.storage()
            .instance()
            .get(&DataKey::Decimals)
            .ok_or(Error::NotInitialized)
    }
}
