use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::types::{Agreement, Config, DataKey, Error};

pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

pub fn get_config(e: &Env) -> Result<Config, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn put_config(e: &Env, cfg: &Config) {
    e.storage().instance().set(&DataKey::Config, cfg);
}

/// Hands out the next agreement id: a monotonic sequence number, big-endian
/// encoded into the low bytes of a 32-byte value. Never zero, never reused.
pub fn next_id(e: &Env) -> BytesN<32> {
    let k = DataKey::AgreementSeq;
    let mut n: u64 = e.storage().instance().get(&k).unwrap_or(0);
    n += 1;
    e.storage().instance().set(&k, &n);

    let mut raw = [0u8; 32];
    raw[24..].copy_from_slice(&n.to_be_bytes());
    BytesN::from_array(e, &raw)
}

pub fn get_ids(e: &Env) -> Vec<BytesN<32>> {
    e.storage()
        .persistent()
        .get(&DataKey::AgreementIds)
        .unwrap_or(Vec::new(e))
}

pub fn push_id(e: &Env, id: &BytesN<32>) {
    let mut ids = get_ids(e);
    ids.push_back(id.clone());
    e.storage().persistent().set(&DataKey::AgreementIds, &ids);
}

pub fn get_agreement(e: &Env, id: &BytesN<32>) -> Option<Agreement> {
    e.storage().persistent().get(&DataKey::Agreement(id.clone()))
}

pub fn put_agreement(e: &Env, a: &Agreement) {
    e.storage().persistent().set(&DataKey::Agreement(a.id.clone()), a);
}

pub fn set_active(e: &Env, addr: &Address, id: &BytesN<32>) {
    e.storage()
        .persistent()
        .set(&DataKey::ActiveAgreement(addr.clone()), id);
}

pub fn get_active(e: &Env, addr: &Address) -> Option<BytesN<32>> {
    e.storage()
        .persistent()
        .get(&DataKey::ActiveAgreement(addr.clone()))
}

/// Drops an address's active entry only while it still points at `id`; a
/// later creation may have displaced it with another agreement.
pub fn clear_active_if(e: &Env, addr: &Address, id: &BytesN<32>) {
    let k = DataKey::ActiveAgreement(addr.clone());
    if let Some(current) = e.storage().persistent().get::<DataKey, BytesN<32>>(&k) {
        if current == *id {
            e.storage().persistent().remove(&k);
        }
    }
}
