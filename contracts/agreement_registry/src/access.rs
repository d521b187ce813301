use soroban_sdk::Address;

use crate::types::{Agreement, Config, Error};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Alice,
    Bob,
    Neither,
}

pub fn is_owner(cfg: &Config, who: &Address) -> bool {
    cfg.owner == *who
}

pub fn require_owner(cfg: &Config, who: &Address) -> Result<(), Error> {
    if is_owner(cfg, who) {
        Ok(())
    } else {
        Err(Error::CallerIsNotOwner)
    }
}

pub fn role_of(a: &Agreement, who: &Address) -> Role {
    if a.alice == *who {
        Role::Alice
    } else if a.bob == *who {
        Role::Bob
    } else {
        Role::Neither
    }
}
