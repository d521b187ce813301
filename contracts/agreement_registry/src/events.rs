use soroban_sdk::{BytesN, Env, Symbol};

pub fn agreement_created(e: &Env, id: &BytesN<32>) {
    e.events()
        .publish((Symbol::new(e, "AgreementCreated"),), id.clone());
}

pub fn agreement_accepted(e: &Env, id: &BytesN<32>) {
    e.events()
        .publish((Symbol::new(e, "AgreementAccepted"),), id.clone());
}

pub fn agreement_refused(e: &Env, id: &BytesN<32>) {
    e.events()
        .publish((Symbol::new(e, "AgreementRefused"),), id.clone());
}

pub fn agreement_terminated(e: &Env, id: &BytesN<32>) {
    e.events()
        .publish((Symbol::new(e, "AgreementTerminated"),), id.clone());
}
