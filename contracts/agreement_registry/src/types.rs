use soroban_sdk::{contracterror, contracttype, Address, Bytes, BytesN};

/// One agreement between two parties. Records are kept forever; `state` and
/// `updated_at` are the only fields that change after creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Agreement {
    pub id: BytesN<32>,
    pub alice: Address,
    pub bob: Address,
    pub content: Bytes,
    pub termination_cost: i128,
    pub state: AgreementState,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AgreementState {
    Created = 0,
    Accepted = 1,
    Refused = 2,
    Terminated = 3,
}

impl AgreementState {
    /// Refused and Terminated admit no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, AgreementState::Refused | AgreementState::Terminated)
    }
}

/// How `termination_cost` is denominated: directly in settlement-token units,
/// or in whole reference-currency units converted through the price feed at
/// termination time.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum CostBasis {
    Native = 0,
    Usd = 1,
}

/// Contract configuration, written once at init. `fee` is the only mutable
/// field (owner-only, via set_fee).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub owner: Address,
    pub token: Address,
    pub price_feed: Address,
    pub fee: i128,
    pub fee_percent: u32,
    pub cost_basis: CostBasis,
    pub token_decimals: u32,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    AgreementSeq,
    AgreementIds,
    Agreement(BytesN<32>),
    ActiveAgreement(Address),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    CallerIsNotOwner = 3,
    AccessDenied = 4,
    AgreementNotFound = 5,
    InvalidTimestamp = 6,
    EmptyContent = 7,
    ZeroTerminationCost = 8,
    BobNotSpecified = 9,
    MustPayExactFee = 10,
    MustPayExactTerminationCost = 11,
    InvalidState = 12,
    OracleUnavailable = 13,
    InvalidFeeConfig = 14,
}
