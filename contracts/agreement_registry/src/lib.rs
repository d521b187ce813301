#![no_std]

mod access;
mod events;
mod fees;
mod oracle;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, token, Address, Bytes, BytesN, Env, Vec};

use crate::access::{require_owner, role_of, Role};

pub use crate::oracle::{PriceFeed, PriceFeedClient};
pub use crate::types::{Agreement, AgreementState, Config, CostBasis, Error};

#[contract]
pub struct AgreementRegistry;

#[contractimpl]
impl AgreementRegistry {
    /// One-time initializer. Any deployer may call; the owner recorded here
    /// collects fees and is the only address allowed to withdraw or re-price.
    pub fn init(
        e: Env,
        owner: Address,
        token: Address,
        price_feed: Address,
        fee: i128,
        fee_percent: u32,
        cost_basis: CostBasis,
    ) -> Result<(), Error> {
        if storage::has_config(&e) {
            return Err(Error::AlreadyInitialized);
        }
        if fee < 0 || fee_percent > 100 {
            return Err(Error::InvalidFeeConfig);
        }
        let token_decimals = token::Client::new(&e, &token).decimals();
        storage::put_config(
            &e,
            &Config {
                owner,
                token,
                price_feed,
                fee,
                fee_percent,
                cost_basis,
                token_decimals,
            },
        );
        Ok(())
    }

    /// Opens an agreement between `alice` (the caller) and `bob`. `payment`
    /// must equal the configured flat fee exactly and is forwarded to the
    /// owner. Both parties' by-address lookups point at the new agreement.
    pub fn create_agreement(
        e: Env,
        alice: Address,
        bob: Address,
        content: Bytes,
        termination_cost: i128,
        created_at: u64,
        payment: i128,
    ) -> Result<BytesN<32>, Error> {
        alice.require_auth();
        let cfg = storage::get_config(&e)?;

        if created_at == 0 {
            return Err(Error::InvalidTimestamp);
        }
        if content.is_empty() {
            return Err(Error::EmptyContent);
        }
        if termination_cost <= 0 {
            return Err(Error::ZeroTerminationCost);
        }
        if bob == alice {
            return Err(Error::BobNotSpecified);
        }
        if payment != cfg.fee {
            return Err(Error::MustPayExactFee);
        }
        if cfg.fee > 0 {
            token::Client::new(&e, &cfg.token).transfer(&alice, &cfg.owner, &cfg.fee);
        }

        let id = storage::next_id(&e);
        let agreement = Agreement {
            id: id.clone(),
            alice: alice.clone(),
            bob: bob.clone(),
            content,
            termination_cost,
            state: AgreementState::Created,
            updated_at: created_at,
        };
        storage::put_agreement(&e, &agreement);
        storage::push_id(&e, &id);
        storage::set_active(&e, &alice, &id);
        storage::set_active(&e, &bob, &id);

        events::agreement_created(&e, &id);
        Ok(id)
    }

    /// Only bob may accept, and only while the agreement is still Created.
    /// Acceptance pays the same flat fee as creation.
    pub fn accept_agreement(
        e: Env,
        caller: Address,
        id: BytesN<32>,
        accepted_at: u64,
        payment: i128,
    ) -> Result<(), Error> {
        caller.require_auth();
        let cfg = storage::get_config(&e)?;
        let mut agreement = storage::get_agreement(&e, &id).ok_or(Error::AgreementNotFound)?;

        if caller != agreement.bob {
            return Err(Error::AccessDenied);
        }
        if agreement.state != AgreementState::Created {
            return Err(Error::InvalidState);
        }
        if payment != cfg.fee {
            return Err(Error::MustPayExactFee);
        }
        if cfg.fee > 0 {
            token::Client::new(&e, &cfg.token).transfer(&caller, &cfg.owner, &cfg.fee);
        }

        agreement.state = AgreementState::Accepted;
        agreement.updated_at = accepted_at;
        storage::put_agreement(&e, &agreement);

        events::agreement_accepted(&e, &id);
        Ok(())
    }

    /// Either party may refuse while the agreement is Created or Accepted.
    /// No funds move.
    pub fn refuse_agreement(
        e: Env,
        caller: Address,
        id: BytesN<32>,
        refused_at: u64,
    ) -> Result<(), Error> {
        caller.require_auth();
        let mut agreement = storage::get_agreement(&e, &id).ok_or(Error::AgreementNotFound)?;

        if role_of(&agreement, &caller) == Role::Neither {
            return Err(Error::AccessDenied);
        }
        if agreement.state.is_terminal() {
            return Err(Error::InvalidState);
        }

        agreement.state = AgreementState::Refused;
        agreement.updated_at = refused_at;
        storage::put_agreement(&e, &agreement);
        storage::clear_active_if(&e, &agreement.alice, &id);
        storage::clear_active_if(&e, &agreement.bob, &id);

        events::agreement_refused(&e, &id);
        Ok(())
    }

    /// Either party may terminate an Accepted agreement by paying the
    /// termination cost exactly: the owner takes `fee_percent` of it, the
    /// party that did not call takes the rest. Usd-based costs are converted
    /// through the price feed at call time.
    pub fn terminate_agreement(
        e: Env,
        caller: Address,
        id: BytesN<32>,
        payment: i128,
    ) -> Result<(), Error> {
        caller.require_auth();
        let cfg = storage::get_config(&e)?;
        let mut agreement = storage::get_agreement(&e, &id).ok_or(Error::AgreementNotFound)?;

        let counterparty = match role_of(&agreement, &caller) {
            Role::Alice => agreement.bob.clone(),
            Role::Bob => agreement.alice.clone(),
            Role::Neither => return Err(Error::AccessDenied),
        };
        if agreement.state != AgreementState::Accepted {
            return Err(Error::InvalidState);
        }

        let native_cost = match cfg.cost_basis {
            CostBasis::Native => agreement.termination_cost,
            CostBasis::Usd => fees::convert_to_native(
                &e,
                &cfg.price_feed,
                agreement.termination_cost,
                cfg.token_decimals,
            )?,
        };
        if payment != native_cost {
            return Err(Error::MustPayExactTerminationCost);
        }

        let fee = fees::service_fee(native_cost, cfg.fee_percent);
        let tok = token::Client::new(&e, &cfg.token);
        if fee > 0 {
            tok.transfer(&caller, &cfg.owner, &fee);
        }
        let rest = native_cost - fee;
        if rest > 0 {
            tok.transfer(&caller, &counterparty, &rest);
        }

        agreement.state = AgreementState::Terminated;
        agreement.updated_at = e.ledger().timestamp();
        storage::put_agreement(&e, &agreement);
        storage::clear_active_if(&e, &agreement.alice, &id);
        storage::clear_active_if(&e, &agreement.bob, &id);

        events::agreement_terminated(&e, &id);
        Ok(())
    }

    /// Owner-only. Sweeps any settlement tokens sitting on the contract to
    /// the owner; an empty balance is a no-op, not an error.
    pub fn withdraw(e: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let cfg = storage::get_config(&e)?;
        require_owner(&cfg, &caller)?;

        let tok = token::Client::new(&e, &cfg.token);
        let me = e.current_contract_address();
        let balance = tok.balance(&me);
        if balance > 0 {
            tok.transfer(&me, &cfg.owner, &balance);
        }
        Ok(())
    }

    /// Owner-only. Re-prices the flat fee charged at creation and acceptance.
    pub fn set_fee(e: Env, caller: Address, new_fee: i128) -> Result<(), Error> {
        caller.require_auth();
        let mut cfg = storage::get_config(&e)?;
        require_owner(&cfg, &caller)?;
        if new_fee < 0 {
            return Err(Error::InvalidFeeConfig);
        }
        cfg.fee = new_fee;
        storage::put_config(&e, &cfg);
        Ok(())
    }

    pub fn get_fee(e: Env) -> Result<i128, Error> {
        Ok(storage::get_config(&e)?.fee)
    }

    pub fn get_agreement(e: Env, id: BytesN<32>) -> Result<Agreement, Error> {
        storage::get_agreement(&e, &id).ok_or(Error::AgreementNotFound)
    }

    /// Resolves an address to its most recently created agreement, skipping
    /// anything that has since gone terminal.
    pub fn get_agreement_by_address(e: Env, addr: Address) -> Result<Agreement, Error> {
        let id = storage::get_active(&e, &addr).ok_or(Error::AgreementNotFound)?;
        let agreement = storage::get_agreement(&e, &id).ok_or(Error::AgreementNotFound)?;
        if agreement.state.is_terminal() {
            return Err(Error::AgreementNotFound);
        }
        Ok(agreement)
    }

    pub fn get_agreement_count(e: Env) -> u32 {
        storage::get_ids(&e).len()
    }

    /// All agreements currently in Accepted state, in creation order.
    pub fn get_accepted_agreements(e: Env) -> Vec<Agreement> {
        let mut out = Vec::new(&e);
        for id in storage::get_ids(&e).iter() {
            if let Some(a) = storage::get_agreement(&e, &id) {
                if a.state == AgreementState::Accepted {
                    out.push_back(a);
                }
            }
        }
        out
    }

    /// One page of agreements in creation order. Pages are 1-indexed; a page
    /// or size of zero, or an offset past the end, yields an empty vector.
    /// The final page is truncated, never padded.
    pub fn get_paginated_agreements(e: Env, page: u32, page_size: u32) -> Vec<Agreement> {
        let mut out = Vec::new(&e);
        if page == 0 || page_size == 0 {
            return out;
        }
        let ids = storage::get_ids(&e);
        let start = (page as u64 - 1) * page_size as u64;
        if start >= ids.len() as u64 {
            return out;
        }
        for id in ids.iter().skip(start as usize).take(page_size as usize) {
            if let Some(a) = storage::get_agreement(&e, &id) {
                out.push_back(a);
            }
        }
        out
    }

    pub fn get_agreements(e: Env) -> Vec<Agreement> {
        let mut out = Vec::new(&e);
        for id in storage::get_ids(&e).iter() {
            if let Some(a) = storage::get_agreement(&e, &id) {
                out.push_back(a);
            }
        }
        out
    }
}
