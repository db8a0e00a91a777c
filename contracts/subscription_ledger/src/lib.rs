#![no_std]

mod access;
mod admin;
mod error;
mod events;
mod gateway;
mod ledger;
mod phase;
mod pricing;
mod storage;
mod validation;


pub use error::Error;
pub use phase::Phase;
pub use storage::{LedgerConfig, Pricing, Roles, Schedule, LOCK_DURATION};

use admin::Admin;
use gateway::CurrencyGateway;
use ledger::LedgerOps;
use storage::{Storage, DECIMALS};

use soroban_sdk::{contract, contractimpl, Address, Env, String};

#[contract]
pub struct SubscriptionLedger;

#[contractimpl]
impl SubscriptionLedger {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the ledger
    ///
    /// `unlock_time` is derived as `start_time + LOCK_DURATION`.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    /// - `InvalidTimestamp`: Need start ≤ subscription_end ≤ unlock
    /// - `InvalidPrice`: Prices must be positive with cost ≤ sale
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        roles: Roles,
        currency: Address,
        name: String,
        symbol: String,
        start_time: u64,
        subscription_end: u64,
        cost_per_token: i128,
        sale_per_unit: i128,
    ) -> Result<(), Error> {
        Admin::initialize(
            &env,
            roles,
            currency,
            name,
            symbol,
            start_time,
            subscription_end,
            cost_per_token,
            sale_per_unit,
        )
    }

    /// Grant or revoke whitelist membership (admin only)
    ///
    /// Not gated by the pause switch.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    pub fn set_whitelisted(
        env: Env,
        caller: Address,
        account: Address,
        enabled: bool,
    ) -> Result<(), Error> {
        Admin::set_whitelisted(&env, &caller, &account, enabled)
    }

    /// Require (or stop requiring) whitelisted transfer recipients (admin only)
    pub fn set_recipient_policy(env: Env, caller: Address, required: bool) -> Result<(), Error> {
        Admin::set_recipient_policy(&env, &caller, required)
    }

    /// Pause all value-moving operations (admin or compliance)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is neither admin nor compliance
    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        Admin::set_paused(&env, &caller, true)
    }

    /// Unpause (admin or compliance)
    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        Admin::set_paused(&env, &caller, false)
    }

    // ============================================
    // SUBSCRIPTION & REDEMPTION
    // ============================================

    /// Buy units during the subscription window
    ///
    /// The buyer must have approved the ledger to spend
    /// `amount × cost_per_token` of the currency.
    ///
    /// # Errors
    /// - `Paused`: Contract is paused
    /// - `NotWhitelisted`: Buyer not whitelisted
    /// - `TooEarly` / `SubscriptionClosed`: Outside the subscription window
    /// - `InvalidAmount`: Amount not positive or cost overflows
    /// - `CurrencyTransferFailed`: Currency pull denied
    pub fn buy(env: Env, buyer: Address, amount: i128) -> Result<(), Error> {
        LedgerOps::buy(&env, &buyer, amount)
    }

    /// Redeem units after unlock, returns the currency paid out
    ///
    /// # Errors
    /// - `Paused`: Contract is paused
    /// - `NotWhitelisted`: Holder not whitelisted
    /// - `TransfersLocked`: Before unlock time
    /// - `InvalidAmount`: Amount not positive
    /// - `InsufficientBalance`: Holder has fewer units
    /// - `InsufficientRevenuePool`: Treasury has not funded enough
    /// - `CurrencyTransferFailed`: Currency push denied
    pub fn redeem(env: Env, holder: Address, amount: i128) -> Result<i128, Error> {
        LedgerOps::redeem(&env, &holder, amount)
    }

    // ============================================
    // TREASURY
    // ============================================

    /// Fund the revenue pool (treasurer only)
    ///
    /// # Errors
    /// - `Paused`: Contract is paused
    /// - `Unauthorized`: Caller is not treasurer
    /// - `InvalidAmount`: Amount not positive
    /// - `CurrencyTransferFailed`: Currency pull denied
    pub fn treasurer_fund_revenue(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        LedgerOps::fund_revenue(&env, &caller, amount)
    }

    /// Withdraw collected purchase cost (treasurer only)
    ///
    /// # Errors
    /// - `Paused`: Contract is paused
    /// - `Unauthorized`: Caller is not treasurer
    /// - `InvalidAmount`: Amount not positive
    /// - `InsufficientCollectedCost`: Amount exceeds collected cost
    /// - `CurrencyTransferFailed`: Currency push denied
    pub fn treasurer_withdraw_cost(
        env: Env,
        caller: Address,
        amount: i128,
    ) -> Result<(), Error> {
        LedgerOps::withdraw_collected_cost(&env, &caller, amount)
    }

    // ============================================
    // UNIT TOKEN
    // ============================================

    /// Transfer units after unlock
    ///
    /// # Errors
    /// - `Paused`: Contract is paused
    /// - `TransfersLocked`: Before unlock time
    /// - `NotWhitelisted`: Recipient not whitelisted (when the policy is on)
    /// - `InvalidAmount`: Amount not positive
    /// - `InsufficientBalance`: Sender has fewer units
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        LedgerOps::transfer(&env, &from, &to, amount)
    }

    /// Transfer units on behalf of `from`
    ///
    /// Same errors as `transfer`, plus `InsufficientAllowance`.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        LedgerOps::transfer_from(&env, &spender, &from, &to, amount)
    }

    /// Set how many of `owner`'s units `spender` may move (zero revokes)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidAmount`: Amount is negative
    pub fn approve(env: Env, owner: Address, spender: Address, amount: i128) -> Result<(), Error> {
        LedgerOps::approve(&env, &owner, &spender, amount)
    }

    /// Units `spender` may still move on behalf of `owner`
    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        Storage::allowance(&env, &owner, &spender)
    }

    /// Units held by `id`
    pub fn balance(env: Env, id: Address) -> i128 {
        Storage::balance(&env, &id)
    }

    /// Units outstanding across all holders
    pub fn total_supply(env: Env) -> i128 {
        Storage::total_supply(&env)
    }

    /// Units are indivisible
    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    /// Unit token name, set at initialization
    pub fn name(env: Env) -> Result<String, Error> {
        Ok(Storage::get_config(&env)?.name)
    }

    /// Unit token symbol, set at initialization
    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(Storage::get_config(&env)?.symbol)
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    pub fn config(env: Env) -> Result<LedgerConfig, Error> {
        Storage::get_config(&env)
    }

    pub fn currency(env: Env) -> Result<Address, Error> {
        Ok(Storage::get_config(&env)?.currency)
    }

    pub fn cost_per_token(env: Env) -> Result<i128, Error> {
        Ok(Storage::get_config(&env)?.pricing.cost_per_token)
    }

    pub fn payout_per_token(env: Env) -> Result<i128, Error> {
        Ok(Storage::get_config(&env)?.pricing.payout_per_token)
    }

    pub fn unlock_time(env: Env) -> Result<u64, Error> {
        Ok(Storage::get_config(&env)?.schedule.unlock_time)
    }

    /// Phase at the current ledger timestamp
    pub fn phase(env: Env) -> Result<Phase, Error> {
        let config = Storage::get_config(&env)?;
        Ok(LedgerOps::current_phase(&env, &config))
    }

    /// Phase at an arbitrary timestamp
    pub fn phase_at(env: Env, now: u64) -> Result<Phase, Error> {
        Ok(phase::phase_at(&Storage::get_config(&env)?.schedule, now))
    }

    pub fn is_whitelisted(env: Env, account: Address) -> bool {
        Storage::is_whitelisted(&env, &account)
    }

    pub fn recipient_whitelist_required(env: Env) -> bool {
        Storage::recipient_whitelist_required(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        Storage::is_paused(&env)
    }

    pub fn collected_cost(env: Env) -> i128 {
        Storage::collected_cost(&env)
    }

    pub fn revenue_pool(env: Env) -> i128 {
        Storage::revenue_pool(&env)
    }

    /// Currency the token contract reports as held by the ledger
    pub fn reserve(env: Env) -> Result<i128, Error> {
        let config = Storage::get_config(&env)?;
        Ok(CurrencyGateway::new(&env, &config.currency).held())
    }

    /// True when the held currency covers both buckets
    pub fn is_solvent(env: Env) -> Result<bool, Error> {
        let config = Storage::get_config(&env)?;
        let owed = Storage::collected_cost(&env)
            .checked_add(Storage::revenue_pool(&env))
            .ok_or(Error::InvalidAmount)?;
        Ok(CurrencyGateway::new(&env, &config.currency).held() >= owed)
    }
}
