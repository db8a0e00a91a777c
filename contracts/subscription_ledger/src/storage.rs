use crate::error::Error;
use soroban_sdk::{contracttype, Address, Env, String};

// Constants
pub const DAY: u64 = 24 * 3600;
/// Units stay locked for this long after the subscription window opens
pub const LOCK_DURATION: u64 = 30 * DAY;
/// One unit is one whole token
pub const DECIMALS: u32 = 0;

/// The three fixed authorization roles
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Roles {
    /// Whitelist, recipient policy and pause control
    pub admin: Address,
    /// Configured pauser
    pub compliance: Address,
    /// Funds the revenue pool and withdraws collected cost
    pub treasurer: Address,
}

/// Lifecycle timestamps (unix seconds)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Schedule {
    /// Subscription window opens
    pub start_time: u64,
    /// Subscription window closes (exclusive)
    pub subscription_end: u64,
    /// Transfers and redemptions open (start_time + LOCK_DURATION)
    pub unlock_time: u64,
}

/// Prices in the currency's smallest unit, per whole token
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pricing {
    /// Charged at purchase
    pub cost_per_token: i128,
    /// Reference sale price
    pub sale_per_unit: i128,
    /// Paid at redemption: cost + (sale - cost) / 2
    pub payout_per_token: i128,
}

/// Immutable configuration recorded by `initialize`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    pub roles: Roles,
    /// Token contract holding the backing currency
    pub currency: Address,
    pub name: String,
    pub symbol: String,
    pub schedule: Schedule,
    pub pricing: Pricing,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Config,
    Paused,
    RecipientWhitelistRequired,
    TotalSupply,
    CollectedCost,
    RevenuePool,
    Balance(Address),
    Whitelisted(Address),
    Allowance(Address, Address), // (owner, spender)
}

pub struct Storage;

impl Storage {
    // Initialization
    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Initialized)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().instance().set(&DataKey::Initialized, &true);
    }

    // Config
    pub fn get_config(env: &Env) -> Result<LedgerConfig, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_config(env: &Env, config: &LedgerConfig) {
        env.storage().instance().set(&DataKey::Config, config);
    }

    // Pause switch
    pub fn is_paused(env: &Env) -> bool {
        env.storage()
            .instance()
            .get::<DataKey, bool>(&DataKey::Paused)
            .unwrap_or(false)
    }

    pub fn set_paused(env: &Env, paused: bool) {
        env.storage().instance().set(&DataKey::Paused, &paused);
    }

    // Recipient policy
    pub fn recipient_whitelist_required(env: &Env) -> bool {
        env.storage()
            .instance()
            .get::<DataKey, bool>(&DataKey::RecipientWhitelistRequired)
            .unwrap_or(true)
    }

    pub fn set_recipient_whitelist_required(env: &Env, required: bool) {
        env.storage()
            .instance()
            .set(&DataKey::RecipientWhitelistRequired, &required);
    }

    // Supply and currency buckets
    pub fn total_supply(env: &Env) -> i128 {
        Self::get_amount(env, &DataKey::TotalSupply)
    }

    pub fn set_total_supply(env: &Env, amount: i128) {
        env.storage().instance().set(&DataKey::TotalSupply, &amount);
    }

    pub fn collected_cost(env: &Env) -> i128 {
        Self::get_amount(env, &DataKey::CollectedCost)
    }

    pub fn set_collected_cost(env: &Env, amount: i128) {
        env.storage().instance().set(&DataKey::CollectedCost, &amount);
    }

    pub fn revenue_pool(env: &Env) -> i128 {
        Self::get_amount(env, &DataKey::RevenuePool)
    }

    pub fn set_revenue_pool(env: &Env, amount: i128) {
        env.storage().instance().set(&DataKey::RevenuePool, &amount);
    }

    fn get_amount(env: &Env, key: &DataKey) -> i128 {
        env.storage()
            .instance()
            .get::<DataKey, i128>(key)
            .unwrap_or(0)
    }

    // Balances
    pub fn balance(env: &Env, account: &Address) -> i128 {
        env.storage()
            .persistent()
            .get::<DataKey, i128>(&DataKey::Balance(account.clone()))
            .unwrap_or(0)
    }

    /// An emptied account keeps its entry at zero.
    pub fn set_balance(env: &Env, account: &Address, amount: i128) {
        env.storage()
            .persistent()
            .set(&DataKey::Balance(account.clone()), &amount);
    }

    // Whitelist
    pub fn is_whitelisted(env: &Env, account: &Address) -> bool {
        env.storage()
            .persistent()
            .get::<DataKey, bool>(&DataKey::Whitelisted(account.clone()))
            .unwrap_or(false)
    }

    pub fn set_whitelisted(env: &Env, account: &Address, enabled: bool) {
        env.storage()
            .persistent()
            .set(&DataKey::Whitelisted(account.clone()), &enabled);
    }

    // Allowances
    pub fn allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
        env.storage()
            .persistent()
            .get::<DataKey, i128>(&DataKey::Allowance(owner.clone(), spender.clone()))
            .unwrap_or(0)
    }

    pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
        let key = DataKey::Allowance(owner.clone(), spender.clone());
        if amount == 0 {
            env.storage().persistent().remove(&key);
        } else {
            env.storage().persistent().set(&key, &amount);
        }
    }
}
