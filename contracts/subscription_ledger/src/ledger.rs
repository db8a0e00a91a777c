use crate::access::{Access, Role};
use crate::error::Error;
use crate::events::*;
use crate::gateway::CurrencyGateway;
use crate::phase::{phase_at, Phase};
use crate::pricing::calculate_total;
use crate::storage::{LedgerConfig, Storage};
use crate::validation::Validator;
use soroban_sdk::{log, Address, Env, Symbol};

/// Value-moving operations.
///
/// Each one runs the same fixed sequence: pause switch, authorization and
/// whitelist, phase, amounts. New balances and buckets are computed with
/// checked arithmetic and only written once the currency gateway call has
/// succeeded, so a rejected call never leaves partial state behind.
pub struct LedgerOps;

impl LedgerOps {
    // ============================================
    // SUBSCRIPTION
    // ============================================

    /// Buy `amount` units at the fixed cost per token
    pub fn buy(env: &Env, buyer: &Address, amount: i128) -> Result<(), Error> {
        Self::check_not_paused(env)?;

        buyer.require_auth();

        let config = Storage::get_config(env)?;
        Access::require_whitelisted(env, buyer)?;
        Validator::require_subscription(Self::current_phase(env, &config))?;
        Validator::require_positive(amount)?;

        let cost = calculate_total(amount, config.pricing.cost_per_token)
            .ok_or(Error::InvalidAmount)?;

        let new_balance = Storage::balance(env, buyer)
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;
        let new_supply = Storage::total_supply(env)
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;
        let new_collected = Storage::collected_cost(env)
            .checked_add(cost)
            .ok_or(Error::InvalidAmount)?;

        CurrencyGateway::new(env, &config.currency).pull(buyer, cost)?;

        Storage::set_balance(env, buyer, new_balance);
        Storage::set_total_supply(env, new_supply);
        Storage::set_collected_cost(env, new_collected);

        log!(env, "units purchased", amount, cost);

        env.events().publish(
            (Symbol::new(env, "purchased"), buyer.clone()),
            PurchasedEvent {
                buyer: buyer.clone(),
                amount,
                cost,
            },
        );

        Ok(())
    }

    // ============================================
    // REDEMPTION
    // ============================================

    /// Burn `amount` units for the blended payout out of the revenue pool
    pub fn redeem(env: &Env, holder: &Address, amount: i128) -> Result<i128, Error> {
        Self::check_not_paused(env)?;

        holder.require_auth();

        let config = Storage::get_config(env)?;
        Access::require_whitelisted(env, holder)?;
        Validator::require_unlocked(Self::current_phase(env, &config))?;
        Validator::require_positive(amount)?;

        let balance = Storage::balance(env, holder);
        if balance < amount {
            return Err(Error::InsufficientBalance);
        }

        let payout = calculate_total(amount, config.pricing.payout_per_token)
            .ok_or(Error::InvalidAmount)?;

        let pool = Storage::revenue_pool(env);
        if pool < payout {
            return Err(Error::InsufficientRevenuePool);
        }

        let new_supply = Storage::total_supply(env)
            .checked_sub(amount)
            .ok_or(Error::InvalidAmount)?;

        CurrencyGateway::new(env, &config.currency).push(holder, payout)?;

        Storage::set_balance(env, holder, balance - amount);
        Storage::set_total_supply(env, new_supply);
        Storage::set_revenue_pool(env, pool - payout);

        log!(env, "units redeemed", amount, payout);

        env.events().publish(
            (Symbol::new(env, "redeemed"), holder.clone()),
            RedeemedEvent {
                holder: holder.clone(),
                amount,
                payout,
            },
        );

        Ok(payout)
    }

    // ============================================
    // TREASURY
    // ============================================

    /// Deposit currency backing future redemptions
    pub fn fund_revenue(env: &Env, caller: &Address, amount: i128) -> Result<(), Error> {
        Self::check_not_paused(env)?;

        Access::require_role(env, caller, Role::Treasurer)?;
        Validator::require_positive(amount)?;

        let config = Storage::get_config(env)?;
        let new_pool = Storage::revenue_pool(env)
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;

        CurrencyGateway::new(env, &config.currency).pull(caller, amount)?;

        Storage::set_revenue_pool(env, new_pool);

        log!(env, "revenue funded", amount, new_pool);

        env.events().publish(
            (Symbol::new(env, "rev_funded"), caller.clone()),
            RevenueFundedEvent {
                treasurer: caller.clone(),
                amount,
            },
        );

        Ok(())
    }

    /// Withdraw currency collected from buyers
    pub fn withdraw_collected_cost(env: &Env, caller: &Address, amount: i128) -> Result<(), Error> {
        Self::check_not_paused(env)?;

        Access::require_role(env, caller, Role::Treasurer)?;
        Validator::require_positive(amount)?;

        let collected = Storage::collected_cost(env);
        if amount > collected {
            return Err(Error::InsufficientCollectedCost);
        }

        let config = Storage::get_config(env)?;
        CurrencyGateway::new(env, &config.currency).push(caller, amount)?;

        Storage::set_collected_cost(env, collected - amount);

        log!(env, "collected cost withdrawn", amount, collected - amount);

        env.events().publish(
            (Symbol::new(env, "cost_withdrawn"), caller.clone()),
            CostWithdrawnEvent {
                treasurer: caller.clone(),
                amount,
            },
        );

        Ok(())
    }

    // ============================================
    // UNIT TRANSFERS
    // ============================================

    pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
        Self::check_not_paused(env)?;

        from.require_auth();

        Self::check_transferable(env, to, amount)?;
        Self::move_units(env, from, to, amount)
    }

    /// Move units on behalf of `from` against a prior approval
    pub fn transfer_from(
        env: &Env,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: i128,
    ) -> Result<(), Error> {
        Self::check_not_paused(env)?;

        spender.require_auth();

        Self::check_transferable(env, to, amount)?;

        let allowance = Storage::allowance(env, from, spender);
        if allowance < amount {
            return Err(Error::InsufficientAllowance);
        }

        Self::move_units(env, from, to, amount)?;
        Storage::set_allowance(env, from, spender, allowance - amount);

        Ok(())
    }

    /// Set the unit allowance of `spender` over `owner`'s balance
    pub fn approve(env: &Env, owner: &Address, spender: &Address, amount: i128) -> Result<(), Error> {
        owner.require_auth();

        if !Storage::is_initialized(env) {
            return Err(Error::NotInitialized);
        }
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        Storage::set_allowance(env, owner, spender, amount);

        env.events().publish(
            (Symbol::new(env, "approve"), owner.clone(), spender.clone()),
            ApprovalEvent {
                owner: owner.clone(),
                spender: spender.clone(),
                amount,
            },
        );

        Ok(())
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    pub fn current_phase(env: &Env, config: &LedgerConfig) -> Phase {
        phase_at(&config.schedule, env.ledger().timestamp())
    }

    fn check_not_paused(env: &Env) -> Result<(), Error> {
        if Storage::is_paused(env) {
            return Err(Error::Paused);
        }
        Ok(())
    }

    /// Phase first, so a locked transfer reports `TransfersLocked` whoever the recipient is
    fn check_transferable(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
        let config = Storage::get_config(env)?;
        Validator::require_unlocked(Self::current_phase(env, &config))?;
        Access::require_eligible_recipient(env, to)?;
        Validator::require_positive(amount)
    }

    fn move_units(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
        let from_balance = Storage::balance(env, from);
        if from_balance < amount {
            return Err(Error::InsufficientBalance);
        }

        if from != to {
            let new_to_balance = Storage::balance(env, to)
                .checked_add(amount)
                .ok_or(Error::InvalidAmount)?;

            Storage::set_balance(env, from, from_balance - amount);
            Storage::set_balance(env, to, new_to_balance);
        }

        env.events().publish(
            (Symbol::new(env, "transfer"), from.clone(), to.clone()),
            TransferEvent {
                from: from.clone(),
                to: to.clone(),
                amount,
            },
        );

        Ok(())
    }
}
