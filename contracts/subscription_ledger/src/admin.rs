use crate::access::{Access, Role};
use crate::error::Error;
use crate::events::{PauseChangedEvent, RecipientPolicyEvent, WhitelistChangedEvent};
use crate::storage::{LedgerConfig, Roles, Storage};
use crate::validation::Validator;
use soroban_sdk::{log, Address, Env, String, Symbol};

pub struct Admin;

impl Admin {
    /// Record the immutable configuration
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: &Env,
        roles: Roles,
        currency: Address,
        name: String,
        symbol: String,
        start_time: u64,
        subscription_end: u64,
        cost_per_token: i128,
        sale_per_unit: i128,
    ) -> Result<(), Error> {
        if Storage::is_initialized(env) {
            return Err(Error::AlreadyInitialized);
        }

        roles.admin.require_auth();

        let schedule = Validator::validate_schedule(start_time, subscription_end)?;
        let pricing = Validator::validate_pricing(cost_per_token, sale_per_unit)?;

        log!(
            env,
            "ledger initialized",
            schedule.unlock_time,
            pricing.payout_per_token
        );

        let config = LedgerConfig {
            roles,
            currency,
            name,
            symbol,
            schedule,
            pricing,
        };

        Storage::set_initialized(env);
        Storage::set_config(env, &config);
        Storage::set_paused(env, false);
        Storage::set_recipient_whitelist_required(env, true);

        Ok(())
    }

    /// Grant or revoke whitelist membership; idempotent
    pub fn set_whitelisted(
        env: &Env,
        caller: &Address,
        account: &Address,
        enabled: bool,
    ) -> Result<(), Error> {
        Access::require_role(env, caller, Role::Admin)?;

        Storage::set_whitelisted(env, account, enabled);

        env.events().publish(
            (Symbol::new(env, "whitelist"), account.clone()),
            WhitelistChangedEvent {
                admin: caller.clone(),
                account: account.clone(),
                enabled,
            },
        );

        Ok(())
    }

    /// Choose whether unit recipients must be whitelisted
    pub fn set_recipient_policy(env: &Env, caller: &Address, required: bool) -> Result<(), Error> {
        Access::require_role(env, caller, Role::Admin)?;

        Storage::set_recipient_whitelist_required(env, required);

        env.events().publish(
            (Symbol::new(env, "policy"), caller.clone()),
            RecipientPolicyEvent {
                admin: caller.clone(),
                required,
            },
        );

        Ok(())
    }

    pub fn set_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), Error> {
        Access::require_pauser(env, caller)?;

        Storage::set_paused(env, paused);

        let topic = if paused { "paused" } else { "unpaused" };
        env.events().publish(
            (Symbol::new(env, topic), caller.clone()),
            PauseChangedEvent {
                caller: caller.clone(),
                paused,
            },
        );

        Ok(())
    }
}
