use crate::error::Error;
use crate::storage::{Roles, Storage};
use soroban_sdk::{Address, Env};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Admin,
    Compliance,
    Treasurer,
}

pub struct Access;

impl Access {
    /// Authenticate `caller` and check it holds `role`
    pub fn require_role(env: &Env, caller: &Address, role: Role) -> Result<(), Error> {
        caller.require_auth();

        let roles = Storage::get_config(env)?.roles;
        if !Self::holds(&roles, caller, role) {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    /// Admin or compliance may flip the pause switch
    pub fn require_pauser(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();

        let roles = Storage::get_config(env)?.roles;
        if !Self::holds(&roles, caller, Role::Admin) && !Self::holds(&roles, caller, Role::Compliance)
        {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    pub fn require_whitelisted(env: &Env, account: &Address) -> Result<(), Error> {
        if !Storage::is_whitelisted(env, account) {
            return Err(Error::NotWhitelisted);
        }
        Ok(())
    }

    /// Recipient check for unit transfers, skipped when the policy is off
    pub fn require_eligible_recipient(env: &Env, recipient: &Address) -> Result<(), Error> {
        if Storage::recipient_whitelist_required(env) {
            Self::require_whitelisted(env, recipient)?;
        }
        Ok(())
    }

    fn holds(roles: &Roles, caller: &Address, role: Role) -> bool {
        let expected = match role {
            Role::Admin => &roles.admin,
            Role::Compliance => &roles.compliance,
            Role::Treasurer => &roles.treasurer,
        };
        expected == caller
    }
}
