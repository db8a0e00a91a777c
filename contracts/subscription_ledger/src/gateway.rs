use crate::error::Error;
use soroban_sdk::{log, token, Address, Env};

/// Thin wrapper over the currency token contract.
///
/// Every call goes through the `try_` client so a denial (missing
/// allowance, short balance, trapped token) surfaces as
/// `CurrencyTransferFailed` instead of aborting the host. Callers must
/// not write ledger state until the gateway call has returned `Ok`.
pub struct CurrencyGateway<'a> {
    env: &'a Env,
    client: token::Client<'a>,
}

impl<'a> CurrencyGateway<'a> {
    pub fn new(env: &'a Env, currency: &Address) -> Self {
        Self {
            env,
            client: token::Client::new(env, currency),
        }
    }

    /// Pull `amount` from `owner` into the ledger, spending the allowance
    /// `owner` granted to the ledger contract.
    pub fn pull(&self, owner: &Address, amount: i128) -> Result<(), Error> {
        let ledger = self.env.current_contract_address();
        match self
            .client
            .try_transfer_from(&ledger, owner, &ledger, &amount)
        {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(self.env, "currency pull denied", owner.clone(), amount);
                Err(Error::CurrencyTransferFailed)
            }
        }
    }

    /// Push `amount` from the ledger to `to`.
    pub fn push(&self, to: &Address, amount: i128) -> Result<(), Error> {
        let ledger = self.env.current_contract_address();
        match self.client.try_transfer(&ledger, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(self.env, "currency push denied", to.clone(), amount);
                Err(Error::CurrencyTransferFailed)
            }
        }
    }

    /// Currency the token contract reports as held by the ledger
    pub fn held(&self) -> i128 {
        self.client.balance(&self.env.current_contract_address())
    }
}
