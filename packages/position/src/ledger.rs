// Token Ledger Capability

use kelpswap_math::CoreError;
use soroban_sdk::{token, Address};

/// Allowances granted through [`TokenLedger::approve`] stay live for this
/// many ledgers (about 30 days at 5s per ledger).
pub const APPROVAL_LEDGERS: u32 = 518_400;

/// Minimal token interface the position layer needs to settle fees.
pub trait TokenLedger {
    fn balance_of(&self, id: &Address) -> u128;
    fn allowance(&self, from: &Address, spender: &Address) -> u128;
    fn approve(&self, from: &Address, spender: &Address, amount: u128) -> Result<(), CoreError>;
    fn transfer(&self, from: &Address, to: &Address, amount: u128) -> Result<(), CoreError>;
    fn transfer_from(
        &self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), CoreError>;
}

#[inline]
fn to_token_amount(amount: u128) -> Result<i128, CoreError> {
    i128::try_from(amount).map_err(|_| CoreError::InvalidAmount)
}

#[inline]
fn from_token_amount(amount: i128) -> u128 {
    if amount < 0 {
        0
    } else {
        amount as u128
    }
}

/// Balances and allowances are checked up front so shortfalls surface as
/// errors rather than host traps.
impl TokenLedger for token::Client<'_> {
    fn balance_of(&self, id: &Address) -> u128 {
        from_token_amount(self.balance(id))
    }

    fn allowance(&self, from: &Address, spender: &Address) -> u128 {
        from_token_amount(token::Client::allowance(self, from, spender))
    }

    fn approve(&self, from: &Address, spender: &Address, amount: u128) -> Result<(), CoreError> {
        let amount = to_token_amount(amount)?;
        let live_until = self.env.ledger().sequence() + APPROVAL_LEDGERS;
        token::Client::approve(self, from, spender, &amount, &live_until);
        Ok(())
    }

    fn transfer(&self, from: &Address, to: &Address, amount: u128) -> Result<(), CoreError> {
        let value = to_token_amount(amount)?;
        if self.balance_of(from) < amount {
            return Err(CoreError::InsufficientBalance);
        }
        token::Client::transfer(self, from, to, &value);
        Ok(())
    }

    fn transfer_from(
        &self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), CoreError> {
        let value = to_token_amount(amount)?;
        if TokenLedger::allowance(self, from, spender) < amount {
            return Err(CoreError::InsufficientAllowance);
        }
        if self.balance_of(from) < amount {
            return Err(CoreError::InsufficientBalance);
        }
        token::Client::transfer_from(self, spender, from, to, &value);
        Ok(())
    }
}
