//! Atomic money and asset transfers between actors.
//!
//! Every operation follows the same discipline as the share ledger:
//! validate fully against pre-transaction state, then commit. An operation
//! and its monetary counterpart both happen or neither does.

use crate::error::{LedgerError, Result};
use crate::registry::Registry;
use types::{AssetId, Cash};

impl Registry {
    /// Move `amount` from `sender` to `recipient`.
    ///
    /// Fails with [`LedgerError::InvalidAmount`] for a non-positive amount
    /// and [`LedgerError::InsufficientFunds`] when the sender cannot cover
    /// it. Money is conserved exactly: the debit equals the credit.
    pub fn transfer_money(&mut self, sender: &str, recipient: &str, amount: Cash) -> Result<()> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount { amount });
        }
        self.get(recipient)?;
        let available = self.get(sender)?.balance();
        if available < amount {
            return Err(LedgerError::InsufficientFunds {
                actor: sender.to_string(),
                required: amount,
                available,
            });
        }

        self.get_mut(sender)?.adjust_balance(-amount);
        self.get_mut(recipient)?.adjust_balance(amount);
        Ok(())
    }

    /// Sell an asset from `seller` to `buyer` at `price` (defaulting to the
    /// asset's book value).
    ///
    /// The asset record moves between the collections with its id intact;
    /// it is never duplicated. Returns the price paid.
    pub fn transfer_asset(
        &mut self,
        seller: &str,
        buyer: &str,
        asset_id: AssetId,
        price: Option<Cash>,
    ) -> Result<Cash> {
        self.get(buyer)?;
        let seller_actor = self.get(seller)?;
        let index = seller_actor
            .assets()
            .iter()
            .position(|a| a.id == asset_id)
            .ok_or_else(|| LedgerError::AssetNotOwned {
                actor: seller.to_string(),
                asset: asset_id,
            })?;
        let cost = price.unwrap_or(seller_actor.assets()[index].value);
        let available = self.get(buyer)?.balance();
        if available < cost {
            return Err(LedgerError::InsufficientFunds {
                actor: buyer.to_string(),
                required: cost,
                available,
            });
        }

        let asset = self.get_mut(seller)?.assets_mut().remove(index);
        self.get_mut(seller)?.adjust_balance(cost);
        self.get_mut(buyer)?.assets_mut().push(asset);
        self.get_mut(buyer)?.adjust_balance(-cost);
        Ok(cost)
    }

    /// Pay one period's rent on the named asset: transfers the asset's
    /// periodic cash flow from `payer` to the asset's current owner.
    ///
    /// Rent-free assets (zero cash flow) short-circuit to `Ok(0)` with no
    /// money movement. Returns the rent paid.
    pub fn pay_rent(&mut self, payer: &str, asset_name: &str) -> Result<Cash> {
        let (owner, asset) = self.find_asset(asset_name)?;
        let owner = owner.name().to_string();
        let rent = asset.cash_flow_per_period;
        if !rent.is_positive() {
            return Ok(Cash::ZERO);
        }
        self.transfer_money(payer, &owner, rent)?;
        Ok(rent)
    }
}
