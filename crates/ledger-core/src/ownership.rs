//! Fractional share transfers over the dual ownership maps.
//!
//! A company's `ownership_shares` map is the authoritative record; each
//! owner's `holdings` map mirrors the entries naming that owner. Transfers
//! keep both sides consistent and preserve the 100%-sum invariant: stakes
//! are moved between owners, never created or destroyed.
//!
//! Pricing reads the company valuation against pre-transaction state, and
//! every check runs before the first mutation (read-validate-then-commit).

use crate::actor::Actor;
use crate::error::{LedgerError, Result};
use crate::registry::Registry;
use types::Cash;

/// Total of a non-empty ownership map: stakes always sum to 100%.
pub const SHARE_SUM: f64 = 100.0;

/// Floating-point tolerance for share accounting. Residual stakes at or
/// below this threshold are treated as fully divested and removed.
pub const SHARE_EPSILON: f64 = 1e-6;

impl Registry {
    /// Transfer `share_pct` of `company` from `seller` to `buyer` at the
    /// current market price.
    ///
    /// The price is `valuation * share_pct / 100`, computed before any
    /// mutation. On success the price moves from buyer to seller, both
    /// ownership maps and both `holdings` mirrors are updated, and the
    /// executed price (rounded to 2 decimals) is returned.
    ///
    /// Fails with [`LedgerError::InvalidShare`] for a non-positive share,
    /// [`LedgerError::InsufficientShare`] when the seller's stake is too
    /// small, and [`LedgerError::InsufficientFunds`] when the buyer cannot
    /// pay. A failed validation mutates nothing.
    pub fn transfer_share(
        &mut self,
        company: &str,
        buyer: &str,
        seller: &str,
        share_pct: f64,
    ) -> Result<Cash> {
        if share_pct <= 0.0 {
            return Err(LedgerError::InvalidShare { share_pct });
        }
        let held = self.get(company)?.share_for(seller);
        self.get(seller)?;
        if held + SHARE_EPSILON < share_pct {
            return Err(LedgerError::InsufficientShare {
                company: company.to_string(),
                seller: seller.to_string(),
                requested: share_pct,
                held,
            });
        }
        let price = Cash::from_float(self.valuation(company)?.to_float() * (share_pct / 100.0));
        let available = self.get(buyer)?.balance();
        if available < price {
            return Err(LedgerError::InsufficientFunds {
                actor: buyer.to_string(),
                required: price,
                available,
            });
        }

        // Commit. Every check has passed; nothing below can fail.
        let (buyer_stake, seller_stake) = {
            let shares = self.get_mut(company)?.ownership_shares_mut();
            let remaining = shares.get(seller).copied().unwrap_or(0.0) - share_pct;
            if remaining <= SHARE_EPSILON {
                shares.remove(seller);
            } else {
                shares.insert(seller.to_string(), remaining);
            }
            *shares.entry(buyer.to_string()).or_insert(0.0) += share_pct;

            let company_actor = self.get(company)?;
            (company_actor.share_for(buyer), company_actor.share_for(seller))
        };

        self.get_mut(seller)?.adjust_balance(price);
        self.get_mut(buyer)?.adjust_balance(-price);

        self.sync_holdings_mirror(buyer, company, buyer_stake)?;
        self.sync_holdings_mirror(seller, company, seller_stake)?;

        debug_assert!(
            self.get(company)
                .map(Actor::ownership_is_consistent)
                .unwrap_or(true),
            "ownership shares must sum to 100%"
        );

        Ok(price)
    }

    /// Update `holder.holdings[company]` to mirror the company's ownership
    /// map. Self-stakes stay in `ownership_shares` only; entries are
    /// removed, not zeroed, on full divestment.
    fn sync_holdings_mirror(&mut self, holder: &str, company: &str, stake: f64) -> Result<()> {
        if holder == company {
            return Ok(());
        }
        let holdings = self.get_mut(holder)?.holdings_mut();
        if stake > 0.0 {
            holdings.insert(company.to_string(), stake);
        } else {
            holdings.remove(company);
        }
        Ok(())
    }
}
