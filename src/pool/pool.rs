//! The pool orchestrator.
//!
//! [`Pool`] owns one [`ReserveState`] and one [`ShareLedger`], composes
//! the pure engine functions, and talks to the external asset ledgers
//! through a [`LedgerPort`]. Every mutating operation follows the same
//! shape:
//!
//! 1. preconditions (pause flag, deadline, asset membership, sizing)
//! 2. external transfers through the untrusted port
//! 3. balance re-reads and the fee-adjusted invariant check on the
//!    *realized* amounts
//! 4. commit — a run of infallible writes, so an operation either
//!    applies completely or leaves the pool untouched
//!
//! Mutating methods take `&mut self`: within one `Pool` value Rust's
//! borrow rules already serialize operations. Callers in genuinely
//! concurrent settings wrap the pool in
//! [`SharedPool`](crate::pool::SharedPool), which holds an exclusive
//! lock for the whole operation including the port calls.

use tracing::{info, warn};

use super::reserve_state::ReserveState;
use super::share_ledger::ShareLedger;
use crate::config::PoolConfig;
use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, DepositSpec, FeeTier, LiquidityDirection,
    LiquidityRecord, Shares, SwapSpec, Timestamp, TradeRecord,
};
use crate::engine::{
    accrued_fee_shares, check_fee_adjusted_invariant, initial_shares, proportional_shares,
    quote_in, quote_out, redemption_amounts, size_deposit, MINIMUM_LIQUIDITY,
};
use crate::error::AmmError;
use crate::ledger::LedgerPort;
use crate::math::U256;

/// A constant-product pool over one canonically ordered asset pair.
///
/// Created once per pair by an external registry via [`Pool::new`]; all
/// numeric state starts at zero and the first
/// [`add_liquidity`](Self::add_liquidity) establishes the price.
///
/// # Trust model
///
/// The pool trusts its caller to have authenticated `trader`, `owner`,
/// and `depositor` identities (that is the embedding platform's job). It
/// does **not** trust the [`LedgerPort`]: realized amounts are always
/// re-derived from balance deltas and checked against the fee-adjusted
/// invariant.
#[derive(Debug)]
pub struct Pool<L> {
    pair: AssetPair,
    fee: FeeTier,
    pool_account: AccountId,
    admin: AccountId,
    protocol_fee_recipient: Option<AccountId>,
    paused: bool,
    reserves: ReserveState,
    shares: ShareLedger,
    ledger: L,
}

impl<L: LedgerPort> Pool<L> {
    /// Creates a pool from a validated configuration and a ledger port.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the configuration
    /// fails validation.
    pub fn new(config: &PoolConfig, ledger: L) -> crate::error::Result<Self> {
        config.validate()?;
        Ok(Self {
            pair: *config.pair(),
            fee: config.fee(),
            pool_account: config.pool_account(),
            admin: config.admin(),
            protocol_fee_recipient: config.protocol_fee_recipient(),
            paused: false,
            reserves: ReserveState::new(),
            shares: ShareLedger::new(),
            ledger,
        })
    }

    // -- Observability surface ----------------------------------------------

    /// Returns the canonically ordered asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the swap fee tier.
    #[must_use]
    pub const fn fee(&self) -> FeeTier {
        self.fee
    }

    /// Returns the pool's custody account on the external ledger.
    #[must_use]
    pub const fn pool_account(&self) -> AccountId {
        self.pool_account
    }

    /// Returns the admin account.
    #[must_use]
    pub const fn admin(&self) -> AccountId {
        self.admin
    }

    /// Returns `true` while the pool is paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns the configured protocol fee recipient.
    #[must_use]
    pub const fn protocol_fee_recipient(&self) -> Option<AccountId> {
        self.protocol_fee_recipient
    }

    /// Returns `(reserve_a, reserve_b, last_update)`.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount, Timestamp) {
        (
            self.reserves.reserve_a(),
            self.reserves.reserve_b(),
            self.reserves.last_update(),
        )
    }

    /// Returns the two cumulative price accumulators.
    #[must_use]
    pub const fn cumulative_prices(&self) -> (U256, U256) {
        (
            self.reserves.cumulative_price_a(),
            self.reserves.cumulative_price_b(),
        )
    }

    /// Returns the total outstanding shares.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.shares.total()
    }

    /// Returns the share balance of `owner`.
    #[must_use]
    pub fn share_balance(&self, owner: &AccountId) -> Shares {
        self.shares.balance_of(owner)
    }

    // -- Read-only pricing ---------------------------------------------------

    /// Quotes the output of the counterpart asset for an exact input of
    /// `asset_in`, against current reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if `asset_in` is not in the pair.
    /// - Any error from [`quote_out`].
    pub fn quote_exact_in(&self, asset_in: AssetId, amount_in: Amount) -> crate::error::Result<Amount> {
        let (reserve_in, reserve_out) = self.oriented_reserves(&asset_in)?;
        quote_out(amount_in, reserve_in, reserve_out, self.fee.basis_points())
    }

    /// Quotes the required input of `asset_in` for an exact output of
    /// the counterpart asset, against current reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if `asset_in` is not in the pair.
    /// - Any error from [`quote_in`].
    pub fn quote_exact_out(
        &self,
        asset_in: AssetId,
        amount_out: Amount,
    ) -> crate::error::Result<Amount> {
        let (reserve_in, reserve_out) = self.oriented_reserves(&asset_in)?;
        quote_in(amount_out, reserve_in, reserve_out, self.fee.basis_points())
    }

    // -- Admin gate ----------------------------------------------------------

    /// Pauses or unpauses the pool. Admin only.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Unauthorized`] if `caller` is not the admin.
    pub fn set_paused(&mut self, caller: AccountId, paused: bool) -> crate::error::Result<()> {
        self.ensure_admin(caller)?;
        self.paused = paused;
        Ok(())
    }

    /// Reconfigures the protocol fee recipient. Admin only.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Unauthorized`] if `caller` is not the admin.
    /// - [`AmmError::InvalidConfiguration`] if the recipient is the
    ///   locked-share sink.
    pub fn set_protocol_fee_recipient(
        &mut self,
        caller: AccountId,
        recipient: Option<AccountId>,
    ) -> crate::error::Result<()> {
        self.ensure_admin(caller)?;
        if recipient == Some(ShareLedger::LOCKED) {
            return Err(AmmError::InvalidConfiguration(
                "protocol fee recipient collides with the locked-share sink",
            ));
        }
        self.protocol_fee_recipient = recipient;
        Ok(())
    }

    // -- Share transfer -------------------------------------------------------

    /// Transfers shares between holders.
    ///
    /// Shares are fungible; moving them does not touch reserves, so this
    /// works even while the pool is paused.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Unauthorized`] if `from` is the locked sink.
    /// - [`AmmError::InsufficientShares`] if `from`'s balance is too low.
    pub fn transfer_shares(
        &mut self,
        from: AccountId,
        to: AccountId,
        shares: Shares,
    ) -> crate::error::Result<()> {
        self.shares.transfer(from, to, shares)
    }

    // -- Swap -----------------------------------------------------------------

    /// Executes a trade against the pool.
    ///
    /// Pulls the input asset from `trader`, pushes the output asset to
    /// `recipient`, re-reads the pool's post-transfer balances, and
    /// commits only if the fee-adjusted invariant held on the realized
    /// amounts. Returns the [`TradeRecord`] carrying those realized
    /// amounts.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Paused`] / [`AmmError::DeadlineExpired`] /
    ///   [`AmmError::InvalidAsset`] from the preconditions.
    /// - [`AmmError::InsufficientOutputAmount`] /
    ///   [`AmmError::ExcessiveInputAmount`] if the slippage bound fails.
    /// - [`AmmError::TransferFailed`] if the port refuses a transfer.
    /// - [`AmmError::InvariantViolation`] if the post-trade check fails;
    ///   no pool state is written.
    pub fn swap(
        &mut self,
        spec: SwapSpec,
        asset_in: AssetId,
        trader: AccountId,
        recipient: AccountId,
        now: Timestamp,
        deadline: Option<Timestamp>,
    ) -> crate::error::Result<TradeRecord> {
        let result = self.swap_inner(spec, asset_in, trader, recipient, now, deadline);
        if let Err(error) = &result {
            note_failure("swap", error);
        }
        result
    }

    fn swap_inner(
        &mut self,
        spec: SwapSpec,
        asset_in: AssetId,
        trader: AccountId,
        recipient: AccountId,
        now: Timestamp,
        deadline: Option<Timestamp>,
    ) -> crate::error::Result<TradeRecord> {
        self.ensure_live()?;
        ensure_deadline(now, deadline)?;
        let asset_out = self.pair.other(&asset_in)?;
        let (reserve_in, reserve_out) = self.oriented_reserves(&asset_in)?;
        let fee = self.fee.basis_points();

        let (nominal_in, nominal_out) = match spec {
            SwapSpec::ExactIn {
                amount_in,
                min_amount_out,
            } => {
                let out = quote_out(amount_in, reserve_in, reserve_out, fee)?;
                if out < min_amount_out {
                    return Err(AmmError::InsufficientOutputAmount);
                }
                if out.is_zero() {
                    return Err(AmmError::InsufficientLiquidity);
                }
                (amount_in, out)
            }
            SwapSpec::ExactOut {
                amount_out,
                max_amount_in,
            } => {
                let needed = quote_in(amount_out, reserve_in, reserve_out, fee)?;
                if needed > max_amount_in {
                    return Err(AmmError::ExcessiveInputAmount);
                }
                (needed, amount_out)
            }
        };

        // External movements; the per-pool critical section is held
        // across these calls.
        self.ledger
            .transfer_from(asset_in, trader, self.pool_account, nominal_in)?;
        self.ledger
            .transfer(asset_out, self.pool_account, recipient, nominal_out)?;

        // Realized amounts come from balance deltas, never the request.
        let balance_in = self.ledger.balance_of(asset_in, self.pool_account)?;
        let balance_out = self.ledger.balance_of(asset_out, self.pool_account)?;
        let realized_in = balance_in
            .checked_sub(&reserve_in)
            .ok_or(AmmError::InvariantViolation)?;
        let realized_out = reserve_out
            .checked_sub(&balance_out)
            .ok_or(AmmError::InvariantViolation)?;
        if realized_in.is_zero() {
            return Err(AmmError::ZeroInput);
        }
        if realized_out.is_zero() {
            return Err(AmmError::ZeroOutput);
        }

        check_fee_adjusted_invariant(
            balance_in,
            balance_out,
            realized_in,
            reserve_in,
            reserve_out,
            fee,
        )?;

        let (new_a, new_b) = self.canonical_balances(&asset_in, balance_in, balance_out);
        ReserveState::ensure_within_ceiling(new_a, new_b)?;
        let record = TradeRecord::new(asset_in, asset_out, realized_in, realized_out, recipient)?;

        // Commit.
        self.reserves.commit(new_a, new_b, now);

        info!(
            asset_in = %record.asset_in(),
            asset_out = %record.asset_out(),
            amount_in = %record.amount_in(),
            amount_out = %record.amount_out(),
            recipient = %record.recipient(),
            "trade executed"
        );
        Ok(record)
    }

    // -- Liquidity ------------------------------------------------------------

    /// Deposits both assets and mints shares to `depositor`.
    ///
    /// The deposit is sized to the current reserve ratio (the first
    /// deposit on an empty pool sets the ratio instead), the protocol
    /// fee is accrued, and share issuance is computed from the balance
    /// deltas actually received. The first deposit permanently locks
    /// [`MINIMUM_LIQUIDITY`] shares in an unreachable sink.
    ///
    /// # Errors
    ///
    /// - [`AmmError::SlippageExceeded`] if sizing cannot honour the
    ///   caller's minimums.
    /// - [`AmmError::InsufficientLiquidityMinted`] if the deposit is too
    ///   small to mint shares.
    /// - [`AmmError::TransferFailed`] if the port refuses a pull.
    pub fn add_liquidity(
        &mut self,
        spec: DepositSpec,
        depositor: AccountId,
        now: Timestamp,
        deadline: Option<Timestamp>,
    ) -> crate::error::Result<LiquidityRecord> {
        let result = self.add_liquidity_inner(spec, depositor, now, deadline);
        if let Err(error) = &result {
            note_failure("add_liquidity", error);
        }
        result
    }

    fn add_liquidity_inner(
        &mut self,
        spec: DepositSpec,
        depositor: AccountId,
        now: Timestamp,
        deadline: Option<Timestamp>,
    ) -> crate::error::Result<LiquidityRecord> {
        self.ensure_live()?;
        ensure_deadline(now, deadline)?;

        let reserve_a = self.reserves.reserve_a();
        let reserve_b = self.reserves.reserve_b();
        let (amount_a, amount_b) = size_deposit(
            spec.desired_a(),
            spec.desired_b(),
            spec.min_a(),
            spec.min_b(),
            reserve_a,
            reserve_b,
        )?;

        // Accrue the protocol fee before any share sizing so the
        // dilution is priced in.
        let fee_shares = self.staged_fee_shares()?;
        let total_after_accrual = self
            .shares
            .total()
            .checked_add(&fee_shares)
            .ok_or(AmmError::Overflow("share supply overflow"))?;

        let asset_a = self.pair.first();
        let asset_b = self.pair.second();
        self.ledger
            .transfer_from(asset_a, depositor, self.pool_account, amount_a)?;
        self.ledger
            .transfer_from(asset_b, depositor, self.pool_account, amount_b)?;

        // Share issuance is computed from what actually arrived.
        let balance_a = self.ledger.balance_of(asset_a, self.pool_account)?;
        let balance_b = self.ledger.balance_of(asset_b, self.pool_account)?;
        let actual_a = balance_a
            .checked_sub(&reserve_a)
            .ok_or(AmmError::InvariantViolation)?;
        let actual_b = balance_b
            .checked_sub(&reserve_b)
            .ok_or(AmmError::InvariantViolation)?;

        let first_deposit = total_after_accrual.is_zero();
        let minted = if first_deposit {
            initial_shares(actual_a, actual_b)?
        } else {
            proportional_shares(actual_a, actual_b, reserve_a, reserve_b, total_after_accrual)?
        };

        // Remaining failure modes, checked before any write.
        ReserveState::ensure_within_ceiling(balance_a, balance_b)?;
        let mut to_mint = fee_shares
            .checked_add(&minted)
            .ok_or(AmmError::Overflow("share supply overflow"))?;
        if first_deposit {
            to_mint = to_mint
                .checked_add(&MINIMUM_LIQUIDITY)
                .ok_or(AmmError::Overflow("share supply overflow"))?;
        }
        self.shares.ensure_can_mint(to_mint)?;

        // Commit.
        self.mint_staged_fee_shares(fee_shares);
        if first_deposit {
            let _ = self.shares.mint(ShareLedger::LOCKED, MINIMUM_LIQUIDITY);
        }
        let _ = self.shares.mint(depositor, minted);
        self.reserves.commit(balance_a, balance_b, now);
        self.reserves.record_liquidity_event();

        let record = LiquidityRecord::new(
            LiquidityDirection::Minted,
            actual_a,
            actual_b,
            minted,
            depositor,
        );
        info!(
            amount_a = %record.amount_a(),
            amount_b = %record.amount_b(),
            shares = %record.share_delta(),
            owner = %record.owner(),
            "liquidity minted"
        );
        Ok(record)
    }

    /// Burns `shares` from `owner` and pushes the proportional reserve
    /// slices to `recipient`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientShares`] if `owner` holds fewer shares.
    /// - [`AmmError::InsufficientLiquidityBurned`] if either returned
    ///   amount floors to zero.
    /// - [`AmmError::SlippageExceeded`] if an amount falls below the
    ///   caller's minimum.
    /// - [`AmmError::Unauthorized`] if `owner` is the locked sink.
    #[allow(clippy::too_many_arguments)]
    pub fn remove_liquidity(
        &mut self,
        shares: Shares,
        min_a: Amount,
        min_b: Amount,
        owner: AccountId,
        recipient: AccountId,
        now: Timestamp,
        deadline: Option<Timestamp>,
    ) -> crate::error::Result<LiquidityRecord> {
        let result = self.remove_liquidity_inner(shares, min_a, min_b, owner, recipient, now, deadline);
        if let Err(error) = &result {
            note_failure("remove_liquidity", error);
        }
        result
    }

    #[allow(clippy::too_many_arguments)]
    fn remove_liquidity_inner(
        &mut self,
        shares: Shares,
        min_a: Amount,
        min_b: Amount,
        owner: AccountId,
        recipient: AccountId,
        now: Timestamp,
        deadline: Option<Timestamp>,
    ) -> crate::error::Result<LiquidityRecord> {
        self.ensure_live()?;
        ensure_deadline(now, deadline)?;
        if owner == ShareLedger::LOCKED {
            return Err(AmmError::Unauthorized);
        }
        if shares.is_zero() {
            return Err(AmmError::InsufficientLiquidityBurned);
        }
        if self.shares.balance_of(&owner) < shares {
            return Err(AmmError::InsufficientShares);
        }

        let fee_shares = self.staged_fee_shares()?;
        let total_after_accrual = self
            .shares
            .total()
            .checked_add(&fee_shares)
            .ok_or(AmmError::Overflow("share supply overflow"))?;

        let reserve_a = self.reserves.reserve_a();
        let reserve_b = self.reserves.reserve_b();
        let (amount_a, amount_b) =
            redemption_amounts(shares, reserve_a, reserve_b, total_after_accrual)?;
        if amount_a < min_a || amount_b < min_b {
            return Err(AmmError::SlippageExceeded);
        }

        let asset_a = self.pair.first();
        let asset_b = self.pair.second();
        self.ledger
            .transfer(asset_a, self.pool_account, recipient, amount_a)?;
        self.ledger
            .transfer(asset_b, self.pool_account, recipient, amount_b)?;

        let balance_a = self.ledger.balance_of(asset_a, self.pool_account)?;
        let balance_b = self.ledger.balance_of(asset_b, self.pool_account)?;
        ReserveState::ensure_within_ceiling(balance_a, balance_b)?;

        // Commit. The owner's balance and the sink were checked above,
        // so the burn cannot fail here.
        self.mint_staged_fee_shares(fee_shares);
        let _ = self.shares.burn(owner, shares);
        self.reserves.commit(balance_a, balance_b, now);
        self.reserves.record_liquidity_event();

        let record = LiquidityRecord::new(
            LiquidityDirection::Burned,
            amount_a,
            amount_b,
            shares,
            owner,
        );
        info!(
            amount_a = %record.amount_a(),
            amount_b = %record.amount_b(),
            shares = %record.share_delta(),
            owner = %record.owner(),
            "liquidity burned"
        );
        Ok(record)
    }

    // -- Internals ------------------------------------------------------------

    /// Computes the protocol fee shares owed for invariant growth since
    /// the last liquidity event, without minting them.
    fn staged_fee_shares(&self) -> crate::error::Result<Shares> {
        if self.protocol_fee_recipient.is_none() {
            return Ok(Shares::ZERO);
        }
        accrued_fee_shares(self.reserves.k_last(), self.reserves.k(), self.shares.total())
    }

    /// Mints previously staged fee shares. The supply headroom was
    /// checked when the shares were staged.
    fn mint_staged_fee_shares(&mut self, fee_shares: Shares) {
        if fee_shares.is_zero() {
            return;
        }
        if let Some(recipient) = self.protocol_fee_recipient {
            let _ = self.shares.mint(recipient, fee_shares);
        }
    }

    const fn ensure_live(&self) -> crate::error::Result<()> {
        if self.paused {
            return Err(AmmError::Paused);
        }
        Ok(())
    }

    fn ensure_admin(&self, caller: AccountId) -> crate::error::Result<()> {
        if caller != self.admin {
            return Err(AmmError::Unauthorized);
        }
        Ok(())
    }

    /// Orients current reserves as `(reserve_in, reserve_out)` for the
    /// given input asset.
    fn oriented_reserves(&self, asset_in: &AssetId) -> crate::error::Result<(Amount, Amount)> {
        if *asset_in == self.pair.first() {
            Ok((self.reserves.reserve_a(), self.reserves.reserve_b()))
        } else if *asset_in == self.pair.second() {
            Ok((self.reserves.reserve_b(), self.reserves.reserve_a()))
        } else {
            Err(AmmError::InvalidAsset)
        }
    }

    /// Maps oriented balances back to canonical `(a, b)` order.
    fn canonical_balances(
        &self,
        asset_in: &AssetId,
        balance_in: Amount,
        balance_out: Amount,
    ) -> (Amount, Amount) {
        if *asset_in == self.pair.first() {
            (balance_in, balance_out)
        } else {
            (balance_out, balance_in)
        }
    }
}

fn ensure_deadline(now: Timestamp, deadline: Option<Timestamp>) -> crate::error::Result<()> {
    if let Some(deadline) = deadline {
        if now > deadline {
            return Err(AmmError::DeadlineExpired);
        }
    }
    Ok(())
}

fn note_failure(operation: &'static str, error: &AmmError) {
    if error.is_security_relevant() {
        warn!(operation, error = %error, "security-relevant failure");
    }
}
