//! Property-based tests for the engine's economic guarantees.
//!
//! Covers the four properties that must hold over the whole input space,
//! not just at hand-picked points:
//!
//! 1. **Quote inverse** — `quote_in(quote_out(x)) >= x`; rounding never
//!    favours the caller.
//! 2. **Invariant monotonicity** — `reserve_a·reserve_b` never decreases
//!    across swap sequences.
//! 3. **Deposit conservation** — mint followed by a full burn returns
//!    the deposit minus at most one rounding unit per asset.
//! 4. **Deposit sizing** — sized amounts never exceed the desired
//!    amounts and never fall below the caller's minimums.

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, BasisPoints, DepositSpec, FeeTier, SwapSpec, Timestamp,
};
use crate::engine::{quote_in, quote_out, size_deposit, MINIMUM_LIQUIDITY};
use crate::ledger::InMemoryLedger;
use crate::math::mul_wide;
use crate::pool::Pool;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const FEE_30BP: BasisPoints = BasisPoints::new(30);

fn asset(byte: u8) -> AssetId {
    AssetId::from_bytes([byte; 32])
}

fn acct(byte: u8) -> AccountId {
    AccountId::from_bytes([byte; 32])
}

fn funded_pool(reserve_a: u128, reserve_b: u128) -> (Pool<InMemoryLedger>, InMemoryLedger) {
    let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
        panic!("valid pair");
    };
    let Ok(config) = PoolConfig::new(
        pair,
        FeeTier::TIER_0_30_PERCENT,
        acct(100),
        acct(101),
        None,
    ) else {
        panic!("valid config");
    };
    let ledger = InMemoryLedger::new();
    let Ok(mut pool) = Pool::new(&config, ledger.clone()) else {
        panic!("valid pool");
    };

    let depositor = acct(10);
    ledger.credit(asset(1), depositor, Amount::new(reserve_a));
    ledger.credit(asset(2), depositor, Amount::new(reserve_b));
    let Ok(spec) = DepositSpec::unbounded(Amount::new(reserve_a), Amount::new(reserve_b)) else {
        panic!("valid deposit spec");
    };
    let Ok(_) = pool.add_liquidity(spec, depositor, Timestamp::new(1), None) else {
        panic!("seed deposit");
    };
    (pool, ledger)
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn quote_round_trip_never_favours_caller(
        reserve_in in 1_000u128..1_000_000_000_000,
        reserve_out in 1_000u128..1_000_000_000_000,
        amount_in in 1u128..1_000_000_000,
    ) {
        let r_in = Amount::new(reserve_in);
        let r_out = Amount::new(reserve_out);
        let Ok(out) = quote_out(Amount::new(amount_in), r_in, r_out, FEE_30BP) else {
            panic!("quote_out failed");
        };
        prop_assume!(!out.is_zero());
        let Ok(back) = quote_in(out, r_in, r_out, FEE_30BP) else {
            panic!("quote_in failed");
        };
        prop_assert!(back.get() >= amount_in);
    }

    #[test]
    fn invariant_never_decreases_across_swaps(
        reserve_a in 100_000u128..1_000_000_000,
        reserve_b in 100_000u128..1_000_000_000,
        amounts in proptest::collection::vec(1u128..50_000, 1..12),
    ) {
        let (mut pool, ledger) = funded_pool(reserve_a, reserve_b);
        let trader = acct(11);
        ledger.credit(asset(1), trader, Amount::new(u64::MAX as u128));
        ledger.credit(asset(2), trader, Amount::new(u64::MAX as u128));

        let mut clock = 10u64;
        let mut k = {
            let (a, b, _) = pool.reserves();
            mul_wide(a.get(), b.get())
        };
        for (i, raw) in amounts.iter().enumerate() {
            let Ok(spec) = SwapSpec::exact_in(Amount::new(*raw), Amount::ZERO) else {
                panic!("valid spec");
            };
            let asset_in = if i % 2 == 0 { asset(1) } else { asset(2) };
            clock += 1;
            let result = pool.swap(spec, asset_in, trader, trader, Timestamp::new(clock), None);
            // Tiny inputs may quote zero output; that rejection is fine,
            // the property is about accepted swaps.
            if result.is_err() {
                continue;
            }
            let (a, b, _) = pool.reserves();
            let k_after = mul_wide(a.get(), b.get());
            prop_assert!(k_after >= k, "k decreased: {k_after} < {k}");
            k = k_after;
        }
    }

    #[test]
    fn deposit_then_full_burn_conserves_within_rounding(
        reserve_a in 100_000u128..1_000_000_000,
        deposit_a in 1_000u128..100_000_000,
    ) {
        // A 1:4 pool keeps √(a·b) exact, so the deposit is exactly
        // proportional and conservation is tight.
        let (mut pool, ledger) = funded_pool(reserve_a, reserve_a * 4);
        let depositor = acct(12);
        ledger.credit(asset(1), depositor, Amount::new(u64::MAX as u128));
        ledger.credit(asset(2), depositor, Amount::new(u64::MAX as u128));

        let Ok(spec) = DepositSpec::unbounded(
            Amount::new(deposit_a),
            Amount::new(deposit_a * 4),
        ) else {
            panic!("valid spec");
        };
        let Ok(minted) = pool.add_liquidity(spec, depositor, Timestamp::new(5), None) else {
            panic!("mint failed");
        };

        let Ok(burned) = pool.remove_liquidity(
            minted.share_delta(),
            Amount::ZERO,
            Amount::ZERO,
            depositor,
            depositor,
            Timestamp::new(6),
            None,
        ) else {
            panic!("burn failed");
        };

        let diff_a = minted.amount_a().get() - burned.amount_a().get();
        let diff_b = minted.amount_b().get() - burned.amount_b().get();
        prop_assert!(diff_a <= 1, "asset A lost {diff_a} units");
        prop_assert!(diff_b <= 1, "asset B lost {diff_b} units");
    }

    #[test]
    fn sized_deposit_stays_within_desired(
        reserve_a in 1_000u128..1_000_000_000,
        reserve_b in 1_000u128..1_000_000_000,
        desired_a in 1u128..1_000_000,
        desired_b in 1u128..1_000_000,
    ) {
        let result = size_deposit(
            Amount::new(desired_a),
            Amount::new(desired_b),
            Amount::ZERO,
            Amount::ZERO,
            Amount::new(reserve_a),
            Amount::new(reserve_b),
        );
        let Ok((a, b)) = result else {
            // Dust deposits can legitimately fail sizing.
            return Ok(());
        };
        prop_assert!(a.get() <= desired_a);
        prop_assert!(b.get() <= desired_b);
        // One side is always pinned to its desired amount.
        prop_assert!(a.get() == desired_a || b.get() == desired_b);
    }
}

// ---------------------------------------------------------------------------
// Deterministic companion checks
// ---------------------------------------------------------------------------

#[test]
fn minimum_liquidity_is_locked_forever() {
    let (mut pool, _ledger) = funded_pool(1_000_000, 1_000_000);
    let depositor = acct(10);
    let held = pool.share_balance(&depositor);

    // Burning every share the depositor holds still leaves the locked
    // minimum outstanding.
    let Ok(_) = pool.remove_liquidity(
        held,
        Amount::ZERO,
        Amount::ZERO,
        depositor,
        depositor,
        Timestamp::new(2),
        None,
    ) else {
        panic!("expected Ok");
    };
    assert_eq!(pool.total_shares(), MINIMUM_LIQUIDITY);
    assert_eq!(
        pool.share_balance(&crate::pool::ShareLedger::LOCKED),
        MINIMUM_LIQUIDITY
    );
    let (reserve_a, reserve_b, _) = pool.reserves();
    assert!(!reserve_a.is_zero());
    assert!(!reserve_b.is_zero());
}
