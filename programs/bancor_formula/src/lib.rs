use anchor_lang::prelude::*;

pub mod instructions;
pub mod error;
pub mod math;
pub mod curve;

use instructions::*;
declare_id!("8RJJggyy2gFJZr23oe342361ucWxEeCos5dpMkcYuWCx");

#[program]
pub mod bancor_formula {
    use super::*;

    /// Smart tokens issued for depositing `amount` into a reserve with `weight` (ppm)
    pub fn purchase_return(
        ctx: Context<Quote>,
        supply: u64,
        balance: u64,
        weight: u32,
        amount: u64,
    ) -> Result<u64> {
        instructions::purchase_return(ctx, supply, balance, weight, amount)
    }

    /// Reserve tokens paid out for selling `amount` smart tokens
    pub fn sale_return(
        ctx: Context<Quote>,
        supply: u64,
        balance: u64,
        weight: u32,
        amount: u64,
    ) -> Result<u64> {
        instructions::sale_return(ctx, supply, balance, weight, amount)
    }

    /// Converts between two reserves of the same converter
    pub fn cross_reserve_return(
        ctx: Context<Quote>,
        source_balance: u64,
        source_weight: u32,
        target_balance: u64,
        target_weight: u32,
        amount: u64,
    ) -> Result<u64> {
        instructions::cross_reserve_return(
            ctx,
            source_balance,
            source_weight,
            target_balance,
            target_weight,
            amount,
        )
    }

    /// Reserve tokens needed to mint `amount` pool tokens
    /// ratio: sum of the pool's reserve weights, up to 2 * MAX_WEIGHT
    pub fn fund_cost(
        ctx: Context<Quote>,
        supply: u64,
        balance: u64,
        ratio: u32,
        amount: u64,
    ) -> Result<u64> {
        instructions::fund_cost(ctx, supply, balance, ratio, amount)
    }

    /// Pool tokens minted for depositing `amount` reserve tokens
    pub fn fund_supply_amount(
        ctx: Context<Quote>,
        supply: u64,
        balance: u64,
        ratio: u32,
        amount: u64,
    ) -> Result<u64> {
        instructions::fund_supply_amount(ctx, supply, balance, ratio, amount)
    }

    /// Reserve tokens returned for burning `amount` pool tokens
    pub fn liquidate_return(
        ctx: Context<Quote>,
        supply: u64,
        balance: u64,
        ratio: u32,
        amount: u64,
    ) -> Result<u64> {
        instructions::liquidate_return(ctx, supply, balance, ratio, amount)
    }

    pub fn power(
        ctx: Context<Quote>,
        base_n: u128,
        base_d: u128,
        exp_n: u32,
        exp_d: u32,
    ) -> Result<PowerOutput> {
        instructions::power(ctx, base_n, base_d, exp_n, exp_d)
    }

    pub fn normalized_weights(ctx: Context<Quote>, a: u128, b: u128) -> Result<WeightsOutput> {
        instructions::normalized_weights(ctx, a, b)
    }

    /// Weights that restore the reserve rate `rate_n / rate_d` once the primary reserve
    /// returns from `primary_balance` to `primary_staked`
    pub fn balanced_weights(
        ctx: Context<Quote>,
        primary_staked: u128,
        primary_balance: u128,
        secondary_balance: u128,
        rate_n: u128,
        rate_d: u128,
    ) -> Result<WeightsOutput> {
        instructions::balanced_weights(
            ctx,
            primary_staked,
            primary_balance,
            secondary_balance,
            rate_n,
            rate_d,
        )
    }
}
