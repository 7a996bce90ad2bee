use crate::errors::SaleError;
use crate::events;
use crate::ledger::{clear_plan, purchased_amount, record_purchase, required_allocation};
use crate::policy::{has_ended, has_started, is_open, require_admin};
use crate::storage::*;
use crate::types::*;
use crate::vesting::{grant_vesting_plan, reclaim_vesting_plan};
use crate::whitelist;
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env, String, Vec};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Fixed-Price Token Sale with Vesting and Softcap Refunds"
);

#[contract]
pub struct TokenSaleContract;

/// Soroban has no null address; the sale itself is the one address that can
/// never be a valid provider or refund recipient.
fn require_external(env: &Env, address: &Address) -> Result<(), SaleError> {
    if *address == env.current_contract_address() {
        return Err(SaleError::ZeroAddress);
    }
    Ok(())
}

fn sold_token_decimals(env: &Env, config: &SaleConfig) -> u32 {
    token::Client::new(env, &config.sold_token).decimals()
}

#[contractimpl]
impl TokenSaleContract {
    /// Initialize the sale. The contract must afterwards be funded with
    /// `required_allocation()` sold tokens.
    pub fn initialize(
        env: Env,
        admin: Address,
        sold_token: Address,
        payment_token: Address,
        start_time: u64,
        end_time: u64,
        is_private_sale: bool,
        hard_cap: i128,
        soft_cap: i128,
        sale_price: i128,
    ) -> Result<(), SaleError> {
        if is_initialized(&env) {
            return Err(SaleError::AlreadyInitialized);
        }

        admin.require_auth();

        if sale_price <= 0 || start_time >= end_time || soft_cap < 0 || soft_cap > hard_cap {
            return Err(SaleError::InvalidSaleConfig);
        }

        let config = SaleConfig {
            sold_token,
            payment_token,
            start_time,
            end_time,
            is_private_sale,
            hard_cap,
            soft_cap,
            sale_price,
        };
        let state = SaleState {
            paused: false,
            total_invested: 0,
            total_refunded: 0,
            tokens_sold: 0,
            withdrawn: false,
            refund_address: admin.clone(),
            next_plan_id: 1,
        };

        set_admin(&env, &admin);
        set_config(&env, &config);
        set_state(&env, &state);

        events::sale_initialized(&env, &admin, &config);
        Ok(())
    }

    pub fn set_vesting_info(
        env: Env,
        caller: Address,
        lockup_plans: Address,
        cliff: u64,
        period: u64,
        length: u64,
    ) -> Result<(), SaleError> {
        require_admin(&env, &caller)?;
        require_external(&env, &lockup_plans)?;

        if period == 0 || length == 0 {
            return Err(SaleError::WrongVestingData);
        }
        if has_vesting_info(&env) {
            return Err(SaleError::VestingInfoAlreadySet);
        }

        let info = VestingInfo {
            lockup_plans,
            cliff,
            period,
            length,
        };
        set_vesting_info(&env, &info);

        events::vesting_info_set(&env, &info);
        Ok(())
    }

    pub fn set_soft_cap_refund_address(
        env: Env,
        caller: Address,
        address: Address,
    ) -> Result<(), SaleError> {
        require_admin(&env, &caller)?;
        require_external(&env, &address)?;

        let mut state = get_state(&env)?;
        state.refund_address = address.clone();
        set_state(&env, &state);

        events::refund_address_set(&env, &address);
        Ok(())
    }

    pub fn batch_white_list_add(
        env: Env,
        caller: Address,
        addresses: Vec<Address>,
    ) -> Result<(), SaleError> {
        require_admin(&env, &caller)?;
        whitelist::batch_add(&env, &addresses)?;

        events::whitelist_added(&env, &addresses);
        Ok(())
    }

    pub fn batch_white_list_remove(
        env: Env,
        caller: Address,
        addresses: Vec<Address>,
    ) -> Result<(), SaleError> {
        require_admin(&env, &caller)?;
        whitelist::batch_remove(&env, &addresses)?;

        events::whitelist_removed(&env, &addresses);
        Ok(())
    }

    /// Push the end of the sale further out. Only possible while it runs.
    pub fn extend_end_time(env: Env, caller: Address, new_end_time: u64) -> Result<(), SaleError> {
        require_admin(&env, &caller)?;

        let mut config = get_config(&env)?;
        let now = get_ledger_timestamp(&env);

        if has_ended(&config, now) {
            return Err(SaleError::SaleHasEnded);
        }
        // now < end_time here, so this also rejects anything not in the future
        if new_end_time <= config.end_time {
            return Err(SaleError::EndDateMustBeInFuture);
        }

        let old_end_time = config.end_time;
        config.end_time = new_end_time;
        set_config(&env, &config);

        events::end_time_extended(&env, old_end_time, new_end_time);
        Ok(())
    }

    /// Pause the sale
    pub fn pause_sale(env: Env, caller: Address, reason: String) -> Result<(), SaleError> {
        require_admin(&env, &caller)?;

        let config = get_config(&env)?;
        let mut state = get_state(&env)?;

        if has_ended(&config, get_ledger_timestamp(&env)) {
            return Err(SaleError::SaleHasEnded);
        }
        if state.paused {
            return Err(SaleError::SaleIsPaused);
        }

        state.paused = true;
        set_state(&env, &state);

        events::sale_paused(&env, &reason);
        Ok(())
    }

    /// Unpause the sale
    pub fn un_pause_sale(env: Env, caller: Address) -> Result<(), SaleError> {
        require_admin(&env, &caller)?;

        let config = get_config(&env)?;
        let mut state = get_state(&env)?;

        if has_ended(&config, get_ledger_timestamp(&env)) {
            return Err(SaleError::SaleHasEnded);
        }
        if !state.paused {
            return Err(SaleError::SaleIsActiveAlready);
        }

        state.paused = false;
        set_state(&env, &state);

        events::sale_unpaused(&env);
        Ok(())
    }

    /// Buy sold tokens with `amount` payment tokens. The tokens are locked in
    /// a vesting plan for `investor`; returns the sale's plan id.
    pub fn buy(env: Env, investor: Address, amount: i128) -> Result<u64, SaleError> {
        investor.require_auth();

        let config = get_config(&env)?;
        let mut state = get_state(&env)?;
        let now = get_ledger_timestamp(&env);

        if state.paused {
            return Err(SaleError::SaleIsPaused);
        }
        if !has_started(&config, now) {
            return Err(SaleError::SaleNotStarted);
        }
        if has_ended(&config, now) {
            return Err(SaleError::SaleHasEnded);
        }
        if amount <= 0 {
            return Err(SaleError::ZeroInputToken);
        }
        if config.is_private_sale && !is_whitelisted(&env, &investor) {
            return Err(SaleError::Unauthorized);
        }

        // total_invested never exceeds hard_cap, so the headroom cannot overflow
        if amount > config.hard_cap - state.total_invested {
            return Err(SaleError::HardcapReached);
        }

        let vesting = get_vesting_info(&env).ok_or(SaleError::VestingInfoNotSet)?;
        let tokens = purchased_amount(amount, sold_token_decimals(&env, &config), config.sale_price)?;
        // Below one unit of price precision the payment would buy nothing
        if tokens == 0 {
            return Err(SaleError::ZeroInputToken);
        }

        token::Client::new(&env, &config.payment_token).transfer(
            &investor,
            &env.current_contract_address(),
            &amount,
        );

        let lockup_plan_id =
            grant_vesting_plan(&env, &vesting, &config.sold_token, &investor, tokens, now);
        let plan_id = record_purchase(
            &env,
            &mut state,
            &investor,
            amount,
            tokens,
            lockup_plan_id,
            now,
        )?;

        log!(&env, "purchase recorded", investor, plan_id, amount, tokens);
        events::tokens_purchased(&env, &investor, plan_id, amount, tokens);
        Ok(plan_id)
    }

    /// Send the proceeds and the unsold remainder to `to` after a
    /// successful sale. Works once.
    pub fn withdraw_all(env: Env, caller: Address, to: Address) -> Result<(), SaleError> {
        require_admin(&env, &caller)?;

        let config = get_config(&env)?;
        let mut state = get_state(&env)?;

        if !has_ended(&config, get_ledger_timestamp(&env)) {
            return Err(SaleError::SaleHasNotEnded);
        }
        if state.withdrawn {
            return Err(SaleError::AlreadyWithdrawn);
        }
        if state.total_invested < config.soft_cap {
            return Err(SaleError::SoftcapNotReached);
        }

        state.withdrawn = true;
        set_state(&env, &state);

        let sale = env.current_contract_address();
        if state.total_invested > 0 {
            token::Client::new(&env, &config.payment_token).transfer(
                &sale,
                &to,
                &state.total_invested,
            );
        }

        let sold_token = token::Client::new(&env, &config.sold_token);
        let unsold = sold_token.balance(&sale);
        if unsold > 0 {
            sold_token.transfer(&sale, &to, &unsold);
        }

        events::proceeds_withdrawn(&env, &to, state.total_invested, unsold);
        Ok(())
    }

    /// Refund one purchase of a sale that missed its soft cap. Anyone may
    /// trigger it; the payment always goes back to the recorded investor and
    /// the vesting plan moves to the soft-cap refund address.
    pub fn refund(env: Env, investor: Address, plan_id: u64) -> Result<i128, SaleError> {
        let config = get_config(&env)?;
        let mut state = get_state(&env)?;

        if !has_ended(&config, get_ledger_timestamp(&env)) {
            return Err(SaleError::SaleHasNotEnded);
        }
        if state.total_invested >= config.soft_cap {
            return Err(SaleError::SoftcapReached);
        }

        let investment = clear_plan(&env, &mut state, &investor, plan_id)?;
        let vesting = get_vesting_info(&env).ok_or(SaleError::VestingInfoNotSet)?;

        token::Client::new(&env, &config.payment_token).transfer(
            &env.current_contract_address(),
            &investor,
            &investment.amount,
        );

        reclaim_vesting_plan(
            &env,
            &vesting,
            investment.lockup_plan_id,
            &state.refund_address,
        );

        log!(&env, "plan refunded", investor, plan_id, investment.amount);
        events::investment_refunded(
            &env,
            &investor,
            plan_id,
            investment.amount,
            &state.refund_address,
        );
        Ok(investment.amount)
    }

    // View functions
    pub fn admin(env: Env) -> Result<Address, SaleError> {
        get_admin(&env)
    }

    pub fn get_config(env: Env) -> Result<SaleConfig, SaleError> {
        get_config(&env)
    }

    pub fn get_state(env: Env) -> Result<SaleState, SaleError> {
        get_state(&env)
    }

    pub fn get_vesting_info(env: Env) -> Option<VestingInfo> {
        get_vesting_info(&env)
    }

    pub fn vesting_info_set(env: Env) -> bool {
        has_vesting_info(&env)
    }

    pub fn start_date(env: Env) -> Result<u64, SaleError> {
        Ok(get_config(&env)?.start_time)
    }

    pub fn end_date(env: Env) -> Result<u64, SaleError> {
        Ok(get_config(&env)?.end_time)
    }

    pub fn token_to_be_sold(env: Env) -> Result<Address, SaleError> {
        Ok(get_config(&env)?.sold_token)
    }

    pub fn token_to_be_accepted(env: Env) -> Result<Address, SaleError> {
        Ok(get_config(&env)?.payment_token)
    }

    pub fn sale_price(env: Env) -> Result<i128, SaleError> {
        Ok(get_config(&env)?.sale_price)
    }

    pub fn is_private_sale(env: Env) -> Result<bool, SaleError> {
        Ok(get_config(&env)?.is_private_sale)
    }

    pub fn hardcap(env: Env) -> Result<i128, SaleError> {
        Ok(get_config(&env)?.hard_cap)
    }

    pub fn soft_cap(env: Env) -> Result<i128, SaleError> {
        Ok(get_config(&env)?.soft_cap)
    }

    pub fn total_amount_invested(env: Env) -> Result<i128, SaleError> {
        Ok(get_state(&env)?.total_invested)
    }

    pub fn total_amount_refunded(env: Env) -> Result<i128, SaleError> {
        Ok(get_state(&env)?.total_refunded)
    }

    pub fn amount_of_token_sold(env: Env) -> Result<i128, SaleError> {
        Ok(get_state(&env)?.tokens_sold)
    }

    pub fn has_been_withdrawn(env: Env) -> Result<bool, SaleError> {
        Ok(get_state(&env)?.withdrawn)
    }

    pub fn soft_cap_admin_refund_address(env: Env) -> Result<Address, SaleError> {
        Ok(get_state(&env)?.refund_address)
    }

    pub fn next_plan_id(env: Env) -> Result<u64, SaleError> {
        Ok(get_state(&env)?.next_plan_id)
    }

    pub fn is_paused(env: Env) -> Result<bool, SaleError> {
        Ok(get_state(&env)?.paused)
    }

    pub fn is_sale_active(env: Env) -> Result<bool, SaleError> {
        let config = get_config(&env)?;
        let state = get_state(&env)?;
        Ok(is_open(&config, &state, get_ledger_timestamp(&env)))
    }

    pub fn has_sale_ended(env: Env) -> Result<bool, SaleError> {
        Ok(has_ended(&get_config(&env)?, get_ledger_timestamp(&env)))
    }

    pub fn is_white_listed(env: Env, address: Address) -> bool {
        is_whitelisted(&env, &address)
    }

    pub fn user_amount_invested(env: Env, investor: Address) -> i128 {
        get_user_invested(&env, &investor)
    }

    pub fn get_investment(env: Env, investor: Address, plan_id: u64) -> Option<Investment> {
        get_investment(&env, &investor, plan_id)
    }

    pub fn user_plans(env: Env, investor: Address) -> Vec<u64> {
        get_user_plans(&env, &investor)
    }

    /// Sold tokens the contract needs to hold to serve the whole hard cap.
    pub fn required_allocation(env: Env) -> Result<i128, SaleError> {
        let config = get_config(&env)?;
        required_allocation(
            config.hard_cap,
            sold_token_decimals(&env, &config),
            config.sale_price,
        )
    }
}
