/// Sale deployment fixtures
use super::constants::*;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, Vec as SorobanVec,
};
use token_sale::testutils::{MockLockupPlans, MockLockupPlansClient};
use token_sale::{TokenSaleContract, TokenSaleContractClient};

/// Parameters handed to `initialize`
#[derive(Clone, Debug)]
pub struct SaleParams {
    pub is_private_sale: bool,
    pub start: u64,
    pub duration: u64,
    pub soft_cap: i128,
    pub hard_cap: i128,
    pub sale_price: i128,
}

impl Default for SaleParams {
    fn default() -> Self {
        Self {
            is_private_sale: false,
            start: SALE_START,
            duration: SALE_DURATION,
            soft_cap: SOFT_CAP,
            hard_cap: HARD_CAP,
            sale_price: SALE_PRICE,
        }
    }
}

impl SaleParams {
    pub fn private() -> Self {
        Self {
            is_private_sale: true,
            ..Self::default()
        }
    }
}

/// A funded sale with both tokens and a mock lockup provider
pub struct SaleFixture<'a> {
    pub env: Env,
    pub admin: Address,
    pub sale: TokenSaleContractClient<'a>,
    pub payment: token::Client<'a>,
    pub payment_admin: token::StellarAssetClient<'a>,
    pub sold: token::Client<'a>,
    pub lockup: MockLockupPlansClient<'a>,
    pub funded: i128,
    pub params: SaleParams,
}

impl<'a> SaleFixture<'a> {
    /// Deploy, initialize and fund a sale. The ledger clock is set to the
    /// sale start and all auths are mocked.
    pub fn deploy(params: SaleParams) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(params.start);

        let admin = Address::generate(&env);
        let payment_id = env
            .register_stellar_asset_contract_v2(admin.clone())
            .address();
        let sold_id = env
            .register_stellar_asset_contract_v2(admin.clone())
            .address();

        let sale_id = env.register_contract(None, TokenSaleContract);
        let sale = TokenSaleContractClient::new(&env, &sale_id);
        sale.initialize(
            &admin,
            &sold_id,
            &payment_id,
            &params.start,
            &(params.start + params.duration),
            &params.is_private_sale,
            &params.hard_cap,
            &params.soft_cap,
            &params.sale_price,
        );

        let funded = sale.required_allocation();
        token::StellarAssetClient::new(&env, &sold_id).mint(&sale_id, &funded);

        let lockup_id = env.register_contract(None, MockLockupPlans);

        Self {
            admin,
            sale,
            payment: token::Client::new(&env, &payment_id),
            payment_admin: token::StellarAssetClient::new(&env, &payment_id),
            sold: token::Client::new(&env, &sold_id),
            lockup: MockLockupPlansClient::new(&env, &lockup_id),
            funded,
            params,
            env,
        }
    }

    /// Configure the default lockup schedule
    pub fn with_vesting(self) -> Self {
        self.sale.set_vesting_info(
            &self.admin,
            &self.lockup.address,
            &CLIFF,
            &VEST_PERIOD,
            &VEST_LENGTH,
        );
        self
    }

    /// New address holding `balance` payment tokens
    pub fn investor(&self, balance: i128) -> Address {
        let investor = Address::generate(&self.env);
        if balance > 0 {
            self.payment_admin.mint(&investor, &balance);
        }
        investor
    }

    pub fn investors(&self, count: usize, balance: i128) -> Vec<Address> {
        (0..count).map(|_| self.investor(balance)).collect()
    }

    pub fn whitelist(&self, addresses: &[Address]) {
        let list = SorobanVec::from_slice(&self.env, addresses);
        self.sale.batch_white_list_add(&self.admin, &list);
    }

    pub fn warp_to(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }

    /// Move the clock to the current end of the sale
    pub fn close(&self) {
        self.warp_to(self.sale.end_date());
    }

    /// Sold tokens bought with `payment` at the fixture's price
    pub fn tokens_for(&self, payment: i128) -> i128 {
        payment * TOKEN_UNIT / self.params.sale_price
    }
}
