#![allow(dead_code)]

use soroban_sdk::{
    testutils::{Address as _, Events as _, Ledger},
    token::{Client as TokenClient, StellarAssetClient},
    vec, Address, Env, Symbol, TryFromVal, Val, Vec,
};

use token_sale::{BucketConfig, SaleConfig, TierThresholds, TokenSale, TokenSaleClient};

pub const RATE: i128 = 1_000;
pub const START: u64 = 1_000_000;
pub const WEEK: u64 = 604_800;
pub const END: u64 = START + WEEK;
pub const SUPPLY: i128 = 50_000 * 1_000_000_000_000_000_000;
pub const SOFT_CAP: i128 = 1_000_000;
pub const HARD_CAP: i128 = 10_000_000_000;
pub const MIN_CONTRIBUTION: i128 = 1_000;

pub const SMALLEST_SUM: i128 = 1_000;
pub const SMALLER_SUM: i128 = 100_000;
pub const MEDIUM_SUM: i128 = 1_000_000;
pub const BIGGER_SUM: i128 = 1_000_000_000;
pub const BIGGEST_SUM: i128 = 1_000_000_000_000;

pub const TEAM_BUCKET: u32 = 1;
pub const TEAM_CAPACITY: i128 = 1_000_000;
pub const MARKETING_BUCKET: u32 = 2;
pub const MARKETING_CAPACITY: i128 = 5_000_000;

pub struct Setup {
    pub env: Env,
    pub sale: TokenSaleClient<'static>,
    pub sale_id: Address,
    pub token: TokenClient<'static>,
    pub payment: TokenClient<'static>,
    pub owner: Address,
    pub wallet: Address,
}

pub fn thresholds() -> TierThresholds {
    TierThresholds {
        smallest: SMALLEST_SUM,
        smaller: SMALLER_SUM,
        medium: MEDIUM_SUM,
        bigger: BIGGER_SUM,
        biggest: BIGGEST_SUM,
    }
}

/// Sale funded with the whole token supply, ledger clock at `START`.
pub fn setup() -> Setup {
    setup_funded(SUPPLY)
}

/// The creator receives `SUPPLY` (or `funding`, if larger) and moves `funding` of it
/// into the sale contract.
pub fn setup_funded(funding: i128) -> Setup {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let wallet = Address::generate(&env);
    let issuer = Address::generate(&env);

    let token_id = env.register_stellar_asset_contract_v2(issuer.clone()).address();
    let payment_id = env.register_stellar_asset_contract_v2(issuer).address();
    StellarAssetClient::new(&env, &token_id).mint(&owner, &SUPPLY.max(funding));

    let sale_id = env.register(TokenSale, ());
    let sale = TokenSaleClient::new(&env, &sale_id);
    let token = TokenClient::new(&env, &token_id);
    let payment = TokenClient::new(&env, &payment_id);
    if funding > 0 {
        token.transfer(&owner, &sale_id, &funding);
    }

    env.ledger().with_mut(|l| l.timestamp = START);

    let config = SaleConfig {
        token: token_id,
        payment_token: payment_id,
        wallet: wallet.clone(),
        rate: RATE,
        soft_cap: SOFT_CAP,
        hard_cap: HARD_CAP,
        min_contribution: MIN_CONTRIBUTION,
        start_time: START,
        end_time: END,
    };
    let buckets = vec![
        &env,
        BucketConfig {
            id: TEAM_BUCKET,
            capacity: TEAM_CAPACITY,
        },
        BucketConfig {
            id: MARKETING_BUCKET,
            capacity: MARKETING_CAPACITY,
        },
    ];
    sale.initialize(&owner, &config, &thresholds(), &buckets);

    Setup {
        env,
        sale,
        sale_id,
        token,
        payment,
        owner,
        wallet,
    }
}

impl Setup {
    /// A whitelisted contributor holding enough payment token for `value`.
    pub fn contributor(&self, value: i128) -> Address {
        let who = Address::generate(&self.env);
        self.sale.add_address_to_whitelist(&self.owner, &who);
        self.fund(&who, value);
        who
    }

    pub fn fund(&self, who: &Address, value: i128) {
        StellarAssetClient::new(&self.env, &self.payment.address).mint(who, &value);
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().with_mut(|l| l.timestamp = timestamp);
    }

    /// Topics and data of every event this sale published under `name` during the
    /// most recent contract call. Read it before making any other client call.
    pub fn events_named(&self, name: &str) -> std::vec::Vec<(Vec<Val>, Val)> {
        let wanted = Symbol::new(&self.env, name);
        let mut found = std::vec::Vec::new();
        for (contract, topics, data) in self.env.events().all().iter() {
            if contract != self.sale_id {
                continue;
            }
            let head = topics
                .get(0)
                .and_then(|v| Symbol::try_from_val(&self.env, &v).ok());
            if head == Some(wanted.clone()) {
                found.push((topics, data));
            }
        }
        found
    }

    pub fn topic_address(&self, topics: &Vec<Val>, idx: u32) -> Address {
        Address::try_from_val(&self.env, &topics.get(idx).unwrap()).unwrap()
    }
}
