#![allow(dead_code)]

use soroban_sdk::{contract, contractimpl, token, Address, Env};

/// Stand-in contract giving the position book a storage context.
#[contract]
pub struct Harness;

#[contractimpl]
impl Harness {
    pub fn ping(_env: Env) {}
}

pub const TICK_LOWER: i32 = -60;
pub const TICK_UPPER: i32 = 60;

/// Create a test token
pub fn create_token(env: &Env, admin: &Address) -> Address {
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    use soroban_sdk::token::StellarAssetClient;
    let client = StellarAssetClient::new(env, token);
    client.mint(to, &amount);
}

pub fn token_client<'a>(env: &Env, token: &Address) -> token::Client<'a> {
    token::Client::new(env, token)
}
