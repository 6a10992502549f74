#![no_std]

pub mod proxy_feed;
pub mod proxy_interest_rate_model;
pub mod proxy_manager;
pub mod proxy_market;
pub mod proxy_pair;
pub mod proxy_price_oracle;
pub mod proxy_receiver;
pub mod proxy_signer;
