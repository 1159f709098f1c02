#![no_std]

mod constants;
mod contract;
mod pool;
mod storage;

pub use crate::contract::{MockAmmRouter, MockAmmRouterClient};
