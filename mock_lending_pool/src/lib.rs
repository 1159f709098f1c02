#![no_std]

mod contract;
mod errors;
mod storage;

pub use crate::contract::{MockLendingPool, MockLendingPoolClient};
pub use crate::errors::MockLendingPoolError;
