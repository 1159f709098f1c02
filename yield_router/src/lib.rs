#![no_std]

mod contract;
mod custody;
mod errors;
mod estimator;
mod events;
mod executor;
mod interface;
mod path;
mod protocol;
mod resolver;
mod storage;
mod test;
mod testutils;

pub use crate::contract::{YieldRouter, YieldRouterClient};
pub use crate::errors::YieldRouterError;
pub use crate::path::SwapPlan;
