#![no_std]

mod contract;
mod events;
mod interface;
mod storage;
mod testutils;
mod yield_router;

pub use crate::contract::{ReferrerRouter, ReferrerRouterClient};
