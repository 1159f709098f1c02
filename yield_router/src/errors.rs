use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum YieldRouterError {
    InvalidPath = 2101,
    ProtocolCallFailure = 2102,
    SlippageExceeded = 2103,
    Expired = 2104,
    UnknownReserve = 2105,
}
