use soroban_sdk::Address;

// Canonical ordering for a token pair. Same token on both sides is a caller bug.
pub fn sort(a: &Address, b: &Address) -> (Address, Address) {
    if a < b {
        return (a.clone(), b.clone());
    } else if a > b {
        return (b.clone(), a.clone());
    }
    panic!("a and b can't be the same")
}
