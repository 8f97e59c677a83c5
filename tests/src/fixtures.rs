//! Holder-list generators shared by flows and benchmarks.

use ps_01_merkle_tree::PayoutAccountBalance;
use rand::seq::SliceRandom;
use rand::Rng;
use shared_types::{Address, U256};

/// `count` holders with addresses `1..=count` and distinct balances.
pub fn sequential_holders(count: u64) -> Vec<PayoutAccountBalance> {
    (1..=count)
        .map(|i| PayoutAccountBalance::new(Address::from_low_u64_be(i), i * 1_000))
        .collect()
}

/// `count` holders with random distinct addresses and random 128-bit balances.
pub fn random_holders(count: usize, rng: &mut impl Rng) -> Vec<PayoutAccountBalance> {
    let mut seen = std::collections::HashSet::with_capacity(count);
    let mut holders = Vec::with_capacity(count);
    while holders.len() < count {
        let address = Address::new(rng.gen());
        if seen.insert(address) {
            let balance = U256::from(rng.gen::<u128>());
            holders.push(PayoutAccountBalance::new(address, balance));
        }
    }
    holders
}

/// Same holders in a random order.
pub fn shuffled(holders: &[PayoutAccountBalance], rng: &mut impl Rng) -> Vec<PayoutAccountBalance> {
    let mut copy = holders.to_vec();
    copy.shuffle(rng);
    copy
}

/// The JSON holder-file form of `holders`.
pub fn holders_json(holders: &[PayoutAccountBalance]) -> String {
    serde_json::to_string(holders).unwrap_or_else(|_| "[]".to_string())
}
