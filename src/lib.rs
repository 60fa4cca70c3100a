//! # Mock Cards
//!
//! A deterministic data-generation and query engine for mock credit cards
//! and their transactions.
//!
//! ## Design Principles
//!
//! - **Injectable randomness**: every draw goes through [`RandomSource`],
//!   so a seeded source reproduces a data set exactly
//! - **Opaque identity**: cards and transactions compare by id, never by
//!   field contents
//! - **Derived aggregates**: totals, partitions, and the flattened
//!   transaction list are recomputed on demand, never cached
//! - **Plausible numbers**: generated card numbers carry a simplified
//!   checksum digit, not a real Luhn one
//!
//! ## Example
//!
//! ```
//! use mockcards::CardStore;
//!
//! let mut store = CardStore::with_seed(42);
//! store.bootstrap(10);
//!
//! assert_eq!(store.cards().len(), 10);
//! let by_hand: i64 = store.cards().iter().map(|card| card.balance).sum();
//! assert_eq!(store.total_balance(), by_hand);
//! ```

pub mod card;
pub mod card_number;
pub mod error;
pub mod rng;
pub mod store;
pub mod transaction;

pub use card::{Card, CardFactory, CardId, OWNER_ROSTER};
pub use card_number::CardNumberGenerator;
pub use error::{CardError, Result};
pub use rng::{RandomSource, SeededRandom, SystemRandom};
pub use store::{BalancePartition, CardStore, DEFAULT_CARD_COUNT};
pub use transaction::{Transaction, TransactionFactory, TransactionId, TransactionKind};
