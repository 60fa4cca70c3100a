//! Card model and synthetic card generation.

use crate::card_number::CardNumberGenerator;
use crate::error::{CardError, Result};
use crate::rng::RandomSource;
use crate::transaction::{Transaction, TransactionFactory};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Built-in owner roster used by [`CardFactory::with_default_roster`].
pub const OWNER_ROSTER: [&str; 20] = [
    "Ethan Johnson",
    "Mia Davis",
    "Benjamin Taylor",
    "Abigail Anderson",
    "Samuel White",
    "Harper Martinez",
    "Jackson Wilson",
    "Lily Harris",
    "Aiden Thomas",
    "Grace Robinson",
    "Lucas Moore",
    "Scarlett Martin",
    "Elijah Clark",
    "Chloe Lewis",
    "Henry Turner",
    "Sofia Baker",
    "Jack Hill",
    "Amelia Mitchell",
    "Oliver Perez",
    "Ava Scott",
];

/// Smallest generated card balance, in minor currency units.
const MIN_BALANCE: i64 = -10_000;

/// Largest generated card balance, in minor currency units.
const MAX_BALANCE: i64 = 10_000;

/// Upper bound on the number of transactions generated per card.
const MAX_TRANSACTIONS_PER_CARD: u32 = 10;

/// Opaque card identity.
///
/// Assigned once at construction; used for equality and removal only. The
/// internal representation is not exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(Uuid);

impl CardId {
    fn new() -> Self {
        CardId(Uuid::new_v4())
    }
}

/// A credit card record with its exclusively owned transaction history.
///
/// Equality compares identities only: two cards with the same number, owner,
/// and balance are still distinct records. Manually entered cards may carry
/// any balance; generated ones stay within `[-10000, 10000]`.
#[derive(Debug, Clone)]
pub struct Card {
    id: CardId,

    /// 16 ASCII digits for generated and store-accepted cards.
    pub card_number: String,

    /// Name of the card holder.
    pub owner_name: String,

    /// Signed balance in minor currency units.
    pub balance: i64,

    /// Set once at creation, never mutated afterwards. Order is generation
    /// order.
    pub transactions: Vec<Transaction>,
}

impl Card {
    /// Creates a card with a fresh identity.
    pub fn new(
        card_number: String,
        owner_name: String,
        balance: i64,
        transactions: Vec<Transaction>,
    ) -> Self {
        Card {
            id: CardId::new(),
            card_number,
            owner_name,
            balance,
            transactions,
        }
    }

    /// The shape produced by a manual entry form: zero balance, no history.
    pub fn manual(card_number: impl Into<String>, owner_name: impl Into<String>) -> Self {
        Card::new(card_number.into(), owner_name.into(), 0, Vec::new())
    }

    /// Returns this card's identity.
    pub fn id(&self) -> CardId {
        self.id
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

/// Creates synthetic cards from an owner roster.
#[derive(Debug, Clone)]
pub struct CardFactory {
    roster: Vec<String>,
    number_generator: CardNumberGenerator,
    transaction_factory: TransactionFactory,
}

impl CardFactory {
    /// Creates a factory drawing owner names from `roster`.
    ///
    /// An empty roster is rejected: every generated card needs an owner.
    pub fn new(roster: Vec<String>) -> Result<Self> {
        if roster.is_empty() {
            return Err(CardError::EmptyRoster);
        }

        Ok(CardFactory {
            roster,
            number_generator: CardNumberGenerator::new(),
            transaction_factory: TransactionFactory::new(),
        })
    }

    /// Creates a factory with the built-in twenty-name roster.
    pub fn with_default_roster() -> Self {
        let roster = OWNER_ROSTER.iter().map(|name| name.to_string()).collect();
        // Safety: the built-in roster is non-empty
        Self::new(roster).expect("built-in roster is non-empty")
    }

    /// Returns the card number generator this factory uses.
    pub fn number_generator(&self) -> &CardNumberGenerator {
        &self.number_generator
    }

    /// Creates one synthetic card.
    ///
    /// The owner is drawn uniformly from the roster, the balance uniformly
    /// from `[-10000, 10000]`, and the transaction batch holds at most ten
    /// entries dated relative to `now`.
    pub fn create(&self, rng: &mut dyn RandomSource, now: DateTime<Utc>) -> Card {
        let card_number = self.number_generator.generate(rng);
        let owner_index = rng.uniform_int(0, (self.roster.len() - 1) as i64) as usize;
        let owner_name = self.roster[owner_index].clone();
        let balance = rng.uniform_int(MIN_BALANCE, MAX_BALANCE);
        let transactions =
            self.transaction_factory
                .generate(rng, MAX_TRANSACTIONS_PER_CARD, &card_number, now);

        Card::new(card_number, owner_name, balance, transactions)
    }
}
