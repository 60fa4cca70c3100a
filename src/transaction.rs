//! Transaction model and synthetic transaction generation.

use crate::rng::RandomSource;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

/// How far back from the reference time generated dates may fall, in days.
const DATE_RANGE_DAYS: i64 = 10_000;

/// Smallest generated change amount, in minor currency units.
const MIN_CHANGE_AMOUNT: i64 = -10_000;

/// Largest generated change amount, in minor currency units.
const MAX_CHANGE_AMOUNT: i64 = 10_000;

/// Opaque transaction identity.
///
/// Assigned once at construction and only meaningful for equality; the
/// internal representation is not exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionId(Uuid);

impl TransactionId {
    fn new() -> Self {
        TransactionId(Uuid::new_v4())
    }
}

/// The kind of balance change a transaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Funds moved between accounts.
    Transfer,

    /// Funds credited to the card.
    Deposit,

    /// Funds spent at a merchant.
    Purchase,
}

impl TransactionKind {
    /// All kinds, in the order used for uniform selection.
    pub const ALL: [TransactionKind; 3] = [
        TransactionKind::Transfer,
        TransactionKind::Deposit,
        TransactionKind::Purchase,
    ];
}

/// A dated balance-change event linked to a card by number.
///
/// `card_number` is a denormalized back-reference, not a managed relation:
/// removing the owning card later does not touch or invalidate it.
#[derive(Debug, Clone)]
pub struct Transaction {
    id: TransactionId,

    /// What kind of balance change this is.
    pub kind: TransactionKind,

    /// Signed amount in minor currency units. No relation to the owning
    /// card's balance is enforced.
    pub change_amount: i64,

    /// When the transaction occurred.
    pub date: DateTime<Utc>,

    /// Number of the card this transaction belongs to.
    pub card_number: String,
}

impl Transaction {
    /// Creates a transaction with a fresh identity.
    pub fn new(
        kind: TransactionKind,
        change_amount: i64,
        date: DateTime<Utc>,
        card_number: String,
    ) -> Self {
        Transaction {
            id: TransactionId::new(),
            kind,
            change_amount,
            date,
            card_number,
        }
    }

    /// Returns this transaction's identity.
    pub fn id(&self) -> TransactionId {
        self.id
    }
}

impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Transaction {}

/// Generates batches of synthetic transactions for a card.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransactionFactory;

impl TransactionFactory {
    /// Creates a new factory.
    pub fn new() -> Self {
        TransactionFactory
    }

    /// Generates between 1 and `max_count` transactions for `card_number`.
    ///
    /// The batch size is drawn uniformly from `[1, max_count]`; a
    /// `max_count` of zero yields an empty batch. Each transaction gets a
    /// uniformly chosen kind, a change amount in `[-10000, 10000]`, and a
    /// date uniform over the 10000 days leading up to `now`, excluding
    /// `now` itself. Batch order is generation order; dates are not sorted.
    pub fn generate(
        &self,
        rng: &mut dyn RandomSource,
        max_count: u32,
        card_number: &str,
        now: DateTime<Utc>,
    ) -> Vec<Transaction> {
        if max_count == 0 {
            return Vec::new();
        }

        let count = rng.uniform_int(1, i64::from(max_count));
        let start = now - Duration::days(DATE_RANGE_DAYS);
        let span_seconds = (now - start).num_seconds() as f64;

        let mut transactions = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let kind = random_kind(rng);
            let change_amount = rng.uniform_int(MIN_CHANGE_AMOUNT, MAX_CHANGE_AMOUNT);
            let offset_seconds = rng.uniform_float(0.0, span_seconds);
            let date = start + Duration::milliseconds((offset_seconds * 1_000.0) as i64);
            transactions.push(Transaction::new(
                kind,
                change_amount,
                date,
                card_number.to_string(),
            ));
        }

        transactions
    }
}

/// Draws a transaction kind uniformly from the three variants.
fn random_kind(rng: &mut dyn RandomSource) -> TransactionKind {
    let index = rng.uniform_int(0, (TransactionKind::ALL.len() - 1) as i64) as usize;
    TransactionKind::ALL[index]
}
