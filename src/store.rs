//! The in-memory card collection and its derived queries.
//!
//! [`CardStore`] is the aggregate root: it owns every card, mutates the
//! collection only through explicit calls, and recomputes every aggregate on
//! demand rather than caching it.

use crate::card::{Card, CardFactory};
use crate::card_number;
use crate::error::{CardError, Result};
use crate::rng::{RandomSource, SeededRandom, SystemRandom};
use crate::transaction::{Transaction, TransactionKind};
use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;
use std::io::Write;

/// Number of cards a freshly bootstrapped store holds by default.
pub const DEFAULT_CARD_COUNT: usize = 10;

/// The aggregate owning all cards and exposing query and mutation
/// operations over them.
///
/// The store is single-owner and performs no internal locking; a host that
/// shares one across threads must guard every call with its own lock.
/// Aggregates are recomputed on each call, so callers must not assume
/// reference stability across mutations.
pub struct CardStore {
    cards: Vec<Card>,
    factory: CardFactory,
    rng: Box<dyn RandomSource>,
}

impl CardStore {
    /// Creates an empty store from a factory and a random source.
    pub fn new(factory: CardFactory, rng: Box<dyn RandomSource>) -> Self {
        CardStore {
            cards: Vec::new(),
            factory,
            rng,
        }
    }

    /// Creates an empty store with the default roster and system randomness.
    pub fn with_defaults() -> Self {
        Self::new(CardFactory::with_default_roster(), Box::new(SystemRandom::new()))
    }

    /// Creates an empty store with the default roster and a seeded random
    /// source, for reproducible data sets.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(
            CardFactory::with_default_roster(),
            Box::new(SeededRandom::new(seed)),
        )
    }

    /// Replaces the collection with `count` freshly generated cards.
    ///
    /// Transaction dates are drawn relative to the current time.
    pub fn bootstrap(&mut self, count: usize) {
        self.bootstrap_at(count, Utc::now());
    }

    /// [`bootstrap`](Self::bootstrap) with an explicit reference time.
    pub fn bootstrap_at(&mut self, count: usize, now: DateTime<Utc>) {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            cards.push(self.factory.create(self.rng.as_mut(), now));
        }
        self.cards = cards;
        debug!("Bootstrapped store with {} cards", self.cards.len());
    }

    /// Read-only view of the collection, in insertion order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Every card's transactions flattened in card-then-transaction
    /// insertion order.
    ///
    /// Recomputed on every call; any store mutation invalidates previously
    /// returned references.
    pub fn all_transactions(&self) -> Vec<&Transaction> {
        self.cards
            .iter()
            .flat_map(|card| card.transactions.iter())
            .collect()
    }

    /// Appends a card to the end of the collection.
    ///
    /// The card number must be exactly 16 ASCII digits; a malformed number
    /// is rejected and the collection left unchanged. The check digit is not
    /// verified, and colliding identities are accepted as-is.
    pub fn add_card(&mut self, card: Card) -> Result<()> {
        if !card_number::is_well_formed(&card.card_number) {
            return Err(CardError::MalformedCardNumber {
                number: card.card_number,
            });
        }

        self.cards.push(card);
        Ok(())
    }

    /// Removes the first card whose identity equals `card`'s.
    ///
    /// Returns `false` when no card matches; an absent card is benign, not
    /// an error.
    pub fn remove_card(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|c| c.id() == card.id()) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => {
                debug!("Ignoring removal of card not in the store");
                false
            }
        }
    }

    /// Sum of all card balances; zero for an empty collection.
    pub fn total_balance(&self) -> i64 {
        self.cards.iter().map(|card| card.balance).sum()
    }

    /// Splits the collection by balance sign.
    ///
    /// Cards with `balance >= 0` land in `non_negative`, the rest in
    /// `negative`. Together the two sides cover the collection exactly once,
    /// each preserving store order.
    pub fn partition_by_balance(&self) -> BalancePartition<'_> {
        let (non_negative, negative) = self.cards.iter().partition(|card| card.balance >= 0);

        BalancePartition {
            non_negative,
            negative,
        }
    }

    /// Generates a card number without creating a card, so a manual entry
    /// form can prefill a plausible value.
    pub fn generate_card_number(&mut self) -> String {
        self.factory.number_generator().generate(self.rng.as_mut())
    }

    /// Writes one CSV row per card: number, owner, balance, and transaction
    /// count. Opaque identities are never written.
    pub fn write_cards_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for card in &self.cards {
            csv_writer.serialize(CardRow {
                card_number: &card.card_number,
                owner_name: &card.owner_name,
                balance: card.balance,
                transaction_count: card.transactions.len(),
            })?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Writes one CSV row per transaction, flattened across all cards in
    /// [`all_transactions`](Self::all_transactions) order. Dates are written
    /// in RFC 3339.
    pub fn write_transactions_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for tx in self.all_transactions() {
            csv_writer.serialize(TransactionRow {
                kind: tx.kind,
                change_amount: tx.change_amount,
                date: tx.date,
                card_number: &tx.card_number,
            })?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

/// Cards split by balance sign, borrowing from the store.
#[derive(Debug)]
pub struct BalancePartition<'a> {
    /// Cards with `balance >= 0`, in store order.
    pub non_negative: Vec<&'a Card>,

    /// Cards with `balance < 0`, in store order.
    pub negative: Vec<&'a Card>,
}

/// CSV row for a single card.
#[derive(Serialize)]
struct CardRow<'a> {
    card_number: &'a str,
    owner_name: &'a str,
    balance: i64,
    transaction_count: usize,
}

/// CSV row for a single transaction.
#[derive(Serialize)]
struct TransactionRow<'a> {
    kind: TransactionKind,
    change_amount: i64,
    date: DateTime<Utc>,
    card_number: &'a str,
}
