//! Match orchestration surface.
//!
//! `Duel` is the entry point UI collaborators call. It enforces action
//! legality (whose turn it is, where cards are, per-turn attack limits),
//! delegates mutation to the board, and exposes read-only queries for
//! presentation to refresh from. Legality failures are boolean `false`
//! returns, never errors, so callers react without special-case
//! handling.
//!
//! The surface is constructed with its board and registry and passed
//! explicitly to collaborators - there is no ambient or singleton
//! lookup.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::board::{Board, MatchAction};
use crate::cards::{CardCategory, CardId, CardRegistry};
use crate::core::{InstanceId, MatchRng, MatchRngState, PlayerId, RulesError};
use crate::effects::TargetChoice;
use crate::player::{Player, DEFAULT_SLOT_COUNT};

/// Outcome of a finished duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuelResult {
    /// Single winner.
    Winner(PlayerId),
    /// Both players defeated simultaneously.
    Draw,
}

impl DuelResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            DuelResult::Winner(p) => *p == player,
            DuelResult::Draw => false,
        }
    }
}

/// Serialized match state: the board plus the RNG position.
#[derive(Serialize, Deserialize)]
struct DuelSnapshot {
    board: Board,
    rng: MatchRngState,
}

struct PlayerSetup {
    id: PlayerId,
    name: String,
    deck: Vec<CardId>,
}

/// Builder for starting a duel.
///
/// ## Example
///
/// ```
/// use duelcore::cards::{CardDefinition, CardId, CardRegistry};
/// use duelcore::core::PlayerId;
/// use duelcore::duel::DuelBuilder;
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::unit(CardId::new(1), "Raider", 3, 2));
///
/// let deck = vec![CardId::new(1); 10];
/// let duel = DuelBuilder::new(registry)
///     .player(PlayerId::new(0), "Aria", deck.clone())
///     .player(PlayerId::new(1), "Bram", deck)
///     .starting_health(25)
///     .build(42)
///     .unwrap();
///
/// assert_eq!(duel.board().turn_number(), 1);
/// ```
pub struct DuelBuilder {
    registry: CardRegistry,
    players: Vec<PlayerSetup>,
    starting_health: i64,
    battlefield_slots: usize,
    starting_hand_size: usize,
}

impl DuelBuilder {
    /// Start building a duel over the given card registry.
    #[must_use]
    pub fn new(registry: CardRegistry) -> Self {
        Self {
            registry,
            players: Vec::new(),
            starting_health: 30,
            battlefield_slots: DEFAULT_SLOT_COUNT,
            starting_hand_size: 4,
        }
    }

    /// Add a player with a deck list. Call exactly twice.
    #[must_use]
    pub fn player(mut self, id: PlayerId, name: impl Into<String>, deck: Vec<CardId>) -> Self {
        assert!(self.players.len() < 2, "A duel has exactly two players");
        self.players.push(PlayerSetup {
            id,
            name: name.into(),
            deck,
        });
        self
    }

    /// Set starting health for both players.
    #[must_use]
    pub fn starting_health(mut self, health: i64) -> Self {
        self.starting_health = health;
        self
    }

    /// Set battlefield slot count for both players.
    #[must_use]
    pub fn battlefield_slots(mut self, slots: usize) -> Self {
        self.battlefield_slots = slots;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Shuffle decks with `seed`, deal opening hands, and start the match.
    ///
    /// Fails on duplicate player ids or deck entries missing from the
    /// registry. The first registered player takes the first turn.
    pub fn build(self, seed: u64) -> Result<Duel, RulesError> {
        assert_eq!(self.players.len(), 2, "A duel needs exactly two players");

        for setup in &self.players {
            for &card in &setup.deck {
                if !self.registry.contains(card) {
                    return Err(RulesError::UnknownCard(card));
                }
            }
        }

        let mut setups = self.players;
        let second = setups.pop().expect("length checked above");
        let first = setups.pop().expect("length checked above");

        let mut board = Board::new([
            Player::new(first.id, first.name, self.starting_health, self.battlefield_slots),
            Player::new(second.id, second.name, self.starting_health, self.battlefield_slots),
        ])?;

        let mut rng = MatchRng::new(seed);

        for (owner, deck_list) in [(first.id, first.deck), (second.id, second.deck)] {
            let mut instances: Vec<InstanceId> = Vec::with_capacity(deck_list.len());
            for card in deck_list {
                if let Some(instance) = board.spawn_card(card, owner) {
                    instances.push(instance);
                }
            }
            rng.shuffle(&mut instances);

            if let Some(player) = board.player_mut(owner) {
                player.set_deck(instances);
                for _ in 0..self.starting_hand_size {
                    if player.draw_from_deck().is_none() {
                        break;
                    }
                }
            }
        }

        Ok(Duel {
            registry: self.registry,
            board,
            rng,
        })
    }
}

/// A running match: the board, the card registry, and the match RNG.
#[derive(Debug)]
pub struct Duel {
    registry: CardRegistry,
    board: Board,
    rng: MatchRng,
}

impl Duel {
    /// Read-only board access for presentation queries.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for effect management and turn processing
    /// outside the bundled `advance_turn`.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The card registry this match plays with.
    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    // === Deployment ===

    /// Deploy a Unit card from its owner's hand to a battlefield slot.
    ///
    /// Succeeds only if it is the owner's turn, the card is a Unit in
    /// the owner's hand, and `slot` is in range and empty. On success
    /// the card moves from hand to that slot.
    pub fn deploy_card(&mut self, card: InstanceId, slot: usize) -> bool {
        let (owner, card_id) = match self.board.card(card) {
            Some(instance) => (instance.owner, instance.card),
            None => {
                debug!(%card, "deploy rejected: unknown card instance");
                return false;
            }
        };

        if owner != self.board.current_player() {
            debug!(%card, %owner, "deploy rejected: not the owner's turn");
            return false;
        }

        match self.registry.get(card_id).map(|d| &d.category) {
            Some(CardCategory::Unit(_)) => {}
            Some(CardCategory::Order) | None => {
                debug!(%card, "deploy rejected: not a Unit card");
                return false;
            }
        }

        let player = match self.board.player_mut(owner) {
            Some(player) => player,
            None => return false,
        };
        if !player.hand_contains(card) {
            debug!(%card, "deploy rejected: card not in hand");
            return false;
        }
        if !player.battlefield.is_empty_slot(slot) {
            debug!(%card, slot, "deploy rejected: slot out of range or occupied");
            return false;
        }

        player.remove_from_hand(card);
        player.battlefield.place(slot, card);
        self.board.record_action(owner, MatchAction::Deploy { card, slot });
        true
    }

    /// Pure legality check for playing an Order card: it must be the
    /// owner's turn and the card an Order in the owner's hand.
    #[must_use]
    pub fn can_deploy_order_card(&self, card: InstanceId) -> bool {
        let instance = match self.board.card(card) {
            Some(instance) => instance,
            None => return false,
        };
        if instance.owner != self.board.current_player() {
            return false;
        }
        match self.registry.get(instance.card).map(|d| &d.category) {
            Some(CardCategory::Order) => {}
            Some(CardCategory::Unit(_)) | None => return false,
        }
        self.board
            .player(instance.owner)
            .is_some_and(|p| p.hand_contains(card))
    }

    /// Play an Order card from hand.
    ///
    /// On success the card's abilities resolve against `targets` and the
    /// card is consumed from hand to the discard pile. On any failure
    /// (illegal play or a card with no abilities) the hand is unchanged.
    pub fn deploy_order_card(&mut self, card: InstanceId, targets: TargetChoice) -> bool {
        if !self.can_deploy_order_card(card) {
            debug!(%card, "order play rejected");
            return false;
        }

        let owner = match self.board.card(card) {
            Some(instance) => instance.owner,
            None => return false,
        };

        // Resolve Auto up front so the log records the actual targets.
        let resolved: SmallVec<[InstanceId; 4]> = match &targets {
            TargetChoice::Explicit(list) => list.clone(),
            TargetChoice::Auto => {
                let opponent = match self.board.opponent_of(owner) {
                    Some(opponent) => opponent,
                    None => return false,
                };
                self.board
                    .player(opponent)
                    .map(|p| p.battlefield.cards().collect())
                    .unwrap_or_default()
            }
        };

        if !self
            .board
            .process_order_card_effect(&self.registry, card, owner, targets)
        {
            return false;
        }

        if let Some(player) = self.board.player_mut(owner) {
            player.remove_from_hand(card);
            player.add_to_discard(card);
        }
        self.board.record_action(
            owner,
            MatchAction::PlayOrder {
                card,
                targets: resolved,
            },
        );
        true
    }

    // === Combat ===

    /// Pure legality check mirroring `initiate_attack`.
    #[must_use]
    pub fn can_target_card(&self, source: InstanceId, target: InstanceId) -> bool {
        let src = match self.board.card(source) {
            Some(instance) => instance,
            None => return false,
        };
        if src.owner != self.board.current_player() || src.has_attacked {
            return false;
        }
        if !self.board.is_on_battlefield(source) {
            return false;
        }

        let defender = match self.board.opponent_of(src.owner) {
            Some(defender) => defender,
            None => return false,
        };
        match self.board.card(target) {
            Some(instance) if instance.owner == defender => self.board.is_on_battlefield(target),
            _ => false,
        }
    }

    /// Attack a card on the defending battlefield.
    ///
    /// Succeeds only if it is the attacker's turn, `source` is on the
    /// attacker's battlefield and has not attacked this turn, and
    /// `target` is on the defending battlefield. On success the source
    /// is marked as having attacked and combat resolves: each unit deals
    /// its effective attack to the other, and units whose damage reaches
    /// their health are destroyed to their owner's discard pile.
    pub fn initiate_attack(&mut self, source: InstanceId, target: InstanceId) -> bool {
        if !self.can_target_card(source, target) {
            debug!(%source, %target, "attack rejected");
            return false;
        }

        let attacker = match self.board.card(source) {
            Some(instance) => instance.owner,
            None => return false,
        };

        let source_attack = self.unit_attack(source);
        let target_attack = self.unit_attack(target);

        if let Some(instance) = self.board.card_mut(source) {
            instance.mark_attacked();
        }

        self.board.damage_unit(&self.registry, target, source_attack);
        self.board.damage_unit(&self.registry, source, target_attack);

        self.board
            .record_action(attacker, MatchAction::Attack { source, target });
        true
    }

    fn unit_attack(&self, id: InstanceId) -> i64 {
        match self.board.card(id) {
            Some(instance) => match self.registry.get(instance.card) {
                Some(def) => instance.effective_attack(def),
                None => 0,
            },
            None => 0,
        }
    }

    // === Turn flow ===

    /// Draw a card for the current player.
    ///
    /// Returns `None` for an out-of-turn call or an empty deck.
    pub fn draw_card(&mut self, player: PlayerId) -> Option<InstanceId> {
        if player != self.board.current_player() {
            debug!(%player, "draw rejected: not this player's turn");
            return None;
        }

        let drawn = self.board.player_mut(player)?.draw_from_deck()?;
        self.board
            .record_action(player, MatchAction::Draw { card: drawn });
        Some(drawn)
    }

    /// Process a turn boundary: end-of-turn effects fire (and may
    /// expire), the current player switches, the turn counter advances,
    /// attack flags clear, and start-of-turn effects fire for the new
    /// turn.
    pub fn advance_turn(&mut self) {
        let ending = self.board.current_player();

        self.board.process_end_of_turn_effects();
        self.board.record_action(ending, MatchAction::EndTurn);
        self.board.switch_current_player();
        self.board.increment_turn_number();
        self.board.reset_attack_flags();
        self.board.process_start_of_turn_effects();
    }

    /// The match outcome, or `None` while the duel continues.
    #[must_use]
    pub fn result(&self) -> Option<DuelResult> {
        let [a, b] = self.board.players();
        match (a.is_defeated(), b.is_defeated()) {
            (true, true) => Some(DuelResult::Draw),
            (true, false) => Some(DuelResult::Winner(b.id)),
            (false, true) => Some(DuelResult::Winner(a.id)),
            (false, false) => None,
        }
    }

    // === Snapshots ===

    /// Serialize the match state (board + RNG position).
    pub fn snapshot(&self) -> Result<Vec<u8>, RulesError> {
        bincode::serialize(&DuelSnapshot {
            board: self.board.clone(),
            rng: self.rng.state(),
        })
        .map_err(|err| RulesError::InvariantViolation {
            detail: format!("unserializable match state: {err}"),
        })
    }

    /// Restore a match from `snapshot` bytes and the registry it was
    /// played with.
    ///
    /// The restored board is validated before use; corrupt bytes fail
    /// fast instead of surfacing as dangling references mid-match.
    pub fn restore(registry: CardRegistry, bytes: &[u8]) -> Result<Self, RulesError> {
        let snapshot: DuelSnapshot =
            bincode::deserialize(bytes).map_err(|err| RulesError::InvariantViolation {
                detail: format!("unreadable snapshot: {err}"),
            })?;
        snapshot.board.validate()?;

        Ok(Self {
            registry,
            board: snapshot.board,
            rng: MatchRng::from_state(&snapshot.rng),
        })
    }
}
