//! The authoritative match-state container.
//!
//! `Board` is the single source of truth for whose turn it is, the turn
//! counter, and match-wide timed effects, and the gateway for Order-card
//! effect resolution. It owns the two players, the card-instance store,
//! and the action log.
//!
//! ## Persistent collections
//!
//! The effect list and action log use `im::Vector`: the two-phase
//! effect passes iterate a cheap snapshot while the live list is
//! mutated, and whole-board clones stay inexpensive for snapshots.
//!
//! ## Single-writer discipline
//!
//! All operations are synchronous and the board is not internally
//! synchronized. Exactly one logical actor (the current player) mutates
//! match state at a time; hosts that add background computation must
//! serialize mutations behind a single writer.

pub mod action;

pub use action::{ActionRecord, MatchAction};

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cards::{Ability, CardCategory, CardDefinition, CardId, CardInstance, CardRegistry};
use crate::core::{InstanceId, PlayerId, RulesError};
use crate::effects::{EffectDuration, EffectId, EffectKind, GameEffect, TargetChoice};
use crate::player::Player;

/// Match-state root: two players, turn state, active effects, card
/// instances, and the action log.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    /// The two sides of the duel, fixed ordering for the match.
    players: [Player; 2],

    /// Card instances by runtime identity.
    cards: FxHashMap<InstanceId, CardInstance>,

    /// Turn number, starting at 1.
    turn_number: u32,

    /// The player entitled to act. Always one of the two registered ids.
    current_player: PlayerId,

    /// Active effects, insertion order = activation order.
    active_effects: Vector<GameEffect>,

    /// Action log, oldest first.
    history: Vector<ActionRecord>,

    /// Next instance ID to allocate.
    next_instance_id: u32,

    /// Next effect ID to allocate.
    next_effect_id: u32,
}

impl Board {
    /// Create a board for a fresh match.
    ///
    /// The first player in the array starts as the current player.
    /// Fails if both players carry the same id.
    pub fn new(players: [Player; 2]) -> Result<Self, RulesError> {
        if players[0].id == players[1].id {
            return Err(RulesError::DuplicatePlayers(players[0].id));
        }

        let current_player = players[0].id;
        Ok(Self {
            players,
            cards: FxHashMap::default(),
            turn_number: 1,
            current_player,
            active_effects: Vector::new(),
            history: Vector::new(),
            next_instance_id: 0,
            next_effect_id: 0,
        })
    }

    /// Clear match state and re-supply two fresh players atomically.
    ///
    /// Everything from the previous match is dropped; the board is
    /// immediately usable with the new players, the first of which
    /// becomes current on turn 1.
    pub fn reset(&mut self, players: [Player; 2]) -> Result<(), RulesError> {
        if players[0].id == players[1].id {
            return Err(RulesError::DuplicatePlayers(players[0].id));
        }

        // Read the incoming current player before touching any state.
        let first = players[0].id;

        self.players = players;
        self.cards.clear();
        self.active_effects.clear();
        self.history.clear();
        self.turn_number = 1;
        self.current_player = first;
        self.next_instance_id = 0;
        self.next_effect_id = 0;
        Ok(())
    }

    // === Players ===

    /// Both players, in registration order.
    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Look up a player mutably.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Whether `id` is one of the two registered players.
    #[must_use]
    pub fn is_registered(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }

    /// The opponent of a registered player.
    #[must_use]
    pub fn opponent_of(&self, id: PlayerId) -> Option<PlayerId> {
        if id == self.players[0].id {
            Some(self.players[1].id)
        } else if id == self.players[1].id {
            Some(self.players[0].id)
        } else {
            None
        }
    }

    // === Turn state ===

    /// The player entitled to act.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Set the current player.
    ///
    /// Fails with `UnknownPlayer` (leaving the current player unchanged)
    /// unless `id` matches one of the two registered players.
    pub fn set_current_player(&mut self, id: PlayerId) -> Result<(), RulesError> {
        if !self.is_registered(id) {
            return Err(RulesError::UnknownPlayer(id));
        }
        self.current_player = id;
        Ok(())
    }

    /// Toggle the current player between the two registered players.
    pub fn switch_current_player(&mut self) {
        self.current_player = self.next_player_id();
    }

    /// The registered player that is not current. Pure query.
    #[must_use]
    pub fn next_player_id(&self) -> PlayerId {
        if self.current_player == self.players[0].id {
            self.players[1].id
        } else {
            self.players[0].id
        }
    }

    /// Advance the turn counter. Unconditional; callers invoke this once
    /// per turn boundary.
    pub fn increment_turn_number(&mut self) {
        self.turn_number += 1;
    }

    // === Cards ===

    /// Spawn a card instance owned by a registered player.
    ///
    /// The instance starts in no zone; callers place it in a hand, deck,
    /// or battlefield slot. Returns `None` for an unknown owner.
    pub fn spawn_card(&mut self, card: CardId, owner: PlayerId) -> Option<InstanceId> {
        if !self.is_registered(owner) {
            warn!(%owner, "cannot spawn card for unknown player");
            return None;
        }

        let id = InstanceId::new(self.next_instance_id);
        self.next_instance_id += 1;
        self.cards.insert(id, CardInstance::new(id, card, owner));
        Some(id)
    }

    /// Look up a card instance.
    #[must_use]
    pub fn card(&self, id: InstanceId) -> Option<&CardInstance> {
        self.cards.get(&id)
    }

    /// Look up a card instance mutably.
    pub fn card_mut(&mut self, id: InstanceId) -> Option<&mut CardInstance> {
        self.cards.get_mut(&id)
    }

    /// Clear every card's per-turn attack flag. Invoked at turn
    /// boundaries by the orchestration surface.
    pub fn reset_attack_flags(&mut self) {
        for card in self.cards.values_mut() {
            card.reset_attack_flag();
        }
    }

    /// Whether a card currently occupies its owner's battlefield.
    #[must_use]
    pub fn is_on_battlefield(&self, id: InstanceId) -> bool {
        match self.cards.get(&id) {
            Some(instance) => self
                .player(instance.owner)
                .is_some_and(|p| p.battlefield.contains(id)),
            None => false,
        }
    }

    // === Effects ===

    /// Append an effect to the active set.
    ///
    /// The effect's id is kept as supplied; the internal id allocator is
    /// advanced past it so `attach_effect` never collides.
    pub fn add_game_effect(&mut self, effect: GameEffect) {
        self.next_effect_id = self.next_effect_id.max(effect.id.raw().saturating_add(1));
        self.active_effects.push_back(effect);
    }

    /// Allocate an id and append a new effect. Returns the id.
    pub fn attach_effect(
        &mut self,
        kind: EffectKind,
        duration: EffectDuration,
        description: impl Into<String>,
    ) -> EffectId {
        let id = EffectId::new(self.next_effect_id);
        self.next_effect_id += 1;
        self.active_effects
            .push_back(GameEffect::new(id, kind, duration, description));
        id
    }

    /// Remove an effect by id. Returns false if absent.
    pub fn remove_game_effect(&mut self, id: EffectId) -> bool {
        match self.active_effects.iter().position(|e| e.id == id) {
            Some(index) => {
                self.active_effects.remove(index);
                true
            }
            None => false,
        }
    }

    /// Iterate over the active-effect list in activation order.
    pub fn active_effects(&self) -> impl Iterator<Item = &GameEffect> {
        self.active_effects.iter()
    }

    /// Whether an effect with this id is in the active set.
    #[must_use]
    pub fn has_effect(&self, id: EffectId) -> bool {
        self.active_effects.iter().any(|e| e.id == id)
    }

    /// Remove every inactive effect, preserving the order of survivors.
    pub fn clear_expired_effects(&mut self) {
        self.active_effects.retain(GameEffect::is_active);
    }

    /// Fire every active effect's turn-start action.
    ///
    /// Iterates a snapshot of the active set: an effect removed or
    /// expired mid-iteration is skipped, never double-processed. Does
    /// not remove effects.
    pub fn process_start_of_turn_effects(&mut self) {
        let snapshot: Vec<EffectId> = self.active_effects.iter().map(|e| e.id).collect();

        for id in snapshot {
            let kind = match self.active_effects.iter().find(|e| e.id == id) {
                Some(effect) if effect.is_active() => effect.kind.clone(),
                _ => continue,
            };
            self.apply_turn_start(&kind);
        }
    }

    /// Fire every active effect's turn-end action, count down
    /// non-permanent durations, and remove whatever expired.
    pub fn process_end_of_turn_effects(&mut self) {
        let snapshot: Vec<EffectId> = self.active_effects.iter().map(|e| e.id).collect();

        for id in snapshot {
            let kind = match self.active_effects.iter().find(|e| e.id == id) {
                Some(effect) if effect.is_active() => effect.kind.clone(),
                _ => continue,
            };
            self.apply_turn_end(&kind);

            if let Some(index) = self.active_effects.iter().position(|e| e.id == id) {
                if let Some(effect) = self.active_effects.get_mut(index) {
                    effect.tick_turn_end();
                }
            }
        }

        self.clear_expired_effects();
    }

    fn apply_turn_start(&mut self, kind: &EffectKind) {
        match kind {
            EffectKind::Regeneration { player, amount } => {
                if let Some(p) = self.player_mut(*player) {
                    p.heal(*amount);
                }
            }
            EffectKind::Rally { player, amount } => {
                let units: Vec<InstanceId> = match self.player(*player) {
                    Some(p) => p.battlefield.cards().collect(),
                    None => return,
                };
                for unit in units {
                    if let Some(card) = self.cards.get_mut(&unit) {
                        card.attack_modifier += amount;
                    }
                }
            }
            EffectKind::Corrosion { .. } => {}
        }
    }

    fn apply_turn_end(&mut self, kind: &EffectKind) {
        match kind {
            EffectKind::Corrosion { player, amount } => {
                if let Some(p) = self.player_mut(*player) {
                    p.take_damage(*amount);
                }
            }
            EffectKind::Regeneration { .. } | EffectKind::Rally { .. } => {}
        }
    }

    // === Order-card resolution ===

    /// Resolve an Order card's abilities for `player`.
    ///
    /// Rejects (with an advisory log and no mutation) an unknown card or
    /// player, or a card whose category is not Order. `TargetChoice::Auto`
    /// resolves to every card currently on the opponent's battlefield, in
    /// slot order. Returns the activation result: false when the card
    /// defines no abilities.
    ///
    /// The board itself mutates nothing in this path beyond what the
    /// abilities perform.
    pub fn process_order_card_effect(
        &mut self,
        registry: &CardRegistry,
        order_card: InstanceId,
        player: PlayerId,
        targets: TargetChoice,
    ) -> bool {
        let card_id = match self.cards.get(&order_card) {
            Some(instance) => instance.card,
            None => {
                warn!(%order_card, "order resolution rejected: unknown card instance");
                return false;
            }
        };

        let def = match registry.get(card_id) {
            Some(def) => def,
            None => {
                warn!(%card_id, "order resolution rejected: unregistered definition");
                return false;
            }
        };

        let opponent = match self.opponent_of(player) {
            Some(opponent) => opponent,
            None => {
                warn!(%player, "order resolution rejected: unknown player");
                return false;
            }
        };

        match def.category {
            CardCategory::Order => {}
            CardCategory::Unit(_) => {
                warn!(card = %def.name, "order resolution rejected: not an Order card");
                return false;
            }
        }

        let resolved: Vec<InstanceId> = match targets {
            TargetChoice::Explicit(list) => list.into_iter().collect(),
            TargetChoice::Auto => self
                .player(opponent)
                .map(|p| p.battlefield.cards().collect())
                .unwrap_or_default(),
        };

        self.activate_all_abilities(registry, def, player, &resolved)
    }

    /// Apply each of `def`'s abilities to every target in sequence.
    ///
    /// Returns false without mutating when the card defines no abilities.
    fn activate_all_abilities(
        &mut self,
        registry: &CardRegistry,
        def: &CardDefinition,
        owner: PlayerId,
        targets: &[InstanceId],
    ) -> bool {
        if def.abilities.is_empty() {
            debug!(card = %def.name, "activation failed: card defines no abilities");
            return false;
        }

        for ability in &def.abilities {
            self.apply_ability(registry, ability, owner, targets);
        }
        true
    }

    fn apply_ability(
        &mut self,
        registry: &CardRegistry,
        ability: &Ability,
        owner: PlayerId,
        targets: &[InstanceId],
    ) {
        match ability {
            Ability::DamageUnits { amount } => {
                for &target in targets {
                    self.damage_unit(registry, target, *amount);
                }
            }
            Ability::WeakenAttack { amount } => {
                for &target in targets {
                    if self.is_on_battlefield(target) {
                        if let Some(card) = self.cards.get_mut(&target) {
                            card.attack_modifier -= amount;
                        }
                    }
                }
            }
            Ability::DestroyUnits => {
                for &target in targets {
                    self.destroy_unit(target);
                }
            }
            Ability::HealOwner { amount } => {
                if let Some(p) = self.player_mut(owner) {
                    p.heal(*amount);
                }
            }
            Ability::DrawCards { count } => {
                if let Some(p) = self.player_mut(owner) {
                    for _ in 0..*count {
                        if p.draw_from_deck().is_none() {
                            break;
                        }
                    }
                }
            }
            Ability::GrantEffect {
                kind,
                duration,
                description,
            } => {
                self.attach_effect(kind.clone(), *duration, description.clone());
            }
        }
    }

    // === Combat bookkeeping ===

    /// Deal damage to a unit on a battlefield.
    ///
    /// Targets that are not units, or not currently on their owner's
    /// battlefield, are skipped. Returns true if the unit was destroyed.
    pub(crate) fn damage_unit(
        &mut self,
        registry: &CardRegistry,
        target: InstanceId,
        amount: i64,
    ) -> bool {
        if !self.is_on_battlefield(target) {
            return false;
        }

        let card_id = match self.cards.get(&target) {
            Some(instance) => instance.card,
            None => return false,
        };
        let def = match registry.get(card_id) {
            Some(def) => def,
            None => return false,
        };
        match def.category {
            CardCategory::Unit(_) => {}
            CardCategory::Order => return false,
        }

        let destroyed = match self.cards.get_mut(&target) {
            Some(instance) => {
                instance.damage += amount;
                instance.is_destroyed(def)
            }
            None => false,
        };

        if destroyed {
            self.destroy_unit(target);
        }
        destroyed
    }

    /// Move a unit from its owner's battlefield to the discard pile.
    pub(crate) fn destroy_unit(&mut self, target: InstanceId) {
        let owner = match self.cards.get(&target) {
            Some(instance) => instance.owner,
            None => return,
        };

        if let Some(player) = self.player_mut(owner) {
            if player.battlefield.remove(target) {
                player.add_to_discard(target);
            }
        }
    }

    // === Integrity ===

    /// Check internal consistency: the current player is registered, the
    /// turn counter has started, and every zone entry resolves to a
    /// stored card owned by the right player.
    ///
    /// A board mutated only through its operations cannot fail this;
    /// it exists for state restored from external bytes.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.turn_number == 0 {
            return Err(RulesError::InvariantViolation {
                detail: "turn number must start at 1".to_string(),
            });
        }
        if !self.is_registered(self.current_player) {
            return Err(RulesError::InvariantViolation {
                detail: format!("current player {} is not registered", self.current_player),
            });
        }

        for player in &self.players {
            for &card in player
                .hand()
                .iter()
                .chain(player.deck().iter())
                .chain(player.discard_pile().iter())
            {
                if !self.cards.contains_key(&card) {
                    return Err(RulesError::InvariantViolation {
                        detail: format!("{} references missing {}", player.id, card),
                    });
                }
            }

            for card in player.battlefield.cards() {
                match self.cards.get(&card) {
                    Some(instance) if instance.owner == player.id => {}
                    Some(_) => {
                        return Err(RulesError::InvariantViolation {
                            detail: format!("{} fields {} it does not own", player.id, card),
                        });
                    }
                    None => {
                        return Err(RulesError::InvariantViolation {
                            detail: format!("{} fields missing {}", player.id, card),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    // === Action log ===

    /// Record an action in the log, stamped with the current turn.
    pub fn record_action(&mut self, player: PlayerId, action: MatchAction) {
        let turn = self.turn_number;
        self.history.push_back(ActionRecord::new(player, action, turn));
    }

    /// Iterate over the action log, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &ActionRecord> {
        self.history.iter()
    }
}
