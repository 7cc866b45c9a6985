//! Turn-based battle state machine.
//!
//! A battle starts in the player's turn. The player attacks on an explicit
//! action; the enemy answers on its own once a delay timer runs out. Either
//! side reaching 0 HP ends the battle.

use std::time::Duration;

use bevy::prelude::*;

use super::components::{BattleOutcome, BattleStatus};
use crate::enemies::EnemySymbol;

/// Whose move it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BattleTurn {
    Player,
    Enemy,
}

/// What a resolved attack led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// The battle goes on with this side to move.
    Next(BattleTurn),
    Ended(BattleOutcome),
}

/// Lines describing the current battle.
///
/// Outlives the battle itself so the debug overlay can still show how the
/// last fight ended.
#[derive(Resource, Debug, Default, Clone)]
pub struct BattleLog {
    lines: Vec<String>,
}

impl BattleLog {
    pub fn clear_and_seed(&mut self, intro: impl Into<String>) {
        self.lines.clear();
        self.lines.push(intro.into());
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Up to the last `n` lines, oldest first.
    pub fn tail(&self, n: usize) -> &[String] {
        &self.lines[self.lines.len().saturating_sub(n)..]
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// The battle in progress. Exists only while in `PlayState::Battle`.
#[derive(Resource, Debug)]
pub struct ActiveBattle {
    /// Enemy symbol on the field this battle is fought against
    pub enemy_entity: Entity,
    pub enemy: BattleStatus,
    pub turn: BattleTurn,
    pub outcome: Option<BattleOutcome>,
    enemy_timer: Timer,
}

impl ActiveBattle {
    /// Snapshot the enemy's stats and seed the log.
    pub fn begin(
        enemy_entity: Entity,
        symbol: &EnemySymbol,
        enemy_turn_delay: f32,
        log: &mut BattleLog,
    ) -> Self {
        log.clear_and_seed(format!("{} appeared!", symbol.name));
        log.push("Press Confirm to attack.");
        Self {
            enemy_entity,
            enemy: symbol.to_status(),
            turn: BattleTurn::Player,
            outcome: None,
            enemy_timer: Timer::from_seconds(enemy_turn_delay.max(0.0), TimerMode::Once),
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Resolve the player's attack. `None` unless it is the player's turn.
    pub fn player_attack(
        &mut self,
        player: &mut BattleStatus,
        log: &mut BattleLog,
    ) -> Option<TurnResult> {
        if self.is_over() || self.turn != BattleTurn::Player {
            return None;
        }

        let dealt = self.enemy.apply_damage(player.attack);
        log.push(format!(
            "{} attacks! {} takes {} damage.",
            player.name, self.enemy.name, dealt
        ));

        if self.enemy.is_dead() {
            log.push(format!("{} was defeated!", self.enemy.name));
            self.outcome = Some(BattleOutcome::Victory);
            return Some(TurnResult::Ended(BattleOutcome::Victory));
        }

        self.turn = BattleTurn::Enemy;
        self.enemy_timer.reset();
        log.push("Enemy turn...");
        Some(TurnResult::Next(BattleTurn::Enemy))
    }

    /// Run the enemy's delay timer and attack once it finishes.
    ///
    /// `None` while waiting or when it is not the enemy's turn.
    pub fn advance_enemy(
        &mut self,
        delta: Duration,
        player: &mut BattleStatus,
        log: &mut BattleLog,
    ) -> Option<TurnResult> {
        if self.is_over() || self.turn != BattleTurn::Enemy {
            return None;
        }

        self.enemy_timer.tick(delta);
        if !self.enemy_timer.finished() {
            return None;
        }

        let dealt = player.apply_damage(self.enemy.attack);
        log.push(format!(
            "{} attacks! {} takes {} damage.",
            self.enemy.name, player.name, dealt
        ));

        if player.is_dead() {
            log.push(format!("{} collapsed...", player.name));
            self.outcome = Some(BattleOutcome::Defeat);
            return Some(TurnResult::Ended(BattleOutcome::Defeat));
        }

        self.turn = BattleTurn::Player;
        log.push("Your turn! Press Confirm to attack.");
        Some(TurnResult::Next(BattleTurn::Player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slime() -> EnemySymbol {
        EnemySymbol::new("Slime", IVec2::new(10, 5), 12, 3)
    }

    fn start(delay: f32) -> (ActiveBattle, BattleStatus, BattleLog) {
        let mut log = BattleLog::default();
        let battle = ActiveBattle::begin(Entity::from_raw(7), &slime(), delay, &mut log);
        (battle, BattleStatus::new("Hero", 20, 5), log)
    }

    #[test]
    fn begin_snapshots_enemy_and_seeds_log() {
        let (battle, _, log) = start(0.5);
        assert_eq!(battle.enemy, BattleStatus::new("Slime", 12, 3));
        assert_eq!(battle.turn, BattleTurn::Player);
        assert_eq!(log.lines()[0], "Slime appeared!");
        assert!(!battle.is_over());
    }

    #[test]
    fn full_fight_ends_in_victory() {
        let (mut battle, mut hero, mut log) = start(0.0);
        let tick = Duration::from_millis(16);

        assert_eq!(
            battle.player_attack(&mut hero, &mut log),
            Some(TurnResult::Next(BattleTurn::Enemy))
        );
        assert_eq!(battle.enemy.hp, 7);
        assert_eq!(
            battle.advance_enemy(tick, &mut hero, &mut log),
            Some(TurnResult::Next(BattleTurn::Player))
        );
        assert_eq!(hero.hp, 17);

        battle.player_attack(&mut hero, &mut log);
        assert_eq!(battle.enemy.hp, 2);
        battle.advance_enemy(tick, &mut hero, &mut log);
        assert_eq!(hero.hp, 14);

        assert_eq!(
            battle.player_attack(&mut hero, &mut log),
            Some(TurnResult::Ended(BattleOutcome::Victory))
        );
        assert_eq!(battle.enemy.hp, 0);
        assert_eq!(battle.outcome, Some(BattleOutcome::Victory));
        assert_eq!(log.tail(1), ["Slime was defeated!".to_string()]);

        // Nothing moves once the battle is over.
        assert_eq!(battle.player_attack(&mut hero, &mut log), None);
        assert_eq!(battle.advance_enemy(tick, &mut hero, &mut log), None);
    }

    #[test]
    fn enemy_waits_for_its_delay() {
        let (mut battle, mut hero, mut log) = start(0.5);
        battle.player_attack(&mut hero, &mut log);

        assert_eq!(
            battle.advance_enemy(Duration::from_millis(300), &mut hero, &mut log),
            None
        );
        assert_eq!(hero.hp, 20);
        assert_eq!(
            battle.advance_enemy(Duration::from_millis(300), &mut hero, &mut log),
            Some(TurnResult::Next(BattleTurn::Player))
        );
        assert_eq!(hero.hp, 17);
    }

    #[test]
    fn turns_are_not_interchangeable() {
        let (mut battle, mut hero, mut log) = start(0.0);
        // The enemy cannot act during the player's turn.
        assert_eq!(
            battle.advance_enemy(Duration::from_secs(1), &mut hero, &mut log),
            None
        );
        battle.player_attack(&mut hero, &mut log);
        // Nor the player during the enemy's.
        assert_eq!(battle.player_attack(&mut hero, &mut log), None);
        assert_eq!(battle.enemy.hp, 7);
    }

    #[test]
    fn player_at_zero_hp_loses() {
        let (mut battle, mut hero, mut log) = start(0.0);
        hero.hp = 2;
        battle.player_attack(&mut hero, &mut log);
        assert_eq!(
            battle.advance_enemy(Duration::ZERO, &mut hero, &mut log),
            Some(TurnResult::Ended(BattleOutcome::Defeat))
        );
        assert_eq!(hero.hp, 0);
        assert_eq!(log.tail(1), ["Hero collapsed...".to_string()]);
    }

    #[test]
    fn log_tail_is_bounded() {
        let mut log = BattleLog::default();
        assert!(log.tail(3).is_empty());
        log.clear_and_seed("a");
        log.push("b");
        assert_eq!(log.tail(3), ["a".to_string(), "b".to_string()]);
        log.push("c");
        log.push("d");
        assert_eq!(log.tail(2), ["c".to_string(), "d".to_string()]);
    }
}
