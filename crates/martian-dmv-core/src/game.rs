//! Queue Combat System
//!
//! Laser / Asteroid / Forcefield duels against other visitors. Winning
//! skips places in line, losing lets aliens cut in front.

use tracing::debug;

use crate::random::Dice;

/// Places gained per win.
pub const WIN_ADVANCE: u32 = 5;
/// Places lost per defeat.
pub const LOSS_PENALTY: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weapon {
    Laser,
    Asteroid,
    Forcefield,
}

impl Weapon {
    pub const ALL: [Weapon; 3] = [Weapon::Laser, Weapon::Asteroid, Weapon::Forcefield];

    /// The weapon this one defeats.
    pub fn beats(self) -> Weapon {
        match self {
            Weapon::Laser => Weapon::Asteroid,
            Weapon::Asteroid => Weapon::Forcefield,
            Weapon::Forcefield => Weapon::Laser,
        }
    }

    /// The weapon that defeats this one.
    pub fn counter(self) -> Weapon {
        match self {
            Weapon::Laser => Weapon::Forcefield,
            Weapon::Asteroid => Weapon::Laser,
            Weapon::Forcefield => Weapon::Asteroid,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Weapon::Laser => "🔫",
            Weapon::Asteroid => "🪨",
            Weapon::Forcefield => "🛡️",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Weapon::Laser => "Laser",
            Weapon::Asteroid => "Asteroid",
            Weapon::Forcefield => "Forcefield",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Player's outcome under the cyclic rule.
    pub fn decide(player: Weapon, opponent: Weapon) -> Outcome {
        if player == opponent {
            Outcome::Draw
        } else if player.beats() == opponent {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Outcome::Win => "You win! You moved ahead 5 places in line.",
            Outcome::Draw => "Draw! Your position remains the same.",
            Outcome::Lose => "You lose! 3 aliens cut in front of you.",
        }
    }
}

/// A visitor willing to duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opponent {
    pub name: &'static str,
    /// 0-10; chance out of ten of playing the exact counter.
    pub difficulty: u8,
}

impl Opponent {
    /// Reply to the player's weapon.
    pub fn reply(&self, player: Weapon, dice: &mut impl Dice) -> Weapon {
        if dice.chance(f64::from(self.difficulty) / 10.0) {
            player.counter()
        } else {
            Weapon::ALL[dice.below(Weapon::ALL.len())]
        }
    }
}

pub const ROSTER: [Opponent; 4] = [
    Opponent { name: "Zorg-9000", difficulty: 5 },
    Opponent { name: "Blipblorp", difficulty: 3 },
    Opponent { name: "Kraxon the Destroyer", difficulty: 8 },
    Opponent { name: "Xeno Tourist", difficulty: 1 },
];

/// One completed duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Round {
    pub player: Weapon,
    pub opponent_choice: Weapon,
    pub outcome: Outcome,
    pub opponent: Opponent,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    Waiting,
    Choosing,
    Finished(Round),
}

/// Queue combat widget state.
#[derive(Clone, Debug, PartialEq)]
pub struct QueueCombat {
    status: GameStatus,
    position: u32,
    skipped: u32,
    opponent: Opponent,
    pending_opponent: Option<Opponent>,
}

impl QueueCombat {
    /// New game at `start_position` against a random visitor.
    pub fn new(start_position: u32, dice: &mut impl Dice) -> Self {
        let opponent = *dice.pick(&ROSTER).unwrap_or(&ROSTER[0]);
        Self {
            status: GameStatus::Waiting,
            position: start_position,
            skipped: 0,
            opponent,
            pending_opponent: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn skipped(&self) -> u32 {
        self.skipped
    }

    pub fn opponent(&self) -> Opponent {
        self.opponent
    }

    /// "Challenge to Duel!" / "Challenge Again".
    pub fn challenge(&mut self) {
        self.status = GameStatus::Choosing;
    }

    /// Play a weapon. Returns `None` unless a challenge is open.
    ///
    /// The next opponent is chosen here and becomes current on
    /// [`QueueCombat::promote_next_opponent`].
    pub fn play(&mut self, player: Weapon, dice: &mut impl Dice) -> Option<Round> {
        if self.status != GameStatus::Choosing {
            return None;
        }

        let opponent_choice = self.opponent.reply(player, dice);
        let outcome = Outcome::decide(player, opponent_choice);
        match outcome {
            Outcome::Win => {
                self.skipped += WIN_ADVANCE;
                self.position = self.position.saturating_sub(WIN_ADVANCE).max(1);
            }
            Outcome::Lose => self.position += LOSS_PENALTY,
            Outcome::Draw => {}
        }

        let round = Round {
            player,
            opponent_choice,
            outcome,
            opponent: self.opponent,
        };
        self.status = GameStatus::Finished(round);

        let others: Vec<Opponent> = ROSTER
            .iter()
            .copied()
            .filter(|o| o.name != self.opponent.name)
            .collect();
        self.pending_opponent = dice.pick(&others).copied();

        debug!(
            opponent = self.opponent.name,
            ?player,
            ?opponent_choice,
            ?outcome,
            position = self.position,
            "queue duel resolved"
        );
        Some(round)
    }

    /// Swap in the opponent chosen after the last round.
    pub fn promote_next_opponent(&mut self) {
        if let Some(next) = self.pending_opponent.take() {
            self.opponent = next;
        }
    }

    /// "You've skipped N positions so far!" once anything was skipped.
    pub fn skip_message(&self) -> Option<String> {
        (self.skipped > 0).then(|| format!("You've skipped {} positions so far!", self.skipped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedDice;

    #[test]
    fn cyclic_rule() {
        use crate::game::Weapon::*;
        assert_eq!(Outcome::decide(Laser, Asteroid), Outcome::Win);
        assert_eq!(Outcome::decide(Asteroid, Forcefield), Outcome::Win);
        assert_eq!(Outcome::decide(Forcefield, Laser), Outcome::Win);
        assert_eq!(Outcome::decide(Asteroid, Laser), Outcome::Lose);
        assert_eq!(Outcome::decide(Forcefield, Asteroid), Outcome::Lose);
        assert_eq!(Outcome::decide(Laser, Forcefield), Outcome::Lose);
        for w in Weapon::ALL {
            assert_eq!(Outcome::decide(w, w), Outcome::Draw);
        }
    }

    #[test]
    fn counter_and_beats_are_inverse() {
        for w in Weapon::ALL {
            assert_eq!(w.counter().beats(), w);
            assert_eq!(w.beats().counter(), w);
        }
    }

    #[test]
    fn max_difficulty_always_counters() {
        let kraxon = Opponent { name: "test", difficulty: 10 };
        let mut dice = ScriptedDice::new().with_units([0.999]);
        assert_eq!(kraxon.reply(Weapon::Laser, &mut dice), Weapon::Forcefield);
    }

    #[test]
    fn zero_difficulty_plays_randomly() {
        let tourist = Opponent { name: "test", difficulty: 0 };
        let mut dice = ScriptedDice::new().with_units([0.0]).with_picks([1]);
        assert_eq!(tourist.reply(Weapon::Laser, &mut dice), Weapon::Asteroid);
    }

    #[test]
    fn play_requires_open_challenge() {
        let mut dice = ScriptedDice::new();
        let mut game = QueueCombat::new(42, &mut dice);
        assert!(game.play(Weapon::Laser, &mut dice).is_none());
        assert_eq!(game.status(), GameStatus::Waiting);
    }

    #[test]
    fn position_never_drops_below_one() {
        // Zorg-9000, misses the counter roll, random pick lands on Asteroid
        let mut dice = ScriptedDice::new().with_picks([0, 1, 0]).with_units([0.9]);
        let mut game = QueueCombat::new(3, &mut dice);
        game.challenge();
        let round = game.play(Weapon::Laser, &mut dice).unwrap();
        assert_eq!(round.outcome, Outcome::Win);
        assert_eq!(game.position(), 1);
        assert_eq!(game.skipped(), 5);
    }

    #[test]
    fn next_opponent_differs_and_waits_for_promotion() {
        let mut dice = ScriptedDice::new().with_picks([2, 0, 0]).with_units([0.0]);
        let mut game = QueueCombat::new(42, &mut dice);
        assert_eq!(game.opponent().name, "Kraxon the Destroyer");
        game.challenge();
        game.play(Weapon::Laser, &mut dice).unwrap();
        assert_eq!(game.opponent().name, "Kraxon the Destroyer");
        game.promote_next_opponent();
        assert_eq!(game.opponent().name, "Zorg-9000");
        game.promote_next_opponent();
        assert_eq!(game.opponent().name, "Zorg-9000");
    }

    #[test]
    fn skip_message_only_after_a_win() {
        let mut dice = ScriptedDice::new();
        let game = QueueCombat::new(42, &mut dice);
        assert!(game.skip_message().is_none());
    }
}
