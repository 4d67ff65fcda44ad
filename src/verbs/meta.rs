//! Verbs about the game rather than the world: saving, scoring, quitting

use crate::engine::procedures::SPLUDWICK_AWAY_DELAY;
use crate::persistence::slot_for;
use crate::scheduler::{Procedure, Reason};
use crate::verbs::dispatcher::{DispatchResult, Dispatcher};
use crate::world::{People, Room, MAX_SCORE};
use log::info;

/// Score thresholds and the rank each one earns
const RANKS: [(u16, &str); 8] = [
    (0, "Beginner"),
    (10, "Novice"),
    (20, "Improving"),
    (35, "Not bad"),
    (50, "Passable"),
    (65, "Good"),
    (80, "Experienced"),
    (108, "The BEST!"),
];

pub fn rank(score: u16) -> &'static str {
    RANKS
        .iter()
        .rev()
        .find(|(threshold, _)| score >= *threshold)
        .map_or("Beginner", |(_, name)| *name)
}

impl<'a> Dispatcher<'a> {
    /// Words typed after the verb, as typed
    fn operand_text(&self) -> String {
        self.raw_words
            .iter()
            .skip(1)
            .map(|w| w.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn save(&mut self) -> DispatchResult {
        let mut description = self.operand_text();
        if description.is_empty() {
            description = format!(
                "{}, move {}",
                self.world.name(self.state.room),
                self.state.moves
            );
        }
        let slots = self.persistence.list_save_slots()?;
        let slot = slot_for(&slots, &description);
        self.persistence.save(slot, &description, self.state)?;
        info!("Saved slot {} as '{}'", slot, description);
        self.say(&format!("Saved as \"{}\" in slot {}.", description, slot))
    }

    pub(crate) fn load(&mut self) -> DispatchResult {
        let slots = self.persistence.list_save_slots()?;
        if slots.is_empty() {
            return self.say("There are no saved games.");
        }

        let wanted = self.operand_text();
        let slot = if wanted.is_empty() {
            slots.iter().map(|s| s.slot).max()
        } else {
            wanted.parse::<u32>().ok().or_else(|| {
                slots
                    .iter()
                    .find(|s| s.description.eq_ignore_ascii_case(&wanted))
                    .map(|s| s.slot)
            })
        };
        let slot = match slot {
            Some(slot) => slot,
            None => return self.say(&format!("There's no saved game called \"{}\".", wanted)),
        };

        match self.persistence.load(slot)? {
            Some(state) => {
                *self.state = state;
                for reason in Reason::ALL.iter() {
                    self.scheduler.cancel_timer(*reason);
                }
                if self.state.room_of(People::Spludwick) != Room::Spludwicks {
                    self.arm_timer(
                        SPLUDWICK_AWAY_DELAY,
                        Procedure::SpludwickReturns,
                        Reason::SpludwickWalk,
                    );
                }
                info!("Restored slot {}", slot);
                self.say("Game restored.")?;
                self.look_around()
            }
            None => self.say(&format!("There's nothing saved in slot {}.", slot)),
        }
    }

    pub(crate) fn dir(&mut self) -> DispatchResult {
        let slots = self.persistence.list_save_slots()?;
        if slots.is_empty() {
            return self.say("There are no saved games.");
        }
        let mut text = String::from("Saved games:");
        for slot in slots.iter() {
            text.push_str(&format!("\n{:3}: {}", slot.slot, slot.description));
        }
        self.say(&text)
    }

    pub(crate) fn quit(&mut self) -> DispatchResult {
        if !self.polite {
            return self.say("How about a `please\", Avvy?");
        }
        if self.ask("Do you really want to quit?")? {
            self.state.let_me_out = true;
        }
        Ok(())
    }

    pub(crate) fn restart(&mut self) -> DispatchResult {
        if !self.ask("Restart game and lose changes?")? {
            return Ok(());
        }
        self.start_new_game();
        self.say("A new game begins.")?;
        self.look_around()
    }

    pub(crate) fn score(&mut self) -> DispatchResult {
        let score = self.state.score;
        self.say(&format!(
            "Your score is {}, out of a possible {}. This gives you a rank of {}.",
            score,
            MAX_SCORE,
            rank(score)
        ))
    }

    pub(crate) fn info(&mut self) -> DispatchResult {
        self.say(
            "Lord Avalot d'Argent: a medieval adventure. Your wife Arkata has been carried \
             off, and it's up to you to win her back.",
        )
    }

    pub(crate) fn help(&mut self) -> DispatchResult {
        self.say(
            "Type commands such as EXAMINE BELL, TALK TO CRAPULUS or GIVE WINE TO SPLUDWICK. \
             Walk with the arrow keys, and OPEN doors when you reach them. F3 repeats your \
             last command.",
        )
    }

    pub(crate) fn cheat(&mut self) -> DispatchResult {
        self.state.cheat = !self.state.cheat;
        if self.state.cheat {
            self.say("Cheat mode now enabled.")
        } else {
            self.say("Cheat mode now disabled.")
        }
    }

    pub(crate) fn die(&mut self) -> DispatchResult {
        self.say("OK, you asked for it.")?;
        self.game_over()
    }

    pub(crate) fn pause(&mut self) -> DispatchResult {
        self.say("Game paused. Type your next command when you're ready.")
    }
}
