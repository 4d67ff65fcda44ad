//! Command dispatcher: runs the guards, then the handler for the parsed verb
//!
//! Handlers see the game through the borrowed collaborators held here. They
//! check every precondition before touching state, and anything that has to
//! happen later is handed to the scheduler rather than run inline.

use crate::config::GameConfig;
use crate::display::{DisplayError, GameDisplay};
use crate::persistence::{Persistence, PersistenceError};
use crate::random::GameRand;
use crate::scheduler::{Procedure, Reason, Scheduler};
use crate::text::parser_engine::Command;
use crate::text::vocabulary::{Verb, WordCode, ALSO_BASE, PASSWORDS};
use crate::world::{GameState, Item, People, Room, World, SLIP_OFFSET};
use log::{debug, info, warn};
use std::fmt;

/// Ticks before Arkata comes to shout at a sleeping Avvy
pub const ARKATA_SHOUT_DELAY: u32 = 160;

/// The object operand of a command, after slipping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thing {
    Item(Item),
    /// A room-local word, by also-table slot
    Also(u8),
    /// Any other object code, slipped
    Other(u8),
}

impl Thing {
    /// Classifies an unslipped object-noun code
    pub fn from_code(code: u8) -> Thing {
        match code {
            50..=67 => match Item::from_word_code(code) {
                Some(item) => Thing::Item(item),
                None => Thing::Other(code - SLIP_OFFSET),
            },
            ALSO_BASE..=129 => Thing::Also(code - ALSO_BASE),
            _ => Thing::Other(code.saturating_sub(SLIP_OFFSET)),
        }
    }

    pub fn item(self) -> Option<Item> {
        match self {
            Thing::Item(item) => Some(item),
            _ => None,
        }
    }
}

/// Infrastructure failure while running a command. Player mistakes are
/// never errors; they are answered with a message.
#[derive(Debug)]
pub enum DispatchError {
    Display(DisplayError),
    Persistence(PersistenceError),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Display(e) => write!(f, "{}", e),
            DispatchError::Persistence(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for DispatchError {}

impl From<DisplayError> for DispatchError {
    fn from(error: DisplayError) -> Self {
        DispatchError::Display(error)
    }
}

impl From<PersistenceError> for DispatchError {
    fn from(error: PersistenceError) -> Self {
        DispatchError::Persistence(error)
    }
}

pub type DispatchResult = Result<(), DispatchError>;

pub struct Dispatcher<'a> {
    pub state: &'a mut GameState,
    pub world: &'a World,
    pub display: &'a mut dyn GameDisplay,
    pub persistence: &'a mut dyn Persistence,
    pub scheduler: &'a mut dyn Scheduler,
    pub config: &'a GameConfig,
    pub rng: &'a mut GameRand,

    pub verb: Option<Verb>,
    pub thing: Option<Thing>,
    pub thing2: Option<Thing>,
    pub person: Option<People>,
    pub polite: bool,
    pub subject: Option<WordCode>,
    pub raw_words: Vec<String>,
}

impl<'a> Dispatcher<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        state: &'a mut GameState,
        world: &'a World,
        display: &'a mut dyn GameDisplay,
        persistence: &'a mut dyn Persistence,
        scheduler: &'a mut dyn Scheduler,
        config: &'a GameConfig,
        rng: &'a mut GameRand,
    ) -> Self {
        Dispatcher {
            state,
            world,
            display,
            persistence,
            scheduler,
            config,
            rng,
            verb: None,
            thing: None,
            thing2: None,
            person: None,
            polite: false,
            subject: None,
            raw_words: Vec::new(),
        }
    }

    /// Takes the operands of a parsed command, applying the slip
    pub fn set_command(&mut self, command: &Command) {
        let grammar = &command.grammar;
        self.verb = grammar.verb;
        self.thing = grammar.thing.map(Thing::from_code);
        self.thing2 = grammar.thing2.map(Thing::from_code);
        self.person = grammar.person;
        self.polite = grammar.polite;
        self.subject = grammar.subject;
        self.raw_words = command.raw_words.clone();
    }

    pub fn dispatch(&mut self) -> DispatchResult {
        let verb = match self.verb {
            Some(verb) => verb,
            None => return self.say("Hey, a verb would be helpful!"),
        };
        info!(
            "Dispatching {:?} thing={:?} thing2={:?} person={:?}",
            verb, self.thing, self.thing2, self.person
        );

        if !verb.is_meta() {
            if self.state.tied_up {
                debug!("Guard: tied up");
                return self.say("You're tied up, Avvy, and can't do anything!");
            }
            if !self.state.alive {
                debug!("Guard: dead");
                return self.say(
                    "You're dead, so don't talk. What are you, a ghost or something? \
                     Try restarting, or restoring a saved game!",
                );
            }
            if !self.state.avvy_is_awake
                && !matches!(verb, Verb::Die | Verb::Expletive | Verb::Wake)
            {
                debug!("Guard: asleep");
                return self.say("Talking in your sleep? Try waking up!");
            }
        }

        self.run_verb(verb)
    }

    /// Runs the handler for `verb` without the guards
    pub fn run_verb(&mut self, verb: Verb) -> DispatchResult {
        match verb {
            Verb::Examine => self.examine(),
            Verb::Open => self.open_door(),
            Verb::Pause => self.pause(),
            Verb::Get => self.get(),
            Verb::Drop => self.drop_thing(),
            Verb::Inventory => self.inventory(),
            Verb::Talk => self.talk(),
            Verb::Give => self.give(),
            Verb::Drink | Verb::Eat => self.swallow(),
            Verb::Load => self.load(),
            Verb::Save => self.save(),
            Verb::Pay => self.pay(),
            Verb::Look => self.look_around(),
            Verb::Break => self.say("Vandalism is prohibited within this game!"),
            Verb::Quit => self.quit(),
            Verb::Sit => self.sit(),
            Verb::Stand => self.stand(),
            Verb::Go => self.say("Just use the arrow keys to walk there."),
            Verb::Info => self.info(),
            Verb::Undress => self.undress(),
            Verb::Wear => self.wear(),
            Verb::Play => self.play(),
            Verb::Ring => self.ring(),
            Verb::Help => self.help(),
            Verb::Larrypass => self.say("Wrong game!"),
            Verb::Phaon => self.say("Hello, Phaon!"),
            Verb::Pee => self.pee(),
            Verb::Cheat => self.cheat(),
            Verb::Magic => self.magic(),
            Verb::Restart => self.restart(),
            Verb::Listen => self.listen(),
            Verb::Buy => self.buy(),
            Verb::Attack => self.attack(),
            Verb::Password => self.password(),
            Verb::Dir => self.dir(),
            Verb::Die => self.die(),
            Verb::Score => self.score(),
            Verb::Put => self.put(),
            Verb::Kiss => self.kiss(),
            Verb::Climb => self.climb(),
            Verb::Jump => self.jump(),
            Verb::Wake => self.wake(),
            Verb::Hello => self.hello(),
            Verb::Thanks => self.say("That's OK."),
            Verb::SmartAlec => self.say("Listen, smart alec, that was just rhetoric."),
            Verb::Expletive => self.expletive(),
            Verb::Boss | Verb::Hiscores => {
                warn!("Unhandled verb: {}", verb.code());
                self.say(&format!("Unhandled verb: {}", verb.code()))
            }
        }
    }

    pub fn say(&mut self, text: &str) -> DispatchResult {
        self.display.display_text(text)?;
        Ok(())
    }

    pub fn scroll(&mut self, category: char, id: u16) -> DispatchResult {
        self.display.display_scroll_chain(category, id)?;
        Ok(())
    }

    pub fn ask(&mut self, question: &str) -> Result<bool, DispatchError> {
        Ok(self.display.display_question(question)?)
    }

    /// True when the object operand is something Avvy has to hand. Room
    /// words always count; a missing item gets the complaint here.
    pub fn is_holding(&mut self, thing: Option<Thing>) -> Result<bool, DispatchError> {
        match thing {
            Some(Thing::Also(_)) => Ok(true),
            Some(Thing::Item(item)) if self.state.holds(item) => Ok(true),
            Some(Thing::Item(_)) => {
                self.say("You're not holding it, Avvy.")?;
                Ok(false)
            }
            Some(Thing::Other(_)) | None => {
                self.say("Be reasonable!")?;
                Ok(false)
            }
        }
    }

    /// True when the person operand is in the room, or there is none
    pub fn is_person_here(&mut self) -> Result<bool, DispatchError> {
        match self.person {
            Some(person) if !self.state.is_here(person) => {
                if person.is_female() {
                    self.say("She isn't around at the moment.")?;
                } else {
                    self.say("He isn't around at the moment.")?;
                }
                Ok(false)
            }
            _ => Ok(true),
        }
    }

    pub fn arm_timer(&mut self, delay: u32, procedure: Procedure, reason: Reason) {
        self.scheduler.add_timer(delay, procedure, reason);
    }

    /// Charges Avvy `pence`. Going below nothing ends the game.
    pub fn decrease_money(&mut self, pence: i32) -> Result<bool, DispatchError> {
        self.state.money -= pence;
        if self.state.money < 0 {
            self.scroll('Q', 2)?;
            self.game_over()?;
            return Ok(false);
        }
        Ok(true)
    }

    pub fn game_over(&mut self) -> DispatchResult {
        info!("Avvy has died");
        self.state.alive = false;
        self.say("Avvy is dead. Try restarting, or restoring a saved game!")
    }

    pub fn winning(&mut self) -> DispatchResult {
        self.scroll('Q', 79)?;
        self.score()?;
        self.say(" T H E    E N D ")?;
        self.state.let_me_out = true;
        Ok(())
    }

    /// Replaces the game with a fresh one and forgets every pending timer
    pub fn start_new_game(&mut self) {
        let password = self.rng.gen_index(PASSWORDS.len());
        *self.state = GameState::new_game(password);
        for reason in Reason::ALL.iter() {
            self.scheduler.cancel_timer(*reason);
        }
        self.arm_timer(ARKATA_SHOUT_DELAY, Procedure::ArkataShouts, Reason::ArkataShouts);
        debug!("New game, password {}", PASSWORDS[password]);
    }

    /// Walks Avvy into `room` at `field` and describes it
    pub fn enter_room(&mut self, room: Room, field: u8) -> DispatchResult {
        let old = self.state.room;
        info!("Avvy goes from {:?} to {:?}", old, room);
        if old == Room::InsideCardiffCastle && room != old {
            self.state.interrogation = 0;
            self.scheduler.cancel_timer(Reason::CardiffSurvey);
        }

        self.state.room = room;
        self.state.field = field;
        self.state.standing_on_dais = false;
        self.state.sitting_in_pub = false;
        if self.state.geida_follows {
            self.state.set_room_of(People::Geida, room);
        }

        self.look_around()?;

        if room == Room::InsideCardiffCastle && self.state.cardiff_question < 4 {
            if self.state.cardiff_question == 0 {
                self.scroll('Q', 27)?;
            }
            self.state.interrogation = self.state.cardiff_question + 1;
            self.scroll('Z', self.state.interrogation as u16)?;
            self.arm_timer(
                SURVEY_REPEAT_DELAY,
                Procedure::CardiffSurvey,
                Reason::CardiffSurvey,
            );
        }
        Ok(())
    }
}

/// Ticks before the castle guard repeats an unanswered question
pub const SURVEY_REPEAT_DELAY: u32 = 60;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thing_classification_applies_the_slip() {
        assert_eq!(Thing::from_code(52), Thing::Item(Item::Bodkin));
        assert_eq!(Thing::from_code(67), Thing::Item(Item::Onion));
        assert_eq!(Thing::from_code(99), Thing::Also(0));
        assert_eq!(Thing::from_code(103), Thing::Also(4));
        assert_eq!(Thing::from_code(129), Thing::Also(30));
        assert_eq!(Thing::from_code(80), Thing::Other(31));
    }
}
