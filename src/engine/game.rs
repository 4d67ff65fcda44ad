//! The game loop's view of one session: parser, world, state and collaborators
//!
//! Each input line runs parse and dispatch to completion before anything
//! else happens. Timers only advance through [`Game::tick`].

use crate::config::Config;
use crate::display::GameDisplay;
use crate::engine::procedures::run_procedure;
use crate::input::Direction;
use crate::persistence::Persistence;
use crate::random::GameRand;
use crate::scheduler::{Procedure, Reason, Scheduler, TimerQueue};
use crate::text::parser_engine::{ParseResult, ParserEngine};
use crate::text::vocabulary::PASSWORDS;
use crate::verbs::dispatcher::{DispatchError, Dispatcher, ARKATA_SHOUT_DELAY};
use crate::world::rooms::CASTLE_DAIS_TOP;
use crate::world::{GameState, Room, World};
use log::{debug, info};

pub struct Game<D: GameDisplay, P: Persistence> {
    parser: ParserEngine,
    world: World,
    pub state: GameState,
    pub display: D,
    pub persistence: P,
    pub timers: TimerQueue,
    config: Config,
    rng: GameRand,
}

impl<D: GameDisplay, P: Persistence> Game<D, P> {
    pub fn new(config: Config, display: D, persistence: P) -> Result<Self, String> {
        let parser = ParserEngine::new(config.parser.clone())?;
        let mut rng = GameRand::from_seed(config.game.seed);
        let password = rng.gen_index(PASSWORDS.len());
        info!("New game (rng mode {:?})", rng.mode());

        let mut timers = TimerQueue::new();
        timers.add_timer(ARKATA_SHOUT_DELAY, Procedure::ArkataShouts, Reason::ArkataShouts);

        Ok(Game {
            parser,
            world: World::new(),
            state: GameState::new_game(password),
            display,
            persistence,
            timers,
            config,
            rng,
        })
    }

    pub fn parser(&self) -> &ParserEngine {
        &self.parser
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// True once the player has quit or won
    pub fn finished(&self) -> bool {
        self.state.let_me_out
    }

    fn dispatcher(&mut self) -> Dispatcher<'_> {
        Dispatcher::new(
            &mut self.state,
            &self.world,
            &mut self.display,
            &mut self.persistence,
            &mut self.timers,
            &self.config.game,
            &mut self.rng,
        )
    }

    /// Opening description
    pub fn start(&mut self) -> Result<(), DispatchError> {
        self.dispatcher().look_around()?;
        self.display
            .display_text("You're fast asleep in bed. Type WAKE to wake up.")?;
        self.show_status()
    }

    /// Runs one line of player input
    pub fn handle_line(&mut self, line: &str) -> Result<(), DispatchError> {
        if line.trim().is_empty() {
            return Ok(());
        }

        if self.state.interrogation > 0 {
            debug!("Survey answer, not parsed: '{}'", line);
            self.dispatcher().store_interrogation(line)?;
            return self.end_turn();
        }

        let also = self.world.also_table(self.state.room);
        let result = self
            .parser
            .parse(line, self.state.room, &also, &mut self.state.discourse);

        match result {
            ParseResult::Nothing => return Ok(()),
            ParseResult::NeedsDisambiguation(prompts) => {
                for prompt in prompts {
                    self.display.display_text(prompt)?;
                }
            }
            ParseResult::NotUnderstood(message) => {
                self.display.display_text(&message)?;
            }
            ParseResult::Command(command) => {
                for name in command.echoes.iter() {
                    self.display.display_text(&format!("{{ {} }}", name))?;
                }
                let mut dispatcher = self.dispatcher();
                dispatcher.set_command(&command);
                dispatcher.dispatch()?;
            }
        }
        self.end_turn()
    }

    fn end_turn(&mut self) -> Result<(), DispatchError> {
        self.state.moves += 1;
        self.show_status()
    }

    fn show_status(&mut self) -> Result<(), DispatchError> {
        let name = self.world.name(self.state.room);
        self.display
            .show_status(name, self.state.score, self.state.moves)?;
        Ok(())
    }

    /// Advances the timers `ticks` times, running whatever falls due
    pub fn tick(&mut self, ticks: u32) -> Result<(), DispatchError> {
        for _ in 0..ticks {
            for procedure in self.timers.tick() {
                let mut dispatcher = self.dispatcher();
                run_procedure(&mut dispatcher, procedure)?;
            }
        }
        Ok(())
    }

    /// Moves Avvy one field left or right within the room
    pub fn walk(&mut self, direction: Direction) -> Result<(), DispatchError> {
        if !self.state.alive || !self.state.avvy_is_awake {
            return Ok(());
        }
        if self.state.room == Room::Yours && self.state.avvy_in_bed {
            self.display
                .display_text("You'll have to get out of bed first.")?;
            return Ok(());
        }
        if self.state.standing_on_dais {
            self.display.display_text("You'll have to climb down first.")?;
            return Ok(());
        }

        let room = self.state.room;
        let last = self.world.field_count(room).saturating_sub(1);
        let mut field = self.state.field;
        loop {
            field = match direction {
                Direction::Left if field > 0 => field - 1,
                Direction::Right if field < last => field + 1,
                _ => return Ok(()),
            };
            // The top of the dais is only reached by climbing
            if !(room == Room::InsideCardiffCastle && field == CASTLE_DAIS_TOP) {
                break;
            }
        }

        self.state.field = field;
        self.state.sitting_in_pub = false;
        let text = format!("You walk to {}.", self.world.field_name(room, field));
        self.display.display_text(&text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::HeadlessDisplay;
    use crate::persistence::MemoryPersistence;

    fn game() -> Game<HeadlessDisplay, MemoryPersistence> {
        let mut config = Config::default();
        config.game.seed = Some(1);
        Game::new(config, HeadlessDisplay::new(), MemoryPersistence::new()).unwrap()
    }

    #[test_log::test]
    fn test_blank_line_changes_nothing() {
        let mut g = game();
        g.handle_line("   ").unwrap();
        assert_eq!(g.state.moves, 0);
        assert!(g.display.get_buffer().is_empty());
    }

    #[test_log::test]
    fn test_walking_skips_the_dais_top() {
        let mut g = game();
        g.state.avvy_is_awake = true;
        g.state.avvy_in_bed = false;
        g.state.room = Room::InsideCardiffCastle;
        g.state.field = 0;

        g.walk(Direction::Right).unwrap();
        assert_eq!(g.state.field, 2);
        g.walk(Direction::Left).unwrap();
        assert_eq!(g.state.field, 0);
        g.walk(Direction::Left).unwrap();
        assert_eq!(g.state.field, 0);
    }

    #[test_log::test]
    fn test_arkata_shouts_at_a_sleeper() {
        let mut g = game();
        g.tick(ARKATA_SHOUT_DELAY).unwrap();
        assert!(g.display.shown_scroll('Q', 76));
        assert!(g.timers.is_pending(Reason::ArkataShouts));
    }
}
