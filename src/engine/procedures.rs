//! Deferred procedures, run by the game loop when their timers fire

use crate::scheduler::{Procedure, Reason};
use crate::verbs::dispatcher::{DispatchResult, Dispatcher, ARKATA_SHOUT_DELAY, SURVEY_REPEAT_DELAY};
use crate::verbs::places::AVARICIUS_DELAY;
use crate::world::rooms::NOTTS_PUB_BENCH;
use crate::world::{Item, People, Room, WineState};
use log::debug;

/// Ticks Spludwick spends out fetching newts after each ingredient
pub const SPLUDWICK_AWAY_DELAY: u32 = 80;

/// Last Avaricius line before the demon vanishes
const AVARICIUS_LAST_LINE: u8 = 16;

pub fn run_procedure(d: &mut Dispatcher, procedure: Procedure) -> DispatchResult {
    debug!("Running {:?}", procedure);
    match procedure {
        Procedure::BuyDrinks => {
            d.state.drinks_on_order = false;
            if d.state.room != Room::ArgentPub {
                return Ok(());
            }
            d.scroll('D', 50 + d.state.drinking as u16)?;
            d.scroll('D', 3)?;
            d.drink()
        }
        Procedure::BuyWine => {
            d.state.drinks_on_order = false;
            if d.state.room != Room::ArgentPub {
                return Ok(());
            }
            if d.state.wine_state == WineState::Bad {
                d.state.wine_state = WineState::Normal;
            }
            d.state.give_item(Item::Wine);
            d.scroll('D', 50)?;
            d.scroll('D', 4)
        }
        Procedure::OpenDrawbridge => {
            d.state.drawbridge_open = true;
            if d.state.room == Room::Bridge {
                d.say("With a great creaking, the drawbridge comes down.")?;
            }
            Ok(())
        }
        Procedure::Urinate => d.say("Ahhhhhhh! That's better."),
        Procedure::SpludwickGoesToCauldron => {
            if d.state.room == Room::Spludwicks {
                d.scroll('Q', 17)?;
                d.say("Spludwick bustles out of the door, muttering about newts.")?;
            }
            d.state.set_room_of(People::Spludwick, Room::Dummy);
            d.arm_timer(SPLUDWICK_AWAY_DELAY, Procedure::SpludwickReturns, Reason::SpludwickWalk);
            Ok(())
        }
        Procedure::SpludwickReturns => {
            d.state.set_room_of(People::Spludwick, Room::Spludwicks);
            if d.state.room == Room::Spludwicks {
                d.say("Spludwick comes back in with a basket of newts.")?;
            }
            Ok(())
        }
        Procedure::AvvySitDown => {
            if d.state.room == Room::NottsPub && d.state.field == NOTTS_PUB_BENCH {
                d.state.sitting_in_pub = true;
                d.say("You sit down on the bench.")?;
            }
            Ok(())
        }
        Procedure::Jump => d.say("Wheee!"),
        Procedure::AvariciusTalks => {
            if d.state.room != Room::Spludwicks {
                d.state.avaricius_talk = 0;
                return Ok(());
            }
            let line = d.state.avaricius_talk;
            d.scroll('Q', line as u16)?;
            if line >= AVARICIUS_LAST_LINE {
                d.state.avaricius_talk = 0;
            } else {
                d.state.avaricius_talk = line + 1;
                d.arm_timer(AVARICIUS_DELAY, Procedure::AvariciusTalks, Reason::AvariciusTalks);
            }
            Ok(())
        }
        Procedure::ArkataShouts => {
            if d.state.room == Room::Yours && !d.state.avvy_is_awake {
                d.scroll('Q', 76)?;
                d.arm_timer(ARKATA_SHOUT_DELAY, Procedure::ArkataShouts, Reason::ArkataShouts);
            }
            Ok(())
        }
        Procedure::CardiffSurvey => {
            if d.state.room == Room::InsideCardiffCastle && d.state.interrogation > 0 {
                d.scroll('Z', d.state.interrogation as u16)?;
                d.arm_timer(SURVEY_REPEAT_DELAY, Procedure::CardiffSurvey, Reason::CardiffSurvey);
            }
            Ok(())
        }
        Procedure::GiveLuteToGeida => {
            d.state.lustie_is_asleep = true;
            d.scroll('Q', 86)
        }
    }
}
