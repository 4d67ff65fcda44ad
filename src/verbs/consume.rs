//! Eating, drinking and shopping

use crate::scheduler::{Procedure, Reason};
use crate::verbs::dispatcher::{DispatchResult, Dispatcher, Thing};
use crate::world::rooms::{ARGENT_PUB_BAR, DUCKS_STALL, YOURS_BED};
use crate::world::{Item, Room, WineState};
use log::info;

/// Pence for a drink or an onion
pub const PRICE: i32 = 3;

/// Ticks Malagauche takes to serve an order
pub const SERVING_DELAY: u32 = 27;

/// Drinks that knock Avvy out
pub const DRINKS_TO_PASS_OUT: u8 = 5;

/// Also-slots of the Argent pub that hold drinks on sale
const PUB_DRINKS: [u8; 4] = [1, 3, 4, 8];

const GINGER_POP_SLOT: u8 = 2;

impl<'a> Dispatcher<'a> {
    /// DRINK and EAT
    pub(crate) fn swallow(&mut self) -> DispatchResult {
        if !self.is_holding(self.thing)? {
            return Ok(());
        }
        let item = match self.thing {
            Some(Thing::Item(item)) => item,
            _ if self.state.room.is_pub() => {
                return self.say("Try BUYing things before you drink them!")
            }
            _ => return self.scroll('D', 8),
        };

        match item {
            Item::Wine => match self.state.wine_state {
                WineState::Normal => {
                    if self.state.teetotal {
                        return self.scroll('D', 6);
                    }
                    self.state.take_item(Item::Wine);
                    self.scroll('U', 1)?;
                    self.drink()
                }
                WineState::Bad => self.say("Ugh! It's gone off. You'd better not drink any more."),
                WineState::Vinegar if self.state.onion_in_vinegar => {
                    self.say("You'd swallow the onion too, Avvy! Spludwick might want that.")
                }
                WineState::Vinegar => {
                    self.scroll('D', 7)?;
                    self.say("Not nice.")
                }
            },
            Item::Potion => {
                self.state.take_item(Item::Potion);
                self.scroll('U', 3)?;
                self.game_over()
            }
            Item::Ink => {
                self.state.take_item(Item::Ink);
                self.scroll('U', 4)
            }
            Item::Chastity => self.scroll('U', 5),
            Item::Mushroom => {
                self.state.take_item(Item::Mushroom);
                self.scroll('U', 6)?;
                self.game_over()
            }
            Item::Onion if self.state.rotten_onion => self.scroll('U', 11),
            Item::Onion => {
                self.state.take_item(Item::Onion);
                self.scroll('U', 8)
            }
            _ if self.state.room.is_pub() => {
                self.say("Try BUYing things before you drink them!")
            }
            _ => self.scroll('D', 8),
        }
    }

    /// One more drink inside Avvy. The fifth is a knockout, ending with
    /// Avvy asleep at home with a key and a pledge.
    pub(crate) fn drink(&mut self) -> DispatchResult {
        self.state.alcohol_level = self.state.alcohol_level.saturating_add(1);
        info!("Alcohol level now {}", self.state.alcohol_level);
        match self.state.alcohol_level {
            1 => self.say("Mmm, that was nice."),
            2 => self.scroll('U', 2),
            3 | 4 => self.say("You're beginning to feel a little tipsy."),
            _ => {
                self.say(
                    "Everything goes black... Some hours later, you come round in your own bed, \
                     with something hard in your pocket.",
                )?;
                self.state.give_item(Item::Key);
                self.state.teetotal = true;
                self.state.avvy_is_awake = false;
                self.state.avvy_in_bed = true;
                self.state.sitting_in_pub = false;
                self.state.room = Room::Yours;
                self.state.field = YOURS_BED;
                Ok(())
            }
        }
    }

    pub(crate) fn buy(&mut self) -> DispatchResult {
        match self.state.room {
            Room::ArgentPub => self.buy_in_pub(),
            Room::OutsideDucks if self.state.field == DUCKS_STALL => self.buy_onion(),
            Room::NottsPub => self.scroll('N', 15),
            _ => self.scroll('D', 0),
        }
    }

    fn buy_in_pub(&mut self) -> DispatchResult {
        if self.state.field != ARGENT_PUB_BAR {
            return self.scroll('D', 5);
        }
        if self.state.teetotal {
            return self.scroll('D', 6);
        }
        if self.state.drinks_on_order {
            return self.scroll('D', 15);
        }

        match self.thing {
            Some(Thing::Also(slot)) if PUB_DRINKS.contains(&slot) => {
                if !self.decrease_money(PRICE)? {
                    return Ok(());
                }
                self.state.drinks_on_order = true;
                self.state.drinking = slot;
                self.scroll('D', 1)?;
                self.arm_timer(SERVING_DELAY, Procedure::BuyDrinks, Reason::Drinks);
                Ok(())
            }
            Some(Thing::Also(GINGER_POP_SLOT)) => {
                self.say("Malagauche laughs. \"Ginger pop? We don't serve that to grown men, sir.\"")
            }
            Some(Thing::Item(Item::Wine)) => {
                if self.state.holds(Item::Wine) {
                    return self.scroll('D', 2);
                }
                if !self.decrease_money(PRICE)? {
                    return Ok(());
                }
                self.state.drinks_on_order = true;
                self.scroll('D', 1)?;
                self.arm_timer(SERVING_DELAY, Procedure::BuyWine, Reason::Drinks);
                Ok(())
            }
            _ => self.scroll('D', 0),
        }
    }

    fn buy_onion(&mut self) -> DispatchResult {
        if self.thing != Some(Thing::Item(Item::Onion)) {
            return self.scroll('D', 0);
        }
        if self.state.holds(Item::Onion) {
            return self.scroll('D', 10);
        }
        if !self.decrease_money(PRICE)? {
            return Ok(());
        }
        self.state.give_item(Item::Onion);
        self.state.rotten_onion = false;
        let again = self.state.bought_onion;
        self.state.bought_onion = true;
        self.scroll('D', if again { 11 } else { 9 })
    }

    pub(crate) fn pay(&mut self) -> DispatchResult {
        self.say("No money need change hands.")
    }
}
