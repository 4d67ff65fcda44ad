//! Handlers for looking at, carrying and handing over objects

use crate::scheduler::{Procedure, Reason};
use crate::verbs::dispatcher::{DispatchResult, Dispatcher, Thing};
use crate::world::rooms::{BOX_SLOT, CASTLE_DAIS_TOP, ROBINS_CLEARING, YOURS_BOX};
use crate::world::{Item, People, Room, WineState};
use log::debug;

/// What Spludwick needs for the potion, in order
pub const SPLUDWICK_ORDER: [Item; 3] = [Item::Onion, Item::Ink, Item::Mushroom];

/// Objects nobody gets to keep
const TREASURED: [Item; 5] = [Item::Money, Item::Bodkin, Item::Bell, Item::Clothes, Item::Habit];

/// "a, b and c"
pub fn list_and(items: &[String]) -> String {
    match items.len() {
        0 => String::new(),
        1 => items[0].clone(),
        n => format!("{} and {}", items[..n - 1].join(", "), items[n - 1]),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl<'a> Dispatcher<'a> {
    pub(crate) fn examine(&mut self) -> DispatchResult {
        let thing = match self.thing {
            Some(thing) => thing,
            None => match self.person {
                Some(person) => return self.examine_person(person),
                None => return self.say("It's just as it looks on the picture."),
            },
        };

        match thing {
            Thing::Also(slot) => {
                let table = self.world.also_table(self.state.room);
                let mut text = match table.description(slot as usize) {
                    Some(text) => text.to_string(),
                    None => return self.say("Be reasonable!"),
                };
                if self.state.room == Room::Yours && slot == BOX_SLOT {
                    text.push(' ');
                    text.push_str(&self.box_contents());
                }
                self.say(&text)
            }
            Thing::Item(item) => {
                if !self.is_holding(Some(thing))? {
                    return Ok(());
                }
                match item {
                    Item::Wine => match self.state.wine_state {
                        WineState::Normal => self.scroll('T', item.id() as u16),
                        WineState::Bad => self.say("Hmm, it doesn't smell quite right."),
                        WineState::Vinegar => {
                            self.scroll('D', 7)?;
                            if self.state.onion_in_vinegar {
                                self.say("An onion is pickling nicely in it.")?;
                            }
                            Ok(())
                        }
                    },
                    Item::Onion if self.state.rotten_onion => self.scroll('Q', 21),
                    _ => self.scroll('T', item.id() as u16),
                }
            }
            Thing::Other(_) => self.say("Be reasonable!"),
        }
    }

    fn examine_person(&mut self, person: People) -> DispatchResult {
        if !self.is_person_here()? {
            return Ok(());
        }
        self.scroll('P', (person.code() - 149) as u16)?;
        if person == People::Ayles && !self.state.ayles_is_awake {
            self.scroll('Q', 13)?;
        }
        Ok(())
    }

    fn box_contents(&self) -> String {
        match self.state.box_content {
            Some(item) => format!("It contains {}.", item.description()),
            None => "It's empty.".to_string(),
        }
    }

    pub(crate) fn get(&mut self) -> DispatchResult {
        let thing = match self.thing {
            Some(thing) => thing,
            None => return self.say("Take what?"),
        };

        if self.state.room == Room::Yours
            && (thing == Thing::Also(BOX_SLOT)
                || thing.item().is_some() && thing.item() == self.state.box_content)
        {
            return self.take_from_box();
        }

        let item = match thing {
            Thing::Item(item) => item,
            _ => return self.scroll('Q', 57),
        };
        if self.state.holds(item) {
            return self.say("You're already carrying that!");
        }
        if self.state.carry_num() >= self.config.carry_limit {
            return self.say("You can't carry any more!");
        }

        match (self.state.room, item) {
            (Room::InsideCardiffCastle, Item::Pen) if !self.state.taken_pen => {
                if !self.state.standing_on_dais || self.state.field != CASTLE_DAIS_TOP {
                    return self.scroll('Q', 51);
                }
                self.state.give_item(Item::Pen);
                self.state.taken_pen = true;
                self.state.inc_score(3);
                self.say("You take the pen. Nobody seems to notice.")
            }
            (Room::Robins, Item::Mushroom) if self.state.mushroom_growing => {
                if self.state.field != ROBINS_CLEARING {
                    return self.scroll('Q', 53);
                }
                self.state.give_item(Item::Mushroom);
                self.state.mushroom_growing = false;
                self.state.inc_score(3);
                self.say("You pick the mushroom.")
            }
            _ => self.scroll('Q', 57),
        }
    }

    fn take_from_box(&mut self) -> DispatchResult {
        if self.state.field != YOURS_BOX {
            return self.say("You're not close enough to the box.");
        }
        let item = match self.state.box_content {
            Some(item) => item,
            None => return self.say("The box is empty."),
        };
        if self.state.carry_num() >= self.config.carry_limit {
            return self.say("You can't carry any more!");
        }
        self.state.box_content = None;
        self.state.give_item(item);
        self.say(&format!("You take {} out of the box.", item.description()))
    }

    pub(crate) fn drop_thing(&mut self) -> DispatchResult {
        self.say(
            "Two years ago you dropped a florin in the street. Three days later it was gone! \
             So now you never leave ANYTHING lying around. OK?",
        )
    }

    pub(crate) fn inventory(&mut self) -> DispatchResult {
        let wearing = self.state.wearing;
        let carried: Vec<String> = self
            .state
            .carried()
            .map(|item| {
                if Some(item) == wearing {
                    format!("{}, which you're wearing", item.description())
                } else {
                    item.description().to_string()
                }
            })
            .collect();

        let mut text = if carried.is_empty() {
            "You aren't carrying anything!".to_string()
        } else {
            format!("You're carrying {}.", list_and(&carried))
        };
        if wearing.is_none() {
            text.push_str(" You are stark naked!");
        }
        self.say(&text)
    }

    pub(crate) fn give(&mut self) -> DispatchResult {
        if !self.is_holding(self.thing)? {
            return Ok(());
        }
        let person = match self.person {
            Some(person) => person,
            None => return self.say("Give to whom?"),
        };
        if !self.is_person_here()? {
            return Ok(());
        }
        let item = match self.thing {
            Some(Thing::Item(item)) => item,
            _ => return self.say("You can't give that away!"),
        };
        if TREASURED.contains(&item) {
            return self.say("Don't give it away, it might be useful!");
        }
        debug!("Giving {:?} to {:?}", item, person);

        match (person, item) {
            (People::Crapulus, Item::Wine) => {
                self.state.take_item(Item::Wine);
                self.state.wine_state = WineState::Vinegar;
                self.say(
                    "Crapulus grabs the wine and gulps it down. \
                     \"Ugh, that barrel must be going off, Avvy.\"",
                )
            }
            (People::Cwytalot, Item::Crossbow) | (People::Cwytalot, Item::Bolt) => {
                self.say("You might be able to influence Cwytalot more if you used it!")
            }
            (People::Spludwick, _) => self.give_to_spludwick(item),
            (People::Ibythneth, Item::Badge) => {
                self.state.take_item(Item::Badge);
                self.state.give_item(Item::Habit);
                self.state.given_badge_to_iby = true;
                self.state.inc_score(5);
                self.scroll('Q', 32)
            }
            (People::Ayles, _) if !self.state.ayles_is_awake => self.scroll('Q', 43),
            (People::Ayles, Item::Pen) => {
                self.state.take_item(Item::Pen);
                self.state.give_item(Item::Ink);
                self.state.given_pen_to_ayles = true;
                self.state.inc_score(6);
                self.scroll('Q', 54)
            }
            (People::Geida, Item::Potion) => {
                self.state.take_item(Item::Potion);
                self.state.given_potion_to_geida = true;
                self.state.geida_follows = true;
                self.state.inc_score(4);
                self.scroll('U', 16)
            }
            (People::Geida, Item::Lute) => {
                if !self.state.given_potion_to_geida {
                    return self.scroll('U', 17);
                }
                self.state.take_item(Item::Lute);
                self.arm_timer(4, Procedure::GiveLuteToGeida, Reason::GeidaSings);
                self.say("Geida takes the lute and tunes it.")
            }
            (People::Arkata, Item::Potion) => {
                if !self.state.given_potion_to_geida {
                    return self.scroll('Q', 77);
                }
                self.state.take_item(Item::Potion);
                self.winning()
            }
            _ => self.say_thanks(item),
        }
    }

    fn say_thanks(&mut self, item: Item) -> DispatchResult {
        self.state.take_item(item);
        self.say("Hey, thanks! (But now, you've lost it!)")
    }

    fn give_to_spludwick(&mut self, handed: Item) -> DispatchResult {
        let given = self.state.given_to_spludwick as usize;
        let wanted = match SPLUDWICK_ORDER.get(given) {
            Some(wanted) => *wanted,
            None => return self.say_thanks(handed),
        };
        // The vinegar carries the onion pickling in it
        let pickled = handed == Item::Wine && self.state.onion_in_vinegar;
        let item = if pickled { Item::Onion } else { handed };
        if item != wanted {
            return self.say(&format!(
                "\"That's not what I need, Avvy. Bring me {}.\"",
                wanted.description()
            ));
        }

        match item {
            Item::Onion if pickled => {
                self.say("Spludwick fishes the onion out of the vinegar.")?;
                self.scroll('Q', 20)?;
                self.state.onion_in_vinegar = false;
            }
            Item::Onion if self.state.rotten_onion => return self.scroll('Q', 22),
            Item::Onion => self.scroll('Q', 20)?,
            Item::Ink => self.scroll('Q', 24)?,
            _ => {
                self.scroll('Q', 25)?;
                self.state.give_item(Item::Potion);
            }
        }
        self.state.take_item(handed);
        self.state.given_to_spludwick += 1;
        self.state.inc_score(3);
        if item != Item::Mushroom {
            self.arm_timer(
                3,
                Procedure::SpludwickGoesToCauldron,
                Reason::SpludwickWalk,
            );
        }
        Ok(())
    }

    pub(crate) fn wear(&mut self) -> DispatchResult {
        if !self.is_holding(self.thing)? {
            return Ok(());
        }
        let item = match self.thing {
            Some(Thing::Item(item @ Item::Clothes)) | Some(Thing::Item(item @ Item::Habit)) => {
                item
            }
            _ => return self.say("Hey, what kind of a weirdo are you??"),
        };
        if self.state.wearing == Some(item) {
            return self.say("You're already wearing that.");
        }
        if self.state.wearing.is_some() {
            return self.say("You'll have to take off what you're wearing first!");
        }
        self.state.wearing = Some(item);
        if item == Item::Habit {
            self.say("You're now dressed as a monk.")
        } else {
            self.say("OK.")
        }
    }

    pub(crate) fn undress(&mut self) -> DispatchResult {
        if self.state.wearing.is_none() {
            return self.say("You're already stark naked!");
        }
        if self.state.room != Room::Yours {
            return self.say("Hadn't you better find somewhere more private, Avvy?");
        }
        self.state.wearing = None;
        self.say("That's better.")
    }

    /// PUT <thing2> IN <thing>
    pub(crate) fn put(&mut self) -> DispatchResult {
        let (what, container) = match (self.thing2, self.thing) {
            (Some(what), Some(container)) => (what, container),
            _ => return self.say("Put what where?"),
        };
        if !self.is_holding(Some(what))? {
            return Ok(());
        }

        match (what, container) {
            (Thing::Item(Item::Onion), Thing::Item(Item::Wine)) => {
                if !self.state.holds(Item::Wine) {
                    return self.say("You're not holding it, Avvy.");
                }
                if self.state.wine_state != WineState::Vinegar {
                    return self.say("That's a plain waste of wine!");
                }
                if self.state.rotten_onion {
                    return self.scroll('U', 11);
                }
                self.state.take_item(Item::Onion);
                self.state.onion_in_vinegar = true;
                self.state.inc_score(7);
                self.scroll('U', 9)
            }
            (Thing::Item(item), Thing::Also(BOX_SLOT)) if self.state.room == Room::Yours => {
                self.put_in_box(item)
            }
            _ => self.say("Don't be silly!"),
        }
    }

    fn put_in_box(&mut self, item: Item) -> DispatchResult {
        if self.state.field != YOURS_BOX {
            return self.say("You're not close enough to the box.");
        }
        if self.state.box_content.is_some() {
            return self.say("There's something in the box already, Avvy. Try taking that out first.");
        }
        if self.state.wearing == Some(item) {
            return self.say("You'd better take it off first!");
        }
        if matches!(item, Item::Money | Item::Bodkin) {
            return self.say("You'd better keep that with you!");
        }
        self.state.take_item(item);
        self.state.box_content = Some(item);
        // The box is damp
        match item {
            Item::Wine => self.state.wine_state = WineState::Bad,
            Item::Onion => self.state.rotten_onion = true,
            _ => {}
        }
        self.say("OK, it's in the box.")
    }

    /// LOOK: the room, then who else is in it
    pub(crate) fn look_around(&mut self) -> DispatchResult {
        let table = self.world.also_table(self.state.room);
        let text = table
            .description(0)
            .unwrap_or("There's nothing much to see here.")
            .to_string();
        self.say(&text)?;

        let names: Vec<String> = self
            .state
            .people_here()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        match names.len() {
            0 => Ok(()),
            1 => self.say(&format!("{} is here.", capitalize(&names[0]))),
            _ => self.say(&format!("{} are here.", capitalize(&list_and(&names)))),
        }
    }
}
