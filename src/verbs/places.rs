//! Doors, furniture and the rest of what fills a room

use crate::scheduler::{Procedure, Reason};
use crate::verbs::dispatcher::{DispatchResult, Dispatcher, Thing};
use crate::world::rooms::{
    PortalAction, BOX_SLOT, BRIDGE_DRAWBRIDGE, BRUMMIE_ROAD_GATE, CASTLE_DAIS_FOOT,
    CASTLE_DAIS_TOP, HARP_SLOT, NIM_SLOT, NOTTS_PUB_BENCH, YOURS_BOX,
};
use crate::world::{Item, People, Room};
use log::debug;

/// First line Avaricius speaks, as a Q scroll number
pub const AVARICIUS_FIRST_LINE: u8 = 14;

/// Ticks between the lines of Avaricius' speech
pub const AVARICIUS_DELAY: u32 = 4;

impl<'a> Dispatcher<'a> {
    pub(crate) fn open_door(&mut self) -> DispatchResult {
        let room = self.state.room;
        if room == Room::Yours && self.thing == Some(Thing::Also(BOX_SLOT)) {
            if self.state.field != YOURS_BOX {
                return self.say("You're not close enough to the box.");
            }
            let text = match self.state.box_content {
                Some(item) => format!("You open the box. It contains {}.", item.description()),
                None => "You open the box. It's empty.".to_string(),
            };
            return self.say(&text);
        }
        if room == Room::Map {
            return self.say("It's not really a door, Avvy. It's a map.");
        }

        let portal = match self.world.portal_at(room, self.state.field) {
            Some(portal) => portal,
            None => return self.say("Door? What door?"),
        };
        debug!("Using portal {:?} in {:?}", portal, room);

        if room == Room::BrummieRoad
            && portal.field == BRUMMIE_ROAD_GATE
            && self.state.is_here(People::Cwytalot)
        {
            return self.say("Cwytalot stands in front of the gate. \"Nobody passes this way!\"");
        }
        if room == Room::Bridge && portal.field == BRIDGE_DRAWBRIDGE && !self.state.drawbridge_open {
            return self.say("The drawbridge is up, Avvy.");
        }

        match portal.action {
            PortalAction::Transport { room, field } => self.enter_room(room, field),
            PortalAction::OpenDoor { room, field } => {
                self.say("The door opens.")?;
                self.enter_room(room, field)
            }
            PortalAction::Exclaim(id) => self.scroll('X', id),
            PortalAction::Unfinished => self.say("Sorry. This place is not available yet!"),
        }
    }

    pub(crate) fn sit(&mut self) -> DispatchResult {
        match self.state.room {
            Room::NottsPub if self.state.sitting_in_pub => self.say("You're already sitting!"),
            Room::NottsPub => {
                self.state.field = NOTTS_PUB_BENCH;
                self.arm_timer(2, Procedure::AvvySitDown, Reason::SittingDown);
                self.say("You walk over to the bench.")
            }
            Room::Yours if self.state.avvy_in_bed => self.say("You're already in bed!"),
            _ => self.say("A few hours later...\nnothing much has happened."),
        }
    }

    pub(crate) fn stand(&mut self) -> DispatchResult {
        match self.state.room {
            Room::Yours if self.state.avvy_in_bed => {
                self.state.avvy_in_bed = false;
                self.say("You get out of bed.")
            }
            Room::InsideCardiffCastle if self.state.standing_on_dais => {
                self.state.standing_on_dais = false;
                self.state.field = CASTLE_DAIS_FOOT;
                self.say("You climb down from the dais.")
            }
            Room::NottsPub if self.state.sitting_in_pub => {
                self.state.sitting_in_pub = false;
                self.say("You stand up.")
            }
            _ => self.say("You're already standing!"),
        }
    }

    pub(crate) fn climb(&mut self) -> DispatchResult {
        if self.state.room != Room::InsideCardiffCastle {
            return self.say("Not with your head for heights, Avvy!");
        }
        if self.state.standing_on_dais {
            return self.say("You're already on the dais!");
        }
        if self.state.field != CASTLE_DAIS_FOOT {
            return self.say("You'll have to walk over to the dais first.");
        }
        self.state.standing_on_dais = true;
        self.state.field = CASTLE_DAIS_TOP;
        self.say("You climb up onto the dais.")?;
        if !self.state.taken_pen {
            self.scroll('Q', 49)?;
        }
        Ok(())
    }

    pub(crate) fn jump(&mut self) -> DispatchResult {
        self.arm_timer(1, Procedure::Jump, Reason::Jumping);
        Ok(())
    }

    pub(crate) fn listen(&mut self) -> DispatchResult {
        let text = self.world.listen(self.state.room);
        if text.is_empty() {
            self.say("You can't hear anything much at the moment, Avvy.")
        } else {
            self.say(text)
        }
    }

    pub(crate) fn pee(&mut self) -> DispatchResult {
        if self.world.get_flag(self.state.room, 'P') {
            self.arm_timer(4, Procedure::Urinate, Reason::GoToToilet);
            self.say("Hmm, I don't think anyone will notice...")
        } else {
            self.say("It would be VERY unwise to do that here, Avvy!")
        }
    }

    pub(crate) fn magic(&mut self) -> DispatchResult {
        if self.state.avaricius_talk > 0 {
            return self.scroll('Q', 19);
        }
        if self.state.room != Room::Spludwicks || self.state.is_here(People::Spludwick) {
            return self.say("Nothing appears to happen...");
        }
        self.state.avaricius_talk = AVARICIUS_FIRST_LINE;
        self.arm_timer(AVARICIUS_DELAY, Procedure::AvariciusTalks, Reason::AvariciusTalks);
        self.say("There's a flash of light, and Avaricius the demon appears!")
    }

    pub(crate) fn play(&mut self) -> DispatchResult {
        match self.thing {
            Some(Thing::Item(Item::Lute)) => {
                if !self.is_holding(self.thing)? {
                    return Ok(());
                }
                self.scroll('U', 7)?;
                if self.state.is_here(People::DuLustie) && !self.state.lustie_is_asleep {
                    self.scroll('U', 15)?;
                }
                Ok(())
            }
            Some(Thing::Also(HARP_SLOT)) if self.state.room == Room::MusicRoom => {
                self.say("You pluck the harp strings. It sounds lovely.")
            }
            Some(Thing::Also(NIM_SLOT)) if self.state.room == Room::ArgentPub => {
                if self.state.is_here(People::Dogfood) {
                    self.scroll('Q', 6)
                } else {
                    self.say("There's nobody to play with.")
                }
            }
            None => self.say("Play what?"),
            _ => self.say("You can't play that!"),
        }
    }

    pub(crate) fn ring(&mut self) -> DispatchResult {
        match self.thing {
            Some(Thing::Item(Item::Bell)) => {
                if !self.is_holding(self.thing)? {
                    return Ok(());
                }
                self.say("Ding, dong, ding, dong, ding, dong, ding, dong...")?;
                if self.state.room == Room::AylesOffice && !self.state.ayles_is_awake {
                    self.state.ayles_is_awake = true;
                    self.say("Ayles wakes up with a start!")?;
                    self.scroll('Q', 44)?;
                }
                Ok(())
            }
            None => self.say("Ring what?"),
            _ => self.say("You can't ring that!"),
        }
    }
}
