//! Room data: local words, fields Avvy can stand in, and the doors between them

use crate::text::resolver::AlsoTable;
use crate::world::entities::Room;
use indexmap::IndexMap;
use log::debug;

pub const YOURS_BED: u8 = 0;
pub const YOURS_BOX: u8 = 1;
pub const MUSIC_ROOM_HARP: u8 = 1;
pub const ARGENT_PUB_BAR: u8 = 1;
pub const SPLUDWICKS_CAULDRON: u8 = 1;
pub const BRUMMIE_ROAD_GATE: u8 = 1;
pub const BRIDGE_DRAWBRIDGE: u8 = 1;
pub const CASTLE_DAIS_FOOT: u8 = 0;
pub const CASTLE_DAIS_TOP: u8 = 1;
pub const DUCKS_STALL: u8 = 1;
pub const NOTTS_PUB_BENCH: u8 = 2;
pub const ROBINS_CLEARING: u8 = 0;

/// Also-slot of the box in Avvy's bedroom
pub const BOX_SLOT: u8 = 4;
/// Also-slot of the harp in the music room
pub const HARP_SLOT: u8 = 2;
/// Also-slot of the Nim board in the Argent pub
pub const NIM_SLOT: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PortalAction {
    /// Walk straight through to a field of another room
    Transport { room: Room, field: u8 },
    /// Open a door, then go through
    OpenDoor { room: Room, field: u8 },
    /// Bounce off with a scroll
    Exclaim(u16),
    Unfinished,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Portal {
    pub field: u8,
    pub action: PortalAction,
}

#[derive(Debug, Clone)]
pub struct AlsoWords {
    pub slot: usize,
    pub names: &'static [&'static str],
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct RoomInfo {
    pub name: &'static str,
    pub also: Vec<AlsoWords>,
    pub fields: Vec<&'static str>,
    pub portals: Vec<Portal>,
    /// One letter per room property, e.g. `P` where peeing goes unnoticed
    pub flags: &'static str,
    pub listen: &'static str,
}

fn also(slot: usize, names: &'static [&'static str], description: &'static str) -> AlsoWords {
    AlsoWords {
        slot,
        names,
        description,
    }
}

fn door(field: u8, room: Room, to_field: u8) -> Portal {
    Portal {
        field,
        action: PortalAction::OpenDoor {
            room,
            field: to_field,
        },
    }
}

fn path(field: u8, room: Room, to_field: u8) -> Portal {
    Portal {
        field,
        action: PortalAction::Transport {
            room,
            field: to_field,
        },
    }
}

#[derive(Debug, Clone)]
pub struct World {
    rooms: IndexMap<Room, RoomInfo>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        let mut rooms = IndexMap::new();

        rooms.insert(
            Room::Yours,
            RoomInfo {
                name: "Your bedroom",
                also: vec![
                    also(0, &["bedroom", "room"], "You're in your bedroom, in your castle in Argent. There's a big four-poster bed, a window and a wooden box."),
                    also(1, &["bed", "four", "poster"], "Your four-poster bed. It's very comfortable."),
                    also(2, &["window"], "Through the window you can see the rooftops of Argent."),
                    also(BOX_SLOT as usize, &["box", "chest"], "It's a large wooden box, where you keep things safe."),
                ],
                fields: vec!["the bed", "the box", "the door"],
                portals: vec![door(2, Room::YourHall, 0)],
                flags: "",
                listen: "",
            },
        );

        rooms.insert(
            Room::YourHall,
            RoomInfo {
                name: "The hall",
                also: vec![
                    also(0, &["hall"], "The great hall of your castle. Doors lead to your bedroom, the music room and outside."),
                    also(1, &["painting", "picture", "father"], "A portrait of your father. He looks disapproving."),
                ],
                fields: vec!["the bedroom door", "the front door", "the music room door"],
                portals: vec![
                    door(0, Room::Yours, 2),
                    door(1, Room::OutsideYours, 0),
                    door(2, Room::MusicRoom, 0),
                ],
                flags: "",
                listen: "",
            },
        );

        rooms.insert(
            Room::MusicRoom,
            RoomInfo {
                name: "The music room",
                also: vec![
                    also(0, &["music", "room"], "The music room. A harp stands in the corner."),
                    also(HARP_SLOT as usize, &["harp"], "A fine harp with gilded strings."),
                ],
                fields: vec!["the door", "the harp"],
                portals: vec![door(0, Room::YourHall, 2)],
                flags: "",
                listen: "Somebody is snoring.",
            },
        );

        rooms.insert(
            Room::OutsideYours,
            RoomInfo {
                name: "Outside your castle",
                also: vec![
                    also(0, &["castle", "outside"], "You're outside your castle. The road leads down into Argent."),
                    also(1, &["moat"], "The moat smells. Nobody has cleaned it for years."),
                ],
                fields: vec!["the front door", "the road"],
                portals: vec![door(0, Room::YourHall, 1), path(1, Room::ArgentRoad, 0)],
                flags: "P",
                listen: "",
            },
        );

        rooms.insert(
            Room::ArgentRoad,
            RoomInfo {
                name: "Argent",
                also: vec![
                    also(0, &["road", "street"], "The main street of Argent. From here you can get to the pub, Spludwick's house, the market, the forest and the abbey."),
                    also(1, &["fence"], "A rickety fence."),
                ],
                fields: vec![
                    "the castle road",
                    "the pub door",
                    "Spludwick's door",
                    "the road to Birmingham",
                    "the market road",
                    "the forest path",
                    "the abbey gate",
                    "the road to Norwich",
                ],
                portals: vec![
                    path(0, Room::OutsideYours, 1),
                    door(1, Room::ArgentPub, 0),
                    door(2, Room::Spludwicks, 0),
                    path(3, Room::BrummieRoad, 0),
                    path(4, Room::OutsideDucks, 0),
                    path(5, Room::Robins, 1),
                    door(6, Room::AylesOffice, 0),
                    Portal {
                        field: 7,
                        action: PortalAction::Unfinished,
                    },
                ],
                flags: "",
                listen: "",
            },
        );

        rooms.insert(
            Room::ArgentPub,
            RoomInfo {
                name: "The Argent pub",
                also: vec![
                    also(0, &["pub"], "The Argent pub. It's smoky and noisy."),
                    also(1, &["bitter", "beer"], "Bitter, brewed in the cellar."),
                    also(2, &["ginger", "pop", "fizz"], "A bottle of something fizzy. Nobody knows what it is."),
                    also(3, &["whisky", "whiskey", "scotch"], "Whisky, all the way from the north."),
                    also(4, &["cider"], "Rough cider."),
                    also(NIM_SLOT as usize, &["nim", "counters"], "A Nim board, with three rows of counters."),
                    also(6, &["bar"], "The bar is sticky."),
                    also(7, &["fire", "fireplace"], "A roaring fire."),
                    also(8, &["honey", "liquor"], "Sweet honey liquor, brewed by the landlord."),
                ],
                fields: vec!["the door", "the bar", "the Nim table"],
                portals: vec![door(0, Room::ArgentRoad, 1)],
                flags: "",
                listen: "You hear the clink of tankards and the murmur of the locals.",
            },
        );

        rooms.insert(
            Room::Spludwicks,
            RoomInfo {
                name: "Spludwick's house",
                also: vec![
                    also(0, &["house", "room", "laboratory"], "Spludwick's laboratory. Strange smells rise from a bubbling cauldron."),
                    also(1, &["cauldron", "pot"], "It's bubbling away merrily."),
                ],
                fields: vec!["the door", "the cauldron"],
                portals: vec![door(0, Room::ArgentRoad, 2)],
                flags: "",
                listen: "The cauldron bubbles.",
            },
        );

        rooms.insert(
            Room::BrummieRoad,
            RoomInfo {
                name: "The Birmingham road",
                also: vec![
                    also(0, &["road", "birmingham"], "The road to Birmingham. A gate blocks the way north."),
                    also(1, &["gate"], "A sturdy wooden gate."),
                ],
                fields: vec!["the road", "the gate"],
                portals: vec![
                    path(0, Room::ArgentRoad, 3),
                    path(BRUMMIE_ROAD_GATE, Room::Bridge, 0),
                ],
                flags: "",
                listen: "",
            },
        );

        rooms.insert(
            Room::Bridge,
            RoomInfo {
                name: "Cardiff Castle moat",
                also: vec![
                    also(0, &["moat", "water"], "You're by the moat of Cardiff Castle. The drawbridge is on the far side."),
                    also(1, &["drawbridge"], "A huge wooden drawbridge."),
                ],
                fields: vec!["the road", "the drawbridge"],
                portals: vec![
                    path(0, Room::BrummieRoad, 1),
                    path(BRIDGE_DRAWBRIDGE, Room::InsideCardiffCastle, 2),
                ],
                flags: "",
                listen: "Frogs are croaking in the moat.",
            },
        );

        rooms.insert(
            Room::InsideCardiffCastle,
            RoomInfo {
                name: "Cardiff Castle",
                also: vec![
                    also(0, &["hall", "castle"], "The great hall of Cardiff Castle. The Duke sits on a dais at the far end."),
                    also(1, &["dais", "platform"], "A raised wooden platform."),
                    also(2, &["throne"], "The Duke's throne."),
                ],
                fields: vec![
                    "the foot of the dais",
                    "the top of the dais",
                    "the drawbridge",
                    "a small door",
                ],
                portals: vec![path(2, Room::Bridge, 1), door(3, Room::Geidas, 0)],
                flags: "",
                listen: "",
            },
        );

        rooms.insert(
            Room::Geidas,
            RoomInfo {
                name: "Geida's chamber",
                also: vec![also(0, &["chamber", "room"], "A small chamber high in the castle.")],
                fields: vec!["the door"],
                portals: vec![door(0, Room::InsideCardiffCastle, 3)],
                flags: "",
                listen: "",
            },
        );

        rooms.insert(
            Room::OutsideDucks,
            RoomInfo {
                name: "The market",
                also: vec![
                    also(0, &["market", "street"], "The market. A trader is selling onions from a stall. Dr. Duck's house is across the way."),
                    also(1, &["stall"], "A stall piled high with onions."),
                ],
                fields: vec![
                    "the market road",
                    "the onion stall",
                    "Dr. Duck's door",
                    "the road to Nottingham",
                ],
                portals: vec![
                    path(0, Room::ArgentRoad, 4),
                    door(2, Room::Ducks, 0),
                    path(3, Room::NottsPub, 0),
                ],
                flags: "",
                listen: "The trader is shouting about his onions.",
            },
        );

        rooms.insert(
            Room::Ducks,
            RoomInfo {
                name: "Dr. Duck's surgery",
                also: vec![
                    also(0, &["surgery", "house", "room"], "Dr. Duck's surgery. Jars of leeches line the walls."),
                    also(1, &["cupboard", "jars", "leeches"], "A locked cupboard full of jars."),
                ],
                fields: vec!["the door", "the cupboard"],
                portals: vec![
                    door(0, Room::OutsideDucks, 2),
                    Portal {
                        field: 1,
                        action: PortalAction::Exclaim(1),
                    },
                ],
                flags: "",
                listen: "",
            },
        );

        rooms.insert(
            Room::NottsPub,
            RoomInfo {
                name: "The Nottingham pub",
                also: vec![
                    also(0, &["pub"], "The Nottingham pub. It's dark and unfriendly."),
                    also(1, &["bench", "seat"], "A rough wooden bench."),
                ],
                fields: vec!["the door", "the bar", "the bench"],
                portals: vec![path(0, Room::OutsideDucks, 3)],
                flags: "",
                listen: "Somebody in the corner is singing badly.",
            },
        );

        rooms.insert(
            Room::Robins,
            RoomInfo {
                name: "Sherwood Forest",
                also: vec![
                    also(0, &["forest", "clearing", "wood"], "A clearing in Sherwood Forest."),
                    also(1, &["tree", "oak"], "A big old oak tree."),
                ],
                fields: vec!["the clearing", "the forest path", "a cottage"],
                portals: vec![
                    path(1, Room::ArgentRoad, 5),
                    door(2, Room::WiseWomans, 0),
                ],
                flags: "P",
                listen: "Birds are singing.",
            },
        );

        rooms.insert(
            Room::WiseWomans,
            RoomInfo {
                name: "The Wise Woman's cottage",
                also: vec![also(0, &["cottage", "room"], "The Wise Woman's cottage. Herbs hang from every beam.")],
                fields: vec!["the door"],
                portals: vec![door(0, Room::Robins, 2)],
                flags: "",
                listen: "",
            },
        );

        rooms.insert(
            Room::AylesOffice,
            RoomInfo {
                name: "The abbot's office",
                also: vec![
                    also(0, &["study", "room"], "The abbot's office. Ayles sits at his desk."),
                    also(1, &["desk"], "A desk covered in papers."),
                ],
                fields: vec!["the door"],
                portals: vec![door(0, Room::ArgentRoad, 6)],
                flags: "",
                listen: "Somebody is snoring.",
            },
        );

        debug!("World built with {} rooms", rooms.len());
        World { rooms }
    }

    pub fn room(&self, room: Room) -> Option<&RoomInfo> {
        self.rooms.get(&room)
    }

    pub fn rooms(&self) -> impl Iterator<Item = (&Room, &RoomInfo)> {
        self.rooms.iter()
    }

    pub fn name(&self, room: Room) -> &'static str {
        self.room(room).map_or("Nowhere in particular", |info| info.name)
    }

    /// Local words for a room. Slot 0 always describes the room.
    pub fn also_table(&self, room: Room) -> AlsoTable {
        let mut table = AlsoTable::new();
        match self.room(room) {
            Some(info) => {
                for entry in info.also.iter() {
                    table.set(entry.slot, entry.names, entry.description);
                }
            }
            None => table.set(0, &[], "There's nothing much to see here."),
        }
        table
    }

    pub fn field_count(&self, room: Room) -> u8 {
        self.room(room).map_or(1, |info| info.fields.len().max(1) as u8)
    }

    pub fn field_name(&self, room: Room, field: u8) -> &'static str {
        self.room(room)
            .and_then(|info| info.fields.get(field as usize).copied())
            .unwrap_or("the middle of the room")
    }

    pub fn portal_at(&self, room: Room, field: u8) -> Option<Portal> {
        self.room(room)
            .and_then(|info| info.portals.iter().find(|p| p.field == field).copied())
    }

    pub fn get_flag(&self, room: Room, flag: char) -> bool {
        self.room(room).map_or(false, |info| info.flags.contains(flag))
    }

    pub fn listen(&self, room: Room) -> &'static str {
        self.room(room).map_or("", |info| info.listen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_room_describes_itself() {
        let world = World::new();
        for (room, _) in world.rooms() {
            let table = world.also_table(*room);
            assert!(table.description(0).is_some(), "{:?}", room);
        }
        assert!(world.also_table(Room::Oubliette).description(0).is_some());
    }

    #[test]
    fn test_portals_lead_to_known_rooms_and_fields() {
        let world = World::new();
        for (room, info) in world.rooms() {
            for portal in info.portals.iter() {
                assert!((portal.field as usize) < info.fields.len(), "{:?}", room);
                if let PortalAction::Transport { room: to, field }
                | PortalAction::OpenDoor { room: to, field } = portal.action
                {
                    let target = world.room(to).expect("portal target has data");
                    assert!((field as usize) < target.fields.len(), "{:?} -> {:?}", room, to);
                }
            }
        }
    }

    #[test]
    fn test_box_is_a_local_word_in_the_bedroom() {
        let world = World::new();
        let table = world.also_table(Room::Yours);
        assert_eq!(table.matching_slot("BOX"), Some(BOX_SLOT as usize));
        assert_eq!(world.also_table(Room::ArgentPub).matching_slot("BOX"), None);
    }

    #[test]
    fn test_vocabulary_words_only_match_their_own_room_words() {
        let world = World::new();
        let vocabulary = crate::text::vocabulary::Vocabulary::new().unwrap();
        for (room, _) in world.rooms() {
            let table = world.also_table(*room);
            for entry in vocabulary.entries() {
                if let Some(slot) = table.matching_slot(entry.word) {
                    let names = &table.get(slot).unwrap().names;
                    assert!(
                        names.contains(&format!(",{},", entry.word)),
                        "{} is swallowed by {} in {:?}",
                        entry.word,
                        names,
                        room
                    );
                }
            }
        }
    }

    #[test]
    fn test_flags() {
        let world = World::new();
        assert!(world.get_flag(Room::OutsideYours, 'P'));
        assert!(!world.get_flag(Room::ArgentPub, 'P'));
        assert!(!world.get_flag(Room::Map, 'P'));
    }
}
