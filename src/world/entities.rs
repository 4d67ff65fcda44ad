//! Identifiers for the rooms, carried objects and characters of the game
//!
//! Every identifier keeps the numeric value the data files use, so the
//! vocabulary table and save records can round-trip through `u8`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of carriable objects
pub const OBJECT_COUNT: usize = 18;

/// Offset between an object-noun word code and its object id ("slip")
pub const SLIP_OFFSET: u8 = 49;

/// People codes at or above this value are female
pub const FEMALE_THRESHOLD: u8 = 175;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Room {
    Nowhere,
    Yours,
    OutsideYours,
    OutsideSpludwicks,
    YourHall,
    MusicRoom,
    OutsideArgentPub,
    ArgentRoad,
    WiseWomans,
    Spludwicks,
    InsideAbbey,
    OutsideAbbey,
    AvvysGarden,
    AylesOffice,
    ArgentPub,
    BrummieRoad,
    Bridge,
    Lusties,
    LustiesRoom,
    WestHall,
    EastHall,
    Oubliette,
    Geidas,
    Catacombs,
    EntranceHall,
    Robins,
    OutsideNottsPub,
    NottsPub,
    OutsideDucks,
    Ducks,
    OutsideCardiffCastle,
    InsideCardiffCastle,
    Bosses,
    Map,
    Dummy,
}

impl Room {
    pub fn id(self) -> u8 {
        match self {
            Room::Nowhere => 0,
            Room::Yours => 1,
            Room::OutsideYours => 2,
            Room::OutsideSpludwicks => 3,
            Room::YourHall => 5,
            Room::MusicRoom => 7,
            Room::OutsideArgentPub => 9,
            Room::ArgentRoad => 10,
            Room::WiseWomans => 11,
            Room::Spludwicks => 12,
            Room::InsideAbbey => 13,
            Room::OutsideAbbey => 14,
            Room::AvvysGarden => 15,
            Room::AylesOffice => 16,
            Room::ArgentPub => 19,
            Room::BrummieRoad => 20,
            Room::Bridge => 21,
            Room::Lusties => 22,
            Room::LustiesRoom => 23,
            Room::WestHall => 25,
            Room::EastHall => 26,
            Room::Oubliette => 27,
            Room::Geidas => 28,
            Room::Catacombs => 29,
            Room::EntranceHall => 40,
            Room::Robins => 42,
            Room::OutsideNottsPub => 46,
            Room::NottsPub => 47,
            Room::OutsideDucks => 50,
            Room::Ducks => 51,
            Room::OutsideCardiffCastle => 70,
            Room::InsideCardiffCastle => 71,
            Room::Bosses => 99,
            Room::Map => 100,
            Room::Dummy => 177,
        }
    }

    /// Returns true for the two taverns where the drinking hints apply
    pub fn is_pub(self) -> bool {
        matches!(self, Room::ArgentPub | Room::NottsPub)
    }
}

/// Objects Avvy can carry. The discriminant is the object id (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    Wine = 1,
    Money,
    Bodkin,
    Potion,
    Chastity,
    Bolt,
    Crossbow,
    Lute,
    Badge,
    Mushroom,
    Key,
    Bell,
    Prescription,
    Pen,
    Ink,
    Clothes,
    Habit,
    Onion,
}

impl Item {
    pub const ALL: [Item; OBJECT_COUNT] = [
        Item::Wine,
        Item::Money,
        Item::Bodkin,
        Item::Potion,
        Item::Chastity,
        Item::Bolt,
        Item::Crossbow,
        Item::Lute,
        Item::Badge,
        Item::Mushroom,
        Item::Key,
        Item::Bell,
        Item::Prescription,
        Item::Pen,
        Item::Ink,
        Item::Clothes,
        Item::Habit,
        Item::Onion,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Item> {
        if id == 0 {
            return None;
        }
        Item::ALL.get(id as usize - 1).copied()
    }

    /// Maps an unslipped object-noun code (50..) to its object
    pub fn from_word_code(code: u8) -> Option<Item> {
        code.checked_sub(SLIP_OFFSET).and_then(Item::from_id)
    }

    /// Index into the inventory array
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// Name with article, as used in running text
    pub fn description(self) -> &'static str {
        match self {
            Item::Wine => "some wine",
            Item::Money => "your money-bag",
            Item::Bodkin => "your bodkin",
            Item::Potion => "a potion",
            Item::Chastity => "a chastity belt",
            Item::Bolt => "a crossbow bolt",
            Item::Crossbow => "a crossbow",
            Item::Lute => "a lute",
            Item::Badge => "a pilgrim's badge",
            Item::Mushroom => "a mushroom",
            Item::Key => "a key",
            Item::Bell => "a bell",
            Item::Prescription => "a scroll",
            Item::Pen => "a pen",
            Item::Ink => "some ink",
            Item::Clothes => "your clothes",
            Item::Habit => "a habit",
            Item::Onion => "an onion",
        }
    }
}

/// Characters of the game. The discriminant is the people word code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum People {
    Avalot = 150,
    Spludwick,
    Crapulus,
    DrDuck,
    Malagauche,
    FriarTuck,
    RobinHood,
    Cwytalot,
    DuLustie,
    Duke,
    Dogfood,
    Trader,
    Ibythneth,
    Ayles,
    Port,
    Spurge,
    Jacques,
    Arkata = 175,
    Geida,
    Invisible,
    WiseWoman,
}

impl People {
    pub const ALL: [People; 21] = [
        People::Avalot,
        People::Spludwick,
        People::Crapulus,
        People::DrDuck,
        People::Malagauche,
        People::FriarTuck,
        People::RobinHood,
        People::Cwytalot,
        People::DuLustie,
        People::Duke,
        People::Dogfood,
        People::Trader,
        People::Ibythneth,
        People::Ayles,
        People::Port,
        People::Spurge,
        People::Jacques,
        People::Arkata,
        People::Geida,
        People::Invisible,
        People::WiseWoman,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<People> {
        People::ALL.iter().copied().find(|p| p.code() == code)
    }

    pub fn is_female(self) -> bool {
        self.code() >= FEMALE_THRESHOLD
    }

    pub fn name(self) -> &'static str {
        match self {
            People::Avalot => "Avalot",
            People::Spludwick => "Spludwick",
            People::Crapulus => "Crapulus",
            People::DrDuck => "Dr. Duck",
            People::Malagauche => "Malagauche",
            People::FriarTuck => "Friar Tuck",
            People::RobinHood => "Robin Hood",
            People::Cwytalot => "Cwytalot",
            People::DuLustie => "du Lustie",
            People::Duke => "the Duke of Cardiff",
            People::Dogfood => "Dogfood",
            People::Trader => "A trader",
            People::Ibythneth => "Ibythneth",
            People::Ayles => "Ayles",
            People::Port => "Port",
            People::Spurge => "Spurge",
            People::Jacques => "Jacques",
            People::Arkata => "Arkata",
            People::Geida => "Geida",
            People::Invisible => "someone invisible",
            People::WiseWoman => "the Wise Woman",
        }
    }

    /// Position of the character inside its own sex's list, starting at 1
    pub fn ordinal(self) -> u16 {
        if self.is_female() {
            (self.code() - FEMALE_THRESHOLD + 1) as u16
        } else {
            (self.code() - People::Avalot.code() + 1) as u16
        }
    }
}

impl fmt::Display for People {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_ids_are_dense() {
        for (i, item) in Item::ALL.iter().enumerate() {
            assert_eq!(item.index(), i);
            assert_eq!(Item::from_id(item.id()), Some(*item));
        }
        assert_eq!(Item::from_id(0), None);
        assert_eq!(Item::from_id(19), None);
    }

    #[test]
    fn test_slip_maps_word_codes_to_items() {
        assert_eq!(Item::from_word_code(50), Some(Item::Wine));
        assert_eq!(Item::from_word_code(52), Some(Item::Bodkin));
        assert_eq!(Item::from_word_code(67), Some(Item::Onion));
        assert_eq!(Item::from_word_code(99), None);
        assert_eq!(Item::from_word_code(10), None);
    }

    #[test]
    fn test_people_sex_split() {
        assert!(!People::Jacques.is_female());
        assert!(People::Arkata.is_female());
        assert!(People::WiseWoman.is_female());
        assert_eq!(People::from_code(152), Some(People::Crapulus));
        assert_eq!(People::from_code(170), None);
        assert_eq!(People::Geida.ordinal(), 2);
        assert_eq!(People::Spludwick.ordinal(), 2);
    }
}
