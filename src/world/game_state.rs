//! The authoritative game-state store read and changed by verb handlers

use crate::text::reference::DiscourseContext;
use crate::world::entities::{Item, People, Room, OBJECT_COUNT};
use serde::{Deserialize, Serialize};

/// Score a finished game can reach
pub const MAX_SCORE: u16 = 128;

/// Pence Avvy starts with
pub const STARTING_MONEY: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WineState {
    Normal,
    Bad,
    Vinegar,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonLocation {
    pub person: People,
    pub room: Room,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub room: Room,
    /// Index of the room field Avvy is standing in
    pub field: u8,

    pub objects: [bool; OBJECT_COUNT],
    pub wearing: Option<Item>,
    pub money: i32,
    pub score: u16,
    pub moves: u32,

    pub alive: bool,
    pub avvy_is_awake: bool,
    pub avvy_in_bed: bool,
    pub tied_up: bool,
    pub teetotal: bool,
    pub cheat: bool,
    pub let_me_out: bool,
    pub alcohol_level: u8,
    pub swore_num: u8,

    pub wine_state: WineState,
    pub rotten_onion: bool,
    pub onion_in_vinegar: bool,
    pub bought_onion: bool,
    pub box_content: Option<Item>,

    pub given_to_spludwick: u8,
    pub talked_to_crapulus: bool,
    pub given_badge_to_iby: bool,
    pub given_pen_to_ayles: bool,
    pub given_potion_to_geida: bool,
    pub geida_follows: bool,
    pub lustie_is_asleep: bool,
    pub ayles_is_awake: bool,
    pub taken_pen: bool,
    pub mushroom_growing: bool,
    pub cwytalot_gone: bool,

    pub sitting_in_pub: bool,
    pub standing_on_dais: bool,
    pub drinks_on_order: bool,
    /// Also-slot of the drink on order
    pub drinking: u8,
    pub avaricius_talk: u8,
    pub drawbridge_open: bool,
    /// Index into the password list
    pub password_index: usize,

    /// Survey question currently awaiting an answer, 0 when none
    pub interrogation: u8,
    pub cardiff_question: u8,
    pub favourite_drink: String,
    pub favourite_song: String,
    pub worst_place_on_earth: String,
    pub spare_evening: String,

    pub people: Vec<PersonLocation>,
    pub discourse: DiscourseContext,
}

const STARTING_PEOPLE: [(People, Room); 19] = [
    (People::Spludwick, Room::Spludwicks),
    (People::Crapulus, Room::OutsideYours),
    (People::DrDuck, Room::Ducks),
    (People::Malagauche, Room::ArgentPub),
    (People::FriarTuck, Room::Robins),
    (People::RobinHood, Room::Dummy),
    (People::Cwytalot, Room::BrummieRoad),
    (People::DuLustie, Room::LustiesRoom),
    (People::Duke, Room::InsideCardiffCastle),
    (People::Dogfood, Room::ArgentPub),
    (People::Trader, Room::OutsideDucks),
    (People::Ibythneth, Room::ArgentPub),
    (People::Ayles, Room::AylesOffice),
    (People::Port, Room::NottsPub),
    (People::Spurge, Room::NottsPub),
    (People::Jacques, Room::MusicRoom),
    (People::Arkata, Room::Yours),
    (People::Geida, Room::Geidas),
    (People::WiseWoman, Room::WiseWomans),
];

impl GameState {
    /// Avvy asleep in bed, carrying money, bodkin, bell and clothes
    pub fn new_game(password_index: usize) -> Self {
        let mut objects = [false; OBJECT_COUNT];
        for item in [Item::Money, Item::Bodkin, Item::Bell, Item::Clothes] {
            objects[item.index()] = true;
        }

        GameState {
            room: Room::Yours,
            field: 0,
            objects,
            wearing: Some(Item::Clothes),
            money: STARTING_MONEY,
            score: 0,
            moves: 0,
            alive: true,
            avvy_is_awake: false,
            avvy_in_bed: true,
            tied_up: false,
            teetotal: false,
            cheat: false,
            let_me_out: false,
            alcohol_level: 0,
            swore_num: 0,
            wine_state: WineState::Normal,
            rotten_onion: false,
            onion_in_vinegar: false,
            bought_onion: false,
            box_content: None,
            given_to_spludwick: 0,
            talked_to_crapulus: false,
            given_badge_to_iby: false,
            given_pen_to_ayles: false,
            given_potion_to_geida: false,
            geida_follows: false,
            lustie_is_asleep: false,
            ayles_is_awake: false,
            taken_pen: false,
            mushroom_growing: true,
            cwytalot_gone: false,
            sitting_in_pub: false,
            standing_on_dais: false,
            drinks_on_order: false,
            drinking: 0,
            avaricius_talk: 0,
            drawbridge_open: false,
            password_index,
            interrogation: 0,
            cardiff_question: 0,
            favourite_drink: String::new(),
            favourite_song: String::new(),
            worst_place_on_earth: String::new(),
            spare_evening: String::new(),
            people: STARTING_PEOPLE
                .iter()
                .map(|&(person, room)| PersonLocation { person, room })
                .collect(),
            discourse: DiscourseContext::new(),
        }
    }

    pub fn holds(&self, item: Item) -> bool {
        self.objects[item.index()]
    }

    pub fn give_item(&mut self, item: Item) {
        self.objects[item.index()] = true;
    }

    pub fn take_item(&mut self, item: Item) {
        self.objects[item.index()] = false;
        if self.wearing == Some(item) {
            self.wearing = None;
        }
    }

    /// Number of objects Avvy is carrying
    pub fn carry_num(&self) -> usize {
        self.objects.iter().filter(|held| **held).count()
    }

    pub fn carried(&self) -> impl Iterator<Item = Item> + '_ {
        Item::ALL.iter().copied().filter(move |item| self.holds(*item))
    }

    pub fn room_of(&self, person: People) -> Room {
        if person == People::Avalot {
            return self.room;
        }
        self.people
            .iter()
            .find(|p| p.person == person)
            .map_or(Room::Nowhere, |p| p.room)
    }

    pub fn set_room_of(&mut self, person: People, room: Room) {
        match self.people.iter_mut().find(|p| p.person == person) {
            Some(location) => location.room = room,
            None => self.people.push(PersonLocation { person, room }),
        }
    }

    pub fn is_here(&self, person: People) -> bool {
        self.room_of(person) == self.room
    }

    /// People other than Avvy in the current room, in code order
    pub fn people_here(&self) -> Vec<People> {
        People::ALL
            .iter()
            .copied()
            .filter(|p| *p != People::Avalot && self.room_of(*p) == self.room)
            .collect()
    }

    pub fn inc_score(&mut self, points: u16) {
        self.score = self.score.saturating_add(points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let state = GameState::new_game(3);
        assert_eq!(state.room, Room::Yours);
        assert!(!state.avvy_is_awake);
        assert!(state.avvy_in_bed);
        assert_eq!(state.carry_num(), 4);
        assert!(state.holds(Item::Bell));
        assert!(!state.holds(Item::Wine));
        assert_eq!(state.wearing, Some(Item::Clothes));
        assert_eq!(state.password_index, 3);
    }

    #[test]
    fn test_people_locations() {
        let mut state = GameState::new_game(0);
        assert_eq!(state.room_of(People::Crapulus), Room::OutsideYours);
        assert_eq!(state.people_here(), vec![People::Arkata]);
        assert!(state.is_here(People::Avalot));

        state.set_room_of(People::Cwytalot, Room::Dummy);
        assert_eq!(state.room_of(People::Cwytalot), Room::Dummy);
        assert_eq!(state.room_of(People::Invisible), Room::Nowhere);
    }

    #[test]
    fn test_taking_a_worn_item_undresses() {
        let mut state = GameState::new_game(0);
        state.take_item(Item::Clothes);
        assert_eq!(state.wearing, None);
        assert_eq!(state.carry_num(), 3);
    }
}
