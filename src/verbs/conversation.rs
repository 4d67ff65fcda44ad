//! Handlers that involve the other characters

use crate::scheduler::{Procedure, Reason};
use crate::text::scrolls;
use crate::text::tokenizer::proper_nouns;
use crate::text::vocabulary::{WordCode, PASSWORDS, PASSWORD_NOUN};
use crate::verbs::dispatcher::{DispatchResult, Dispatcher, SURVEY_REPEAT_DELAY};
use crate::world::{Item, People, Room};
use log::{debug, info};

/// Ticks between the drawbridge password and the bridge coming down
pub const DRAWBRIDGE_DELAY: u32 = 7;

impl<'a> Dispatcher<'a> {
    pub(crate) fn talk(&mut self) -> DispatchResult {
        let mut topic = 0;
        match self.subject.take() {
            Some(WordCode::Object(PASSWORD_NOUN)) => {
                return self.say("Yes, but what is the password?");
            }
            Some(code) => match code.as_verb() {
                Some(verb) => {
                    debug!("SAY {:?} becomes the verb itself", verb);
                    self.verb = Some(verb);
                    return self.dispatch();
                }
                None => match code {
                    WordCode::Person(p) if self.person.is_none() => self.person = Some(p),
                    other => topic = other.code(),
                },
            },
            None => {}
        }

        let person = match self.person {
            Some(person) => person,
            None => match self.state.people_here().first() {
                Some(person) => *person,
                None => return self.say("Talk to whom?"),
            },
        };
        self.person = Some(person);
        if !self.is_person_here()? {
            return Ok(());
        }
        self.talk_to(person, topic)
    }

    fn talk_to(&mut self, person: People, topic: u8) -> DispatchResult {
        info!("Talking to {:?} about {}", person, topic);
        match person {
            People::Avalot => {
                return self.say("This is probably the first sign of madness, Avvy.")
            }
            People::Ayles if !self.state.ayles_is_awake => return self.scroll('Q', 43),
            People::Ayles if !self.state.given_pen_to_ayles => return self.scroll('Q', 44),
            People::Jacques => return self.scroll('Q', 43),
            People::Crapulus if topic == 0 && self.state.talked_to_crapulus => {
                return self.say("\"I told you, Avvy. Wine! I need wine!\"")
            }
            People::Crapulus => self.state.talked_to_crapulus = true,
            People::DuLustie if self.state.lustie_is_asleep => {
                return self.say("Du Lustie is snoring in his chair. He doesn't hear a word.")
            }
            People::Ibythneth if self.state.given_badge_to_iby => {
                return self.say("\"Thank you again for my badge, Avvy. Canterbury, here I come!\"")
            }
            People::Spludwick if self.state.given_to_spludwick >= 3 => {
                return self.scroll('Q', 30)
            }
            People::Port | People::Spurge if !self.state.sitting_in_pub => {
                return self.scroll('Q', 71)
            }
            People::Spurge if topic == 0 => {
                let password = PASSWORDS[self.state.password_index % PASSWORDS.len()];
                return self.say(&format!(
                    "\"Going to Cardiff? The drawbridge password is {}. Don't tell anyone I told you.\"",
                    password
                ));
            }
            _ => {}
        }

        match scrolls::speech(person, topic) {
            Some(text) => self.say(&format!("\"{}\"", text)),
            None => self.say("Sorry, I don't know anything about that."),
        }
    }

    pub(crate) fn hello(&mut self) -> DispatchResult {
        match self.person {
            Some(person) if person != People::Avalot => {
                if !self.is_person_here()? {
                    return Ok(());
                }
                self.say(&format!("\"Hello, Avvy!\" says {}.", person.name()))
            }
            _ => self.say("Hello, stranger!"),
        }
    }

    pub(crate) fn kiss(&mut self) -> DispatchResult {
        let person = match self.person {
            Some(person) => person,
            None => return self.say("Kiss whom?"),
        };
        if !self.is_person_here()? {
            return Ok(());
        }
        match person {
            People::Arkata => self.scroll('U', 12),
            People::Geida => self.scroll('U', 13),
            People::WiseWoman => self.scroll('U', 14),
            _ => self.say("Hey, what kind of a weirdo are you??"),
        }
    }

    pub(crate) fn wake(&mut self) -> DispatchResult {
        match self.person {
            None | Some(People::Avalot) => {
                if self.state.avvy_is_awake {
                    return self.say("You're already awake, Avvy!");
                }
                self.state.avvy_is_awake = true;
                self.scheduler.cancel_timer(Reason::ArkataShouts);
                if self.state.alcohol_level >= 5 {
                    self.scroll('D', 13)?;
                    self.scroll('D', 14)
                } else {
                    self.say("You wake up. It's a lovely day!")
                }
            }
            Some(person) => {
                if !self.is_person_here()? {
                    return Ok(());
                }
                match person {
                    People::Ayles if self.state.ayles_is_awake => {
                        self.say("He's awake already.")
                    }
                    People::Ayles => self.say("You can't seem to wake him by yourself."),
                    People::Jacques => {
                        self.say("Brother Jacques, Brother Jacques, are you asleep?")
                    }
                    People::DuLustie if self.state.lustie_is_asleep => {
                        self.say("Geida's song has sent him into a deep sleep. He won't wake for hours.")
                    }
                    _ => self.say("It's difficult to awaken people who aren't asleep...!"),
                }
            }
        }
    }

    pub(crate) fn expletive(&mut self) -> DispatchResult {
        let count = self.state.swore_num;
        self.state.swore_num = count.saturating_add(1);
        match count {
            0 => self.say("Avvy! Watch your language!"),
            1 => self.say("Hey, I'm warning you, Avvy! Once more and you're in trouble!"),
            _ => {
                self.say("You were warned, Avvy! A bolt of lightning strikes you down.")?;
                self.game_over()
            }
        }
    }

    pub(crate) fn password(&mut self) -> DispatchResult {
        if self.state.room != Room::Bridge {
            return self.scroll('Q', 12);
        }
        if self.state.drawbridge_open {
            return self.say("The drawbridge is already down!");
        }
        let password = PASSWORDS[self.state.password_index % PASSWORDS.len()];
        let spoken = self
            .raw_words
            .iter()
            .any(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).eq_ignore_ascii_case(password));
        if !spoken {
            self.say("A voice from the castle calls: \"Wrong! Go away!\"")?;
            if self.state.cheat {
                debug!("Cheat mode reveals the password");
                return self.say(&format!("(Psst! The password is {}.)", password));
            }
            return Ok(());
        }
        self.state.inc_score(4);
        self.arm_timer(DRAWBRIDGE_DELAY, Procedure::OpenDrawbridge, Reason::DrawbridgeFalls);
        self.say("A voice from the castle calls: \"That's right! Wait there.\"")
    }

    pub(crate) fn attack(&mut self) -> DispatchResult {
        if self.person != Some(People::Cwytalot) {
            return self.scroll('Q', 10);
        }
        if self.state.cwytalot_gone {
            return self.say("Cwytalot has fled. There's nobody left to shoot at.");
        }
        if !self.is_person_here()? {
            return Ok(());
        }
        match (
            self.state.holds(Item::Bolt),
            self.state.holds(Item::Crossbow),
        ) {
            (true, true) => {
                self.state.take_item(Item::Bolt);
                self.state.cwytalot_gone = true;
                self.state.set_room_of(People::Cwytalot, Room::Dummy);
                self.state.inc_score(7);
                self.scroll('Q', 11)
            }
            (false, true) => self.say("Your crossbow needs a bolt!"),
            (true, false) => self.say("You have nothing to fire the bolt with!"),
            (false, false) => self.scroll('Q', 10),
        }
    }

    /// Stores the answer to the castle guard's current survey question
    pub fn store_interrogation(&mut self, answer: &str) -> DispatchResult {
        let answer = answer.trim();
        match self.state.interrogation {
            1 => self.state.favourite_drink = answer.to_lowercase(),
            2 => self.state.favourite_song = proper_nouns(answer),
            3 => self.state.worst_place_on_earth = proper_nouns(answer),
            4 => self.state.spare_evening = answer.to_lowercase(),
            _ => return Ok(()),
        }
        info!("Survey answer {}: {}", self.state.interrogation, answer);

        self.scheduler.cancel_timer(Reason::CardiffSurvey);
        self.state.cardiff_question = self.state.interrogation;
        if self.state.interrogation < 4 {
            self.state.interrogation += 1;
            self.scroll('Z', self.state.interrogation as u16)?;
            self.arm_timer(
                SURVEY_REPEAT_DELAY,
                Procedure::CardiffSurvey,
                Reason::CardiffSurvey,
            );
            Ok(())
        } else {
            self.state.interrogation = 0;
            self.scroll('Z', 5)
        }
    }
}
