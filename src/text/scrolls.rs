//! Canned game text, addressed by scroll category and number
//!
//! Categories: `T` things, `P` people, `Q` general responses, `U` using
//! things, `D` drinking and buying, `N` Nottingham, `Z` the castle survey,
//! `X` doorway exclamations.

use crate::world::People;
use std::collections::HashMap;

lazy_static! {
    static ref SCROLLS: HashMap<(char, u16), &'static str> = {
        let mut m = HashMap::new();

        // Things
        m.insert(('T', 1), "It's a bottle of the finest Argent wine. At least, it was when you bought it.");
        m.insert(('T', 2), "Your money-bag. It's lighter than you'd like.");
        m.insert(('T', 3), "Your trusty bodkin. It's not much of a weapon, but it's sharp.");
        m.insert(('T', 4), "A small bottle of bubbling green potion. It smells of onions.");
        m.insert(('T', 5), "A chastity belt. The key is nowhere to be seen.");
        m.insert(('T', 6), "A crossbow bolt, with a wicked barbed tip.");
        m.insert(('T', 7), "A crossbow. It's quite heavy.");
        m.insert(('T', 8), "A beautiful lute, with a picture of a heart painted on the back.");
        m.insert(('T', 9), "A pilgrim's badge, with a scallop shell on it.");
        m.insert(('T', 10), "A mushroom. It doesn't look very appetising.");
        m.insert(('T', 11), "A large iron key.");
        m.insert(('T', 12), "A small brass bell with a wooden handle.");
        m.insert(('T', 13), "A scroll with a prescription written on it, in terrible handwriting.");
        m.insert(('T', 14), "A quill pen. It needs ink.");
        m.insert(('T', 15), "A small pot of black ink.");
        m.insert(('T', 16), "Your clothes. They're a bit crumpled.");
        m.insert(('T', 17), "A monk's habit, made of rough brown cloth.");
        m.insert(('T', 18), "A good, firm onion.");

        // People
        m.insert(('P', 1), "That's you, Avvy. Lord Avalot d'Argent, no less.");
        m.insert(('P', 2), "Spludwick is an alchemist. He has singed eyebrows.");
        m.insert(('P', 3), "Crapulus is your serf. He's also a drunkard.");
        m.insert(('P', 4), "Dr. Duck is a tall man with a long nose and a longer beard.");
        m.insert(('P', 5), "Malagauche runs the Argent pub. He's polishing a tankard.");
        m.insert(('P', 6), "Friar Tuck is round and jolly.");
        m.insert(('P', 7), "Robin Hood, in Lincoln green.");
        m.insert(('P', 8), "Cwytalot is a big, tough guard with a big, tough halberd.");
        m.insert(('P', 9), "Baron du Lustie is very, very fat.");
        m.insert(('P', 10), "The Duke of Cardiff is sitting on his throne.");
        m.insert(('P', 11), "Dogfood is a minstrel who plays Nim in his spare time.");
        m.insert(('P', 12), "The trader is selling onions from his stall.");
        m.insert(('P', 13), "Ibythneth is a pilgrim on his way to Canterbury.");
        m.insert(('P', 14), "Ayles is the abbot. He looks as if he could do with a good night's sleep.");
        m.insert(('P', 15), "Port is the barman of the Nottingham pub.");
        m.insert(('P', 16), "Spurge looks as if he's been in the pub all day.");
        m.insert(('P', 17), "Brother Jacques is fast asleep in his chair.");
        m.insert(('P', 26), "Arkata is your wife. She's very beautiful.");
        m.insert(('P', 27), "Geida is a princess. Her hair shines like gold.");
        m.insert(('P', 28), "You can't see anybody there!");
        m.insert(('P', 29), "The Wise Woman is very old and very wise.");

        // General responses
        m.insert(('Q', 2), "You are now denariusless!");
        m.insert(('Q', 6), "\"I'm not playing!\"");
        m.insert(('Q', 8), "Dogfood glowers at you. He's still sore about losing at Nim.");
        m.insert(('Q', 10), "Please try not to be so violent!");
        m.insert(('Q', 11), "You fire the bolt at Cwytalot. It whistles past his ear, and he runs away screaming.");
        m.insert(('Q', 12), "Nothing happens. Was that a password?");
        m.insert(('Q', 13), "He's fast asleep.");
        m.insert(('Q', 14), "Avaricius says: \"Spludwick? He's out. Who wants him?\"");
        m.insert(('Q', 15), "Avaricius says: \"Leave him a message and go away.\"");
        m.insert(('Q', 16), "With a puff of smoke, Avaricius disappears.");
        m.insert(('Q', 17), "A puff of purple smoke rises from the cauldron.");
        m.insert(('Q', 18), "But the smoke just hangs there. Spludwick frowns at you.");
        m.insert(('Q', 19), "Avaricius is already here!");
        m.insert(('Q', 20), "\"Ah, an onion! Thank you.\" Spludwick tosses it into the cauldron.");
        m.insert(('Q', 21), "The onion has gone rotten. It's not fit to eat.");
        m.insert(('Q', 22), "\"That onion's rotten! I can't use that!\"");
        m.insert(('Q', 23), "Avaricius is pacing up and down.");
        m.insert(('Q', 24), "\"Ink! Wonderful!\" Spludwick pours it into the cauldron.");
        m.insert(('Q', 25), "\"The mushroom! At last!\" Spludwick finishes the potion and hands it to you.");
        m.insert(('Q', 27), "The guard says: \"Before you go in, would you mind filling in a short survey?\"");
        m.insert(('Q', 30), "\"Do you need any help with anything else, Avvy?\"");
        m.insert(('Q', 32), "\"Thank you very much! Here, have my habit. I won't be needing it.\"");
        m.insert(('Q', 33), "\"Thanks a lot for the badge!\"");
        m.insert(('Q', 38), "You're tied to a tree.");
        m.insert(('Q', 42), "\"You'd better go and talk to Crapulus first.\"");
        m.insert(('Q', 43), "He's fast asleep!");
        m.insert(('Q', 44), "\"Can you get me a pen, Avvy? Mine's broken.\"");
        m.insert(('Q', 49), "There's a pen on the Duke's desk, on the dais.");
        m.insert(('Q', 51), "It's too far away. You'd have to climb onto the dais.");
        m.insert(('Q', 52), "You can't take that; it belongs to the Duke.");
        m.insert(('Q', 53), "You can't reach it from there.");
        m.insert(('Q', 54), "\"A pen! Thank you, Avvy. Here, take this ink.\"");
        m.insert(('Q', 55), "There's a mushroom growing at the foot of a tree.");
        m.insert(('Q', 57), "You can't pick that up, Avvy!");
        m.insert(('Q', 65), "He's asleep.");
        m.insert(('Q', 68), "\"Ah, Avvy! Here's the potion you wanted.\"");
        m.insert(('Q', 71), "\"Sit down first, young man. I can't talk to folk standing up.\"");
        m.insert(('Q', 76), "Arkata shouts: \"Avvy! Get up, you lazy so-and-so!\"");
        m.insert(('Q', 77), "\"Don't you dare give that to me before you've given it to that Geida woman!\"");
        m.insert(('Q', 79), "Arkata drinks the potion, and she's your loving wife again. Everyone lives happily ever after.");
        m.insert(('Q', 85), "You can't open that.");
        m.insert(('Q', 86), "Geida plays a lullaby on the lute. Somewhere, the Baron starts snoring.");

        // Using things
        m.insert(('U', 1), "You drink the wine.");
        m.insert(('U', 2), "Hic! That was good stuff.");
        m.insert(('U', 3), "You drink the potion. The world turns red, and then black.");
        m.insert(('U', 4), "You drink the ink. It tastes awful, and it turns your tongue black.");
        m.insert(('U', 5), "You WHAT?");
        m.insert(('U', 6), "You eat the mushroom. Your stomach twists, and you die in agony.");
        m.insert(('U', 7), "You play a few bars on the lute.");
        m.insert(('U', 8), "You eat the onion. Your eyes water.");
        m.insert(('U', 9), "You drop the onion into the vinegar. Perfect pickled onion!");
        m.insert(('U', 10), "Cwytalot yawns.");
        m.insert(('U', 11), "It's rotten. You'd be sick.");
        m.insert(('U', 12), "Arkata kisses you back, then remembers she's cross with you.");
        m.insert(('U', 13), "Geida blushes.");
        m.insert(('U', 14), "The Wise Woman cackles. \"Not at my age, dearie!\"");
        m.insert(('U', 15), "The Baron hums along.");
        m.insert(('U', 16), "Geida drinks the potion, and her eyes clear.");
        m.insert(('U', 17), "\"Not until you've given me the potion!\"");

        // Drinking and buying
        m.insert(('D', 0), "You can't buy that here.");
        m.insert(('D', 1), "\"That'll be thruppence.\"");
        m.insert(('D', 2), "You've already got the wine. One bottle is shared between all the guests.");
        m.insert(('D', 3), "You pay up and drink.");
        m.insert(('D', 4), "You pay up and take the wine.");
        m.insert(('D', 5), "Go to the bar first, Avvy.");
        m.insert(('D', 6), "You've given up drinking. Remember?");
        m.insert(('D', 7), "The wine has turned to vinegar.");
        m.insert(('D', 8), "You can't drink that!");
        m.insert(('D', 9), "You buy an onion from the trader.");
        m.insert(('D', 10), "You're not planning to juggle with the things!");
        m.insert(('D', 11), "You buy another onion. The trader looks at you oddly.");
        m.insert(('D', 12), "You stand up. Your head is pounding.");
        m.insert(('D', 13), "You wake up with a terrible headache.");
        m.insert(('D', 14), "You swear never to touch another drop.");
        m.insert(('D', 15), "Malagauche is already getting you one!");
        m.insert(('D', 50), "Malagauche brings you a bottle of wine.");
        m.insert(('D', 51), "Malagauche brings you a pint of bitter.");
        m.insert(('D', 53), "Malagauche brings you a glass of whisky.");
        m.insert(('D', 54), "Malagauche brings you a mug of cider.");
        m.insert(('D', 58), "Malagauche brings you a cup of his honey liquor.");

        m.insert(('N', 15), "\"We don't serve southerners here.\"");

        // The castle survey
        m.insert(('Z', 1), "Question one: what is your favourite drink?");
        m.insert(('Z', 2), "Question two: what is your favourite song?");
        m.insert(('Z', 3), "Question three: what is the worst place on earth?");
        m.insert(('Z', 4), "Question four: what do you do on a spare evening?");
        m.insert(('Z', 5), "\"Thank you for your time. Enjoy your visit to Cardiff Castle.\"");

        m.insert(('X', 1), "It's locked.");
        m.insert(('X', 2), "The door is stuck fast.");
        m
    };

    static ref SPEECH: HashMap<(People, u8), &'static str> = {
        let mut m = HashMap::new();
        m.insert((People::Crapulus, 0), "Hic! Have you seen my wine? I'd do anything for a drop of wine.");
        m.insert((People::Crapulus, 50), "Wine! Lovely wine! Bring me some and I'll be your friend for ever.");
        m.insert((People::Spludwick, 0), "I need three things for my potion: an onion, some ink and a mushroom. Bring me the onion first.");
        m.insert((People::Spludwick, 67), "A good onion, mind. Not a rotten one.");
        m.insert((People::DrDuck, 0), "Come back when you have a prescription.");
        m.insert((People::Malagauche, 0), "What'll it be, sir?");
        m.insert((People::Malagauche, 50), "One bottle of wine, thruppence.");
        m.insert((People::Cwytalot, 0), "Nobody passes this way!");
        m.insert((People::Duke, 0), "Good day to you, Lord Avalot.");
        m.insert((People::Dogfood, 0), "Fancy a game of Nim?");
        m.insert((People::Trader, 0), "Onions! Lovely onions! Only thruppence!");
        m.insert((People::Ibythneth, 0), "I've lost my way to Canterbury. Have you seen my badge?");
        m.insert((People::Ayles, 0), "Thank you for the pen. Now, about that ink...");
        m.insert((People::Port, 0), "We don't get many of your sort in here.");
        m.insert((People::Spurge, 0), "The Baron? He lives up the road. Never stops eating.");
        m.insert((People::Arkata, 0), "Don't talk to me, Avvy. You know what you did.");
        m.insert((People::Geida, 0), "Take me away from here, Avvy!");
        m.insert((People::WiseWoman, 0), "Wisdom costs, dearie. Come back when you've something to trade.");
        m
    };
}

pub fn scroll(category: char, id: u16) -> Option<&'static str> {
    SCROLLS.get(&(category, id)).copied()
}

/// What a character says about a subject; subject 0 is small talk
pub fn speech(person: People, subject: u8) -> Option<&'static str> {
    SPEECH.get(&(person, subject)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Item;

    #[test]
    fn test_every_item_has_an_examine_scroll() {
        for item in Item::ALL.iter() {
            assert!(scroll('T', item.id() as u16).is_some(), "{:?}", item);
        }
    }

    #[test]
    fn test_every_person_has_a_description() {
        for person in People::ALL.iter() {
            let id = (person.code() - 149) as u16;
            assert!(scroll('P', id).is_some(), "{:?}", person);
        }
    }

    #[test]
    fn test_survey_questions() {
        for q in 1..=5 {
            assert!(scroll('Z', q).is_some());
        }
        assert_eq!(scroll('Z', 6), None);
    }

    #[test]
    fn test_speech_lookup() {
        assert!(speech(People::Crapulus, 0).is_some());
        assert!(speech(People::Crapulus, 55).is_none());
    }
}
