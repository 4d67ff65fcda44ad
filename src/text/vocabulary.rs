//! Vocabulary table and word codes
//!
//! The data table keeps the historical one-byte codes, whose meaning depends on
//! the numeric range they fall in. [`WordCode::from_code`] is the only place the
//! ranges are interpreted; everything downstream matches on the enum.

use crate::world::People;
use log::debug;

/// Code of an unresolved word
pub const PARDON: u8 = 254;

/// Code of a slot whose word was consumed elsewhere
pub const MOVED: u8 = 0;

/// First code handed out to room-local "also" words
pub const ALSO_BASE: u8 = 99;

/// Code the vocabulary gives to the word "password" itself
pub const PASSWORD_NOUN: u8 = 99;

/// Prepositions up to this code may not start a conversation subject
pub const LAST_BLOCKING_PREPOSITION: u8 = 229;

pub const PREP_TO: u8 = 225;
pub const PREP_AT: u8 = 226;
pub const PREP_INTO: u8 = 228;
pub const PREP_OFF: u8 = 229;
pub const PREP_UP: u8 = 230;
pub const PREP_DOWN: u8 = 231;
pub const PREP_ON: u8 = 232;

/// Verb states of the command dispatcher. The discriminant is the verb code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Examine = 1,
    Open,
    Pause,
    Get,
    Drop,
    Inventory,
    Talk,
    Give,
    Drink,
    Load,
    Save,
    Pay,
    Look,
    Break,
    Quit,
    Sit,
    Stand,
    Go,
    Info,
    Undress,
    Wear,
    Play,
    Ring,
    Help,
    Larrypass,
    Phaon,
    Boss,
    Pee,
    Cheat,
    Magic,
    Restart,
    Eat,
    Listen,
    Buy,
    Attack,
    Password,
    Dir,
    Die,
    Score,
    Put,
    Kiss,
    Climb,
    Jump,
    Hiscores,
    Wake,
    Hello,
    Thanks,
    SmartAlec = 249,
    Expletive = 253,
}

impl Verb {
    const ORDINARY: [Verb; 47] = [
        Verb::Examine,
        Verb::Open,
        Verb::Pause,
        Verb::Get,
        Verb::Drop,
        Verb::Inventory,
        Verb::Talk,
        Verb::Give,
        Verb::Drink,
        Verb::Load,
        Verb::Save,
        Verb::Pay,
        Verb::Look,
        Verb::Break,
        Verb::Quit,
        Verb::Sit,
        Verb::Stand,
        Verb::Go,
        Verb::Info,
        Verb::Undress,
        Verb::Wear,
        Verb::Play,
        Verb::Ring,
        Verb::Help,
        Verb::Larrypass,
        Verb::Phaon,
        Verb::Boss,
        Verb::Pee,
        Verb::Cheat,
        Verb::Magic,
        Verb::Restart,
        Verb::Eat,
        Verb::Listen,
        Verb::Buy,
        Verb::Attack,
        Verb::Password,
        Verb::Dir,
        Verb::Die,
        Verb::Score,
        Verb::Put,
        Verb::Kiss,
        Verb::Climb,
        Verb::Jump,
        Verb::Hiscores,
        Verb::Wake,
        Verb::Hello,
        Verb::Thanks,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Verb> {
        match code {
            249 => Some(Verb::SmartAlec),
            253 => Some(Verb::Expletive),
            1..=47 => Some(Verb::ORDINARY[code as usize - 1]),
            _ => None,
        }
    }

    /// Verbs that still work while Avvy is dead, tied up or asleep
    pub fn is_meta(self) -> bool {
        matches!(
            self,
            Verb::Load
                | Verb::Save
                | Verb::Quit
                | Verb::Info
                | Verb::Help
                | Verb::Larrypass
                | Verb::Phaon
                | Verb::Boss
                | Verb::Cheat
                | Verb::Restart
                | Verb::Dir
                | Verb::Score
                | Verb::Hiscores
                | Verb::SmartAlec
        )
    }

    /// Verbs whose operand may legitimately be a word the vocabulary lacks
    /// (proper nouns, save names)
    pub fn tolerates_unknown_words(self) -> bool {
        matches!(
            self,
            Verb::Talk | Verb::Save | Verb::Load | Verb::Dir
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pronoun {
    Him,
    Her,
    It,
}

/// Names that denote a different character depending on the room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Homonym {
    Monk,
    Barman,
}

/// A resolved word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCode {
    Verb(Verb),
    /// Object noun, unslipped (50..=149)
    Object(u8),
    Person(People),
    Pronoun(Pronoun),
    Homonym(Homonym),
    /// 225..=232
    Preposition(u8),
    /// "yes", "no", "because"
    AnswerBack,
    /// "please"
    Politeness,
    /// "about", "concerning"
    TopicMarker,
    Swear,
    Noise,
    Moved,
    Unknown,
}

impl WordCode {
    /// Interprets a one-byte vocabulary code
    pub fn from_code(code: u8) -> Option<WordCode> {
        let word = match code {
            MOVED => WordCode::Moved,
            1..=49 => WordCode::Verb(Verb::from_code(code)?),
            50..=149 => WordCode::Object(code),
            150..=199 => WordCode::Person(People::from_code(code)?),
            200 => WordCode::Pronoun(Pronoun::Him),
            201 => WordCode::Pronoun(Pronoun::Her),
            202 => WordCode::Pronoun(Pronoun::It),
            203 => WordCode::Homonym(Homonym::Monk),
            204 => WordCode::Homonym(Homonym::Barman),
            225..=232 => WordCode::Preposition(code),
            249 => WordCode::AnswerBack,
            251 => WordCode::Politeness,
            252 => WordCode::TopicMarker,
            253 => WordCode::Swear,
            PARDON => WordCode::Unknown,
            255 => WordCode::Noise,
            _ => return None,
        };
        Some(word)
    }

    /// The one-byte code, for diagnostics and logs
    pub fn code(self) -> u8 {
        match self {
            WordCode::Verb(v) => v.code(),
            WordCode::Object(c) => c,
            WordCode::Person(p) => p.code(),
            WordCode::Pronoun(Pronoun::Him) => 200,
            WordCode::Pronoun(Pronoun::Her) => 201,
            WordCode::Pronoun(Pronoun::It) => 202,
            WordCode::Homonym(Homonym::Monk) => 203,
            WordCode::Homonym(Homonym::Barman) => 204,
            WordCode::Preposition(c) => c,
            WordCode::AnswerBack => 249,
            WordCode::Politeness => 251,
            WordCode::TopicMarker => 252,
            WordCode::Swear => 253,
            WordCode::Unknown => PARDON,
            WordCode::Noise => 255,
            WordCode::Moved => MOVED,
        }
    }

    /// The dispatcher state this word selects, if it acts as a verb
    pub fn as_verb(self) -> Option<Verb> {
        match self {
            WordCode::Verb(v) => Some(v),
            WordCode::Swear => Some(Verb::Expletive),
            WordCode::AnswerBack => Some(Verb::SmartAlec),
            _ => None,
        }
    }
}

/// One entry of the vocabulary table
#[derive(Debug, Clone, PartialEq)]
pub struct VocabularyEntry {
    pub word: &'static str,
    pub code: WordCode,
}

/// Passwords that open the drawbridge; one is chosen per game
pub const PASSWORDS: [&str; 30] = [
    "TIROS", "WORDY", "STACK", "SHADOW", "OWL", "ACORN", "DOMESDAY", "FLOPPY", "DIODE", "FIELD",
    "COWSLIP", "OSBYTE", "OSCLI", "TIMBER", "ADVAL", "NEUTRON", "POSITRON", "ELECTRON", "CIRCUIT",
    "AURUM", "PETRIFY", "EBBY", "CATAPULT", "GAMERS", "FUDGE", "CANDLE", "BEEB", "MICRO", "SESAME",
    "LORDSHIP",
];

/// The raw vocabulary, in registration order
const STANDARD_TABLE: &[(u8, &str)] = &[
    // Verbs, 1-49
    (1, "EXAMINE"),
    (1, "READ"),
    (1, "XAM"),
    (2, "OPEN"),
    (2, "LEAVE"),
    (2, "UNLOCK"),
    (3, "PAUSE"),
    // Registered early so TAKE and TALK win over it on abbreviation
    (47, "TA"),
    (4, "TAKE"),
    (4, "GET"),
    (4, "PICK"),
    (5, "DROP"),
    (6, "INVENTORY"),
    (7, "TALK"),
    (7, "SAY"),
    (7, "ASK"),
    (8, "GIVE"),
    (9, "DRINK"),
    (9, "IMBIBE"),
    (9, "DRAIN"),
    (10, "LOAD"),
    (10, "RESTORE"),
    (11, "SAVE"),
    (12, "BRIBE"),
    (12, "PAY"),
    (13, "LOOK"),
    (14, "BREAK"),
    (15, "QUIT"),
    (15, "EXIT"),
    (16, "SIT"),
    (16, "SLEEP"),
    (17, "STAND"),
    (18, "GO"),
    (19, "INFO"),
    (20, "UNDRESS"),
    (20, "DOFF"),
    (21, "DRESS"),
    (21, "WEAR"),
    (21, "DON"),
    (22, "PLAY"),
    (22, "STRUM"),
    (23, "RING"),
    (24, "HELP"),
    (25, "KENDAL"),
    (26, "CAPYBARA"),
    (27, "BOSS"),
    // NINET on its own is noise
    (255, "NINET"),
    (28, "URINATE"),
    (28, "MINGITE"),
    (29, "NINETY"),
    (30, "ABRACADABRA"),
    (30, "PLUGH"),
    (30, "XYZZY"),
    (30, "HOCUS"),
    (30, "POCUS"),
    (30, "IZZY"),
    (30, "WIZZY"),
    (30, "PLOVER"),
    (30, "MELENKURION"),
    (30, "ZORTON"),
    (30, "BLERBI"),
    (30, "THURB"),
    (30, "SNOEZE"),
    (30, "SAMOHT"),
    (30, "NOSIDE"),
    (30, "PHUGGG"),
    (30, "KNERL"),
    (30, "MAGIC"),
    (30, "KLAETU"),
    (30, "VODEL"),
    (30, "BONESCROLLS"),
    (30, "RADOF"),
    (31, "RESTART"),
    (32, "SWALLOW"),
    (32, "EAT"),
    (33, "LISTEN"),
    (33, "HEAR"),
    (34, "BUY"),
    (34, "PURCHASE"),
    (34, "ORDER"),
    (34, "DEMAND"),
    (35, "ATTACK"),
    (35, "HIT"),
    (35, "KILL"),
    (35, "PUNCH"),
    (35, "KICK"),
    (35, "SHOOT"),
    (35, "FIRE"),
    // Passwords, 36
    (36, "TIROS"),
    (36, "WORDY"),
    (36, "STACK"),
    (36, "SHADOW"),
    (36, "OWL"),
    (36, "ACORN"),
    (36, "DOMESDAY"),
    (36, "FLOPPY"),
    (36, "DIODE"),
    (36, "FIELD"),
    (36, "COWSLIP"),
    (36, "OSBYTE"),
    (36, "OSCLI"),
    (36, "TIMBER"),
    (36, "ADVAL"),
    (36, "NEUTRON"),
    (36, "POSITRON"),
    (36, "ELECTRON"),
    (36, "CIRCUIT"),
    (36, "AURUM"),
    (36, "PETRIFY"),
    (36, "EBBY"),
    (36, "CATAPULT"),
    (36, "GAMERS"),
    (36, "FUDGE"),
    (36, "CANDLE"),
    (36, "BEEB"),
    (36, "MICRO"),
    (36, "SESAME"),
    (36, "LORDSHIP"),
    (37, "DIR"),
    (37, "LS"),
    (38, "DIE"),
    (39, "SCORE"),
    (40, "PUT"),
    (40, "INSERT"),
    (41, "KISS"),
    (41, "SNOG"),
    (41, "CUDDLE"),
    (42, "CLIMB"),
    (42, "CLAMBER"),
    (43, "JUMP"),
    (44, "HIGHSCORES"),
    (44, "HISCORES"),
    (45, "WAKEN"),
    (45, "AWAKEN"),
    (46, "HELLO"),
    (46, "HI"),
    (46, "YO"),
    (47, "THANKS"),
    // Object nouns, 50-149
    (50, "WINE"),
    (50, "BOOZE"),
    (50, "NASTY"),
    (50, "VINEGAR"),
    (51, "MONEYBAG"),
    (51, "BAG"),
    (51, "CASH"),
    (51, "DOSH"),
    (51, "WALLET"),
    (52, "BODKIN"),
    (52, "DAGGER"),
    (52, "SWORD"),
    (53, "POTION"),
    (54, "CHASTITY"),
    (54, "BELT"),
    (55, "BOLT"),
    (55, "ARROW"),
    (55, "DART"),
    (56, "CROSSBOW"),
    (56, "BOW"),
    (57, "LUTE"),
    (58, "PILGRIM"),
    (58, "BADGE"),
    (59, "MUSHROOMS"),
    (59, "TOADSTOOLS"),
    (60, "KEY"),
    (61, "BELL"),
    (62, "PRESCRIPT"),
    (62, "SCROLL"),
    (62, "MESSAGE"),
    (63, "PEN"),
    (63, "QUILL"),
    (64, "INK"),
    (64, "INKPOT"),
    (65, "CLOTHES"),
    (66, "HABIT"),
    (66, "DISGUISE"),
    (67, "ONION"),
    (PASSWORD_NOUN, "PASSWORD"),
    // People, male 150-174
    (150, "AVVY"),
    (150, "AVALOT"),
    (150, "YOURSELF"),
    (150, "ME"),
    (150, "MYSELF"),
    (151, "SPLUDWICK"),
    (151, "THOMAS"),
    (151, "ALCHEMIST"),
    (151, "CHEMIST"),
    (152, "CRAPULUS"),
    (152, "SERF"),
    (152, "SLAVE"),
    // Early, so Baron DU Lustie is not mistaken for Duck or Duke
    (158, "DU"),
    (152, "CRAPPY"),
    (153, "DUCK"),
    (153, "DOCTOR"),
    (154, "MALAGAUCHE"),
    (155, "FRIAR"),
    (155, "TUCK"),
    (156, "ROBIN"),
    (156, "HOOD"),
    (157, "CWYTALOT"),
    (157, "GUARD"),
    (157, "BRIDGEKEEP"),
    (158, "BARON"),
    (158, "LUSTIE"),
    (159, "DUKE"),
    (159, "GRACE"),
    (160, "DOGFOOD"),
    (160, "MINSTREL"),
    (161, "TRADER"),
    (161, "SHOPKEEPER"),
    (161, "STALLHOLDER"),
    (162, "PILGRIM"),
    (162, "IBYTHNETH"),
    (163, "ABBOT"),
    (163, "AYLES"),
    (164, "PORT"),
    (165, "SPURGE"),
    (166, "JACQUES"),
    (166, "SLEEPER"),
    (166, "RINGER"),
    // People, female 175-199
    (175, "WIFE"),
    (175, "ARKATA"),
    (176, "GEDALODAVA"),
    (176, "GEIDA"),
    (176, "PRINCESS"),
    (178, "WISE"),
    (178, "WITCH"),
    // Pronouns and homonyms, 200-224
    (200, "HIM"),
    (200, "MAN"),
    (200, "GUY"),
    (200, "DUDE"),
    (200, "CHAP"),
    (200, "FELLOW"),
    (201, "HER"),
    (201, "GIRL"),
    (201, "WOMAN"),
    (202, "IT"),
    (202, "THING"),
    (203, "MONK"),
    (204, "BARMAN"),
    (204, "BARTENDER"),
    // Prepositions, 225-249
    (225, "TO"),
    (226, "AT"),
    (227, "UP"),
    (228, "INTO"),
    (228, "INSIDE"),
    (229, "OFF"),
    (230, "UP"),
    (231, "DOWN"),
    (232, "ON"),
    (251, "PLEASE"),
    (252, "ABOUT"),
    (252, "CONCERNING"),
    // Swear words, 253
    (253, "SHIT"),
    (28, "PISS"),
    (28, "PEE"),
    (253, "FART"),
    (253, "BALLS"),
    (253, "BLAST"),
    (253, "BUGGER"),
    (253, "KNICKERS"),
    (253, "BLOODY"),
    (253, "HELL"),
    (253, "DAMN"),
    (253, "SMEG"),
    // Answer-back words, 249
    (249, "YES"),
    (249, "NO"),
    (249, "BECAUSE"),
    // Noise words, 255
    (255, "THE"),
    (255, "A"),
    (255, "NOW"),
    (255, "SOME"),
    (255, "AND"),
    (255, "THAT"),
    (255, "POCUS"),
    (255, "HIS"),
    (255, "THIS"),
    // For "Ken SENT me"
    (255, "SENTINEL"),
];

/// Word lookup table, built once and read-only afterwards
#[derive(Debug, Clone)]
pub struct Vocabulary {
    entries: Vec<VocabularyEntry>,
}

impl Vocabulary {
    /// Builds the game's vocabulary
    pub fn new() -> Result<Vocabulary, String> {
        Vocabulary::from_table(STANDARD_TABLE)
    }

    /// Builds a vocabulary from raw `(code, word)` pairs. A code that falls in
    /// no defined range makes the table unusable.
    pub fn from_table(table: &[(u8, &'static str)]) -> Result<Vocabulary, String> {
        let mut entries = Vec::with_capacity(table.len());
        for &(code, word) in table {
            let code = WordCode::from_code(code)
                .ok_or_else(|| format!("Vocabulary word {} has undefined code {}", word, code))?;
            entries.push(VocabularyEntry { word, code });
        }
        debug!("Vocabulary built with {} entries", entries.len());
        Ok(Vocabulary { entries })
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    /// Resolves an uppercase word. Exact matches are tried first, then the word
    /// is taken as an abbreviation. Later entries win in both passes.
    pub fn lookup(&self, word: &str) -> Option<WordCode> {
        if word.is_empty() {
            return Some(WordCode::Moved);
        }

        if let Some(entry) = self.entries.iter().rev().find(|e| e.word == word) {
            return Some(entry.code);
        }

        self.entries
            .iter()
            .rev()
            .find(|e| e.word.starts_with(word))
            .map(|e| e.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        Vocabulary::new().expect("standard vocabulary should build")
    }

    #[test]
    fn test_exact_lookup() {
        let v = vocab();
        assert_eq!(v.lookup("EXAMINE"), Some(WordCode::Verb(Verb::Examine)));
        assert_eq!(v.lookup("WINE"), Some(WordCode::Object(50)));
        assert_eq!(v.lookup("CRAPULUS"), Some(WordCode::Person(People::Crapulus)));
        assert_eq!(v.lookup("PLEASE"), Some(WordCode::Politeness));
        assert_eq!(v.lookup("THE"), Some(WordCode::Noise));
        assert_eq!(v.lookup("QUIXOTIC"), None);
    }

    #[test]
    fn test_last_registered_wins() {
        let v = vocab();
        // PILGRIM is both the badge and Ibythneth; the later person entry wins
        assert_eq!(v.lookup("PILGRIM"), Some(WordCode::Person(People::Ibythneth)));
        assert_eq!(v.lookup("UP"), Some(WordCode::Preposition(PREP_UP)));
        // POCUS was registered as magic, then again as noise
        assert_eq!(v.lookup("POCUS"), Some(WordCode::Noise));
    }

    #[test]
    fn test_abbreviation_fallback() {
        let v = vocab();
        assert_eq!(v.lookup("EXAM"), Some(WordCode::Verb(Verb::Examine)));
        assert_eq!(v.lookup("CRAP"), Some(WordCode::Person(People::Crapulus)));
        // TA is a word in its own right, registered ahead of TAKE and TALK
        assert_eq!(v.lookup("TA"), Some(WordCode::Verb(Verb::Thanks)));
        assert_eq!(v.lookup("TAK"), Some(WordCode::Verb(Verb::Get)));
        // NINETY is registered after NINET, so it takes the abbreviation
        assert_eq!(v.lookup("NINET"), Some(WordCode::Noise));
        assert_eq!(v.lookup("NINE"), Some(WordCode::Verb(Verb::Cheat)));
    }

    #[test]
    fn test_ranges_are_disjoint() {
        let v = vocab();
        for entry in v.entries() {
            let code = entry.code.code();
            let classes = [
                (1..=49).contains(&code),
                (50..=149).contains(&code),
                (150..=199).contains(&code),
                (200..=204).contains(&code),
                (225..=232).contains(&code),
                code == 249,
                code == 251,
                code == 252,
                code == 253,
                code == 255,
            ];
            let hits = classes.iter().filter(|c| **c).count();
            assert_eq!(hits, 1, "{} ({}) falls in {} ranges", entry.word, code, hits);
            assert_eq!(WordCode::from_code(code), Some(entry.code));
        }
    }

    #[test]
    fn test_passwords_share_one_verb_code() {
        let v = vocab();
        for password in PASSWORDS.iter() {
            assert_eq!(v.lookup(password), Some(WordCode::Verb(Verb::Password)));
        }
    }

    #[test]
    fn test_undefined_code_is_rejected() {
        assert!(Vocabulary::from_table(&[(210, "ZOUNDS")]).is_err());
        assert!(Vocabulary::from_table(&[(48, "UNUSED")]).is_err());
    }

    #[test]
    fn test_verb_codes_round_trip() {
        for code in (1..=47).chain([249, 253]) {
            let verb = Verb::from_code(code).expect("defined verb");
            assert_eq!(verb.code(), code);
        }
        assert_eq!(Verb::from_code(48), None);
    }
}
