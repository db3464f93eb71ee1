//! Synonym table and query expansion.
//!
//! Maps surface forms (English, Hindi, Hinglish) to canonical concept
//! names so that "migraine" or "sir dard" both reach entries indexed
//! under "headache". Lookup is one-directional: surface form to
//! concept, never concept back out to every surface form.
//!
//! Groups keep their declaration order; the synonym fallback tier
//! scans them in that order. When one surface form appears in several
//! groups the last declaration wins the reverse lookup.

use crate::core::config::SynonymConfig;
use crate::core::error::{MediBotError, Result};
use crate::core::text::{normalize, TokenSet};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Built-in concept groups shipped with the bot
const BUILTIN_GROUPS: &[(&str, &[&str])] = &[
    (
        "headache",
        &[
            "headache", "head pain", "head ache", "migraine", "sir dard", "sar dard",
            "sir me dard", "sar me dard", "head hurts", "head hurting", "sir phat raha",
        ],
    ),
    (
        "fever",
        &[
            "fever", "temperature", "feverish", "high temp", "bukhar", "bukhaar",
            "bukhar aa raha", "tapman",
        ],
    ),
    (
        "cough",
        &[
            "cough", "khansi", "dry cough", "wet cough", "coughing", "khansi ho rahi",
            "gala kharab", "throat congestion", "phlegm", "balgam",
        ],
    ),
    (
        "cold",
        &[
            "cold", "sardi", "runny nose", "bahati naak", "stuffy nose", "blocked nose",
            "jam rahi naak", "nasal congestion",
        ],
    ),
    (
        "stomach",
        &[
            "stomach", "abdomen", "belly", "tummy", "stomachache", "stomach ache", "pet dard",
            "pet me dard", "abdomen pain", "gastric pain",
        ],
    ),
    (
        "acidity",
        &[
            "acidity", "acid reflux", "heartburn", "gas", "gas problem", "gas ho rahi",
            "pet me jalan", "gastric",
        ],
    ),
    (
        "vomiting",
        &[
            "vomit", "vomiting", "throwing up", "emesis", "ulti", "nausea", "nauseous",
            "man ghabra raha", "ulti jaisi feeling",
        ],
    ),
    (
        "rash",
        &[
            "rash", "rashes", "red spots", "red spot", "lal daane", "itchy skin", "itching",
            "khujli", "fungal infection", "eczema", "allergic rash",
        ],
    ),
    (
        "breathlessness",
        &[
            "breathless", "shortness of breath", "saans", "saans phoolna",
            "saans lene me dikkat", "heavy breathing", "difficulty breathing",
        ],
    ),
    (
        "chest",
        &[
            "chest pain", "chest", "seene me dard", "seene me jalan", "tight chest",
            "pressure chest", "chest discomfort",
        ],
    ),
    (
        "diarrhoea",
        &[
            "diarrhea", "diarrhoea", "loose motion", "dast", "frequent toilet",
            "patla paikhana",
        ],
    ),
    (
        "constipation",
        &[
            "constipation", "constipated", "kabj", "pet bandh", "hard stool",
            "difficult toilet",
        ],
    ),
    (
        "allergy",
        &[
            "allergy", "allergic", "allergic reaction", "sensitivity", "allergy ka",
            "itchy eyes", "sneezing", "nose itching",
        ],
    ),
    (
        "teeth",
        &[
            "tooth", "teeth", "daant", "dant", "toothache", "teeth pain", "tooth pain",
            "gum pain", "gum swelling", "bleeding gums", "sensitive teeth",
            "tooth sensitivity", "wisdom tooth", "jaw pain", "dental infection",
        ],
    ),
    (
        "backpain",
        &[
            "back pain", "lower back pain", "kamar dard", "kamar me dard", "spine pain",
            "lumber pain",
        ],
    ),
    (
        "neckpain",
        &[
            "neck pain", "gardan dard", "stiff neck", "neck stiffness", "gardan me kasawat",
        ],
    ),
    (
        "eyes",
        &[
            "eye pain", "aankh dard", "itchy eyes", "aankh me jalan", "dry eyes",
            "watering eyes", "blurry vision", "dhoondla dikh raha",
        ],
    ),
    (
        "ears",
        &[
            "ear pain", "earache", "kan me dard", "ear itching", "kan me khujli",
            "blocked ear", "ear ringing", "tinnitus",
        ],
    ),
    (
        "throat",
        &[
            "throat pain", "gala dard", "sore throat", "gala kharab", "gala baitha",
            "throat irritation",
        ],
    ),
    (
        "urine",
        &[
            "urine burning", "peshab me jalan", "frequent urination", "bar bar peshab",
            "urinary infection", "UTI",
        ],
    ),
    (
        "periods",
        &[
            "period pain", "cramps", "mens cramps", "periods me dard", "mens issues", "PMS",
            "heavy bleeding", "spotting",
        ],
    ),
    (
        "anxiety",
        &[
            "anxiety", "stress", "tension", "ghabrahat", "panic", "nervous", "uneasy",
            "fearful",
        ],
    ),
    (
        "greeting",
        &[
            "hi", "hello", "hey", "hii", "hiii", "yo", "sup", "whats up", "what's up",
            "good morning", "good night", "good evening", "good afternoon", "namaste",
            "namaskar", "pranam", "ram ram", "salam", "salaam", "assalamualaikum",
        ],
    ),
    (
        "wellbeing",
        &[
            "how are you", "how r u", "how are u", "kaise ho", "aap kaise ho", "tum kaise ho",
            "tu kaise hai", "kya haal hai", "kya scene", "kaisa chal raha", "kaisa ho",
        ],
    ),
    (
        "botidentity",
        &[
            "what is your name", "your name", "name please", "tumhara naam kya hai",
            "tera naam kya hai", "naam kya hai", "aapka naam kya", "who are you", "who r u",
            "tum kaun ho", "aap kaun ho", "introduce yourself", "tell about yourself",
        ],
    ),
    (
        "thanks",
        &[
            "thank you", "thanks", "thankyou", "shukriya", "bohot shukriya", "good job",
            "nice", "great", "awesome",
        ],
    ),
    (
        "confirmation",
        &[
            "ok", "okay", "haan", "ha", "hmm", "theek hai", "thik hai", "achha", "acha",
            "fine", "sure", "done",
        ],
    ),
    (
        "goodbye",
        &[
            "bye", "goodbye", "good bye", "see you", "see you later", "phir milte", "chal bye",
        ],
    ),
    (
        "help",
        &[
            "help me", "i need help", "please help", "madad chahiye", "meri madad karo",
            "can you help",
        ],
    ),
    (
        "cora",
        &[
            "what is cora", "cora health", "cora kya hai", "cora details", "about cora",
            "cora info", "cora explain", "cora health platform",
        ],
    ),
    (
        "medibot",
        &[
            "what is medibot", "medibot kya hai", "what can you do", "what do you do",
            "tum kya kar sakte ho", "your purpose", "bot functions",
        ],
    ),
    (
        "docmap",
        &[
            "how to find a doctor", "doctor search", "doc map", "docmap",
            "doctor kaise dhundhu", "find doctor", "specialist near me", "doctor near me",
        ],
    ),
    (
        "member",
        &[
            "add member", "member kaise add kare", "how to add member", "edit member",
            "member details", "family member add",
        ],
    ),
    (
        "reminder",
        &[
            "medicine reminder", "reminder kaise lagaye", "how to set reminders",
            "pill reminder", "medication time", "medicine timing",
        ],
    ),
    (
        "chitchat",
        &[
            "tell me something", "talk to me", "bored", "mood off", "joke", "funny",
            "make me laugh", "sing a song", "story", "kuch bolo",
        ],
    ),
];

/// A canonical concept and its surface forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymGroup {
    /// Canonical concept name (a single normalized token)
    pub concept: String,

    /// Surface forms resolving to the concept, as declared
    #[serde(default)]
    pub forms: Vec<String>,
}

/// Ordered synonym table with a precomputed reverse lookup
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    groups: Vec<SynonymGroup>,
    /// Normalized surface form -> canonical concept (last write wins)
    reverse: HashMap<String, String>,
    /// Normalized multi-word forms, split into words
    phrases: Vec<(String, Vec<String>)>,
}

impl SynonymTable {
    /// Build a table from groups in declaration order.
    ///
    /// Groups sharing a concept name are merged into the first one.
    pub fn new(groups: Vec<SynonymGroup>) -> Self {
        let mut merged: Vec<SynonymGroup> = Vec::with_capacity(groups.len());
        for group in groups {
            let concept = normalize(&group.concept);
            if concept.is_empty() {
                continue;
            }
            match merged.iter_mut().find(|g| g.concept == concept) {
                Some(existing) => existing.forms.extend(group.forms),
                None => merged.push(SynonymGroup {
                    concept,
                    forms: group.forms,
                }),
            }
        }

        let mut reverse = HashMap::new();
        let mut phrases: Vec<(String, Vec<String>)> = Vec::new();
        for group in &merged {
            for form in &group.forms {
                let key = normalize(form);
                if key.is_empty() {
                    continue;
                }
                if key.contains(' ') && !phrases.iter().any(|(k, _)| *k == key) {
                    let words = key.split(' ').map(str::to_string).collect();
                    phrases.push((key.clone(), words));
                }
                reverse.insert(key, group.concept.clone());
            }
        }

        Self {
            groups: merged,
            reverse,
            phrases,
        }
    }

    /// The built-in table
    pub fn builtin() -> Self {
        Self::new(builtin_groups())
    }

    /// An empty table (no expansion)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the table described by configuration
    pub fn from_config(config: &SynonymConfig) -> Result<Self> {
        let mut groups = if config.include_builtin {
            builtin_groups()
        } else {
            Vec::new()
        };

        if let Some(path) = &config.file {
            let extra = Self::load_groups(path)?;
            tracing::info!(
                "Loaded {} synonym group(s) from {}",
                extra.len(),
                path.display()
            );
            groups.extend(extra);
        }

        Ok(Self::new(groups))
    }

    /// Load synonym groups from a JSON file.
    ///
    /// The file holds an array of `{ "concept": ..., "forms": [...] }`.
    pub fn load_groups(path: impl AsRef<Path>) -> Result<Vec<SynonymGroup>> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            MediBotError::SynonymLoad(format!("Failed to read {}: {e}", path.display()))
        })?;
        let groups: Vec<SynonymGroup> = serde_json::from_str(&raw).map_err(|e| {
            MediBotError::SynonymLoad(format!("Failed to parse {}: {e}", path.display()))
        })?;

        for group in &groups {
            let concept = normalize(&group.concept);
            if concept.is_empty() || concept.contains(' ') {
                return Err(MediBotError::SynonymLoad(format!(
                    "Concept '{}' must be a single word",
                    group.concept
                )));
            }
        }

        Ok(groups)
    }

    /// Groups in declaration order
    pub fn groups(&self) -> &[SynonymGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Find a group by canonical concept name
    pub fn group(&self, concept: &str) -> Option<&SynonymGroup> {
        let concept = normalize(concept);
        self.groups.iter().find(|g| g.concept == concept)
    }

    /// Canonical concept for a surface form, if any
    pub fn canonical(&self, form: &str) -> Option<&str> {
        self.reverse.get(&normalize(form)).map(String::as_str)
    }

    pub fn is_concept(&self, token: &str) -> bool {
        self.groups.iter().any(|g| g.concept == token)
    }

    /// Return `tokens` plus the canonical concept of every recognized
    /// surface form. Multi-word forms must appear as contiguous runs.
    pub fn expand(&self, tokens: &TokenSet) -> TokenSet {
        let mut expanded = tokens.clone();

        for token in tokens.iter() {
            if let Some(concept) = self.reverse.get(token) {
                expanded.insert(concept.as_str());
            }
        }

        for (key, words) in &self.phrases {
            let words: Vec<&str> = words.iter().map(String::as_str).collect();
            if tokens.contains_run(&words) {
                if let Some(concept) = self.reverse.get(key) {
                    expanded.insert(concept.as_str());
                }
            }
        }

        expanded
    }

    /// Check whether a group's concept or any of its surface forms is
    /// present in `tokens`
    pub fn group_matches(&self, group: &SynonymGroup, tokens: &TokenSet) -> bool {
        if tokens.contains(&group.concept) {
            return true;
        }
        group.forms.iter().any(|form| {
            let key = normalize(form);
            if key.is_empty() {
                return false;
            }
            let words: Vec<&str> = key.split(' ').collect();
            tokens.contains_run(&words)
        })
    }
}

/// Built-in groups as owned values
pub fn builtin_groups() -> Vec<SynonymGroup> {
    BUILTIN_GROUPS
        .iter()
        .map(|(concept, forms)| SynonymGroup {
            concept: (*concept).to_string(),
            forms: forms.iter().map(|f| (*f).to_string()).collect(),
        })
        .collect()
}
