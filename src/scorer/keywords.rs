//! Static keyword tables for the text scorer.
//!
//! Substring containment against lowercased input, no word-boundary check.
//! That means "fearless" hits the Fear list; this matches the behavior the
//! tables were tuned against and is kept deliberately.

use crate::types::EmotionLabel;

const HAPPY: &[&str] = &[
    "happy",
    "joy",
    "love",
    "excited",
    "great",
    "wonderful",
    "amazing",
    "awesome",
    "fantastic",
    "delighted",
    "pleased",
    "glad",
    "cheerful",
    "thrilled",
    "elated",
    "good",
    "best",
    "beautiful",
];

const SAD: &[&str] = &[
    "sad",
    "unhappy",
    "depressed",
    "cry",
    "tears",
    "miserable",
    "heartbroken",
    "grief",
    "sorrow",
    "disappointed",
    "lonely",
    "hopeless",
    "gloomy",
    "melancholy",
    "hurt",
    "pain",
];

const ANGRY: &[&str] = &[
    "angry",
    "mad",
    "furious",
    "hate",
    "annoyed",
    "frustrated",
    "irritated",
    "outraged",
    "enraged",
    "livid",
    "bitter",
    "resentful",
    "hostile",
    "rage",
];

const FEAR: &[&str] = &[
    "afraid",
    "scared",
    "fear",
    "terrified",
    "anxious",
    "worried",
    "nervous",
    "panic",
    "dread",
    "frightened",
    "alarmed",
    "horrified",
    "petrified",
    "terror",
];

const SURPRISE: &[&str] = &[
    "surprised",
    "shocked",
    "amazed",
    "astonished",
    "unexpected",
    "wow",
    "unbelievable",
    "startled",
    "stunned",
    "bewildered",
    "astounded",
    "whoa",
];

const DISGUST: &[&str] = &[
    "disgusted",
    "gross",
    "nasty",
    "revolting",
    "sick",
    "yuck",
    "ew",
    "horrible",
    "awful",
    "repulsed",
    "vile",
    "distaste",
];

const NEUTRAL: &[&str] = &[
    "okay",
    "fine",
    "normal",
    "alright",
    "so-so",
    "whatever",
    "meh",
    "indifferent",
    "average",
    "ordinary",
];

/// Label to keyword-list mapping, fixed for the process lifetime.
pub fn keyword_table() -> &'static [(EmotionLabel, &'static [&'static str])] {
    &[
        (EmotionLabel::Happy, HAPPY),
        (EmotionLabel::Sad, SAD),
        (EmotionLabel::Angry, ANGRY),
        (EmotionLabel::Fear, FEAR),
        (EmotionLabel::Surprise, SURPRISE),
        (EmotionLabel::Disgust, DISGUST),
        (EmotionLabel::Neutral, NEUTRAL),
    ]
}
