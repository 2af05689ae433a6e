use std::fmt;

use serde::{Deserialize, Serialize};

/// How the planet feels, from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Happy,
    Content,
    Worried,
    Angry,
    Crying,
    Dying,
}

impl Emotion {
    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Content => "content",
            Emotion::Worried => "worried",
            Emotion::Angry => "angry",
            Emotion::Crying => "crying",
            Emotion::Dying => "dying",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Emotion::Happy => "\u{1F60A}",
            Emotion::Content => "\u{1F642}",
            Emotion::Worried => "\u{1F61F}",
            Emotion::Angry => "\u{1F620}",
            Emotion::Crying => "\u{1F622}",
            Emotion::Dying => "\u{1F480}",
        }
    }

    /// What the planet says about itself in the status panel.
    pub fn message(self) -> &'static str {
        match self {
            Emotion::Happy => "I'm thriving! Thank you!",
            Emotion::Content => "Things are going well...",
            Emotion::Worried => "I'm a bit concerned...",
            Emotion::Angry => "This pollution hurts!",
            Emotion::Crying => "Please help me...",
            Emotion::Dying => "I can't take much more...",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn calculate_emotion(health: f64) -> Emotion {
    if health >= 80.0 {
        Emotion::Happy
    } else if health >= 60.0 {
        Emotion::Content
    } else if health >= 40.0 {
        Emotion::Worried
    } else if health >= 20.0 {
        Emotion::Angry
    } else if health >= 5.0 {
        Emotion::Crying
    } else {
        Emotion::Dying
    }
}
