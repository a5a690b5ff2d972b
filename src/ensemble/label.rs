//! Classification labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two-class label set every classifier predicts over
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Label {
    /// The image was produced by a generative model
    AiGenerated,
    /// The image was produced by a person
    HumanMade,
}

impl Label {
    /// Both labels, in canonical order
    pub const ALL: [Label; 2] = [Label::AiGenerated, Label::HumanMade];

    /// The opposite label
    pub fn other(&self) -> Label {
        match self {
            Label::AiGenerated => Label::HumanMade,
            Label::HumanMade => Label::AiGenerated,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Label::AiGenerated => "AI-Generated",
            Label::HumanMade => "Human-Made",
        };
        f.write_str(s)
    }
}
