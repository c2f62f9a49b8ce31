use serde::{Deserialize, Serialize};

/// Progress through the three hint tiers. Only ever moves forward within a round.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HintStage {
    #[default]
    Unused,
    TextShown,
    LettersDisabled,
    VowelsShown,
}

impl HintStage {
    pub const fn index(self) -> u8 {
        use HintStage::*;
        match self {
            Unused => 0,
            TextShown => 1,
            LettersDisabled => 2,
            VowelsShown => 3,
        }
    }

    pub const fn next(self) -> Option<Self> {
        use HintStage::*;
        match self {
            Unused => Some(TextShown),
            TextShown => Some(LettersDisabled),
            LettersDisabled => Some(VowelsShown),
            VowelsShown => None,
        }
    }

    /// Turns charged for taking the next hint from this stage.
    pub const fn next_cost(self) -> u8 {
        use HintStage::*;
        match self {
            Unused => 0,
            TextShown | LettersDisabled => 1,
            VowelsShown => 0,
        }
    }

    pub const fn is_exhausted(self) -> bool {
        matches!(self, Self::VowelsShown)
    }

    pub const fn text_revealed(self) -> bool {
        !matches!(self, Self::Unused)
    }
}
