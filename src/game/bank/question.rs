use std::fmt;

/// Position of an answer option within a question, in display order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Label {
    A,
    B,
    C,
    D,
}

impl Label {
    pub const ALL: [Label; 4] = [Label::A, Label::B, Label::C, Label::D];

    pub fn from_char(c: char) -> Option<Label> {
        match c.to_ascii_uppercase() {
            'A' => Some(Label::A),
            'B' => Some(Label::B),
            'C' => Some(Label::C),
            'D' => Some(Label::D),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Label::A => 'A',
            Label::B => 'B',
            Label::C => 'C',
            Label::D => 'D',
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub options: [String; 4],
    pub correct: Label,
}

impl Question {
    pub fn is_guess_correct(&self, guess: char) -> bool {
        Label::from_char(guess) == Some(self.correct)
    }
}
