//! Keypad keys

use crate::config::{KEYPAD_COLS, KEYPAD_ROWS};

/// A key on the 4x4 membrane pad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    A,
    B,
    C,
    D,
    Star,
    Hash,
}

impl Key {
    /// Parse a silkscreen character
    pub const fn from_char(c: char) -> Option<Self> {
        let key = match c {
            '0' => Self::Num0,
            '1' => Self::Num1,
            '2' => Self::Num2,
            '3' => Self::Num3,
            '4' => Self::Num4,
            '5' => Self::Num5,
            '6' => Self::Num6,
            '7' => Self::Num7,
            '8' => Self::Num8,
            '9' => Self::Num9,
            'A' | 'a' => Self::A,
            'B' | 'b' => Self::B,
            'C' | 'c' => Self::C,
            'D' | 'd' => Self::D,
            '*' => Self::Star,
            '#' => Self::Hash,
            _ => return None,
        };
        Some(key)
    }

    /// Silkscreen character
    pub const fn as_char(self) -> char {
        match self {
            Self::Num0 => '0',
            Self::Num1 => '1',
            Self::Num2 => '2',
            Self::Num3 => '3',
            Self::Num4 => '4',
            Self::Num5 => '5',
            Self::Num6 => '6',
            Self::Num7 => '7',
            Self::Num8 => '8',
            Self::Num9 => '9',
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::Star => '*',
            Self::Hash => '#',
        }
    }
}

/// Key layout by `[row][column]`, matching the pad's silkscreen
pub const KEYMAP: [[Key; KEYPAD_COLS]; KEYPAD_ROWS] = [
    [Key::Num1, Key::Num2, Key::Num3, Key::A],
    [Key::Num4, Key::Num5, Key::Num6, Key::B],
    [Key::Num7, Key::Num8, Key::Num9, Key::C],
    [Key::Star, Key::Num0, Key::Hash, Key::D],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_mapping_is_bijective() {
        for row in KEYMAP {
            for key in row {
                assert_eq!(Key::from_char(key.as_char()), Some(key));
            }
        }
    }

    #[test]
    fn test_unknown_char() {
        assert_eq!(Key::from_char('E'), None);
        assert_eq!(Key::from_char(' '), None);
    }

    #[test]
    fn test_layout() {
        assert_eq!(KEYMAP[0][3], Key::A);
        assert_eq!(KEYMAP[1][3], Key::B);
        assert_eq!(KEYMAP[3][1], Key::Num0);
        assert_eq!(KEYMAP[3][0].as_char(), '*');
    }
}
