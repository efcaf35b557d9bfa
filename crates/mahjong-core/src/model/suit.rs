use core::fmt;
use serde::{Deserialize, Serialize};

/// Tile category: four sequential suits carrying ranks 1-9, plus the seven
/// honor categories whose tiles carry no rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Wan = 0,
    Tiao = 1,
    Bing = 2,
    Suo = 3,
    EastWind = 4,
    SouthWind = 5,
    WestWind = 6,
    NorthWind = 7,
    RedDragon = 8,
    GreenDragon = 9,
    WhiteDragon = 10,
}

impl Suit {
    pub const ALL: [Suit; 11] = [
        Suit::Wan,
        Suit::Tiao,
        Suit::Bing,
        Suit::Suo,
        Suit::EastWind,
        Suit::SouthWind,
        Suit::WestWind,
        Suit::NorthWind,
        Suit::RedDragon,
        Suit::GreenDragon,
        Suit::WhiteDragon,
    ];

    pub const SEQUENTIAL: [Suit; 4] = [Suit::Wan, Suit::Tiao, Suit::Bing, Suit::Suo];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Suit::Wan),
            1 => Some(Suit::Tiao),
            2 => Some(Suit::Bing),
            3 => Some(Suit::Suo),
            4 => Some(Suit::EastWind),
            5 => Some(Suit::SouthWind),
            6 => Some(Suit::WestWind),
            7 => Some(Suit::NorthWind),
            8 => Some(Suit::RedDragon),
            9 => Some(Suit::GreenDragon),
            10 => Some(Suit::WhiteDragon),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_sequential(self) -> bool {
        matches!(self, Suit::Wan | Suit::Tiao | Suit::Bing | Suit::Suo)
    }

    /// Name used by tile-code resource files.
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Wan => "WAN",
            Suit::Tiao => "TIAO",
            Suit::Bing => "BING",
            Suit::Suo => "SUO",
            Suit::EastWind => "EAST",
            Suit::SouthWind => "SOUTH",
            Suit::WestWind => "WEST",
            Suit::NorthWind => "NORTH",
            Suit::RedDragon => "RED",
            Suit::GreenDragon => "GREEN",
            Suit::WhiteDragon => "WHITE",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Suit::ALL.iter().copied().find(|suit| suit.name() == name)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Suit::Wan => "W",
            Suit::Tiao => "T",
            Suit::Bing => "B",
            Suit::Suo => "S",
            Suit::EastWind => "E",
            Suit::SouthWind => "S",
            Suit::WestWind => "W",
            Suit::NorthWind => "N",
            Suit::RedDragon => "Z1",
            Suit::GreenDragon => "Z2",
            Suit::WhiteDragon => "Z3",
        };
        f.write_str(symbol)
    }
}
