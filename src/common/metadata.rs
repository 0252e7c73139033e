use std::fmt::{Display, Formatter};
use std::ops::{Deref, Not};

use super::error::{QRError, QRResult};

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Color {
    Dark,
    Light,
}

impl Color {
    pub fn select<T>(self, dark: T, light: T) -> T {
        match self {
            Self::Dark => dark,
            Self::Light => light,
        }
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl From<bool> for Color {
    fn from(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

// Error correction level
//------------------------------------------------------------------------------

/// Error correction level. Discriminants are the two-bit values the level is
/// identified by on the wire, which is why they are not in L, M, Q, H order.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ECLevel {
    L = 1,
    M = 0,
    Q = 3,
    H = 2,
}

// Indexed by discriminant, yields the capacity table column.
static CAPACITY_COLUMN: [usize; 4] = [1, 0, 3, 2];

impl ECLevel {
    /// Column of the capacity table holding this level's limits:
    /// L -> 0, M -> 1, Q -> 2, H -> 3.
    pub fn capacity_column(self) -> usize {
        CAPACITY_COLUMN[self as usize]
    }
}

impl TryFrom<u8> for ECLevel {
    type Error = QRError;
    fn try_from(bits: u8) -> QRResult<Self> {
        match bits {
            0 => Ok(Self::M),
            1 => Ok(Self::L),
            2 => Ok(Self::H),
            3 => Ok(Self::Q),
            _ => Err(QRError::InvalidECLevel),
        }
    }
}


// Version
//------------------------------------------------------------------------------

pub const MAX_VERSION: u8 = 16;

// Maximum payload length in bytes per version, columns ordered L, M, Q, H.
static CAPACITY_TABLE: [[usize; 4]; MAX_VERSION as usize] = [
    [17, 14, 11, 7],
    [32, 26, 20, 14],
    [53, 42, 32, 24],
    [78, 62, 46, 34],
    [106, 84, 60, 44],
    [134, 106, 74, 58],
    [154, 122, 86, 64],
    [192, 152, 108, 84],
    [230, 180, 130, 98],
    [271, 213, 151, 119],
    [321, 251, 177, 137],
    [367, 287, 203, 155],
    [425, 331, 241, 177],
    [458, 362, 258, 194],
    [520, 412, 292, 220],
    [586, 450, 322, 250],
];

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    pub fn new(ver: u8) -> QRResult<Self> {
        if (1..=MAX_VERSION).contains(&ver) {
            Ok(Self(ver))
        } else {
            Err(QRError::InvalidVersion)
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX_VERSION).map(Self)
    }

    pub const fn max() -> Self {
        Self(MAX_VERSION)
    }

    pub const fn width(self) -> usize {
        self.0 as usize * 4 + 17
    }

    pub fn capacity(self, ecl: ECLevel) -> usize {
        CAPACITY_TABLE[self.0 as usize - 1][ecl.capacity_column()]
    }

    /// Smallest version whose capacity at `ecl` covers `data_len` bytes.
    pub fn from_data_len(data_len: usize, ecl: ECLevel) -> QRResult<Self> {
        Self::all().find(|v| v.capacity(ecl) >= data_len).ok_or(QRError::CapacityExceeded)
    }
}

impl Deref for Version {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
