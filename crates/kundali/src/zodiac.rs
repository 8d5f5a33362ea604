//! Zodiac sign and nakshatra classification of sidereal longitudes.
//!
//! Signs are 12 equal 30 degree segments starting at 0 Aries. Nakshatras
//! are 27 lunar mansions of 13 degrees 20 minutes (360/27), each split
//! into 4 padas.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bodies::Body;
use crate::coordinates::normalize_degrees;

pub const SIGN_SEGMENT_SIZE: f64 = 30.0;
pub const NAKSHATRA_SEGMENT_SIZE: f64 = 360.0 / 27.0;
pub const PADA_SIZE: f64 = NAKSHATRA_SEGMENT_SIZE / 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Sign for an index; wraps modulo 12.
    pub fn from_index(index: u8) -> Sign {
        Self::ALL[(index % 12) as usize]
    }

    /// Index 0 (Aries) to 11 (Pisces).
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// (display name, planetary lord)
const NAKSHATRA_ORDER: [(&str, Body); 27] = [
    ("Ashwini", Body::Ketu),
    ("Bharani", Body::Venus),
    ("Krittika", Body::Sun),
    ("Rohini", Body::Moon),
    ("Mrigashira", Body::Mars),
    ("Ardra", Body::Rahu),
    ("Punarvasu", Body::Jupiter),
    ("Pushya", Body::Saturn),
    ("Ashlesha", Body::Mercury),
    ("Magha", Body::Ketu),
    ("Purva Phalguni", Body::Venus),
    ("Uttara Phalguni", Body::Sun),
    ("Hasta", Body::Moon),
    ("Chitra", Body::Mars),
    ("Swati", Body::Rahu),
    ("Vishakha", Body::Jupiter),
    ("Anuradha", Body::Saturn),
    ("Jyeshtha", Body::Mercury),
    ("Mula", Body::Ketu),
    ("Purva Ashadha", Body::Venus),
    ("Uttara Ashadha", Body::Sun),
    ("Shravana", Body::Moon),
    ("Dhanishta", Body::Mars),
    ("Shatabhisha", Body::Rahu),
    ("Purva Bhadrapada", Body::Jupiter),
    ("Uttara Bhadrapada", Body::Saturn),
    ("Revati", Body::Mercury),
];

/// Display name of the nakshatra at `index` (wraps modulo 27).
pub fn nakshatra_name(index: u8) -> &'static str {
    NAKSHATRA_ORDER[(index % 27) as usize].0
}

/// Ruling body of the nakshatra at `index` (wraps modulo 27).
pub fn nakshatra_lord(index: u8) -> Body {
    NAKSHATRA_ORDER[(index % 27) as usize].1
}

/// Sign, nakshatra and pada of one sidereal longitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacPlacement {
    /// Sidereal longitude in degrees (0-360)
    pub longitude: f64,
    pub sign: Sign,
    pub sign_index: u8,
    /// Degrees into the sign, [0, 30)
    #[serde(rename = "degree")]
    pub degree_in_sign: f64,
    /// Nakshatra index, 0 (Ashwini) to 26 (Revati)
    pub lunar_mansion: u8,
    pub mansion_name: String,
    pub mansion_lord: Body,
    /// Degrees into the nakshatra, [0, 360/27)
    pub position_in_mansion: f64,
    /// Pada, 1 to 4
    pub mansion_quarter: u8,
}

impl ZodiacPlacement {
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub fn mansion_progress(&self) -> f64 {
        self.position_in_mansion / NAKSHATRA_SEGMENT_SIZE
    }
}

/// Split a longitude into `(segment index, offset within segment)`.
///
/// `index * size + offset` reconstructs the input to within float error.
/// A longitude exactly on a boundary (e.g. 120 degrees against a 360/27
/// segment) lands at offset 0 of the upper segment even when
/// `index * size` rounds past it.
fn segment(longitude: f64, size: f64, count: usize) -> (usize, f64) {
    let mut index = (longitude / size).floor();
    let mut offset = longitude - index * size;
    if offset >= size {
        index += 1.0;
        offset -= size;
    }
    (index as usize % count, offset.max(0.0))
}

/// Classify a sidereal longitude. Any real input is normalized first.
pub fn classify(longitude: f64) -> ZodiacPlacement {
    let lon = normalize_degrees(longitude);

    let (sign_index, degree_in_sign) = segment(lon, SIGN_SEGMENT_SIZE, 12);
    let (mansion_index, position_in_mansion) = segment(lon, NAKSHATRA_SEGMENT_SIZE, 27);
    // Clamp absorbs float error right at a pada boundary
    let quarter = ((position_in_mansion / PADA_SIZE).floor() as i64 + 1).clamp(1, 4) as u8;

    let (mansion_name, mansion_lord) = NAKSHATRA_ORDER[mansion_index];
    let sign = Sign::from_index(sign_index as u8);

    ZodiacPlacement {
        longitude: lon,
        sign,
        sign_index: sign.index(),
        degree_in_sign,
        lunar_mansion: mansion_index as u8,
        mansion_name: mansion_name.to_string(),
        mansion_lord,
        position_in_mansion,
        mansion_quarter: quarter,
    }
}
