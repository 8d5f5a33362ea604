//! Whole-sign houses: the ascendant's sign is house 1, the next sign house 2, and so on.

use serde::{Deserialize, Serialize};

use crate::bodies::Body;
use crate::zodiac::Sign;

/// House (1-12) of a sign given the ascendant's sign.
pub fn house_for_sign(sign_index: u8, ascendant_sign_index: u8) -> u8 {
    let offset = (sign_index as i32 - ascendant_sign_index as i32).rem_euclid(12);
    offset as u8 + 1
}

/// Sign index occupying a house (1-12) given the ascendant's sign.
pub fn sign_for_house(house: u8, ascendant_sign_index: u8) -> u8 {
    ((ascendant_sign_index as u32 + house as u32 + 11) % 12) as u8
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    pub number: u8,
    pub sign: Sign,
    pub sign_index: u8,
    /// Bodies placed in this house, in chart order.
    pub occupants: Vec<Body>,
}

/// Build the 12-house table from the ascendant sign and each body's sign.
pub fn whole_sign_houses(ascendant_sign_index: u8, body_signs: &[(Body, u8)]) -> Vec<House> {
    (1..=12u8)
        .map(|number| {
            let sign_index = sign_for_house(number, ascendant_sign_index);
            let occupants = body_signs
                .iter()
                .filter(|(_, sign)| *sign % 12 == sign_index)
                .map(|(body, _)| *body)
                .collect();
            House {
                number,
                sign: Sign::from_index(sign_index),
                sign_index,
                occupants,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascendant_sign_is_first_house() {
        for asc in 0..12 {
            assert_eq!(house_for_sign(asc, asc), 1);
        }
    }

    #[test]
    fn test_wraps_behind_ascendant() {
        // Ascendant in Leo, body in Cancer: twelfth house
        assert_eq!(house_for_sign(3, 4), 12);
        // Ascendant in Pisces, body in Aries: second house
        assert_eq!(house_for_sign(0, 11), 2);
    }

    #[test]
    fn test_sign_for_house_inverts_house_for_sign() {
        for asc in 0..12 {
            for house in 1..=12 {
                assert_eq!(house_for_sign(sign_for_house(house, asc), asc), house);
            }
        }
    }

    #[test]
    fn test_house_table() {
        let houses = whole_sign_houses(
            8,
            &[(Body::Sun, 8), (Body::Moon, 6), (Body::Mars, 8), (Body::Saturn, 0)],
        );
        assert_eq!(houses.len(), 12);
        assert_eq!(houses[0].sign, Sign::Sagittarius);
        assert_eq!(houses[0].occupants, vec![Body::Sun, Body::Mars]);
        assert_eq!(houses[10].occupants, vec![Body::Moon]);
        assert_eq!(houses[4].sign, Sign::Aries);
        assert_eq!(houses[4].occupants, vec![Body::Saturn]);
    }
}
