use serde::{Deserialize, Serialize};

use crate::model::shot::coerce_number;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Club {
    pub key: String,
    pub label: String,
    pub carry: f64,
}

impl Club {
    #[must_use]
    pub fn new(key: &str, label: &str, carry: f64) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            carry: coerce_carry(carry),
        }
    }
}

/// Carries are never negative, never NaN and never `-0.0`, which sorts ahead of `0.0`.
#[must_use]
pub fn coerce_carry(carry: f64) -> f64 {
    if carry.is_finite() && carry > 0.0 { carry } else { 0.0 }
}

/// Parse a carry typed into the bag editor. Anything unparseable becomes 0.
#[must_use]
pub fn parse_carry(raw: &str) -> f64 {
    coerce_carry(coerce_number(raw))
}

const DEFAULT_BAG: [(&str, &str, f64); 11] = [
    ("driver", "Driver", 250.0),
    ("5w", "5 Wood", 220.0),
    ("4i", "4 Iron", 200.0),
    ("5i", "5 Iron", 180.0),
    ("6i", "6 Iron", 170.0),
    ("7i", "7 Iron", 150.0),
    ("8i", "8 Iron", 140.0),
    ("9i", "9 Iron", 130.0),
    ("p", "Pitching Wedge (P)", 120.0),
    ("48", "48° Wedge", 100.0),
    ("56", "56° Wedge", 80.0),
];

/// Ordered set of clubs, unique by key. Order is the order the player listed them in.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(from = "Vec<Club>", into = "Vec<Club>")]
pub struct Bag {
    clubs: Vec<Club>,
}

impl Default for Bag {
    fn default() -> Self {
        Self {
            clubs: DEFAULT_BAG
                .iter()
                .map(|(key, label, carry)| Club::new(key, label, *carry))
                .collect(),
        }
    }
}

impl From<Vec<Club>> for Bag {
    fn from(clubs: Vec<Club>) -> Self {
        Self::new(clubs)
    }
}

impl From<Bag> for Vec<Club> {
    fn from(bag: Bag) -> Self {
        bag.clubs
    }
}

impl Bag {
    /// Build a bag from clubs, keeping the first club seen for any duplicate key.
    #[must_use]
    pub fn new(clubs: Vec<Club>) -> Self {
        let mut unique: Vec<Club> = Vec::with_capacity(clubs.len());
        for club in clubs {
            if unique.iter().any(|c| c.key == club.key) {
                continue;
            }
            unique.push(Club {
                carry: coerce_carry(club.carry),
                ..club
            });
        }
        Self { clubs: unique }
    }

    #[must_use]
    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Club> {
        self.clubs.iter().find(|c| c.key == key)
    }

    /// Returns a new bag with `key`'s carry replaced. Unknown keys leave the bag as is.
    #[must_use]
    pub fn with_carry(&self, key: &str, carry: f64) -> Self {
        let carry = coerce_carry(carry);
        Self {
            clubs: self
                .clubs
                .iter()
                .map(|c| {
                    if c.key == key {
                        Club { carry, ..c.clone() }
                    } else {
                        c.clone()
                    }
                })
                .collect(),
        }
    }

    /// Clubs shortest to longest. Equal carries keep their bag order.
    #[must_use]
    pub fn sorted_by_carry(&self) -> Vec<&Club> {
        let mut sorted: Vec<&Club> = self.clubs.iter().collect();
        sorted.sort_by(|a, b| a.carry.total_cmp(&b.carry));
        sorted
    }

    #[must_use]
    pub fn longest(&self) -> Option<&Club> {
        self.sorted_by_carry().last().copied()
    }
}
