//! Cafe Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Seating capacity bucket offered on the submission form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seats {
    #[serde(rename = "0-10")]
    UpTo10,
    #[serde(rename = "10-20")]
    From10To20,
    #[serde(rename = "20-30")]
    From20To30,
    #[serde(rename = "40-50")]
    From40To50,
    #[serde(rename = "50+")]
    Over50,
}

impl Seats {
    /// All choices, in the order the form lists them
    pub const ALL: [Seats; 5] = [
        Seats::UpTo10,
        Seats::From10To20,
        Seats::From20To30,
        Seats::From40To50,
        Seats::Over50,
    ];

    /// Stored and displayed label
    pub const fn as_str(&self) -> &'static str {
        match self {
            Seats::UpTo10 => "0-10",
            Seats::From10To20 => "10-20",
            Seats::From20To30 => "20-30",
            Seats::From40To50 => "40-50",
            Seats::Over50 => "50+",
        }
    }
}

impl fmt::Display for Seats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label is not one of [`Seats::ALL`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid seat range")]
pub struct InvalidSeats(pub String);

impl FromStr for Seats {
    type Err = InvalidSeats;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Seats::ALL
            .into_iter()
            .find(|seats| seats.as_str() == s)
            .ok_or_else(|| InvalidSeats(s.to_string()))
    }
}

/// Cafe entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    /// City the cafe is in
    pub location: String,
    pub seats: Seats,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    /// Free text such as "£2.50"
    pub coffee_price: Option<String>,
}

/// Create cafe payload (already validated)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CafeCreate {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: Seats,
    #[serde(default)]
    pub has_toilet: bool,
    #[serde(default)]
    pub has_wifi: bool,
    #[serde(default)]
    pub has_sockets: bool,
    #[serde(default)]
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}
