use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use crate::error::AppError;

/// A review keyword a buyer can prioritise.
///
/// Declaration order is the tie-break order used when picking a model's
/// strongest category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Fuel efficiency
    Mileage,
    /// Ride comfort and safety
    Safety,
    /// Cabin and cargo space
    Space,
    Design,
    /// Driving fun
    Fun,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Mileage,
        Category::Safety,
        Category::Space,
        Category::Design,
        Category::Fun,
    ];

    /// Looks a category up by its snake_case name or the Korean label used by
    /// the review forms
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "mileage" | "연비" => Some(Category::Mileage),
            "safety" | "승차감 및 안전" => Some(Category::Safety),
            // "넓은 공" is what older clients send
            "space" | "넓은 공간" | "넓은 공" => Some(Category::Space),
            "design" | "디자인" => Some(Category::Design),
            "fun" | "운전 재미" => Some(Category::Fun),
            _ => None,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Mileage => write!(f, "mileage"),
            Category::Safety => write!(f, "safety"),
            Category::Space => write!(f, "space"),
            Category::Design => write!(f, "design"),
            Category::Fun => write!(f, "fun"),
        }
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_label(s)
            .ok_or_else(|| AppError::InvalidRequest(format!("Unknown priority category: {}", s)))
    }
}

/// What the buyer mainly intends to use the car for.
///
/// Declaration order is the tie-break order used when picking a model's
/// dominant purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    Commute,
    LongDistance,
    Drive,
    WeekendTrip,
    /// Driving with kids
    Family,
}

impl Purpose {
    pub const ALL: [Purpose; 5] = [
        Purpose::Commute,
        Purpose::LongDistance,
        Purpose::Drive,
        Purpose::WeekendTrip,
        Purpose::Family,
    ];

    /// Looks a purpose up by its snake_case name or the Korean label used by
    /// the review forms
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "commute" | "출퇴근용" => Some(Purpose::Commute),
            "long_distance" | "장거리 운전" => Some(Purpose::LongDistance),
            "drive" | "드라이브" => Some(Purpose::Drive),
            "weekend_trip" | "주말여행" => Some(Purpose::WeekendTrip),
            "family" | "자녀와 함께" => Some(Purpose::Family),
            _ => None,
        }
    }
}

impl Display for Purpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Purpose::Commute => write!(f, "commute"),
            Purpose::LongDistance => write!(f, "long_distance"),
            Purpose::Drive => write!(f, "drive"),
            Purpose::WeekendTrip => write!(f, "weekend_trip"),
            Purpose::Family => write!(f, "family"),
        }
    }
}

impl FromStr for Purpose {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Purpose::from_label(s)
            .ok_or_else(|| AppError::InvalidRequest(format!("Unknown purpose: {}", s)))
    }
}
