//! Day-of-weekend selection for duty placement.

use serde::{Deserialize, Serialize};

/// The two days a weekend duty can fall on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekendDay {
    /// The first day of the weekend pair.
    Saturday,
    /// The second day of the weekend pair.
    Sunday,
}

impl WeekendDay {
    /// Both days in calendar order.
    pub const ALL: [WeekendDay; 2] = [Self::Saturday, Self::Sunday];

    /// Returns the other day of the same weekend.
    pub fn opposite(self) -> Self {
        match self {
            Self::Saturday => Self::Sunday,
            Self::Sunday => Self::Saturday,
        }
    }
}

impl std::fmt::Display for WeekendDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Saturday => write!(f, "saturday"),
            Self::Sunday => write!(f, "sunday"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite() {
        assert_eq!(WeekendDay::Saturday.opposite(), WeekendDay::Sunday);
        assert_eq!(WeekendDay::Sunday.opposite(), WeekendDay::Saturday);
    }

    #[test]
    fn all_ordering() {
        assert_eq!(WeekendDay::ALL, [WeekendDay::Saturday, WeekendDay::Sunday]);
    }

    #[test]
    fn display() {
        assert_eq!(WeekendDay::Saturday.to_string(), "saturday");
        assert_eq!(WeekendDay::Sunday.to_string(), "sunday");
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&WeekendDay::Saturday).unwrap();
        assert_eq!(json, "\"saturday\"");
        let day: WeekendDay = serde_json::from_str("\"sunday\"").unwrap();
        assert_eq!(day, WeekendDay::Sunday);
    }

    #[test]
    fn trait_assertions() {
        fn assert_copy<T: Copy>() {}
        fn assert_eq_trait<T: Eq>() {}
        fn assert_hash<T: std::hash::Hash>() {}
        assert_copy::<WeekendDay>();
        assert_eq_trait::<WeekendDay>();
        assert_hash::<WeekendDay>();
    }
}
