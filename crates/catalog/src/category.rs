use core::str::FromStr;

use serde::{Deserialize, Serialize};

use coordinate_core::DomainError;

/// Product category (closed set).
///
/// Wire form is the upper-case name (`"TOP"`, `"SNEAKERS"`, ...). Parsing from
/// text is case-insensitive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Top,
    Outer,
    Pants,
    Sneakers,
    Bag,
    Hat,
    Socks,
    Accessory,
}

impl Category {
    /// Every category, in catalog display order.
    pub const ALL: [Category; 8] = [
        Category::Top,
        Category::Outer,
        Category::Pants,
        Category::Sneakers,
        Category::Bag,
        Category::Hat,
        Category::Socks,
        Category::Accessory,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Top => "TOP",
            Category::Outer => "OUTER",
            Category::Pants => "PANTS",
            Category::Sneakers => "SNEAKERS",
            Category::Bag => "BAG",
            Category::Hat => "HAT",
            Category::Socks => "SOCKS",
            Category::Accessory => "ACCESSORY",
        }
    }

    /// Parse a comma-separated list (`"top, OUTER"`), skipping blank segments.
    pub fn parse_list(s: &str) -> Result<Vec<Category>, DomainError> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Category::from_str)
            .collect()
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::validation(format!("unknown category: {wanted:?}")))
    }
}
