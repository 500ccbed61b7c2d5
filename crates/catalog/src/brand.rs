use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use coordinate_core::{DomainError, DomainResult, Entity, ValueObject};

/// Longest accepted brand name, in characters.
pub const MAX_BRAND_NAME_LEN: usize = 100;

/// Brand name: the brand's identity. Trimmed, non-empty, immutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BrandName(String);

impl BrandName {
    pub fn new(raw: impl AsRef<str>) -> DomainResult<Self> {
        let name = raw.as_ref().trim();
        if name.is_empty() {
            return Err(DomainError::validation("brand name cannot be empty"));
        }
        if name.chars().count() > MAX_BRAND_NAME_LEN {
            return Err(DomainError::validation(format!(
                "brand name cannot exceed {MAX_BRAND_NAME_LEN} characters"
            )));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for BrandName {}

impl core::fmt::Display for BrandName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for BrandName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BrandName> for String {
    fn from(value: BrandName) -> Self {
        value.0
    }
}

/// Command: RegisterBrand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterBrand {
    pub name: String,
}

/// Entity: Brand.
///
/// Products reference brands by name; removing a brand removes its products
/// (enforced by the catalog store).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    name: BrandName,
    registered_at: DateTime<Utc>,
}

impl Brand {
    /// Validate a registration command. Uniqueness is checked by the store.
    pub fn register(cmd: &RegisterBrand, at: DateTime<Utc>) -> DomainResult<Self> {
        Ok(Self {
            name: BrandName::new(&cmd.name)?,
            registered_at: at,
        })
    }

    pub fn name(&self) -> &BrandName {
        &self.name
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

impl Entity for Brand {
    type Id = BrandName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_trims_the_name() {
        let brand = Brand::register(
            &RegisterBrand {
                name: "  Musinsa Standard ".to_string(),
            },
            Utc::now(),
        )
        .unwrap();
        assert_eq!(brand.name().as_str(), "Musinsa Standard");
        assert_eq!(brand.id(), brand.name());
    }

    #[test]
    fn register_rejects_blank_name() {
        let err = Brand::register(&RegisterBrand { name: "   ".to_string() }, Utc::now()).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank name"),
        }
    }

    #[test]
    fn rejects_overlong_name() {
        let long = "x".repeat(MAX_BRAND_NAME_LEN + 1);
        assert!(BrandName::new(long).is_err());
        assert!(BrandName::new("x".repeat(MAX_BRAND_NAME_LEN)).is_ok());
    }

    #[test]
    fn names_order_lexically() {
        let mut names = vec![
            BrandName::new("C").unwrap(),
            BrandName::new("A").unwrap(),
            BrandName::new("B").unwrap(),
        ];
        names.sort();
        let ordered: Vec<_> = names.iter().map(BrandName::as_str).collect();
        assert_eq!(ordered, vec!["A", "B", "C"]);
    }

    #[test]
    fn deserialization_validates() {
        assert!(serde_json::from_str::<BrandName>("\"  \"").is_err());
        let ok: BrandName = serde_json::from_str("\" A \"").unwrap();
        assert_eq!(ok.as_str(), "A");
    }
}
