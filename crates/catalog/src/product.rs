use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use coordinate_core::{DomainError, DomainResult, Entity, RecordId, ValueObject};

use crate::brand::BrandName;
use crate::category::Category;

/// Product identifier (generated on registration).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub RecordId);

impl ProductId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }

    pub fn generate() -> Self {
        Self(RecordId::new())
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Price in the smallest currency unit. Always positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Price(u64);

impl Price {
    pub fn new(amount: u64) -> DomainResult<Self> {
        if amount == 0 {
            return Err(DomainError::validation("price must be positive"));
        }
        Ok(Self(amount))
    }

    pub fn amount(self) -> u64 {
        self.0
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<u64> for Price {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for u64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

/// Command payload shared by product registration and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterProduct {
    pub brand: String,
    pub category: Category,
    pub price: u64,
}

/// Entity: Product.
///
/// Belongs to exactly one brand and one category. Immutable; updates produce a
/// new value through [`Product::revise`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    brand: BrandName,
    category: Category,
    price: Price,
    registered_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Validate a registration command. Brand existence and duplicate listings
    /// are checked by the store.
    pub fn register(id: ProductId, cmd: &RegisterProduct, at: DateTime<Utc>) -> DomainResult<Self> {
        Ok(Self {
            id,
            brand: BrandName::new(&cmd.brand)?,
            category: cmd.category,
            price: Price::new(cmd.price)?,
            registered_at: at,
            updated_at: at,
        })
    }

    /// Build a product directly from validated parts (fixtures, seed data).
    pub fn listed(brand: BrandName, category: Category, price: Price) -> Self {
        let now = Utc::now();
        Self {
            id: ProductId::generate(),
            brand,
            category,
            price,
            registered_at: now,
            updated_at: now,
        }
    }

    /// Return an updated copy carrying the command's brand, category and price.
    pub fn revise(&self, cmd: &RegisterProduct, at: DateTime<Utc>) -> DomainResult<Self> {
        Ok(Self {
            id: self.id,
            brand: BrandName::new(&cmd.brand)?,
            category: cmd.category,
            price: Price::new(cmd.price)?,
            registered_at: self.registered_at,
            updated_at: at,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn brand(&self) -> &BrandName {
        &self.brand
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// True when both products list the same brand, category and price.
    pub fn same_listing(&self, other: &Product) -> bool {
        self.brand == other.brand && self.category == other.category && self.price == other.price
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn register_cmd(brand: &str, category: Category, price: u64) -> RegisterProduct {
        RegisterProduct {
            brand: brand.to_string(),
            category,
            price,
        }
    }

    #[test]
    fn register_product_keeps_command_fields() {
        let id = ProductId::generate();
        let product = Product::register(id, &register_cmd("A", Category::Top, 11200), test_time()).unwrap();

        assert_eq!(product.id_typed(), id);
        assert_eq!(product.brand().as_str(), "A");
        assert_eq!(product.category(), Category::Top);
        assert_eq!(product.price().amount(), 11200);
        assert_eq!(product.registered_at(), product.updated_at());
    }

    #[test]
    fn register_product_rejects_zero_price() {
        let err = Product::register(ProductId::generate(), &register_cmd("A", Category::Top, 0), test_time())
            .unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("price") => {}
            _ => panic!("Expected Validation error for zero price"),
        }
    }

    #[test]
    fn register_product_rejects_blank_brand() {
        let err = Product::register(ProductId::generate(), &register_cmd("  ", Category::Bag, 2000), test_time())
            .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank brand"),
        }
    }

    #[test]
    fn revise_keeps_identity_and_registration_time() {
        let registered = test_time();
        let original =
            Product::register(ProductId::generate(), &register_cmd("A", Category::Top, 11200), registered).unwrap();

        let later = registered + chrono::Duration::minutes(5);
        let revised = original.revise(&register_cmd("B", Category::Outer, 5900), later).unwrap();

        assert_eq!(revised.id_typed(), original.id_typed());
        assert_eq!(revised.registered_at(), registered);
        assert_eq!(revised.updated_at(), later);
        assert_eq!(revised.brand().as_str(), "B");
        assert_eq!(revised.category(), Category::Outer);
        assert_eq!(revised.price().amount(), 5900);
    }

    #[test]
    fn revise_does_not_mutate_original() {
        let original =
            Product::register(ProductId::generate(), &register_cmd("A", Category::Top, 11200), test_time()).unwrap();
        let before = original.clone();
        let _ = original.revise(&register_cmd("A", Category::Top, 9000), test_time()).unwrap();
        assert_eq!(original, before);
    }

    #[test]
    fn same_listing_ignores_identity() {
        let a = Product::register(ProductId::generate(), &register_cmd("A", Category::Hat, 1700), test_time()).unwrap();
        let b = Product::register(ProductId::generate(), &register_cmd("A", Category::Hat, 1700), test_time()).unwrap();
        let c = Product::register(ProductId::generate(), &register_cmd("A", Category::Hat, 1800), test_time()).unwrap();

        assert!(a.same_listing(&b));
        assert!(!a.same_listing(&c));
    }

    #[test]
    fn product_id_parses_display_form() {
        let id = ProductId::generate();
        assert_eq!(id.to_string().parse::<ProductId>().unwrap(), id);
        assert!("123".parse::<ProductId>().is_err());
    }

    #[test]
    fn price_deserialization_rejects_zero() {
        assert!(serde_json::from_str::<Price>("0").is_err());
        assert_eq!(serde_json::from_str::<Price>("4500").unwrap().amount(), 4500);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: every positive amount is a valid price and keeps its value.
            #[test]
            fn positive_amounts_are_valid_prices(amount in 1u64..=u64::MAX) {
                let price = Price::new(amount).unwrap();
                prop_assert_eq!(price.amount(), amount);
            }

            /// Property: price ordering follows amount ordering.
            #[test]
            fn price_order_matches_amount_order(a in 1u64..1_000_000, b in 1u64..1_000_000) {
                let pa = Price::new(a).unwrap();
                let pb = Price::new(b).unwrap();
                prop_assert_eq!(pa.cmp(&pb), a.cmp(&b));
            }

            /// Property: revise is deterministic (same input = same output).
            #[test]
            fn revise_is_deterministic(
                brand in "[A-Za-z][A-Za-z0-9 ]{0,30}",
                idx in 0usize..8,
                price in 1u64..10_000_000
            ) {
                let at = Utc::now();
                let original = Product::register(
                    ProductId::generate(),
                    &register_cmd("Seed", Category::Top, 1000),
                    at,
                ).unwrap();
                let cmd = register_cmd(&brand, Category::ALL[idx], price);

                let first = original.revise(&cmd, at).unwrap();
                let second = original.revise(&cmd, at).unwrap();
                prop_assert_eq!(first, second);
            }
        }
    }
}
