//! Demo catalog data: nine brands with one product in every category.

use crate::category::Category;

/// Prices per brand, columns in [`Category::ALL`] order
/// (TOP, OUTER, PANTS, SNEAKERS, BAG, HAT, SOCKS, ACCESSORY).
pub const DEMO_PRICES: [(&str, [u64; 8]); 9] = [
    ("A", [11200, 5500, 4200, 9000, 2000, 1700, 1800, 2300]),
    ("B", [10500, 5900, 3800, 9100, 2100, 2000, 2000, 2200]),
    ("C", [10000, 6200, 3300, 9200, 2200, 1900, 2200, 2100]),
    ("D", [10100, 5100, 3000, 9500, 2500, 1500, 2400, 2000]),
    ("E", [10700, 5000, 3800, 9900, 2300, 1800, 2100, 2100]),
    ("F", [11200, 7200, 4000, 9300, 2100, 1600, 2300, 1900]),
    ("G", [10500, 5800, 3900, 9000, 2200, 1700, 2100, 2000]),
    ("H", [10800, 6300, 3100, 9700, 2100, 1600, 2000, 2000]),
    ("I", [11400, 6700, 3200, 9500, 2400, 1700, 1700, 2400]),
];

/// Every demo listing as `(brand, category, price)`.
pub fn demo_listings() -> impl Iterator<Item = (&'static str, Category, u64)> {
    DEMO_PRICES.into_iter().flat_map(|(brand, prices)| {
        Category::ALL
            .into_iter()
            .zip(prices)
            .map(move |(category, price)| (brand, category, price))
    })
}
