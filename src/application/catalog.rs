// src/application/catalog.rs
// Static merchant taxonomy used by the purchase synthesizer

use rand::Rng;

/// Fallback returned for any category the catalog does not know. The
/// synthesizer must never fail just because a category is unrecognized.
pub const GENERIC_MERCHANT: (&str, &str) = ("merchant_generic", "Generic Merchant");

/// Category -> (merchant id, merchant display name). Built once into the
/// binary; read-only for the life of the process.
static MERCHANTS: &[(&str, &[(&str, &str)])] = &[
    (
        "restaurants",
        &[
            ("merchant_001", "Chick-fil-A"),
            ("merchant_002", "McDonalds"),
            ("merchant_003", "Chipotle"),
            ("merchant_004", "Olive Garden"),
        ],
    ),
    (
        "travel",
        &[
            ("merchant_005", "United Airlines"),
            ("merchant_006", "Delta"),
            ("merchant_007", "Southwest"),
            ("merchant_008", "American Airlines"),
        ],
    ),
    (
        "hotel",
        &[
            ("merchant_009", "Marriott"),
            ("merchant_010", "Hilton"),
            ("merchant_011", "Hyatt"),
            ("merchant_012", "Holiday Inn"),
        ],
    ),
    (
        "streaming-services",
        &[
            ("merchant_013", "Netflix"),
            ("merchant_014", "Spotify"),
            ("merchant_015", "Disney+"),
            ("merchant_016", "Hulu"),
        ],
    ),
    (
        "groceries",
        &[
            ("merchant_017", "Whole Foods"),
            ("merchant_018", "Trader Joes"),
            ("merchant_019", "HEB"),
            ("merchant_020", "Kroger"),
        ],
    ),
    (
        "gas",
        &[
            ("merchant_021", "Shell"),
            ("merchant_022", "Exxon"),
            ("merchant_023", "Chevron"),
            ("merchant_024", "BP"),
        ],
    ),
    (
        "online-shopping",
        &[
            ("merchant_025", "Amazon"),
            ("merchant_026", "eBay"),
            ("merchant_027", "Etsy"),
            ("merchant_028", "Target.com"),
        ],
    ),
    (
        "airport-lounge",
        &[
            ("merchant_029", "Delta Sky Club"),
            ("merchant_030", "United Club"),
        ],
    ),
];

/// All known category names, in catalog order.
pub fn categories() -> impl Iterator<Item = &'static str> {
    MERCHANTS.iter().map(|(category, _)| *category)
}

/// The merchants of a category, or an empty slice for an unknown one.
pub fn merchants(category: &str) -> &'static [(&'static str, &'static str)] {
    MERCHANTS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, merchants)| *merchants)
        .unwrap_or(&[])
}

/// Draw a category uniformly at random from the full catalog.
pub fn random_category<R: Rng>(rng: &mut R) -> &'static str {
    MERCHANTS[rng.gen_range(0..MERCHANTS.len())].0
}

/// Pick a merchant uniformly at random within `category`. Unknown or
/// empty categories resolve to [`GENERIC_MERCHANT`].
pub fn pick_merchant<R: Rng>(rng: &mut R, category: &str) -> (&'static str, &'static str) {
    let pool = merchants(category);
    if pool.is_empty() {
        return GENERIC_MERCHANT;
    }
    pool[rng.gen_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn every_category_has_merchants() {
        for category in categories() {
            assert!(
                !merchants(category).is_empty(),
                "category {category} has no merchants"
            );
        }
    }

    #[test]
    fn picked_merchant_belongs_to_its_category() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        for category in categories() {
            for _ in 0..20 {
                let picked = pick_merchant(&mut rng, category);
                assert!(
                    merchants(category).contains(&picked),
                    "{picked:?} not in {category}"
                );
            }
        }
    }

    #[test]
    fn unknown_category_falls_back_to_generic_merchant() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        assert_eq!(pick_merchant(&mut rng, "utilities"), GENERIC_MERCHANT);
        assert_eq!(pick_merchant(&mut rng, ""), GENERIC_MERCHANT);
    }
}
