use crate::domain::model::{Package, PriceQuote};

/// Fixed 8% tax rate, applied to the discounted price.
pub const TAX_RATE: f64 = 0.08;

/// Derives the price breakdown for the selected package.
///
/// Pure and stateless; an absent package yields an all-zero quote. Rounding
/// is half-up (ties away from zero; every amount here is non-negative), so
/// $9.60 of tax becomes $10 and a 32.5% discount displays as 33%.
pub fn quote(package: Option<&Package>) -> PriceQuote {
    let Some(p) = package else {
        return PriceQuote::default();
    };

    let (discount, discount_percent) = match p.original_price {
        Some(original) => {
            let saved = original - p.price;
            let percent = (saved as f64 * 100.0 / original as f64).round() as i64;
            (saved, percent)
        }
        None => (0, 0),
    };

    let per_session = if p.sessions == 0 {
        0
    } else {
        (p.price as f64 / p.sessions as f64).round() as i64
    };
    let tax = (p.price as f64 * TAX_RATE).round() as i64;

    PriceQuote {
        discount,
        discount_percent,
        per_session,
        tax,
        total: p.price + tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(price: i64, sessions: u32, original_price: Option<i64>) -> Package {
        Package {
            id: "test".to_string(),
            name: "Test".to_string(),
            description: String::new(),
            sessions,
            price,
            original_price,
            features: vec![],
            popular: false,
            recommended: false,
        }
    }

    #[test]
    fn test_absent_package_quotes_all_zeros() {
        assert_eq!(quote(None), PriceQuote::default());
    }

    #[test]
    fn test_no_original_price_means_no_discount() {
        let p = package(120, 4, None);
        let q = quote(Some(&p));
        assert_eq!(q.discount, 0);
        assert_eq!(q.discount_percent, 0);
        assert_eq!(q.per_session, 30);
        assert_eq!(q.tax, 10);
        assert_eq!(q.total, 130);
    }

    #[test]
    fn test_starter_quote() {
        let p = package(120, 4, Some(160));
        let q = quote(Some(&p));
        assert_eq!(q.discount, 40);
        assert_eq!(q.discount_percent, 25);
        assert_eq!(q.per_session, 30);
        assert_eq!(q.tax, 10); // 9.6 rounds up
        assert_eq!(q.total, 130);
    }

    #[test]
    fn test_popular_quote_rounds_half_up() {
        let p = package(324, 12, Some(480));
        let q = quote(Some(&p));
        assert_eq!(q.discount, 156);
        assert_eq!(q.discount_percent, 33); // 32.5 rounds up
        assert_eq!(q.per_session, 27);
        assert_eq!(q.tax, 26); // 25.92
        assert_eq!(q.total, 350);
    }

    #[test]
    fn test_intensive_quote() {
        let p = package(600, 24, Some(960));
        let q = quote(Some(&p));
        assert_eq!(q.discount, 360);
        assert_eq!(q.discount_percent, 38); // 37.5 rounds up
        assert_eq!(q.per_session, 25);
        assert_eq!(q.tax, 48);
        assert_eq!(q.total, 648);
    }

    #[test]
    fn test_tax_applies_to_discounted_price() {
        // Tax is computed off the sale price, never the crossed-out one.
        let discounted = package(100, 4, Some(1000));
        let q = quote(Some(&discounted));
        assert_eq!(q.tax, 8);
        assert_eq!(q.total, 108);
    }

    #[test]
    fn test_discount_never_negative_for_valid_packages() {
        for p in Package::standard_catalog() {
            let q = quote(Some(&p));
            assert!(q.discount >= 0);
            assert_eq!(
                q.discount,
                p.original_price.map(|o| o - p.price).unwrap_or(0)
            );
        }
    }
}
