use serde::{Deserialize, Serialize};

/// One rentable skip product, as the catalog endpoint describes it.
///
/// Every field below is required and type-checked during deserialization;
/// fields the endpoint sends beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skip {
    pub id: u32,
    pub size: u32,
    pub hire_period_days: u32,
    pub price_before_vat: f64,
    pub vat: f64,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
}

impl Skip {
    /// Total customer price. Plain addition; the endpoint owns any rounding.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.price_before_vat + self.vat
    }

    /// Skips that cannot take heavy waste are excluded from selection.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        self.allows_heavy_waste
    }

    /// Placement restricted to private property. Surfaced as a warning only.
    #[must_use]
    pub const fn road_restricted(&self) -> bool {
        !self.allowed_on_road
    }
}

/// The skip list available for one postcode/area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SkipCatalog(pub Vec<Skip>);

impl SkipCatalog {
    #[must_use]
    pub const fn empty() -> Self {
        Self(vec![])
    }

    /// Parse a catalog payload.
    ///
    /// # Errors
    ///
    /// Returns an error unless the body is a JSON array whose every element
    /// is a well-formed skip.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let skips: Vec<Skip> = serde_json::from_str(json)?;
        Ok(Self(skips))
    }

    #[must_use]
    pub fn get_by_id(&self, id: u32) -> Option<&Skip> {
        self.0.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Skip> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: u32, heavy: bool) -> Skip {
        Skip {
            id,
            size: 4,
            hire_period_days: 14,
            price_before_vat: 200.0,
            vat: 40.0,
            allowed_on_road: true,
            allows_heavy_waste: heavy,
        }
    }

    #[test]
    fn total_price_is_plain_addition() {
        assert_eq!(sample(1, true).total_price(), 240.0);

        let fractional = Skip {
            price_before_vat: 278.0,
            vat: 55.6,
            ..sample(2, true)
        };
        assert_eq!(fractional.total_price(), 278.0 + 55.6);
    }

    #[test]
    fn heavy_waste_flag_gates_selectability() {
        assert!(sample(1, true).is_selectable());
        assert!(!sample(1, false).is_selectable());
    }

    #[test]
    fn road_restriction_is_independent_of_selectability() {
        let restricted = Skip {
            allowed_on_road: false,
            ..sample(1, true)
        };
        assert!(restricted.road_restricted());
        assert!(restricted.is_selectable());
    }

    #[test]
    fn from_json_accepts_extra_fields() {
        let json = r#"[{
            "id": 17934,
            "size": 4,
            "hire_period_days": 14,
            "transport_cost": null,
            "per_tonne_cost": null,
            "price_before_vat": 278.0,
            "vat": 55.6,
            "postcode": "NR32",
            "area": "",
            "forbidden": false,
            "allowed_on_road": true,
            "allows_heavy_waste": true
        }]"#;
        let catalog = SkipCatalog::from_json(json).expect("payload should parse");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.0[0].id, 17934);
    }

    #[test]
    fn from_json_rejects_missing_fields() {
        let json = r#"[{"id": 1, "size": 4}]"#;
        assert!(SkipCatalog::from_json(json).is_err());
    }

    #[test]
    fn from_json_rejects_mistyped_fields() {
        let json = r#"[{
            "id": 1,
            "size": "four",
            "hire_period_days": 14,
            "price_before_vat": 200,
            "vat": 40,
            "allowed_on_road": true,
            "allows_heavy_waste": true
        }]"#;
        assert!(SkipCatalog::from_json(json).is_err());
    }

    #[test]
    fn from_json_rejects_non_array_bodies() {
        assert!(SkipCatalog::from_json(r#"{"skips": []}"#).is_err());
        assert!(SkipCatalog::from_json("not json at all").is_err());
    }

    #[test]
    fn get_by_id_finds_first_match() {
        let catalog = SkipCatalog(vec![sample(1, true), sample(2, false)]);
        assert_eq!(catalog.get_by_id(2).map(|s| s.id), Some(2));
        assert!(catalog.get_by_id(3).is_none());
    }
}
