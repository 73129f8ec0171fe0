use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of a product as carried on order records.
///
/// The name can be absent on malformed records; display code decides the
/// fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    #[serde(default)]
    pub name: Option<String>,
}

impl ProductSummary {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// The `product` field of an order record, in either of the two shapes the
/// wire carries: a bare name string on older records, or a product object.
///
/// Modeled as a union with an explicit resolver instead of ad hoc shape
/// probing at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderProduct {
    Name(String),
    Detailed(ProductSummary),
}

impl OrderProduct {
    /// Resolve the customer-facing product name, whichever shape was carried.
    pub fn name(&self) -> Option<&str> {
        match self {
            OrderProduct::Name(name) => Some(name.as_str()),
            OrderProduct::Detailed(summary) => summary.name.as_deref(),
        }
    }
}

/// A confirmed order still progressing through fulfillment states.
///
/// Read-only here; the ordering subsystem owns the lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveOrder {
    pub id: String,
    #[serde(default)]
    pub product: Option<OrderProduct>,
    pub quantity_kg: f64,
    #[serde(default)]
    pub total: Option<f64>,
    /// Free-form fulfillment label ("Pendiente verificación", "En camino", ...).
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Older records carry the instant under `fecha`; kept for wire compatibility.
    #[serde(default, rename = "fecha")]
    pub legacy_date: Option<String>,
}

impl ActiveOrder {
    /// When the order was placed, if the record says so parseably.
    ///
    /// `timestamp` wins over the legacy `fecha` field whenever it is present,
    /// even if unparsable — matching how existing records are read. Naive
    /// (offset-free) instants are interpreted as UTC.
    pub fn placed_at(&self) -> Option<DateTime<Utc>> {
        let raw = self
            .timestamp
            .as_deref()
            .or(self.legacy_date.as_deref())?;
        parse_instant(raw)
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive.and_utc());
        }
    }
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn product_deserializes_from_a_bare_string() {
        let order: ActiveOrder = serde_json::from_value(serde_json::json!({
            "id": "CAF-000123",
            "product": "Café de Colombia Premium",
            "quantity_kg": 5.0,
            "status": "Pendiente verificación"
        }))
        .unwrap();

        assert_eq!(
            order.product.as_ref().and_then(OrderProduct::name),
            Some("Café de Colombia Premium")
        );
    }

    #[test]
    fn product_deserializes_from_an_object() {
        let order: ActiveOrder = serde_json::from_value(serde_json::json!({
            "id": "CAF-000124",
            "product": { "name": "Café Orgánico", "price_per_kg": 38.0 },
            "quantity_kg": 10.0,
            "status": "En camino"
        }))
        .unwrap();

        assert_eq!(
            order.product.as_ref().and_then(OrderProduct::name),
            Some("Café Orgánico")
        );
    }

    #[test]
    fn object_without_a_name_resolves_to_none() {
        let order: ActiveOrder = serde_json::from_value(serde_json::json!({
            "id": "CAF-000125",
            "product": {},
            "quantity_kg": 1.0,
            "status": "Pendiente"
        }))
        .unwrap();

        assert_eq!(order.product.as_ref().and_then(OrderProduct::name), None);
    }

    #[test]
    fn placed_at_parses_rfc3339() {
        let order = order_with_timestamp(Some("2025-09-27T14:30:00-05:00"), None);
        assert_eq!(
            order.placed_at(),
            Some(Utc.with_ymd_and_hms(2025, 9, 27, 19, 30, 0).unwrap())
        );
    }

    #[test]
    fn placed_at_accepts_naive_forms_as_utc() {
        let order = order_with_timestamp(Some("2025-09-27 14:30:00"), None);
        assert_eq!(
            order.placed_at(),
            Some(Utc.with_ymd_and_hms(2025, 9, 27, 14, 30, 0).unwrap())
        );

        let order = order_with_timestamp(Some("2025-09-27"), None);
        assert_eq!(
            order.placed_at(),
            Some(Utc.with_ymd_and_hms(2025, 9, 27, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn placed_at_falls_back_to_the_legacy_field() {
        let order = order_with_timestamp(None, Some("2025-09-27T08:00:00Z"));
        assert_eq!(
            order.placed_at(),
            Some(Utc.with_ymd_and_hms(2025, 9, 27, 8, 0, 0).unwrap())
        );
    }

    #[test]
    fn unparsable_timestamp_does_not_fall_back() {
        // A present-but-garbage `timestamp` shadows `fecha`, as on the wire.
        let order = order_with_timestamp(Some("mañana"), Some("2025-09-27T08:00:00Z"));
        assert_eq!(order.placed_at(), None);
    }

    #[test]
    fn missing_both_fields_is_none() {
        let order = order_with_timestamp(None, None);
        assert_eq!(order.placed_at(), None);
    }

    fn order_with_timestamp(timestamp: Option<&str>, fecha: Option<&str>) -> ActiveOrder {
        ActiveOrder {
            id: "CAF-000126".to_string(),
            product: Some(OrderProduct::Name("Café".to_string())),
            quantity_kg: 5.0,
            total: Some(190.0),
            status: "Pendiente verificación".to_string(),
            timestamp: timestamp.map(str::to_string),
            legacy_date: fecha.map(str::to_string),
        }
    }
}
