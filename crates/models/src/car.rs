use serde::{Deserialize, Serialize};

/// Car entity as stored and served over HTTP.
///
/// `id` is assigned by the service on creation; every other field is a plain
/// scalar taken from the caller as-is (no range or emptiness checks).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Car {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub year: i64,
    #[serde(default)]
    pub mileage: i64,
    #[serde(default)]
    pub price: i64,
}

impl Car {
    /// Copy of this car carrying the given id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Whether a caller supplied an identifier in the payload.
    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_missing_fields() {
        // 创建请求通常不带 id
        let car: Car = serde_json::from_str(r#"{"make":"Tesla","model":"Model 3","year":2023}"#).unwrap();
        assert_eq!(car.id, "");
        assert!(!car.has_id());
        assert_eq!(car.make, "Tesla");
        assert_eq!(car.year, 2023);
        assert_eq!(car.price, 0);
    }

    #[test]
    fn serializes_field_names() {
        let car = Car {
            make: "Ford".into(),
            model: "Mustang".into(),
            package: "Cobra".into(),
            color: "Grey".into(),
            category: "Coupe".into(),
            year: 2023,
            mileage: 14888,
            price: 570000000,
            ..Car::default()
        }
        .with_id("42");
        let v = serde_json::to_value(&car).unwrap();
        assert_eq!(v["id"], "42");
        assert_eq!(v["package"], "Cobra");
        assert_eq!(v["mileage"], 14888);
        assert_eq!(v["price"], 570000000);
    }

    #[test]
    fn accepts_unvalidated_values() {
        let car: Car = serde_json::from_str(r#"{"make":"","year":3000,"price":-1}"#).unwrap();
        assert_eq!(car.price, -1);
        assert_eq!(car.year, 3000);
    }
}
