//! Static water-quality data: the test catalog, the two limit tiers, and
//! the fixed location readings.
//!
//! Everything here is immutable and lives for the whole program. Views and
//! derivation code borrow from these tables; nothing ever writes to them.

use std::fmt;

// ── Test keys ──────────────────────────────────────────────────────────────

/// A measured water-quality parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestKey {
    Hardness,
    Ph,
    Turbidity,
    Alkalinity,
    Acidity,
}

impl TestKey {
    pub const ALL: [TestKey; 5] = [
        TestKey::Hardness,
        TestKey::Ph,
        TestKey::Turbidity,
        TestKey::Alkalinity,
        TestKey::Acidity,
    ];

    /// Field name as it appears in reading records (`"pH"` keeps its casing).
    pub fn as_str(self) -> &'static str {
        match self {
            TestKey::Hardness => "hardness",
            TestKey::Ph => "pH",
            TestKey::Turbidity => "turbidity",
            TestKey::Alkalinity => "alkalinity",
            TestKey::Acidity => "acidity",
        }
    }

    pub fn parse(name: &str) -> Option<TestKey> {
        TestKey::ALL.into_iter().find(|k| k.as_str() == name)
    }
}

impl fmt::Display for TestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Test catalog ───────────────────────────────────────────────────────────

/// One selectable test type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub key: TestKey,
    /// Display unit; empty for dimensionless values (pH).
    pub unit: &'static str,
    pub description: &'static str,
}

/// Catalog in selector order. Index 0 is the fallback for unknown ids.
pub static TEST_CATALOG: [TestDefinition; 5] = [
    TestDefinition {
        id: "test-1",
        name: "Hardness",
        key: TestKey::Hardness,
        unit: "mg/L as CaCO₃",
        description: "Measures the concentration of dissolved calcium and magnesium in water, indicating water hardness.",
    },
    TestDefinition {
        id: "test-2",
        name: "pH Level",
        key: TestKey::Ph,
        unit: "",
        description: "Determines the acidity or alkalinity of water, with a neutral value of 7.",
    },
    TestDefinition {
        id: "test-3",
        name: "Turbidity",
        key: TestKey::Turbidity,
        unit: "NTU",
        description: "Measures the cloudiness of water caused by suspended particles, indicating water clarity.",
    },
    TestDefinition {
        id: "test-4",
        name: "Alkalinity",
        key: TestKey::Alkalinity,
        unit: "mg/L as CaCO₃",
        description: "Indicates the ability of water to neutralize acids, helping maintain stable pH levels.",
    },
    TestDefinition {
        id: "test-5",
        name: "Acidity",
        key: TestKey::Acidity,
        unit: "mg/L as CaCO₃",
        description: "Measures the amount of acid present in the water, affecting corrosiveness and taste.",
    },
];

// ── Limit tables ───────────────────────────────────────────────────────────

/// Threshold tier keyed by test. pH and acidity have no entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitTable {
    pub label: &'static str,
    entries: &'static [(TestKey, f64)],
}

impl LimitTable {
    pub fn get(&self, key: TestKey) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    pub fn contains(&self, key: TestKey) -> bool {
        self.get(key).is_some()
    }
}

pub static ACCEPTABLE_LIMITS: LimitTable = LimitTable {
    label: "Acceptable Limit",
    entries: &[
        (TestKey::Turbidity, 1.0),
        (TestKey::Hardness, 200.0),
        (TestKey::Alkalinity, 200.0),
    ],
};

pub static PERMISSIBLE_LIMITS: LimitTable = LimitTable {
    label: "Permissible Limit",
    entries: &[
        (TestKey::Turbidity, 5.0),
        (TestKey::Hardness, 600.0),
        (TestKey::Alkalinity, 600.0),
    ],
};

// ── Location readings ──────────────────────────────────────────────────────

/// A sampling site with one value per test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationReading {
    pub name: &'static str,
    pub ph: f64,
    pub turbidity: f64,
    pub hardness: f64,
    pub alkalinity: f64,
    pub acidity: f64,
}

impl LocationReading {
    pub fn value(&self, key: TestKey) -> f64 {
        match key {
            TestKey::Hardness => self.hardness,
            TestKey::Ph => self.ph,
            TestKey::Turbidity => self.turbidity,
            TestKey::Alkalinity => self.alkalinity,
            TestKey::Acidity => self.acidity,
        }
    }
}

const fn reading(
    name: &'static str,
    ph: f64,
    turbidity: f64,
    hardness: f64,
    alkalinity: f64,
    acidity: f64,
) -> LocationReading {
    LocationReading {
        name,
        ph,
        turbidity,
        hardness,
        alkalinity,
        acidity,
    }
}

pub static LOCATIONS: [LocationReading; 10] = [
    reading("Abheri", 7.27, 0.22, 65.0, 100.0, 20.0),
    reading("Malhar", 7.15, 0.81, 150.0, 125.0, 15.0),
    reading("AB-1", 7.18, 1.05, 150.0, 150.0, 15.0),
    reading("Yerpedu", 6.68, 0.91, 400.0, 350.0, 40.0),
    reading("Pond 1", 7.31, 16.2, 152.5, 180.0, 15.0),
    reading("Bhairav", 7.23, 0.24, 65.0, 100.0, 15.0),
    reading("LHC", 7.14, 0.53, 150.0, 175.0, 20.0),
    reading("Pond 2", 7.27, 6.35, 102.5, 160.0, 15.0),
    reading("Des", 7.08, 0.8, 147.5, 150.0, 15.0),
    reading("Ground Water", 7.05, 2.82, 160.0, 200.0, 15.0),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<_> = TEST_CATALOG.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TEST_CATALOG.len());
    }

    #[test]
    fn test_catalog_order() {
        let names: Vec<_> = TEST_CATALOG.iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            ["Hardness", "pH Level", "Turbidity", "Alkalinity", "Acidity"]
        );
    }

    #[test]
    fn test_catalog_covers_every_key_once() {
        for key in TestKey::ALL {
            assert_eq!(TEST_CATALOG.iter().filter(|t| t.key == key).count(), 1);
        }
    }

    #[test]
    fn test_key_parse_roundtrip() {
        for key in TestKey::ALL {
            assert_eq!(TestKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(TestKey::parse("PH"), None);
        assert_eq!(TestKey::parse(""), None);
    }

    #[test]
    fn test_only_ph_is_unitless() {
        for test in &TEST_CATALOG {
            assert_eq!(test.unit.is_empty(), test.key == TestKey::Ph);
        }
    }

    #[test]
    fn test_limit_tables_skip_ph_and_acidity() {
        for table in [ACCEPTABLE_LIMITS, PERMISSIBLE_LIMITS] {
            assert!(!table.contains(TestKey::Ph));
            assert!(!table.contains(TestKey::Acidity));
            assert!(table.contains(TestKey::Hardness));
            assert!(table.contains(TestKey::Alkalinity));
            assert!(table.contains(TestKey::Turbidity));
        }
    }

    #[test]
    fn test_permissible_not_below_acceptable() {
        for key in TestKey::ALL {
            if let (Some(a), Some(p)) = (ACCEPTABLE_LIMITS.get(key), PERMISSIBLE_LIMITS.get(key)) {
                assert!(p >= a, "{key}: permissible {p} < acceptable {a}");
            }
        }
    }

    #[test]
    fn test_reading_value_selects_field() {
        let yerpedu = LOCATIONS[3];
        assert_eq!(yerpedu.name, "Yerpedu");
        assert_eq!(yerpedu.value(TestKey::Ph), 6.68);
        assert_eq!(yerpedu.value(TestKey::Turbidity), 0.91);
        assert_eq!(yerpedu.value(TestKey::Hardness), 400.0);
        assert_eq!(yerpedu.value(TestKey::Alkalinity), 350.0);
        assert_eq!(yerpedu.value(TestKey::Acidity), 40.0);
    }

    #[test]
    fn test_ten_locations() {
        assert_eq!(LOCATIONS.len(), 10);
        assert_eq!(LOCATIONS[0].name, "Abheri");
        assert_eq!(LOCATIONS[9].name, "Ground Water");
    }
}
