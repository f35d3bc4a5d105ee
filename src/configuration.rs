use std::cell::{
    Ref,
    RefCell
};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{
    Deserialize,
    Serialize
};
use tracing::{
    debug,
    info
};

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    PolynomialManager
};
use crate::manager::namedobject::NamedJsonObject;
use crate::math::polynomial::polynomial::Polynomial;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    polynomials: Vec<serde_json::Value>,
    #[serde(default)]
    demo: Option<DemoJsonProp>
}

#[derive(Deserialize, Default)]
struct DemoJsonProp {
    first: Option<String>,
    second: Option<String>,
    powers: Option<Vec<i32>>,
    max_derivative_order: Option<i32>,
    integrals: Option<Vec<IntegrationBounds>>
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntegrationBounds {
    left: f64,
    right: f64
}

impl IntegrationBounds {
    pub fn new(left: f64, right: f64) -> IntegrationBounds {
        IntegrationBounds { left, right }
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }
}

/// What the demonstration driver computes: two operands, the exponents
/// for POWER, derivative orders `1..=max_derivative_order` and the bounds
/// for INTEGRAL.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoSettings {
    first: String,
    second: String,
    powers: Vec<i32>,
    max_derivative_order: i32,
    integrals: Vec<IntegrationBounds>
}

impl DemoSettings {
    pub fn first(&self) -> &String {
        &self.first
    }

    pub fn second(&self) -> &String {
        &self.second
    }

    pub fn powers(&self) -> &[i32] {
        &self.powers
    }

    pub fn max_derivative_order(&self) -> i32 {
        self.max_derivative_order
    }

    pub fn integrals(&self) -> &[IntegrationBounds] {
        &self.integrals
    }
}

impl Default for DemoSettings {
    fn default() -> DemoSettings {
        DemoSettings {
            first: "p".to_owned(),
            second: "q".to_owned(),
            powers: vec![0, 3],
            max_derivative_order: 5,
            integrals: vec![
                IntegrationBounds::new(-1.0, 1.0),
                IntegrationBounds::new(5.0, 0.0)
            ]
        }
    }
}

pub struct Configuration {
    polynomial_manager: PolynomialManager,
    demo_settings_cell: RefCell<DemoSettings>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            polynomial_manager: PolynomialManager::polynomials(),
            demo_settings_cell: RefCell::new(DemoSettings::default())
        }
    }

    /// `p = 2x**3 - 6x**2 + 15`, `q = 2x + 5` with the default demo settings.
    pub fn sample() -> Configuration {
        let config = Configuration::new();
        config.polynomial_manager.insert("p".to_owned(), Polynomial::new(vec![2.0, -6.0, 0.0, 15.0]));
        config.polynomial_manager.insert("q".to_owned(), Polynomial::new(vec![2.0, 5.0]));
        config
    }

    pub fn polynomial_manager(&self) -> &PolynomialManager {
        &self.polynomial_manager
    }

    pub fn demo_settings(&self) -> Ref<'_, DemoSettings> {
        self.demo_settings_cell.borrow()
    }

    pub fn from_reader(&self, file_path: &Path) -> Result<(), ManagerError> {
        info!(path = %file_path.display(), "loading configuration");
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.load(json_prop)
    }

    pub fn from_json_str(&self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        self.load(json_prop)
    }

    /// Stages every polynomial and resolves the demo operands before touching
    /// `self`; a failing file leaves the configuration as it was.
    fn load(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        // file order, which a HashMap-backed registry does not keep
        let names = json_prop.polynomials
            .iter()
            .map(|json_value| {
                ManagerError::from_json_or_json_parse_error::<NamedJsonObject>(json_value.clone())
                    .map(|named| named.name().to_owned())
            })
            .collect::<Result<Vec<String>, ManagerError>>()?;
        let mut seen = HashSet::new();
        if let Some(duplicate) = names.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(ManagerError::DuplicateNameError(duplicate.to_owned()));
        }

        let staged = PolynomialManager::polynomials();
        staged.insert_obj_from_json_vec(&json_prop.polynomials)?;

        let demo = json_prop.demo.unwrap_or_default();
        let defaults = DemoSettings::default();
        let first = match demo.first {
            Some(name) => name,
            None => names.first().cloned().ok_or_else(|| ManagerError::json_missing_field("first"))?
        };
        let second = match demo.second {
            Some(name) => name,
            None => names.get(1).cloned().ok_or_else(|| ManagerError::json_missing_field("second"))?
        };
        for name in [&first, &second] {
            if !staged.contains(name) {
                return Err(ManagerError::map_elem_not_found(name));
            }
        }

        let settings = DemoSettings {
            first,
            second,
            powers: demo.powers.unwrap_or(defaults.powers),
            max_derivative_order: demo.max_derivative_order.unwrap_or(defaults.max_derivative_order),
            integrals: demo.integrals.unwrap_or(defaults.integrals)
        };

        for (name, polynomial) in staged.map().drain() {
            self.polynomial_manager.insert(name, polynomial);
        }
        debug!(count = names.len(), "polynomials registered");
        *self.demo_settings_cell.borrow_mut() = settings;
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = include_str!("../config/polynomials.json");

    #[test]
    fn test_sample_file() {
        let config = Configuration::new();
        config.from_json_str(SAMPLE_JSON).unwrap();
        let settings = config.demo_settings();
        assert_eq!(*settings, DemoSettings::default());
        let p = config.polynomial_manager().get(settings.first()).unwrap();
        assert_eq!(p.to_string(), "2x**3 - 6x**2 + 15");
    }

    #[test]
    fn test_sample_matches_builtin() {
        let from_file = Configuration::new();
        from_file.from_json_str(SAMPLE_JSON).unwrap();
        let builtin = Configuration::sample();
        for name in ["p", "q"] {
            assert_eq!(
                from_file.polynomial_manager().get(name).unwrap(),
                builtin.polynomial_manager().get(name).unwrap()
            );
        }
    }

    #[test]
    fn test_demo_defaults_follow_file_order() {
        let config = Configuration::new();
        config.from_json_str(r#"{
            "polynomials": [
                {"name": "zeta", "coefficients": [1, 0, -1]},
                {"name": "alpha", "coefficients": [1, 1]}
            ]
        }"#).unwrap();
        let settings = config.demo_settings();
        assert_eq!(settings.first(), "zeta");
        assert_eq!(settings.second(), "alpha");
        assert_eq!(settings.powers(), &[0, 3]);
        assert_eq!(settings.max_derivative_order(), 5);
    }

    #[test]
    fn test_demo_overrides() {
        let config = Configuration::new();
        config.from_json_str(r#"{
            "polynomials": [
                {"name": "a", "coefficients": [1, 0, -1]},
                {"name": "b", "coefficients": [1, 1]}
            ],
            "demo": {
                "first": "b", "second": "a",
                "powers": [2],
                "max_derivative_order": 2,
                "integrals": [{"left": 0, "right": 2}]
            }
        }"#).unwrap();
        let settings = config.demo_settings();
        assert_eq!(settings.first(), "b");
        assert_eq!(settings.powers(), &[2]);
        assert_eq!(settings.integrals(), &[IntegrationBounds::new(0.0, 2.0)]);
    }

    #[test]
    fn test_unknown_demo_operand() {
        let config = Configuration::new();
        let err = config.from_json_str(r#"{
            "polynomials": [{"name": "a", "coefficients": [1]}],
            "demo": {"first": "a", "second": "missing"}
        }"#).unwrap_err();
        assert!(matches!(err, ManagerError::NameNotFoundError(name) if name == "missing"));
    }

    #[test]
    fn test_too_few_polynomials() {
        let config = Configuration::new();
        let err = config.from_json_str(r#"{
            "polynomials": [{"name": "a", "coefficients": [1]}]
        }"#).unwrap_err();
        assert!(matches!(err, ManagerError::JsonParseError(_)));
    }

    #[test]
    fn test_invalid_coefficient() {
        let config = Configuration::new();
        let err = config.from_json_str(r#"{
            "polynomials": [{"name": "a", "coefficients": [1, "one"]}]
        }"#).unwrap_err();
        assert!(matches!(err, ManagerError::PolynomialError(_)));
    }

    #[test]
    fn test_failed_load_leaves_configuration_untouched() {
        let config = Configuration::sample();
        let err = config.from_json_str(r#"{
            "polynomials": [
                {"name": "p", "coefficients": [7]},
                {"name": "a", "coefficients": [1, 1]}
            ],
            "demo": {"first": "a", "second": "missing"}
        }"#).unwrap_err();
        assert!(matches!(err, ManagerError::NameNotFoundError(_)));
        assert!(!config.polynomial_manager().contains("a"));
        assert_eq!(
            config.polynomial_manager().get("p").unwrap(),
            Polynomial::new(vec![2.0, -6.0, 0.0, 15.0])
        );
        assert_eq!(*config.demo_settings(), DemoSettings::default());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let config = Configuration::new();
        let err = config.from_json_str(r#"{
            "polynomials": [
                {"name": "a", "coefficients": [1, 0, -1]},
                {"name": "a", "coefficients": [1, 1]}
            ]
        }"#).unwrap_err();
        assert!(matches!(err, ManagerError::DuplicateNameError(name) if name == "a"));
        assert!(!config.polynomial_manager().contains("a"));
    }
}
