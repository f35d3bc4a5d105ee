use std::cell::{
    RefCell, RefMut
};
use std::collections::HashMap;

use tracing::debug;

use super::managererror::ManagerError;
use super::namedobject::{
    NamedJsonObject,
    NamedPolynomial
};
use crate::math::polynomial::polynomial::Polynomial;


pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }
}


pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager {map_cell: RefCell::new(HashMap::new()), get_obj_from_json}
    }

    pub fn insert(&self, name: String, obj: V) {
        self.map().insert(name, obj);
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        debug!(name = %named_object.name(), "registered object");
        self.map().insert(named_object.name().to_owned(), v);
        Ok(())
    }
}


pub type PolynomialManager = Manager<Polynomial>;

impl PolynomialManager {
    pub fn polynomials() -> PolynomialManager {
        Manager::new(polynomial_from_json)
    }
}

fn polynomial_from_json(json_value: serde_json::Value) -> Result<Polynomial, ManagerError> {
    let named: NamedPolynomial = ManagerError::from_json_or_json_parse_error(json_value)?;
    Ok(named.to_polynomial()?)
}
