//! Objeto de datos acumulado del wizard (`WizardData`).
//!
//! Rol en el flujo:
//! - Cada step escribe su porción mediante merges superficiales; ninguna
//!   mutación reemplaza el objeto completo, así las claves escritas por un
//!   step sobreviven a las mutaciones de los demás.
//! - El core es JSON neutro; `slice` ofrece la capa de lectura tipada para
//!   hosts que declaran la contribución de cada step como un tipo parcial.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mapa acumulado del wizard. Sólo se muta por merge superficial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WizardData(Map<String, Value>);

impl WizardData {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Construye desde un `Value`. Valores no-objeto producen un mapa vacío:
    /// el wizard nunca sostiene un blob que no sea un objeto JSON.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self(Map::new()),
        }
    }

    /// Merge shallow: las claves de `partial` sobreescriben, todo lo demás
    /// sobrevive. Un `partial` que no sea objeto se ignora.
    pub fn merge(&mut self, partial: Value) {
        if let Value::Object(incoming) = partial {
            for (key, value) in incoming {
                self.0.insert(key, value);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Lectura tipada de la porción de un step. `None` si la clave falta o
    /// no deserializa al tipo pedido.
    pub fn slice<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.0
            .get(key)
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}
