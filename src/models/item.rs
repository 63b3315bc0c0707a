use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::MacroVector;

/// One catalog record from an extracted menu feed.
///
/// `nutrition` and `serving_size` are carried as raw JSON so the output
/// reproduces the feed byte-for-byte; the typed macro profile is derived
/// on demand via [`MenuItem::macros`]. Fields the feed adds beyond this
/// contract are preserved in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// Stable id, unique within a catalog.
    pub id: i64,

    pub name: String,

    #[serde(default)]
    pub ingredients: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Value>,

    /// Opaque serving-size metadata, passed through unchanged.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub serving_size: Value,

    #[serde(default)]
    pub icons: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons_string: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MenuItem {
    /// Typed macro profile, or `None` when the item is ineligible.
    ///
    /// Eligible means `nutrition` is an object whose `calories`,
    /// `g_protein`, `g_carbs`, and `g_fat` fields are all numeric, finite,
    /// and non-negative. Anything else excludes the item from optimization.
    pub fn macros(&self) -> Option<MacroVector> {
        let n = self.nutrition.as_ref()?.as_object()?;
        let field = |key: &str| n.get(key)?.as_f64();

        let v = MacroVector::new(
            field("calories")?,
            field("g_protein")?,
            field("g_carbs")?,
            field("g_fat")?,
        );
        v.is_valid().then_some(v)
    }

    pub fn is_eligible(&self) -> bool {
        self.macros().is_some()
    }
}
