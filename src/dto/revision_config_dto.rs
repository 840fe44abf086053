use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::utils::validation::validate_not_empty;

// Request para crear una configuración de revisión
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRevisionConfigRequest {
    #[validate(custom = "validate_not_empty")]
    pub brand: String,

    #[validate(custom = "validate_not_empty")]
    pub revision_name: String,

    #[validate(range(min = 1))]
    pub interval_km: i64,

    pub description: Option<String>,
}

// Request para actualizar una configuración (parcial)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateRevisionConfigRequest {
    #[validate(custom = "validate_not_empty")]
    pub brand: Option<String>,

    #[validate(custom = "validate_not_empty")]
    pub revision_name: Option<String>,

    #[validate(range(min = 1))]
    pub interval_km: Option<i64>,

    /// Ausente: sin cambios. `null`: borra la descripción.
    #[serde(
        default,
        deserialize_with = "present_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
}

/// Distingue un campo enviado como `null` de un campo ausente
fn present_field<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl UpdateRevisionConfigRequest {
    pub fn is_empty(&self) -> bool {
        self.brand.is_none()
            && self.revision_name.is_none()
            && self.interval_km.is_none()
            && self.description.is_none()
    }
}
