//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validar los datos que entran
//! por la API antes de llegar a la base o al cálculo.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Placa brasileña: formato antiguo `ABC1234` o Mercosul `ABC1D23`
    static ref PLATE_REGEX: Regex = Regex::new(r"^[A-Z]{3}[0-9][A-Z0-9][0-9]{2}$").unwrap();
}

/// Normaliza una placa: mayúsculas, sin espacios, guiones ni guiones bajos
pub fn normalize_plate(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .to_uppercase()
}

/// Validar formato de placa de vehículo
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    if !PLATE_REGEX.is_match(&normalize_plate(value)) {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"ABC1234 or ABC1D23".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plate() {
        assert_eq!(normalize_plate("abc-1234"), "ABC1234");
        assert_eq!(normalize_plate(" abc 1d23 "), "ABC1D23");
    }

    #[test]
    fn test_validate_license_plate() {
        assert!(validate_license_plate("ABC1234").is_ok());
        assert!(validate_license_plate("abc-1234").is_ok());
        assert!(validate_license_plate("BRA2E19").is_ok());
        assert!(validate_license_plate("AB12345").is_err());
        assert!(validate_license_plate("ABC123").is_err());
        assert!(validate_license_plate("").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("VOLVO").is_ok());
        assert!(validate_not_empty("   ").is_err());
    }
}
