//! Utilidades de validación
//!
//! Este módulo contiene las expresiones regulares compartidas por los DTOs
//! y funciones helper de normalización de datos.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Teléfono: prefijo internacional opcional y de 6 a 15 dígitos,
    /// admitiendo espacios, puntos y guiones como separadores.
    pub static ref PHONE_RE: Regex = Regex::new(r"^\+?[0-9][0-9 .\-]{5,14}$").unwrap();

    /// Matrícula: formato actual (1234 BCD) o formato provincial antiguo (B-1234-CD).
    pub static ref PLATE_RE: Regex =
        Regex::new(r"^(?:[0-9]{4} ?-?[A-Za-z]{3}|[A-Za-z]{1,2} ?-?[0-9]{4} ?-?[A-Za-z]{0,2})$").unwrap();
}

/// Convierte un opcional en blanco (cadena vacía o solo espacios) en `None`.
///
/// El diálogo de presupuesto de la landing envía `plate` y `comment` como
/// cadenas vacías cuando el usuario no los rellena.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_regex() {
        assert!(PHONE_RE.is_match("+34 600 123 456"));
        assert!(PHONE_RE.is_match("600123456"));
        assert!(PHONE_RE.is_match("93-412-33-21"));
        assert!(!PHONE_RE.is_match("teléfono"));
        assert!(!PHONE_RE.is_match("12"));
    }

    #[test]
    fn test_plate_regex() {
        assert!(PLATE_RE.is_match("1234 BCD"));
        assert!(PLATE_RE.is_match("1234BCD"));
        assert!(PLATE_RE.is_match("B-1234-CD"));
        assert!(!PLATE_RE.is_match(""));
        assert!(!PLATE_RE.is_match("coche"));
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(None), None);
        assert_eq!(normalize_optional(Some("".to_string())), None);
        assert_eq!(normalize_optional(Some("   ".to_string())), None);
        assert_eq!(
            normalize_optional(Some("  1234 BCD ".to_string())),
            Some("1234 BCD".to_string())
        );
    }
}
