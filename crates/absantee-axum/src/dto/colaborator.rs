//! Colaborator DTO.

use absantee_core::{Colaborator, NewColaborator};
use serde::{Deserialize, Serialize};

/// Colaborator as exchanged over HTTP.
///
/// Serialized in camelCase. Requests may also use the PascalCase field
/// names (`Name`, `Email`, `Street`, `PostalCode`). The store id is not part
/// of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColaboratorDto {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Email")]
    pub email: String,
    #[serde(alias = "Street")]
    pub street: String,
    #[serde(alias = "PostalCode")]
    pub postal_code: String,
}

impl From<Colaborator> for ColaboratorDto {
    fn from(c: Colaborator) -> Self {
        Self {
            name: c.name,
            email: c.email,
            street: c.street,
            postal_code: c.postal_code,
        }
    }
}

impl From<ColaboratorDto> for NewColaborator {
    fn from(dto: ColaboratorDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            street: dto.street,
            postal_code: dto.postal_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_pascal_case_fields() {
        let dto: ColaboratorDto = serde_json::from_str(
            r#"{"Name":"John Doe","Email":"john.doe@example.com","Street":"adlkfjasdlkfs","PostalCode":"4000-000"}"#,
        )
        .unwrap();

        assert_eq!(dto.name, "John Doe");
        assert_eq!(dto.postal_code, "4000-000");
    }

    #[test]
    fn test_serializes_camel_case() {
        let dto = ColaboratorDto {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            street: "Rua Nova".into(),
            postal_code: "4000-001".into(),
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["postalCode"], "4000-001");
        assert!(json.get("id").is_none());
    }
}
