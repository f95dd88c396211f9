//! Frontend Models
//!
//! Data shapes matching the employee backend.

use serde::{Deserialize, Deserializer, Serialize};

/// Employee record as returned by the backend.
///
/// Mongo-style backends send `_id`, others plain `id`; both deserialize
/// into `id`. `salary` may arrive as a JSON number or a string and is
/// normalized to a string so it can bind directly to the form input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(alias = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub office: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub salary: String,
}

/// In-progress form values, sent as the create/update payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub position: String,
    pub office: String,
    pub salary: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn employee_accepts_mongo_style_id() {
        let emp: Employee = serde_json::from_value(json!({
            "_id": "42",
            "name": "Ana",
            "position": "Dev",
            "office": "HQ",
            "salary": "1000"
        }))
        .unwrap();
        assert_eq!(emp.id, "42");
        assert_eq!(emp.salary, "1000");
    }

    #[test]
    fn employee_accepts_plain_id_and_numeric_salary() {
        let emp: Employee = serde_json::from_value(json!({
            "id": "7",
            "name": "Luis",
            "position": "QA",
            "office": "Norte",
            "salary": 2500
        }))
        .unwrap();
        assert_eq!(emp.id, "7");
        assert_eq!(emp.salary, "2500");
    }

    #[test]
    fn employee_missing_fields_default_to_empty() {
        let emp: Employee = serde_json::from_value(json!({ "_id": "1" })).unwrap();
        assert_eq!(emp.name, "");
        assert_eq!(emp.salary, "");
    }

    #[test]
    fn draft_serializes_with_backend_field_names() {
        let draft = EmployeeDraft {
            name: "Ana".into(),
            position: "Dev".into(),
            office: "HQ".into(),
            salary: "1000".into(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Ana",
                "position": "Dev",
                "office": "HQ",
                "salary": "1000"
            })
        );
    }
}
