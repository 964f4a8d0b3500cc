use serde_json::{json, Value};

use crate::maze::session::CellRecord;

pub fn parse_json(msg: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(msg)
}

static NO_ARGUMENT: Value = Value::Null;

/// Une requête de l'hôte est un objet à une seule clé : `{"Step": 20.0}`.
/// Une commande sans argument peut aussi être envoyée comme simple chaîne.
pub fn extract_command(json: &Value) -> Option<(&str, &Value)> {
    match json {
        Value::String(name) => Some((name.as_str(), &NO_ARGUMENT)),
        Value::Object(map) if map.len() == 1 => {
            map.iter().next().map(|(name, arg)| (name.as_str(), arg))
        }
        _ => None,
    }
}

/// Les 16 cellules sous forme de tableau JSON (`wallInfo`, `visited`, `distance`).
pub fn maze_data_json(records: &[CellRecord]) -> Value {
    serde_json::to_value(records).unwrap_or_else(|_| Value::Array(Vec::new()))
}

/// Réponse à une commande : `{"<Commande>Result": valeur}`.
pub fn result_message(command: &str, value: Value) -> Value {
    let mut map = serde_json::Map::new();
    map.insert(format!("{command}Result"), value);
    Value::Object(map)
}

pub fn error_message(error: impl std::fmt::Display) -> Value {
    json!({ "Error": error.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_with_and_without_argument() {
        let step = parse_json(r#"{"Step": 20.5}"#).unwrap();
        assert_eq!(extract_command(&step), Some(("Step", &json!(20.5))));

        let turn = parse_json(r#""TurnRight""#).unwrap();
        assert_eq!(extract_command(&turn), Some(("TurnRight", &Value::Null)));

        let bad = parse_json(r#"{"Step": 1, "TurnLeft": null}"#).unwrap();
        assert_eq!(extract_command(&bad), None);
        assert_eq!(extract_command(&json!(3)), None);
    }

    #[test]
    fn maze_data_uses_host_field_names() {
        let records = [CellRecord {
            wall_info: 0xAA,
            visited: true,
            distance: 0,
        }];
        assert_eq!(
            maze_data_json(&records),
            json!([{ "wallInfo": 170, "visited": true, "distance": 0 }])
        );
    }

    #[test]
    fn result_wrapping() {
        assert_eq!(
            result_message("IsAtCenter", json!(false)),
            json!({ "IsAtCenterResult": false })
        );
        assert_eq!(error_message("boom"), json!({ "Error": "boom" }));
    }
}
