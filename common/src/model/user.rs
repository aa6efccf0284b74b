use crate::model::id_string;
use serde::{Deserialize, Serialize};

/// The signed-in user as stored in the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthUser {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub username: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub token: String,
    pub refresh_token: String,
}

impl AuthUser {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_camel_case_storage_shape() {
        let json = r#"{"id":1,"username":"ada","firstName":"Ada","lastName":"Lovelace",
                       "token":"t","refreshToken":"r"}"#;
        let user: AuthUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.refresh_token, "r");
        assert_eq!(user.display_name(), "Ada Lovelace");

        let stored = serde_json::to_value(&user).unwrap();
        assert_eq!(stored["firstName"], "Ada");
        assert_eq!(stored["refreshToken"], "r");
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let user = AuthUser {
            username: "ada".into(),
            ..AuthUser::default()
        };
        assert_eq!(user.display_name(), "ada");
    }
}
