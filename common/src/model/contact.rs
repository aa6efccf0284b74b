use crate::model::id_string;
use crate::model::table::{HeaderList, Row, Table};
use serde::{Deserialize, Serialize};

/// A contact list exactly as the backend returns it from `contact/get`.
///
/// `header` and `content` are JSON documents stored as strings: an array of
/// header names and an array of rows respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactResponse {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub header: String,
    pub content: String,
}

/// A persisted, named table used as the audience of a campaign.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactList {
    pub id: String,
    pub name: String,
    pub description: String,
    pub table: Table,
    /// Number of rows when the list was decoded.
    pub count: usize,
}

impl ContactList {
    pub fn headers(&self) -> &HeaderList {
        &self.table.headers
    }
}

impl TryFrom<ContactResponse> for ContactList {
    type Error = serde_json::Error;

    fn try_from(response: ContactResponse) -> Result<Self, Self::Error> {
        let headers: HeaderList = serde_json::from_str(&response.header)?;
        let rows: Vec<Row> = serde_json::from_str(&response.content)?;
        let count = rows.len();
        Ok(Self {
            id: response.id,
            name: response.name,
            description: response.description,
            table: Table::new(headers, rows),
            count,
        })
    }
}

/// Finds the list with `id` among `lists`.
pub fn find_contact<'a>(lists: &'a [ContactList], id: &str) -> Option<&'a ContactList> {
    lists.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_json_encoded_header_and_rows() {
        let response: ContactResponse = serde_json::from_str(
            r#"{"id": 7, "name": "VIP", "description": "d",
                "header": "[\"name\",\"phone\"]",
                "content": "[[\"Ada\",\"123\"],[\"Grace\"]]"}"#,
        )
        .unwrap();

        let list = ContactList::try_from(response).unwrap();
        assert_eq!(list.id, "7");
        assert_eq!(list.headers(), &vec!["name".to_string(), "phone".to_string()]);
        assert_eq!(list.count, 2);
        assert_eq!(list.table.display_row(1), vec!["Grace", ""]);
    }

    #[test]
    fn rejects_content_that_is_not_a_row_array() {
        let response = ContactResponse {
            id: "1".into(),
            name: "broken".into(),
            description: String::new(),
            header: "[\"a\"]".into(),
            content: "{\"not\": \"rows\"}".into(),
        };
        assert!(ContactList::try_from(response).is_err());
    }

    #[test]
    fn find_contact_by_id() {
        let list = ContactList {
            id: "a1".into(),
            name: "A".into(),
            description: String::new(),
            table: Table::default(),
            count: 0,
        };
        let lists = vec![list];
        assert_eq!(find_contact(&lists, "a1").map(|c| c.name.as_str()), Some("A"));
        assert!(find_contact(&lists, "zz").is_none());
    }
}
