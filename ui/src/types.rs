//! Shared types for the UI

use serde::{Deserialize, Serialize};

// ============= Catalog Types =============

/// A course category shown in the navigation menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of the categories endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesEnvelope {
    #[serde(default)]
    pub success: bool,
    pub data: Vec<Category>,
}

/// Error body returned by the server
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

// ============= Session Types =============

/// Account classification of a signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    Admin,
    Student,
    Instructor,
}

/// Profile of the signed-in user, as stored by the auth flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
    pub account_type: AccountType,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Initial shown when the profile has no avatar image
    pub fn initial(&self) -> String {
        self.first_name
            .chars()
            .next()
            .or_else(|| self.email.chars().next())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

// ============= Navigation Types =============

/// One entry of the primary navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarLink {
    pub title: &'static str,
    pub path: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_reads_nested_data() {
        let body = r#"{"success":true,"data":[{"name":"Web Development","description":"x"},{"name":"Python"}]}"#;
        let envelope: CategoriesEnvelope = serde_json::from_str(body).unwrap();

        assert!(envelope.success);
        assert_eq!(envelope.data.len(), 2);
        assert_eq!(envelope.data[1].name, "Python");
        assert!(envelope.data[1].description.is_none());
    }

    #[test]
    fn test_envelope_without_data_is_an_error() {
        let result = serde_json::from_str::<CategoriesEnvelope>(r#"{"success":false}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_user_profile_minimal_shape() {
        let user: UserProfile = serde_json::from_str(r#"{"accountType":"Instructor"}"#).unwrap();
        assert_eq!(user.account_type, AccountType::Instructor);
        assert_eq!(user.initial(), "?");
    }

    #[test]
    fn test_user_profile_names() {
        let user: UserProfile = serde_json::from_str(
            r#"{"firstName":"ada","lastName":"Lovelace","email":"ada@example.com","accountType":"Student"}"#,
        )
        .unwrap();

        assert_eq!(user.display_name(), "ada Lovelace");
        assert_eq!(user.initial(), "A");
    }
}
