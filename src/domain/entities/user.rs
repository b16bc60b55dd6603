use std::fmt;

/// Represents a chat user
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    pub id: String,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: None,
            first_name: None,
        }
    }

    pub fn display_name(&self) -> String {
        if let Some(ref username) = self.username {
            username.clone()
        } else if let Some(ref first) = self.first_name {
            first.clone()
        } else {
            self.id.clone()
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_username_then_first_name_then_id() {
        let mut user = User::new("7");
        assert_eq!(user.display_name(), "7");

        user.first_name = Some("Alice".to_string());
        assert_eq!(user.display_name(), "Alice");

        user.username = Some("alice_dev".to_string());
        assert_eq!(user.display_name(), "alice_dev");
        assert_eq!(user.to_string(), "alice_dev");
    }
}
