/// The signed-in account as reported by `/api/users/me/`.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct User {
    pub pennid: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub groups: Vec<String>,
}

impl User {
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.username.clone()
        } else {
            name.to_string()
        }
    }
}

/// Who is acting. Passed explicitly to anything that needs the user.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct AuthContext {
    user: Option<User>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn pennid(&self) -> Option<i64> {
        self.user.as_ref().map(|user| user.pennid)
    }
}
