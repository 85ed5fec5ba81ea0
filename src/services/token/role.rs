/// Role codes as defined by the token authority's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::User),
            1 => Some(Self::Admin),
            _ => None,
        }
    }

    /// Authority-side name (`USER`, `ADMIN`).
    pub fn name(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }

    /// Canonical lower-cased name carried on the identity.
    pub fn canonical_name(self) -> String {
        self.name().to_lowercase()
    }
}
