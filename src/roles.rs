use serde::{Deserialize, Serialize};

/// Closed set of volunteer role categories. Free-text role input from the
/// signup form is folded into one of these via [`RoleCategory::classify`];
/// everything downstream matches exhaustively on the enum, never on strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCategory {
    Filer,
    Mentor,
    Frontline,
    InternalServices,
}

impl RoleCategory {
    /// Maps free-text role input to a category. Matching is case-insensitive
    /// keyword containment; anything unrecognized defaults to Filer, which is
    /// the overwhelmingly common role on the signup form.
    pub fn classify(text: &str) -> Self {
        let lower = text.trim().to_lowercase();
        if lower.contains("mentor") {
            RoleCategory::Mentor
        } else if lower.contains("frontline")
            || lower.contains("front line")
            || lower.contains("greeter")
        {
            RoleCategory::Frontline
        } else if lower.contains("internal") || lower.contains("admin") {
            RoleCategory::InternalServices
        } else {
            RoleCategory::Filer
        }
    }

    /// The three categories that compete for capacity and participate in
    /// per-shift staffing minimums. Internal-services volunteers are handled
    /// outside the normal contention rules.
    pub fn is_primary(&self) -> bool {
        !matches!(self, RoleCategory::InternalServices)
    }

    /// Primary roles in the order Phase 1 fills them.
    pub const PRIMARY: [RoleCategory; 3] = [
        RoleCategory::Filer,
        RoleCategory::Mentor,
        RoleCategory::Frontline,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoleCategory::Filer => "filer",
            RoleCategory::Mentor => "mentor",
            RoleCategory::Frontline => "frontline",
            RoleCategory::InternalServices => "internal services",
        }
    }
}

impl std::fmt::Display for RoleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
