//! Caller-facing import options.

use clap::ValueEnum;

/// Logical field separator in the source file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    /// The value the handler expects in its delimiter field.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => "comma",
            Delimiter::Tab => "tab",
        }
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Import options, one per recognized handler form field.
///
/// Options are sent to the handler exactly as set, with no implicit
/// coupling: `allow_memberships_transfer` is only meaningful when merging
/// is enabled and `create_new_users` only when creation is enabled, but the
/// dependency logic belongs to the handler, not to this side.
#[derive(Clone, Debug)]
pub struct ImportOptions {
    /// Update an existing membership record when one matches by ID.
    pub merge_existing_user_memberships: bool,
    /// Permit a merged record's owner to change.
    pub allow_memberships_transfer: bool,
    /// Create a new membership when no existing one matches.
    pub create_new_user_memberships: bool,
    /// Create a new account when no existing user matches.
    pub create_new_users: bool,
    /// Fallback start date for newly created memberships. Absence signals
    /// the handler to use the current date.
    pub default_start_date: Option<String>,
    /// Timezone used to interpret ambiguous dates in the source file.
    /// Absence signals the handler to use its configured default.
    pub timezone: Option<String>,
    /// Field separator in the source file.
    pub input_fields_delimiter: Delimiter,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            merge_existing_user_memberships: true,
            allow_memberships_transfer: false,
            create_new_user_memberships: true,
            create_new_users: false,
            default_start_date: None,
            timezone: None,
            input_fields_delimiter: Delimiter::Comma,
        }
    }
}
