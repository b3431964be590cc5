//! Command-line surface.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::{Delimiter, ImportOptions};

#[derive(Parser, Debug)]
#[command(name = "memberships-import", version, about = "Drive the membership CSV importer's admin form pipeline from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import members from a CSV or tab-delimited file.
    ///
    /// Creates or updates user memberships in bulk. Requires an
    /// administrative execution context (WP_ADMIN=1).
    Import(ImportArgs),
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Path to the file to import (CSV or tab-delimited text).
    pub file: PathBuf,

    /// Update existing records when a matching user membership is found
    /// (by User Membership ID).
    #[arg(long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    pub merge_existing_user_memberships: bool,

    /// Allow membership transfer between users when the imported user
    /// differs from the existing one. Only meaningful when merging is
    /// enabled; conflicting rows are skipped when disabled.
    #[arg(long, value_name = "BOOL", default_value_t = false, action = ArgAction::Set)]
    pub allow_memberships_transfer: bool,

    /// Create new user memberships when no matching User Membership ID is
    /// found; rows are skipped when disabled.
    #[arg(long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    pub create_new_user_memberships: bool,

    /// Create a new user when no matching user is found. Only meaningful
    /// when membership creation is enabled; rows are skipped when disabled.
    #[arg(long, value_name = "BOOL", default_value_t = false, action = ArgAction::Set)]
    pub create_new_users: bool,

    /// Default membership start date when the import data defines none.
    /// Defaults to today's date on the handler side.
    #[arg(long, value_name = "DATE")]
    pub default_start_date: Option<String>,

    /// Timezone the dates in the import are from (example: UTC).
    /// Defaults to the handler's configured timezone.
    #[arg(long, value_name = "TZ")]
    pub timezone: Option<String>,

    /// Delimiter that separates the fields in the file.
    #[arg(long, value_enum, value_name = "DELIMITER", default_value_t = Delimiter::Comma)]
    pub input_fields_delimiter: Delimiter,
}

impl ImportArgs {
    /// Collect the option flags into an [`ImportOptions`] value.
    pub fn options(&self) -> ImportOptions {
        ImportOptions {
            merge_existing_user_memberships: self.merge_existing_user_memberships,
            allow_memberships_transfer: self.allow_memberships_transfer,
            create_new_user_memberships: self.create_new_user_memberships,
            create_new_users: self.create_new_users,
            default_start_date: self.default_start_date.clone(),
            timezone: self.timezone.clone(),
            input_fields_delimiter: self.input_fields_delimiter,
        }
    }
}
