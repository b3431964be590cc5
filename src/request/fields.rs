//! Field names and constants of the import handler's form contract.
//!
//! These are the exact names the handler's request processing branches on;
//! they must not be altered on this side.

/// Body field: update existing memberships matched by ID.
pub const MERGE_EXISTING_USER_MEMBERSHIPS: &str =
    "wc_memberships_members_csv_import_merge_existing_user_memberships";

/// Body field: allow a merged membership's owner to change.
pub const ALLOW_MEMBERSHIPS_TRANSFER: &str =
    "wc_memberships_members_csv_import_allow_memberships_transfer";

/// Body field: create memberships for unmatched rows.
pub const CREATE_NEW_USER_MEMBERSHIPS: &str =
    "wc_memberships_members_csv_import_create_new_user_memberships";

/// Body field: create accounts for unmatched users.
pub const CREATE_NEW_USERS: &str = "wc_memberships_members_csv_import_create_new_users";

/// Body field: fallback start date for new memberships.
pub const DEFAULT_START_DATE: &str = "wc_memberships_members_csv_import_default_start_date";

/// Body field: timezone for ambiguous dates.
pub const TIMEZONE: &str = "wc_memberships_members_csv_import_timezone";

/// Body field: field separator in the source file.
pub const FIELDS_DELIMITER: &str = "wc_memberships_members_csv_import_fields_delimiter";

/// Uploads-store key for the import file.
pub const IMPORT_FILE: &str = "wc_memberships_members_csv_import_file";

/// Body field: action identifier.
pub const ACTION: &str = "action";

/// Body field: authenticity token.
pub const NONCE: &str = "_wpnonce";

/// Body field: referring path.
pub const HTTP_REFERER: &str = "_wp_http_referer";

/// Body field: advisory maximum-size marker.
pub const MAX_FILE_SIZE: &str = "MAX_FILE_SIZE";

/// The action identifier the handler listens for.
pub const IMPORT_ACTION: &str = "wc_memberships_csv_import_user_memberships";

/// The named hook the handler's dispatch mechanism listens for.
pub const ADMIN_POST_HOOK: &str = "admin_post_wc_memberships_csv_import_user_memberships";

/// The handler's declared upload size limit in bytes. Advisory metadata
/// consumed by the handler's own validation, not enforced here.
pub const MAX_FILE_SIZE_BYTES: u64 = 2_097_152;

/// Referring path the handler's redirect-target logic resolves against.
/// The redirect itself is never followed.
pub const IMPORT_REFERER: &str =
    "/wp-admin/admin.php?page=wc_memberships_import_export&section=csv_import_user_memberships";
