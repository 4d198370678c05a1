//! Parameter descriptors shared across Webmaster tools.

use crate::domains::tools::schema::{FieldKind, FieldSpec};

pub const USER_ID: FieldSpec = FieldSpec::required(
    "userId",
    FieldKind::String,
    "Webmaster user ID (returned by get_user_id)",
);

pub const HOST_ID: FieldSpec = FieldSpec::required(
    "hostId",
    FieldKind::String,
    "Host ID, e.g. https:example.com:443 (returned by list_hosts)",
);

pub const DATE_FROM: FieldSpec = FieldSpec::optional(
    "dateFrom",
    FieldKind::String,
    "Start of the period, YYYY-MM-DD",
);

pub const DATE_TO: FieldSpec =
    FieldSpec::optional("dateTo", FieldKind::String, "End of the period, YYYY-MM-DD");

pub const OFFSET: FieldSpec = FieldSpec::optional(
    "offset",
    FieldKind::Integer,
    "Number of items to skip (default: 0)",
);

pub const LIMIT: FieldSpec =
    FieldSpec::optional("limit", FieldKind::Integer, "Maximum number of items to return");

pub const QUERY_INDICATOR: FieldSpec = FieldSpec::optional(
    "queryIndicator",
    FieldKind::String,
    "Indicator to report: TOTAL_SHOWS, TOTAL_CLICKS, AVG_SHOW_POSITION or AVG_CLICK_POSITION",
);

pub const PAGE_URL: FieldSpec =
    FieldSpec::required("url", FieldKind::String, "Absolute URL of a page on the host");

/// Parameters of tools addressing a single host.
pub const HOST_FIELDS: &[FieldSpec] = &[USER_ID, HOST_ID];

/// Host plus paging.
pub const PAGE_FIELDS: &[FieldSpec] = &[USER_ID, HOST_ID, OFFSET, LIMIT];

/// Host plus a date range.
pub const DATE_RANGE_FIELDS: &[FieldSpec] = &[USER_ID, HOST_ID, DATE_FROM, DATE_TO];
