//! Constants for the bridge-jira client.

/// Max number of issue keys the Jira bulk API accepts per commit or branch
pub const ISSUE_KEY_API_LIMIT: usize = 100;

/// Warning persisted on a subscription when a sync payload had to be truncated
pub const SYNC_WARNING_MESSAGE: &str = "Exceeded issue key reference limit. Some issues may not be linked.";

/// Path prefix of Jira's development-information ingestion API
pub const DEVINFO_PREFIX: &str = "/rest/devinfo/0.10";

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("bridge/", env!("CARGO_PKG_VERSION"));
