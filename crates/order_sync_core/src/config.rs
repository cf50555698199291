use std::time::Duration;

/// Marketplace the sync targets unless configured otherwise (Amazon Mexico).
pub const DEFAULT_MARKETPLACE_ID: &str = "A1AM78C64UM0Y8";

/// Maximum page size the listing endpoint accepts.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Region endpoint selector for the Selling Partner API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Region {
    #[default]
    Na,
    Eu,
    Fe,
}

impl Region {
    /// Map a region code to a variant. Unrecognized codes fall back to
    /// `Na`.
    pub fn parse(code: &str) -> Self {
        match code {
            "eu" => Region::Eu,
            "fe" => Region::Fe,
            _ => Region::Na,
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Region::Na => "https://sellingpartnerapi-na.amazon.com",
            Region::Eu => "https://sellingpartnerapi-eu.amazon.com",
            Region::Fe => "https://sellingpartnerapi-fe.amazon.com",
        }
    }
}

/// Tunables for one sync run: which marketplace to list and how hard to
/// pace the outbound request loops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub marketplace_id: String,
    pub region: Region,
    pub page_size: u32,
    /// Pause between consecutive listing pages. The listing API allows
    /// roughly ten requests per second.
    pub inter_page_delay: Duration,
    /// Pause before each normalization request.
    pub pre_forward_delay: Duration,
    /// Pause after each normalization request.
    pub post_forward_delay: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            marketplace_id: DEFAULT_MARKETPLACE_ID.to_string(),
            region: Region::default(),
            page_size: DEFAULT_PAGE_SIZE,
            inter_page_delay: Duration::from_millis(200),
            pre_forward_delay: Duration::from_millis(500),
            post_forward_delay: Duration::from_millis(100),
        }
    }
}
