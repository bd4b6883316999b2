//! Non-configurable process constants. Tier durations and polling intervals
//! live in `suite.toml`; these cover browser lifecycle plumbing only.

pub mod ms {
    pub const PAGE_SETTLE: u64 = 300;
}

pub mod secs {
    pub const NAVIGATION: u64 = 30;
}
