//! Fixed test data for the Swag Labs flow.

pub const SWAG_LABS_TITLE: &str = "Swag Labs";
pub const INVENTORY_URL_FRAGMENT: &str = "inventory";
pub const INVALID_CREDENTIALS_ERROR: &str = "Username and password do not match";
