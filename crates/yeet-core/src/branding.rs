//! Speedball branding and fixed campaign constants
//!
//! Values that are baked into the frames rather than read from the
//! subgraph: public URLs, the target chain, the contribution message and
//! the advertised token amount.

/// Application name
pub const APP_NAME: &str = "Speedball";

/// Application version (from Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Public origin the frames are served from
pub const FRAME_ORIGIN: &str = "https://speed-frame.vercel.app";

/// Path prefix of every frame route
pub const BASE_PATH: &str = "/api";

/// Where a browser opening a frame URL is sent
pub const BROWSER_LOCATION: &str = "https://speedball.daohaus.club/";

/// Default static success image, relative to the assets directory
pub const SUCCESS_IMAGE: &str = "/images/success.png";

/// Chain-related constants
pub mod chain {
    /// Base mainnet as a CAIP-2 id
    pub const CHAIN_ID: &str = "eip155:8453";

    /// Base mainnet chain id in hex, as used in DAOhaus app URLs
    pub const CHAIN_ID_HEX: &str = "0x2105";

    /// Payable function the transaction button calls
    pub const CONTRIBUTE_FUNCTION: &str = "contributeEth";

    /// Message argument attached to every frame contribution
    pub const CONTRIBUTION_MESSAGE: &str = "WE BALL FROM FRAMES";
}

/// Copy shown on the frame images
pub mod copy {
    /// Tokens a contributor receives per minimum tribute
    pub const TOKENS_PER_CONTRIBUTION: &str = "1000";

    /// Heading shown when the campaign does not exist
    pub const NOT_FOUND: &str = "Stash Not Found";

    /// Heading shown outside the campaign window
    pub const NOT_ACTIVE: &str = "Not Ready to Bang";

    /// Heading shown when the DAO has no profile record
    pub const PROFILE_MISSING: &str = "Profile Not Found";

    /// Placeholder for stats that are not loaded
    pub const PLACEHOLDER: &str = "xxx";

    /// Transaction button label
    pub const BANG_IT: &str = "BANG IT";

    /// Link button label on the success frame
    pub const VIEW_PROJECT: &str = "View Project";
}

/// Project page in the Speedball app
///
/// # Example
///
/// ```rust
/// use yeet_core::branding::project_url;
///
/// assert_eq!(
///     project_url("0xDAO", "0xYEET"),
///     "https://speedball.daohaus.club/#/molochv3/0x2105/0xdao/0xyeet"
/// );
/// ```
pub fn project_url(dao_id: &str, yeeter_id: &str) -> String {
    format!(
        "{}#/molochv3/{}/{}/{}",
        BROWSER_LOCATION,
        chain::CHAIN_ID_HEX,
        dao_id.to_lowercase(),
        yeeter_id.to_lowercase()
    )
}
