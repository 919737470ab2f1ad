//! Farcaster frame responses
//!
//! A frame page is plain HTML whose `<meta>` tags tell the client which
//! image to show, where to post interactions and which buttons to draw.
//!
//! # Example
//!
//! ```rust
//! use speed_frame::frame::{Frame, Intent};
//!
//! let frame = Frame::new("https://example.com/api/yeeter/0xabc/image")
//!     .with_post_url("https://example.com/api/success/0xdao/0xabc")
//!     .with_intent(Intent::transaction("BANG IT", "https://example.com/api/yeet/0xabc/1"));
//!
//! let html = frame.to_html();
//! assert!(html.contains(r#"<meta property="fc:frame:button:1:action" content="tx">"#));
//! ```

pub mod action;
pub mod html;

pub use action::{parse_action, FrameAction, TrustedData, UntrustedData};

/// Frame protocol version emitted in `fc:frame`
pub const FRAME_VERSION: &str = "vNext";

/// Image aspect ratio of a 1200x630 frame
pub const ASPECT_RATIO: &str = "1.91:1";

/// Clients render at most four buttons
pub const MAX_INTENTS: usize = 4;

/// A frame button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Posts back to the frame's post URL
    Post {
        /// Button label
        label: String,
    },
    /// Opens an external URL
    Link {
        /// Button label
        label: String,
        /// Destination
        href: String,
    },
    /// Fetches a transaction from `target` and asks the wallet to sign it
    Transaction {
        /// Button label
        label: String,
        /// Transaction route
        target: String,
    },
}

impl Intent {
    /// Post button
    pub fn post(label: impl Into<String>) -> Self {
        Intent::Post {
            label: label.into(),
        }
    }

    /// Link button
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Intent::Link {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Transaction button
    pub fn transaction(label: impl Into<String>, target: impl Into<String>) -> Self {
        Intent::Transaction {
            label: label.into(),
            target: target.into(),
        }
    }

    /// Button label
    pub fn label(&self) -> &str {
        match self {
            Intent::Post { label } | Intent::Link { label, .. } | Intent::Transaction { label, .. } => {
                label
            }
        }
    }

    /// Value of `fc:frame:button:N:action`
    pub fn action(&self) -> &'static str {
        match self {
            Intent::Post { .. } => "post",
            Intent::Link { .. } => "link",
            Intent::Transaction { .. } => "tx",
        }
    }

    /// Value of `fc:frame:button:N:target`, if any
    pub fn target(&self) -> Option<&str> {
        match self {
            Intent::Post { .. } => None,
            Intent::Link { href, .. } => Some(href),
            Intent::Transaction { target, .. } => Some(target),
        }
    }
}

/// One frame page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Page and `og:title`
    pub title: String,
    /// Absolute image URL
    pub image_url: String,
    /// Image aspect ratio
    pub aspect_ratio: String,
    /// Absolute URL interactions are posted to
    pub post_url: Option<String>,
    /// Buttons, left to right
    pub intents: Vec<Intent>,
}

impl Frame {
    /// Frame showing `image_url` with no buttons
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            title: yeet_core::branding::APP_NAME.to_string(),
            image_url: image_url.into(),
            aspect_ratio: ASPECT_RATIO.to_string(),
            post_url: None,
            intents: Vec::new(),
        }
    }

    /// Set the page title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the post URL
    pub fn with_post_url(mut self, url: impl Into<String>) -> Self {
        self.post_url = Some(url.into());
        self
    }

    /// Append a button; buttons past the client limit are dropped
    pub fn with_intent(mut self, intent: Intent) -> Self {
        if self.intents.len() < MAX_INTENTS {
            self.intents.push(intent);
        } else {
            tracing::warn!(label = intent.label(), "frame button limit reached, dropping button");
        }
        self
    }

    /// Render the page
    pub fn to_html(&self) -> String {
        html::render(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_actions() {
        assert_eq!(Intent::post("Go").action(), "post");
        assert_eq!(Intent::link("View", "https://x").action(), "link");
        assert_eq!(Intent::transaction("Pay", "https://y").action(), "tx");
        assert_eq!(Intent::post("Go").target(), None);
        assert_eq!(Intent::link("View", "https://x").target(), Some("https://x"));
    }

    #[test]
    fn test_button_limit() {
        let frame = (0..6).fold(Frame::new("https://img"), |f, i| {
            f.with_intent(Intent::post(format!("B{}", i)))
        });
        assert_eq!(frame.intents.len(), MAX_INTENTS);
        assert_eq!(frame.intents[3].label(), "B3");
    }
}
