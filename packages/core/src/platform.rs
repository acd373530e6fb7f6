// Platform compatibility shim
// Android's soft keyboard resizes the viewport when it opens, which breaks
// layouts on the web build. Pinning the viewport height to the window's
// inner height at startup avoids that.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Platform the client is running on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Web,
    Ios,
    Android,
    Macos,
    Windows,
    Linux,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Web => "web",
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Macos => "macos",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        };
        f.write_str(name)
    }
}

/// A `<meta>` tag the host should append to the document head
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportMeta {
    pub name: String,
    pub content: String,
}

impl ViewportMeta {
    pub fn to_html(&self) -> String {
        format!(r#"<meta name="{}" content="{}">"#, self.name, self.content)
    }
}

/// Viewport override for web builds running in an Android browser.
///
/// Returns `None` on every other platform/user agent combination.
pub fn viewport_meta(platform: Platform, user_agent: &str, inner_height: u32) -> Option<ViewportMeta> {
    if platform != Platform::Web || !is_android(user_agent) {
        return None;
    }

    Some(ViewportMeta {
        name: "viewport".to_string(),
        content: format!(
            "width=device-width, height={}, initial-scale=1.0, minimum-scale=1.0",
            inner_height
        ),
    })
}

fn is_android(user_agent: &str) -> bool {
    user_agent.to_lowercase().contains("android")
}
