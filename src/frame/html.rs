//! Frame page markup

use super::{Frame, FRAME_VERSION};
use frame_ui::node::escape_html;

fn meta(out: &mut String, property: &str, content: &str) {
    out.push_str(&format!(
        "<meta property=\"{}\" content=\"{}\">\n",
        property,
        escape_html(content)
    ));
}

/// Render a frame as an HTML document
pub fn render(frame: &Frame) -> String {
    let mut head = String::new();
    meta(&mut head, "fc:frame", FRAME_VERSION);
    meta(&mut head, "fc:frame:image", &frame.image_url);
    meta(&mut head, "fc:frame:image:aspect_ratio", &frame.aspect_ratio);
    if let Some(post_url) = &frame.post_url {
        meta(&mut head, "fc:frame:post_url", post_url);
    }

    for (i, intent) in frame.intents.iter().enumerate() {
        let key = format!("fc:frame:button:{}", i + 1);
        meta(&mut head, &key, intent.label());
        meta(&mut head, &format!("{}:action", key), intent.action());
        if let Some(target) = intent.target() {
            meta(&mut head, &format!("{}:target", key), target);
        }
        // Transaction confirmations post back to the frame's post URL
        if let (super::Intent::Transaction { .. }, Some(post_url)) = (intent, &frame.post_url) {
            meta(&mut head, &format!("{}:post_url", key), post_url);
        }
    }

    meta(&mut head, "og:image", &frame.image_url);
    meta(&mut head, "og:title", &frame.title);

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n{}</head>\n<body></body>\n</html>\n",
        escape_html(&frame.title),
        head
    )
}
