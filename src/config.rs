use web_sys::window;

pub const SITE_NAME: &str = "OKOnline";
pub const SITE_TITLE: &str = "OKOnline - The Global Marketer";
pub const SITE_DESCRIPTION: &str = "Tech-enabled marketing for SaaS & Mobile Apps. Transform your business with Meta Ads, WhatsApp automation, and email campaigns.";
pub const CONTACT_EMAIL: &str = "hello@okonline.com";

/// Directory the client logo images are served from.
pub const LOGO_DIR: &str = "/company_logos";

/// Sets the tab title and description meta tag. Runs once at startup; there
/// is no other metadata surface.
pub fn apply_document_metadata() {
    let document = match window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    document.set_title(SITE_TITLE);

    if let Some(head) = document.head() {
        let existing = document
            .query_selector("meta[name='description']")
            .ok()
            .flatten();
        let meta = match existing {
            Some(meta) => meta,
            None => match document.create_element("meta") {
                Ok(meta) => {
                    let _ = meta.set_attribute("name", "description");
                    let _ = head.append_child(&meta);
                    meta
                }
                Err(_) => return,
            },
        };
        let _ = meta.set_attribute("content", SITE_DESCRIPTION);
    }
}
