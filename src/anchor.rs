use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Element id targeted by an in-page link, or `None` when `href` is not a
/// same-page fragment link. A bare `#` is a fragment link with no target
/// and also yields `None`.
pub fn fragment_target(href: &str) -> Option<Cow<'_, str>> {
    let fragment = href.trim().strip_prefix('#')?;
    if fragment.is_empty() {
        return None;
    }

    let decoded = percent_decode_str(fragment).decode_utf8_lossy();
    if decoded.is_empty() {
        None
    } else {
        Some(decoded)
    }
}

/// Whether a click on a link with this `href` should be taken over by the
/// smooth scroller. Bare `#` links are intercepted too, which keeps the
/// page from jumping to the top.
pub fn is_in_page(href: &str) -> bool {
    href.trim().starts_with('#')
}

/// What the document-wide click handler does with a link's `href`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorClick<'a> {
    /// Not an in-page link; the browser navigates as usual.
    Ignore,
    /// In-page link with nothing to scroll to. Default is still suppressed.
    Suppress,
    ScrollTo(Cow<'a, str>),
}

pub fn classify_click(href: &str) -> AnchorClick<'_> {
    if !is_in_page(href) {
        return AnchorClick::Ignore;
    }
    match fragment_target(href) {
        Some(id) => AnchorClick::ScrollTo(id),
        None => AnchorClick::Suppress,
    }
}

/// Document side effects the smooth scroller needs.
pub trait ScrollHost {
    type Listener;

    fn set_scroll_behavior(&self, value: &'static str);
    fn intercept_clicks(&self) -> Option<Self::Listener>;
}

/// Smooth scrolling held for as long as the scope lives. Dropping it
/// removes the click interception and puts `scroll-behavior` back to
/// `auto`.
pub struct SmoothScrollScope<H: ScrollHost> {
    host: H,
    listener: Option<H::Listener>,
}

impl<H: ScrollHost> SmoothScrollScope<H> {
    pub fn install(host: H) -> Self {
        host.set_scroll_behavior("smooth");
        let listener = host.intercept_clicks();
        Self { host, listener }
    }

    pub fn is_intercepting(&self) -> bool {
        self.listener.is_some()
    }
}

impl<H: ScrollHost> Drop for SmoothScrollScope<H> {
    fn drop(&mut self) {
        drop(self.listener.take());
        self.host.set_scroll_behavior("auto");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeDocument {
        behavior: Rc<RefCell<Vec<&'static str>>>,
        listeners: Rc<Cell<usize>>,
    }

    struct FakeListener(Rc<Cell<usize>>);

    impl Drop for FakeListener {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    impl FakeDocument {
        /// Whether a click on `href` would have its default prevented.
        fn click(&self, href: &str) -> bool {
            self.listeners.get() > 0 && classify_click(href) != AnchorClick::Ignore
        }
    }

    impl ScrollHost for FakeDocument {
        type Listener = FakeListener;

        fn set_scroll_behavior(&self, value: &'static str) {
            self.behavior.borrow_mut().push(value);
        }

        fn intercept_clicks(&self) -> Option<FakeListener> {
            self.listeners.set(self.listeners.get() + 1);
            Some(FakeListener(self.listeners.clone()))
        }
    }

    #[test]
    fn dropping_the_scope_restores_default_anchor_behavior() {
        let document = FakeDocument::default();
        let scope = SmoothScrollScope::install(document.clone());
        assert!(scope.is_intercepting());
        assert!(document.click("#x"));
        assert!(!document.click("/about"));
        assert_eq!(*document.behavior.borrow(), ["smooth"]);

        drop(scope);
        assert_eq!(document.listeners.get(), 0);
        assert!(!document.click("#x"));
        assert_eq!(*document.behavior.borrow(), ["smooth", "auto"]);
    }

    #[test]
    fn clicks_are_classified_by_href() {
        assert_eq!(classify_click("/blog#top"), AnchorClick::Ignore);
        assert_eq!(classify_click("#"), AnchorClick::Suppress);
        assert_eq!(
            classify_click("#my%20journey"),
            AnchorClick::ScrollTo(Cow::Borrowed("my journey"))
        );
    }

    #[test]
    fn fragment_links_name_their_target() {
        assert_eq!(fragment_target("#about").as_deref(), Some("about"));
        assert_eq!(fragment_target("  #content ").as_deref(), Some("content"));
    }

    #[test]
    fn encoded_fragments_are_decoded() {
        assert_eq!(fragment_target("#my%20journey").as_deref(), Some("my journey"));
    }

    #[test]
    fn bare_hash_has_no_target_but_is_intercepted() {
        assert_eq!(fragment_target("#"), None);
        assert!(is_in_page("#"));
    }

    #[test]
    fn other_links_are_left_alone() {
        for href in ["/about", "https://github.com", "/blog#top", "mailto:hi@example.com"] {
            assert_eq!(fragment_target(href), None);
            assert!(!is_in_page(href));
        }
    }
}
