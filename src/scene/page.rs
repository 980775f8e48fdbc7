/// Virtual page behind the backdrop.
///
/// Stands in for the document the backdrop decorates: a scroll position
/// clamped to the page length plus the visibility of the page's UI chrome
/// (header, content sections) which debug mode hides.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    scroll_y: f64,
    max_scroll: f64,
    ui_chrome_visible: bool,
}

impl PageState {
    /// Page scrolled to the top with its UI visible.
    #[must_use]
    pub fn new(max_scroll: f64) -> Self {
        Self {
            scroll_y: 0.0,
            max_scroll: max_scroll.max(0.0),
            ui_chrome_visible: true,
        }
    }

    /// Distance scrolled from the top, in pixels.
    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Largest reachable scroll position.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        self.max_scroll
    }

    /// The page top's position relative to the viewport: zero at the top,
    /// negative once scrolled down.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        -self.scroll_y
    }

    /// Scroll to an absolute position, clamped to the page.
    pub fn scroll_to(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y.clamp(0.0, self.max_scroll);
    }

    /// Scroll by `delta` pixels (positive moves down the page).
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.scroll_y + delta);
    }

    /// Jump back to the top.
    pub fn scroll_to_top(&mut self) {
        self.scroll_y = 0.0;
    }

    /// Whether the page UI is shown.
    #[must_use]
    pub fn ui_chrome_visible(&self) -> bool {
        self.ui_chrome_visible
    }

    /// Show or hide the page UI.
    pub fn set_ui_chrome_visible(&mut self, visible: bool) {
        self.ui_chrome_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolling_is_clamped_to_page() {
        let mut page = PageState::new(1000.0);
        page.scroll_by(-50.0);
        assert_eq!(page.scroll_y(), 0.0);

        page.scroll_by(300.0);
        assert_eq!(page.scroll_y(), 300.0);
        assert_eq!(page.scroll_offset(), -300.0);

        page.scroll_by(5000.0);
        assert_eq!(page.scroll_y(), 1000.0);

        page.scroll_to_top();
        assert_eq!(page.scroll_offset(), 0.0);
    }

    #[test]
    fn negative_length_means_unscrollable() {
        let mut page = PageState::new(-10.0);
        page.scroll_by(100.0);
        assert_eq!(page.scroll_y(), 0.0);
    }
}
