//! Page navigation overlays.
//!
//! Three small widgets float over the document: a previous-page button, a
//! next-page button and a page slider. Each reads the current and total page
//! from the store and navigates through the document engine.
//!
//! # Error Handling
//!
//! Nothing here fails to the caller:
//!
//! - **At a boundary** (previous on page 1, next on the last page): logged as a
//!   warning and the engine is not called.
//! - **Engine failure**: logged as an error and absorbed.
//! - **Non-numeric slider value**: silently ignored.
//!
//! Every handler reports what happened as a [`PageNavOutcome`].

use crate::host::DocumentEngine;
use crate::store::StoreQuery;
use crate::ui::elements;

/// Result of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNavOutcome {
    /// The engine was asked to show this page.
    Navigated(u32),

    /// Already on the first/last page; the engine was not called.
    AtBoundary,

    /// The engine call failed and was logged.
    Failed,

    /// Input was not a page number; the engine was not called.
    Ignored,
}

/// Direction of a page step button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    Previous,
    Next,
}

/// View of a previous/next page button overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageButtonView {
    pub element: String,
    pub title: &'static str,
    pub icon: &'static str,
    pub disabled: bool,
    pub fade_out: bool,
}

/// View of the page slider overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSliderView {
    pub element: String,
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub value: u32,
    pub fade_out: bool,
}

fn fade_out(store: &dyn StoreQuery, show_nav_overlay: bool, is_focused: bool) -> bool {
    store.should_fade_page_navigation() && !show_nav_overlay && !is_focused
}

fn navigate(engine: &dyn DocumentEngine, page: u32) -> PageNavOutcome {
    match engine.set_current_page(page) {
        Ok(()) => {
            tracing::debug!(page, "navigated to page");
            PageNavOutcome::Navigated(page)
        }
        Err(e) => {
            tracing::error!(page, error = %e, "page navigation failed");
            PageNavOutcome::Failed
        }
    }
}

/// Previous or next page button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStepOverlay {
    step: PageStep,
    element: String,
}

/// Next-page button overlay.
pub type PageNextOverlay = PageStepOverlay;

/// Previous-page button overlay.
pub type PagePreviousOverlay = PageStepOverlay;

impl PageStepOverlay {
    #[must_use]
    pub fn next() -> Self {
        Self {
            step: PageStep::Next,
            element: elements::PAGE_NEXT_OVERLAY.to_string(),
        }
    }

    #[must_use]
    pub fn previous() -> Self {
        Self {
            step: PageStep::Previous,
            element: elements::PAGE_PREVIOUS_OVERLAY.to_string(),
        }
    }

    /// Uses a host-chosen element id instead of the default.
    #[must_use]
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = element.into();
        self
    }

    #[must_use]
    pub const fn step(&self) -> PageStep {
        self.step
    }

    fn at_boundary(&self, store: &dyn StoreQuery) -> bool {
        match self.step {
            PageStep::Previous => store.current_page() == 1,
            PageStep::Next => store.current_page() == store.total_pages(),
        }
    }

    /// Composes the overlay, or `None` when its element is disabled.
    ///
    /// `show_nav_overlay` is the host's hover state for the navigation area.
    #[must_use]
    pub fn view(&self, store: &dyn StoreQuery, show_nav_overlay: bool) -> Option<PageButtonView> {
        if store.is_element_disabled(&self.element) {
            return None;
        }
        let (title, icon) = match self.step {
            PageStep::Previous => ("Go to previous page", "ic_chevron_left_black_24px"),
            PageStep::Next => ("Go to next page", "ic_chevron_right_black_24px"),
        };
        Some(PageButtonView {
            element: self.element.clone(),
            title,
            icon,
            disabled: self.at_boundary(store),
            fade_out: fade_out(store, show_nav_overlay, false),
        })
    }

    /// Handles a click on the button.
    pub fn on_click(&self, store: &dyn StoreQuery, engine: &dyn DocumentEngine) -> PageNavOutcome {
        let current = store.current_page();
        if self.at_boundary(store) {
            match self.step {
                PageStep::Previous => tracing::warn!(current, "already at the first page"),
                PageStep::Next => tracing::warn!(current, "already at the last page"),
            }
            return PageNavOutcome::AtBoundary;
        }
        let target = match self.step {
            PageStep::Previous => current.saturating_sub(1),
            PageStep::Next => current.saturating_add(1),
        };
        navigate(engine, target)
    }
}

/// Page slider overlay. Tracks its own focus so it stays visible while in use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSliderOverlay {
    element: String,
    is_focused: bool,
}

impl Default for PageSliderOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSliderOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self {
            element: elements::PAGE_SLIDER_OVERLAY.to_string(),
            is_focused: false,
        }
    }

    #[must_use]
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = element.into();
        self
    }

    pub fn on_focus(&mut self) {
        self.is_focused = true;
    }

    pub fn on_blur(&mut self) {
        self.is_focused = false;
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// Composes the slider, or `None` when its element is disabled. The
    /// slider value always tracks the store's current page.
    #[must_use]
    pub fn view(&self, store: &dyn StoreQuery, show_nav_overlay: bool) -> Option<PageSliderView> {
        if store.is_element_disabled(&self.element) {
            return None;
        }
        Some(PageSliderView {
            element: self.element.clone(),
            min: 1,
            max: store.total_pages(),
            step: 1,
            value: store.current_page(),
            fade_out: fade_out(store, show_nav_overlay, self.is_focused),
        })
    }

    /// Handles a raw slider value.
    pub fn on_change(&self, raw: &str, engine: &dyn DocumentEngine) -> PageNavOutcome {
        match parse_page(raw) {
            Some(page) => navigate(engine, page),
            None => PageNavOutcome::Ignored,
        }
    }
}

/// Reads a page number from the leading digits of `raw`, tolerating leading
/// whitespace and trailing garbage (`"12px"` is page 12).
///
/// Zero is rejected on purpose: pages are 1-based, so `"0"` never reaches the engine.
fn parse_page(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(digits.len(), |(i, _)| i);
    digits[..end].parse::<u32>().ok().filter(|page| *page > 0)
}
