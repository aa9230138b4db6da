//! Page navigation overlays shown over the document.
//!
//! - [`page_nav`]: previous/next buttons and the page slider

pub mod page_nav;

pub use page_nav::{
    PageButtonView, PageNavOutcome, PageNextOverlay, PagePreviousOverlay, PageSliderOverlay, PageSliderView,
    PageStep, PageStepOverlay,
};
