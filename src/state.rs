//! Page state that lives for one page load. Nothing here touches the DOM,
//! the view layer in `app` owns the signals and calls into these types.

mod contact;
mod disclosure;
mod nav;
mod tabs;
mod theme;

pub use contact::{ContactForm, SubmitError, SubmitState};
pub use disclosure::{DisclosureSet, PointerKind};
pub use nav::{MenuState, NavMenu};
pub use tabs::TabSelector;
pub use theme::{Theme, Viewport, MOBILE_BREAKPOINT};
