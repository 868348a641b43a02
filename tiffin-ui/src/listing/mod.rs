//! Menu display and cart derivation
//!
//! The storefront's leaf consumer of menu and cart snapshots: groups items
//! by category, tracks per-item variant selections, derives each row's
//! price, addability, and quantity, and issues cart mutations.

pub mod grouping;
pub mod modal;
pub mod popover;
pub mod session;

pub use grouping::group_by_category;
pub use modal::DescriptionModal;
pub use popover::{OutsideClickBinding, Subscription, VariantPopover};
pub use session::{ItemRow, ListingSession};
