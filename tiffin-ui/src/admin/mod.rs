//! Back-office state: menu maintenance, profile editing, order views

pub mod menu_filter;
pub mod menu_form;
pub mod orders_view;
pub mod profile_form;

pub use menu_filter::AdminMenuFilter;
pub use menu_form::{MenuBook, MenuItemForm, PORTION_KEYS};
pub use orders_view::{CompletedOrdersView, DateFilter};
pub use profile_form::ProfileForm;

use thiserror::Error;

/// Form-level validation failures, surfaced as inline messages
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please select a category")]
    MissingCategory,

    #[error("Please select a product image")]
    MissingImage,

    #[error("Please enter a valid single price")]
    InvalidSinglePrice,

    #[error("Please enter at least one valid variant price")]
    NoVariantPrice,

    #[error("At least one order mode must be enabled")]
    LastOrderMode,

    #[error("File size too large: {size_kb} KB. Max: {max_kb} KB")]
    ImageTooLarge { size_kb: u64, max_kb: u64 },

    #[error("Please select a valid image file (JPEG, PNG, etc.)")]
    UnsupportedImageType,

    #[error("Please fix the selected image before saving")]
    PendingImageError,
}
