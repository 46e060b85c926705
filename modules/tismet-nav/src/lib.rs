//! Navigation chrome for the tismet admin webapp.
//!
//! Each page owns a [`PageView`]. Page handlers call [`nav_top_intro`] or
//! [`admin_intro`] to declare which nav entries are selected; the
//! initializers register derived accessors into the view and request the
//! shared chrome fragments, which a [`FragmentRegistry`] later renders.

pub mod error;
pub mod fragment;
pub mod intro;
pub mod nav;
pub mod status;
pub mod view;

pub use error::NavError;
pub use fragment::FragmentRegistry;
pub use intro::{admin_intro, nav_top_intro};
pub use nav::NavEntry;
pub use status::{full_class, StatusClass};
pub use view::{PageHost, PageView, ViewOpts};
