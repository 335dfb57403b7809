//! # rwa-core
//!
//! Core of the RWA dashboard navigation shell: the page catalogue, the
//! navigation history, device classification from viewport width and the
//! registry that picks which page unit to mount.

pub mod catalogue;
pub mod click_map;
pub mod constants;
pub mod context;
pub mod device;
pub mod error;
pub mod feedback;
pub mod history;
pub mod page;
pub mod registry;
pub mod units;

// Re-exports
pub use catalogue::{MenuBucket, MenuGroup, NavigationItem, NAVIGATION_ITEMS};
pub use context::{ContextSnapshot, NavigationContext};
pub use device::{DeviceClass, DeviceClassifier, RootMarkers, ViewportSource};
pub use error::ShellError;
pub use feedback::{Haptics, NoHaptics};
pub use history::NavigationStore;
pub use page::{PageId, Route};
pub use units::{Affordance, PageUnit};
