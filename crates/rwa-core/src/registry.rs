//! Page registry and routing decision.

use crate::device::DeviceClass;
use crate::page::{PageId, Route};
use crate::units::PageUnit;

/// Unit mounted when the current route has no registry entry.
pub const FALLBACK_UNIT: PageUnit = PageUnit::AuthenticatedHome;

/// Registry entry for a known page.
#[must_use]
pub fn entry(page: PageId, device: DeviceClass) -> PageUnit {
    match page {
        PageId::Home => {
            if device.is_mobile() {
                PageUnit::MobileHome
            } else {
                PageUnit::AuthenticatedHome
            }
        }
        PageId::Assets => PageUnit::Assets,
        PageId::Portfolio => PageUnit::Portfolio,
        PageId::Wallets => PageUnit::Wallets,
        PageId::Profile => PageUnit::Profile,
        PageId::Fractional => PageUnit::Fractional,
        PageId::Wholesome => PageUnit::Wholesome,
        PageId::PriceProjections => PageUnit::PriceProjections,
        PageId::Rewards => PageUnit::Rewards,
        PageId::Farming => PageUnit::Farming,
        PageId::ReferAndEarn => PageUnit::ReferAndEarn,
        PageId::TransactionHistory => PageUnit::TransactionHistory,
        PageId::Support => PageUnit::Support,
        PageId::Details => PageUnit::Details,
        PageId::Frame => PageUnit::FrameImport,
        PageId::Main => PageUnit::MainDashboardImport,
    }
}

/// Choose the unit to mount for `route` on `device`.
///
/// Never fails: routes without an entry get [`FALLBACK_UNIT`].
#[must_use]
pub fn select(route: &Route, device: DeviceClass) -> PageUnit {
    match route {
        // The mobile home override applies before the table is consulted.
        Route::Page(PageId::Home) if device.is_mobile() => PageUnit::MobileHome,
        Route::Page(page) => entry(*page, device),
        Route::Unknown(id) => {
            tracing::trace!(page = %id, "no registry entry, using fallback");
            FALLBACK_UNIT
        }
    }
}

/// The full table for `device`, in page order.
#[must_use]
pub fn entries(device: DeviceClass) -> Vec<(PageId, PageUnit)> {
    PageId::ALL
        .iter()
        .map(|&page| (page, entry(page, device)))
        .collect()
}
