//! Serializable view of the static navigation tables.

use rwa_core::catalogue::{group_secondary_items, navigation_items, MenuBucket, NavigationItem};
use rwa_core::click_map::CLICK_TARGETS;
use rwa_core::{registry, DeviceClass, PageId, PageUnit};
use serde::Serialize;

/// One bucket of the mobile menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketSummary {
    pub bucket: MenuBucket,
    pub label: &'static str,
    pub items: Vec<PageId>,
}

/// Registry entry of a page per device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryRow {
    pub page: PageId,
    pub mobile: PageUnit,
    pub tablet: PageUnit,
    pub desktop: PageUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClickTarget {
    pub text: &'static str,
    pub page: PageId,
}

/// Everything `--list-pages` prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogueReport {
    pub items: &'static [NavigationItem],
    pub menu: Vec<BucketSummary>,
    pub registry: Vec<RegistryRow>,
    pub fallback: PageUnit,
    pub click_targets: Vec<ClickTarget>,
}

/// Collect the catalogue report.
#[must_use]
pub fn catalogue_report() -> CatalogueReport {
    let menu = group_secondary_items()
        .into_iter()
        .map(|group| BucketSummary {
            bucket: group.bucket,
            label: group.bucket.label(),
            items: group.items.iter().map(|item| item.id).collect(),
        })
        .collect();
    let registry = PageId::ALL
        .iter()
        .map(|&page| RegistryRow {
            page,
            mobile: registry::entry(page, DeviceClass::Mobile),
            tablet: registry::entry(page, DeviceClass::Tablet),
            desktop: registry::entry(page, DeviceClass::Desktop),
        })
        .collect();
    let click_targets = CLICK_TARGETS
        .iter()
        .map(|&(text, page)| ClickTarget { text, page })
        .collect();
    CatalogueReport {
        items: navigation_items(),
        menu,
        registry,
        fallback: registry::FALLBACK_UNIT,
        click_targets,
    }
}
