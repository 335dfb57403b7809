//! Click-to-navigate adapter for imported static markup.
//!
//! Imported design pages have no navigation of their own. Clicks inside them
//! are reinterpreted by the literal text of the clicked element. Text that is
//! not in the table is ignored.

use crate::page::PageId;

/// Clickable text and the page it leads to.
pub const CLICK_TARGETS: [(&str, PageId); 25] = [
    ("Assets", PageId::Assets),
    ("Home", PageId::Home),
    ("Portfolio", PageId::Portfolio),
    ("Price Projections", PageId::PriceProjections),
    ("Wholesome", PageId::Wholesome),
    ("Fractional", PageId::Fractional),
    ("My Wallets", PageId::Wallets),
    ("Wallets", PageId::Wallets),
    ("Rewards", PageId::Rewards),
    ("Farming", PageId::Farming),
    ("Refer & Earn", PageId::ReferAndEarn),
    ("My Profile", PageId::Profile),
    ("Profile", PageId::Profile),
    ("Transaction History", PageId::TransactionHistory),
    ("Transactions", PageId::TransactionHistory),
    ("Support", PageId::Support),
    ("John Doe", PageId::Profile),
    ("View", PageId::Assets),
    ("Buy Now", PageId::Assets),
    ("Learn more", PageId::Assets),
    ("Buy", PageId::Assets),
    ("Explore", PageId::Details),
    ("View Details", PageId::Details),
    ("Fractional Assets", PageId::Fractional),
    ("Wholesome Assets", PageId::Wholesome),
];

/// Page the clicked `text` navigates to, if any.
///
/// Surrounding whitespace is ignored; matching is otherwise exact.
#[must_use]
pub fn resolve(text: &str) -> Option<PageId> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    CLICK_TARGETS
        .iter()
        .find(|(label, _)| *label == text)
        .map(|(_, page)| *page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<&str> = CLICK_TARGETS.iter().map(|(l, _)| *l).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), CLICK_TARGETS.len());
    }

    #[test]
    fn labels_are_trimmed() {
        for (label, _) in CLICK_TARGETS {
            assert_eq!(label, label.trim());
        }
    }

    #[test]
    fn resolves_known_text() {
        assert_eq!(resolve("Assets"), Some(PageId::Assets));
        assert_eq!(resolve("My Profile"), Some(PageId::Profile));
        assert_eq!(resolve("Buy Now"), Some(PageId::Assets));
        assert_eq!(resolve("View Details"), Some(PageId::Details));
        assert_eq!(resolve("Refer & Earn"), Some(PageId::ReferAndEarn));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(resolve("  Explore\n"), Some(PageId::Details));
    }

    #[test]
    fn unmatched_text_is_ignored() {
        assert_eq!(resolve("Connect Wallet"), None);
        assert_eq!(resolve("assets"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("   "), None);
    }

    #[test]
    fn aliases_are_never_click_targets() {
        assert!(CLICK_TARGETS
            .iter()
            .all(|(_, page)| !matches!(page, PageId::Frame | PageId::Main)));
    }
}
