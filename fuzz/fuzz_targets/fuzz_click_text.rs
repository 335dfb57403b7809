#![no_main]

use libfuzzer_sys::fuzz_target;

use rwa_core::click_map::{resolve, CLICK_TARGETS};
use rwa_core::NavigationContext;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let expected = CLICK_TARGETS
        .iter()
        .find(|(key, _)| *key == text.trim())
        .map(|(_, page)| *page);
    assert_eq!(resolve(text), expected);

    let mut ctx = NavigationContext::new(1280);
    let before = ctx.history().len();
    let target = ctx.click(text);
    assert_eq!(target, expected);
    assert_eq!(ctx.history().len(), before + usize::from(target.is_some()));
});
