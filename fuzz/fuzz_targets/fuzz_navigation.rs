#![no_main]

use libfuzzer_sys::fuzz_target;

use rwa_core::click_map::CLICK_TARGETS;
use rwa_core::{NavigationContext, PageId};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let width = u32::from(u16::from_le_bytes([data[0], data[1]]));
    let mut ctx = NavigationContext::new(width);
    let mut depth = 1usize;

    // Each byte pair is one operation: kind, then argument.
    for op in data[2..].chunks_exact(2) {
        let arg = usize::from(op[1]);
        match op[0] % 5 {
            0 => {
                ctx.navigate(PageId::ALL[arg % PageId::ALL.len()]);
                depth += 1;
            }
            1 => {
                let went_back = ctx.go_back();
                assert_eq!(went_back, depth > 1);
                depth = depth.saturating_sub(1).max(1);
            }
            2 => {
                let (text, _) = CLICK_TARGETS[arg % CLICK_TARGETS.len()];
                assert!(ctx.click(text).is_some());
                depth += 1;
            }
            3 => {
                ctx.navigate(format!("unknown-{arg}"));
                depth += 1;
            }
            _ => {
                ctx.resize(u32::from(op[1]) * 16);
            }
        }

        assert_eq!(ctx.history().len(), depth);
        assert_eq!(ctx.history().last(), Some(ctx.current_page()));
        assert_eq!(ctx.can_go_back(), depth > 1);
        assert_eq!(ctx.markers().classes().len(), 1);
        // Selection is total.
        let _ = ctx.selected_unit();
    }
});
