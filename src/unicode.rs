use crate::std::string::String;

use crate::Bar;

/// Quiet zone on each side, in modules.
const QUIET_ZONE: usize = 10;

/// Create a string representation of the bars using Unicode block characters.
///
/// Every character covers two modules. The quiet zones are included.
///
/// ## Example
/// ```
/// # use code128_draw::{bars_to_blocks, Code128, Subset};
/// let code = Code128::builder().with_subset(Subset::Auto).build("<3")?;
/// assert_eq!(
///     bars_to_blocks(code.bars()),
///     "     █▐ ▌ ▐█ █▐ █ ▌█▌▐  ▌█ █ ▐█▐▐▌     ",
/// );
/// # Ok::<(), code128_draw::EncodingError>(())
/// ```
pub fn bars_to_blocks(bars: impl IntoIterator<Item = Bar>) -> String {
    let modules = core::iter::repeat(false)
        .take(QUIET_ZONE)
        .chain(bars.into_iter().flat_map(|bar| {
            core::iter::repeat(true)
                .take(usize::from(bar.width))
                .chain(core::iter::repeat(false).take(usize::from(bar.space)))
        }))
        .chain(core::iter::repeat(false).take(QUIET_ZONE));

    let mut blocks = String::new();
    let mut left = None;
    for module in modules {
        match left.take() {
            None => left = Some(module),
            Some(first) => blocks.push(block(first, module)),
        }
    }
    if let Some(first) = left {
        blocks.push(block(first, false));
    }
    blocks
}

fn block(left: bool, right: bool) -> char {
    match (left, right) {
        (true, true) => '█',
        (true, false) => '▌',
        (false, true) => '▐',
        (false, false) => ' ',
    }
}

#[test]
fn test_blocks_ab() {
    let code = crate::Code128::builder().build("AB").unwrap();
    assert_eq!(
        bars_to_blocks(code.bars()),
        "     █▐ ▌ ▐▐ ▐▌ ▌ ▌█ ▐█▌▌█▌█ ▐█▐▐▌     "
    );
}

#[test]
fn test_odd_module_count() {
    assert_eq!(bars_to_blocks([Bar { width: 1, space: 0 }]), "     ▌     ");
}
