use std::io::Read;

use code128_draw::{bars_to_blocks, Code128, Subset};

fn main() {
    let mut msg = String::new();
    if atty::isnt(atty::Stream::Stdin) {
        std::io::stdin().read_to_string(&mut msg).unwrap();
    }
    let code = Code128::builder()
        .with_subset(Subset::Auto)
        .build(msg.trim_end_matches('\n'))
        .unwrap();
    let string = bars_to_blocks(code.bars());
    println!("{}", &string);
    println!("{}", &string);
    println!("{}", &string);
}
