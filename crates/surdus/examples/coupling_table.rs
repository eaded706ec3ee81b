//! Prints small tables of exact Wigner symbols.
//!
//! Run with: `cargo run --example coupling_table`

use surdus::prelude::*;
use surdus::wigner::WignerError;

fn main() -> Result<(), WignerError> {
    println!("=== 3j symbols (j1 j2 j3; m 0 -m) for j1 = j2 = 1, j3 = 2 ===\n");
    let (j1, j2, j3) = (Half::from_int(1), Half::from_int(1), Half::from_int(2));
    for tm in (-2..=2).step_by(2) {
        let m = Half::new(tm);
        let squared = wigner_3j(j1, j2, j3, m, Half::ZERO, -m)?;
        let symbol = RationalSurd::from_factored(&squared)?;
        println!(
            "  m = {m}:  {}  (\u{2248} {:.6})",
            symbol.render(SurdStyle::Radical),
            symbol.to_f64()
        );
    }

    println!("\n=== 6j symbols {{j j j; j j j}} ===\n");
    for n in 1..=6i64 {
        let j = Half::from_int(n);
        let squared = wigner_6j(j, j, j, j, j, j)?;
        let symbol = RationalSurd::from_factored(&squared)?;
        println!("  j = {n}:  {symbol}");
    }

    println!("\n=== 9j symbol with half-integer spins ===\n");
    let h = Half::new(1);
    let one = Half::from_int(1);
    let squared = wigner_9j(h, h, one, h, h, one, one, one, Half::ZERO)?;
    let symbol = RationalSurd::from_factored(&squared)?;
    println!(
        "  {{1/2 1/2 1; 1/2 1/2 1; 1 1 0}} = {}  (\u{2248} {:.6})",
        symbol.render(SurdStyle::Functional),
        symbol.to_f64()
    );

    Ok(())
}
