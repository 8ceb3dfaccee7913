//! Scripted keypad session.
//!
//! Runs a handful of key sequences through a session and prints the display
//! after each one. Set `RUST_LOG=keycalc=debug` to watch every state
//! transition.
//!
//! ```sh
//! cargo run --example keypad_session
//! RUST_LOG=keycalc=debug cargo run --example keypad_session
//! ```

use keycalc::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> CalcResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut session = Session::new();

    let scripts = [
        "12+34=",  // plain addition
        "2+3*4=",  // left-to-right chaining: (2+3)*4
        "1..5=",   // second decimal point ignored
        "5/0=",    // floating-point semantics, not an error
        "5**",     // operator out of sequence
        "C",       // clear recovers
    ];

    for keys in scripts {
        session.press(ButtonEvent::Clear);
        session.press_keys(keys)?;
        println!("{keys:>8}  ->  {}", session.display());
    }

    // The same button by element id, the way the host shell fires it
    session.press(ButtonEvent::Clear);
    for id in ["button-7", "button-multiply", "button-6", "button-add-equals"] {
        session.click(id)?;
    }
    println!("{:>8}  ->  {}", "7*6=", session.display());

    Ok(())
}
