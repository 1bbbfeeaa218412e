use rotfold::{fold, mix, verify, INITIAL_STATE};

/// Fixed vectors for the mixer, iterated from the initial state.
const MIX_VECTORS: [u32; 3] = [0xded7e2d2, 0x1b725f7d, 0xa5886999];

/// Fixed message/word pairs for the full hash.
const FOLD_VECTORS: [(&[u8], u32); 6] = [
    (b"", 0xded7e2d2),
    (b"A", 0x5d725f7f),
    (b"AB", 0x5f3b5f7f),
    (b"ABC", 0x5f39137f),
    (b"ABCD", 0x5f391128),
    (b"ABCDE", 0x2f69af58),
];

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut state = INITIAL_STATE;
    for expected in MIX_VECTORS {
        state = mix(state);
        verify(state, expected)?;
    }
    println!("All tests of the static mix function succeeded");

    for (message, expected) in FOLD_VECTORS {
        verify(fold(message), expected)?;
    }
    println!("All tests of the fold hash succeeded");

    println!("All tests ran successfully");
    Ok(())
}
