// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Random color source for the randomize quick action.

use rand::{Rng, rngs::ThreadRng};

use super::RgbValue;

/// Each channel is drawn independently and uniformly from the full 8-bit range.
#[must_use]
pub fn generate() -> RgbValue {
    let mut rng: ThreadRng = rand::rng();

    RgbValue {
        red: rng.random_range(0..=u8::MAX),
        green: rng.random_range(0..=u8::MAX),
        blue: rng.random_range(0..=u8::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_varies() {
        // 16 independent draws of a 24-bit value collide on every single draw with
        // vanishing probability; a constant source would fail immediately.
        let first = generate();
        let all_equal = (0..16).map(|_| generate()).all(|color| color == first);
        assert!(!all_equal);
    }
}
