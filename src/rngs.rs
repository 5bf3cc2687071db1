// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Seedable generators used to produce test inputs.
//! Generators are always explicit values handed to the generation
//! functions, there is no global RNG.

use rand::{RngCore, SeedableRng};

/// Seeded source of 64 bit words.
pub trait RNG {
    fn new(seed: u64) -> Self;
    /// Next word of the stream. Generators with narrower state
    /// may step more than once per call.
    fn next(&mut self) -> u64;
}

/// Wrapper around the rand crates default seedable RNG.
pub struct ReferenceRand {
    rng: rand::rngs::StdRng,
}

impl RNG for ReferenceRand {
    fn new(seed: u64) -> Self {
        ReferenceRand {
            rng: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }

    fn next(&mut self) -> u64 {
        self.rng.next_u64()
    }
}

/// Pick a fresh seed from the thread local entropy source.
/// Callers log it so an unseeded run can be repeated.
pub fn fresh_seed() -> u64 {
    rand::random()
}

// Xorshift PRNGs
pub mod xorshift {
    use super::RNG;

    #[derive(Debug, Copy, Clone)]
    pub struct XORShift128 {
        state: [u32; 4],
    }

    impl XORShift128 {
        /// One 32 bit xorshift step.
        fn step(&mut self) -> u32 {
            let [s, a, b, c] = self.state;
            let t = c ^ (c << 11);
            let t = t ^ (t >> 8);
            self.state = [t ^ s ^ (s >> 19), s, a, b];
            self.state[0]
        }
    }

    impl RNG for XORShift128 {
        fn new(seed: u64) -> Self {
            // An all zero state never leaves zero.
            let seed = if seed == 0 { u64::MAX } else { seed };
            XORShift128 {
                state: [
                    seed as u32,
                    (seed >> 32) as u32,
                    !seed as u32,
                    (!seed >> 32) as u32,
                ],
            }
        }

        fn next(&mut self) -> u64 {
            let hi = self.step() as u64;
            (hi << 32) | self.step() as u64
        }
    }
}

/// Fixed output generators, handy for checking bit and byte layout.
pub mod testgens {
    use super::RNG;

    pub struct OnlyOne;
    impl RNG for OnlyOne {
        fn new(_seed: u64) -> Self {
            OnlyOne
        }

        fn next(&mut self) -> u64 {
            u64::MAX
        }
    }

    pub struct OnlyZero;
    impl RNG for OnlyZero {
        fn new(_seed: u64) -> Self {
            OnlyZero
        }

        fn next(&mut self) -> u64 {
            0
        }
    }

    /// Produces 1010... starting from the least significant bit.
    pub struct AlternatingBits;
    impl RNG for AlternatingBits {
        fn new(_seed: u64) -> Self {
            AlternatingBits
        }

        fn next(&mut self) -> u64 {
            0x5555555555555555
        }
    }
}
