//! Binary rain: the field of drifting `0`/`1` strings behind the page.
//!
//! The field is plain data so it can be generated and stepped without a
//! browser. Randomness comes from an [`Entropy`] source which tests seed
//! explicitly.

/// Number of strings in the field.
pub const STRING_COUNT: usize = 20;
/// Milliseconds between animation ticks.
pub const TICK_MS: u64 = 100;

const MIN_LEN: u32 = 10;
const LEN_SPREAD: u32 = 20;
const MIN_SPEED: f64 = 0.1;
const SPEED_SPREAD: f64 = 0.5;
const MUTATE_CHANCE: f64 = 0.05;

pub trait Entropy {
    fn next_u32(&mut self) -> u32;

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Uniform in `[0, bound)`.
    fn below(&mut self, bound: u32) -> u32 {
        (self.next_f64() * bound as f64) as u32
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Deterministic xorshift32 PRNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn seeded(seed: u32) -> Self {
        // never zero, xorshift would get stuck
        Self {
            state: seed.wrapping_mul(2654435761) | 1,
        }
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::seeded(0)
    }
}

impl Entropy for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryString {
    pub id: usize,
    pub text: String,
    /// Horizontal position, percent of the viewport width
    pub x: f64,
    /// Vertical position, percent of the viewport height
    pub y: f64,
    pub speed: f64,
}

impl BinaryString {
    pub fn random(id: usize, rng: &mut impl Entropy) -> Self {
        let len = (MIN_LEN + rng.below(LEN_SPREAD)) as usize;
        Self {
            id,
            text: random_digits(len, rng),
            x: rng.next_f64() * 100.0,
            y: rng.next_f64() * 100.0,
            speed: MIN_SPEED + rng.next_f64() * SPEED_SPREAD,
        }
    }

    /// Advance one tick: drift down (wrapping at 100) and occasionally
    /// re-roll the digits, keeping the length.
    pub fn step(&mut self, rng: &mut impl Entropy) {
        self.y = (self.y + self.speed) % 100.0;
        if rng.chance(MUTATE_CHANCE) {
            self.text = random_digits(self.text.len(), rng);
        }
    }
}

pub fn random_digits(len: usize, rng: &mut impl Entropy) -> String {
    (0..len)
        .map(|_| if rng.chance(0.5) { '1' } else { '0' })
        .collect()
}

pub fn generate(count: usize, rng: &mut impl Entropy) -> Vec<BinaryString> {
    (0..count).map(|id| BinaryString::random(id, rng)).collect()
}

pub fn tick(strings: &mut [BinaryString], rng: &mut impl Entropy) {
    for s in strings.iter_mut() {
        s.step(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_binary(s: &str) -> bool {
        s.chars().all(|c| c == '0' || c == '1')
    }

    /// Always returns the same value, for steering `chance`.
    struct Fixed(u32);

    impl Entropy for Fixed {
        fn next_u32(&mut self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_xorshift_no_zero() {
        let mut rng = XorShift32::seeded(0);
        for _ in 0..10_000 {
            assert_ne!(rng.next_u32(), 0);
        }
    }

    #[test]
    fn test_generate_shape() {
        let mut rng = XorShift32::seeded(7);
        let strings = generate(STRING_COUNT, &mut rng);
        assert_eq!(strings.len(), 20);
        for (i, s) in strings.iter().enumerate() {
            assert_eq!(s.id, i);
            assert!((10..=29).contains(&s.text.len()), "len {}", s.text.len());
            assert!(is_binary(&s.text));
            assert!((0.0..100.0).contains(&s.x));
            assert!((0.0..100.0).contains(&s.y));
            assert!((0.1..0.6).contains(&s.speed));
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let mut a = XorShift32::seeded(42);
        let mut b = XorShift32::seeded(42);
        let mut field_a = generate(STRING_COUNT, &mut a);
        let mut field_b = generate(STRING_COUNT, &mut b);
        assert_eq!(field_a, field_b);

        for _ in 0..50 {
            tick(&mut field_a, &mut a);
            tick(&mut field_b, &mut b);
        }
        assert_eq!(field_a, field_b);
    }

    #[test]
    fn test_step_wraps() {
        let mut s = BinaryString {
            id: 0,
            text: "0101010101".to_string(),
            x: 10.0,
            y: 99.75,
            speed: 0.5,
        };
        // u32::MAX never passes the 5% mutation roll
        s.step(&mut Fixed(u32::MAX));
        assert!((s.y - 0.25).abs() < 1e-9);
        assert_eq!(s.text, "0101010101");
    }

    #[test]
    fn test_step_mutates_on_roll() {
        let mut s = BinaryString {
            id: 3,
            text: "0000000000000".to_string(),
            x: 50.0,
            y: 1.0,
            speed: 0.2,
        };
        // 0 passes the mutation roll and every digit roll
        s.step(&mut Fixed(0));
        assert_eq!(s.text, "1111111111111");
        assert!((s.y - 1.2).abs() < 1e-9);
        assert_eq!(s.id, 3);
        assert_eq!(s.x, 50.0);
    }

    proptest! {
        #[test]
        fn test_tick_invariants(seed in any::<u32>(), ticks in 1usize..200) {
            let mut rng = XorShift32::seeded(seed);
            let mut strings = generate(STRING_COUNT, &mut rng);
            let lens = strings.iter().map(|s| s.text.len()).collect::<Vec<_>>();
            for _ in 0..ticks {
                let before = strings.iter().map(|s| s.y).collect::<Vec<_>>();
                tick(&mut strings, &mut rng);
                for (s, old_y) in strings.iter().zip(before) {
                    prop_assert!((0.0..100.0).contains(&s.y));
                    prop_assert_eq!(s.y, (old_y + s.speed) % 100.0);
                }
            }
            for (s, len) in strings.iter().zip(lens) {
                prop_assert_eq!(s.text.len(), len);
                prop_assert!(is_binary(&s.text));
            }
        }

        #[test]
        fn test_random_digits_len(seed in any::<u32>(), len in 0usize..64) {
            let mut rng = XorShift32::seeded(seed);
            let digits = random_digits(len, &mut rng);
            prop_assert_eq!(digits.len(), len);
            prop_assert!(is_binary(&digits));
        }
    }
}
