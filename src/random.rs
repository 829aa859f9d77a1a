use std::collections::VecDeque;

/// Source of uniformly distributed values in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

/// Draws from the operating system (or `crypto.getRandomValues` on the web).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_unit(&mut self) -> f32 {
        let mut bytes = [0u8; 4];
        if let Err(err) = getrandom::getrandom(&mut bytes) {
            log::warn!("random source unavailable, using 0: {err}");
            return 0.0;
        }
        // 24 bits is the full f32 mantissa
        (u32::from_le_bytes(bytes) >> 8) as f32 / (1u32 << 24) as f32
    }
}

/// Replays a fixed list of values, then repeats the last one.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: VecDeque<f32>,
    last: f32,
}

impl SequenceRandom {
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            last: 0.0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f32 {
        if let Some(value) = self.values.pop_front() {
            self.last = value;
        }
        self.last
    }
}
