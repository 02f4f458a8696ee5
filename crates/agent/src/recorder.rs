/// Write-only sink for per-step training statistics.
pub trait StatsSink {
    fn add(&mut self, key: &str, value: f32);
}

/// Buffers samples in memory, mainly for tests.
#[derive(Default)]
pub struct MemorySink {
    samples: Vec<(String, f32)>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn samples(&self) -> &[(String, f32)] {
        &self.samples
    }
}

impl StatsSink for MemorySink {
    fn add(&mut self, key: &str, value: f32) {
        self.samples.push((key.to_owned(), value));
    }
}

/// Discards everything.
#[derive(Default)]
pub struct NullSink;

impl StatsSink for NullSink {
    fn add(&mut self, _key: &str, _value: f32) {}
}
