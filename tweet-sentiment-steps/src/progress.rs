// Reports through tracing instead of indicatif so that progress shows up in non-tty logs too.
use {
    std::time::Instant,
    tracing::info,
};

pub struct Progress {
    message: String,
    total: usize,
    started_at: Instant,
    reported_at: Instant,
    total_processed: u64,
}

impl Progress {
    pub fn new(message: String, total: usize) -> Self {
        Self {
            message,
            total,
            started_at: Instant::now(),
            reported_at: Instant::now(),
            total_processed: 0,
        }
    }

    pub fn update(&mut self) -> bool {
        self.total_processed += 1;

        let now = Instant::now();
        if (now - self.reported_at).as_millis() >= 10_000 {
            self.reported_at = now;
            info!("{}: {}/{} ({:.2}/second)", self.message, self.total_processed, self.total, self.rate(now));
            true
        } else {
            false
        }
    }

    pub fn finish(&self) {
        info!("{}: done, {} total ({:.2}/second)", self.message, self.total_processed, self.rate(Instant::now()));
    }

    fn rate(&self, now: Instant) -> f32 {
        let elapsed = (now - self.started_at).as_secs_f32();
        if elapsed > 0.0 {
            (self.total_processed as f32) / elapsed
        } else {
            self.total_processed as f32
        }
    }
}
