//! Progress tracking for simulated downloads

/// Upper bound of the progress counter
pub const PROGRESS_MAX: u8 = 100;

/// Download status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DownloadStatus {
    #[default]
    Idle,
    InProgress,
    Complete,
}

/// Progress tracking structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadProgress {
    pub percent: u8,
    pub status: DownloadStatus,
    step: u8,
}

impl Default for DownloadProgress {
    fn default() -> Self {
        Self::new(10)
    }
}

impl DownloadProgress {
    /// Create an idle tracker that advances by `step` points per tick
    pub fn new(step: u8) -> Self {
        Self {
            percent: 0,
            status: DownloadStatus::Idle,
            step: step.clamp(1, PROGRESS_MAX),
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    /// Idle/Complete -> InProgress, counter back to zero
    pub fn start(&mut self) {
        self.percent = 0;
        self.status = DownloadStatus::InProgress;
    }

    /// Add one step, saturating at 100. Returns the new value while in progress.
    pub fn advance(&mut self) -> Option<u8> {
        if self.status != DownloadStatus::InProgress {
            return None;
        }
        self.percent = self.percent.saturating_add(self.step).min(PROGRESS_MAX);
        Some(self.percent)
    }

    /// Jump to a reported value; values going backwards are ignored
    pub fn set(&mut self, percent: u8) {
        if self.status == DownloadStatus::InProgress && percent > self.percent {
            self.percent = percent.min(PROGRESS_MAX);
        }
    }

    pub fn is_full(&self) -> bool {
        self.percent >= PROGRESS_MAX
    }

    /// Mark as completed
    pub fn complete(&mut self) {
        self.percent = PROGRESS_MAX;
        self.status = DownloadStatus::Complete;
    }

    /// Back to idle
    pub fn reset(&mut self) {
        self.percent = 0;
        self.status = DownloadStatus::Idle;
    }

    /// Get progress as a fraction (0.0 to 1.0)
    pub fn fraction(&self) -> f32 {
        f32::from(self.percent) / f32::from(PROGRESS_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_idle() {
        let progress = DownloadProgress::new(10);
        assert_eq!(progress.percent, 0);
        assert_eq!(progress.status, DownloadStatus::Idle);
        assert_eq!(progress.fraction(), 0.0);
    }

    #[test]
    fn test_advance_requires_start() {
        let mut progress = DownloadProgress::new(10);
        assert_eq!(progress.advance(), None);
        assert_eq!(progress.percent, 0);
    }

    #[test]
    fn test_advance_counts_to_100_in_fixed_steps() {
        let mut progress = DownloadProgress::new(10);
        progress.start();

        let mut seen = Vec::new();
        while !progress.is_full() {
            seen.push(progress.advance().unwrap());
        }

        assert_eq!(seen, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert_eq!(progress.advance(), Some(100), "saturates at 100");
    }

    #[test]
    fn test_uneven_step_saturates() {
        let mut progress = DownloadProgress::new(30);
        progress.start();
        let seen: Vec<_> = (0..5).filter_map(|_| progress.advance()).collect();
        assert_eq!(seen, vec![30, 60, 90, 100, 100]);
    }

    #[test]
    fn test_zero_step_is_clamped() {
        let progress = DownloadProgress::new(0);
        assert_eq!(progress.step(), 1);
    }

    #[test]
    fn test_full_lifecycle() {
        let mut progress = DownloadProgress::new(50);
        progress.start();
        assert_eq!(progress.status, DownloadStatus::InProgress);

        progress.advance();
        progress.advance();
        assert!(progress.is_full());

        progress.complete();
        assert_eq!(progress.status, DownloadStatus::Complete);
        assert_eq!(progress.fraction(), 1.0);

        progress.reset();
        assert_eq!(progress.status, DownloadStatus::Idle);
        assert_eq!(progress.percent, 0);

        progress.start();
        assert_eq!(progress.percent, 0, "restart begins from zero");
    }

    #[test]
    fn test_set_ignores_regressions() {
        let mut progress = DownloadProgress::new(10);
        progress.start();
        progress.set(40);
        progress.set(20);
        assert_eq!(progress.percent, 40);
        progress.set(250);
        assert_eq!(progress.percent, 100);
    }
}
