//! Funding request status
//!
//! Tracks one faucet request at a time. `success` and `error` are never both
//! true; `in_flight` is true only between `begin` and `succeed`/`fail`.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FundingStatus {
    pub in_flight: bool,
    pub success: bool,
    pub error: bool,
}

impl FundingStatus {
    /// A request is being sent. Clears a previous error so the banner
    /// disappears while the retry is in flight.
    pub fn begin(&mut self) {
        self.in_flight = true;
        self.error = false;
    }

    pub fn succeed(&mut self) {
        self.in_flight = false;
        self.success = true;
        self.error = false;
    }

    pub fn fail(&mut self) {
        self.in_flight = false;
        self.success = false;
        self.error = true;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_sets_in_flight_and_clears_error() {
        let mut status = FundingStatus {
            error: true,
            ..Default::default()
        };
        status.begin();
        assert!(status.in_flight);
        assert!(!status.error);
    }

    #[test]
    fn succeed_clears_in_flight_and_error() {
        let mut status = FundingStatus::default();
        status.begin();
        status.succeed();
        assert_eq!(
            status,
            FundingStatus {
                in_flight: false,
                success: true,
                error: false,
            }
        );
    }

    #[test]
    fn fail_clears_in_flight_and_success() {
        let mut status = FundingStatus::default();
        status.begin();
        status.succeed();

        // A later request that fails must not leave both flags set
        status.begin();
        status.fail();
        assert_eq!(
            status,
            FundingStatus {
                in_flight: false,
                success: false,
                error: true,
            }
        );
    }

    #[test]
    fn reset_clears_everything() {
        let mut status = FundingStatus::default();
        status.begin();
        status.fail();
        status.reset();
        assert_eq!(status, FundingStatus::default());

        status.begin();
        status.succeed();
        status.reset();
        assert_eq!(status, FundingStatus::default());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut status = FundingStatus::default();
        status.reset();
        status.reset();
        assert_eq!(status, FundingStatus::default());
    }
}
