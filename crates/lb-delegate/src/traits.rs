use async_trait::async_trait;
use lb_core::PassengerInput;

use crate::outcome::{DelegateOutcome, Unavailable};

#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, input: &PassengerInput) -> DelegateOutcome;

    /// Whether this classifier ever reaches a remote service.
    fn is_remote(&self) -> bool {
        true
    }
}

/// Delegate that is switched off. Always reports [`Unavailable::Disabled`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelegate;

#[async_trait]
impl Classifier for NoDelegate {
    async fn classify(&self, _input: &PassengerInput) -> DelegateOutcome {
        DelegateOutcome::Unavailable(Unavailable::Disabled)
    }

    fn is_remote(&self) -> bool {
        false
    }
}
