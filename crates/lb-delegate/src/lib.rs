//! Lifeboat delegate — consults the remote classification service.
//!
//! Every call settles into a [`DelegateOutcome`]: either a decoded remote
//! prediction or an explicit reason the remote result is unusable. Nothing
//! is retried and no error escapes to the caller.

pub mod client;
pub mod outcome;
pub mod traits;
pub mod wire;

pub use client::RemoteClassifier;
pub use outcome::{DelegateOutcome, Unavailable};
pub use traits::{Classifier, NoDelegate};
pub use wire::{DelegateRequest, RemotePrediction};
