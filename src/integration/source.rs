//! Trait for pose-estimation backends.

use crate::vote::PoseObservation;

/// Trait for pose-estimation backends.
///
/// Implement this trait to feed any pose model into the vote pipeline. The
/// source owns its camera or frame supply; it is polled once per tick.
///
/// # Example
///
/// ```ignore
/// use posevote_rs::{PoseObservation, PoseSource};
///
/// struct MyEstimator {
///     // Your camera and model here
/// }
///
/// impl PoseSource for MyEstimator {
///     type Error = std::io::Error;
///
///     fn estimate(&mut self) -> Result<Vec<PoseObservation>, Self::Error> {
///         // Grab a frame, run inference and return one observation per person
///         Ok(vec![])
///     }
/// }
/// ```
pub trait PoseSource {
    /// Error type for estimation failures.
    type Error: std::error::Error;

    /// Estimate poses for the current frame.
    ///
    /// # Returns
    /// One observation per detected subject, most prominent first. Only the
    /// first one is used; an empty vector means nobody is in view.
    fn estimate(&mut self) -> Result<Vec<PoseObservation>, Self::Error>;
}

/// Helper trait for converting model-specific outputs to `PoseObservation`s.
pub trait IntoObservations {
    /// Convert the output into one observation per subject.
    fn into_observations(self) -> Vec<PoseObservation>;
}

impl IntoObservations for Vec<PoseObservation> {
    fn into_observations(self) -> Vec<PoseObservation> {
        self
    }
}

impl IntoObservations for Option<PoseObservation> {
    fn into_observations(self) -> Vec<PoseObservation> {
        self.into_iter().collect()
    }
}

impl IntoObservations for PoseObservation {
    fn into_observations(self) -> Vec<PoseObservation> {
        vec![self]
    }
}

/// Adapts a closure into a [`PoseSource`].
///
/// The closure may return anything implementing [`IntoObservations`], so a
/// single-pose model can hand back an `Option<PoseObservation>` directly.
pub struct FnSource<F>(pub F);

impl<F, T, E> PoseSource for FnSource<F>
where
    F: FnMut() -> Result<T, E>,
    T: IntoObservations,
    E: std::error::Error,
{
    type Error = E;

    fn estimate(&mut self) -> Result<Vec<PoseObservation>, Self::Error> {
        (self.0)().map(IntoObservations::into_observations)
    }
}
