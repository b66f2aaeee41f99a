use crate::color::Color;

/// Exhaustive search for the candidate that best approximates a target color.
/// Implementations are read-only after construction, so one matcher can serve many threads.
pub trait Matcher: Sync {
    type Output: Send;
    fn best_match(&self, target: Color) -> Self::Output;
}
