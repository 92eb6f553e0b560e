/// Classification for retry policy.
///
/// Sources make a single attempt per call. This classification only tells
/// the caller whether re-invoking on its own cadence can help.
///
/// | Class | Re-invoke? |
/// |-------|------------|
/// | `Never` | No, the request itself is invalid |
/// | `WithBackoff` | Yes, after waiting (rate limit, timeout, network) |
/// | `Later` | Maybe, the provider reported an internal problem |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Bad symbol, validation error, or unsupported operation.
    Never,

    /// Transient failure such as a 429 or a timeout.
    WithBackoff,

    /// Provider-side failure of unknown duration.
    Later,
}
