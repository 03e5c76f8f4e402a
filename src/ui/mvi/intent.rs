//! Screen actions.

/// Everything a holder accepts through `StateHolder::handle`.
///
/// One enum per screen carries the field edits and submits from the surface,
/// the `Started`/`Finished` pairs that launched tasks post back, and the
/// `Init` arguments a screen is opened with. Only the reducer interprets them.
pub trait Intent: Send + 'static {}
