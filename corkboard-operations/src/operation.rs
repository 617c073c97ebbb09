//! Operation metadata and execution traits

use serde_json::Value;

/// Metadata for an operation: a verb acting on a noun.
///
/// The canonical op string (e.g. "add card", "move card") is what appears in
/// the activity feed.
pub trait Operation {
    /// The action verb (e.g. "add", "delete", "move")
    fn verb(&self) -> &'static str;

    /// The entity noun (e.g. "board", "column", "card")
    fn noun(&self) -> &'static str;

    /// Human-readable description of what the operation does
    fn description(&self) -> &'static str;

    /// Canonical op string, `"{verb} {noun}"`
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Execute an operation against a context.
///
/// The context is exclusively owned by the single UI thread; operations run
/// to completion before the next event is handled, so execution is
/// synchronous and takes `&mut Ctx`.
pub trait Execute<Ctx, Err> {
    /// Run the operation, returning a JSON result payload
    fn execute(&self, ctx: &mut Ctx) -> Result<Value, Err>;
}
