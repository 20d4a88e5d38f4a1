use crate::models::SearchLogEntry;

/// Append-only search analytics sink.
///
/// Fire-and-forget: the signature is infallible by design. Implementations
/// absorb their own I/O failures; the core never observes them and never
/// reads entries back.
pub trait ISearchLogger: Send + Sync {
    fn log(&self, entry: SearchLogEntry);
}
