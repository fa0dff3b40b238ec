/// Entities, quotes and projects are keyed by caller-supplied string ids
/// (the store owns id generation).
pub type EntityId = String;

pub type QuoteId = String;

pub type ProjectId = String;
