mod aggregate;
mod repository;


pub use aggregate::Task;
pub use repository::TaskRepository;

/// Outcome of one transactional carry-over commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarryOverCommit {
    /// Source closed and a fresh copy inserted for today.
    Carried,
    /// Source closed; today already had a task with identical content.
    ClosedAsDuplicate,
    /// Source was closed by someone else first; nothing written.
    AlreadyClosed,
}
