pub mod mail_list;
pub mod roster;
pub mod directory;
pub mod merged;

// Re-exports for convenience
pub use mail_list::MailList;
pub use roster::RosterEntry;
pub use directory::DirectoryRecord;
pub use merged::MergedPerson;
