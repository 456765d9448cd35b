pub mod account;
pub mod contact;
pub mod directory;
pub mod session;
pub mod theme;

// re-export core types
pub use account::{Account, AccountView, AvatarPatch, NewAccount, ProfileUpdate, Role};
pub use contact::{ContactMessage, ContactOutcome, ContactRequest};
pub use directory::{DirectoryRecord, NewDirectoryRecord, SeedResponse};
pub use session::{LoginOutcome, TokenClaims, VerifiedSession};
pub use theme::Theme;
