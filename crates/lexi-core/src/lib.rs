pub mod chat;
pub mod error;
pub mod fallback;
pub mod preprocess;
pub mod resolver;
pub mod retry;

pub use chat::Conversation;
pub use error::{BuildError, LoadError, LookupError};
pub use fallback::FallbackTable;
pub use resolver::{FailurePolicy, Lookup, Resolver, ResolverBuilder};
pub use retry::RetrySupervisor;
