mod endpoint;
pub mod free_dictionary;
pub mod words_api;

pub use free_dictionary::FreeDictionaryProvider;
pub use words_api::WordsApiProvider;
