pub trait Preprocessor {
    // Default query preprocessor
    fn process(&self, text: &str) -> String {
        text.trim().to_lowercase()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Normalized form used as the lookup key
pub fn normalize_query(query: &str) -> String {
    DefaultPreprocessor.process(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(normalize_query("  HeLLo\n"), "hello");
        assert_eq!(normalize_query("Ice Cream"), "ice cream");
        assert_eq!(normalize_query(" \t "), "");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["  Serendipity ", "ÉCOLE", "already"] {
            let once = normalize_query(raw);
            assert_eq!(normalize_query(&once), once);
        }
    }
}
