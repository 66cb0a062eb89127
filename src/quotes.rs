//! Quote data model, the built-in fallback list, and random selection.

use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single quote row.
///
/// `id` is assigned by the store and opaque to clients; the fallback list
/// numbers its entries 1-10 for the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: i64,
    pub text: String,
    pub author: String,
}

impl Quote {
    fn new(id: i64, text: &str, author: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
            author: author.to_string(),
        }
    }
}

/// Quotes served when the store has nothing to offer.
static FALLBACK_QUOTES: Lazy<Vec<Quote>> = Lazy::new(|| {
    vec![
        Quote::new(
            1,
            "✨ The best way to get started is to quit talking and begin doing.",
            "Walt Disney",
        ),
        Quote::new(2, "🔥 Don't let yesterday take up too much of today.", "Will Rogers"),
        Quote::new(
            3,
            "💪 It's not whether you get knocked down, it's whether you get up.",
            "Vince Lombardi",
        ),
        Quote::new(
            4,
            "🚀 If you are working on something exciting, it will keep you motivated.",
            "GenZ Wisdom",
        ),
        Quote::new(5, "🌈 Success is not in what you have, but who you are.", "Bo Bennett"),
        Quote::new(6, "😎 Dream big, hustle harder.", "GenZ Motivation"),
        Quote::new(7, "👾 Stay weird, stay creative.", "GenZ Vibes"),
        Quote::new(8, "🦄 Be yourself, everyone else is taken.", "Oscar Wilde"),
        Quote::new(9, "💥 Make it happen, Gen Z style!", "GenZ Energy"),
        Quote::new(10, "🌟 You are the main character of your story.", "GenZ Wisdom"),
    ]
});

/// Return a copy of the built-in fallback list.
pub fn fallback_quotes() -> Vec<Quote> {
    FALLBACK_QUOTES.clone()
}

/// Pick one quote uniformly at random.
///
/// `quotes` must be non-empty. Both call sites guarantee this: the fallback
/// list is hardcoded non-empty and the cache never returns an empty list.
pub fn pick_random(quotes: &[Quote]) -> &Quote {
    let idx = rand::thread_rng().gen_range(0..quotes.len());
    &quotes[idx]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fallback_list_has_ten_quotes() {
        assert_eq!(fallback_quotes().len(), 10);
    }

    #[test]
    fn test_fallback_list_content_and_order_stable() {
        let quotes = fallback_quotes();
        assert_eq!(quotes[0].author, "Walt Disney");
        assert_eq!(
            quotes[0].text,
            "✨ The best way to get started is to quit talking and begin doing."
        );
        assert_eq!(quotes[7].author, "Oscar Wilde");
        assert_eq!(quotes[9].text, "🌟 You are the main character of your story.");
        // ids run 1..=10 in order
        let ids: Vec<i64> = quotes.iter().map(|q| q.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<i64>>());
    }

    #[test]
    fn test_fallback_returns_a_fresh_copy() {
        let mut first = fallback_quotes();
        first[0].text = "mutated".into();
        assert_ne!(fallback_quotes()[0].text, "mutated");
    }

    #[test]
    fn test_pick_random_single_element() {
        let quotes = vec![Quote::new(1, "only", "one")];
        for _ in 0..10 {
            assert_eq!(pick_random(&quotes).text, "only");
        }
    }

    #[test]
    fn test_pick_random_stays_in_bounds_and_covers_all_indices() {
        let quotes = fallback_quotes();
        let mut seen = HashSet::new();
        // 500 draws over 10 quotes: every index shows up, none out of bounds.
        for _ in 0..500 {
            let picked = pick_random(&quotes);
            assert!(quotes.iter().any(|q| q == picked));
            seen.insert(picked.id);
        }
        assert_eq!(seen.len(), quotes.len());
    }

    #[test]
    fn test_quote_serde_roundtrip() {
        let json = r#"{"id":42,"text":"Hi","author":"A"}"#;
        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.id, 42);
        assert_eq!(quote.text, "Hi");
        let back = serde_json::to_string(&quote).unwrap();
        assert_eq!(back, json);
    }
}
