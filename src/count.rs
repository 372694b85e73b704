//! Word counting.
//!
//! Folds a token stream into a frequency map, substituting group labels for
//! grouped words as it goes. The accumulator is always passed explicitly so
//! that repeated calls (one per record in a corpus walk) add into the same
//! map without any hidden shared state.

use ahash::AHashMap;

use crate::analysis::token::Token;
use crate::synonym::SynonymLookup;

/// Frequency map from token (or group label, post-substitution) to count.
pub type FrequencyMap = AHashMap<String, u64>;

/// Count tokens into `accumulator`, substituting group labels.
///
/// Each token present in `lookup` is replaced by its group label before
/// counting. Accumulation is additive across calls.
///
/// # Examples
///
/// ```
/// use lexifreq::analysis::token::Token;
/// use lexifreq::count::{FrequencyMap, count_words};
/// use lexifreq::synonym::EmptyLookup;
///
/// let tokens = vec![Token::new("beep", 0), Token::new("beep", 1)];
/// let mut counts = FrequencyMap::new();
/// count_words(tokens.into_iter(), &EmptyLookup, &mut counts);
///
/// assert_eq!(counts.get("beep"), Some(&2));
/// ```
pub fn count_words<I>(tokens: I, lookup: &dyn SynonymLookup, accumulator: &mut FrequencyMap)
where
    I: Iterator<Item = Token>,
{
    for token in tokens {
        let word = match lookup.group_of(&token.text) {
            Some(label) => label.to_string(),
            None => token.text,
        };
        *accumulator.entry(word).or_insert(0) += 1;
    }
}
