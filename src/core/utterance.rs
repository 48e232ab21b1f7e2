//! Speech transcript normalisation
//!
//! A recogniser hands over free text ("Crane.", "c r a n e"). Only the
//! letters count; an utterance that does not come out at exactly
//! [`WORD_LENGTH`] letters is dropped instead of being submitted.

use super::WORD_LENGTH;

/// Turn a transcript into a candidate guess
///
/// # Examples
/// ```
/// use shoutdle::core::normalize_utterance;
///
/// assert_eq!(normalize_utterance(" Crane. ").as_deref(), Some("CRANE"));
/// assert_eq!(normalize_utterance("c r a n e").as_deref(), Some("CRANE"));
/// assert_eq!(normalize_utterance("hello there"), None);
/// ```
#[must_use]
pub fn normalize_utterance(transcript: &str) -> Option<String> {
    let word: String = transcript
        .trim()
        .to_uppercase()
        .chars()
        .filter(char::is_ascii_uppercase)
        .collect();

    (word.len() == WORD_LENGTH).then_some(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_spaces() {
        assert_eq!(normalize_utterance("Shout!"), Some("SHOUT".to_string()));
        assert_eq!(normalize_utterance("s-h-o-u-t"), Some("SHOUT".to_string()));
    }

    #[test]
    fn drops_wrong_length() {
        assert_eq!(normalize_utterance("shouting"), None);
        assert_eq!(normalize_utterance("hi"), None);
        assert_eq!(normalize_utterance(""), None);
        assert_eq!(normalize_utterance("12345"), None);
    }

    #[test]
    fn drops_non_ascii_letters() {
        // É is dropped, so neither comes out at five letters
        assert_eq!(normalize_utterance("café!"), None);
        assert_eq!(normalize_utterance("cafés"), None);
    }
}
