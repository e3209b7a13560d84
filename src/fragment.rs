//! Palette <-> URL fragment codec.
//!
//! A palette is shared as `#RRGGBB-RRGGBB-...`: one token per swatch, in
//! order, without the per-color `#`. The only `#` is the fragment delimiter.

use crate::controller::Location;

/// Joins colors into a fragment body (no leading `#`).
pub fn encode_fragment<S: AsRef<str>>(colors: &[S]) -> String {
    colors
        .iter()
        .map(|color| {
            let color = color.as_ref();
            color.strip_prefix('#').unwrap_or(color)
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Splits a fragment (with or without its leading `#`) back into `#`-prefixed
/// colors. Tokens are passed through unvalidated.
pub fn decode_fragment(fragment: &str) -> Vec<String> {
    let body = fragment.strip_prefix('#').unwrap_or(fragment);
    if body.is_empty() {
        return Vec::new();
    }
    body.split('-').map(|token| format!("#{token}")).collect()
}

/// In-memory fragment, used where there is no browser address bar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShareLocation {
    hash: String,
}

impl ShareLocation {
    /// Accepts a full share URL, a `#`-prefixed fragment or a bare body.
    pub fn from_input(input: &str) -> Self {
        let input = input.trim();
        let body = match input.split_once('#') {
            Some((_, body)) => body,
            None if input.contains("://") => "",
            None => input,
        };
        let mut location = Self::default();
        location.replace_fragment(body);
        location
    }

    /// Fragment as a browser would report it, `#` included.
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl Location for ShareLocation {
    fn fragment(&self) -> String {
        self.hash.clone()
    }

    fn replace_fragment(&mut self, body: &str) {
        self.hash = if body.is_empty() {
            String::new()
        } else {
            format!("#{body}")
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn encodes_without_per_color_hash() {
        let palette = ["#264653", "#2a9d8f", "#e9c46a"];
        assert_eq!(encode_fragment(&palette), "264653-2a9d8f-e9c46a");
    }

    #[test]
    fn decodes_every_token_including_the_first() {
        assert_eq!(
            decode_fragment("#264653-2a9d8f-e9c46a"),
            vec!["#264653", "#2a9d8f", "#e9c46a"]
        );
    }

    #[test]
    fn empty_or_bare_delimiter_has_no_seeds() {
        assert!(decode_fragment("").is_empty());
        assert!(decode_fragment("#").is_empty());
    }

    #[test]
    fn malformed_tokens_pass_through() {
        assert_eq!(decode_fragment("#zz-12345"), vec!["#zz", "#12345"]);
        assert_eq!(decode_fragment("#aaaaaa--bbbbbb"), vec!["#aaaaaa", "#", "#bbbbbb"]);
    }

    #[test]
    fn share_location_accepts_urls_and_bare_bodies() {
        let from_url = ShareLocation::from_input("https://example.test/palette/#112233-445566");
        assert_eq!(from_url.hash(), "#112233-445566");

        let from_hash = ShareLocation::from_input("  #112233 ");
        assert_eq!(from_hash.hash(), "#112233");

        let bare = ShareLocation::from_input("112233-445566");
        assert_eq!(bare.fragment(), "#112233-445566");

        let no_fragment = ShareLocation::from_input("https://example.test/palette/");
        assert_eq!(no_fragment.fragment(), "");
    }

    #[test]
    fn replacing_keeps_a_single_entry() {
        let mut location = ShareLocation::from_input("#000000");
        location.replace_fragment("ffffff-000000");
        assert_eq!(location.fragment(), "#ffffff-000000");
        location.replace_fragment("");
        assert_eq!(location.fragment(), "");
    }

    proptest! {
        #[test]
        fn round_trips_valid_palettes(tokens in prop::collection::vec("[0-9a-f]{6}", 0..12)) {
            let palette: Vec<String> = tokens.iter().map(|token| format!("#{token}")).collect();
            let decoded = decode_fragment(&format!("#{}", encode_fragment(&palette)));
            prop_assert_eq!(decoded, palette);
        }
    }
}
