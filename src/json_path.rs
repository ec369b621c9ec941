/// Separator between the keys of a path.
pub const DELIMITER: char = '\\';

/// Characters that may follow a backslash inside a JSON string.
///
/// A delimiter followed by an escape sequence (`\` plus one of these) belongs to the key,
/// because a JSON key can never hold a backslash that does not start such a sequence.
pub const ESCAPE_INDICATORS: [char; 9] = ['"', '\\', '/', 'b', 'f', 'n', 'r', 't', 'u'];

/// A path split into the keys it addresses, outermost first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct JsonPath {
    parts: Vec<String>,
}

impl JsonPath {
    fn new(parts: Vec<String>) -> Self {
        JsonPath {
            parts
        }
    }

    /// Splits `path_str` at every delimiter that is not part of an escape sequence.
    ///
    /// Parts are kept raw, escape sequences are not decoded. An empty string yields a single
    /// empty part and a trailing delimiter yields a trailing empty part.
    pub fn parse(path_str: &str) -> Self {
        let chars: Vec<char> = path_str.chars().collect();
        let mut path_parts = Vec::new();
        let mut part = String::new();
        let mut i = 0;
        loop {
            match chars.get(i) {
                None => break,

                Some(&DELIMITER) if JsonPath::is_escape_sequence(&chars[i + 1..]) => {
                    part.push(DELIMITER);
                    part.push(DELIMITER);

                    i += 2;
                    continue;
                }

                Some(&DELIMITER) => {
                    path_parts.push(std::mem::take(&mut part));

                    i += 1;
                    continue;
                }

                Some(&c) => {
                    part.push(c);

                    i += 1;
                    continue;
                }
            }
        }
        path_parts.push(part);

        log::trace!("split path {:?} into {} part(s)", path_str, path_parts.len());
        JsonPath::new(path_parts)
    }

    // `rest` starts right after a delimiter
    fn is_escape_sequence(rest: &[char]) -> bool {
        matches!(rest, [DELIMITER, c, ..] if ESCAPE_INDICATORS.contains(c))
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<String> {
        self.parts
    }
}

/// Shorthand for `JsonPath::parse(path_str).into_parts()`.
pub fn split_path(path_str: &str) -> Vec<String> {
    JsonPath::parse(path_str).into_parts()
}
