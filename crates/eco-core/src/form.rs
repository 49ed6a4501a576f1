//! `application/x-www-form-urlencoded` decoding for query strings and form bodies.

/// Ordered key/value pairs decoded from a query string or form body.
///
/// Keys may repeat (checkbox groups submit one pair per checked box).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    /// Decode `a=1&b=two+words&c=%C3%A9`.
    pub fn parse(input: &str) -> Self {
        let pairs = input
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let mut parts = pair.splitn(2, '=');
                let key = parts.next().unwrap_or("");
                let value = parts.next().unwrap_or("");
                (decode_component(key), decode_component(value))
            })
            .collect();

        Self { pairs }
    }

    /// Decode a raw request body. Invalid UTF-8 is replaced, not rejected.
    pub fn from_body(body: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(body))
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for `key`, in submission order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

/// Percent-decode one component, treating `+` as a space.
pub fn decode_component(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Percent-encode one component (spaces become `+`).
pub fn encode_component(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for byte in s.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(byte as char)
            }
            b' ' => result.push('+'),
            _ => result.push_str(&format!("%{:02X}", byte)),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs() {
        let form = FormData::parse("title=Bamboo+Bottle&price=25.99");
        assert_eq!(form.get("title"), Some("Bamboo Bottle"));
        assert_eq!(form.get("price"), Some("25.99"));
        assert_eq!(form.get("missing"), None);
    }

    #[test]
    fn test_repeated_keys() {
        let form = FormData::parse("ecoFeatures=Organic&ecoFeatures=Fair+trade&title=x");
        assert_eq!(form.get_all("ecoFeatures"), vec!["Organic", "Fair trade"]);
        assert_eq!(form.get("ecoFeatures"), Some("Organic"));
    }

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_component("CO%E2%82%82"), "CO\u{2082}");
        assert_eq!(decode_component("Home+%26+Kitchen"), "Home & Kitchen");
    }

    #[test]
    fn test_decode_malformed_escape() {
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz1"), "%zz1");
    }

    #[test]
    fn test_empty_segments_skipped() {
        let mut expected = FormData::default();
        expected.pairs.push(("a".to_string(), "1".to_string()));
        assert_eq!(FormData::parse("&&a=1&"), expected);
        assert_eq!(FormData::parse(""), FormData::default());
    }

    #[test]
    fn test_key_without_value() {
        let form = FormData::parse("flag&x=1");
        assert_eq!(form.get("flag"), Some(""));
    }

    #[test]
    fn test_encode_special_chars() {
        let encoded = encode_component("Home & Kitchen");
        assert_eq!(encoded, "Home+%26+Kitchen");
        assert_eq!(FormData::parse(&format!("category={}", encoded)).get("category"), Some("Home & Kitchen"));
    }

    #[test]
    fn test_from_body() {
        let form = FormData::from_body(b"action=submit&title=Tote");
        assert_eq!(form.get("action"), Some("submit"));
    }
}
