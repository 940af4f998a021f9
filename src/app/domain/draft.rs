use url::form_urlencoded;

use super::content_type::ContentType;
use super::expiration::ExpirationChoice;

/// Everything sent to the server for one paste. Built at submit time and
/// dropped once the request completes.
#[derive(Debug, Clone, PartialEq)]
pub struct PasteDraft {
    pub text: String,
    pub title: String,
    pub content_type: ContentType,
    pub expiration: ExpirationChoice,
}

impl PasteDraft {
    /// Form fields in the order the server documents them. `raw` is always
    /// "0" so the server answers with the paste location.
    pub fn form_fields(&self) -> [(&'static str, String); 5] {
        [
            ("p", self.text.clone()),
            ("title", self.title.clone()),
            ("expire", self.expiration.form_value()),
            ("mime", self.content_type.as_str().to_string()),
            ("raw", "0".to_string()),
        ]
    }

    /// `application/x-www-form-urlencoded` request body.
    pub fn encode_form(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.form_fields() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }
}

/// What the server said about a submitted draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The paste exists at `location`.
    Created { location: String },
    /// The server (or the transport) refused it; `message` is shown verbatim.
    Failed { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(text: &str) -> PasteDraft {
        PasteDraft {
            text: text.to_string(),
            title: String::new(),
            content_type: ContentType::plain(),
            expiration: ExpirationChoice::Never,
        }
    }

    #[test]
    fn test_form_fields() {
        let fields = draft("hello").form_fields();
        assert_eq!(fields[0], ("p", "hello".to_string()));
        assert_eq!(fields[2], ("expire", "0".to_string()));
        assert_eq!(fields[3], ("mime", "text/plain".to_string()));
        assert_eq!(fields[4], ("raw", "0".to_string()));
    }

    #[test]
    fn test_encode_form_escapes_values() {
        let mut d = draft("a = b & c\n");
        d.title = "my paste".to_string();
        d.content_type = ContentType::new("text/x-c++src");
        let body = d.encode_form();
        assert_eq!(
            body,
            "p=a+%3D+b+%26+c%0A&title=my+paste&expire=0&mime=text%2Fx-c%2B%2Bsrc&raw=0"
        );
    }

    #[test]
    fn test_encode_form_parses_back() {
        let mut d = draft("fn main() {}");
        d.expiration = ExpirationChoice::OneHour;
        let body = d.encode_form();
        let pairs: Vec<(String, String)> = form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect();
        assert_eq!(pairs.len(), 5);
        assert!(pairs.contains(&("p".to_string(), "fn main() {}".to_string())));
        assert!(pairs.contains(&("expire".to_string(), "3600".to_string())));
    }
}
