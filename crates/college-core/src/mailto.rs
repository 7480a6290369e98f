//! `mailto:` link for the "request a copy" button of the confirmation modal

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::form::FormData;
use crate::prelude::*;

/// Characters `encodeURIComponent` escapes: everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Characters escaped in the address part of the link. `@` separates the
/// local part from the domain and stays literal.
const ADDR_SPEC: &AsciiSet = &URI_COMPONENT.remove(b'@');

pub const COPY_SUBJECT: &str = "Copy of Your College Application";

/// Percent-encode a query component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Plain-text body of the copy email.
pub fn copy_body(data: &FormData) -> Result<String> {
    Ok(format!(
        "Dear Applicant,\n\n\
         Thank you for your application. A copy of the data submitted is below:\n\n\
         {}\n\n\
         The Admissions Office.",
        data.to_json_pretty()?
    ))
}

/// Build the link addressed to `recipient` exactly as it was submitted.
///
/// The address is percent-encoded, so `#`, `?` and `&` in a local part stay
/// inside the recipient instead of starting the query or fragment.
pub fn application_copy_link(recipient: &str, data: &FormData) -> Result<String> {
    let body = copy_body(data)?;
    Ok(format!(
        "mailto:{}?subject={}&body={}",
        utf8_percent_encode(recipient, ADDR_SPEC),
        encode_component(COPY_SUBJECT),
        encode_component(&body)
    ))
}

/// Decoded recipient of a `mailto:` link, read the way a URL parser does:
/// the address ends at the first `?` or `#`.
///
/// Returns `None` for other schemes and for addresses that do not decode
/// to UTF-8.
pub fn recipient_of(link: &str) -> Option<String> {
    let rest = link.strip_prefix("mailto:")?;
    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    percent_decode_str(&rest[..end])
        .decode_utf8()
        .ok()
        .map(|to| to.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FormData {
        let mut data = FormData::default();
        data.push("full_name", "Jane Wanjiru");
        data.push("email", "jane@example.co.ke");
        data
    }

    #[test]
    fn test_encode_component_matches_uri_component() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("a\nb"), "a%0Ab");
        assert_eq!(encode_component("x@y.z"), "x%40y.z");
        assert_eq!(encode_component("(it's)*!~_-"), "(it's)*!~_-");
        assert_eq!(encode_component("{\"k\": 1}"), "%7B%22k%22%3A%201%7D");
    }

    #[test]
    fn test_subject_encoding() {
        assert_eq!(
            encode_component(COPY_SUBJECT),
            "Copy%20of%20Your%20College%20Application"
        );
    }

    #[test]
    fn test_copy_body_template() {
        let body = copy_body(&sample()).unwrap();
        assert!(body.starts_with("Dear Applicant,\n\nThank you for your application."));
        assert!(body.contains("is below:\n\n{\n  \"full_name\": \"Jane Wanjiru\""));
        assert!(body.ends_with("}\n\nThe Admissions Office."));
    }

    #[test]
    fn test_link_recipient_is_submitted_email() {
        let link = application_copy_link("jane@example.co.ke", &sample()).unwrap();
        assert!(link.starts_with("mailto:jane@example.co.ke?subject="));
        assert_eq!(recipient_of(&link).as_deref(), Some("jane@example.co.ke"));
    }

    #[test]
    fn test_link_recipient_keeps_url_delimiters() {
        let email = "a#b?c&d@example.com";
        let link = application_copy_link(email, &sample()).unwrap();

        assert!(link.starts_with("mailto:a%23b%3Fc%26d@example.com?subject="));
        // Nothing before the query may start a fragment.
        let (address, _) = link.split_once('?').unwrap();
        assert!(!address.contains('#'));
        assert_eq!(recipient_of(&link).as_deref(), Some(email));
    }

    #[test]
    fn test_recipient_of_stops_at_fragment() {
        assert_eq!(
            recipient_of("mailto:a#b@example.com?subject=x").as_deref(),
            Some("a")
        );
        assert_eq!(
            recipient_of("mailto:a%2Bb@example.com").as_deref(),
            Some("a+b@example.com")
        );
    }

    #[test]
    fn test_link_body_is_encoded() {
        let link = application_copy_link("jane@example.co.ke", &sample()).unwrap();
        let body = link.split_once("&body=").unwrap().1;
        assert!(body.starts_with("Dear%20Applicant%2C%0A%0A"));
        assert!(!body.contains(' '));
        assert!(!body.contains('\n'));
    }

    #[test]
    fn test_recipient_of_rejects_other_schemes() {
        assert_eq!(recipient_of("https://example.com"), None);
        assert_eq!(recipient_of("mailto:a@b.c").as_deref(), Some("a@b.c"));
    }
}
