use url::form_urlencoded;

use crate::domain::{Format, Params};

/// `Content-Type` of every request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Success marker in a JSON response body.
pub const SUCCESS_MARKER_JSON: &str = r#""success":true"#;
/// Success marker in an XML response body.
pub const SUCCESS_MARKER_XML: &str = "<success>true</success>";

/// Encode every parameter (including `sign`) as `key=value` pairs joined by `&`.
pub fn encode_form_body(params: &Params) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish()
}

/// Literal substring whose presence marks a successful response in `format`.
pub fn success_marker(format: Format) -> &'static str {
    match format {
        Format::Json => SUCCESS_MARKER_JSON,
        Format::Xml => SUCCESS_MARKER_XML,
    }
}

/// Whether `body` contains the success marker of the `format` parameter value.
///
/// This is a plain substring search: an unknown format is never successful,
/// and a body holding the marker anywhere counts as successful.
pub fn is_success(format: Option<&str>, body: &str) -> bool {
    format
        .and_then(|value| Format::from_param(value).ok())
        .is_some_and(|format| body.contains(success_marker(format)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> Params {
        form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect()
    }

    #[test]
    fn encodes_pairs_joined_by_ampersand() {
        let params = Params::from([("method", "x.y.z"), ("format", "json")]);
        assert_eq!(encode_form_body(&params), "format=json&method=x.y.z");
    }

    #[test]
    fn percent_encodes_reserved_characters() {
        let params = Params::from([
            ("timestamp", "2016-01-01 12:00:00"),
            ("sms_param", r#"{"code":"1&2=3"}"#),
        ]);
        assert_eq!(
            encode_form_body(&params),
            "sms_param=%7B%22code%22%3A%221%262%3D3%22%7D&timestamp=2016-01-01+12%3A00%3A00"
        );
    }

    #[test]
    fn decoding_recovers_original_pairs_including_utf8() {
        let params = Params::from([
            ("sms_free_sign_name", "阿里大于"),
            ("sms_param", r#"{"code":"123456", "product":"My App"}"#),
            ("ключ", "значение + ✓"),
            ("empty", ""),
        ]);
        assert_eq!(decode(&encode_form_body(&params)), params);
    }

    #[test]
    fn json_marker_is_a_substring_match() {
        assert!(is_success(
            Some("json"),
            r#"{"alibaba_aliqin_fc_sms_num_send_response":{"result":{"err_code":"0","success":true}}}"#
        ));
        assert!(!is_success(
            Some("json"),
            r#"{"error_response":{"code":15,"msg":"Remote service error"}}"#
        ));
        assert!(!is_success(Some("json"), r#"{"success": true}"#));
    }

    #[test]
    fn conflicting_markers_still_count_as_success() {
        let body = r#"{"a":{"success":false},"b":{"success":true}}"#;
        assert!(is_success(Some("json"), body));
    }

    #[test]
    fn xml_marker_is_a_substring_match() {
        assert!(is_success(
            Some("xml"),
            "<result><err_code>0</err_code><success>true</success></result>"
        ));
        assert!(!is_success(Some("xml"), r#"{"success":true}"#));
        assert!(!is_success(Some("json"), "<success>true</success>"));
    }

    #[test]
    fn success_marker_follows_format() {
        assert_eq!(success_marker(Format::Json), r#""success":true"#);
        assert_eq!(success_marker(Format::Xml), "<success>true</success>");
    }

    #[test]
    fn unknown_or_missing_format_is_never_successful() {
        assert!(!is_success(Some("yaml"), r#""success":true"#));
        assert!(!is_success(None, r#""success":true"#));
    }
}
