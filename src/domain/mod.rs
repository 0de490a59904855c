//! Domain layer: credentials, request parameters and outcomes (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{DEFAULT_COMMON_PARAMS, Format, Params, SignMethod};
pub use response::ResponseOutcome;
pub use validation::ValidationError;
pub use value::{AppKey, AppSecret, Credential};

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn params_iterate_in_byte_order_regardless_of_insertion() {
        let a = Params::new()
            .with("v", "2.0")
            .with("method", "x.y.z")
            .with("Z", "upper")
            .with("app_key", "k");
        let b = Params::new()
            .with("app_key", "k")
            .with("Z", "upper")
            .with("method", "x.y.z")
            .with("v", "2.0");

        assert_eq!(a, b);
        let keys = a.iter().map(|(k, _)| k).collect::<Vec<_>>();
        assert_eq!(keys, vec!["Z", "app_key", "method", "v"]);
    }

    #[test]
    fn params_conversions_preserve_pairs() {
        let params = Params::from([("method", "x.y.z"), ("rec_num", "13000000000")]);
        let map: BTreeMap<String, String> = params.clone().into();
        assert_eq!(map.get("rec_num").map(String::as_str), Some("13000000000"));
        assert_eq!(Params::from(map), params);
        assert_eq!(Params::method("x.y.z").get(Params::METHOD), Some("x.y.z"));
    }

    #[test]
    fn fill_defaults_keeps_caller_overrides() {
        let mut params = Params::method("x.y.z").with(Params::FORMAT, "xml");
        params.fill_defaults();

        assert_eq!(params.get(Params::FORMAT), Some("xml"));
        assert_eq!(params.get(Params::VERSION), Some("2.0"));
        assert_eq!(params.get(Params::SIGN_METHOD), Some("md5"));
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn default_table_uses_enum_wire_names() {
        let defaults = DEFAULT_COMMON_PARAMS.into_iter().collect::<Params>();
        assert_eq!(defaults.get(Params::FORMAT), Some(Format::Json.as_str()));
        assert_eq!(
            defaults.get(Params::SIGN_METHOD),
            Some(SignMethod::SecretWrapped.as_str())
        );
        assert_eq!(defaults.get(Params::VERSION), Some("2.0"));
    }

    #[test]
    fn format_parsing() {
        assert_eq!(Format::from_param("json"), Ok(Format::Json));
        assert_eq!(Format::from_param("xml"), Ok(Format::Xml));
        assert_eq!(
            Format::from_param("JSON"),
            Err(ValidationError::UnsupportedFormat {
                value: "JSON".to_owned()
            })
        );
    }

    #[test]
    fn sign_method_parsing() {
        assert_eq!(SignMethod::from_param("md5"), Ok(SignMethod::SecretWrapped));
        assert_eq!(SignMethod::from_param("hmac"), Ok(SignMethod::KeyedDigest));
        assert!(matches!(
            SignMethod::from_param("sha256"),
            Err(ValidationError::UnsupportedSignMethod { .. })
        ));
    }

    #[test]
    fn enums_use_wire_names_in_config() {
        let method: SignMethod = serde_json::from_str(r#""hmac""#).unwrap();
        assert_eq!(method, SignMethod::KeyedDigest);
        assert_eq!(serde_json::to_string(&Format::Xml).unwrap(), r#""xml""#);
    }
}
