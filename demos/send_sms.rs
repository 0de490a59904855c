use std::io;

use alidayu::{AlidayuClient, Credential, Params};
use tracing_subscriber::EnvFilter;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app_key = required_env("ALIDAYU_APP_KEY")?;
    let app_secret = required_env("ALIDAYU_APP_SECRET")?;
    let phone = required_env("ALIDAYU_PHONE")?;
    let sign_name = required_env("ALIDAYU_SIGN_NAME")?;
    let template = required_env("ALIDAYU_TEMPLATE_CODE")?;
    let code = std::env::var("ALIDAYU_CODE").unwrap_or_else(|_| "123456".to_owned());

    let client = AlidayuClient::builder(Credential::new(app_key, app_secret))
        .use_https(std::env::var("ALIDAYU_USE_HTTPS").is_ok())
        .build()?;

    let params = Params::method("alibaba.aliqin.fc.sms.num.send")
        .with("sms_type", "normal")
        .with("sms_free_sign_name", sign_name)
        .with(
            "sms_param",
            format!(r#"{{"code":"{code}", "product":"My App"}}"#),
        )
        .with("sms_template_code", template)
        .with("rec_num", phone);

    let outcome = client.execute(params).await?;
    println!(
        "succeeded: {}, status: {}, body: {}",
        outcome.succeeded, outcome.status, outcome.raw_body
    );

    Ok(())
}
