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
    let called = required_env("ALIDAYU_CALLED_NUM")?;
    let show = required_env("ALIDAYU_CALLED_SHOW_NUM")?;
    let tts_code = required_env("ALIDAYU_TTS_CODE")?;

    let client = AlidayuClient::new(Credential::new(app_key, app_secret));

    // Response format and signature method may be overridden per call.
    let params = Params::method("alibaba.aliqin.fc.tts.num.singlecall")
        .with("format", "xml")
        .with("sign_method", "hmac")
        .with("tts_param", r#"{"code":"123456", "product":"My App"}"#)
        .with("called_num", called)
        .with("called_show_num", show)
        .with("tts_code", tts_code);

    let response = client.submit(params).await?;
    println!("status: {}\n{}", response.status, response.body);

    Ok(())
}
