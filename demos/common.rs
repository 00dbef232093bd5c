use std::io;

use twirest::Credentials;

pub fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

/// `TWILIO_ACCOUNT_SID` plus either `TWILIO_API_KEY`/`TWILIO_API_SECRET` or
/// `TWILIO_AUTH_TOKEN`.
pub fn credentials_from_env() -> Result<Credentials, Box<dyn std::error::Error>> {
    let account_sid = required_env("TWILIO_ACCOUNT_SID")?;
    let credentials = match (
        std::env::var("TWILIO_API_KEY"),
        std::env::var("TWILIO_API_SECRET"),
    ) {
        (Ok(key_sid), Ok(secret)) => Credentials::api_key(account_sid, key_sid, secret)?,
        _ => Credentials::new(account_sid, required_env("TWILIO_AUTH_TOKEN")?)?,
    };
    Ok(credentials)
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
