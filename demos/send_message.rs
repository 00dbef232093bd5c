mod common;

use twirest::{PhoneNumber, SendMessage, TwilioClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();

    let to = PhoneNumber::parse(None, common::required_env("TWILIO_TO")?)?;
    let from = PhoneNumber::parse(None, common::required_env("TWILIO_FROM")?)?;
    let body = std::env::var("TWILIO_BODY")
        .unwrap_or_else(|_| "Hello from the twirest demo.".to_owned());

    let client = TwilioClient::new(common::credentials_from_env()?);
    let response = client.request(SendMessage::text(&to, &from, body))?;

    println!("status: {}", response.status.http);
    if let Some(twirest::Resource::Message(message)) = response.resource() {
        println!("sid: {:?}, status: {:?}", message.sid, message.status);
    }

    Ok(())
}
