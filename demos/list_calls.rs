mod common;

use twirest::{Calls, Resource, TwilioClient, TwilioError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();

    let client = TwilioClient::new(common::credentials_from_env()?);
    let request = Calls {
        status: std::env::var("TWILIO_CALL_STATUS").unwrap_or_default(),
        page_size: "20".to_owned(),
        ..Default::default()
    };

    match client.request(request) {
        Ok(response) => {
            if let Some(Resource::Calls(calls)) = response.resource() {
                for call in calls {
                    println!(
                        "{} {:?} -> {:?} ({:?})",
                        call.sid.as_deref().unwrap_or("-"),
                        call.from,
                        call.to,
                        call.status
                    );
                }
            }
        }
        Err(err @ TwilioError::Api { .. }) => {
            eprintln!("Twilio error {:?}: {err}", err.code());
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
