use twirest::twiml::{Dial, Response, Say};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let number = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "+14155552671".to_owned());

    let xml = Response::new()
        .verb(Say::new("Please hold while we connect your call."))
        .verb(Dial {
            timeout: Some(20),
            recording_status_callback: Some("https://example.com/recordings".to_owned()),
            recording_status_callback_method: Some("POST".to_owned()),
            ..Dial::number(number)
        })
        .to_xml()?;

    println!("{xml}");
    Ok(())
}
