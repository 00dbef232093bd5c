mod common;

use twirest::{Recording, TwilioClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();

    let sid = common::required_env("TWILIO_RECORDING_SID")?;
    let client = TwilioClient::new(common::credentials_from_env()?);

    let metadata = client.request(Recording {
        sid: sid.clone(),
        ..Default::default()
    })?;
    if let Some(twirest::Resource::Recording(recording)) = metadata.resource() {
        println!(
            "duration: {:?}s, channels: {:?}",
            recording.duration, recording.channels
        );
    }

    let audio = client.request(Recording {
        sid: sid.clone(),
        get_recording: true,
        get_mp3: true,
    })?;
    if let Some(bytes) = audio.audio() {
        let path = format!("{sid}.mp3");
        std::fs::write(&path, bytes)?;
        println!("wrote {} bytes to {path}", bytes.len());
    }

    Ok(())
}
