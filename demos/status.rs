//! Print Sonar's current mode, volumes, chat mix and output devices.
//!
//! Usage: `cargo run --example status [path/to/coreProps.json]`

use steelseries_sonar::SonarClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut builder = SonarClient::builder();
    if let Some(path) = std::env::args().nth(1) {
        builder = builder.core_props_path(path);
    }
    let client = builder.build().await?;

    let session = client.session();
    println!("Engine:      {}", session.base_url());
    println!("Sonar:       {}", session.web_server_address());
    println!(
        "Mode:        {}",
        if session.streamer_mode() { "streamer" } else { "classic" }
    );

    let volumes = client.get_volume_data().await?;
    println!("Volumes:\n{}", serde_json::to_string_pretty(&volumes)?);

    let chat_mix = client.get_chat_mix_data().await?;
    println!("Chat mix:    {}", chat_mix);

    println!("Devices:");
    for device in client.get_audio_devices().await? {
        println!(
            "  {:<40} {} ({})",
            device.friendly_name,
            device.id,
            device.data_flow.as_deref().unwrap_or("unknown")
        );
    }

    Ok(())
}
