use geolookup_rs::Geolocator;

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::FmtSubscriber;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

#[tokio::main]
async fn main() {
    #[cfg(feature = "tracing")]
    init_tracing();

    let geolocator = Geolocator::init(None);

    match geolocator.resolve_city().await {
        Ok(city) if city.is_empty() => println!("The provider has no city for your address"),
        Ok(city) => println!("You appear to be near: {city}"),
        Err(e) => eprintln!("Could not resolve your city: {e}"),
    }
}
