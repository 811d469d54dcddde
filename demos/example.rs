use dragon_envcfg::{number, string, ConfigContext, Field, FieldOptions, Resolver, Schema};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppConfig {
    app_name: String,
    port: u16,
    database_url: Option<String>,
}

fn main() -> Result<(), dragon_envcfg::Error> {
    let schema = Schema::new()
        .with_field("appName", string(FieldOptions::new().default_value("demo")))
        .with_field("port", number(FieldOptions::new().env("PORT").default_value(8080)))
        .with_field("databaseUrl", Field::string());

    // DATABASE_URL is required, but a missing value only logs a warning here
    let config = Resolver::new(&schema)
        .skip_errors(true)
        .resolve(&ConfigContext::from_env())?
        .deserialize::<AppConfig>()?;

    println!("App: {} (port={})", config.app_name, config.port);
    match &config.database_url {
        Some(url) => println!("Database URL: {url}"),
        None => println!("Database URL: <unset>"),
    }

    Ok(())
}
