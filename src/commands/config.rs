//! Config command handler: show, read, or set server configuration keys.

use anyhow::Result;

use abclient::ApiClient;

use crate::cli::ConfigArgs;

pub async fn run_config_command(client: &ApiClient, args: &ConfigArgs) -> Result<()> {
    match (&args.key, &args.set) {
        (Some(key), Some(value)) => {
            client.set_config_value(key, value).await?;
            println!("{key} = {value}");
        }
        (Some(key), None) => {
            let value = client.get_config_value(key).await?;
            println!("{value}");
        }
        (None, _) => {
            let config = client.get_config().await?;
            let mut keys: Vec<&String> = config.keys().collect();
            keys.sort();
            for key in keys {
                println!("{key} = {}", config[key]);
            }
        }
    }
    Ok(())
}
