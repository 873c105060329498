use crate::config::Config;
use log::{debug, info};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

pub const APP_NAME: &str = "mongo_crud_walkthrough";

/// A client plus the database and collection selected from the config.
/// Neither is created on the server until something is written to it.
#[derive(Clone, Debug)]
pub struct Connection {
    client: Client,
    database: Database,
    collection_name: String,
}

impl Connection {
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    /// The selected collection viewed with record type `T`.
    pub fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.database.collection::<T>(&self.collection_name)
    }
}

pub async fn create_mongodb_client(config: &Config) -> Result<Client, anyhow::Error> {
    let mut options = ClientOptions::parse(&config.mongodb.uri).await?;
    options.app_name = Some(APP_NAME.to_string());
    let client = Client::with_options(options)?;
    Ok(client)
}

pub async fn connect(config: &Config) -> Result<Connection, anyhow::Error> {
    let client = create_mongodb_client(config).await?;
    let database = client.database(&config.mongodb.database);
    info!(
        "Selected database '{}' and collection '{}' on {}",
        config.mongodb.database,
        config.mongodb.collection,
        config.redacted_uri()
    );
    Ok(Connection {
        client,
        database,
        collection_name: config.mongodb.collection.clone(),
    })
}

pub async fn database_exists(client: &Client, name: &str) -> Result<bool, anyhow::Error> {
    let names = client.list_database_names(None, None).await?;
    debug!("Server lists {} databases", names.len());
    Ok(names.iter().any(|n| n == name))
}

pub async fn collection_exists(database: &Database, name: &str) -> Result<bool, anyhow::Error> {
    let names = database.list_collection_names(None).await?;
    debug!(
        "Database '{}' lists {} collections",
        database.name(),
        names.len()
    );
    Ok(names.iter().any(|n| n == name))
}
