use log::info;
use mongodb::bson::{doc, Bson};

use crate::db::{collection_exists, database_exists, Connection};
use crate::models::{sample_people, Person, SortOrder};
use crate::services::store::Store;

pub const FIRST_N_LIMIT: u32 = 5;

/// What the walkthrough observed, step by step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkthroughReport {
    pub database_existed_before: bool,
    pub collection_existed_before: bool,
    pub inserted_id: String,
    pub bulk_inserted: usize,
    pub found_john: bool,
    pub total_documents: usize,
    pub matching_address: usize,
    pub sorted_names: Vec<String>,
    pub modified: u64,
    pub deleted: u64,
    pub limited: usize,
    pub database_exists_after: bool,
    pub collection_exists_after: bool,
}

impl WalkthroughReport {
    pub fn summary(&self) -> String {
        format!(
            "inserted 1 + {}, found {} total, updated {}, deleted {}, limited to {}",
            self.bulk_inserted, self.total_documents, self.modified, self.deleted, self.limited
        )
    }
}

fn describe(record: &Person) -> String {
    serde_json::to_string(record).unwrap_or_else(|_| format!("{:?}", record))
}

fn existence(exists: bool) -> &'static str {
    if exists {
        "exists"
    } else {
        "does not exist"
    }
}

/// Runs every demo operation once, in order, against the configured collection.
pub async fn run_walkthrough(connection: &Connection) -> Result<WalkthroughReport, anyhow::Error> {
    let db_name = connection.database().name().to_string();
    let collection_name = connection.collection_name().to_string();
    let store: Store<Person> = Store::new(connection.collection::<Person>());
    let mut report = WalkthroughReport::default();

    report.database_existed_before = database_exists(connection.client(), &db_name).await?;
    info!("The database '{}' {}", db_name, existence(report.database_existed_before));
    report.collection_existed_before =
        collection_exists(connection.database(), &collection_name).await?;
    info!(
        "The collection '{}' {}",
        collection_name,
        existence(report.collection_existed_before)
    );

    let id = store
        .insert_one(&Person::new("John", "Highway 37"))
        .await?;
    report.inserted_id = display_id(&id);
    info!("Inserted document with ID: {}", report.inserted_id);

    let ids = store.insert_many(&sample_people()).await?;
    report.bulk_inserted = ids.len();
    info!(
        "Inserted documents with IDs: [{}]",
        ids.iter().map(display_id).collect::<Vec<_>>().join(", ")
    );

    let john = store.find_one(doc! { "name": "John" }).await?;
    report.found_john = john.is_some();
    match &john {
        Some(person) => info!("Find one: {}", describe(person)),
        None => info!("Find one: no match"),
    }

    let everyone = store.find_all().await?;
    report.total_documents = everyone.len();
    info!("All documents:");
    for person in &everyone {
        info!("  {}", describe(person));
    }

    let condition = doc! { "address": "Highway 37" };
    let matching = store.find(condition.clone()).await?;
    report.matching_address = matching.len();
    info!("Documents with condition {}:", condition);
    for person in &matching {
        info!("  {}", describe(person));
    }

    let sorted = store
        .find_sorted(doc! {}, "name", SortOrder::Ascending)
        .await?;
    info!("Sorted by name:");
    for person in &sorted {
        info!("  {}", describe(person));
    }
    report.sorted_names = sorted.into_iter().map(|p| p.name).collect();

    report.modified = store
        .update_one(
            doc! { "name": "John" },
            doc! { "$set": { "address": "Canyon 123" } },
        )
        .await?;
    info!("Documents updated: {}", report.modified);

    report.deleted = store.delete_one(doc! { "name": "John" }).await?;
    info!("Documents deleted: {}", report.deleted);

    let first = store.find_limited(doc! {}, FIRST_N_LIMIT).await?;
    report.limited = first.len();
    info!("Limiting to first {} documents:", FIRST_N_LIMIT);
    for person in &first {
        info!("  {}", describe(person));
    }

    report.database_exists_after = database_exists(connection.client(), &db_name).await?;
    info!("The database '{}' {}", db_name, existence(report.database_exists_after));
    report.collection_exists_after =
        collection_exists(connection.database(), &collection_name).await?;
    info!(
        "The collection '{}' {}",
        collection_name,
        existence(report.collection_exists_after)
    );

    Ok(report)
}

fn display_id(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        other => other.to_string(),
    }
}
