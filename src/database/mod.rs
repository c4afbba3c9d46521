use mongodb::{Client, Collection, Database};

use std::error::Error;

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        // Timeouts
        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        // Extract database name from URI or use default
        let db_name = uri
            .split('/')
            .last()
            .and_then(|s| s.split('?').next())
            .unwrap_or("CareerTracker");

        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { db };

        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates the indexes every request path relies on
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        use mongodb::bson::doc;
        use mongodb::options::IndexOptions;
        use mongodb::IndexModel;

        log::info!("Creating database indexes...");

        // users(email) unique - registration duplicate check
        let users = self.database().collection::<mongodb::bson::Document>("users");
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        match users.create_index(email_index).await {
            Ok(_) => log::info!("   Index created: users(email) unique"),
            Err(e) => log::debug!("   Index already exists: {}", e),
        }

        // projects(user_id) - dashboard project listing
        let projects = self.database().collection::<mongodb::bson::Document>("projects");
        let projects_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .build();
        match projects.create_index(projects_index).await {
            Ok(_) => log::info!("   Index created: projects(user_id)"),
            Err(e) => log::debug!("   Index already exists: {}", e),
        }

        // analyses(user_id) - analysis history
        let analyses = self.database().collection::<mongodb::bson::Document>("analyses");
        let analyses_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .build();
        match analyses.create_index(analyses_index).await {
            Ok(_) => log::info!("   Index created: analyses(user_id)"),
            Err(e) => log::debug!("   Index already exists: {}", e),
        }

        log::info!("Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
