use crate::{
    config::RuntimeConfiguration,
    error::{
        CreateInstanceDirSnafu, GetDatabaseConnectionSnafu, MigrateSnafu, OpenDatabaseSnafu,
        RostrumResult,
    },
    flash::FlashMessage,
    maud_conveniences::{render_flashes, render_nav},
};
use maud::{DOCTYPE, Markup, html};
use snafu::ResultExt;
use sqlx::{
    Pool, Sqlite, Transaction,
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{fs, ops::Deref};

#[derive(Clone, Debug)]
pub struct RostrumState {
    pool: Pool<Sqlite>,
    config: RuntimeConfiguration,
}

impl RostrumState {
    pub async fn new(
        options: SqlitePoolOptions,
        config: RuntimeConfiguration,
    ) -> RostrumResult<Self> {
        let db_config = config.db_config();

        if let Some(dir) = db_config.instance_dir() {
            fs::create_dir_all(dir).context(CreateInstanceDirSnafu {
                path: dir.to_path_buf(),
            })?;
        }

        let connect_options = SqliteConnectOptions::new()
            .filename(db_config.db_file())
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = options
            .connect_with(connect_options)
            .await
            .context(OpenDatabaseSnafu)?;

        sqlx::migrate!().run(&pool).await.context(MigrateSnafu)?;

        Ok(Self { pool, config })
    }

    #[allow(clippy::unused_self, clippy::needless_pass_by_value)] //in case self is ever needed :), and to allow direct html! usage
    pub fn render(&self, flashes: Vec<FlashMessage>, markup: Markup) -> Markup {
        let nav = render_nav();

        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Rostrum" }
                }
                body class="bg-gray-900 min-h-screen flex flex-col items-center text-white" {
                    (nav)
                    (render_flashes(&flashes))
                    (markup)
                }
            }
        }
    }

    pub fn config(&self) -> &RuntimeConfiguration {
        &self.config
    }

    pub async fn get_connection(&self) -> RostrumResult<PoolConnection<Sqlite>> {
        self.pool
            .acquire()
            .await
            .context(GetDatabaseConnectionSnafu)
    }

    pub async fn get_transaction(&self) -> RostrumResult<Transaction<'_, Sqlite>> {
        self.pool.begin().await.context(GetDatabaseConnectionSnafu)
    }

    pub async fn sensible_shutdown(&self) {
        self.pool.close().await;
    }
}

impl Deref for RostrumState {
    type Target = Pool<Sqlite>;

    fn deref(&self) -> &Self::Target {
        &self.pool
    }
}
