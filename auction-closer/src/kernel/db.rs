use sqlx::{
    postgres::PgPoolOptions,
    Pool,
    Postgres,
};

pub type DB = Pool<Postgres>;

pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<DB> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}
