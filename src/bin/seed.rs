use booking_axum_api::config::app_config::AppConfig;
use chrono::{Duration, Utc};
use dotenvy::dotenv;
use sqlx::PgPool;
use uuid::Uuid;

/// Seeds two demo tenants, each with an admin, an organizer, three
/// attendees and two upcoming events (capacity 1 and 2). Bookings are
/// left empty on purpose; seats are only ever taken through the
/// admission service.
#[tokio::main]
async fn main() -> Result<(), sqlx::Error> {
    dotenv().ok();

    let config = AppConfig::from_env();
    let pool = PgPool::connect(&config.database_url()).await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    // Clear existing data, children first.
    for table in [
        "booking_logs",
        "notifications",
        "bookings",
        "events",
        "users",
        "tenants",
    ] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&pool)
            .await?;
    }
    println!("Cleared existing data");

    seed_tenant(
        &pool,
        "TechCorp Solutions",
        "techcorp.com",
        "Alice Johnson",
        &["John Doe", "Sarah Wilson", "Mike Chen"],
    )
    .await?;
    seed_tenant(
        &pool,
        "EventMax Pro",
        "eventmax.com",
        "David Martinez",
        &["James Smith", "Maria Garcia", "Robert Taylor"],
    )
    .await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_tenant(
    pool: &PgPool,
    tenant_name: &str,
    email_domain: &str,
    organizer_name: &str,
    attendee_names: &[&str],
) -> Result<(), sqlx::Error> {
    let tenant_id = Uuid::now_v7();
    sqlx::query("INSERT INTO tenants (id, name) VALUES ($1, $2)")
        .bind(tenant_id)
        .bind(tenant_name)
        .execute(pool)
        .await?;

    let first_name = organizer_name.split(' ').next().unwrap_or(organizer_name);
    insert_user(
        pool,
        tenant_id,
        &format!("{first_name} Admin"),
        &format!("admin@{email_domain}"),
        "admin",
    )
    .await?;

    let organizer_id = insert_user(
        pool,
        tenant_id,
        organizer_name,
        &format!(
            "{}.organizer@{email_domain}",
            first_name.to_lowercase()
        ),
        "organizer",
    )
    .await?;

    for name in attendee_names {
        let local = name.to_lowercase().replace(' ', ".");
        insert_user(
            pool,
            tenant_id,
            name,
            &format!("{local}@{email_domain}"),
            "attendee",
        )
        .await?;
    }

    insert_event(pool, tenant_id, organizer_id, "Event 1", 7, 1).await?;
    insert_event(pool, tenant_id, organizer_id, "Event 2", 14, 2).await?;

    println!("Seeded tenant {tenant_name}");
    Ok(())
}

async fn insert_user(
    pool: &PgPool,
    tenant_id: Uuid,
    name: &str,
    email: &str,
    role: &str,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::now_v7();
    sqlx::query("INSERT INTO users (id, tenant_id, name, email, role) VALUES ($1, $2, $3, $4, $5)")
        .bind(id)
        .bind(tenant_id)
        .bind(name)
        .bind(email)
        .bind(role)
        .execute(pool)
        .await?;
    Ok(id)
}

async fn insert_event(
    pool: &PgPool,
    tenant_id: Uuid,
    organizer_id: Uuid,
    title: &str,
    days_ahead: i64,
    capacity: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO events (id, tenant_id, title, scheduled_at, capacity, organizer_id)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(Uuid::now_v7())
    .bind(tenant_id)
    .bind(title)
    .bind(Utc::now() + Duration::days(days_ahead))
    .bind(capacity)
    .bind(organizer_id)
    .execute(pool)
    .await?;
    Ok(())
}
