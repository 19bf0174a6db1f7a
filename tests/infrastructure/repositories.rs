use crate::common;

use clinica::application::professionals::payload::ProfessionalPayload;
use clinica::domain::appointments::{AppointmentRepository, NewAppointment, UpdateAppointment};
use clinica::domain::professionals::{ContactKind, ProfessionalData, ProfessionalRepository};
use clinica::infrastructure::repositories::appointments::PostgresAppointmentRepository;
use clinica::infrastructure::repositories::professionals::PostgresProfessionalRepository;
use serde_json::json;
use serial_test::serial;
use time::macros::datetime;

fn data(social_name: &str) -> ProfessionalData {
    let mut value = common::professional_payload(social_name);
    value["contacts"] = json!([
        {"kind": "whatsapp", "value": "11999998888"},
        {"kind": "email", "value": "a@b.com"},
        {"kind": "email", "value": "c@d.com"}
    ]);
    serde_json::from_value::<ProfessionalPayload>(value)
        .unwrap()
        .into_data()
        .unwrap()
}

#[tokio::test]
#[serial]
async fn test_professional_children_come_back_ordered() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let repo = PostgresProfessionalRepository::new(pool.clone());
    let created = repo.create(data("Dr. A")).await.unwrap();

    let values: Vec<_> = created.contacts.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(values, vec!["a@b.com", "c@d.com", "11999998888"]);

    // A second stored address that sorts first by street wins on read
    sqlx::query(
        "INSERT INTO addresses (professional_id, street, city, state, zip_code) VALUES ($1, 'Alameda', 'C', 'ST', '11111111')",
    )
    .bind(created.id)
    .execute(&pool)
    .await
    .unwrap();

    let found = repo.find_by_uuid(created.uuid).await.unwrap().unwrap();
    assert_eq!(found.address.unwrap().street, "Alameda");
    assert_eq!(found.contacts.len(), 3);
    assert_eq!(found.contacts[2].kind, ContactKind::Whatsapp);

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_professional_without_address_reads_none() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let repo = PostgresProfessionalRepository::new(pool.clone());
    let created = repo.create(data("Dr. A")).await.unwrap();
    sqlx::query("DELETE FROM addresses WHERE professional_id = $1")
        .bind(created.id)
        .execute(&pool)
        .await
        .unwrap();

    let found = repo.find_by_uuid(created.uuid).await.unwrap().unwrap();
    assert!(found.address.is_none());

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_find_all_and_find_by_ids_order_by_social_name() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let repo = PostgresProfessionalRepository::new(pool.clone());
    let carla = repo.create(data("Carla")).await.unwrap();
    let ana = repo.create(data("Ana")).await.unwrap();
    repo.create(data("Bruno")).await.unwrap();

    let page = repo.find_all(2, 0).await.unwrap();
    let names: Vec<_> = page.iter().map(|p| p.social_name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Bruno"]);
    assert!(page.iter().all(|p| p.contacts.len() == 3));
    assert_eq!(repo.count().await.unwrap(), 3);

    let by_ids = repo.find_by_ids(&[carla.id, ana.id]).await.unwrap();
    let names: Vec<_> = by_ids.iter().map(|p| p.social_name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Carla"]);
    assert!(repo.find_by_ids(&[]).await.unwrap().is_empty());

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_appointment_update_keeps_unsent_fields() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let professionals = PostgresProfessionalRepository::new(pool.clone());
    let ana = professionals.create(data("Ana")).await.unwrap();
    let bruno = professionals.create(data("Bruno")).await.unwrap();
    let repo = PostgresAppointmentRepository::new(pool.clone());

    let created = repo
        .create(NewAppointment {
            date: datetime!(2025-06-01 09:00 UTC),
            professional_id: ana.id,
        })
        .await
        .unwrap();
    assert_eq!(created.professional_uuid, ana.uuid);

    let moved = repo
        .update(
            created.id,
            UpdateAppointment {
                date: None,
                professional_id: Some(bruno.id),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.date, datetime!(2025-06-01 09:00 UTC));
    assert_eq!(moved.professional_uuid, bruno.uuid);

    assert_eq!(repo.count(Some(ana.uuid)).await.unwrap(), 0);
    assert_eq!(repo.count(Some(bruno.uuid)).await.unwrap(), 1);
    assert_eq!(repo.count(None).await.unwrap(), 1);

    assert!(repo.delete(created.uuid).await.unwrap());
    assert!(!repo.delete(created.uuid).await.unwrap());

    common::cleanup_test_db(&pool).await;
}
