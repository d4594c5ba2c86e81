use atlan_core::service::lifecycle::{delete_by_guid, purge_by_guid, restore};
use atlan_core::service::lookup::retrieve_by_guid;
use atlan_core::{
    Asset, AtlanClient, AtlanError, EntityStatus, InMemoryTransport, PatchField, TypeName,
};
use uuid::Uuid;

const QN: &str = "persona/finance/policy-read";

fn policy() -> Asset {
    Asset::new(TypeName::new("AuthPolicy").unwrap(), QN, "policy-read")
}

#[test]
fn soft_delete_then_restore() {
    let transport = InMemoryTransport::new();
    let guid = transport.insert(policy()).unwrap();
    let client = AtlanClient::with_defaults(&transport);

    let response = delete_by_guid(&client, guid).unwrap();
    assert_eq!(response.deleted.len(), 1);
    let tombstone = retrieve_by_guid(&client, guid, None).unwrap();
    assert_eq!(tombstone.status, EntityStatus::Deleted);

    assert!(restore(&client, "AuthPolicy", QN).unwrap());
    assert!(transport.get(guid).unwrap().is_active());
    let sent = &transport.saves()[0].patches[0];
    assert!(sent.change(PatchField::Status).is_some());
}

#[test]
fn restore_of_active_asset_saves_nothing() {
    let transport = InMemoryTransport::new();
    transport.insert(policy()).unwrap();
    let client = AtlanClient::with_defaults(&transport);

    assert!(!restore(&client, "AuthPolicy", QN).unwrap());
    assert!(transport.saves().is_empty());
}

#[test]
fn deleting_twice_reports_not_found() {
    let transport = InMemoryTransport::new();
    let guid = transport.insert(policy()).unwrap();
    let client = AtlanClient::with_defaults(&transport);

    delete_by_guid(&client, guid).unwrap();
    let err = delete_by_guid(&client, guid).unwrap_err();
    assert_eq!(
        err,
        AtlanError::NotFoundByGuid {
            guid,
            expected_type: None,
        }
    );
}

#[test]
fn purge_removes_the_asset() {
    let transport = InMemoryTransport::new();
    let guid = transport.insert(policy()).unwrap();
    let client = AtlanClient::with_defaults(&transport);

    purge_by_guid(&client, guid).unwrap();
    assert!(transport.get(guid).is_none());
    assert!(retrieve_by_guid(&client, guid, None)
        .unwrap_err()
        .is_not_found());
    assert!(purge_by_guid(&client, Uuid::new_v4()).is_err());
}
