use atlan_core::service::terms::{append_terms, remove_terms, replace_terms};
use atlan_core::{
    Asset, AtlanClient, AtlanError, EntityStatus, FieldChange, InMemoryTransport, PatchField,
    PatchValue, TermRef, TypeName,
};
use uuid::Uuid;

const QN: &str = "default/snowflake/1700000000/SALES/PUBLIC/ORDERS";

struct Fixture {
    transport: InMemoryTransport,
    a: TermRef,
    b: TermRef,
}

fn fixture_with_terms() -> Fixture {
    let transport = InMemoryTransport::new();
    let a = TermRef::by_guid(Uuid::new_v4());
    let b = TermRef::by_guid(Uuid::new_v4());
    let mut asset = Asset::new(TypeName::new("Table").unwrap(), QN, "ORDERS");
    asset.meanings = vec![a.clone(), b.clone()];
    transport.insert(asset).unwrap();
    Fixture { transport, a, b }
}

fn last_meanings_change(transport: &InMemoryTransport) -> FieldChange {
    let saves = transport.saves();
    let patch = &saves.last().expect("a save was sent").patches[0];
    patch
        .change(PatchField::Meanings)
        .cloned()
        .expect("meanings were part of the request")
}

#[test]
fn append_sends_union_of_existing_and_new_terms() {
    let fx = fixture_with_terms();
    let client = AtlanClient::with_defaults(&fx.transport);
    let c = TermRef::by_guid(Uuid::new_v4());

    let updated = append_terms(&client, "Table", QN, &[c.clone()])
        .unwrap()
        .unwrap();

    let expected = vec![fx.a.clone(), fx.b.clone(), c];
    assert_eq!(
        last_meanings_change(&fx.transport),
        FieldChange::Set(PatchValue::Terms(expected.clone()))
    );
    assert_eq!(updated.meanings, expected);
    assert_eq!(
        fx.transport.call_log(),
        vec!["retrieve_by_qualified_name", "save"]
    );
}

#[test]
fn append_skips_soft_deleted_links_and_duplicates() {
    let transport = InMemoryTransport::new();
    let live = TermRef::by_guid(Uuid::new_v4());
    let mut stale = TermRef::by_guid(Uuid::new_v4());
    stale.relationship_status = EntityStatus::Deleted;
    let mut asset = Asset::new(TypeName::new("Table").unwrap(), QN, "ORDERS");
    asset.meanings = vec![live.clone(), stale];
    transport.insert(asset).unwrap();
    let client = AtlanClient::with_defaults(&transport);

    append_terms(&client, "Table", QN, &[live.clone()]).unwrap();
    assert_eq!(
        last_meanings_change(&transport),
        FieldChange::Set(PatchValue::Terms(vec![live]))
    );
}

#[test]
fn append_accepts_terms_known_only_by_qualified_name() {
    let fx = fixture_with_terms();
    let client = AtlanClient::with_defaults(&fx.transport);
    let by_name = TermRef::by_qualified_name("revenue@finance-glossary");

    let updated = append_terms(&client, "Table", QN, &[by_name.clone()])
        .unwrap()
        .unwrap();
    assert_eq!(updated.meanings.len(), 3);
    assert_eq!(updated.meanings[2], by_name);
}

#[test]
fn append_rejects_terms_without_any_identity() {
    let fx = fixture_with_terms();
    let client = AtlanClient::with_defaults(&fx.transport);
    let anonymous = TermRef {
        guid: None,
        qualified_name: None,
        relationship_status: EntityStatus::Active,
    };

    let err = append_terms(&client, "Table", QN, &[anonymous]).unwrap_err();
    assert!(matches!(
        err,
        AtlanError::InvalidRequest {
            field: "meanings",
            ..
        }
    ));
}

#[test]
fn remove_by_guid_keeps_other_terms() {
    let fx = fixture_with_terms();
    let client = AtlanClient::with_defaults(&fx.transport);

    let updated = remove_terms(&client, "Table", QN, &[fx.b.clone()])
        .unwrap()
        .unwrap();
    assert_eq!(
        last_meanings_change(&fx.transport),
        FieldChange::Set(PatchValue::Terms(vec![fx.a.clone()]))
    );
    assert_eq!(updated.meanings, vec![fx.a]);
}

#[test]
fn removing_every_term_sends_clear_instead_of_empty_set() {
    let fx = fixture_with_terms();
    let client = AtlanClient::with_defaults(&fx.transport);

    let updated = remove_terms(&client, "Table", QN, &[fx.a.clone(), fx.b.clone()])
        .unwrap()
        .unwrap();
    assert_eq!(last_meanings_change(&fx.transport), FieldChange::Clear);
    assert!(updated.meanings.is_empty());
}

#[test]
fn removal_without_guid_is_an_invalid_request_not_a_no_op() {
    let fx = fixture_with_terms();
    let client = AtlanClient::with_defaults(&fx.transport);

    let err = remove_terms(
        &client,
        "Table",
        QN,
        &[TermRef::by_qualified_name("revenue@finance-glossary")],
    )
    .unwrap_err();
    assert!(matches!(err, AtlanError::InvalidRequest { field: "guid", .. }));
    assert_eq!(err.code(), "ATLAN-400-002");
    assert!(fx.transport.call_log().is_empty());
}

#[test]
fn reconciliation_on_missing_asset_is_not_found() {
    let transport = InMemoryTransport::new();
    let client = AtlanClient::with_defaults(&transport);

    let err = append_terms(&client, "Table", QN, &[TermRef::by_guid(Uuid::new_v4())]).unwrap_err();
    match err {
        AtlanError::NotFoundByQualifiedName {
            type_name,
            qualified_name,
        } => {
            assert_eq!(type_name.as_str(), "Table");
            assert_eq!(qualified_name, QN);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(transport.saves().is_empty());
}

#[test]
fn replace_with_empty_set_clears_without_fetching() {
    let fx = fixture_with_terms();
    let client = AtlanClient::with_defaults(&fx.transport);

    let updated = replace_terms(&client, "Table", QN, "ORDERS", &[])
        .unwrap()
        .unwrap();
    assert!(updated.meanings.is_empty());
    assert_eq!(fx.transport.call_log(), vec!["save"]);
    assert_eq!(last_meanings_change(&fx.transport), FieldChange::Clear);
}

#[test]
fn replace_overwrites_existing_terms() {
    let fx = fixture_with_terms();
    let client = AtlanClient::with_defaults(&fx.transport);
    let c = TermRef::by_guid(Uuid::new_v4());

    let updated = replace_terms(&client, "Table", QN, "ORDERS", &[c.clone(), c.clone()])
        .unwrap()
        .unwrap();
    assert_eq!(updated.meanings, vec![c]);
}

#[test]
fn append_by_qualified_name_of_already_linked_term_sends_it_once() {
    let transport = InMemoryTransport::new();
    let linked = TermRef {
        qualified_name: Some("revenue@finance".to_string()),
        ..TermRef::by_guid(Uuid::new_v4())
    };
    let mut asset = Asset::new(TypeName::new("Table").unwrap(), QN, "ORDERS");
    asset.meanings = vec![linked.clone()];
    transport.insert(asset).unwrap();
    let client = AtlanClient::with_defaults(&transport);

    append_terms(
        &client,
        "Table",
        QN,
        &[TermRef::by_qualified_name("revenue@finance")],
    )
    .unwrap();
    assert_eq!(
        last_meanings_change(&transport),
        FieldChange::Set(PatchValue::Terms(vec![linked]))
    );
}
