use atlan_core::{
    AnnouncementType, Asset, AssetPatch, CertificateStatus, EntityStatus, FieldChange, PatchError,
    PatchField, PatchValue, TermRef, TypeName,
};
use uuid::Uuid;

#[test]
fn updater_then_trim_to_required_round_trips_for_any_type() {
    for type_name in ["Database", "AuthPolicy", "MicroStrategyReport", "SomeFutureType"] {
        let updater = AssetPatch::updater(type_name, "default/x/1700000000/thing", "thing").unwrap();
        let trimmed = updater.trim_to_required();
        assert_eq!(trimmed, updater);
        assert!(trimmed.is_identity_only());
    }
}

#[test]
fn trim_to_required_drops_layered_changes() {
    let patch = AssetPatch::updater("Table", "qn", "orders")
        .unwrap()
        .with_certificate(CertificateStatus::Verified, Some("signed off"))
        .with_terms(vec![TermRef::by_guid(Uuid::new_v4())]);
    assert!(!patch.is_identity_only());

    let trimmed = patch.trim_to_required();
    assert!(trimmed.is_identity_only());
    assert_eq!(trimmed.qualified_name(), "qn");
    assert_eq!(trimmed.name(), "orders");
}

#[test]
fn asset_trim_to_required_matches_updater() {
    let mut asset = Asset::new(TypeName::new("Table").unwrap(), "qn", "orders");
    asset.description = Some("fact table".to_string());
    asset.owner_users.insert("jsmith".to_string());

    assert_eq!(
        asset.trim_to_required().unwrap(),
        AssetPatch::updater("Table", "qn", "orders").unwrap()
    );
}

#[test]
fn updater_lists_all_missing_identity_fields() {
    let err = AssetPatch::updater("Table", " ", "").unwrap_err();
    assert_eq!(
        err,
        PatchError::MissingRequiredParameters(vec!["qualifiedName", "name"])
    );
}

#[test]
fn single_character_certificate_message_is_dropped() {
    let patch = AssetPatch::updater("Table", "qn", "t")
        .unwrap()
        .with_certificate(CertificateStatus::Deprecated, Some("x"));
    assert_eq!(
        patch.change(PatchField::CertificateStatus),
        Some(&FieldChange::Set(PatchValue::Certificate(
            CertificateStatus::Deprecated
        )))
    );
    assert_eq!(patch.change(PatchField::CertificateStatusMessage), None);

    let empty = AssetPatch::updater("Table", "qn", "t")
        .unwrap()
        .with_certificate(CertificateStatus::Deprecated, Some(""));
    assert_eq!(empty.change(PatchField::CertificateStatusMessage), None);
}

#[test]
fn two_character_announcement_text_is_kept() {
    let patch = AssetPatch::updater("Table", "qn", "t")
        .unwrap()
        .with_announcement(AnnouncementType::Warning, Some("ok"), Some("!"));
    assert_eq!(
        patch.change(PatchField::AnnouncementTitle),
        Some(&FieldChange::Set(PatchValue::Text("ok".to_string())))
    );
    assert_eq!(patch.change(PatchField::AnnouncementMessage), None);
}

#[test]
fn empty_term_set_becomes_clear() {
    let patch = AssetPatch::updater("Table", "qn", "t")
        .unwrap()
        .with_terms(Vec::new());
    assert_eq!(patch.change(PatchField::Meanings), Some(&FieldChange::Clear));
    assert_eq!(patch.cleared_fields(), vec!["meanings"]);
}

#[test]
fn asset_serialization_uses_catalog_field_names() {
    let guid = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut asset = Asset::with_guid(
        guid,
        TypeName::new("Table").unwrap(),
        "default/snowflake/1700000000/SALES/PUBLIC/ORDERS",
        "ORDERS",
    );
    asset.certificate_status = Some(CertificateStatus::Verified);
    asset.announcement_type = Some(AnnouncementType::Issue);
    asset.meanings.push(TermRef::by_guid(guid));
    asset.set_attribute("rowCount", serde_json::json!(42));

    let json = serde_json::to_value(&asset).unwrap();
    assert_eq!(json["guid"], guid.to_string());
    assert_eq!(json["typeName"], "Table");
    assert_eq!(
        json["qualifiedName"],
        "default/snowflake/1700000000/SALES/PUBLIC/ORDERS"
    );
    assert_eq!(json["status"], "ACTIVE");
    assert_eq!(json["certificateStatus"], "VERIFIED");
    assert_eq!(json["announcementType"], "issue");
    assert_eq!(json["meanings"][0]["relationshipStatus"], "ACTIVE");
    assert_eq!(json["attributes"]["rowCount"], 42);
    assert!(json.get("description").is_none());

    let decoded: Asset = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, asset);
}

#[test]
fn deserialization_defaults_optional_collections() {
    let decoded: Asset = serde_json::from_str(
        r#"{
            "guid": "11111111-2222-4333-8444-555555555555",
            "typeName": "AuthPolicy",
            "qualifiedName": "persona/policy",
            "name": "policy"
        }"#,
    )
    .unwrap();
    assert_eq!(decoded.status, EntityStatus::Active);
    assert!(decoded.meanings.is_empty());
    assert!(decoded.atlan_tags.is_empty());
}

#[test]
fn deserialization_rejects_blank_type_name() {
    let result: Result<Asset, _> = serde_json::from_str(
        r#"{
            "guid": "11111111-2222-4333-8444-555555555555",
            "typeName": "  ",
            "qualifiedName": "qn",
            "name": "n"
        }"#,
    );
    assert!(result.is_err());
}
