use super::*;

fn filled_form() -> RegisterFormState {
    RegisterFormState {
        open: true,
        name: "Updated Advertisement".to_owned(),
        kind: AdvertisementKind::Banner,
        start_date: "2023-01-01".to_owned(),
        end_date: "2023-02-01".to_owned(),
        ..RegisterFormState::default()
    }
}

fn edited_record() -> AdvertisementRecord {
    AdvertisementRecord {
        id: "-100".to_owned(),
        name: "Updated".to_owned(),
        kind: AdvertisementKind::Popup,
        start_date: "2023-01-01".to_owned(),
        end_date: "2023-02-01".to_owned(),
        media_url: String::new(),
        organization_id: "1".to_owned(),
    }
}

// =============================================================
// Modes
// =============================================================

#[test]
fn default_form_is_register_mode() {
    let form = RegisterFormState::default();
    assert_eq!(form.mode, FormMode::Register);
    assert!(form.committed.is_none());
    assert!(!form.open);
}

#[test]
fn for_edit_prefills_fields_from_record() {
    let form = RegisterFormState::for_edit(&edited_record());
    assert_eq!(form.mode, FormMode::Edit);
    assert_eq!(form.name, "Updated");
    assert_eq!(form.kind, AdvertisementKind::Popup);
    assert_eq!(form.start_date, "2023-01-01");
    assert_eq!(form.committed.as_ref().unwrap().id, "-100");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_form_passes_validation() {
    assert_eq!(filled_form().validate(), Ok(()));
}

#[test]
fn empty_name_fails_validation() {
    let mut form = filled_form();
    form.name = "   ".to_owned();
    assert!(form.validate().is_err());
}

#[test]
fn missing_dates_fail_validation() {
    let mut form = filled_form();
    form.end_date = String::new();
    assert!(form.validate().is_err());
}

#[test]
fn end_date_before_start_date_fails_validation() {
    let mut form = filled_form();
    form.start_date = "2023-02-01".to_owned();
    form.end_date = "2023-01-01".to_owned();
    assert_eq!(form.validate(), Err("End date must not precede start date".to_owned()));
}

#[test]
fn single_day_range_is_valid() {
    let mut form = filled_form();
    form.end_date.clone_from(&form.start_date);
    assert_eq!(form.validate(), Ok(()));
}

// =============================================================
// Variables
// =============================================================

#[test]
fn create_variables_carry_all_fields_for_organization() {
    let vars = filled_form().create_variables("1");
    assert_eq!(
        serde_json::to_value(&vars).unwrap(),
        serde_json::json!({
            "organizationId": "1",
            "name": "Updated Advertisement",
            "file": "",
            "type": "BANNER",
            "startDate": "2023-01-01",
            "endDate": "2023-02-01"
        })
    );
}

#[test]
fn create_variables_trim_the_name() {
    let mut form = filled_form();
    form.name = "  Spaced  ".to_owned();
    assert_eq!(form.create_variables("1").name, "Spaced");
}

#[test]
fn untouched_edit_form_submits_id_only_payload() {
    let form = RegisterFormState::for_edit(&edited_record());
    let vars = form.update_variables().unwrap();
    assert_eq!(serde_json::to_value(&vars).unwrap(), serde_json::json!({ "id": "-100" }));
}

#[test]
fn edited_fields_appear_in_update_payload() {
    let mut form = RegisterFormState::for_edit(&edited_record());
    form.kind = AdvertisementKind::Banner;
    let vars = form.update_variables().unwrap();
    assert_eq!(
        serde_json::to_value(&vars).unwrap(),
        serde_json::json!({ "id": "-100", "type": "BANNER" })
    );
}

#[test]
fn update_variables_require_edit_mode() {
    assert_eq!(filled_form().update_variables(), None);
}

// =============================================================
// Create resolution
// =============================================================

#[test]
fn confirmed_create_resets_form_and_reloads() {
    let mut form = filled_form();
    form.submitting = true;
    let effect = form.resolve_create(Ok(Some("1".to_owned())));
    assert_eq!(effect, Some(RegisterEffect::Reload));
    assert_eq!(form, RegisterFormState::default());
}

#[test]
fn malformed_create_response_does_not_reset_or_reload() {
    let mut form = filled_form();
    form.submitting = true;
    let effect = form.resolve_create(Ok(None));
    assert_eq!(effect, None);
    assert!(!form.submitting);
    // Fields survive so the user can retry.
    assert_eq!(form.name, "Updated Advertisement");
    assert!(form.open);
}

#[test]
fn rejected_create_keeps_fields_and_notifies() {
    let mut form = filled_form();
    form.submitting = true;
    let effect = form.resolve_create(Err("create failed".to_owned()));
    assert_eq!(effect, Some(RegisterEffect::NotifyError("create failed".to_owned())));
    assert_eq!(form.name, "Updated Advertisement");
}

// =============================================================
// Update resolution
// =============================================================

#[test]
fn confirmed_update_closes_form_and_reloads() {
    let mut form = RegisterFormState::for_edit(&edited_record());
    form.open = true;
    form.submitting = true;
    let effect = form.resolve_update(Ok(Some(edited_record())));
    assert_eq!(effect, Some(RegisterEffect::Reload));
    assert!(!form.open);
    assert!(!form.submitting);
}

#[test]
fn malformed_update_response_is_a_silent_no_op() {
    let mut form = RegisterFormState::for_edit(&edited_record());
    form.open = true;
    form.submitting = true;
    let effect = form.resolve_update(Ok(None));
    assert_eq!(effect, None);
    assert!(form.open);
    assert_eq!(form.name, "Updated");
}

#[test]
fn rejected_update_keeps_fields_and_notifies() {
    let mut form = RegisterFormState::for_edit(&edited_record());
    form.submitting = true;
    let effect = form.resolve_update(Err("update failed".to_owned()));
    assert_eq!(effect, Some(RegisterEffect::NotifyError("update failed".to_owned())));
    assert_eq!(form.name, "Updated");
}
